/*!
 * Project dumper: walks the tree and writes the snapshot
 */

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use indicatif::ProgressBar;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::{DumpError, Result};
use crate::scanner::Scanner;
use crate::types::DumpStatistics;
use crate::utils::truncate_left;
use crate::writer::TreeWriter;

/// A directory waiting to be visited
struct PendingDirectory {
    /// Absolute path of the directory
    path: PathBuf,
    /// Path relative to the root, used for reporting
    rel_path: PathBuf,
    /// Nesting depth, 0 at the root
    depth: usize,
}

/// Dumps a directory tree and its file contents into a single text file
pub struct Dumper {
    /// Dumper configuration
    config: Config,
    /// Progress bar
    pub progress: Arc<ProgressBar>,
}

impl Dumper {
    /// Create a new dumper with a hidden progress bar
    pub fn new(config: Config) -> Self {
        Self {
            config,
            progress: Arc::new(ProgressBar::hidden()),
        }
    }

    /// Report progress through the given bar
    pub fn with_progress(mut self, progress: Arc<ProgressBar>) -> Self {
        self.progress = progress;
        self
    }

    /// Run the dump.
    ///
    /// The output file is opened first and the root is resolved next; failure
    /// of either aborts the run. Unreadable files and subdirectories are
    /// reported inline and do not stop the traversal.
    pub fn dump(&self) -> Result<DumpStatistics> {
        let output_path = &self.config.output;
        let file = File::create(output_path).map_err(|e| DumpError::output(output_path, e))?;

        let root = fs::canonicalize(&self.config.root)
            .map_err(|e| DumpError::root(&self.config.root, e))?;

        let mut scanner = Scanner::new(self.config.clone());
        if let Ok(canonical_output) = fs::canonicalize(output_path) {
            scanner.set_output_path(canonical_output);
        }

        info!(root = %root.display(), output = %output_path.display(), "dumping project");

        let mut writer = TreeWriter::new(BufWriter::new(file));
        let stats = self.walk(&root, &scanner, &mut writer)?;
        writer
            .finish()
            .map_err(|e| DumpError::output(output_path, e))?;

        info!(
            directories = stats.directories,
            files = stats.files_dumped,
            unreadable = stats.files_unreadable,
            "dump complete"
        );
        Ok(stats)
    }

    /// Pre-order, depth-first traversal with an explicit worklist
    fn walk<W: Write>(
        &self,
        root: &Path,
        scanner: &Scanner,
        writer: &mut TreeWriter<W>,
    ) -> Result<DumpStatistics> {
        let mut stats = DumpStatistics::default();
        let mut pending = vec![PendingDirectory {
            path: root.to_path_buf(),
            rel_path: PathBuf::new(),
            depth: 0,
        }];

        while let Some(dir) = pending.pop() {
            let name = directory_name(&dir.path);

            // Only the root is required to be listable
            let listing = match scanner.list_directory(&dir.path) {
                Err(e) if dir.depth == 0 => return Err(DumpError::root(root, e)),
                other => other,
            };

            self.write(writer, |w| w.write_directory_header(dir.depth, &name))?;
            stats.directories += 1;
            debug!(directory = %dir.path.display(), depth = dir.depth, "visiting");

            let listing = match listing {
                Ok(listing) => listing,
                Err(e) => {
                    warn!(directory = %dir.path.display(), error = %e, "could not list directory");
                    let reason = e.to_string();
                    self.write(writer, |w| {
                        w.write_directory_error(dir.depth + 1, &name, &reason)
                    })?;
                    continue;
                }
            };
            stats.directories_pruned += listing.pruned;

            for raw_name in &listing.files {
                let path = dir.path.join(raw_name);
                if scanner.is_excluded_file(raw_name, &path) {
                    stats.files_skipped += 1;
                    continue;
                }

                let lossy = raw_name.to_string_lossy();
                let file_name: &str = &lossy;

                self.progress.inc(1);
                self.progress
                    .set_message(format!("Current file: {}", truncate_left(file_name, 40)));

                self.write(writer, |w| w.write_file_entry(dir.depth + 1, file_name))?;
                let content = scanner.read_content(&path);
                self.write(writer, |w| w.write_content(dir.depth + 1, file_name, &content))?;

                let rel_path = dir.rel_path.join(raw_name);
                stats.record_file(rel_path.to_string_lossy().to_string(), &content);
            }

            // Reversed so the first name is popped first
            for sub in listing.directories.iter().rev() {
                pending.push(PendingDirectory {
                    path: dir.path.join(sub),
                    rel_path: dir.rel_path.join(sub),
                    depth: dir.depth + 1,
                });
            }
        }

        Ok(stats)
    }

    /// Run a write against the output, tagging failures with the output path
    fn write<W, F>(&self, writer: &mut TreeWriter<W>, f: F) -> Result<()>
    where
        W: Write,
        F: FnOnce(&mut TreeWriter<W>) -> std::io::Result<()>,
    {
        f(writer).map_err(|e| DumpError::output(&self.config.output, e))
    }
}

/// Dump `root` into `output` with the default exclusion sets
pub fn dump(root: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Result<DumpStatistics> {
    let config = Config::new(root, output);
    config.validate()?;
    Dumper::new(config).dump()
}

/// Base name of a directory, falling back to the full path for roots like `/`
fn directory_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string())
}
