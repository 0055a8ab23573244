/*!
 * Directory listing and file content reading
 */

use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::config::Config;
use crate::types::{DirectoryListing, FileContent};

/// Lists directories and reads files according to the exclusion sets
pub struct Scanner {
    /// Scanner configuration
    config: Config,
    /// Canonical path of the output file, once it exists
    output_path: Option<PathBuf>,
}

impl Scanner {
    /// Create a new scanner
    pub fn new(config: Config) -> Self {
        Self {
            config,
            output_path: None,
        }
    }

    /// Treat the file at `path` as the output so it is never dumped into itself
    pub fn set_output_path(&mut self, path: PathBuf) {
        self.output_path = Some(path);
    }

    /// List the immediate entries of a directory.
    ///
    /// Excluded directory names are dropped here, before the caller ever sees
    /// them, so an excluded subtree is never opened. Symbolic links to
    /// directories are neither listed nor followed.
    pub fn list_directory(&self, path: &Path) -> io::Result<DirectoryListing> {
        let mut listing = DirectoryListing::default();

        let walker = WalkDir::new(path)
            .min_depth(1)
            .max_depth(1)
            .follow_links(false)
            .sort_by_file_name();

        for entry in walker {
            let entry = entry?;
            let name = entry.file_name().to_os_string();
            let file_type = entry.file_type();

            if file_type.is_dir() {
                if self.is_excluded_directory(&name) {
                    debug!(directory = %entry.path().display(), "pruning excluded directory");
                    listing.pruned += 1;
                } else {
                    listing.directories.push(name);
                }
            } else if file_type.is_symlink() && entry.path().is_dir() {
                debug!(link = %entry.path().display(), "not following directory link");
            } else {
                listing.files.push(name);
            }
        }

        Ok(listing)
    }

    /// Check if a directory name is in the exclusion set
    pub fn is_excluded_directory(&self, name: &OsStr) -> bool {
        self.config
            .directory_exclusions
            .contains(name.to_string_lossy().as_ref())
    }

    /// Check if a file should be left out of the dump
    pub fn is_excluded_file(&self, name: &OsStr, path: &Path) -> bool {
        if self
            .config
            .file_exclusions
            .contains(name.to_string_lossy().as_ref())
        {
            return true;
        }

        // Don't dump the output file into itself
        match &self.output_path {
            Some(output) => path == output.as_path(),
            None => false,
        }
    }

    /// Read the whole file as UTF-8 text
    pub fn read_content(&self, path: &Path) -> FileContent {
        let metadata = match fs::metadata(path) {
            Ok(metadata) => metadata,
            Err(e) => return self.unreadable(path, e.to_string()),
        };

        // FIFOs, sockets and devices could block or never end
        if !metadata.is_file() {
            return self.unreadable(path, "not a regular file".to_string());
        }

        match fs::read_to_string(path) {
            Ok(text) => FileContent::Text(text),
            Err(e) => self.unreadable(path, e.to_string()),
        }
    }

    fn unreadable(&self, path: &Path, reason: String) -> FileContent {
        warn!(file = %path.display(), %reason, "could not read file");
        FileContent::Unreadable(reason)
    }
}
