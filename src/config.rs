/*!
 * Configuration handling for projdump
 */

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use clap::Parser;

use crate::ensure;
use crate::error::Result;
use crate::utils::{DEFAULT_DIRECTORY_EXCLUSIONS, DEFAULT_FILE_EXCLUSIONS, DEFAULT_OUTPUT};

/// Command-line arguments for projdump
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "projdump",
    version = env!("CARGO_PKG_VERSION"),
    about = "Dump a project's directory tree and file contents into a single text file",
    long_about = "Walks a directory tree, skipping version control, dependency caches and build outputs, and writes an indented tree listing with the text of every file inlined beneath its entry. Entries are sorted by name, and the root header shows the resolved directory name, so `.` is listed as the current directory's real name."
)]
pub struct Args {
    /// Root directory to dump
    #[clap(default_value = ".")]
    pub root_dir: String,

    /// Output text file (created or truncated)
    #[clap(default_value = DEFAULT_OUTPUT)]
    pub output_file: String,
}

/// Run configuration for a single dump
#[derive(Clone, Debug)]
pub struct Config {
    /// Root directory to traverse
    pub root: PathBuf,

    /// Output file path
    pub output: PathBuf,

    /// Directory names that are never entered
    pub directory_exclusions: BTreeSet<String>,

    /// File names that are never listed
    pub file_exclusions: BTreeSet<String>,
}

impl Config {
    /// Create a configuration with the default exclusion sets
    pub fn new(root: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            output: output.into(),
            directory_exclusions: DEFAULT_DIRECTORY_EXCLUSIONS.clone(),
            file_exclusions: DEFAULT_FILE_EXCLUSIONS.clone(),
        }
    }

    /// Create configuration from command-line arguments
    pub fn from_args(args: Args) -> Self {
        Self::new(args.root_dir, args.output_file)
    }

    /// Replace the directory exclusion set
    pub fn with_directory_exclusions<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.directory_exclusions = names.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the file exclusion set
    pub fn with_file_exclusions<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.file_exclusions = names.into_iter().map(Into::into).collect();
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.root.is_dir(),
            PathNotFound,
            "Root directory not found: {}",
            self.root.display()
        );

        // An empty parent means the current directory
        if let Some(parent) = self.output.parent() {
            ensure!(
                parent == Path::new("") || parent.is_dir(),
                PathNotFound,
                "Output directory not found: {}",
                parent.display()
            );
        }

        ensure!(
            !self.output.is_dir(),
            Config,
            "Output path is a directory: {}",
            self.output.display()
        );

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(".", DEFAULT_OUTPUT)
    }
}
