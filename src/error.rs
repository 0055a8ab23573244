//! Global error handling for projdump
//!
//! Only run-level failures live here. A file whose content cannot be read is
//! not an error of the dump; it is rendered inline as
//! [`FileContent::Unreadable`](crate::types::FileContent::Unreadable).

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Global error type for projdump operations
#[derive(Error, Debug)]
pub enum DumpError {
    /// The root directory could not be resolved or listed
    #[error("Cannot read root directory {}: {source}", .path.display())]
    RootUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The output file could not be created or written
    #[error("Cannot write output file {}: {source}", .path.display())]
    OutputUnwritable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Path not found
    #[error("Path not found: {0}")]
    PathNotFound(String),
}

/// Specialized Result type for projdump operations
pub type Result<T> = std::result::Result<T, DumpError>;

/// Creates a DumpError with a formatted message
#[macro_export]
macro_rules! error {
    ($error_type:ident, $($arg:tt)*) => {
        $crate::error::DumpError::$error_type(format!($($arg)*))
    };
}

/// Returns an error result with a formatted message
#[macro_export]
macro_rules! bail {
    ($error_type:ident, $($arg:tt)*) => {
        return Err($crate::error!($error_type, $($arg)*))
    };
}

/// Ensures a condition is true, otherwise returns an error
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $error_type:ident, $($arg:tt)*) => {
        if !($cond) {
            $crate::bail!($error_type, $($arg)*)
        }
    };
}

impl DumpError {
    /// Wrap an I/O failure on the output sink
    pub(crate) fn output(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::OutputUnwritable {
            path: path.into(),
            source,
        }
    }

    /// Wrap an I/O failure on the root directory
    pub(crate) fn root(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::RootUnreadable {
            path: path.into(),
            source,
        }
    }
}

// The binary's main returns io::Result
impl From<DumpError> for io::Error {
    fn from(err: DumpError) -> Self {
        let kind = match &err {
            DumpError::RootUnreadable { source, .. }
            | DumpError::OutputUnwritable { source, .. } => source.kind(),
            DumpError::PathNotFound(_) => io::ErrorKind::NotFound,
            DumpError::Config(_) => io::ErrorKind::InvalidInput,
        };
        io::Error::new(kind, err.to_string())
    }
}
