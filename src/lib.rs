/*!
 * projdump - Dump a project's directory tree and file contents to one text file
 *
 * This library walks a directory tree, skips well-known noise (version
 * control, dependency caches, build outputs, lockfiles) and writes an
 * indented tree listing with the text of every file inlined beneath it.
 */

pub mod config;
pub mod dumper;
pub mod error;
pub mod report;
pub mod scanner;
pub mod types;
pub mod utils;
pub mod writer;


// Re-export main components for easier access
pub use config::{Args, Config};
pub use dumper::{dump, Dumper};
pub use error::{DumpError, Result};
pub use report::{DumpReport, Reporter};
pub use scanner::Scanner;
pub use types::{DirectoryListing, DumpStatistics, FileContent, FileReportInfo};
pub use writer::TreeWriter;

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
