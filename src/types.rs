/*!
 * Core types and data structures for projdump
 */

use std::collections::HashMap;
use std::ffi::OsString;

/// Outcome of reading one file's content
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileContent {
    /// The whole file, decoded as UTF-8
    Text(String),
    /// Description of why the content could not be read
    Unreadable(String),
}

impl FileContent {
    /// Whether the content was read successfully
    pub fn is_text(&self) -> bool {
        matches!(self, FileContent::Text(_))
    }
}

/// Immediate entries of one directory, with exclusions already applied.
///
/// Names are kept as the filesystem reports them so that non-UTF-8 names
/// still join back into paths that exist.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryListing {
    /// Subdirectory names to descend into, sorted
    pub directories: Vec<OsString>,
    /// File names, sorted; file exclusions are applied by the dumper
    pub files: Vec<OsString>,
    /// Number of subdirectories dropped by the directory exclusion set
    pub pruned: usize,
}

/// Information about a dumped file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileReportInfo {
    /// Number of lines in the file
    pub lines: usize,
    /// Size of the inlined content in bytes
    pub bytes: usize,
}

/// Counters collected over a single dump
#[derive(Debug, Clone, Default)]
pub struct DumpStatistics {
    /// Directory header lines written
    pub directories: usize,
    /// Files whose content was inlined
    pub files_dumped: usize,
    /// Files reported with a read failure
    pub files_unreadable: usize,
    /// Files left out by the file exclusion set
    pub files_skipped: usize,
    /// Subdirectories never entered because of the directory exclusion set
    pub directories_pruned: usize,
    /// Total number of lines inlined
    pub total_lines: usize,
    /// Total bytes of content inlined
    pub total_bytes: usize,
    /// Details for each dumped file, keyed by path relative to the root
    pub file_details: HashMap<String, FileReportInfo>,
}

impl DumpStatistics {
    /// Record the outcome of one listed file
    pub fn record_file(&mut self, rel_path: String, content: &FileContent) {
        match content {
            FileContent::Text(text) => {
                let info = FileReportInfo {
                    lines: text.lines().count(),
                    bytes: text.len(),
                };
                self.files_dumped += 1;
                self.total_lines += info.lines;
                self.total_bytes += info.bytes;
                self.file_details.insert(rel_path, info);
            }
            FileContent::Unreadable(_) => self.files_unreadable += 1,
        }
    }
}
