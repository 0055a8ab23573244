/*!
 * Reporting functionality for projdump
 *
 * Renders an end-of-run summary of a dump as console tables using the
 * tabled library. The report goes to the terminal, never into the dump.
 */

use std::path::MAIN_SEPARATOR;
use std::time::Duration;

use tabled::{
    settings::{object::Columns, Alignment, Modify, Padding, Style},
    Table, Tabled,
};

use crate::types::DumpStatistics;
use crate::utils::{format_file_size, truncate_left};

/// Largest-files table lists every file up to this many entries
const ALL_FILES_LIMIT: usize = 15;

/// Number of files shown once the limit is exceeded
const TOP_FILES: usize = 10;

/// Summary of a finished dump
#[derive(Debug, Clone)]
pub struct DumpReport {
    /// Output file path
    pub output_file: String,
    /// Time taken to dump
    pub duration: Duration,
    /// Counters collected during the dump
    pub statistics: DumpStatistics,
}

/// Report generator for dump results
#[derive(Debug, Default)]
pub struct Reporter;

impl Reporter {
    /// Create a new reporter
    pub fn new() -> Self {
        Self
    }

    /// Format a number with human-readable units
    fn format_number(&self, num: usize) -> String {
        if num >= 1_000_000 {
            format!("{:.1}M", num as f64 / 1_000_000.0)
        } else if num >= 1_000 {
            format!("{:.1}K", num as f64 / 1_000.0)
        } else {
            num.to_string()
        }
    }

    /// Print the report to stdout
    pub fn print_report(&self, report: &DumpReport) {
        println!("\n{}", self.generate_report(report));
    }

    /// Generate the full report text
    pub fn generate_report(&self, report: &DumpReport) -> String {
        let stats = &report.statistics;
        let summary = format!("✅  DUMP COMPLETE\n{}", self.create_summary_table(report));

        if stats.file_details.is_empty() {
            return summary;
        }

        let files_title = if stats.file_details.len() > ALL_FILES_LIMIT {
            format!("📋  TOP {} LARGEST FILES", TOP_FILES)
        } else {
            "📋  DUMPED FILES".to_string()
        };

        format!(
            "{}\n{}\n\n{}",
            files_title,
            self.create_files_table(stats),
            summary
        )
    }

    fn create_summary_table(&self, report: &DumpReport) -> String {
        #[derive(Tabled)]
        struct SummaryRow {
            #[tabled(rename = "Metric")]
            key: &'static str,

            #[tabled(rename = "Value")]
            value: String,
        }

        let stats = &report.statistics;
        let rows = vec![
            SummaryRow {
                key: "📂 Output File",
                value: report.output_file.clone(),
            },
            SummaryRow {
                key: "⏱️ Process Time",
                value: format!("{:.4?}", report.duration),
            },
            SummaryRow {
                key: "🗂️ Directories",
                value: format!(
                    "{} ({} pruned)",
                    self.format_number(stats.directories),
                    self.format_number(stats.directories_pruned)
                ),
            },
            SummaryRow {
                key: "📄 Files Dumped",
                value: self.format_number(stats.files_dumped),
            },
            SummaryRow {
                key: "⚠️ Unreadable Files",
                value: self.format_number(stats.files_unreadable),
            },
            SummaryRow {
                key: "🚫 Excluded Files",
                value: self.format_number(stats.files_skipped),
            },
            SummaryRow {
                key: "📝 Total Lines",
                value: self.format_number(stats.total_lines),
            },
            SummaryRow {
                key: "📦 Content Size",
                value: format_file_size(stats.total_bytes as u64),
            },
        ];

        self.style(Table::new(rows))
    }

    fn create_files_table(&self, stats: &DumpStatistics) -> String {
        #[derive(Tabled)]
        struct FileRow {
            #[tabled(rename = "File Path")]
            path: String,

            #[tabled(rename = "Lines")]
            lines: String,

            #[tabled(rename = "Size")]
            size: String,
        }

        // Largest first, ties broken by path so the table is stable
        let mut files: Vec<_> = stats.file_details.iter().collect();
        files.sort_by(|(pa, a), (pb, b)| b.bytes.cmp(&a.bytes).then_with(|| pa.cmp(pb)));
        if files.len() > ALL_FILES_LIMIT {
            files.truncate(TOP_FILES);
        }

        let rows: Vec<FileRow> = files
            .into_iter()
            .map(|(path, info)| FileRow {
                path: self.format_path(path, 60),
                lines: self.format_number(info.lines),
                size: format_file_size(info.bytes as u64),
            })
            .collect();

        self.style(Table::new(rows))
    }

    /// Shorten a relative path, keeping as many trailing segments as fit
    fn format_path(&self, path: &str, max_len: usize) -> String {
        if path.len() <= max_len {
            return path.to_string();
        }

        let mut kept = Vec::new();
        let mut len = 3; // "..."
        for part in path.rsplit(MAIN_SEPARATOR) {
            if len + part.len() + 1 > max_len {
                break;
            }
            len += part.len() + 1;
            kept.push(part);
        }

        // A single oversized segment
        if kept.is_empty() {
            return truncate_left(path, max_len);
        }

        kept.reverse();
        let sep = MAIN_SEPARATOR.to_string();
        format!("...{}{}", sep, kept.join(sep.as_str()))
    }

    fn style(&self, mut table: Table) -> String {
        table
            .with(Style::rounded())
            .with(Padding::new(1, 1, 0, 0))
            .with(Modify::new(Columns::new(..)).with(Alignment::left()));

        table.to_string()
    }
}
