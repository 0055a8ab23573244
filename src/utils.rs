/*!
 * Utility functions and default exclusion sets for projdump
 */

use std::collections::BTreeSet;

use once_cell::sync::Lazy;

/// Name of the tool's own binary, excluded so a dump never lists itself
pub const SELF_NAME: &str = env!("CARGO_PKG_NAME");

/// Default output file name
pub const DEFAULT_OUTPUT: &str = "project.txt";

/// Directory names that are never entered
pub static DEFAULT_DIRECTORY_EXCLUSIONS: Lazy<BTreeSet<String>> = Lazy::new(|| {
    [
        // Version Control
        ".git",
        // Dependencies
        "node_modules",
        "venv",
        // Python
        "__pycache__",
        ".mypy_cache",
        // IDEs & Editors
        ".idea",
        ".vscode",
        // Build & Dist
        "dist",
        "build",
    ]
    .into_iter()
    .map(String::from)
    .collect()
});

/// File names that are never listed
pub static DEFAULT_FILE_EXCLUSIONS: Lazy<BTreeSet<String>> = Lazy::new(|| {
    let mut names: BTreeSet<String> = [
        // Lockfiles
        "package-lock.json",
        "yarn.lock",
        // OS Files
        ".DS_Store",
    ]
    .into_iter()
    .map(String::from)
    .collect();

    names.insert(SELF_NAME.to_string());
    names.insert(format!("{}.exe", SELF_NAME));
    names
});

/// Format a human-readable file size
pub fn format_file_size(size: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if size >= GB {
        format!("{:.2} GB", size as f64 / GB as f64)
    } else if size >= MB {
        format!("{:.2} MB", size as f64 / MB as f64)
    } else if size >= KB {
        format!("{:.2} KB", size as f64 / KB as f64)
    } else {
        format!("{} bytes", size)
    }
}

/// Shorten a name for single-line display, keeping its tail
pub fn truncate_left(name: &str, max_chars: usize) -> String {
    let count = name.chars().count();
    if count <= max_chars {
        return name.to_string();
    }

    let keep = max_chars.saturating_sub(3);
    let tail: String = name.chars().skip(count - keep).collect();
    format!("...{}", tail)
}
