/*!
 * Text tree writer for projdump
 *
 * Output layout, with `<indent>` being `"│   "` repeated once per level:
 *
 * ```text
 * <indent>├─ <dirname>/
 * <indent+1>├─ <filename>
 *
 * <indent+1># --- Begin: <filename> ---
 * <raw file content>
 * <indent+1># --- End: <filename> ---
 *
 * ```
 */

use std::io::{self, Write};

use crate::types::FileContent;

/// One level of indentation
pub const INDENT_UNIT: &str = "│   ";

/// Prefix of every directory and file entry
pub const BRANCH: &str = "├─ ";

/// Indentation for the given nesting depth
pub fn indent(depth: usize) -> String {
    INDENT_UNIT.repeat(depth)
}

/// Writes the tree listing and content blocks to a sink
pub struct TreeWriter<W: Write> {
    out: W,
}

impl<W: Write> TreeWriter<W> {
    /// Create a new tree writer
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Write the header line of a directory at `depth`
    pub fn write_directory_header(&mut self, depth: usize, name: &str) -> io::Result<()> {
        writeln!(self.out, "{}{}{}/", indent(depth), BRANCH, name)
    }

    /// Write the entry line of a file at `depth`
    pub fn write_file_entry(&mut self, depth: usize, name: &str) -> io::Result<()> {
        writeln!(self.out, "{}{}{}", indent(depth), BRANCH, name)
    }

    /// Write a file's content block, or its read failure note
    pub fn write_content(
        &mut self,
        depth: usize,
        name: &str,
        content: &FileContent,
    ) -> io::Result<()> {
        let pad = indent(depth);
        match content {
            FileContent::Text(text) => {
                write!(self.out, "\n{}# --- Begin: {} ---\n", pad, name)?;
                self.out.write_all(text.as_bytes())?;
                write!(self.out, "\n{}# --- End: {} ---\n\n", pad, name)
            }
            FileContent::Unreadable(reason) => {
                writeln!(self.out, "{}[Could not read {}: {}]", pad, name, reason)
            }
        }
    }

    /// Write a note for a subdirectory whose entries could not be listed
    pub fn write_directory_error(
        &mut self,
        depth: usize,
        name: &str,
        reason: &str,
    ) -> io::Result<()> {
        writeln!(self.out, "{}[Could not read {}/: {}]", indent(depth), name, reason)
    }

    /// Flush buffered output and hand back the sink
    pub fn finish(mut self) -> io::Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}
