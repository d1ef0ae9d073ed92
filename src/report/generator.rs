//! Text layout of the combined output document.
//!
//! The aggregator writes these pieces in order; nothing here touches the
//! filesystem.

use crate::models::EntryWarning;
use std::path::Path;

/// Width of the rule under the document header.
const HEADER_RULE_WIDTH: usize = 50;

/// Width of the `=` runs flanking each `FILE:` header.
const FILE_DELIMITER_WIDTH: usize = 20;

/// Width of the separator after each file's content.
const FILE_SEPARATOR_WIDTH: usize = 60;

fn rule(width: usize) -> String {
    "=".repeat(width)
}

/// Document title, source directory and file count.
pub fn document_header(extension: &str, working_dir: &Path, total_files: usize) -> String {
    let mut header = String::new();

    header.push_str(&format!(
        "=== EXTRACTED {} FILES ===\n",
        extension.to_uppercase()
    ));
    header.push_str(&format!("Generated from: {}\n", working_dir.display()));
    header.push_str(&format!("Total files: {}\n", total_files));
    header.push_str(&rule(HEADER_RULE_WIDTH));
    header.push_str("\n\n");

    header
}

/// Header line introducing one file.
pub fn file_header(relative_path: &str) -> String {
    let delimiter = rule(FILE_DELIMITER_WIDTH);
    format!("{delimiter} FILE: {relative_path} {delimiter}\n")
}

/// Separator written after a file's verbatim content.
pub fn file_separator() -> String {
    format!("\n\n{}\n\n", rule(FILE_SEPARATOR_WIDTH))
}

/// Replacement for the content of a file that could not be read.
pub fn warning_block(warning: &EntryWarning<'_>) -> String {
    format!("ERROR: {}\n\n", warning)
}
