//! Data models for an extraction run.
//!
//! Everything here is transient: entries are discovered, consumed once by the
//! aggregator and dropped. The only thing that outlives the run is the
//! combined output file.

use std::fmt;
use std::path::PathBuf;

/// A discovered file that will be copied into the output document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Absolute path used to open the file.
    pub path: PathBuf,
    /// Path relative to the working directory, shown in headers.
    pub relative_path: String,
}

/// Why a single entry could not be copied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadFailure {
    /// The bytes are not valid UTF-8.
    Encoding,
    /// Any other I/O failure, with the error text.
    Io(String),
}

/// Result of reading one entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryOutcome {
    /// Full decoded text of the file.
    Content(String),
    /// The file was skipped; its block carries a warning instead.
    Failed(ReadFailure),
}

/// A warning about one entry, shared by the console and the output document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryWarning<'a> {
    pub relative_path: &'a str,
    pub failure: &'a ReadFailure,
}

impl fmt::Display for EntryWarning<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.failure {
            ReadFailure::Encoding => write!(
                f,
                "Warning: Could not read {} (encoding issue)",
                self.relative_path
            ),
            ReadFailure::Io(err) => {
                write!(f, "Warning: Error reading {}: {}", self.relative_path, err)
            }
        }
    }
}

/// Totals for a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractSummary {
    /// Where the combined document was written.
    pub output_path: PathBuf,
    /// Number of entries discovered (and attempted).
    pub discovered: usize,
    /// Entries whose content was copied.
    pub processed: usize,
    /// Entries replaced by a warning.
    pub failed: usize,
    /// Size of the output document in bytes.
    pub output_bytes: u64,
}

impl ExtractSummary {
    /// Output size in kilobytes.
    pub fn size_kb(&self) -> f64 {
        self.output_bytes as f64 / 1024.0
    }
}

/// How a run ended.
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    /// Nothing matched under the traversal root; no output was written.
    NoFiles,
    /// The output document was written.
    Completed(ExtractSummary),
}
