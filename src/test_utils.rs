//! Shared helpers for unit tests.

use crate::models::{EntryWarning, ExtractSummary};
use crate::report::Reporter;

/// Reporter that records every event instead of printing.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    pub discovered: Option<usize>,
    pub processed: Vec<String>,
    pub warnings: Vec<String>,
    pub summary: Option<ExtractSummary>,
}

impl Reporter for RecordingReporter {
    fn discovered(&mut self, count: usize) {
        self.discovered = Some(count);
    }

    fn processed(&mut self, relative_path: &str) {
        self.processed.push(relative_path.to_string());
    }

    fn warning(&mut self, warning: &EntryWarning<'_>) {
        self.warnings.push(warning.to_string());
    }

    fn finished(&mut self, summary: &ExtractSummary) {
        self.summary = Some(summary.clone());
    }
}
