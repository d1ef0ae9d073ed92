//! Operator-facing progress and summary lines.

use crate::error::ExtractError;
use crate::models::{EntryWarning, ExtractSummary};

/// Receives progress events from the pipeline.
///
/// Reporting is observational: implementations must not touch the output
/// document.
pub trait Reporter {
    /// Called once before aggregation with the number of discovered entries.
    fn discovered(&mut self, count: usize);

    /// Called after an entry's content was copied.
    fn processed(&mut self, relative_path: &str);

    /// Called after an entry was replaced by a warning.
    fn warning(&mut self, warning: &EntryWarning<'_>);

    /// Called once after the output document was closed.
    fn finished(&mut self, summary: &ExtractSummary);
}

/// Reporter printing to stdout.
pub struct ConsoleReporter {
    extension: String,
}

impl ConsoleReporter {
    pub fn new(extension: impl Into<String>) -> Self {
        Self {
            extension: extension.into(),
        }
    }

    /// Banner printed when the run starts.
    pub fn start(&self, root_dir: &str) {
        println!(
            "🔍 Extracting all .{} files from {} directory...",
            self.extension, root_dir
        );
    }

    /// Discovery found nothing.
    pub fn no_files(&self, root_dir: &str) {
        println!("No .{} files found in {} directory.", self.extension, root_dir);
    }

    /// Report an error that ended the run.
    pub fn error(&self, err: &ExtractError) {
        match err {
            ExtractError::MissingRoot {
                dir_name,
                working_dir,
                ..
            } => {
                println!("Error: {}", err);
                println!("Current directory: {}", working_dir.display());
                println!(
                    "Make sure you're running this from the folder that contains {}.",
                    dir_name
                );
            }
            ExtractError::OutputWrite { .. } => {
                println!("❌ Error writing output file: {}", err);
            }
            ExtractError::WorkingDir(_) => {
                println!("❌ Error: {}", err);
            }
        }
    }
}

impl Reporter for ConsoleReporter {
    fn discovered(&mut self, count: usize) {
        println!("Found {} .{} files", count, self.extension);
    }

    fn processed(&mut self, relative_path: &str) {
        println!("✓ Processed: {}", relative_path);
    }

    fn warning(&mut self, warning: &EntryWarning<'_>) {
        println!("{}", warning);
    }

    fn finished(&mut self, summary: &ExtractSummary) {
        for line in summary_lines(&self.extension, summary) {
            println!("{}", line);
        }
    }
}

/// Final summary block.
pub fn summary_lines(extension: &str, summary: &ExtractSummary) -> Vec<String> {
    let mut lines = vec![
        format!("\n✅ Successfully created: {}", summary.output_path.display()),
        format!(
            "📄 Combined {} .{} files into a single text file",
            summary.discovered, extension
        ),
        format!("📊 File size: {:.1} KB", summary.size_kb()),
    ];

    if summary.failed > 0 {
        lines.push(format!("⚠️  {} file(s) could not be read", summary.failed));
    }

    lines
}
