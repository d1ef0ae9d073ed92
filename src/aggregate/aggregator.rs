//! Copying discovered files into the output document.
//!
//! A file that cannot be read only loses its own block: the block gets a
//! warning line and the run moves on. Only failures on the output document
//! itself stop the aggregation.

use super::document::OutputDocument;
use crate::config::ExtractConfig;
use crate::error::ExtractError;
use crate::models::{EntryOutcome, EntryWarning, ExtractSummary, FileEntry, ReadFailure};
use crate::report::generator::{document_header, file_header, file_separator, warning_block};
use crate::report::Reporter;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Read one entry as UTF-8 text.
pub fn read_entry(entry: &FileEntry) -> EntryOutcome {
    match fs::read(&entry.path) {
        Ok(bytes) => match String::from_utf8(bytes) {
            Ok(content) => EntryOutcome::Content(content),
            Err(_) => EntryOutcome::Failed(ReadFailure::Encoding),
        },
        Err(e) => EntryOutcome::Failed(ReadFailure::Io(e.to_string())),
    }
}

/// Write every entry, in order, into the output document.
pub fn aggregate(
    working_dir: &Path,
    config: &ExtractConfig,
    entries: &[FileEntry],
    reporter: &mut dyn Reporter,
) -> Result<ExtractSummary, ExtractError> {
    let output_path = config.output_path(working_dir);
    debug!("Writing {}", output_path.display());

    let mut document = OutputDocument::create(&output_path)?;
    document.write(&document_header(&config.extension, working_dir, entries.len()))?;

    let mut processed = 0;
    let mut failed = 0;

    for entry in entries {
        document.write(&file_header(&entry.relative_path))?;

        match read_entry(entry) {
            EntryOutcome::Content(content) => {
                document.write(&content)?;
                document.write(&file_separator())?;
                processed += 1;
                reporter.processed(&entry.relative_path);
            }
            EntryOutcome::Failed(failure) => {
                let warning = EntryWarning {
                    relative_path: &entry.relative_path,
                    failure: &failure,
                };
                debug!("{}", warning);
                document.write(&warning_block(&warning))?;
                failed += 1;
                reporter.warning(&warning);
            }
        }
    }

    let output_bytes = document.finish()?;

    Ok(ExtractSummary {
        output_path,
        discovered: entries.len(),
        processed,
        failed,
        output_bytes,
    })
}
