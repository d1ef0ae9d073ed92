//! The combined output file.

use crate::error::ExtractError;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Append-only handle on the output document.
///
/// The file is created (or truncated) on [`OutputDocument::create`] and closed
/// when the value is dropped, whichever way the aggregation ends.
pub struct OutputDocument {
    path: PathBuf,
    writer: BufWriter<File>,
}

impl OutputDocument {
    /// Create or truncate the document at `path`.
    pub fn create(path: &Path) -> Result<Self, ExtractError> {
        let file = File::create(path).map_err(|e| ExtractError::output(path, e))?;

        Ok(Self {
            path: path.to_path_buf(),
            writer: BufWriter::new(file),
        })
    }

    /// Append text.
    pub fn write(&mut self, text: &str) -> Result<(), ExtractError> {
        self.writer
            .write_all(text.as_bytes())
            .map_err(|e| ExtractError::output(&self.path, e))
    }

    /// Flush, close and return the final size in bytes.
    pub fn finish(self) -> Result<u64, ExtractError> {
        let Self { path, writer } = self;

        let file = writer
            .into_inner()
            .map_err(|e| ExtractError::output(&path, e.into_error()))?;
        drop(file);

        let size = std::fs::metadata(&path)
            .map_err(|e| ExtractError::output(&path, e))?
            .len();
        Ok(size)
    }
}
