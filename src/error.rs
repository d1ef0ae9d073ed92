//! Errors that end an extraction run.
//!
//! Failures reading a single file are not errors here; they are carried as
//! [`crate::models::EntryOutcome`] values and never abort the run.

use std::path::PathBuf;
use thiserror::Error;

/// Run-level failure.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// The process working directory could not be determined.
    #[error("Cannot determine current directory: {0}")]
    WorkingDir(#[source] std::io::Error),

    /// The traversal root is absent or not a directory.
    #[error("{dir_name} directory not found at {}", expected.display())]
    MissingRoot {
        dir_name: String,
        expected: PathBuf,
        working_dir: PathBuf,
    },

    /// The combined output file could not be created or written.
    #[error("{}: {source}", path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ExtractError {
    /// Wrap an I/O error raised while writing the output document.
    pub fn output(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::OutputWrite {
            path: path.into(),
            source,
        }
    }
}
