//! Fixed extraction settings.
//!
//! The traversal root, the matched extension and the output file name are
//! constants of the tool. They are grouped in [`ExtractConfig`] so the
//! pipeline can be pointed at a scratch directory in tests.

use std::path::{Path, PathBuf};

/// Name of the directory (under the working directory) that is walked.
pub const ROOT_DIR: &str = "src";

/// Extension of the files to collect, without the dot.
pub const EXTENSION: &str = "tsx";

/// Name of the combined file written into the working directory.
pub const OUTPUT_FILE: &str = "all_tsx_files.txt";

/// Extraction settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractConfig {
    /// Directory name of the traversal root.
    pub root_dir: String,
    /// Extension to match (without dot).
    pub extension: String,
    /// Output file name.
    pub output_file: String,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            root_dir: ROOT_DIR.to_string(),
            extension: EXTENSION.to_string(),
            output_file: OUTPUT_FILE.to_string(),
        }
    }
}

impl ExtractConfig {
    /// Suffix an entry name must end with, e.g. `.tsx`.
    pub fn suffix(&self) -> String {
        format!(".{}", self.extension)
    }

    /// Traversal root for the given working directory.
    pub fn root_path(&self, working_dir: &Path) -> PathBuf {
        working_dir.join(&self.root_dir)
    }

    /// Output document path for the given working directory.
    pub fn output_path(&self, working_dir: &Path) -> PathBuf {
        working_dir.join(&self.output_file)
    }
}
