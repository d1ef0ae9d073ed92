//! Locating the traversal root and discovering matching files.
//!
//! Discovery is read-only. Entries are matched on their name suffix at any
//! depth and returned sorted by full path so every run visits them in the
//! same order.

use crate::config::ExtractConfig;
use crate::error::ExtractError;
use crate::models::FileEntry;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// File scanner rooted at the working directory.
pub struct FileScanner {
    config: ExtractConfig,
    working_dir: PathBuf,
}

impl FileScanner {
    /// Create a new file scanner.
    pub fn new(working_dir: PathBuf, config: ExtractConfig) -> Self {
        Self {
            config,
            working_dir,
        }
    }

    /// Resolve the traversal root, failing if it is not an existing directory.
    pub fn locate_root(&self) -> Result<PathBuf, ExtractError> {
        let root = self.config.root_path(&self.working_dir);

        if !root.is_dir() {
            return Err(ExtractError::MissingRoot {
                dir_name: self.config.root_dir.clone(),
                expected: root,
                working_dir: self.working_dir.clone(),
            });
        }

        debug!("Traversal root: {}", root.display());
        Ok(root)
    }

    /// Collect every entry under `root` whose name ends with the configured
    /// suffix, sorted by full path.
    pub fn scan(&self, root: &Path) -> Vec<FileEntry> {
        let suffix = self.config.suffix();
        let mut files = Vec::new();

        for entry in WalkDir::new(root).min_depth(1).follow_links(false) {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    warn!("Skipping unreadable path: {}", e);
                    continue;
                }
            };

            if !entry.file_name().to_string_lossy().ends_with(&suffix) {
                continue;
            }

            let path = entry.into_path();
            let relative_path = path
                .strip_prefix(&self.working_dir)
                .unwrap_or(&path)
                .to_string_lossy()
                .to_string();

            files.push(FileEntry {
                path,
                relative_path,
            });
        }

        files.sort_by(|a, b| a.path.as_os_str().cmp(b.path.as_os_str()));
        debug!("Discovered {} matching entries", files.len());
        files
    }
}
