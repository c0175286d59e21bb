//! Filesystem walk producing one event per entry under the scan root

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

use crate::error::WalkError;

use super::config::ScanConfig;

/// A single entry reported by a walk: its path, whether it is a directory,
/// and its size in bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkEntry {
    pub path: PathBuf,
    pub is_dir: bool,
    pub size: u64,
}

impl WalkEntry {
    pub fn file(path: impl Into<PathBuf>, size: u64) -> Self {
        Self {
            path: path.into(),
            is_dir: false,
            size,
        }
    }

    pub fn dir(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            is_dir: true,
            size: 0,
        }
    }
}

/// Walks the real filesystem, root included.
///
/// Every entry is visited: hidden files and ignore files get no special
/// treatment. Entries within a directory are visited in file-name order.
pub struct FsWalker {
    follow_links: bool,
}

impl FsWalker {
    pub fn new(config: &ScanConfig) -> Self {
        Self {
            follow_links: config.follow_links,
        }
    }

    pub fn entries(&self, root: &Path) -> impl Iterator<Item = Result<WalkEntry, WalkError>> {
        WalkBuilder::new(root)
            .standard_filters(false)
            .follow_links(self.follow_links)
            .sort_by_file_name(|a, b| a.cmp(b))
            .build()
            .map(|result| {
                let entry = result.map_err(WalkError::from)?;
                let metadata = entry.metadata().map_err(|err| WalkError::Entry {
                    path: entry.path().to_path_buf(),
                    message: err.to_string(),
                })?;
                Ok(WalkEntry {
                    is_dir: metadata.is_dir(),
                    size: metadata.len(),
                    path: entry.into_path(),
                })
            })
    }
}
