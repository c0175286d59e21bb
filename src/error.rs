//! Error types for scanning a directory tree

use std::path::{Path, PathBuf};

use thiserror::Error;

/// A failure to enumerate or stat a single walk entry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WalkError {
    #[error("{}: {message}", .path.display())]
    Entry { path: PathBuf, message: String },

    #[error("{0}")]
    Walk(String),
}

impl WalkError {
    /// Path of the entry that failed, when the walk reported one.
    pub fn path(&self) -> Option<&Path> {
        match self {
            WalkError::Entry { path, .. } => Some(path.as_path()),
            WalkError::Walk(_) => None,
        }
    }
}

impl From<ignore::Error> for WalkError {
    fn from(err: ignore::Error) -> Self {
        match err {
            ignore::Error::WithPath { path, err } => WalkError::Entry {
                path,
                message: err.to_string(),
            },
            ignore::Error::WithDepth { err, .. } => WalkError::from(*err),
            other => WalkError::Walk(other.to_string()),
        }
    }
}

/// Errors surfaced by a scan. A missing or unreadable root is the walk's
/// first failure and arrives as `AbortedTraversal` like any other.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    /// The walk hit an unreadable entry and stopped. The tree built up to
    /// that point is still available on the scan report.
    #[error("failed to calculate size of directory {}: {source}", .root.display())]
    AbortedTraversal {
        root: PathBuf,
        #[source]
        source: WalkError,
    },
}
