//! TreeBuilder - folds walk events into the aggregation tree

use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};

use tracing::{debug, trace, warn};

use crate::error::{ScanError, WalkError};

use super::config::{ErrorPolicy, ScanConfig};
use super::node::TreeNode;
use super::walker::{FsWalker, WalkEntry};

/// Outcome of a build: the tree plus whatever went wrong along the way.
#[derive(Debug)]
pub struct ScanReport {
    pub tree: TreeNode,
    /// Entries skipped under [`ErrorPolicy::BestEffort`].
    pub failures: Vec<WalkError>,
    /// Set when the walk stopped early under [`ErrorPolicy::FailFast`].
    pub error: Option<ScanError>,
}

impl ScanReport {
    /// True when every entry was read.
    pub fn is_complete(&self) -> bool {
        self.error.is_none() && self.failures.is_empty()
    }

    /// Discard partial results: the tree if the walk ran to the end, the
    /// abort error otherwise.
    pub fn into_result(self) -> Result<TreeNode, ScanError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.tree),
        }
    }
}

/// Builds an aggregation tree from walk entries rooted at `root_path`.
pub struct TreeBuilder {
    root_path: PathBuf,
    root: TreeNode,
    entries: usize,
}

impl TreeBuilder {
    /// The root node is labeled with `root_path` exactly as given.
    pub fn new(root_path: impl Into<PathBuf>) -> Self {
        let root_path = root_path.into();
        let root = TreeNode::new(root_path.display().to_string());
        Self {
            root_path,
            root,
            entries: 0,
        }
    }

    /// Tally one entry.
    ///
    /// The entry's path is split into segments below the root. Every segment
    /// except the last names a directory to descend into, created on demand.
    /// A file's size lands on the directory reached that way; a directory adds
    /// nothing beyond the nodes created for its ancestors.
    pub fn add_entry(&mut self, entry: &WalkEntry) {
        self.entries += 1;
        let segments = relative_segments(&self.root_path, &entry.path);
        let parents = segments.split_last().map_or(&[][..], |(_, parents)| parents);

        let mut node = &mut self.root;
        for segment in parents {
            if node.child(segment).is_none() {
                trace!(segment = ?segment, "creating node");
            }
            node = node.child_or_insert(segment);
        }

        if !entry.is_dir {
            node.add_direct_size(entry.size);
        }
    }

    /// Consume a whole walk, applying `policy` to per-entry failures.
    pub fn build<I>(mut self, walk: I, policy: ErrorPolicy) -> ScanReport
    where
        I: IntoIterator<Item = Result<WalkEntry, WalkError>>,
    {
        let mut failures = Vec::new();

        for result in walk {
            match result {
                Ok(entry) => self.add_entry(&entry),
                Err(err) => match policy {
                    ErrorPolicy::FailFast => {
                        debug!(entries = self.entries, "walk aborted");
                        let error = ScanError::AbortedTraversal {
                            root: self.root_path.clone(),
                            source: err,
                        };
                        return self.finish(failures, Some(error));
                    }
                    ErrorPolicy::BestEffort => {
                        warn!(error = %err, "skipping unreadable entry");
                        failures.push(err);
                    }
                },
            }
        }

        self.finish(failures, None)
    }

    /// Tree built so far. Totals are not computed until asked for.
    pub fn into_tree(self) -> TreeNode {
        self.root
    }

    fn finish(self, failures: Vec<WalkError>, error: Option<ScanError>) -> ScanReport {
        debug!(
            root = %self.root_path.display(),
            entries = self.entries,
            nodes = self.root.node_count(),
            failures = failures.len(),
            "tree built"
        );
        ScanReport {
            tree: self.root,
            failures,
            error,
        }
    }
}

/// Walk `root` on the real filesystem and build its aggregation tree.
///
/// Never fails outright: an unreadable or missing `root` is the walk's first
/// error, so the report carries it next to a tree holding only the root.
pub fn scan(root: &Path, config: &ScanConfig) -> ScanReport {
    let walker = FsWalker::new(config);
    TreeBuilder::new(root).build(walker.entries(root), config.error_policy)
}

/// Normal path segments of `path` below `root`. Paths outside `root`, and
/// `root` itself, have none.
fn relative_segments<'a>(root: &Path, path: &'a Path) -> Vec<&'a OsStr> {
    let Ok(relative) = path.strip_prefix(root) else {
        return Vec::new();
    };
    relative
        .components()
        .filter_map(|component| match component {
            Component::Normal(segment) => Some(segment),
            _ => None,
        })
        .collect()
}
