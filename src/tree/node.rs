//! Aggregation tree: one node per directory, tallying file sizes

use std::cell::OnceCell;
use std::collections::BTreeMap;
use std::ffi::{OsStr, OsString};

#[cfg(test)]
thread_local! {
    static TOTAL_COMPUTATIONS: std::cell::Cell<usize> = const { std::cell::Cell::new(0) };
}

/// One path segment (a directory, or the scan root) in the aggregation tree.
///
/// `direct_size` holds the bytes of files sitting immediately inside this
/// directory. The cumulative total (direct size plus every descendant) is
/// computed on the first call to [`TreeNode::total`] and cached from then on.
///
/// Children are keyed by the raw path segment, so names that only differ in
/// bytes that are not valid UTF-8 stay separate nodes; `name` is the lossy
/// display form.
///
/// Nodes are only mutated by the builder. Once a total has been memoized the
/// node must not change again; debug builds assert this.
#[derive(Debug, Clone, Default)]
pub struct TreeNode {
    name: String,
    direct_size: u64,
    total: OnceCell<u64>,
    children: BTreeMap<OsString, TreeNode>,
}

impl TreeNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn direct_size(&self) -> u64 {
        self.direct_size
    }

    pub fn child(&self, segment: impl AsRef<OsStr>) -> Option<&TreeNode> {
        self.children.get(segment.as_ref())
    }

    pub fn children(&self) -> impl Iterator<Item = &TreeNode> {
        self.children.values()
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Cumulative size of this node and everything beneath it.
    pub fn total(&self) -> u64 {
        *self.total.get_or_init(|| self.compute_total())
    }

    pub fn is_total_memoized(&self) -> bool {
        self.total.get().is_some()
    }

    /// Number of nodes in this subtree, including this one.
    pub fn node_count(&self) -> usize {
        1 + self.children.values().map(TreeNode::node_count).sum::<usize>()
    }

    /// Children ordered by descending total. Equal totals keep name order.
    pub fn sorted_children(&self) -> Vec<&TreeNode> {
        let mut children: Vec<&TreeNode> = self.children.values().collect();
        children.sort_by(|a, b| b.total().cmp(&a.total()));
        children
    }

    /// Look up the child for `segment`, creating an empty one if absent.
    pub(crate) fn child_or_insert(&mut self, segment: &OsStr) -> &mut TreeNode {
        self.assert_not_memoized();
        self.children
            .entry(segment.to_os_string())
            .or_insert_with(|| TreeNode::new(segment.to_string_lossy()))
    }

    pub(crate) fn add_direct_size(&mut self, bytes: u64) {
        self.assert_not_memoized();
        self.direct_size += bytes;
    }

    fn compute_total(&self) -> u64 {
        #[cfg(test)]
        TOTAL_COMPUTATIONS.with(|count| count.set(count.get() + 1));

        self.direct_size + self.children.values().map(TreeNode::total).sum::<u64>()
    }

    fn assert_not_memoized(&self) {
        debug_assert!(
            !self.is_total_memoized(),
            "node '{}' mutated after its total was read",
            self.name
        );
    }
}

#[cfg(test)]
pub(crate) fn total_computations() -> usize {
    TOTAL_COMPUTATIONS.with(|count| count.get())
}
