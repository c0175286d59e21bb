//! Directory size aggregation
//!
//! Scanning happens in two phases:
//!
//! - `TreeBuilder` consumes walk events (from `FsWalker` or any other source)
//!   and tallies each file's size onto its containing directory node
//! - `TreeNode::total` later folds those tallies bottom-up, caching each
//!   node's cumulative total the first time it is read

mod builder;
mod config;
mod node;
mod walker;

pub use builder::{ScanReport, TreeBuilder, scan};
pub use config::{ErrorPolicy, ScanConfig};
pub use node::TreeNode;
pub use walker::{FsWalker, WalkEntry};

#[cfg(test)]
pub(crate) use node::total_computations;
