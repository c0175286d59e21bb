//! Heft - disk usage, sorted by the heavy bits

pub mod error;
pub mod logging;
pub mod output;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{ScanError, WalkError};
pub use output::{Charset, OutputConfig, TreeFormatter, human_readable, print_json, to_json};
pub use tree::{
    ErrorPolicy, FsWalker, ScanConfig, ScanReport, TreeBuilder, TreeNode, WalkEntry, scan,
};
