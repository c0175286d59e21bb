//! JSON output formatting

use std::io;

use serde::Serialize;

use crate::tree::TreeNode;

use super::size::human_readable;
use super::tree::EXPANDED_DEPTH;

/// Serializable view of a node, children sorted and cut off like the text tree.
#[derive(Debug, Serialize)]
pub struct JsonNode<'a> {
    pub name: &'a str,
    pub total_bytes: u64,
    pub self_bytes: u64,
    pub total_human: String,
    pub self_human: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<JsonNode<'a>>,
}

impl<'a> JsonNode<'a> {
    pub fn from_tree(node: &'a TreeNode) -> Self {
        Self::at_depth(node, 0)
    }

    fn at_depth(node: &'a TreeNode, depth: usize) -> Self {
        let children = if depth < EXPANDED_DEPTH {
            node.sorted_children()
                .into_iter()
                .map(|child| Self::at_depth(child, depth + 1))
                .collect()
        } else {
            Vec::new()
        };
        Self {
            name: node.name(),
            total_bytes: node.total(),
            self_bytes: node.direct_size(),
            total_human: human_readable(node.total()).trim_start().to_string(),
            self_human: human_readable(node.direct_size()).trim_start().to_string(),
            children,
        }
    }
}

/// Render the tree as pretty-printed JSON.
pub fn to_json(node: &TreeNode) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonNode::from_tree(node))
}

/// Print the tree as pretty-printed JSON to stdout.
pub fn print_json(node: &TreeNode) -> io::Result<()> {
    let json = to_json(node).map_err(io::Error::other)?;
    println!("{}", json);
    Ok(())
}
