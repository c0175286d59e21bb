//! Report formatting and display
//!
//! - `config` - Output configuration types
//! - `size` - Human-readable byte counts
//! - `tree` - Indented, size-sorted text tree
//! - `json` - JSON output

mod config;
mod json;
mod size;
mod tree;

pub use config::{Charset, Glyphs, OutputConfig};
pub use json::{JsonNode, print_json, to_json};
pub use size::human_readable;
pub use tree::TreeFormatter;
