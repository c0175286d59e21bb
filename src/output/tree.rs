//! Tree formatter for the size report
//!
//! This module provides `TreeFormatter` which lays out an aggregation tree as
//! an indented, size-sorted listing, either as a string or printed with colors.

use std::io;

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::tree::TreeNode;

use super::config::OutputConfig;
use super::size::human_readable;

/// Deepest level whose children are still listed. The root is depth 0, so
/// only the root's immediate children appear beneath it.
pub(crate) const EXPANDED_DEPTH: usize = 1;

/// One line of the report, before it is written out.
struct RenderedLine<'a> {
    prefix: String,
    marker: &'static str,
    total: String,
    name: &'a str,
    direct: String,
}

impl RenderedLine<'_> {
    fn plain(&self) -> String {
        format!(
            "{}{} {} {} (self {})",
            self.prefix, self.marker, self.total, self.name, self.direct
        )
    }
}

/// Formatter for the size tree.
pub struct TreeFormatter {
    config: OutputConfig,
}

impl TreeFormatter {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    pub fn format(&self, root: &TreeNode) -> String {
        let mut output = String::new();
        for line in self.render(root) {
            output.push_str(&line.plain());
            output.push('\n');
        }
        output
    }

    pub fn print(&self, root: &TreeNode) -> io::Result<()> {
        let choice = if self.config.use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        let mut stdout = StandardStream::stdout(choice);
        self.write_colored(root, &mut stdout)
    }

    /// Write the report to any color-capable writer.
    pub fn write_colored<W: WriteColor>(&self, root: &TreeNode, out: &mut W) -> io::Result<()> {
        for line in self.render(root) {
            write!(out, "{}{} ", line.prefix, line.marker)?;
            out.set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true))?;
            write!(out, "{}", line.total)?;
            out.reset()?;
            write!(out, " ")?;
            out.set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
            write!(out, "{}", line.name)?;
            out.reset()?;
            writeln!(out, " (self {})", line.direct)?;
        }
        Ok(())
    }

    fn render<'a>(&self, root: &'a TreeNode) -> Vec<RenderedLine<'a>> {
        let mut lines = Vec::new();
        self.render_node(root, "", true, 0, &mut lines);
        lines
    }

    fn render_node<'a>(
        &self,
        node: &'a TreeNode,
        prefix: &str,
        is_last: bool,
        depth: usize,
        lines: &mut Vec<RenderedLine<'a>>,
    ) {
        let glyphs = self.config.charset.glyphs();
        let (marker, continuation) = if is_last {
            (glyphs.corner, glyphs.blank)
        } else {
            (glyphs.branch, glyphs.pipe)
        };

        lines.push(RenderedLine {
            prefix: prefix.to_string(),
            marker,
            total: human_readable(node.total()),
            name: node.name(),
            direct: human_readable(node.direct_size()),
        });

        if depth >= EXPANDED_DEPTH {
            return;
        }

        let child_prefix = format!("{}{}", prefix, continuation);
        let children = node.sorted_children();
        let count = children.len();
        for (i, child) in children.into_iter().enumerate() {
            self.render_node(child, &child_prefix, i + 1 == count, depth + 1, lines);
        }
    }
}
