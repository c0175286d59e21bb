//! Output configuration types

use clap::ValueEnum;

/// Glyph set used to draw tree branches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Charset {
    /// `|--` and `` `-- ``
    #[default]
    Ascii,
    /// `├──` and `└──`
    Unicode,
}

/// Branch markers and the prefixes continued beneath them.
#[derive(Debug, Clone, Copy)]
pub struct Glyphs {
    pub branch: &'static str,
    pub corner: &'static str,
    pub pipe: &'static str,
    pub blank: &'static str,
}

impl Charset {
    pub fn glyphs(self) -> Glyphs {
        match self {
            Charset::Ascii => Glyphs {
                branch: "|--",
                corner: "`--",
                pipe: "|  ",
                blank: "   ",
            },
            Charset::Unicode => Glyphs {
                branch: "├──",
                corner: "└──",
                pipe: "│  ",
                blank: "   ",
            },
        }
    }
}

/// Configuration for output formatting.
#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    pub use_color: bool,
    pub charset: Charset,
}
