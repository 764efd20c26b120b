//! Tree rendering: connector glyphs and indentation prefixes.
//!
//! One line per retained entry. The root is printed as a bare label; every
//! other entry gets `prefix + connector + name`, with a trailing `/` marking
//! directories. Ancestors that are not last siblings contribute a vertical
//! bar to the prefix of their descendants, so the branching structure can be
//! reconstructed from the output alone.

use std::io::{self, Write};

pub const BRANCH: &str = "├─ ";
pub const LAST: &str = "└─ ";
pub const VERT: &str = "│  ";
pub const SPACE: &str = "   ";

/// The connector glyph for an entry at its sibling position.
pub fn connector(is_last: bool) -> &'static str {
    if is_last { LAST } else { BRANCH }
}

/// The indentation prefix for children of an entry rendered with `prefix`.
pub fn child_prefix(prefix: &str, is_last: bool) -> String {
    let pad = if is_last { SPACE } else { VERT };
    format!("{}{}", prefix, pad)
}

/// Writes tree lines to an underlying writer.
pub struct TreeFormatter<W: Write> {
    out: W,
}

impl<W: Write> TreeFormatter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Print the root label line.
    pub fn write_root(&mut self, name: &str) -> io::Result<()> {
        writeln!(self.out, "{}", name)
    }

    /// Print one retained entry.
    pub fn write_entry(
        &mut self,
        prefix: &str,
        is_last: bool,
        name: &str,
        is_dir: bool,
    ) -> io::Result<()> {
        let suffix = if is_dir { "/" } else { "" };
        writeln!(self.out, "{}{}{}{}", prefix, connector(is_last), name, suffix)
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}
