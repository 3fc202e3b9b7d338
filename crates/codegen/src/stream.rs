//! The seed output stream
//!
//! A thin wrapper over any `io::Write` sink that tracks the current
//! indentation level. Each line is prefixed with two spaces per level and
//! followed by a blank line — the exact layout downstream tooling diffs.

use seedsnap_core::SeedResult;
use std::io::Write;

// ============================================================================
// SeedStream
// ============================================================================

/// Write-once text sink with a mutable indentation counter.
///
/// Owned exclusively by the writer for the duration of one generation
/// pass. Indentation is a single shared counter, incremented and
/// decremented symmetrically around each nested block.
#[derive(Debug)]
pub struct SeedStream<W: Write> {
    out: W,
    indent: usize,
}

impl<W: Write> SeedStream<W> {
    /// Wrap an output sink with indentation level zero
    pub fn new(out: W) -> Self {
        Self { out, indent: 0 }
    }

    /// Current indentation level
    pub fn indent_level(&self) -> usize {
        self.indent
    }

    /// Write text exactly as given, without indentation or trailing
    /// blank line (used for the file header)
    pub fn write_raw(&mut self, text: &str) -> SeedResult<()> {
        self.out.write_all(text.as_bytes())?;
        Ok(())
    }

    /// Write one statement line: two spaces per indent level, the
    /// content, then a blank line
    pub fn write_line(&mut self, content: &str) -> SeedResult<()> {
        let pad = "  ".repeat(self.indent);
        write!(self.out, "{pad}{content}\n\n")?;
        Ok(())
    }

    /// Open a nested block
    pub fn increase_indent(&mut self) {
        self.indent += 1;
    }

    /// Close a nested block
    pub fn decrease_indent(&mut self) {
        self.indent = self.indent.saturating_sub(1);
    }

    /// Flush and release the underlying sink
    pub fn finish(mut self) -> SeedResult<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}

// ============================================================================
// Tests
// ============================================================================
