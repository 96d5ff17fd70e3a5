//! Plain text report formatter

use super::ReportFormatter;
use anyhow::Result;
use fenci_core::RankedWord;
use std::io::{self, Write};

/// Plain text formatter - one `WORD => COUNT (PROB)` line per entry
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl TextFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ReportFormatter for TextFormatter<W> {
    fn format_entry(&mut self, entry: &RankedWord) -> Result<()> {
        writeln!(self.writer, "{entry}")?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
