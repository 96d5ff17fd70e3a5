//! JSON report formatter

use super::ReportFormatter;
use anyhow::Result;
use fenci_core::RankedWord;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs the ranking as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    entries: Vec<ReportEntry>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct ReportEntry {
    /// The token text
    pub word: String,
    /// Occurrences across the whole corpus
    pub count: usize,
    /// Count divided by total tokens recorded
    pub frequency: f64,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            entries: Vec::new(),
        }
    }
}

impl<W: Write> ReportFormatter for JsonFormatter<W> {
    fn format_entry(&mut self, entry: &RankedWord) -> Result<()> {
        self.entries.push(ReportEntry {
            word: entry.word.clone(),
            count: entry.count,
            frequency: entry.frequency,
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.entries)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
