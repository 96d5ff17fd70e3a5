//! Output formatting module

use anyhow::Result;
use fenci_core::RankedWord;

/// Trait for ranking-report formatters
pub trait ReportFormatter {
    /// Format and output a single ranking entry
    fn format_entry(&mut self, entry: &RankedWord) -> Result<()>;

    /// Finalize output (e.g., close the JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;
