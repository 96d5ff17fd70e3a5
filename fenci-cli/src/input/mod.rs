//! Input reading utilities

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Line-oriented reader for dictionary, stopword, and corpus files
pub struct LineReader;

impl LineReader {
    /// Read a UTF-8 file as an ordered sequence of lines
    ///
    /// Line terminators are stripped; CRLF endings are tolerated. A file
    /// that cannot be opened is a hard error — segmentation must not start
    /// with a missing input.
    pub fn read_lines(path: &Path) -> Result<Vec<String>> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(content
            .lines()
            .map(|line| line.trim_end_matches('\r').to_string())
            .collect())
    }
}
