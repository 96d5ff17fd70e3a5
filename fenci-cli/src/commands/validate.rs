//! Validate command implementation
//!
//! Runs the same fail-fast precondition checks as `segment` without
//! segmenting anything: every input file must open and the dictionary
//! must construct.

use crate::error::{CliError, CliResult};
use crate::input::LineReader;
use clap::Args;
use fenci_core::{Dictionary, StopwordSet};
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Corpus file with one sentence per line
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,

    /// Dictionary file with one word per line
    #[arg(short, long, value_name = "FILE")]
    pub dict: PathBuf,

    /// Stopword file with one word per line
    #[arg(short, long, value_name = "FILE")]
    pub stopwords: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> CliResult<()> {
        let dict_lines = LineReader::read_lines(&self.dict)?;
        let stop_lines = LineReader::read_lines(&self.stopwords)?;
        let sentences = LineReader::read_lines(&self.input)?;

        let dictionary = Dictionary::from_words(&dict_lines)
            .map_err(|e| CliError::InvalidLexicon(e.to_string()))?;
        let stopwords = StopwordSet::from_words(&stop_lines);

        println!("dictionary: {} entries", dictionary.len());
        println!("stopwords: {} entries", stopwords.len());
        println!("corpus: {} sentences", sentences.len());
        println!("ok");

        Ok(())
    }
}
