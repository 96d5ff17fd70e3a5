//! CLI command implementations

use crate::error::CliResult;
use clap::Subcommand;

pub mod segment;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Segment a corpus and report token frequencies
    Segment(segment::SegmentArgs),

    /// Check that the dictionary, stopword, and corpus files load
    Validate(validate::ValidateArgs),
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self) -> CliResult<()> {
        match self {
            Commands::Segment(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
        }
    }
}
