//! Segment command implementation

use crate::error::{CliError, CliResult};
use crate::input::LineReader;
use crate::output::{JsonFormatter, ReportFormatter, TextFormatter};
use anyhow::{Context, Result};
use clap::Args;
use fenci_core::{Dictionary, PipelineConfig, PipelineOutput, SegmentationPipeline, StopwordSet};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Arguments for the segment command
#[derive(Debug, Args)]
pub struct SegmentArgs {
    /// Corpus file with one sentence per line
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,

    /// Dictionary file with one word per line
    #[arg(short, long, value_name = "FILE")]
    pub dict: PathBuf,

    /// Stopword file with one word per line
    #[arg(short, long, value_name = "FILE")]
    pub stopwords: PathBuf,

    /// Write the bracket-delimited segmented text to this file (default: stdout)
    #[arg(long, value_name = "FILE")]
    pub segmented: Option<PathBuf>,

    /// Write the ranking report to this file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Ranking report format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ReportFormat,

    /// Number of entries in the ranking report
    #[arg(long, value_name = "N", default_value_t = 10)]
    pub top: usize,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported ranking report formats
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ReportFormat {
    /// One `WORD => COUNT (PROB)` line per entry
    Text,
    /// JSON array of word/count/frequency records
    Json,
}

impl SegmentArgs {
    /// Execute the segment command
    pub fn execute(&self) -> CliResult<()> {
        self.init_logging();

        log::info!("Starting segmentation");
        log::debug!("Arguments: {self:?}");

        // All three sources must load before any segmentation begins;
        // a missing input aborts the run outright.
        let dict_lines = LineReader::read_lines(&self.dict)?;
        let stop_lines = LineReader::read_lines(&self.stopwords)?;
        let sentences = LineReader::read_lines(&self.input)?;

        let dictionary = Dictionary::from_words(&dict_lines)
            .map_err(|e| CliError::InvalidLexicon(e.to_string()))?;
        let stopwords = StopwordSet::from_words(&stop_lines);
        log::info!(
            "Loaded {} dictionary entries and {} stopwords",
            dictionary.len(),
            stopwords.len()
        );

        let config = PipelineConfig { top_n: self.top };
        let pipeline = SegmentationPipeline::with_config(dictionary, stopwords, config);
        let result = pipeline.process(&sentences);

        log::info!(
            "Processed {} sentences: {} tokens recorded, {} distinct",
            result.metadata.sentences,
            result.metadata.total_tokens,
            result.metadata.distinct_tokens
        );

        self.write_segmented(&result)?;
        self.write_report(&result)?;

        Ok(())
    }

    /// Write one bracketed line per input sentence
    fn write_segmented(&self, result: &PipelineOutput) -> Result<()> {
        let mut writer = self.open_sink(self.segmented.as_ref())?;
        for sentence in &result.segmented {
            writeln!(writer, "{}", sentence.line)?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Write the ranking report in the selected format
    fn write_report(&self, result: &PipelineOutput) -> Result<()> {
        let writer = self.open_sink(self.output.as_ref())?;
        let mut formatter: Box<dyn ReportFormatter> = match self.format {
            ReportFormat::Text => Box::new(TextFormatter::new(writer)),
            ReportFormat::Json => Box::new(JsonFormatter::new(writer)),
        };

        for entry in &result.ranking {
            formatter.format_entry(entry)?;
        }
        formatter.finish()
    }

    fn open_sink(&self, path: Option<&PathBuf>) -> Result<Box<dyn Write>> {
        Ok(match path {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create file: {}", path.display()))?;
                Box::new(BufWriter::new(file))
            }
            None => Box::new(io::stdout()),
        })
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }
}
