//! Corpus pipeline orchestration
//!
//! Owns the run's immutable lexicons and configuration, and drives the
//! sentence stream through segmentation, frequency accumulation, and
//! ranking in one synchronous pass.

use crate::frequency::FrequencyCounter;
use crate::lexicon::{Dictionary, StopwordSet};
use crate::ranker::{RankedWord, Ranker};
use crate::segmenter::{SegmentedSentence, Segmenter};

/// Pipeline configuration
#[derive(Debug, Clone, Copy)]
pub struct PipelineConfig {
    /// Number of entries in the ranking report
    pub top_n: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self { top_n: 10 }
    }
}

/// Run metadata reported alongside the results
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunMetadata {
    /// Sentences processed
    pub sentences: usize,
    /// Total tokens recorded, counting repeats
    pub total_tokens: usize,
    /// Distinct tokens recorded
    pub distinct_tokens: usize,
}

/// Everything a run produces
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    /// One segmented result per input sentence, in input order
    pub segmented: Vec<SegmentedSentence>,
    /// Top-N ranking of the surviving tokens
    pub ranking: Vec<RankedWord>,
    /// Run metadata
    pub metadata: RunMetadata,
}

/// Single-threaded segmentation pipeline
///
/// Sentences are processed strictly in input order and tokens strictly
/// left to right. The frequency accumulator is created inside
/// [`SegmentationPipeline::process`], threaded through every sentence, and
/// finalized only after the last one; nothing ambient survives the call.
#[derive(Debug)]
pub struct SegmentationPipeline {
    dictionary: Dictionary,
    stopwords: StopwordSet,
    config: PipelineConfig,
}

impl SegmentationPipeline {
    /// Create a pipeline with the default configuration
    pub fn new(dictionary: Dictionary, stopwords: StopwordSet) -> Self {
        Self::with_config(dictionary, stopwords, PipelineConfig::default())
    }

    /// Create a pipeline with a custom configuration
    pub fn with_config(
        dictionary: Dictionary,
        stopwords: StopwordSet,
        config: PipelineConfig,
    ) -> Self {
        Self {
            dictionary,
            stopwords,
            config,
        }
    }

    /// Process an ordered sequence of sentences
    pub fn process<I, S>(&self, sentences: I) -> PipelineOutput
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let segmenter = Segmenter::new(&self.dictionary, &self.stopwords);
        let mut counts = FrequencyCounter::new();
        let mut segmented = Vec::new();

        for sentence in sentences {
            segmented.push(segmenter.segment(sentence.as_ref(), &mut counts));
        }

        let metadata = RunMetadata {
            sentences: segmented.len(),
            total_tokens: counts.total_recorded(),
            distinct_tokens: counts.distinct(),
        };
        let ranking = Ranker::new(self.config.top_n).rank(counts);

        PipelineOutput {
            segmented,
            ranking,
            metadata,
        }
    }
}
