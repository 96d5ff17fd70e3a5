//! Dictionary-driven maximum forward matching for Chinese text
//!
//! This crate provides the segmentation engine, punctuation and codepoint
//! classification, frequency accumulation, and ranking logic. It performs
//! no I/O: dictionaries, stopwords, and sentences arrive as in-memory
//! string sequences.

#![warn(missing_docs)]

pub mod codepoint;
pub mod error;
pub mod frequency;
pub mod lexicon;
pub mod pipeline;
pub mod punctuation;
pub mod ranker;
pub mod segmenter;

// Re-export key types
pub use error::{CoreError, Result};
pub use frequency::{FrequencyCounter, WordCount};
pub use lexicon::{Dictionary, StopwordSet, MAX_WORD_BYTES};
pub use pipeline::{PipelineConfig, PipelineOutput, RunMetadata, SegmentationPipeline};
pub use punctuation::PunctuationClassifier;
pub use ranker::{RankedWord, Ranker};
pub use segmenter::{SegmentedSentence, Segmenter, Token};
