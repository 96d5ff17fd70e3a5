//! Maximum forward-matching segmentation engine
//!
//! Consumes one sentence at a time against an immutable dictionary,
//! stopword set, and punctuation catalog. At each cursor position the
//! engine tries, in priority order: a punctuation skip, the longest
//! dictionary window, and finally a single-character fallback. Every byte
//! of the sentence is consumed exactly once and the cursor always
//! advances, so segmentation terminates without backtracking.

use crate::codepoint::utf8_char_len;
use crate::frequency::FrequencyCounter;
use crate::lexicon::{Dictionary, StopwordSet, MAX_WORD_BYTES};
use crate::punctuation::PunctuationClassifier;

/// A retained unit of text emitted by the segmenter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The token text
    pub text: String,
    /// Byte offset of the token within its sentence
    pub offset: usize,
}

impl Token {
    /// Create a new token
    pub fn new(text: impl Into<String>, offset: usize) -> Self {
        Self {
            text: text.into(),
            offset,
        }
    }

    /// Byte length of the token
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Whether the token text is empty (never produced by the segmenter)
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Result of segmenting one sentence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentedSentence {
    /// Retained tokens in left-to-right order
    pub tokens: Vec<Token>,
    /// Rendered line of bracket-delimited tokens, e.g. `[中国][人]`
    ///
    /// Empty when the sentence produced no tokens; the sink still writes a
    /// terminated line for it.
    pub line: String,
}

/// The matching engine
///
/// Borrows the run's immutable lexicons; the frequency accumulator is
/// threaded explicitly through [`Segmenter::segment`] so that no state
/// hides between sentences.
#[derive(Debug)]
pub struct Segmenter<'a> {
    dictionary: &'a Dictionary,
    stopwords: &'a StopwordSet,
    punctuation: PunctuationClassifier,
}

impl<'a> Segmenter<'a> {
    /// Create a segmenter over the given lexicons
    pub fn new(dictionary: &'a Dictionary, stopwords: &'a StopwordSet) -> Self {
        Self {
            dictionary,
            stopwords,
            punctuation: PunctuationClassifier::new(),
        }
    }

    /// Segment one sentence, recording retained tokens into `counts`
    pub fn segment(&self, sentence: &str, counts: &mut FrequencyCounter) -> SegmentedSentence {
        let len = sentence.len();
        let mut start = 0;
        let mut tokens = Vec::new();
        let mut line = String::new();

        while start < len {
            // Interior byte of a character wider than the decoder reported;
            // consumed one byte at a time, nothing to emit.
            if !sentence.is_char_boundary(start) {
                start += 1;
                continue;
            }
            let rest = &sentence[start..];

            // 1. Punctuation skip
            if let Some(punct_len) = self.punctuation.match_at(rest) {
                start += punct_len;
                continue;
            }

            // 2. Longest dictionary window
            if let Some(match_len) = self.longest_match(sentence, start) {
                let word = &sentence[start..start + match_len];
                if !self.stopwords.contains(word) {
                    Self::emit(word, start, &mut tokens, &mut line, counts);
                }
                start += match_len;
                continue;
            }

            // 3. Single-character fallback
            let char_len = utf8_char_len(rest.as_bytes()[0]);
            match rest.get(..char_len) {
                Some(ch) if !self.punctuation.is_glyph(ch) && !self.stopwords.contains(ch) => {
                    Self::emit(ch, start, &mut tokens, &mut line, counts);
                }
                // Filtered, or a length-1 fallback landed inside a wider
                // character and the fragment is not valid text.
                _ => {}
            }
            start += char_len;
        }

        SegmentedSentence { tokens, line }
    }

    /// Byte length of the longest dictionary entry matching at `start`
    ///
    /// Windows run from `MAX_WORD_BYTES` (bounded by the remaining length)
    /// down to 1; the scan stops at the first hit. Window ends that are not
    /// char boundaries cannot equal a dictionary string and are skipped.
    fn longest_match(&self, sentence: &str, start: usize) -> Option<usize> {
        let max = MAX_WORD_BYTES.min(sentence.len() - start);
        for window in (1..=max).rev() {
            if !sentence.is_char_boundary(start + window) {
                continue;
            }
            if self.dictionary.contains(&sentence[start..start + window]) {
                return Some(window);
            }
        }
        None
    }

    fn emit(
        word: &str,
        offset: usize,
        tokens: &mut Vec<Token>,
        line: &mut String,
        counts: &mut FrequencyCounter,
    ) {
        line.push('[');
        line.push_str(word);
        line.push(']');
        counts.record(word);
        tokens.push(Token::new(word, offset));
    }
}
