//! Dictionary and stopword lexicons
//!
//! Both are built once from ordered string sequences and stay immutable
//! for the run. Membership is exact equality over hashed sets.

use crate::error::{CoreError, Result};
use std::collections::HashSet;

/// Maximum dictionary match window in bytes
///
/// Seven CJK ideographs at three UTF-8 bytes each.
pub const MAX_WORD_BYTES: usize = 21;

/// Set of known words, queried by exact membership
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: HashSet<String>,
}

impl Dictionary {
    /// Build a dictionary from an ordered sequence of words
    ///
    /// Empty entries are skipped and duplicates are harmless. An entry
    /// longer than [`MAX_WORD_BYTES`] could never be matched by the bounded
    /// window and is rejected instead of becoming dead weight.
    pub fn from_words<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = HashSet::new();
        for word in words {
            let word = word.as_ref();
            if word.is_empty() {
                continue;
            }
            if word.len() > MAX_WORD_BYTES {
                return Err(CoreError::EntryTooLong {
                    word: word.to_string(),
                    length: word.len(),
                    limit: MAX_WORD_BYTES,
                });
            }
            set.insert(word.to_string());
        }
        Ok(Self { words: set })
    }

    /// Whether `word` is a dictionary entry
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of distinct entries
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the dictionary has no entries
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Set of words excluded from output regardless of dictionary membership
#[derive(Debug, Clone, Default)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    /// Build a stopword set from an ordered sequence of words
    ///
    /// Empty entries are skipped and duplicates are harmless.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .filter(|w| !w.as_ref().is_empty())
            .map(|w| w.as_ref().to_string())
            .collect();
        Self { words }
    }

    /// Whether `word` is a stopword
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of distinct stopwords
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the set has no stopwords
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
