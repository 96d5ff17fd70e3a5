//! Frequency accumulation
//!
//! The accumulator is an explicit value threaded through the pipeline,
//! never process-wide state. Distinct tokens keep their first-insertion
//! order so that equal counts rank deterministically later.

use std::collections::HashMap;

/// A distinct token and its occurrence count
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordCount {
    /// The token text
    pub word: String,
    /// Occurrences recorded so far
    pub count: usize,
}

/// Accumulates per-distinct-token occurrence counts across sentences
///
/// Lookup is a hashed index into an insertion-ordered slot vector. The
/// observable contract matches a linear scan: same totals, same counts,
/// same first-insertion order.
#[derive(Debug, Clone, Default)]
pub struct FrequencyCounter {
    index: HashMap<String, usize>,
    slots: Vec<WordCount>,
    total: usize,
}

impl FrequencyCounter {
    /// Create an empty accumulator
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of `token`
    ///
    /// Increments the total-recorded counter on every call; the first
    /// occurrence of a distinct token allocates a new slot with count 1.
    pub fn record(&mut self, token: &str) {
        self.total += 1;
        if let Some(&slot) = self.index.get(token) {
            self.slots[slot].count += 1;
        } else {
            self.index.insert(token.to_string(), self.slots.len());
            self.slots.push(WordCount {
                word: token.to_string(),
                count: 1,
            });
        }
    }

    /// Total tokens recorded, counting repeats
    pub fn total_recorded(&self) -> usize {
        self.total
    }

    /// Number of distinct tokens
    pub fn distinct(&self) -> usize {
        self.slots.len()
    }

    /// Distinct-token counts in first-insertion order
    pub fn counts(&self) -> &[WordCount] {
        &self.slots
    }

    /// Consume the accumulator, yielding counts in first-insertion order
    pub fn into_counts(self) -> Vec<WordCount> {
        self.slots
    }
}
