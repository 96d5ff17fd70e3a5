//! Frequency ranking
//!
//! Sorts accumulated counts by descending count with a stable sort, so
//! equal counts keep their first-insertion order and output is
//! reproducible run to run. The report is truncated to the top N entries.

use crate::frequency::FrequencyCounter;
use core::fmt;
use std::cmp::Reverse;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One entry of the ranking report
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RankedWord {
    /// The token text
    pub word: String,
    /// Occurrences across the whole corpus
    pub count: usize,
    /// Count divided by total tokens recorded (not by distinct tokens)
    pub frequency: f64,
}

impl fmt::Display for RankedWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} => {} ({:.4})", self.word, self.count, self.frequency)
    }
}

/// Produces the top-N ranking from an accumulator
#[derive(Debug, Clone, Copy)]
pub struct Ranker {
    top_n: usize,
}

impl Default for Ranker {
    fn default() -> Self {
        Self { top_n: 10 }
    }
}

impl Ranker {
    /// Create a ranker reporting the top `top_n` entries
    pub fn new(top_n: usize) -> Self {
        Self { top_n }
    }

    /// Rank the accumulated counts
    ///
    /// Entries are ordered by count descending; ties keep first-insertion
    /// order (stable sort keyed solely on the count). The result holds at
    /// most `top_n` entries.
    pub fn rank(&self, counts: FrequencyCounter) -> Vec<RankedWord> {
        let total = counts.total_recorded();
        let mut slots = counts.into_counts();
        slots.sort_by_key(|w| Reverse(w.count));
        slots.truncate(self.top_n);
        slots
            .into_iter()
            .map(|w| RankedWord {
                frequency: w.count as f64 / total as f64,
                word: w.word,
                count: w.count,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counter(tokens: &[&str]) -> FrequencyCounter {
        let mut counts = FrequencyCounter::new();
        for token in tokens {
            counts.record(token);
        }
        counts
    }

    #[test]
    fn test_descending_count_order() {
        let counts = counter(&["人", "国", "人", "人", "国", "民"]);
        let ranked = Ranker::default().rank(counts);
        assert_eq!(ranked[0].word, "人");
        assert_eq!(ranked[0].count, 3);
        assert_eq!(ranked[1].word, "国");
        assert_eq!(ranked[2].word, "民");
    }

    #[test]
    fn test_ties_keep_insertion_order() {
        let counts = counter(&["乙", "甲", "丙", "乙", "甲", "丙"]);
        let ranked = Ranker::default().rank(counts);
        let order: Vec<&str> = ranked.iter().map(|r| r.word.as_str()).collect();
        assert_eq!(order, ["乙", "甲", "丙"]);
    }

    #[test]
    fn test_truncated_to_top_n() {
        let counts = counter(&["一", "二", "三", "四", "五"]);
        let ranked = Ranker::new(3).rank(counts);
        assert_eq!(ranked.len(), 3);
    }

    #[test]
    fn test_fewer_entries_than_top_n() {
        let counts = counter(&["一", "二"]);
        let ranked = Ranker::new(10).rank(counts);
        assert_eq!(ranked.len(), 2);
    }

    #[test]
    fn test_relative_frequency_over_total() {
        // 人=3, 国=1, total=4
        let counts = counter(&["人", "人", "国", "人"]);
        let ranked = Ranker::default().rank(counts);
        assert_eq!(ranked[0].to_string(), "人 => 3 (0.7500)");
        assert_eq!(ranked[1].to_string(), "国 => 1 (0.2500)");
    }

    #[test]
    fn test_rendering_has_four_fractional_digits() {
        let counts = counter(&["人", "国", "民"]);
        let ranked = Ranker::default().rank(counts);
        assert_eq!(ranked[0].to_string(), "人 => 1 (0.3333)");
    }

    #[test]
    fn test_empty_accumulator_ranks_empty() {
        let ranked = Ranker::default().rank(FrequencyCounter::new());
        assert!(ranked.is_empty());
    }
}
