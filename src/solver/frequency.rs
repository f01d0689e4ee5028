//! Letter frequency tables used for scoring
//!
//! Two separate structures:
//! - [`FrequencyTable`]: per-position counts over the initial dictionary, built
//!   once and never updated. Drives solution scoring.
//! - [`RemainingLetterFrequency`]: position-free counts over the current solution
//!   pool, rebuilt after every update. Drives guess scoring.

use crate::core::{WORD_LENGTH, Word};
use rustc_hash::FxHashMap;

const ALPHABET: usize = 26;

/// Per-position letter occurrence counts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: [[u32; ALPHABET]; WORD_LENGTH],
}

impl FrequencyTable {
    /// Count every (position, letter) pair in `words`
    #[must_use]
    pub fn from_words(words: &[Word]) -> Self {
        let mut counts = [[0u32; ALPHABET]; WORD_LENGTH];
        for word in words {
            for (position, &letter) in word.chars().iter().enumerate() {
                counts[position][usize::from(letter - b'a')] += 1;
            }
        }
        Self { counts }
    }

    /// Occurrences of `letter` at `position`
    #[inline]
    #[must_use]
    pub fn count(&self, position: usize, letter: u8) -> u32 {
        self.counts[position][usize::from(letter - b'a')]
    }

    /// Sum of the positional counts of the word's letters
    ///
    /// # Examples
    /// ```
    /// use wordle_helper::core::Word;
    /// use wordle_helper::solver::FrequencyTable;
    ///
    /// let words = [Word::new("crane").unwrap(), Word::new("cater").unwrap()];
    /// let table = FrequencyTable::from_words(&words);
    ///
    /// // c@0 = 2, r@1 = 1, a@2 = 1, n@3 = 1, e@4 = 1
    /// assert_eq!(table.score(&words[0]), 6);
    /// ```
    #[must_use]
    pub fn score(&self, word: &Word) -> u32 {
        word.chars()
            .iter()
            .enumerate()
            .map(|(position, &letter)| self.count(position, letter))
            .sum()
    }
}

/// Letter counts over the current solution pool, ignoring position
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemainingLetterFrequency {
    counts: FxHashMap<u8, u32>,
}

impl RemainingLetterFrequency {
    /// Count every letter occurrence in `words`, repeated letters included
    pub fn from_words<'a>(words: impl IntoIterator<Item = &'a Word>) -> Self {
        let mut counts: FxHashMap<u8, u32> = FxHashMap::default();
        for word in words {
            for &letter in word.chars() {
                *counts.entry(letter).or_insert(0) += 1;
            }
        }
        Self { counts }
    }

    /// Count for `letter`, or `None` if no remaining word contains it
    #[inline]
    #[must_use]
    pub fn get(&self, letter: u8) -> Option<u32> {
        self.counts.get(&letter).copied()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of distinct letters still present
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    #[test]
    fn positional_counts() {
        let words = words(&["crane", "trace", "react", "cater"]);
        let table = FrequencyTable::from_words(&words);

        assert_eq!(table.count(0, b'c'), 2);
        assert_eq!(table.count(0, b't'), 1);
        assert_eq!(table.count(0, b'r'), 1);
        assert_eq!(table.count(2, b'a'), 3);
        assert_eq!(table.count(4, b'z'), 0);
    }

    #[test]
    fn solution_scores() {
        let words = words(&["crane", "trace", "react", "cater"]);
        let table = FrequencyTable::from_words(&words);

        // c2 + r2 + a3 + n1 + e2
        assert_eq!(table.score(&words[0]), 10);
        // t1 + r2 + a3 + c2 + e2
        assert_eq!(table.score(&words[1]), 10);
        // r1 + e1 + a3 + c2 + t1
        assert_eq!(table.score(&words[2]), 8);
        // c2 + a1 + t1 + e1 + r1
        assert_eq!(table.score(&words[3]), 6);
    }

    #[test]
    fn empty_table_scores_zero() {
        let table = FrequencyTable::from_words(&[]);
        assert_eq!(table.score(&Word::new("crane").unwrap()), 0);
    }

    #[test]
    fn remaining_counts_every_occurrence() {
        let words = words(&["speed", "crane"]);
        let remaining = RemainingLetterFrequency::from_words(&words);

        assert_eq!(remaining.get(b'e'), Some(3));
        assert_eq!(remaining.get(b's'), Some(1));
        assert_eq!(remaining.get(b'z'), None);
        assert_eq!(remaining.len(), 8);
    }

    #[test]
    fn remaining_from_empty_pool() {
        let remaining = RemainingLetterFrequency::from_words(&[]);
        assert!(remaining.is_empty());
    }
}
