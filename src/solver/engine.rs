//! Constraint engine: update, filter and score cycles

use super::constraints::ConstraintState;
use super::frequency::{FrequencyTable, RemainingLetterFrequency};
use super::ranking::{EmptyPoolError, MachineSummary, Rankings, Report, ScoredWord};
use crate::core::{Feedback, FeedbackError, LetterSet, Word};
use crate::output::formatters::render_text;
use crate::wordlists::{Dictionary, LoadError};
use std::path::Path;
use std::sync::Arc;

/// Main Wordle helper engine
///
/// Owns the accumulated constraints and both working pools. Each instance
/// tracks a single game.
#[derive(Debug, Clone)]
pub struct ConstraintEngine {
    original: Arc<[Word]>,
    frequency: FrequencyTable,
    constraints: ConstraintState,
    solutions: Vec<ScoredWord>,
    guesses: Vec<ScoredWord>,
}

impl ConstraintEngine {
    /// Create an engine over a dictionary
    ///
    /// Both pools start as the full dictionary. The positional frequency table is
    /// computed here, once.
    ///
    /// # Examples
    /// ```
    /// use wordle_helper::solver::ConstraintEngine;
    /// use wordle_helper::wordlists::Dictionary;
    ///
    /// let dictionary = Dictionary::from_strs(&["crane", "trace", "react", "cater"]).unwrap();
    /// let mut engine = ConstraintEngine::new(&dictionary);
    ///
    /// engine.update_str("crane", "!!!!!").unwrap();
    /// assert_eq!(engine.solution_count(), 1);
    /// ```
    #[must_use]
    pub fn new(dictionary: &Dictionary) -> Self {
        let original = dictionary.shared();
        let frequency = FrequencyTable::from_words(&original);
        let unscored = |word: &Word| ScoredWord {
            word: *word,
            score: 0,
        };

        let mut engine = Self {
            solutions: original.iter().map(unscored).collect(),
            guesses: original.iter().map(unscored).collect(),
            original,
            frequency,
            constraints: ConstraintState::new(),
        };
        engine.rescore();
        engine
    }

    /// Create an engine from a dictionary file
    ///
    /// # Errors
    /// Returns `LoadError` if the file is unreadable or holds a word that is not
    /// exactly 5 letters.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let dictionary = crate::wordlists::loader::load_from_file(path)?;
        Ok(Self::new(&dictionary))
    }

    /// Apply one round of feedback
    ///
    /// Records the facts, filters the solution pool in place (narrowing is
    /// cumulative), resets the guess pool to the full dictionary and rescores.
    pub fn update(&mut self, guess: &Word, feedback: &Feedback) {
        let before = self.solutions.len();

        self.constraints.record(guess, feedback);
        let predicate = self.constraints.compile();
        self.solutions.retain(|scored| predicate.matches(&scored.word));

        self.guesses = self
            .original
            .iter()
            .map(|&word| ScoredWord { word, score: 0 })
            .collect();

        self.rescore();

        log::debug!(
            "update {guess} {feedback}: {before} -> {} candidates",
            self.solutions.len()
        );
    }

    /// Parse and apply one round of feedback
    ///
    /// Both inputs are validated before anything is recorded, so a rejected call
    /// leaves the engine untouched.
    ///
    /// # Errors
    /// Returns `FeedbackError` if the guess is not a 5-letter word, or the feedback
    /// is not exactly 5 symbols from `! ? .`.
    pub fn update_str(&mut self, guess: &str, feedback: &str) -> Result<(), FeedbackError> {
        let guess = Word::new(guess)?;
        let feedback = Feedback::parse(feedback)?;
        self.update(&guess, &feedback);
        Ok(())
    }

    /// Recompute both pools' scores
    fn rescore(&mut self) {
        for scored in &mut self.solutions {
            scored.score = self.frequency.score(&scored.word);
        }

        let remaining =
            RemainingLetterFrequency::from_words(self.solutions.iter().map(|s| &s.word));
        for scored in &mut self.guesses {
            scored.score = guess_score(&scored.word, &self.constraints, &remaining);
        }
    }

    /// Both pools ranked by score, ties in dictionary order
    #[must_use]
    pub fn rankings(&self) -> Rankings {
        Rankings::new(&self.solutions, &self.guesses)
    }

    /// Pool sizes and top-ranked words
    ///
    /// # Errors
    /// Returns `EmptyPoolError` if either pool is empty.
    pub fn summary(&self) -> Result<MachineSummary, EmptyPoolError> {
        self.rankings().summary()
    }

    /// Report the current state
    ///
    /// In machine mode returns the 4-tuple of [`MachineSummary`]; otherwise a text
    /// listing of the top `top_n` words of each pool, with scores when `verbose`.
    ///
    /// # Errors
    /// Returns `EmptyPoolError` in machine mode when a pool is empty. Text mode
    /// never fails.
    pub fn stats(
        &self,
        top_n: usize,
        verbose: bool,
        machine: bool,
    ) -> Result<Report, EmptyPoolError> {
        let rankings = self.rankings();
        if machine {
            rankings.summary().map(Report::Machine)
        } else {
            Ok(Report::Text(render_text(&rankings, top_n, verbose)))
        }
    }

    /// Current solution pool in dictionary order
    #[must_use]
    pub fn solutions(&self) -> &[ScoredWord] {
        &self.solutions
    }

    /// Current guess pool in dictionary order
    #[must_use]
    pub fn guesses(&self) -> &[ScoredWord] {
        &self.guesses
    }

    #[must_use]
    pub fn solution_count(&self) -> usize {
        self.solutions.len()
    }

    #[must_use]
    pub fn guess_count(&self) -> usize {
        self.guesses.len()
    }

    #[must_use]
    pub const fn constraints(&self) -> &ConstraintState {
        &self.constraints
    }

    #[must_use]
    pub const fn frequency_table(&self) -> &FrequencyTable {
        &self.frequency
    }

    /// Whether `word` is still a candidate solution
    #[must_use]
    pub fn is_candidate(&self, word: &Word) -> bool {
        self.solutions.iter().any(|scored| scored.word == *word)
    }
}

/// Information score of a guess word
///
/// Sums the remaining-pool frequency of each distinct letter that is still
/// unknown at the position it occupies and occurs in some remaining candidate.
fn guess_score(
    word: &Word,
    constraints: &ConstraintState,
    remaining: &RemainingLetterFrequency,
) -> u32 {
    let mut counted = LetterSet::EMPTY;
    let mut score = 0;

    for (position, &letter) in word.chars().iter().enumerate() {
        if counted.contains(letter) || !constraints.is_unknown(letter, position) {
            continue;
        }
        if let Some(count) = remaining.get(letter) {
            score += count;
            counted.insert(letter);
        }
    }

    score
}
