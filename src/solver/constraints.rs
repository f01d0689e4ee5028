//! Accumulated knowledge from feedback
//!
//! Facts are only ever added. Recording the same guess twice is a no-op.

use super::predicate::{PatternPredicate, PositionRule};
use crate::core::{Feedback, FeedbackSymbol, LetterSet, WORD_LENGTH, Word};

/// Everything learned from the feedback received so far
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstraintState {
    excluded_globally: LetterSet,
    confirmed_globally: LetterSet,
    excluded_at: [LetterSet; WORD_LENGTH],
    fixed_at: [LetterSet; WORD_LENGTH],
}

impl ConstraintState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the facts carried by one guess and its feedback
    ///
    /// Gray applies per occurrence: a letter that is Gray at one position is
    /// excluded everywhere, even when the same guess marks it Green or Yellow at
    /// another position.
    pub fn record(&mut self, guess: &Word, feedback: &Feedback) {
        for (i, symbol) in feedback.symbols().iter().enumerate() {
            let letter = guess.char_at(i);
            match symbol {
                FeedbackSymbol::Green => {
                    self.confirmed_globally.insert(letter);
                    self.fixed_at[i].insert(letter);
                }
                FeedbackSymbol::Yellow => {
                    self.confirmed_globally.insert(letter);
                    self.excluded_at[i].insert(letter);
                }
                FeedbackSymbol::Gray => {
                    self.excluded_globally.insert(letter);
                }
            }
        }
    }

    /// Compile the accumulated facts into a word filter
    #[must_use]
    pub fn compile(&self) -> PatternPredicate {
        let positions = std::array::from_fn(|i| {
            if self.fixed_at[i].is_empty() {
                PositionRule::Excluding(self.excluded_at[i])
            } else {
                PositionRule::Fixed(self.fixed_at[i])
            }
        });
        PatternPredicate::new(self.confirmed_globally, self.excluded_globally, positions)
    }

    /// Whether `letter` at `position` of a guess would tell us something new
    #[must_use]
    pub const fn is_unknown(&self, letter: u8, position: usize) -> bool {
        !self.confirmed_globally.contains(letter)
            && !self.excluded_globally.contains(letter)
            && !self.excluded_at[position].contains(letter)
    }

    #[must_use]
    pub const fn excluded_globally(&self) -> LetterSet {
        self.excluded_globally
    }

    #[must_use]
    pub const fn confirmed_globally(&self) -> LetterSet {
        self.confirmed_globally
    }

    #[must_use]
    pub const fn excluded_at(&self, position: usize) -> LetterSet {
        self.excluded_at[position]
    }

    /// The confirmed letter for a position, if exactly one has been recorded
    #[must_use]
    pub fn fixed_at(&self, position: usize) -> Option<u8> {
        let fixed = self.fixed_at[position];
        if fixed.len() == 1 {
            fixed.iter().next()
        } else {
            None
        }
    }

    /// True until the first fact is recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(state: &mut ConstraintState, guess: &str, feedback: &str) {
        state.record(
            &Word::new(guess).unwrap(),
            &Feedback::parse(feedback).unwrap(),
        );
    }

    #[test]
    fn new_state_is_empty() {
        let state = ConstraintState::new();
        assert!(state.is_empty());
        assert!(state.excluded_globally().is_empty());
        assert!(state.confirmed_globally().is_empty());
    }

    #[test]
    fn green_fixes_position_and_confirms() {
        let mut state = ConstraintState::new();
        record(&mut state, "crane", "!....");

        assert_eq!(state.fixed_at(0), Some(b'c'));
        assert!(state.confirmed_globally().contains(b'c'));
        assert_eq!(state.excluded_globally().to_string(), "aenr");
    }

    #[test]
    fn yellow_excludes_position_and_confirms() {
        let mut state = ConstraintState::new();
        record(&mut state, "crane", ".?...");

        assert!(state.confirmed_globally().contains(b'r'));
        assert!(state.excluded_at(1).contains(b'r'));
        assert!(!state.excluded_at(0).contains(b'r'));
        assert_eq!(state.fixed_at(1), None);
        assert_eq!(state.excluded_globally().to_string(), "acen");
    }

    #[test]
    fn gray_excludes_letter_also_marked_green() {
        // "geese": the first E is green, the second one gray
        let mut state = ConstraintState::new();
        record(&mut state, "geese", ".!.!.");

        assert!(state.confirmed_globally().contains(b'e'));
        assert!(state.excluded_globally().contains(b'e'));
    }

    #[test]
    fn recording_twice_is_idempotent() {
        let mut once = ConstraintState::new();
        record(&mut once, "crane", ".?..!");

        let mut twice = once.clone();
        record(&mut twice, "crane", ".?..!");

        assert_eq!(once, twice);
    }

    #[test]
    fn facts_accumulate_across_guesses() {
        let mut state = ConstraintState::new();
        record(&mut state, "crane", ".?...");
        record(&mut state, "stour", "....?");

        assert!(state.excluded_at(1).contains(b'r'));
        assert!(state.excluded_at(4).contains(b'r'));
        assert!(state.excluded_globally().contains(b's'));
        assert!(state.excluded_globally().contains(b'c'));
    }

    #[test]
    fn conflicting_greens_leave_position_unresolved() {
        let mut state = ConstraintState::new();
        record(&mut state, "crane", "!....");
        record(&mut state, "slate", "!....");

        assert_eq!(state.fixed_at(0), None);
    }

    #[test]
    fn unknown_letters() {
        let mut state = ConstraintState::new();
        record(&mut state, "crane", ".?...");

        assert!(state.is_unknown(b's', 0));
        assert!(!state.is_unknown(b'c', 0)); // excluded globally
        assert!(!state.is_unknown(b'r', 3)); // confirmed
    }
}
