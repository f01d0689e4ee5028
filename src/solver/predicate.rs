//! Declarative word filter compiled from the constraint state

use crate::core::{LetterSet, WORD_LENGTH, Word};

/// What a single position demands of a candidate letter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionRule {
    /// Every recorded letter must equal the candidate's letter here.
    /// Two different fixed letters can never both hold, so nothing matches.
    Fixed(LetterSet),
    /// The candidate's letter here must not be any of these
    Excluding(LetterSet),
}

impl PositionRule {
    #[inline]
    #[must_use]
    pub const fn allows(self, letter: u8) -> bool {
        match self {
            Self::Fixed(fixed) => fixed.is_subset(LetterSet::single(letter)),
            Self::Excluding(excluded) => !excluded.contains(letter),
        }
    }
}

/// Pure boolean test deciding whether a word is consistent with all facts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternPredicate {
    required: LetterSet,
    forbidden: LetterSet,
    positions: [PositionRule; WORD_LENGTH],
}

impl PatternPredicate {
    #[must_use]
    pub const fn new(
        required: LetterSet,
        forbidden: LetterSet,
        positions: [PositionRule; WORD_LENGTH],
    ) -> Self {
        Self {
            required,
            forbidden,
            positions,
        }
    }

    /// A predicate that accepts every word
    #[must_use]
    pub const fn accept_all() -> Self {
        Self::new(
            LetterSet::EMPTY,
            LetterSet::EMPTY,
            [PositionRule::Excluding(LetterSet::EMPTY); WORD_LENGTH],
        )
    }

    /// Accept iff the word contains every required letter, none of the forbidden
    /// letters, and satisfies each position rule
    #[must_use]
    pub fn matches(&self, word: &Word) -> bool {
        let letters = word.letters();
        self.required.is_subset(letters)
            && self.forbidden.is_disjoint(letters)
            && self
                .positions
                .iter()
                .zip(word.chars())
                .all(|(rule, &letter)| rule.allows(letter))
    }
}
