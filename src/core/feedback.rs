//! Guess feedback: per-position symbols and the `! ? .` text encoding
//!
//! - `!` = Green (letter confirmed at this position)
//! - `?` = Yellow (letter present, but not here)
//! - `.` = Gray (letter not usable as asserted)

use super::word::{WORD_LENGTH, Word, WordError};
use std::fmt;

/// Feedback for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedbackSymbol {
    Green,
    Yellow,
    Gray,
}

impl FeedbackSymbol {
    /// Parse one symbol of the `! ? .` encoding
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '!' => Some(Self::Green),
            '?' => Some(Self::Yellow),
            '.' => Some(Self::Gray),
            _ => None,
        }
    }

    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Self::Green => '!',
            Self::Yellow => '?',
            Self::Gray => '.',
        }
    }

    /// Square emoji for terminal display
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Green => '🟩',
            Self::Yellow => '🟨',
            Self::Gray => '⬜',
        }
    }
}

/// Error type for rejected guess/feedback input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedbackError {
    /// Feedback did not have exactly 5 symbols
    InvalidLength(usize),
    /// A symbol outside `! ? .`
    InvalidSymbol { position: usize, symbol: char },
    /// The guess itself is not a valid word
    InvalidGuess(WordError),
}

impl fmt::Display for FeedbackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => write!(
                f,
                "Feedback must be exactly {WORD_LENGTH} symbols, got {len}"
            ),
            Self::InvalidSymbol { position, symbol } => write!(
                f,
                "Invalid feedback symbol '{symbol}' at position {}; use '!', '?' or '.'",
                position + 1
            ),
            Self::InvalidGuess(e) => write!(f, "Invalid guess: {e}"),
        }
    }
}

impl std::error::Error for FeedbackError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidGuess(e) => Some(e),
            _ => None,
        }
    }
}

impl From<WordError> for FeedbackError {
    fn from(e: WordError) -> Self {
        Self::InvalidGuess(e)
    }
}

/// Feedback for a whole guess, positionally aligned with the guessed word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([FeedbackSymbol; WORD_LENGTH]);

impl Feedback {
    /// All greens, the solved sentinel `!!!!!`
    pub const SOLVED: Self = Self([FeedbackSymbol::Green; WORD_LENGTH]);

    #[must_use]
    pub const fn new(symbols: [FeedbackSymbol; WORD_LENGTH]) -> Self {
        Self(symbols)
    }

    /// Parse a feedback string such as `"!?..."`
    ///
    /// # Errors
    /// Returns `FeedbackError::InvalidLength` if the input is not 5 characters,
    /// or `FeedbackError::InvalidSymbol` for a character outside `! ? .`.
    ///
    /// # Examples
    /// ```
    /// use wordle_helper::core::{Feedback, FeedbackSymbol};
    ///
    /// let feedback = Feedback::parse("!?...").unwrap();
    /// assert_eq!(feedback.symbol(0), FeedbackSymbol::Green);
    /// assert_eq!(feedback.symbol(1), FeedbackSymbol::Yellow);
    /// assert!(Feedback::parse("????").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, FeedbackError> {
        let len = s.chars().count();
        if len != WORD_LENGTH {
            return Err(FeedbackError::InvalidLength(len));
        }

        let mut symbols = [FeedbackSymbol::Gray; WORD_LENGTH];
        for (position, (slot, symbol)) in symbols.iter_mut().zip(s.chars()).enumerate() {
            *slot = FeedbackSymbol::from_char(symbol)
                .ok_or(FeedbackError::InvalidSymbol { position, symbol })?;
        }

        Ok(Self(symbols))
    }

    /// Grade `guess` against a hidden `solution`
    ///
    /// Green on an exact position match, Yellow when the letter occurs anywhere in
    /// the solution, Gray otherwise. Duplicate letters are not budgeted: every
    /// occurrence of a present letter is Yellow.
    #[must_use]
    pub fn grade(guess: &Word, solution: &Word) -> Self {
        let mut symbols = [FeedbackSymbol::Gray; WORD_LENGTH];
        for (i, symbol) in symbols.iter_mut().enumerate() {
            let letter = guess.char_at(i);
            *symbol = if letter == solution.char_at(i) {
                FeedbackSymbol::Green
            } else if solution.has_letter(letter) {
                FeedbackSymbol::Yellow
            } else {
                FeedbackSymbol::Gray
            };
        }
        Self(symbols)
    }

    #[inline]
    #[must_use]
    pub const fn symbol(&self, position: usize) -> FeedbackSymbol {
        self.0[position]
    }

    #[inline]
    #[must_use]
    pub const fn symbols(&self) -> &[FeedbackSymbol; WORD_LENGTH] {
        &self.0
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        *self == Self::SOLVED
    }

    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|s| s.to_emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.0 {
            write!(f, "{}", symbol.to_char())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Feedback {
    type Err = FeedbackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
