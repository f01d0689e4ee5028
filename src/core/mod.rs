//! Core domain types for Wordle
//!
//! Words, letter sets and feedback. No external dependencies; everything here is
//! a small value type that the solver and the commands build on.

mod feedback;
mod letters;
mod word;

pub use feedback::{Feedback, FeedbackError, FeedbackSymbol};
pub use letters::LetterSet;
pub use word::{WORD_LENGTH, Word, WordError};
