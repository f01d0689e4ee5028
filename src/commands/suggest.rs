//! One-shot suggestions
//!
//! Applies a list of `guess=feedback` rounds (for example `crane=.?..!`) to a
//! fresh engine and reports the result, without prompting.

use crate::core::{Feedback, FeedbackError, Word};
use crate::solver::ConstraintEngine;
use std::fmt;

/// Error for a malformed `guess=feedback` argument
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundError {
    MissingSeparator(String),
    Invalid { round: String, source: FeedbackError },
}

impl fmt::Display for RoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSeparator(round) => {
                write!(f, "Round '{round}' must look like guess=feedback, e.g. crane=.?..!")
            }
            Self::Invalid { round, source } => write!(f, "Round '{round}': {source}"),
        }
    }
}

impl std::error::Error for RoundError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::MissingSeparator(_) => None,
            Self::Invalid { source, .. } => Some(source),
        }
    }
}

/// Parse one `guess=feedback` (or `guess:feedback`) round
///
/// # Errors
/// Returns `RoundError` if the separator is missing or either half is invalid.
///
/// # Examples
/// ```
/// use wordle_helper::commands::suggest::parse_round;
///
/// let (guess, feedback) = parse_round("crane=.?..!").unwrap();
/// assert_eq!(guess.text(), "crane");
/// assert_eq!(feedback.to_string(), ".?..!");
/// ```
pub fn parse_round(round: &str) -> Result<(Word, Feedback), RoundError> {
    let (guess, feedback) = round
        .split_once(['=', ':'])
        .ok_or_else(|| RoundError::MissingSeparator(round.to_string()))?;

    let invalid = |source| RoundError::Invalid {
        round: round.to_string(),
        source,
    };
    let guess = Word::new(guess.trim()).map_err(|e| invalid(FeedbackError::from(e)))?;
    let feedback = Feedback::parse(feedback.trim()).map_err(invalid)?;

    Ok((guess, feedback))
}

/// Apply every round in order
///
/// All rounds are parsed before the first one is applied, so a bad argument
/// leaves the engine unchanged.
///
/// # Errors
/// Returns the first `RoundError` encountered.
pub fn apply_rounds<S: AsRef<str>>(
    engine: &mut ConstraintEngine,
    rounds: &[S],
) -> Result<(), RoundError> {
    let parsed = rounds
        .iter()
        .map(|round| parse_round(round.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;

    for (guess, feedback) in &parsed {
        engine.update(guess, feedback);
    }

    Ok(())
}
