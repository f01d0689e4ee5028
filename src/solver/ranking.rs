//! Ranked views over the engine's pools
//!
//! [`Rankings`] is the single ranked-result structure; the text report and the
//! machine summary are both rendered from it.

use crate::core::Word;
use std::cmp::Reverse;
use std::fmt;

/// A word together with its heuristic score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredWord {
    pub word: Word,
    pub score: u32,
}

/// Which working set an operation refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pool {
    Solutions,
    Guesses,
}

impl fmt::Display for Pool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Solutions => f.write_str("solution"),
            Self::Guesses => f.write_str("guess"),
        }
    }
}

/// The top-ranked item of an empty pool was requested
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyPoolError {
    pub pool: Pool,
}

impl fmt::Display for EmptyPoolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "The {} pool is empty; no top-ranked word exists", self.pool)
    }
}

impl std::error::Error for EmptyPoolError {}

/// Both pools sorted by score, highest first
///
/// Ties keep dictionary order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rankings {
    pub solutions: Vec<ScoredWord>,
    pub guesses: Vec<ScoredWord>,
}

impl Rankings {
    /// Sort both pools, given in dictionary order
    #[must_use]
    pub fn new(solutions: &[ScoredWord], guesses: &[ScoredWord]) -> Self {
        Self {
            solutions: rank(solutions),
            guesses: rank(guesses),
        }
    }

    /// Highest-scoring word of a pool
    ///
    /// # Errors
    /// Returns `EmptyPoolError` if that pool has no words.
    pub fn top(&self, pool: Pool) -> Result<&ScoredWord, EmptyPoolError> {
        let ranked = match pool {
            Pool::Solutions => &self.solutions,
            Pool::Guesses => &self.guesses,
        };
        ranked.first().ok_or(EmptyPoolError { pool })
    }

    /// Condense into the machine-mode tuple
    ///
    /// # Errors
    /// Returns `EmptyPoolError` if either pool is empty.
    pub fn summary(&self) -> Result<MachineSummary, EmptyPoolError> {
        Ok(MachineSummary {
            solution_count: self.solutions.len(),
            top_solution: self.top(Pool::Solutions)?.word,
            guess_count: self.guesses.len(),
            top_guess: self.top(Pool::Guesses)?.word,
        })
    }
}

/// Stable sort by descending score
fn rank(pool: &[ScoredWord]) -> Vec<ScoredWord> {
    let mut ranked = pool.to_vec();
    ranked.sort_by_key(|scored| Reverse(scored.score));
    ranked
}

/// Compact machine-readable view: pool sizes and their top words
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MachineSummary {
    pub solution_count: usize,
    pub top_solution: Word,
    pub guess_count: usize,
    pub top_guess: Word,
}

/// Result of [`ConstraintEngine::stats`](super::ConstraintEngine::stats)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    Machine(MachineSummary),
    Text(String),
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Machine(summary) => {
                f.write_str(&crate::output::formatters::render_machine(summary))
            }
            Self::Text(text) => f.write_str(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scored(word: &str, score: u32) -> ScoredWord {
        ScoredWord {
            word: Word::new(word).unwrap(),
            score,
        }
    }

    #[test]
    fn ranking_is_descending_and_stable() {
        let pool = [
            scored("cater", 6),
            scored("crane", 10),
            scored("react", 8),
            scored("trace", 10),
        ];
        let rankings = Rankings::new(&pool, &pool);

        let order: Vec<&str> = rankings.solutions.iter().map(|s| s.word.text()).collect();
        assert_eq!(order, ["crane", "trace", "react", "cater"]);
        assert_eq!(rankings.solutions, rankings.guesses);
    }

    #[test]
    fn summary_of_non_empty_pools() {
        let solutions = [scored("crane", 3), scored("slate", 5)];
        let guesses = [scored("arose", 1), scored("irate", 0), scored("crane", 0)];
        let summary = Rankings::new(&solutions, &guesses).summary().unwrap();

        assert_eq!(summary.solution_count, 2);
        assert_eq!(summary.top_solution.text(), "slate");
        assert_eq!(summary.guess_count, 3);
        assert_eq!(summary.top_guess.text(), "arose");
    }

    #[test]
    fn summary_of_empty_solution_pool_fails() {
        let guesses = [scored("arose", 1)];
        let err = Rankings::new(&[], &guesses).summary().unwrap_err();
        assert_eq!(err.pool, Pool::Solutions);
        assert!(err.to_string().contains("solution pool"));
    }

    #[test]
    fn top_of_empty_guess_pool_fails() {
        let rankings = Rankings::new(&[scored("crane", 1)], &[]);
        assert_eq!(
            rankings.top(Pool::Guesses),
            Err(EmptyPoolError {
                pool: Pool::Guesses
            })
        );
    }
}
