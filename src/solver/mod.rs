//! Constraint-and-scoring engine
//!
//! Accumulates feedback into a [`ConstraintState`], filters the solution pool with
//! the compiled [`PatternPredicate`], and ranks both pools with frequency
//! heuristics.

mod constraints;
mod engine;
mod frequency;
mod predicate;
mod ranking;

pub use constraints::ConstraintState;
pub use engine::ConstraintEngine;
pub use frequency::{FrequencyTable, RemainingLetterFrequency};
pub use predicate::{PatternPredicate, PositionRule};
pub use ranking::{EmptyPoolError, MachineSummary, Pool, Rankings, Report, ScoredWord};
