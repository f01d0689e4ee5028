//! Wordle Helper
//!
//! Narrows the candidate solutions from accumulated guess feedback and ranks
//! words with letter-frequency heuristics.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_helper::solver::ConstraintEngine;
//! use wordle_helper::wordlists::Dictionary;
//!
//! let dictionary = Dictionary::from_strs(&["crane", "trace", "react", "cater"]).unwrap();
//! let mut engine = ConstraintEngine::new(&dictionary);
//!
//! // `!` green, `?` yellow, `.` gray
//! engine.update_str("nylon", ".....").unwrap();
//!
//! let report = engine.stats(5, true, false).unwrap();
//! println!("{report}");
//! ```

// Core domain types
pub mod core;

// Constraint engine and scoring
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
