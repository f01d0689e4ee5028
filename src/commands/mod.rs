//! Command implementations

pub mod experiments;
pub mod play;
pub mod simulate;
pub mod suggest;
pub mod tree;

pub use experiments::{ExperimentConfig, StartingWordResult, best_starting_words, write_results};
pub use play::{SessionConfig, SessionEnd, run_session};
pub use simulate::{GameRecord, SimulationConfig, SimulationReport, play_game, run_simulation};
pub use suggest::{RoundError, apply_rounds, parse_round};
pub use tree::LetterTree;
