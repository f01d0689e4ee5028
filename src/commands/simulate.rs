//! Simulated games
//!
//! Plays the engine against itself: the solution is fixed or drawn at random,
//! feedback is graded automatically, and the next guess is read off the
//! rankings until the word is found or the attempts run out.

use crate::core::{Feedback, Word};
use crate::output::display::progress_bar;
use crate::solver::{ConstraintEngine, EmptyPoolError, Pool};
use crate::wordlists::Dictionary;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use std::io::{self, Write};

/// Attempts allowed per game
pub const MAX_ATTEMPTS: usize = 6;

/// Below this many candidate solutions the simulator guesses the top solution
/// instead of the top information guess
pub const SWITCH_THRESHOLD: usize = 5;

/// Options for a simulation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationConfig {
    pub iterations: usize,
    /// Forced first guess; random dictionary word when `None`
    pub starting_word: Option<Word>,
    /// Fixed solution for every game; random dictionary word when `None`
    pub solution: Option<Word>,
    pub max_attempts: usize,
    pub switch_threshold: usize,
    pub seed: Option<u64>,
    pub show_progress: bool,
}

impl SimulationConfig {
    #[must_use]
    pub const fn new(iterations: usize) -> Self {
        Self {
            iterations,
            starting_word: None,
            solution: None,
            max_attempts: MAX_ATTEMPTS,
            switch_threshold: SWITCH_THRESHOLD,
            seed: None,
            show_progress: false,
        }
    }

    /// Random number generator for this run, reproducible when a seed is set
    #[must_use]
    pub fn rng(&self) -> StdRng {
        StdRng::seed_from_u64(self.seed.unwrap_or_else(|| rand::rng().random()))
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::new(10)
    }
}

/// One simulated game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub solution: Word,
    pub rounds: Vec<(Word, Feedback)>,
    /// Number of guesses used, or `None` if the game was lost
    pub attempts: Option<usize>,
}

impl GameRecord {
    #[must_use]
    pub const fn is_win(&self) -> bool {
        self.attempts.is_some()
    }

    /// One CSV row: `solution,guess_1,result_1,...,guess_6,result_6,attempts`
    #[must_use]
    pub fn csv_row(&self, max_attempts: usize) -> String {
        let mut fields = Vec::with_capacity(2 * max_attempts + 2);
        fields.push(self.solution.to_string());

        for i in 0..max_attempts {
            match self.rounds.get(i) {
                Some((guess, feedback)) => {
                    fields.push(guess.to_string());
                    fields.push(feedback.to_string());
                }
                None => {
                    fields.push("N/A".to_string());
                    fields.push("N/A".to_string());
                }
            }
        }

        fields.push(self.attempts.map_or_else(|| "-1".to_string(), |n| n.to_string()));
        fields.join(",")
    }
}

/// All games of a run plus their aggregates
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationReport {
    pub games: Vec<GameRecord>,
    pub max_attempts: usize,
}

impl SimulationReport {
    #[must_use]
    pub fn wins(&self) -> usize {
        self.games.iter().filter(|game| game.is_win()).count()
    }

    #[must_use]
    pub fn losses(&self) -> usize {
        self.games.len() - self.wins()
    }

    /// Mean attempts over won games; `None` when nothing was won
    #[must_use]
    pub fn average_attempts(&self) -> Option<f64> {
        let wins = self.wins();
        if wins == 0 {
            return None;
        }
        let total: usize = self.games.iter().filter_map(|game| game.attempts).sum();
        Some(total as f64 / wins as f64)
    }

    /// Write the dataset with a header line
    ///
    /// # Errors
    /// Returns any I/O error from `writer`.
    pub fn write_csv<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        let mut header = vec!["solution".to_string()];
        for i in 1..=self.max_attempts {
            header.push(format!("guess_{i}"));
            header.push(format!("result_{i}"));
        }
        header.push("attempts".to_string());
        writeln!(writer, "{}", header.join(","))?;

        for game in &self.games {
            writeln!(writer, "{}", game.csv_row(self.max_attempts))?;
        }
        Ok(())
    }
}

/// Play a single game against `solution`
///
/// A fresh engine is built for the game. The game is lost when the attempts run
/// out or the pools empty before the solution is found (a solution missing
/// from the dictionary ends this way).
#[must_use]
pub fn play_game(
    dictionary: &Dictionary,
    solution: Word,
    first_guess: Word,
    config: &SimulationConfig,
) -> GameRecord {
    let mut engine = ConstraintEngine::new(dictionary);
    let mut rounds = Vec::with_capacity(config.max_attempts);
    let mut guess = first_guess;

    while rounds.len() < config.max_attempts {
        let feedback = Feedback::grade(&guess, &solution);
        rounds.push((guess, feedback));

        if feedback.is_solved() {
            log::debug!("{solution}: solved in {}", rounds.len());
            return GameRecord {
                solution,
                attempts: Some(rounds.len()),
                rounds,
            };
        }

        engine.update(&guess, &feedback);
        match next_guess(&engine, config.switch_threshold) {
            Ok(next) => guess = next,
            Err(e) => {
                log::warn!("{solution}: {e} after {} rounds", rounds.len());
                break;
            }
        }
    }

    log::debug!("{solution}: not solved");
    GameRecord {
        solution,
        rounds,
        attempts: None,
    }
}

/// Top solution once few remain, otherwise the top information guess
fn next_guess(engine: &ConstraintEngine, switch_threshold: usize) -> Result<Word, EmptyPoolError> {
    let pool = if engine.solution_count() < switch_threshold {
        Pool::Solutions
    } else {
        Pool::Guesses
    };
    engine.rankings().top(pool).map(|scored| scored.word)
}

/// Run `config.iterations` games
///
/// # Errors
/// Returns `EmptyPoolError` if a random solution or starting word is needed and
/// the dictionary is empty.
///
/// # Examples
/// ```
/// use wordle_helper::commands::simulate::{SimulationConfig, run_simulation};
/// use wordle_helper::core::Word;
/// use wordle_helper::wordlists::Dictionary;
///
/// let dictionary = Dictionary::from_strs(&["crane", "trace", "react", "cater"]).unwrap();
/// let config = SimulationConfig {
///     starting_word: Some(Word::new("crane").unwrap()),
///     solution: Some(Word::new("trace").unwrap()),
///     ..SimulationConfig::new(3)
/// };
///
/// let report = run_simulation(&dictionary, &config, &mut config.rng()).unwrap();
/// assert_eq!(report.wins(), 3);
/// assert_eq!(report.average_attempts(), Some(2.0));
/// ```
pub fn run_simulation<R: Rng + ?Sized>(
    dictionary: &Dictionary,
    config: &SimulationConfig,
    rng: &mut R,
) -> Result<SimulationReport, EmptyPoolError> {
    let pb = progress_bar(config.iterations as u64, config.show_progress);
    let mut games = Vec::with_capacity(config.iterations);

    for _ in 0..config.iterations {
        let solution = pick(config.solution, dictionary, rng, Pool::Solutions)?;
        let first_guess = pick(config.starting_word, dictionary, rng, Pool::Guesses)?;

        games.push(play_game(dictionary, solution, first_guess, config));
        pb.inc(1);
    }
    pb.finish_and_clear();

    let report = SimulationReport {
        games,
        max_attempts: config.max_attempts,
    };
    log::info!(
        "simulated {} games: {} wins, {} losses",
        report.games.len(),
        report.wins(),
        report.losses()
    );
    Ok(report)
}

fn pick<R: Rng + ?Sized>(
    fixed: Option<Word>,
    dictionary: &Dictionary,
    rng: &mut R,
    pool: Pool,
) -> Result<Word, EmptyPoolError> {
    match fixed {
        Some(word) => Ok(word),
        None => dictionary
            .words()
            .choose(rng)
            .copied()
            .ok_or(EmptyPoolError { pool }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary() -> Dictionary {
        Dictionary::from_strs(&["crane", "trace", "react", "cater"]).unwrap()
    }

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    #[test]
    fn game_is_won_with_top_solution() {
        let game = play_game(
            &dictionary(),
            word("trace"),
            word("crane"),
            &SimulationConfig::default(),
        );

        assert_eq!(game.attempts, Some(2));
        assert_eq!(game.rounds[0].1.to_string(), "?!!.!");
        assert_eq!(game.rounds[1], (word("trace"), Feedback::SOLVED));
    }

    #[test]
    fn first_guess_can_win() {
        let game = play_game(
            &dictionary(),
            word("react"),
            word("react"),
            &SimulationConfig::default(),
        );
        assert_eq!(game.attempts, Some(1));
        assert_eq!(game.rounds.len(), 1);
    }

    #[test]
    fn running_out_of_attempts_is_a_loss() {
        let config = SimulationConfig {
            max_attempts: 1,
            ..SimulationConfig::default()
        };
        let game = play_game(&dictionary(), word("trace"), word("crane"), &config);

        assert_eq!(game.attempts, None);
        assert_eq!(game.rounds.len(), 1);
    }

    #[test]
    fn empty_pool_is_a_loss() {
        let game = play_game(
            &dictionary(),
            word("pilot"),
            word("crane"),
            &SimulationConfig::default(),
        );

        assert!(!game.is_win());
        assert_eq!(game.rounds.len(), 1);
        assert_eq!(game.rounds[0].1.to_string(), ".....");
    }

    #[test]
    fn csv_row_pads_missing_rounds() {
        let game = play_game(
            &dictionary(),
            word("trace"),
            word("crane"),
            &SimulationConfig::default(),
        );
        assert_eq!(
            game.csv_row(MAX_ATTEMPTS),
            "trace,crane,?!!.!,trace,!!!!!,N/A,N/A,N/A,N/A,N/A,N/A,N/A,N/A,2"
        );

        let lost = GameRecord {
            attempts: None,
            ..game
        };
        assert!(lost.csv_row(MAX_ATTEMPTS).ends_with(",-1"));
    }

    #[test]
    fn csv_has_header_and_one_row_per_game() {
        let config = SimulationConfig {
            solution: Some(word("trace")),
            ..SimulationConfig::new(4)
        };
        let report = run_simulation(&dictionary(), &config, &mut config.rng()).unwrap();

        let mut out = Vec::new();
        report.write_csv(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("solution,guess_1,result_1,guess_2"));
        assert!(lines[0].ends_with("guess_6,result_6,attempts"));
        assert!(lines[1..].iter().all(|line| line.starts_with("trace,")));
    }

    #[test]
    fn seeded_runs_are_reproducible() {
        let config = SimulationConfig {
            seed: Some(7),
            ..SimulationConfig::new(8)
        };
        let a = run_simulation(&dictionary(), &config, &mut config.rng()).unwrap();
        let b = run_simulation(&dictionary(), &config, &mut config.rng()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn aggregates() {
        let config = SimulationConfig::new(20);
        let report = run_simulation(&dictionary(), &config, &mut config.rng()).unwrap();

        assert_eq!(report.games.len(), 20);
        assert_eq!(report.wins() + report.losses(), 20);
        if let Some(avg) = report.average_attempts() {
            assert!((1.0..=6.0).contains(&avg));
        }
    }

    #[test]
    fn no_wins_has_no_average() {
        let report = SimulationReport {
            games: Vec::new(),
            max_attempts: MAX_ATTEMPTS,
        };
        assert_eq!(report.average_attempts(), None);
        assert_eq!(report.losses(), 0);
    }

    #[test]
    fn empty_dictionary_is_an_error() {
        let config = SimulationConfig::new(1);
        let empty = Dictionary::from_strs(&[]).unwrap();
        let result = run_simulation(&empty, &config, &mut config.rng());
        assert_eq!(
            result,
            Err(EmptyPoolError {
                pool: Pool::Solutions
            })
        );
    }
}
