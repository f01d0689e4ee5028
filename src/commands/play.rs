//! Interactive session
//!
//! Reads a guess and its feedback each round, updates the engine and prints the
//! refreshed report. Generic over the input and output streams so the loop can be
//! driven from tests as well as from a terminal.

use crate::core::Feedback;
use crate::solver::ConstraintEngine;
use std::io::{self, BufRead, Write};

/// Literal input that ends the session at either prompt
pub const QUIT: &str = "quit";

/// Display options for the per-round report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub top_n: usize,
    pub verbose: bool,
    pub machine: bool,
}

impl SessionConfig {
    #[must_use]
    pub const fn new(top_n: usize) -> Self {
        Self {
            top_n,
            verbose: true,
            machine: false,
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new(20)
    }
}

/// How a session finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user typed `quit`
    Quit,
    /// The user reported all greens
    Solved { rounds: usize },
    /// Input stream closed
    EndOfInput,
}

/// Run the guess/feedback loop until quit, solved or end of input
///
/// Invalid input is reported and the user is asked again; errors never end the
/// session.
///
/// # Errors
///
/// Returns an error only for I/O failures on `input` or `output`.
pub fn run_session<R: BufRead, W: Write>(
    engine: &mut ConstraintEngine,
    input: &mut R,
    output: &mut W,
    config: &SessionConfig,
) -> io::Result<SessionEnd> {
    let mut rounds = 0;

    loop {
        let Some(guess) = prompt(input, output, "Enter guess")? else {
            return Ok(SessionEnd::EndOfInput);
        };
        if guess == QUIT {
            return Ok(SessionEnd::Quit);
        }

        let Some(result) = prompt(input, output, "Enter result")? else {
            return Ok(SessionEnd::EndOfInput);
        };
        if result == QUIT {
            return Ok(SessionEnd::Quit);
        }

        if Feedback::parse(&result).is_ok_and(|feedback| feedback.is_solved()) {
            let rounds = rounds + 1;
            log::info!("solved in {rounds} rounds");
            return Ok(SessionEnd::Solved { rounds });
        }

        if let Err(e) = engine.update_str(&guess, &result) {
            writeln!(output, "\n❌ {e}")?;
            continue;
        }
        rounds += 1;

        match engine.stats(config.top_n, config.verbose, config.machine) {
            Ok(report) => write!(output, "\n{report}")?,
            Err(e) => writeln!(output, "\n❌ {e}")?,
        }
        if config.machine {
            writeln!(output)?;
        }
    }
}

/// Print a prompt and read one trimmed, lowercased line
///
/// Returns `None` at end of input.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> io::Result<Option<String>> {
    write!(output, "\n{message}:\n")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_lowercase()))
}
