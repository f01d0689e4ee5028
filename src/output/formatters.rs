//! Report rendering
//!
//! Pure functions from ranked results to text. No colors here, so output is
//! stable and testable; decoration happens in [`super::display`].

use crate::solver::{MachineSummary, Rankings, ScoredWord};
use std::fmt::Write;

const SOLUTIONS_HEADING: &str = "Most Likely Word";
const GUESSES_HEADING: &str = "Optimal Guesses";
const NO_SOLUTIONS: &str = "No Words Likely: Word probably not in current dictionary";
const NO_GUESSES: &str = "No Guesses Left!";

/// Render the two labeled listings
///
/// At most `top_n` entries per pool; scores are appended when `verbose`.
///
/// # Examples
/// ```
/// use wordle_helper::output::formatters::render_text;
/// use wordle_helper::solver::ConstraintEngine;
/// use wordle_helper::wordlists::Dictionary;
///
/// let dictionary = Dictionary::from_strs(&["crane", "trace"]).unwrap();
/// let engine = ConstraintEngine::new(&dictionary);
///
/// let text = render_text(&engine.rankings(), 1, false);
/// assert_eq!(text, "Most Likely Word\n1. crane\n\nOptimal Guesses\n1. crane\n");
/// ```
#[must_use]
pub fn render_text(rankings: &Rankings, top_n: usize, verbose: bool) -> String {
    let mut out = String::new();
    render_section(
        &mut out,
        SOLUTIONS_HEADING,
        NO_SOLUTIONS,
        &rankings.solutions,
        top_n,
        verbose,
    );
    out.push('\n');
    render_section(
        &mut out,
        GUESSES_HEADING,
        NO_GUESSES,
        &rankings.guesses,
        top_n,
        verbose,
    );
    out
}

fn render_section(
    out: &mut String,
    heading: &str,
    empty_message: &str,
    ranked: &[ScoredWord],
    top_n: usize,
    verbose: bool,
) {
    out.push_str(heading);
    out.push('\n');

    let count = top_n.min(ranked.len());
    if count == 0 {
        out.push_str(empty_message);
        out.push('\n');
        return;
    }

    for (i, scored) in ranked.iter().take(count).enumerate() {
        // Writing to a String cannot fail
        let _ = if verbose {
            writeln!(out, "{}. {} - score: {}", i + 1, scored.word, scored.score)
        } else {
            writeln!(out, "{}. {}", i + 1, scored.word)
        };
    }
}

/// Render the machine-mode tuple on one line:
/// `<solution count> <top solution> <guess count> <top guess>`
#[must_use]
pub fn render_machine(summary: &MachineSummary) -> String {
    format!(
        "{} {} {} {}",
        summary.solution_count, summary.top_solution, summary.guess_count, summary.top_guess
    )
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::ConstraintEngine;
    use crate::wordlists::Dictionary;

    fn sample_engine() -> ConstraintEngine {
        let dictionary = Dictionary::from_strs(&["crane", "trace", "react", "cater"]).unwrap();
        ConstraintEngine::new(&dictionary)
    }

    #[test]
    fn text_report_verbose() {
        let text = render_text(&sample_engine().rankings(), 2, true);
        assert_eq!(
            text,
            "Most Likely Word\n\
             1. crane - score: 10\n\
             2. trace - score: 10\n\
             \n\
             Optimal Guesses\n\
             1. trace - score: 19\n\
             2. react - score: 19\n"
        );
    }

    #[test]
    fn text_report_truncates_to_pool_size() {
        let text = render_text(&sample_engine().rankings(), 20, false);
        let numbered = text.lines().filter(|l| l.contains(". ")).count();
        assert_eq!(numbered, 8);
        assert!(text.contains("4. cater"));
        assert!(!text.contains("5."));
    }

    #[test]
    fn text_report_empty_solution_pool() {
        let mut engine = sample_engine();
        engine.update_str("crane", "!....").unwrap();

        let text = render_text(&engine.rankings(), 3, false);
        assert!(text.starts_with(
            "Most Likely Word\nNo Words Likely: Word probably not in current dictionary\n\n"
        ));
        assert!(text.contains("Optimal Guesses\n1. crane\n"));
    }

    #[test]
    fn text_report_zero_entries_uses_empty_messages() {
        let text = render_text(&sample_engine().rankings(), 0, false);
        assert!(text.contains(NO_SOLUTIONS));
        assert!(text.contains(NO_GUESSES));
    }

    #[test]
    fn text_report_is_deterministic() {
        let engine = sample_engine();
        assert_eq!(
            render_text(&engine.rankings(), 5, true),
            render_text(&engine.rankings(), 5, true)
        );
    }

    #[test]
    fn machine_line() {
        let summary = sample_engine().summary().unwrap();
        assert_eq!(render_machine(&summary), "4 crane 4 trace");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }
}
