//! Display functions for command results

use super::formatters::create_progress_bar;
use crate::commands::experiments::StartingWordResult;
use crate::commands::simulate::SimulationReport;
use crate::solver::Report;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

/// Progress bar for long loops; hidden when `visible` is false
#[must_use]
pub fn progress_bar(len: u64, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(len);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb
}

/// Print the welcome banner for an interactive session
pub fn print_session_banner(dictionary_size: usize) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {}", "WORDLE HELPER".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!(
        "Dictionary: {} words",
        dictionary_size.to_string().bright_yellow()
    );
    println!(
        "Feedback: {} green, {} yellow, {} gray. Type {} to exit.",
        "!".green().bold(),
        "?".yellow().bold(),
        ".".dimmed(),
        "quit".bright_red()
    );
}

/// Print an engine report under a heading
pub fn print_report(report: &Report) {
    match report {
        Report::Machine(_) => println!("{report}"),
        Report::Text(text) => {
            println!("{}", "─".repeat(60).cyan());
            print!("{text}");
            println!("{}", "─".repeat(60).cyan());
        }
    }
}

/// Print the aggregates of a simulation run, plus each game when `verbose`
pub fn print_simulation_report(report: &SimulationReport, verbose: bool) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {}", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    if verbose {
        for game in &report.games {
            let path: Vec<String> = game
                .rounds
                .iter()
                .map(|(guess, feedback)| {
                    format!("{} {}", guess.text().to_uppercase(), feedback.to_emoji())
                })
                .collect();
            let outcome = match game.attempts {
                Some(n) => format!("✅ {n}").green(),
                None => "❌".red(),
            };
            println!(
                "{}: {}  {outcome}",
                game.solution.text().to_uppercase().bright_yellow(),
                path.join(" → ")
            );
        }
        println!();
    }

    let games = report.games.len();
    let wins = report.wins();
    let bar = create_progress_bar(wins as f64, games as f64, 30);

    println!("Games:        {games}");
    println!("Wins:         {} {}", wins.to_string().green().bold(), bar.green());
    println!("Losses:       {}", report.losses().to_string().red());
    match report.average_attempts() {
        Some(avg) => println!("Avg attempts: {}", format!("{avg:.3}").bright_yellow().bold()),
        None => println!("Avg attempts: {}", "N/A".dimmed()),
    }
}

/// Print the best `top` starting words
pub fn print_experiment_results(results: &[StartingWordResult], top: usize) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {}", "BEST STARTING WORDS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    for (i, result) in results.iter().take(top).enumerate() {
        let total = result.wins + result.losses;
        let bar = create_progress_bar(result.wins as f64, total as f64, 20);
        let average = result
            .average_attempts
            .map_or_else(|| "N/A".to_string(), |avg| format!("{avg:.3}"));

        println!(
            "{:>3}. {}  avg {}  {} {}/{}",
            i + 1,
            result.word.text().to_uppercase().bright_yellow().bold(),
            average,
            bar.green(),
            result.wins,
            total
        );
    }
}
