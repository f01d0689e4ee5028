//! Wordle Helper - CLI
//!
//! Interactive helper, one-shot suggestions, self-play simulation and word-list
//! analytics over a shared constraint engine.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use wordle_helper::{
    commands::{
        ExperimentConfig, LetterTree, SessionConfig, SessionEnd, SimulationConfig, apply_rounds,
        best_starting_words, experiments::DEFAULT_OUTPUT, run_session, run_simulation,
        write_results,
    },
    core::Word,
    output::{
        print_experiment_results, print_report, print_session_banner, print_simulation_report,
    },
    solver::ConstraintEngine,
    wordlists::{Dictionary, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle_helper",
    about = "Wordle helper: narrows candidates from feedback and ranks the best guesses",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary file, one 5-letter word per line (default: embedded list)
    #[arg(short, long, global = true)]
    dictionary: Option<PathBuf>,

    /// Number of words listed per pool
    #[arg(short, long, global = true, default_value = "20")]
    top: usize,

    /// Show scores in reports and every game in simulations
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive helper (default): enter each guess and its feedback
    Play {
        /// Print `<solutions> <top solution> <guesses> <top guess>` after each round
        #[arg(short, long)]
        machine: bool,
    },

    /// Apply known rounds and print suggestions
    Suggest {
        /// Rounds as guess=feedback, e.g. crane=.?..!
        #[arg(required = true)]
        rounds: Vec<String>,

        /// Print `<solutions> <top solution> <guesses> <top guess>`
        #[arg(short, long)]
        machine: bool,
    },

    /// Let the helper play against itself
    Simulate {
        /// Number of games
        #[arg(short = 'n', long, default_value = "10")]
        iterations: usize,

        /// Forced first guess (default: random word)
        #[arg(short, long)]
        start: Option<String>,

        /// Fixed solution (default: random word per game)
        #[arg(long)]
        solution: Option<String>,

        /// Seed for reproducible runs
        #[arg(long)]
        seed: Option<u64>,

        /// Write the game dataset as CSV
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Rank every dictionary word as a starting word
    BestStart {
        /// Games per starting word
        #[arg(short = 'n', long, default_value = "100")]
        iterations: usize,

        /// Only try the first N dictionary words
        #[arg(short, long)]
        limit: Option<usize>,

        /// Seed for reproducible runs
        #[arg(long)]
        seed: Option<u64>,

        /// Result file
        #[arg(short, long, default_value = DEFAULT_OUTPUT)]
        output: PathBuf,
    },

    /// Print the letter classification tree of the dictionary
    Tree {
        /// Deepest level to print (1-5)
        #[arg(short, long)]
        max_depth: Option<usize>,
    },
}

fn load_dictionary(path: Option<&Path>) -> Result<Dictionary> {
    match path {
        Some(path) => load_from_file(path)
            .with_context(|| format!("Failed to load dictionary {}", path.display())),
        None => Ok(Dictionary::embedded()),
    }
}

fn parse_word(text: &str, what: &str) -> Result<Word> {
    Word::new(text).with_context(|| format!("Invalid {what} '{text}'"))
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let dictionary = load_dictionary(cli.dictionary.as_deref())?;
    log::info!("dictionary: {} words", dictionary.len());

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play { machine: false });

    match command {
        Commands::Play { machine } => run_play_command(&dictionary, cli.top, machine),
        Commands::Suggest { rounds, machine } => {
            run_suggest_command(&dictionary, &rounds, cli.top, cli.verbose, machine)
        }
        Commands::Simulate {
            iterations,
            start,
            solution,
            seed,
            output,
        } => {
            let starting_word = start
                .as_deref()
                .map(|s| parse_word(s, "starting word"))
                .transpose()?;
            let solution = solution
                .as_deref()
                .map(|s| parse_word(s, "solution"))
                .transpose()?;
            let config = SimulationConfig {
                starting_word,
                solution,
                seed,
                show_progress: true,
                ..SimulationConfig::new(iterations)
            };
            run_simulate_command(&dictionary, &config, output.as_deref(), cli.verbose)
        }
        Commands::BestStart {
            iterations,
            limit,
            seed,
            output,
        } => {
            let config = ExperimentConfig {
                limit,
                seed,
                show_progress: true,
                ..ExperimentConfig::new(iterations)
            };
            run_best_start_command(&dictionary, &config, &output, cli.top)
        }
        Commands::Tree { max_depth } => {
            let tree = LetterTree::build(dictionary.words());
            let mut stdout = io::stdout().lock();
            stdout.write_all(tree.render(max_depth).as_bytes())?;
            Ok(())
        }
    }
}

fn run_play_command(dictionary: &Dictionary, top: usize, machine: bool) -> Result<()> {
    let config = SessionConfig {
        machine,
        ..SessionConfig::new(top)
    };
    if !machine {
        print_session_banner(dictionary.len());
    }

    let mut engine = ConstraintEngine::new(dictionary);
    let mut input = io::stdin().lock();
    let mut output = io::stdout().lock();

    match run_session(&mut engine, &mut input, &mut output, &config)? {
        SessionEnd::Solved { rounds } => writeln!(output, "\n✅ Solved in {rounds} guesses!")?,
        SessionEnd::Quit | SessionEnd::EndOfInput => {}
    }
    Ok(())
}

fn run_suggest_command(
    dictionary: &Dictionary,
    rounds: &[String],
    top: usize,
    verbose: bool,
    machine: bool,
) -> Result<()> {
    let mut engine = ConstraintEngine::new(dictionary);
    apply_rounds(&mut engine, rounds)?;

    let report = engine.stats(top, verbose, machine)?;
    print_report(&report);
    Ok(())
}

fn run_simulate_command(
    dictionary: &Dictionary,
    config: &SimulationConfig,
    output: Option<&Path>,
    verbose: bool,
) -> Result<()> {
    let report = run_simulation(dictionary, config, &mut config.rng())?;
    print_simulation_report(&report, verbose);

    if let Some(path) = output {
        let file = File::create(path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        report.write_csv(&mut writer)?;
        writer.flush()?;
        println!("\nDataset written to {}", path.display());
    }
    Ok(())
}

fn run_best_start_command(
    dictionary: &Dictionary,
    config: &ExperimentConfig,
    output: &Path,
    top: usize,
) -> Result<()> {
    println!(
        "Simulating {} games for each of {} starting words...",
        config.iterations,
        config.limit.map_or(dictionary.len(), |n| n.min(dictionary.len()))
    );

    let results = best_starting_words(dictionary, config)?;
    print_experiment_results(&results, top);

    let file =
        File::create(output).with_context(|| format!("Failed to create {}", output.display()))?;
    let mut writer = BufWriter::new(file);
    write_results(&results, &mut writer)?;
    writer.flush()?;
    println!("\nResults written to {}", output.display());
    Ok(())
}
