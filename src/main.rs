//! Wordle Oracle - CLI
//!
//! Interactive Wordle assistant that suggests maximum-entropy guesses and
//! narrows the candidate pool from feedback you type in.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use wordle_oracle::{
    commands::{analyze_word, run_bench, run_play, solve_word},
    core::Word,
    output::{
        print_analysis, print_bench_report, print_play_banner, print_solve_report,
    },
    solver::InteractiveFeedback,
    wordlists::{ALLOWED, SOLUTIONS, loader},
};

#[derive(Parser)]
#[command(
    name = "wordle_oracle",
    about = "Wordle assistant that suggests maximum-entropy guesses",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Candidate solutions, one word per line (default: embedded list)
    #[arg(long, global = true, value_name = "FILE")]
    solutions: Option<PathBuf>,

    /// Guessable vocabulary, one word per line (default: embedded list)
    #[arg(long, global = true, value_name = "FILE")]
    allowed: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive assistant (default) - type feedback, get guesses
    Play,

    /// Solve a specific target word by self-play
    Solve {
        /// The target word to solve
        word: String,

        /// Show candidate counts for every round
        #[arg(short, long)]
        verbose: bool,
    },

    /// Score a word as the opening guess
    Analyze {
        /// Word to analyze
        word: String,
    },

    /// Solve every candidate and report round statistics
    Bench {
        /// Limit number of words to test
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

/// Load word lists from the command line flags or the embedded defaults
///
/// Returns (vocabulary, solutions).
fn load_pools(cli: &Cli) -> Result<(Vec<Word>, Vec<Word>)> {
    let solutions = match &cli.solutions {
        Some(path) => loader::load_from_file(path)
            .with_context(|| format!("reading solution list {}", path.display()))?,
        None => loader::words_from_slice(SOLUTIONS),
    };
    let vocabulary = match &cli.allowed {
        Some(path) => loader::load_from_file(path)
            .with_context(|| format!("reading vocabulary {}", path.display()))?,
        None => loader::words_from_slice(ALLOWED),
    };

    if solutions.is_empty() {
        bail!("solution list contains no valid five-letter words");
    }
    if vocabulary.is_empty() {
        bail!("vocabulary contains no valid five-letter words");
    }

    Ok((vocabulary, solutions))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (vocabulary, solutions) = load_pools(&cli)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&vocabulary, &solutions),
        Commands::Solve { word, verbose } => {
            run_solve_command(&word, verbose, &vocabulary, &solutions)
        }
        Commands::Analyze { word } => run_analyze_command(&word, &vocabulary, &solutions),
        Commands::Bench { limit } => {
            run_bench_command(limit, &vocabulary, &solutions);
            Ok(())
        }
    }
}

fn run_play_command(vocabulary: &[Word], solutions: &[Word]) -> Result<()> {
    print_play_banner(solutions.len(), vocabulary.len());

    let stdin = io::stdin();
    let mut source = InteractiveFeedback::new(stdin.lock());
    run_play(vocabulary, solutions, &mut source).map_err(|e| anyhow::anyhow!(e))
}

fn run_solve_command(
    word: &str,
    verbose: bool,
    vocabulary: &[Word],
    solutions: &[Word],
) -> Result<()> {
    let report = solve_word(word, vocabulary, solutions).map_err(|e| anyhow::anyhow!(e))?;
    print_solve_report(&report, verbose);
    Ok(())
}

fn run_analyze_command(word: &str, vocabulary: &[Word], solutions: &[Word]) -> Result<()> {
    let report = analyze_word(word, vocabulary, solutions).map_err(|e| anyhow::anyhow!(e))?;
    print_analysis(&report);
    Ok(())
}

fn run_bench_command(limit: Option<usize>, vocabulary: &[Word], solutions: &[Word]) {
    match limit {
        Some(n) => println!("Solving the first {n} of {} candidates...", solutions.len()),
        None => println!("Solving all {} candidates...", solutions.len()),
    }

    let report = run_bench(vocabulary, solutions, limit);
    print_bench_report(&report);
}
