use std::process::ExitCode;
use std::time::{Duration, Instant};

use clap::Parser;

use letterboxed::solver::{self, SolveStatus, SolverConfig, SolverError};
use letterboxed::word_list::WordList;

/// Letter Boxed puzzle solver
#[derive(Parser, Debug)]
#[command(author, version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")"), about, long_about = None)]
struct Cli {
    /// Puzzle as four dash-separated sides of three letters
    #[arg(short, long, default_value = "mrf-sna-opu-gci")]
    puzzle: String,

    /// Path to the word list (one word, or `word;score`, per line)
    #[arg(
        short,
        long,
        default_value = concat!(env!("CARGO_MANIFEST_DIR"), "/data/words.txt")
    )]
    dict: String,

    /// Maximum length, in words, of solutions
    #[arg(short = 'l', long = "len", default_value_t = solver::DEFAULT_MAX_CHAIN_LENGTH)]
    max_chain_length: usize,

    /// Shortest word that may be played
    #[arg(short = 'w', long, default_value_t = solver::DEFAULT_MIN_WORD_LEN)]
    min_word_len: usize,

    /// Minimum score for `word;score` entries
    #[arg(short = 'm', long, default_value_t = 0)]
    min_score: i32,

    /// Stop after this many solutions (the first ones found, then ranked)
    #[arg(short = 'n', long)]
    limit: Option<usize>,

    /// Search time budget in seconds (0 = no limit)
    #[arg(short, long, default_value_t = 30)]
    timeout: u64,

    /// Only reveal the first word of the top-ranked solution found
    #[arg(long)]
    hint: bool,
}

impl Cli {
    fn solver_config(&self) -> SolverConfig {
        SolverConfig {
            max_chain_length: self.max_chain_length,
            min_word_len: self.min_word_len,
            time_budget: (self.timeout > 0).then(|| Duration::from_secs(self.timeout)),
            max_solutions: self.limit,
        }
    }
}

/// Entry point of the Letter Boxed CLI solver.
///
/// Delegates to [`try_main`], printing any error with its code and help text
/// before exiting with code 1.
fn main() -> ExitCode {
    let debug_enabled = std::env::var("LETTERBOXED_DEBUG").is_ok();
    letterboxed::log::init_logger(debug_enabled);

    if let Err(e) = try_main() {
        if let Some(solver_err) = e.downcast_ref::<SolverError>() {
            eprintln!("Error: {}", solver_err.display_detailed());
        } else {
            eprintln!("Error: {e}");
        }
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Core application logic for the CLI.
///
/// Steps:
/// 1. Parse CLI arguments with Clap.
/// 2. Load the word list from disk.
/// 3. Solve the puzzle.
/// 4. Print each solution (or just the hint) on stdout.
/// 5. Print diagnostics (counts, timings, status) on stderr.
fn try_main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    log::info!("solving puzzle {}", cli.puzzle);

    let t_load = Instant::now();
    let word_list = WordList::load_from_path(&cli.dict, cli.min_score)?;
    let load_secs = t_load.elapsed().as_secs_f64();

    let words = word_list.as_strs();
    let result = solver::solve_puzzle(&cli.puzzle, &words, &cli.solver_config())?;

    if cli.hint {
        match result.solutions.first().and_then(|s| s.first()) {
            Some(word) => println!("Hint: start with {}", word.to_ascii_uppercase()),
            None => println!("No solutions, so no hint"),
        }
    } else {
        for solution in &result.solutions {
            println!("{}", solver::solution_to_string(solution));
        }
    }

    match result.status {
        SolveStatus::TimedOut { elapsed } => {
            eprintln!("⚠️  Timed out after {:.1}s; some solutions may not have been returned", elapsed.as_secs_f64());
        }
        SolveStatus::FoundEnough => {
            eprintln!("✓ Stopped after finding {} solutions", result.solutions.len());
        }
        SolveStatus::Exhausted => {
            eprintln!("✓ Search exhausted");
        }
    }

    let stats = &result.stats;
    eprintln!(
        "Loaded {} words in {:.3}s; {} playable ({} signatures); solved in {:.3}s ({} solutions).",
        word_list.len(),
        load_secs,
        stats.playable_words,
        stats.signatures,
        stats.search_time.as_secs_f64(),
        result.solutions.len()
    );

    Ok(())
}
