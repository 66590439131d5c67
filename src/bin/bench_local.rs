//! `bench_local.rs`: quick local timing runner (no Criterion)
//!
//! PURPOSE
//! -------
//! - Fast, ad-hoc timing for a handful of puzzles on *your* machine.
//! - Loads the word list once, then solves each puzzle several times and reports the median.
//! - Every case uses the same chain length, so comparisons stay simple.
//!
//! HOW TO RUN
//! ----------
//! - Optimized build:                `cargo run --bin bench_local --release`
//! - Multiple repeats:               `cargo run --bin bench_local --release -- -r 5`
//! - Print a few solutions:          `cargo run --bin bench_local --release -- -p 5`
//! - Parallel search:                `cargo run --bin bench_local --release --features parallel`
//!
//! NOTES
//! -----
//! - This is *not* Criterion. It's quick and convenient, not statistically rigorous.
//! - Puzzles live in `get_cases()` below.
//! - One warm-up run per puzzle is done (not included in timing).
//! - We report the *median* over repeats (more robust than mean for small _N_).

use clap::Parser;
use std::error::Error;
use std::hint::black_box;
use std::time::Instant;
use letterboxed::solver::{self, SolverConfig};
use letterboxed::word_list;

/// Simple local benchmark runner: load the word list once, time several puzzles.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the word list file (`word` or `word;score` per line)
    #[arg(
        short,
        long,
        default_value = concat!(env!("CARGO_MANIFEST_DIR"), "/data/words.txt")
    )]
    word_list: String,

    /// Minimum score filter
    #[arg(short = 'm', long, default_value_t = 0)]
    min_score: i32,

    /// Maximum words per solution
    #[arg(short = 'l', long = "len", default_value_t = solver::DEFAULT_MAX_CHAIN_LENGTH)]
    max_chain_length: usize,

    /// Number of repeats per puzzle (use >1 to reduce noise; median is reported)
    #[arg(short = 'r', long = "repeats", default_value_t = 1)]
    num_repeats: usize,

    /// Print up to this many solutions per puzzle (0 = print none)
    #[arg(short = 'p', long = "print", default_value_t = 0)]
    print_limit: usize,
}

/// Puzzles timed on every run.
fn get_cases() -> Vec<&'static str> {
    vec![
        "mrf-sna-opu-gci",
        "phk-ifs-tol-cry",
        "lrm-aio-tpe-nsc",
        "yta-hpg-eon-rlb",
    ]
}

/// Small helper: robust central tendency for small samples.
fn median(mut xs: Vec<f64>) -> f64 {
    if xs.is_empty() {
        return 0.0;
    }
    xs.sort_by(f64::total_cmp);
    let n = xs.len();
    if n % 2 == 1 {
        xs[n / 2]
    } else {
        0.5 * (xs[n / 2 - 1] + xs[n / 2])
    }
}

/// Load the word list, keeping the solver's coded error on failure.
fn load_word_list(path: &str, min_score: i32) -> Result<word_list::WordList, Box<dyn Error>> {
    Ok(word_list::WordList::load_from_path(path, min_score)?)
}

fn main() -> Result<(), Box<dyn Error>> {
    /// One row in the benchmark summary: (puzzle, median seconds, number of solutions,
    /// number of playable words).
    type SummaryRow = (String, f64, usize, usize);

    let cli = Cli::parse();

    // Load the word list once. This I/O is *not* included in per-puzzle timing.
    eprintln!("Loading word list from: {}", cli.word_list);
    let t_load = Instant::now();
    let wl = load_word_list(&cli.word_list, cli.min_score)?;
    let load_secs = t_load.elapsed().as_secs_f64();
    eprintln!("Loaded {} words in {:.3}s", wl.len(), load_secs);

    let words_ref = wl.as_strs();
    let config = SolverConfig {
        max_chain_length: cli.max_chain_length,
        time_budget: None,
        ..SolverConfig::default()
    };

    let cases = get_cases();
    let mut summary: Vec<SummaryRow> = Vec::with_capacity(cases.len());

    for (idx, puzzle) in cases.iter().enumerate() {
        eprintln!("\n[{:02}] {}", idx + 1, puzzle);

        let warmup = match solver::solve_puzzle(puzzle, &words_ref, &config) {
            Ok(result) => result,
            Err(e) => {
                eprintln!("  ✗ Warm-up failed: {}", e.display_detailed());
                continue;
            }
        };
        let playable = warmup.stats.playable_words;

        let mut times = Vec::with_capacity(cli.num_repeats);
        let mut last_solutions: Vec<Vec<String>> = Vec::new();

        for rep in 0..cli.num_repeats {
            let t_solve = Instant::now();
            let solve_result = match solver::solve_puzzle(black_box(puzzle), &words_ref, &config) {
                Ok(result) => result,
                Err(e) => {
                    eprintln!("  ✗ Run {}/{} failed: {}", rep + 1, cli.num_repeats, e);
                    continue;
                }
            };
            let solve_secs = t_solve.elapsed().as_secs_f64();

            let _keep = black_box(solve_result.solutions.len());

            times.push(solve_secs);
            last_solutions = solve_result.solutions;

            eprintln!(
                "  run {:>2}/{:>2}: {:.3}s ({} solutions)",
                rep + 1,
                cli.num_repeats,
                solve_secs,
                last_solutions.len()
            );
        }

        let med = median(times);

        if cli.print_limit > 0 {
            for sol in last_solutions.iter().take(cli.print_limit) {
                println!("{}", solver::solution_to_string(sol));
            }
        }

        eprintln!(
            "  → median {:.3}s over {} run(s); {} playable {}, {} {}.",
            med,
            cli.num_repeats,
            playable,
            pluralizer(playable, "word".into(), None),
            last_solutions.len(),
            pluralizer(last_solutions.len(), "solution".into(), None),
        );

        summary.push((puzzle.to_string(), med, last_solutions.len(), playable));
    }

    eprintln!("\n==== Summary ====");
    eprintln!("{:<15} | {:>10} | {:>11} | {:>10}", "puzzle", "median (s)", "# solutions", "# playable");
    eprintln!("{:-<15}-+-{:-<10}-+-{:-<11}-+-{:-<10}", "", "", "", "");
    for (puzzle, med, num_solutions, playable) in &summary {
        eprintln!("{puzzle:<15} | {med:>10.3} | {num_solutions:>11} | {playable:>10}");
    }

    Ok(())
}

fn pluralizer(count: usize, singular: String, plural: Option<String>) -> String {
    if count == 1 {
        singular
    } else {
        plural.unwrap_or_else(|| singular + "s")
    }
}
