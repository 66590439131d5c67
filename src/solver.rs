//! The solver: bounded depth-first search over the puzzle graph.
//!
//! # Error Handling
//!
//! The solver uses [`SolverError`] with three variants:
//!
//! - S001: `MalformedPuzzle` (Puzzle string is invalid (wraps [`PuzzleError`]))
//! - S002: `DictionarySourceUnavailable` (Word list could not be read)
//! - S003: `InvalidChainLength` (Maximum chain length is zero)
//!
//! Each error has a `code()`, optional `help()`, and `display_detailed()` method.
//! Finding no solutions is not an error: the result simply has an empty `solutions` list.
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```
//! use letterboxed::solver::{self, SolverConfig};
//!
//! let words = vec!["pitchforks", "sly", "shy", "pitch"];
//! let result = solver::solve_puzzle("phk-ifs-tol-cry", &words, &SolverConfig::default())?;
//!
//! assert_eq!(result.solutions, vec![vec!["pitchforks".to_string(), "sly".to_string()]]);
//! for solution in &result.solutions {
//!     println!("{}", solver::solution_to_string(solution));
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Handling Errors with Detailed Messages
//!
//! ```
//! use letterboxed::solver::{self, SolverConfig};
//!
//! match solver::solve_puzzle("ab-cde-fgh-ijk", &["able"], &SolverConfig::default()) {
//!     Ok(result) => println!("{} solutions", result.solutions.len()),
//!     Err(e) => {
//!         assert_eq!(e.code(), "S001");
//!         eprintln!("{}", e.display_detailed());
//!     }
//! }
//! ```
//!
//! ## Checking Solve Status
//!
//! ```
//! use letterboxed::solver::{self, SolveStatus, SolverConfig};
//!
//! let config = SolverConfig { max_solutions: Some(1), ..SolverConfig::default() };
//! let result = solver::solve_puzzle("phk-ifs-tol-cry", &["pitchforks", "sly"], &config)?;
//!
//! match result.status {
//!     SolveStatus::FoundEnough => println!("Found all requested results"),
//!     SolveStatus::Exhausted => println!("Searched every chain"),
//!     SolveStatus::TimedOut { elapsed } => println!("Timed out after {:?}", elapsed),
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crate::errors::PuzzleError;
use crate::extractor::extract_words;
use crate::graph::PuzzleGraph;
use crate::letter::LetterSet;
use crate::puzzle::Puzzle;
use crate::trie::Trie;
use instant::Instant;
use log::{debug, info, warn};
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

// The amount of time (in seconds) we allow a search to run by default
const TIME_BUDGET: u64 = 30;
/// Default maximum number of words in a solution.
pub const DEFAULT_MAX_CHAIN_LENGTH: usize = 3;
/// Default minimum word length (the published game's rule).
pub const DEFAULT_MIN_WORD_LEN: usize = 3;

/// Status of the solver run.
#[derive(Debug, Clone, PartialEq)]
pub enum SolveStatus {
    /// Every chain within the length bound was explored.
    Exhausted,

    /// Solver stopped early because the requested number of results was found.
    FoundEnough,

    /// Solver stopped because the time budget expired. Contains the elapsed time.
    TimedOut { elapsed: Duration },
}

/// Sizes and timings gathered along the pipeline.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SolveStats {
    pub dictionary_words: usize,
    pub playable_words: usize,
    pub signatures: usize,
    pub index_time: Duration,
    pub extract_time: Duration,
    pub search_time: Duration,
}

/// Successful solver run (even if it stopped early).
#[derive(Debug, Clone)]
pub struct SolveResult {
    /// Each solution is an ordered chain of words.
    pub solutions: Vec<Vec<String>>,
    /// Status indicating whether we finished or stopped early.
    pub status: SolveStatus,
    pub stats: SolveStats,
}

impl SolveResult {
    #[must_use]
    pub fn len(&self) -> usize {
        self.solutions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.solutions.is_empty()
    }
}

impl IntoIterator for SolveResult {
    type Item = Vec<String>;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.solutions.into_iter()
    }
}

/// Unified error type for the solver pipeline.
#[derive(Debug, thiserror::Error)]
pub enum SolverError {
    /// The puzzle string does not describe four sides of three distinct letters.
    #[error("malformed puzzle: {0}")]
    MalformedPuzzle(#[from] Box<PuzzleError>),

    /// The word list could not be read. No fallback dictionary is substituted.
    #[error("failed to read word list from '{path}': {source}")]
    DictionarySourceUnavailable {
        path: String,
        #[source]
        source: io::Error,
    },

    /// A chain must be allowed at least one word.
    #[error("maximum chain length must be at least 1 (got {max})")]
    InvalidChainLength { max: usize },
}

impl SolverError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            SolverError::MalformedPuzzle(_) => "S001",
            SolverError::DictionarySourceUnavailable { .. } => "S002",
            SolverError::InvalidChainLength { .. } => "S003",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            SolverError::MalformedPuzzle(_) => "Puzzle string is invalid",
            SolverError::DictionarySourceUnavailable { .. } => "Word list could not be read",
            SolverError::InvalidChainLength { .. } => "Maximum chain length is zero",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            SolverError::MalformedPuzzle(_) => "The puzzle could not be parsed into four sides of three distinct letters. This wraps an underlying PuzzleError (see Puzzle Errors section for specific error codes).",
            SolverError::DictionarySourceUnavailable { .. } => "The word list file could not be opened or was not valid UTF-8. The solver never falls back to a built-in dictionary.",
            SolverError::InvalidChainLength { .. } => "Solutions are limited to a maximum number of words. A limit of zero admits no chains at all.",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            SolverError::MalformedPuzzle(_) => None, // PuzzleError has its own help
            SolverError::DictionarySourceUnavailable { .. } => Some("Check the path passed with --dict; the file should hold one word per line"),
            SolverError::InvalidChainLength { .. } => Some("Use a maximum chain length of 1 or more (the default is 3)"),
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        match self {
            SolverError::MalformedPuzzle(pe) => {
                // delegate to PuzzleError's detailed display
                format!("{}\n  caused by: {}", self.code(), pe.display_detailed())
            }
            _ => {
                crate::errors::format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
            }
        }
    }
}

/// Search configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct SolverConfig {
    /// Maximum number of words in a solution.
    pub max_chain_length: usize,
    /// Shorter dictionary words are never played.
    pub min_word_len: usize,
    /// Wall-clock limit for the search; `None` searches to completion.
    pub time_budget: Option<Duration>,
    /// Stop after this many solutions; `None` enumerates all of them.
    pub max_solutions: Option<usize>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_chain_length: DEFAULT_MAX_CHAIN_LENGTH,
            min_word_len: DEFAULT_MIN_WORD_LEN,
            time_budget: Some(Duration::from_secs(TIME_BUDGET)),
            max_solutions: None,
        }
    }
}

impl SolverConfig {
    fn validate(&self) -> Result<(), SolverError> {
        if self.max_chain_length == 0 {
            return Err(SolverError::InvalidChainLength { max: self.max_chain_length });
        }
        Ok(())
    }
}

/// Put the words in uppercase and separated with a bullet
#[must_use]
pub fn solution_to_string(solution: &[String]) -> String {
    solution.iter().map(|w| w.to_ascii_uppercase()).collect::<Vec<_>>().join(" • ")
}

/// Simple helper to enforce a wall-clock time limit.
///
/// A budget without a limit never expires. `timed_out` is set only when a search actually
/// stops because of the limit, so a search that finished before the clock ran out is not
/// reported as timed out.
struct TimeBudget {
    start: Instant,          // when the budget began
    limit: Option<Duration>, // maximum allowed elapsed time
    timed_out: AtomicBool,   // a search was cut short
}

impl TimeBudget {
    fn new(limit: Option<Duration>) -> Self {
        Self { start: Instant::now(), limit, timed_out: AtomicBool::new(false) }
    }

    /// How long this budget has been running.
    fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Returns true if the allowed time has fully elapsed.
    fn expired(&self) -> bool {
        self.limit.is_some_and(|limit| self.start.elapsed() >= limit)
    }

    /// Like `expired`, but records that the caller is giving up.
    fn stop_now(&self) -> bool {
        let expired = self.expired();
        if expired {
            self.timed_out.store(true, Ordering::Relaxed);
        }
        expired
    }

    fn timed_out(&self) -> bool {
        self.timed_out.load(Ordering::Relaxed)
    }
}

macro_rules! timed_stop {
    // For functions that return ()
    ($budget:expr) => {
        if $budget.stop_now() {
            return;
        }
    };
    // For functions that return a value; caller passes the expr to return
    ($budget:expr, $ret_expr:expr) => {
        if $budget.stop_now() {
            return $ret_expr;
        }
    };
}

/// Context shared by every branch of one search.
struct SearchCtx<'a> {
    graph: &'a PuzzleGraph,
    max_chain_length: usize,
    max_solutions: Option<usize>,
    budget: &'a TimeBudget,
}

impl SearchCtx<'_> {
    fn found_enough(&self, found: usize) -> bool {
        self.max_solutions.is_some_and(|max| found >= max)
    }
}

/// Emit every word sequence of an accepting path: one word from each group, in order.
fn expand_path(
    groups: &[&[String]],
    chosen: &mut Vec<String>,
    ctx: &SearchCtx,
    results: &mut Vec<Vec<String>>,
) {
    if ctx.found_enough(results.len()) {
        return;
    }
    timed_stop!(ctx.budget);
    match groups.split_first() {
        None => results.push(chosen.clone()),
        Some((group, rest)) => {
            for word in group.iter() {
                chosen.push(word.clone());
                expand_path(rest, chosen, ctx, results);
                chosen.pop();
            }
        }
    }
}

/// Depth-first extension of `path`, a chain of word groups ending in `last` and covering
/// `covered`.
///
/// An edge is followed only if it covers at least one new letter, so no branch revisits a
/// coverage state and the depth never exceeds `max_chain_length`.
fn search<'g>(
    path: &mut Vec<&'g [String]>,
    covered: LetterSet,
    last: char,
    ctx: &SearchCtx<'g>,
    results: &mut Vec<Vec<String>>,
) {
    debug_assert!(!path.is_empty() && path.len() <= ctx.max_chain_length);

    if ctx.found_enough(results.len()) {
        return;
    }
    timed_stop!(ctx.budget);

    if covered.is_full() {
        let mut chosen = Vec::with_capacity(path.len());
        expand_path(path, &mut chosen, ctx, results);
        return;
    }
    if path.len() == ctx.max_chain_length {
        return;
    }

    for (next_last, letters, group) in ctx.graph.edges_from(last) {
        let next = covered | letters;
        if !next.is_strict_superset_of(covered) {
            continue;
        }
        path.push(group);
        search(path, next, next_last, ctx, results);
        path.pop();

        if ctx.found_enough(results.len()) {
            return;
        }
        timed_stop!(ctx.budget);
    }
}

/// Run one search from a single seed edge.
fn search_from_seed<'g>(
    seed: (char, LetterSet, &'g [String]),
    ctx: &SearchCtx<'g>,
    results: &mut Vec<Vec<String>>,
) {
    let (last, letters, group) = seed;
    let mut path: Vec<&[String]> = Vec::with_capacity(ctx.max_chain_length);
    path.push(group);
    search(&mut path, letters, last, ctx, results);
}

/// Sum of word lengths, the secondary sort key for solutions.
fn total_letters(solution: &[String]) -> usize {
    solution.iter().map(String::len).sum()
}

/// Whether consecutive words in `solution` share their boundary letter.
fn is_chained(solution: &[String]) -> bool {
    solution.windows(2).all(|pair| pair[0].chars().last() == pair[1].chars().next())
}

/// Search over a prepared puzzle graph.
pub struct Solver<'a> {
    graph: &'a PuzzleGraph,
    config: &'a SolverConfig,
}

impl<'a> Solver<'a> {
    #[must_use]
    pub fn new(graph: &'a PuzzleGraph, config: &'a SolverConfig) -> Self {
        Self { graph, config }
    }

    /// Enumerate every chain of at most `max_chain_length` words covering all twelve letters.
    ///
    /// Solutions come back sorted by word count, then total length, then alphabetically.
    /// With `max_solutions` set, the search keeps the first solutions it finds (seeds are visited
    /// in graph order) and sorts only those, so a limited run returns the same solutions with
    /// or without the `parallel` feature.
    ///
    /// # Errors
    ///
    /// Returns `SolverError::InvalidChainLength` if `max_chain_length` is zero.
    pub fn solve(&self) -> Result<SolveResult, SolverError> {
        self.config.validate()?;

        let budget = TimeBudget::new(self.config.time_budget);
        let ctx = SearchCtx {
            graph: self.graph,
            max_chain_length: self.config.max_chain_length,
            max_solutions: self.config.max_solutions,
            budget: &budget,
        };

        let mut results = self.run(&ctx);

        results.sort_by(|a, b| {
            a.len()
                .cmp(&b.len())
                .then_with(|| total_letters(a).cmp(&total_letters(b)))
                .then_with(|| a.cmp(b))
        });

        debug_assert!(results.iter().all(|s| s.len() <= self.config.max_chain_length));
        debug_assert!(results.iter().all(|s| is_chained(s)), "solutions must chain end to start");

        let status = if budget.timed_out() {
            warn!("search timed out after {:.3}s", budget.elapsed().as_secs_f64());
            SolveStatus::TimedOut { elapsed: budget.elapsed() }
        } else if ctx.found_enough(results.len()) {
            SolveStatus::FoundEnough
        } else {
            SolveStatus::Exhausted
        };

        let stats = SolveStats {
            playable_words: self.graph.word_count(),
            signatures: self.graph.signature_count(),
            search_time: budget.elapsed(),
            ..SolveStats::default()
        };

        Ok(SolveResult { solutions: results, status, stats })
    }

    /// Solutions in discovery order, cut to `max_solutions`.
    fn run(&self, ctx: &SearchCtx) -> Vec<Vec<String>> {
        #[cfg(not(feature = "parallel"))]
        let mut results = self.run_sequential(ctx);
        #[cfg(feature = "parallel")]
        let mut results = self.run_parallel(ctx);

        if let Some(max) = ctx.max_solutions {
            results.truncate(max);
        }
        results
    }

    #[cfg(any(not(feature = "parallel"), test))]
    fn run_sequential(&self, ctx: &SearchCtx) -> Vec<Vec<String>> {
        let mut results = Vec::new();
        for (first, last, letters, group) in self.graph.signatures() {
            if ctx.found_enough(results.len()) {
                break;
            }
            timed_stop!(ctx.budget, results);
            debug!("seed {first}..{last} ({} words)", group.len());
            search_from_seed((last, letters, group), ctx, &mut results);
        }
        results
    }

    /// One independent search per seed. Each seed stops at `max_solutions` on its own, and the
    /// per-seed lists are joined in seed order, so the first `max_solutions` of the join are
    /// exactly what the sequential search would have kept.
    #[cfg(feature = "parallel")]
    fn run_parallel(&self, ctx: &SearchCtx) -> Vec<Vec<String>> {
        use rayon::prelude::*;

        let seeds: Vec<_> = self.graph.signatures().collect();
        let per_seed: Vec<Vec<Vec<String>>> = seeds
            .par_iter()
            .map(|&(_, last, letters, group)| {
                let mut local = Vec::new();
                if !ctx.budget.stop_now() {
                    search_from_seed((last, letters, group), ctx, &mut local);
                }
                local
            })
            .collect();
        per_seed.into_iter().flatten().collect()
    }
}

/// Solve `puzzle` with the given word list.
///
/// Runs the whole pipeline: parse the puzzle, index the words, extract the playable ones,
/// build the puzzle graph, and search it. Words are lowercased before indexing.
///
/// # Errors
///
/// Returns a [`SolverError`] if:
/// - the puzzle string is malformed (`MalformedPuzzle`),
/// - `max_chain_length` is zero (`InvalidChainLength`).
///
/// An empty word list, or one with no playable words, is not an error.
pub fn solve_puzzle(
    puzzle: &str,
    words: &[&str],
    config: &SolverConfig,
) -> Result<SolveResult, SolverError> {
    config.validate()?;
    let puzzle: Puzzle = puzzle.parse()?;
    info!("solving puzzle {puzzle}");

    let t_index = Instant::now();
    let trie: Trie = words.iter().map(|w| w.trim().to_lowercase()).collect();
    let index_time = t_index.elapsed();
    info!("indexed {} words in {:.3}s", trie.len(), index_time.as_secs_f64());

    let t_extract = Instant::now();
    let playable = extract_words(&trie, &puzzle, config.min_word_len);
    let graph = PuzzleGraph::build(&playable);
    let extract_time = t_extract.elapsed();
    info!(
        "found {} playable words ({} signatures) in {:.3}s",
        graph.word_count(),
        graph.signature_count(),
        extract_time.as_secs_f64()
    );

    let mut result = Solver::new(&graph, config).solve()?;
    info!(
        "found {} solutions in {:.3}s",
        result.solutions.len(),
        result.stats.search_time.as_secs_f64()
    );

    debug_assert!(
        result.solutions.iter().flatten().all(|w| puzzle.is_playable(w)),
        "solutions may only use playable words"
    );

    result.stats.dictionary_words = trie.len();
    result.stats.index_time = index_time;
    result.stats.extract_time = extract_time;
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(max_chain_length: usize) -> SolverConfig {
        SolverConfig { max_chain_length, min_word_len: 1, time_budget: None, max_solutions: None }
    }

    fn owned(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| (*w).to_string()).collect()
    }

    #[test]
    fn test_two_word_solution() {
        let words = vec!["pitchforks", "sly", "shy", "pitch", "forks", "hooks", "dog"];
        let result = solve_puzzle("phk-ifs-tol-cry", &words, &config(3)).unwrap();
        assert_eq!(result.solutions, vec![owned(&["pitchforks", "sly"])]);
        assert_eq!(result.status, SolveStatus::Exhausted);
    }

    #[test]
    fn test_three_word_solution() {
        let words = vec!["adgj", "jbeh", "hckfil", "jaj"];
        let result = solve_puzzle("abc-def-ghi-jkl", &words, &config(3)).unwrap();
        assert_eq!(result.solutions, vec![owned(&["adgj", "jbeh", "hckfil"])]);
    }

    #[test]
    fn test_chain_length_bound() {
        let words = vec!["adgj", "jbeh", "hckfil"];
        let result = solve_puzzle("abc-def-ghi-jkl", &words, &config(2)).unwrap();
        assert!(result.solutions.is_empty());
        assert_eq!(result.status, SolveStatus::Exhausted);
    }

    #[test]
    fn test_max_chain_length_one() {
        let words = vec!["pitchforks", "sly"];
        let result = solve_puzzle("phk-ifs-tol-cry", &words, &config(1)).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_single_word_solution() {
        // one word that visits all twelve letters is accepted on its initial state
        let words = vec!["adgjbehckfil"];
        let result = solve_puzzle("abc-def-ghi-jkl", &words, &config(1)).unwrap();
        assert_eq!(result.solutions, vec![owned(&["adgjbehckfil"])]);
    }

    #[test]
    fn test_words_sharing_a_signature_expand() {
        // "sly" and "slyly" share a signature, so the one accepting path yields both
        let words = vec!["pitchforks", "sly", "slyly"];
        let result = solve_puzzle("phk-ifs-tol-cry", &words, &config(2)).unwrap();
        assert_eq!(
            result.solutions,
            vec![owned(&["pitchforks", "sly"]), owned(&["pitchforks", "slyly"])]
        );
    }

    #[test]
    fn test_no_progress_edges_are_pruned() {
        // "jaj" adds nothing after "adgj", so it never appears in a chain
        let words = vec!["adgj", "jaj", "jbeh", "hckfil"];
        let result = solve_puzzle("abc-def-ghi-jkl", &words, &config(4)).unwrap();
        assert_eq!(result.solutions, vec![owned(&["adgj", "jbeh", "hckfil"])]);
    }

    #[test]
    fn test_empty_word_list() {
        let result = solve_puzzle("mrf-sna-opu-gci", &[], &config(3)).unwrap();
        assert!(result.is_empty());
        assert_eq!(result.status, SolveStatus::Exhausted);
        assert_eq!(result.stats.dictionary_words, 0);
    }

    #[test]
    fn test_words_are_lowercased() {
        let words = vec!["PitchForks", " SLY "];
        let result = solve_puzzle("phk-ifs-tol-cry", &words, &config(2)).unwrap();
        assert_eq!(result.solutions, vec![owned(&["pitchforks", "sly"])]);
    }

    #[test]
    fn test_min_word_len_applies() {
        let words = vec!["pitchforks", "sly"];
        let cfg = SolverConfig { min_word_len: 4, ..config(2) };
        let result = solve_puzzle("phk-ifs-tol-cry", &words, &cfg).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_max_solutions() {
        let words = vec!["pitchforks", "sly", "slyly"];
        let cfg = SolverConfig { max_solutions: Some(1), ..config(2) };
        let result = solve_puzzle("phk-ifs-tol-cry", &words, &cfg).unwrap();
        assert_eq!(result.solutions.len(), 1);
        assert_eq!(result.status, SolveStatus::FoundEnough);
    }

    fn limit_fixture() -> Vec<&'static str> {
        // seeds in graph order: adgj, hckfil, jbeh, ladgjbe
        vec!["adgj", "jbeh", "hckfil", "ladgjbe"]
    }

    #[test]
    fn test_unlimited_solutions_are_sorted() {
        let result = solve_puzzle("abc-def-ghi-jkl", &limit_fixture(), &config(3)).unwrap();
        assert_eq!(
            result.solutions,
            vec![
                owned(&["hckfil", "ladgjbe"]),
                owned(&["adgj", "jbeh", "hckfil"]),
                owned(&["jbeh", "hckfil", "ladgjbe"]),
            ]
        );
        assert_eq!(result.status, SolveStatus::Exhausted);
    }

    #[test]
    fn test_limit_keeps_first_found_in_seed_order() {
        let cfg = SolverConfig { max_solutions: Some(1), ..config(3) };
        let result = solve_puzzle("abc-def-ghi-jkl", &limit_fixture(), &cfg).unwrap();
        assert_eq!(result.solutions, vec![owned(&["adgj", "jbeh", "hckfil"])]);
        assert_eq!(result.status, SolveStatus::FoundEnough);

        let cfg = SolverConfig { max_solutions: Some(2), ..config(3) };
        let result = solve_puzzle("abc-def-ghi-jkl", &limit_fixture(), &cfg).unwrap();
        assert_eq!(
            result.solutions,
            vec![owned(&["hckfil", "ladgjbe"]), owned(&["adgj", "jbeh", "hckfil"])]
        );
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_limit_matches_sequential() {
        let cases: Vec<(&str, Vec<&str>, usize, usize)> = vec![
            ("abc-def-ghi-jkl", limit_fixture(), 3, 2),
            ("lrm-aio-tpe-nsc", include_str!("../data/words.txt").lines().collect(), 4, 3),
        ];

        for (puzzle, words, max_chain_length, max_solutions) in cases {
            let puzzle: Puzzle = puzzle.parse().unwrap();
            let trie: Trie = words.into_iter().collect();
            let graph = PuzzleGraph::build(&extract_words(&trie, &puzzle, 3));
            let cfg = SolverConfig { max_solutions: Some(max_solutions), ..config(max_chain_length) };
            let solver = Solver::new(&graph, &cfg);

            let budget = TimeBudget::new(None);
            let ctx = SearchCtx {
                graph: &graph,
                max_chain_length,
                max_solutions: Some(max_solutions),
                budget: &budget,
            };
            let mut sequential = solver.run_sequential(&ctx);
            sequential.truncate(max_solutions);
            assert_eq!(solver.run(&ctx), sequential, "{puzzle}");
        }
    }

    #[test]
    fn test_zero_budget_with_nothing_to_search_is_exhausted() {
        let cfg = SolverConfig { time_budget: Some(Duration::ZERO), ..config(3) };

        let result = solve_puzzle("mrf-sna-opu-gci", &[], &cfg).unwrap();
        assert_eq!(result.status, SolveStatus::Exhausted);

        let cfg = SolverConfig { time_budget: Some(Duration::from_nanos(1)), ..cfg };
        let result = solve_puzzle("mrf-sna-opu-gci", &["zzz"], &cfg).unwrap();
        assert_eq!(result.status, SolveStatus::Exhausted);
    }

    #[test]
    fn test_expand_path_stops_when_budget_expired() {
        let graph = PuzzleGraph::build(&[]);
        let budget = TimeBudget::new(Some(Duration::ZERO));
        let ctx = SearchCtx { graph: &graph, max_chain_length: 2, max_solutions: None, budget: &budget };

        let first = owned(&["pitchforks"]);
        let second = owned(&["sly", "slyly"]);
        let groups = vec![first.as_slice(), second.as_slice()];
        let mut results = Vec::new();
        expand_path(&groups, &mut Vec::new(), &ctx, &mut results);

        assert!(results.is_empty());
        assert!(budget.timed_out());
    }

    #[test]
    fn test_zero_time_budget_times_out() {
        let words = vec!["pitchforks", "sly"];
        let cfg = SolverConfig { time_budget: Some(Duration::ZERO), ..config(2) };
        let result = solve_puzzle("phk-ifs-tol-cry", &words, &cfg).unwrap();
        assert!(matches!(result.status, SolveStatus::TimedOut { .. }));
        assert!(result.is_empty());
    }

    #[test]
    fn test_solver_on_prepared_graph() {
        let puzzle: Puzzle = "phk-ifs-tol-cry".parse().unwrap();
        let trie: Trie = ["pitchforks", "sly"].into_iter().collect();
        let graph = PuzzleGraph::build(&extract_words(&trie, &puzzle, 1));
        let cfg = config(2);

        let first = Solver::new(&graph, &cfg).solve().unwrap();
        let second = Solver::new(&graph, &cfg).solve().unwrap();
        assert_eq!(first.solutions, second.solutions);
        assert_eq!(first.stats.playable_words, 2);
        assert_eq!(first.stats.signatures, 2);
    }

    #[test]
    fn test_solution_to_string() {
        assert_eq!(solution_to_string(&owned(&["pitchforks", "sly"])), "PITCHFORKS • SLY");
        assert_eq!(solution_to_string(&[]), "");
    }

    #[test]
    fn test_is_chained() {
        assert!(is_chained(&owned(&["adgj", "jbeh", "hckfil"])));
        assert!(!is_chained(&owned(&["adgj", "hckfil"])));
        assert!(is_chained(&owned(&["solo"])));
    }

    mod error_tests {
        use super::*;

        #[test]
        fn test_malformed_puzzle_is_s001() {
            let err = solve_puzzle("ab-cde-fgh-ijk", &["able"], &config(3)).unwrap_err();
            assert_eq!(err.code(), "S001");
            assert!(matches!(
                err,
                SolverError::MalformedPuzzle(ref pe) if matches!(**pe, PuzzleError::WrongSideLength { side: 0, .. })
            ));
            let detailed = err.display_detailed();
            assert!(detailed.contains("S001"));
            assert!(detailed.contains("caused by"));
            assert!(detailed.contains("E003"));
        }

        #[test]
        fn test_zero_chain_length_is_s003() {
            let err = solve_puzzle("mrf-sna-opu-gci", &["soap"], &config(0)).unwrap_err();
            assert!(matches!(err, SolverError::InvalidChainLength { max: 0 }));
            assert_eq!(err.code(), "S003");
            assert!(err.display_detailed().contains("at least 1"));
        }

        #[test]
        fn test_dictionary_error_keeps_source() {
            use std::error::Error;

            let err = SolverError::DictionarySourceUnavailable {
                path: "missing.txt".to_string(),
                source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
            };
            assert_eq!(err.code(), "S002");
            assert!(err.to_string().contains("missing.txt"));
            assert!(err.source().is_some());
            assert!(err.help().is_some());
        }

        #[test]
        fn test_error_codes_are_valid() {
            let errors = vec![
                SolverError::MalformedPuzzle(Box::new(PuzzleError::WrongSideCount { found: 2 })),
                SolverError::DictionarySourceUnavailable {
                    path: "x".to_string(),
                    source: io::Error::new(io::ErrorKind::NotFound, "gone"),
                },
                SolverError::InvalidChainLength { max: 0 },
            ];
            let mut codes = std::collections::HashSet::new();
            for err in &errors {
                assert!(err.code().starts_with('S'));
                assert!(codes.insert(err.code()));
                assert!(!err.description().is_empty());
                assert!(err.details().len() > err.description().len());
            }
        }
    }
}
