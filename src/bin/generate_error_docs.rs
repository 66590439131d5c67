//! Generate error code documentation from the error enums themselves.
//!
//! This binary reads the error codes, descriptions, details, and help text
//! directly from the `PuzzleError` and `SolverError` implementations via their
//! `code()`, `description()`, `details()`, and `help()` methods.
//!
//! Run with:
//! ```bash
//! cargo run --bin generate_error_docs > docs/ERROR_CODES.md
//! ```

use letterboxed::errors::PuzzleError;
use letterboxed::solver::SolverError;

/// Macro to generate error documentation for any error type
/// with `code()`, `description()`, `details()`, `help()`, and `display_detailed()` methods
macro_rules! generate_error_docs {
    ($errors:expr) => {
        for error in $errors {
            println!("### {}: {}\n", error.code(), error.description());
            println!("**Details:** {}\n", error.details());

            if let Some(help_text) = error.help() {
                println!("**How to fix:**");
                println!("```");
                println!("{}", help_text);
                println!("```\n");
            }

            println!("**Example error message:**");
            println!("```");
            println!("{}", error);
            println!("```\n");

            println!("**Detailed format:**");
            println!("```");
            println!("{}", error.display_detailed());
            println!("```\n");

            println!("---\n");
        }
    };
}

/// One instance of every `PuzzleError` variant
fn all_puzzle_error_variants() -> Vec<PuzzleError> {
    vec![
        PuzzleError::ParseFailure { input: "abc--def".to_string() },
        PuzzleError::WrongSideCount { found: 3 },
        PuzzleError::WrongSideLength { side: 0, letters: "ab".to_string(), found: 2 },
        PuzzleError::InvalidLetter { letter: '7' },
        PuzzleError::DuplicateLetter { letter: 'a', first_side: 0, second_side: 2 },
        PuzzleError::NomError(nom::error::ErrorKind::TakeWhile1),
    ]
}

/// One instance of every `SolverError` variant
fn all_solver_error_variants() -> Vec<SolverError> {
    vec![
        SolverError::MalformedPuzzle(Box::new(PuzzleError::WrongSideCount { found: 3 })),
        SolverError::DictionarySourceUnavailable {
            path: "data/missing.txt".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "No such file or directory"),
        },
        SolverError::InvalidChainLength { max: 0 },
    ]
}

fn main() {
    println!("# Error Code Reference\n");
    println!("**⚠️ This document is auto-generated from the source code. Do not edit manually.**\n");

    println!("## Table of Contents\n");
    println!("- [Solver Errors (S001–S003)](#solver-errors)");
    println!("- [Puzzle Errors (E001–E006)](#puzzle-errors)");
    println!("- [How to Use Error Codes](#how-to-use-error-codes)\n");

    println!("## Solver Errors\n");
    println!("Top-level errors from the solver. These wrap puzzle errors or report a bad word list or configuration.\n");
    generate_error_docs!(all_solver_error_variants());

    println!("## Puzzle Errors\n");
    println!("Errors that occur when parsing the puzzle string.\n");
    generate_error_docs!(all_puzzle_error_variants());

    println!("\n## How to Use Error Codes\n");
    println!("When you see an error like:\n");
    println!("```");
    println!("Error: Expected 4 sides, found 3 (E002)");
    println!("Write exactly four groups separated by '-', e.g. 'abc-def-ghi-jkl'");
    println!("```\n");
    println!("1. Note the error code (e.g., `E002`)");
    println!("2. Look it up in this document for detailed explanation");
    println!("3. Follow the suggested resolution steps\n");
}
