//! Error types for puzzle parsing with error codes and helpful messages.
//!
//! # Error Codes
//!
//! Each error variant has a unique code (E001-E006) for documentation lookup:
//!
//! - E001: `ParseFailure` (Puzzle string is not dash-separated letter groups)
//! - E002: `WrongSideCount` (Puzzle does not have exactly four sides)
//! - E003: `WrongSideLength` (A side does not have exactly three letters)
//! - E004: `InvalidLetter` (Non-alphabetic character in the puzzle)
//! - E005: `DuplicateLetter` (A letter appears more than once)
//! - E006: `NomError` (Low-level nom parser error)
//!
//! Every one of these means the puzzle is malformed: no partial puzzle is ever built.
//!
//! # Examples
//!
//! ```
//! use letterboxed::errors::PuzzleError;
//! use letterboxed::puzzle::Puzzle;
//!
//! match "ab-cde-fgh-ijk".parse::<Puzzle>() {
//!     Err(e) => {
//!         assert_eq!(e.code(), "E003");
//!         println!("{}", e.display_detailed());
//!     }
//!     Ok(_) => unreachable!(),
//! }
//! ```

use nom::error::{ErrorKind, ParseError as NomParseError};

/// Custom error type for puzzle parsing and validation
#[derive(Debug, thiserror::Error)]
pub enum PuzzleError {
    #[error("Puzzle parsing failed: \"{input}\"")]
    ParseFailure { input: String },

    #[error("Expected 4 sides, found {found}")]
    WrongSideCount { found: usize },

    #[error("Side {side} (\"{letters}\") has {found} letters; expected 3")]
    WrongSideLength { side: usize, letters: String, found: usize },

    #[error("Invalid character '{letter}' (only letters a-z allowed)")]
    InvalidLetter { letter: char },

    #[error("Letter '{letter}' appears on side {first_side} and again on side {second_side}")]
    DuplicateLetter { letter: char, first_side: usize, second_side: usize },

    // nom parser error (lowest level)
    #[error("nom parser error: {0:?}")]
    NomError(ErrorKind),
}

impl<'a> NomParseError<&'a str> for Box<PuzzleError> {
    fn from_error_kind(_input: &'a str, kind: ErrorKind) -> Self {
        Box::new(PuzzleError::NomError(kind))
    }

    fn append(_input: &'a str, _kind: ErrorKind, other: Self) -> Self {
        other
    }
}

impl PuzzleError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            PuzzleError::ParseFailure { .. } => "E001",
            PuzzleError::WrongSideCount { .. } => "E002",
            PuzzleError::WrongSideLength { .. } => "E003",
            PuzzleError::InvalidLetter { .. } => "E004",
            PuzzleError::DuplicateLetter { .. } => "E005",
            PuzzleError::NomError(_) => "E006",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            PuzzleError::ParseFailure { .. } => "Puzzle string is not dash-separated letter groups",
            PuzzleError::WrongSideCount { .. } => "Puzzle does not have exactly four sides",
            PuzzleError::WrongSideLength { .. } => "A side does not have exactly three letters",
            PuzzleError::InvalidLetter { .. } => "Non-alphabetic character in the puzzle",
            PuzzleError::DuplicateLetter { .. } => "A letter appears more than once",
            PuzzleError::NomError(_) => "Low-level nom parser error",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            PuzzleError::ParseFailure { .. } => "The puzzle must be written as groups of letters separated by single dashes, such as `mrf-sna-opu-gci`.",
            PuzzleError::WrongSideCount { .. } => "A Letter Boxed square has four sides. The puzzle string split into a different number of groups.",
            PuzzleError::WrongSideLength { .. } => "Every side of the square holds exactly three letters.",
            PuzzleError::InvalidLetter { .. } => "Only the letters a-z (in either case) can appear on a side.",
            PuzzleError::DuplicateLetter { .. } => "The twelve letters of a puzzle must all be distinct, so each letter belongs to exactly one side.",
            PuzzleError::NomError(_) => "The underlying parser rejected the input. This is usually reported through a more specific error.",
        }
    }

    /// Returns a helpful suggestion or example for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            PuzzleError::ParseFailure { .. } => Some("Example: 'mrf-sna-opu-gci'"),
            PuzzleError::WrongSideCount { .. } => Some("Write exactly four groups separated by '-', e.g. 'abc-def-ghi-jkl'"),
            PuzzleError::WrongSideLength { .. } => Some("Each group between dashes needs three letters, e.g. 'abc-def-ghi-jkl'"),
            PuzzleError::InvalidLetter { .. } => Some("Remove digits, spaces, and punctuation other than the '-' separators"),
            PuzzleError::DuplicateLetter { .. } => Some("Check the puzzle for a mistyped letter; all twelve letters must differ"),
            PuzzleError::NomError(_) => None,
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Helper function to format error messages with code and optional help text
pub(crate) fn format_error_with_code_and_help(base_msg: &str, code: &str, help: Option<&str>) -> String {
    if let Some(help_text) = help {
        format!("{base_msg} ({code})\n{help_text}")
    } else {
        format!("{base_msg} ({code})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_variants() -> Vec<PuzzleError> {
        vec![
            PuzzleError::ParseFailure { input: "abc_def".to_string() },
            PuzzleError::WrongSideCount { found: 3 },
            PuzzleError::WrongSideLength { side: 0, letters: "ab".to_string(), found: 2 },
            PuzzleError::InvalidLetter { letter: '7' },
            PuzzleError::DuplicateLetter { letter: 'a', first_side: 0, second_side: 2 },
            PuzzleError::NomError(ErrorKind::Tag),
        ]
    }

    #[test]
    fn test_error_codes_and_help() {
        let err = PuzzleError::WrongSideCount { found: 5 };
        assert_eq!(err.code(), "E002");
        assert!(err.help().is_some());
        let detailed = err.display_detailed();
        assert!(detailed.contains("E002"));
        assert!(detailed.contains("found 5"));
    }

    /// Test that all `PuzzleError` variants have unique error codes
    #[test]
    fn test_all_error_codes_are_unique() {
        let mut codes = std::collections::HashSet::new();
        for err in all_variants() {
            let code = err.code();
            assert!(codes.insert(code), "Duplicate error code found: {}", code);
        }
        assert_eq!(codes.len(), 6);
    }

    /// Test that all error codes follow the format E0XX
    #[test]
    fn test_error_code_format() {
        for err in all_variants() {
            let code = err.code();
            assert_eq!(code.len(), 4, "Error code '{}' should be 4 characters (E0XX)", code);
            assert!(code.starts_with("E0"), "Error code '{}' should start with 'E0'", code);
            assert!(code[1..].parse::<u16>().is_ok(), "Error code '{}' should end with a number", code);
        }
    }

    #[test]
    fn test_help_text_is_not_the_message() {
        for err in all_variants() {
            if let Some(help_text) = err.help() {
                assert!(help_text.len() > 10, "Help text for {:?} should be substantial", err);
                assert_ne!(help_text, err.to_string());
            }
        }
    }

    #[test]
    fn test_side_length_error_names_the_side() {
        let err = PuzzleError::WrongSideLength { side: 1, letters: "abcd".to_string(), found: 4 };
        let detailed = err.display_detailed();
        assert!(detailed.contains("Side 1"));
        assert!(detailed.contains("abcd"));
        assert!(detailed.contains("E003"));
    }

    #[test]
    fn test_duplicate_letter_error_names_both_sides() {
        let err = PuzzleError::DuplicateLetter { letter: 'q', first_side: 0, second_side: 3 };
        let msg = err.to_string();
        assert!(msg.contains("'q'"));
        assert!(msg.contains("side 0"));
        assert!(msg.contains("side 3"));
    }

    #[test]
    fn test_nom_error_has_no_help() {
        let err = PuzzleError::NomError(ErrorKind::Alpha);
        assert!(err.help().is_none());
        assert_eq!(err.display_detailed(), format!("{} (E006)", err));
    }
}
