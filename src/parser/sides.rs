//! Tokenizer for the textual puzzle form: letter groups separated by single dashes.
//!
//! This only checks the *shape* of the input (`abc-def-ghi-jkl`). Counting sides, counting
//! letters per side, and checking for repeated letters belong to `Puzzle::from_sides`, so that
//! pre-split sides from other front ends get the same validation.

use crate::errors::PuzzleError;
use crate::letter::{PuzzleChar, SIDE_SEPARATOR};
use nom::{
    bytes::complete::take_while1,
    character::complete::char,
    multi::separated_list1,
    IResult,
    Parser,
};

/// Parser result type: input, output, with our custom `PuzzleError`
pub type PResult<'a, O> = IResult<&'a str, O, Box<PuzzleError>>;

// === Token parsers ===

fn side(input: &'_ str) -> PResult<'_, &str> {
    take_while1(|c: char| c.is_puzzle_letter()).parse(input)
}

fn sides(input: &'_ str) -> PResult<'_, Vec<&str>> {
    separated_list1(char(SIDE_SEPARATOR), side).parse(input)
}

/// Pick the most specific error for input that stopped parsing at `rest`.
fn error_at(whole: &str, rest: &str) -> Box<PuzzleError> {
    match rest.chars().next() {
        Some(c) if c != SIDE_SEPARATOR && !c.is_puzzle_letter() => {
            Box::new(PuzzleError::InvalidLetter { letter: c })
        }
        _ => Box::new(PuzzleError::ParseFailure { input: whole.to_string() }),
    }
}

/// Split a lowercase puzzle string into its letter groups.
///
/// # Errors
///
/// - `InvalidLetter` if a character other than `a`-`z` or `-` appears.
/// - `ParseFailure` for an empty string, an empty group (`abc--def`), or a leading/trailing dash.
pub fn split_sides(input: &str) -> Result<Vec<&str>, Box<PuzzleError>> {
    match sides(input) {
        Ok(("", groups)) => Ok(groups),
        Ok((rest, _)) => Err(error_at(input, rest)),
        Err(_) => Err(error_at(input, input)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_basic() {
        assert_eq!(split_sides("mrf-sna-opu-gci").unwrap(), vec!["mrf", "sna", "opu", "gci"]);
    }

    #[test]
    fn test_split_keeps_wrong_counts_for_later_validation() {
        assert_eq!(split_sides("ab-cde").unwrap(), vec!["ab", "cde"]);
        assert_eq!(split_sides("abcdefghijkl").unwrap(), vec!["abcdefghijkl"]);
    }

    #[test]
    fn test_split_empty_is_parse_failure() {
        assert!(matches!(*split_sides("").unwrap_err(), PuzzleError::ParseFailure { .. }));
    }

    #[test]
    fn test_split_double_dash_is_parse_failure() {
        let err = split_sides("abc--def").unwrap_err();
        assert!(matches!(*err, PuzzleError::ParseFailure { ref input } if input == "abc--def"));
    }

    #[test]
    fn test_split_leading_and_trailing_dash() {
        assert!(matches!(*split_sides("-abc").unwrap_err(), PuzzleError::ParseFailure { .. }));
        assert!(matches!(*split_sides("abc-").unwrap_err(), PuzzleError::ParseFailure { .. }));
    }

    #[test]
    fn test_split_invalid_letter() {
        assert!(matches!(*split_sides("ab1-def").unwrap_err(), PuzzleError::InvalidLetter { letter: '1' }));
        assert!(matches!(*split_sides("abc def").unwrap_err(), PuzzleError::InvalidLetter { letter: ' ' }));
        assert!(matches!(*split_sides("éab-def").unwrap_err(), PuzzleError::InvalidLetter { letter: 'é' }));
    }

    #[test]
    fn test_split_rejects_uppercase() {
        // callers lowercase first
        assert!(matches!(*split_sides("ABC-def").unwrap_err(), PuzzleError::InvalidLetter { letter: 'A' }));
    }
}
