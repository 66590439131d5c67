//! The puzzle model: four sides of three letters each, twelve distinct letters in total.
//!
//! A `Puzzle` is an immutable value built once and passed by reference to the word
//! extractor and the solver. All per-letter lookups are fixed-size arrays indexed by
//! `'a'..='z'`, so `side_of`, `index_of`, and `same_side` are constant time.

use std::fmt;
use std::str::FromStr;

use crate::errors::PuzzleError;
use crate::letter::{LetterSet, PuzzleChar, ALPHABET_SIZE, LETTERS_PER_SIDE, NUM_LETTERS, NUM_SIDES, SIDE_SEPARATOR};
use crate::parser::split_sides;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    /// Letters in side-major order: `sides[s][k]` is at position `s * LETTERS_PER_SIDE + k`.
    sides: [[char; LETTERS_PER_SIDE]; NUM_SIDES],
    /// Side of each letter of the alphabet, `None` if the letter is not in the puzzle.
    side_of: [Option<u8>; ALPHABET_SIZE],
    /// Position (bit index in a `LetterSet`) of each letter of the alphabet.
    index_of: [Option<u8>; ALPHABET_SIZE],
}

impl Puzzle {
    /// Build a puzzle from already-separated sides.
    ///
    /// Sides are lowercased before validation.
    ///
    /// # Errors
    ///
    /// Returns a `PuzzleError` if there are not exactly four sides, a side does not have exactly
    /// three letters, a character is not a letter, or any letter appears more than once.
    pub fn from_sides<S: AsRef<str>>(raw_sides: &[S]) -> Result<Self, Box<PuzzleError>> {
        if raw_sides.len() != NUM_SIDES {
            return Err(Box::new(PuzzleError::WrongSideCount { found: raw_sides.len() }));
        }

        let mut sides = [[' '; LETTERS_PER_SIDE]; NUM_SIDES];
        let mut side_of = [None; ALPHABET_SIZE];
        let mut index_of = [None; ALPHABET_SIZE];

        for (s, raw) in raw_sides.iter().enumerate() {
            let letters: Vec<char> = raw.as_ref().trim().to_lowercase().chars().collect();
            if letters.len() != LETTERS_PER_SIDE {
                return Err(Box::new(PuzzleError::WrongSideLength {
                    side: s,
                    letters: letters.iter().collect(),
                    found: letters.len(),
                }));
            }

            for (k, &letter) in letters.iter().enumerate() {
                let Some(a) = letter.alphabet_index() else {
                    return Err(Box::new(PuzzleError::InvalidLetter { letter }));
                };
                if let Some(first_side) = side_of[a] {
                    return Err(Box::new(PuzzleError::DuplicateLetter {
                        letter,
                        first_side: first_side as usize,
                        second_side: s,
                    }));
                }
                side_of[a] = Some(s as u8);
                index_of[a] = Some((s * LETTERS_PER_SIDE + k) as u8);
                sides[s][k] = letter;
            }
        }

        debug_assert_eq!(
            side_of.iter().filter(|s| s.is_some()).count(),
            NUM_LETTERS,
            "a validated puzzle has exactly {NUM_LETTERS} letters"
        );

        Ok(Puzzle { sides, side_of, index_of })
    }

    /// The four sides, in input order.
    #[must_use]
    pub fn sides(&self) -> &[[char; LETTERS_PER_SIDE]; NUM_SIDES] {
        &self.sides
    }

    /// All twelve letters in side-major order (position `i` is bit `i` of a `LetterSet`).
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.sides.iter().flatten().copied()
    }

    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        self.side_of(letter).is_some()
    }

    #[must_use]
    pub fn side_of(&self, letter: char) -> Option<usize> {
        letter.alphabet_index().and_then(|a| self.side_of[a]).map(usize::from)
    }

    #[must_use]
    pub fn index_of(&self, letter: char) -> Option<usize> {
        letter.alphabet_index().and_then(|a| self.index_of[a]).map(usize::from)
    }

    /// The letter at position `index` (inverse of `index_of`).
    #[must_use]
    pub fn letter_at(&self, index: usize) -> Option<char> {
        (index < NUM_LETTERS).then(|| self.sides[index / LETTERS_PER_SIDE][index % LETTERS_PER_SIDE])
    }

    /// True if both letters are in the puzzle and on the same side.
    ///
    /// Identical letters are on the same side, so a doubled letter is never a legal move.
    #[must_use]
    pub fn same_side(&self, a: char, b: char) -> bool {
        match (self.side_of(a), self.side_of(b)) {
            (Some(sa), Some(sb)) => sa == sb,
            _ => false,
        }
    }

    /// Coverage key of `word`, or `None` if it uses a letter outside the puzzle.
    #[must_use]
    pub fn letter_set(&self, word: &str) -> Option<LetterSet> {
        word.chars()
            .try_fold(LetterSet::EMPTY, |acc, c| self.index_of(c).map(|i| acc.with(i)))
    }

    /// Whether `word` can be traced on this puzzle: non-empty, every letter in the puzzle,
    /// and no two consecutive letters on the same side.
    #[must_use]
    pub fn is_playable(&self, word: &str) -> bool {
        let mut prev_side = None;
        for c in word.chars() {
            let Some(side) = self.side_of(c) else {
                return false;
            };
            if prev_side == Some(side) {
                return false;
            }
            prev_side = Some(side);
        }
        prev_side.is_some()
    }
}

impl FromStr for Puzzle {
    type Err = Box<PuzzleError>;

    /// Parse a puzzle written as `abc-def-ghi-jkl` (case-insensitive).
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized = raw.trim().to_lowercase();
        let groups = split_sides(&normalized)?;
        Puzzle::from_sides(&groups)
    }
}

impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (s, side) in self.sides.iter().enumerate() {
            if s > 0 {
                write!(f, "{SIDE_SEPARATOR}")?;
            }
            for c in side {
                write!(f, "{c}")?;
            }
        }
        Ok(())
    }
}
