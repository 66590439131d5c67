use std::fmt;
use std::ops::{BitOr, BitOrAssign};

// Character-set constants
pub(crate) const ALPHABET_SIZE: usize = 26;
#[cfg(test)]
pub(crate) const LOWERCASE_ALPHABET: std::ops::RangeInclusive<char> = 'a'..='z';

/// Separator between sides in the textual puzzle form (`abc-def-ghi-jkl`).
pub const SIDE_SEPARATOR: char = '-';
pub const NUM_SIDES: usize = 4;
pub const LETTERS_PER_SIDE: usize = 3;
pub const NUM_LETTERS: usize = NUM_SIDES * LETTERS_PER_SIDE;

pub(crate) trait PuzzleChar {
    fn is_puzzle_letter(&self) -> bool;
    fn alphabet_index(&self) -> Option<usize>;
}

impl PuzzleChar for char {
    fn is_puzzle_letter(&self) -> bool {
        self.is_ascii_lowercase()
    }

    // 'a' -> 0, 'b' -> 1, ..., 'z' -> 25
    fn alphabet_index(&self) -> Option<usize> {
        if self.is_puzzle_letter() {
            Some((*self as u8 - b'a') as usize)
        } else {
            None
        }
    }
}

/// A set of puzzle letters, stored as a bitmask over letter positions `0..NUM_LETTERS`.
///
/// Bit `i` stands for the puzzle letter at position `i` (see `Puzzle::index_of`).
/// This is both the coverage key of a word and the covered-letter state of a search path,
/// so union, equality, and "did coverage grow" are single integer operations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LetterSet(u16);

impl LetterSet {
    pub const EMPTY: LetterSet = LetterSet(0);
    pub const FULL: LetterSet = LetterSet((1 << NUM_LETTERS) - 1);

    #[must_use]
    pub fn single(index: usize) -> Self {
        debug_assert!(index < NUM_LETTERS, "letter index {index} out of range");
        LetterSet(1 << index)
    }

    #[must_use]
    pub fn with(self, index: usize) -> Self {
        self | LetterSet::single(index)
    }

    #[must_use]
    pub fn union(self, other: LetterSet) -> Self {
        LetterSet(self.0 | other.0)
    }

    #[must_use]
    pub fn contains(self, index: usize) -> bool {
        index < NUM_LETTERS && self.0 & (1 << index) != 0
    }

    /// True if `self` holds every letter of `other` and at least one more.
    #[must_use]
    pub fn is_strict_superset_of(self, other: LetterSet) -> bool {
        self.0 & other.0 == other.0 && self.0 != other.0
    }

    #[must_use]
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[must_use]
    pub fn is_full(self) -> bool {
        self == LetterSet::FULL
    }

    #[must_use]
    pub fn bits(self) -> u16 {
        self.0
    }
}

impl BitOr for LetterSet {
    type Output = LetterSet;

    fn bitor(self, rhs: LetterSet) -> LetterSet {
        self.union(rhs)
    }
}

impl BitOrAssign for LetterSet {
    fn bitor_assign(&mut self, rhs: LetterSet) {
        self.0 |= rhs.0;
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:012b}", self.0)
    }
}
