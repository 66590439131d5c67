//! Enumerate the dictionary words that can be traced on a puzzle.
//!
//! The walk starts at each puzzle letter's child of the trie root and only ever descends into
//! children that are (a) puzzle letters and (b) on a different side from the letter just used.
//! Candidates for the next step come from the puzzle itself, so a trie branch through a
//! letter outside the puzzle is never entered. The word spelled so far is carried in a single
//! `String` buffer that is pushed on the way down and popped on the way back.

use log::debug;

use crate::letter::{LetterSet, LETTERS_PER_SIDE, NUM_LETTERS};
use crate::puzzle::Puzzle;
use crate::trie::{Trie, TrieNode};

/// A dictionary word that respects the side-alternation rule of a puzzle.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlayableWord {
    pub word: String,
    pub first: char,
    pub last: char,
    /// Distinct puzzle letters used by the word (its coverage key).
    pub letters: LetterSet,
}

struct ExtractCtx<'a> {
    puzzle: &'a Puzzle,
    min_word_len: usize,
}

fn walk(
    node: &TrieNode,
    last_side: usize,
    covered: LetterSet,
    prefix: &mut String,
    ctx: &ExtractCtx,
    out: &mut Vec<PlayableWord>,
) {
    if node.is_terminal() && prefix.len() >= ctx.min_word_len {
        // prefix is non-empty: the walk starts one level below the root
        let (Some(first), Some(last)) = (prefix.chars().next(), prefix.chars().last()) else {
            return;
        };
        out.push(PlayableWord { word: prefix.clone(), first, last, letters: covered });
    }

    for index in 0..NUM_LETTERS {
        let side = index / LETTERS_PER_SIDE;
        if side == last_side {
            continue;
        }
        let Some(letter) = ctx.puzzle.letter_at(index) else {
            continue;
        };
        if let Some(child) = node.child(letter) {
            prefix.push(letter);
            walk(child, side, covered.with(index), prefix, ctx, out);
            prefix.pop();
        }
    }
}

/// Every word in `trie` that is playable on `puzzle` and at least `min_word_len` letters long,
/// sorted by length and then alphabetically.
#[must_use]
pub fn extract_words(trie: &Trie, puzzle: &Puzzle, min_word_len: usize) -> Vec<PlayableWord> {
    let ctx = ExtractCtx { puzzle, min_word_len };
    let mut out = Vec::new();
    let mut prefix = String::with_capacity(32);

    for (index, letter) in puzzle.letters().enumerate() {
        if let Some(node) = trie.root().child(letter) {
            prefix.push(letter);
            walk(node, index / LETTERS_PER_SIDE, LetterSet::single(index), &mut prefix, &ctx, &mut out);
            prefix.pop();
        }
    }

    out.sort_by(|a, b| a.word.len().cmp(&b.word.len()).then_with(|| a.word.cmp(&b.word)));

    debug_assert!(
        out.iter().all(|w| puzzle.is_playable(&w.word)),
        "every extracted word must be playable"
    );
    debug!("extracted {} playable words for {}", out.len(), puzzle);

    out
}
