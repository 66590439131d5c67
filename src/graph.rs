//! The puzzle graph: playable words bucketed by (first letter, last letter, coverage key).
//!
//! Each bucket is one edge of the search: every word in it starts and ends on the same letters
//! and covers the same letters, so the solver only has to decide on the bucket and can expand
//! the words afterwards.

use std::collections::BTreeMap;

use log::debug;

use crate::extractor::PlayableWord;
use crate::letter::LetterSet;

/// Words sharing one (first, last, coverage) signature.
pub type WordGroup = Vec<String>;

/// Read-only index of playable words, built once from the extractor's output.
#[derive(Debug, Default, Clone)]
pub struct PuzzleGraph {
    edges: BTreeMap<char, BTreeMap<char, BTreeMap<LetterSet, WordGroup>>>,
    word_count: usize,
    signature_count: usize,
}

impl PuzzleGraph {
    #[must_use]
    pub fn build(words: &[PlayableWord]) -> Self {
        let mut edges: BTreeMap<char, BTreeMap<char, BTreeMap<LetterSet, WordGroup>>> = BTreeMap::new();
        for w in words {
            edges
                .entry(w.first)
                .or_default()
                .entry(w.last)
                .or_default()
                .entry(w.letters)
                .or_default()
                .push(w.word.clone());
        }

        let signature_count = edges.values().flat_map(BTreeMap::values).map(BTreeMap::len).sum();
        debug!("puzzle graph: {} words in {} signatures", words.len(), signature_count);

        PuzzleGraph { edges, word_count: words.len(), signature_count }
    }

    /// All edges leaving `first`: `(last letter, coverage, words)`.
    pub fn edges_from(&self, first: char) -> impl Iterator<Item = (char, LetterSet, &[String])> + '_ {
        self.edges
            .get(&first)
            .into_iter()
            .flat_map(|by_last| by_last.iter())
            .flat_map(|(&last, by_letters)| {
                by_letters.iter().map(move |(&letters, group)| (last, letters, group.as_slice()))
            })
    }

    /// Edges from `first` to `last`, keyed by coverage.
    #[must_use]
    pub fn edges(&self, first: char, last: char) -> Option<&BTreeMap<LetterSet, WordGroup>> {
        self.edges.get(&first).and_then(|by_last| by_last.get(&last))
    }

    /// Every edge in the graph: `(first letter, last letter, coverage, words)`.
    pub fn signatures(&self) -> impl Iterator<Item = (char, char, LetterSet, &[String])> + '_ {
        self.edges.keys().flat_map(move |&first| {
            self.edges_from(first).map(move |(last, letters, words)| (first, last, letters, words))
        })
    }

    #[must_use]
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    #[must_use]
    pub fn signature_count(&self) -> usize {
        self.signature_count
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractor::extract_words;
    use crate::puzzle::Puzzle;
    use crate::trie::Trie;

    fn graph_for(puzzle: &str, words: &[&str]) -> (Puzzle, PuzzleGraph) {
        let puzzle: Puzzle = puzzle.parse().unwrap();
        let trie: Trie = words.iter().collect();
        let graph = PuzzleGraph::build(&extract_words(&trie, &puzzle, 1));
        (puzzle, graph)
    }

    #[test]
    fn test_words_with_same_signature_share_a_group() {
        // "ad" and "adad" share first, last, and coverage; "adgd" adds 'g'
        let (puzzle, graph) = graph_for("abc-def-ghi-jkl", &["ad", "adad", "adgd", "ae"]);

        let ad_edges = graph.edges('a', 'd').unwrap();
        assert_eq!(ad_edges.len(), 2);
        let ad_key = puzzle.letter_set("ad").unwrap();
        assert_eq!(ad_edges[&ad_key], vec!["ad".to_string(), "adad".to_string()]);
        let adg_key = puzzle.letter_set("adg").unwrap();
        assert_eq!(ad_edges[&adg_key], vec!["adgd".to_string()]);

        assert_eq!(graph.word_count(), 4);
        assert_eq!(graph.signature_count(), 3);
    }

    #[test]
    fn test_edges_from() {
        let (_, graph) = graph_for("abc-def-ghi-jkl", &["ad", "ae", "dg"]);
        let from_a: Vec<_> = graph.edges_from('a').map(|(last, _, words)| (last, words.to_vec())).collect();
        assert_eq!(from_a, vec![('d', vec!["ad".to_string()]), ('e', vec!["ae".to_string()])]);
        assert_eq!(graph.edges_from('z').count(), 0);
        assert!(graph.edges('a', 'z').is_none());
    }

    #[test]
    fn test_signatures_cover_every_word() {
        let (_, graph) = graph_for("abc-def-ghi-jkl", &["ad", "adad", "dg", "gj", "jad"]);
        let total: usize = graph.signatures().map(|(_, _, _, words)| words.len()).sum();
        assert_eq!(total, graph.word_count());
        for (first, last, _, words) in graph.signatures() {
            for w in words {
                assert!(w.starts_with(first));
                assert!(w.ends_with(last));
            }
        }
    }

    #[test]
    fn test_empty_graph() {
        let graph = PuzzleGraph::build(&[]);
        assert!(graph.is_empty());
        assert_eq!(graph.signatures().count(), 0);
    }
}
