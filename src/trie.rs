//! Prefix tree over lowercase words: the dictionary index.
//!
//! Nodes own their children directly; there is no parent link. Code that needs the word
//! spelled by a node carries the prefix along while it walks down (see `extractor`).

use std::collections::BTreeMap;

/// One prefix position in the tree.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TrieNode {
    children: BTreeMap<char, TrieNode>,
    terminal: bool,
}

impl TrieNode {
    #[must_use]
    pub(crate) fn child(&self, letter: char) -> Option<&TrieNode> {
        self.children.get(&letter)
    }

    /// A complete dictionary word ends at this node.
    #[must_use]
    pub(crate) fn is_terminal(&self) -> bool {
        self.terminal
    }
}

/// Dictionary index supporting insertion, exact lookup, and constrained traversal.
#[derive(Debug, Default, Clone)]
pub struct Trie {
    root: TrieNode,
    len: usize,
}

impl Trie {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `word`, creating nodes as needed. Re-inserting a word changes nothing.
    ///
    /// The empty string is ignored: the root never marks a word.
    pub fn insert(&mut self, word: &str) {
        if word.is_empty() {
            return;
        }
        let node = word
            .chars()
            .fold(&mut self.root, |node, c| node.children.entry(c).or_default());
        if !node.terminal {
            node.terminal = true;
            self.len += 1;
        }
    }

    /// Whether `word` was inserted.
    #[must_use]
    pub fn search(&self, word: &str) -> bool {
        word.chars()
            .try_fold(&self.root, |node, c| node.child(c))
            .is_some_and(TrieNode::is_terminal)
    }

    #[must_use]
    pub(crate) fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Number of distinct words in the index.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<S: AsRef<str>> FromIterator<S> for Trie {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut trie = Trie::new();
        for word in iter {
            trie.insert(word.as_ref());
        }
        trie
    }
}
