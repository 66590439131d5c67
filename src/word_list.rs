//! `word_list`: load and preprocess the dictionary for the solver
//!
//! This module reads a word list either from a file or from an in-memory string (the latter is
//! what the WebAssembly build uses, since the browser cannot open files by path).
//!
//! The parsing logic:
//! - Each non-empty line holds one entry: either a bare `word`, or `word;score`.
//! - Scored lines with a score below `min_score` are skipped; bare words are always kept.
//! - Lines whose score does not parse are skipped silently.
//! - Entries are lowercased; entries containing anything but letters (`don't`, `new york`)
//!   are skipped, because they can never be traced on a puzzle.
//! - The final list is deduplicated and sorted by length first, then alphabetically.

use crate::letter::PuzzleChar;
#[cfg(not(target_arch = "wasm32"))]
use crate::solver::SolverError;

/// A processed, ready-to-use word list.
#[derive(Debug, Clone, Default)]
pub struct WordList {
    /// Lowercase words, sorted by (length, alphabetical).
    /// Example: `["cat", "dog", "apple", ...]`
    pub entries: Vec<String>,
}

impl WordList {
    /// Parse a raw word list from an in-memory string.
    ///
    /// This is **WASM-safe** because it doesn't touch the filesystem.
    ///
    /// # Arguments
    /// * `contents` : The raw file contents. Each line is `word` or `word;score`.
    /// * `min_score`: Scored entries below this are skipped.
    #[must_use]
    pub fn parse_from_str(contents: &str, min_score: i32) -> WordList {
        let mut entries: Vec<String> = contents
            .lines()
            .filter_map(|raw_line| {
                let line = raw_line.trim();
                if line.is_empty() {
                    return None;
                }

                // Split on the first ';' only.
                let word_raw = match line.split_once(';') {
                    Some((word_raw, score_raw)) => {
                        let score: i32 = score_raw.trim().parse().ok()?;
                        if score < min_score {
                            return None;
                        }
                        word_raw
                    }
                    None => line,
                };

                let word = word_raw.trim().to_lowercase();
                if word.is_empty() || !word.chars().all(|c| c.is_puzzle_letter()) {
                    None
                } else {
                    Some(word)
                }
            })
            .collect();

        // `dedup()` only removes *adjacent* duplicates, so sort alphabetically first,
        // then re-sort by (length, alphabetical).
        entries.sort();
        entries.dedup();
        entries.sort_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));

        WordList { entries }
    }

    /// Native-only convenience method: read from a file path and parse.
    ///
    /// # Errors
    ///
    /// Returns `SolverError::DictionarySourceUnavailable` if the file cannot be read.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_path<P: AsRef<std::path::Path>>(
        path: P,
        min_score: i32,
    ) -> Result<WordList, SolverError> {
        let path_ref = path.as_ref();

        let data = std::fs::read_to_string(path_ref).map_err(|source| {
            SolverError::DictionarySourceUnavailable {
                path: path_ref.display().to_string(),
                source,
            }
        })?;

        let word_list = Self::parse_from_str(&data, min_score);
        log::debug!("loaded {} words from '{}'", word_list.len(), path_ref.display());
        Ok(word_list)
    }

    /// Borrow the entries as `&str`s for the solver.
    #[must_use]
    pub fn as_strs(&self) -> Vec<&str> {
        self.entries.iter().map(String::as_str).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
