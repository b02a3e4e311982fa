//! Word lists and the dictionary provider
//!
//! The dictionary decides which guesses are valid and feeds the candidate
//! counter; the target list is the rarity-bounded subset targets are drawn from.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT, TARGETS, TARGETS_COUNT};

use crate::core::{MAX_LENGTH, Word};
use rustc_hash::FxHashSet;
use std::io;
use std::path::Path;

/// Guessable words and target words, bucketed by length
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: Vec<Vec<Word>>,
    targets: Vec<Vec<Word>>,
    lookup: FxHashSet<String>,
}

impl Dictionary {
    /// Build a dictionary; targets missing from `words` are dropped
    #[must_use]
    pub fn new(words: impl IntoIterator<Item = Word>, targets: impl IntoIterator<Item = Word>) -> Self {
        let mut by_length = vec![Vec::new(); MAX_LENGTH + 1];
        let mut lookup = FxHashSet::default();

        for word in words {
            if lookup.insert(word.text().to_string()) {
                by_length[word.len()].push(word);
            }
        }

        let mut targets_by_length = vec![Vec::new(); MAX_LENGTH + 1];
        let mut seen = FxHashSet::default();
        for target in targets {
            if lookup.contains(target.text()) && seen.insert(target.text().to_string()) {
                targets_by_length[target.len()].push(target);
            }
        }

        Self {
            words: by_length,
            targets: targets_by_length,
            lookup,
        }
    }

    /// The word lists compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(
            loader::words_from_slice(DICTIONARY),
            loader::words_from_slice(TARGETS),
        )
    }

    /// Load a custom list; every word in it is both guessable and a target
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read.
    pub fn from_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let words = loader::load_from_file(path)?;
        Ok(Self::new(words.clone(), words))
    }

    /// Whether `word` is a valid guess
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.lookup.contains(word)
    }

    /// All guessable words of `length` (empty for unsupported lengths)
    #[must_use]
    pub fn words(&self, length: usize) -> &[Word] {
        self.words.get(length).map_or(&[], Vec::as_slice)
    }

    /// Target words of `length` (empty for unsupported lengths)
    #[must_use]
    pub fn targets(&self, length: usize) -> &[Word] {
        self.targets.get(length).map_or(&[], Vec::as_slice)
    }

    /// Total number of guessable words
    #[must_use]
    pub fn len(&self) -> usize {
        self.lookup.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lookup.is_empty()
    }
}
