//! Word representation
//!
//! A Word stores a 4 to 11 letter lowercase word along with per-letter counts
//! used by the clue and difficulty rules.

use std::fmt;
use thiserror::Error;

/// Shortest playable word length
pub const MIN_LENGTH: usize = 4;

/// Longest playable word length
pub const MAX_LENGTH: usize = 11;

/// Word length used when none (or an out-of-range one) is requested
pub const DEFAULT_LENGTH: usize = 5;

/// A lowercase word of `MIN_LENGTH..=MAX_LENGTH` ASCII letters
///
/// Letters are stored as bytes `b'a'..=b'z'`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must be {MIN_LENGTH} to {MAX_LENGTH} letters, got {0}")]
    InvalidLength(usize),
    #[error("Word must contain only ASCII letters")]
    NonAscii,
    #[error("Word contains invalid characters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// The input is lowercased before validation.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is outside `MIN_LENGTH..=MAX_LENGTH`
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use dawdle::core::Word;
    ///
    /// let word = Word::new("Dawdle").unwrap();
    /// assert_eq!(word.text(), "dawdle");
    ///
    /// assert!(Word::new("abc").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !(MIN_LENGTH..=MAX_LENGTH).contains(&text.len()) {
            return Err(WordError::InvalidLength(text.len()));
        }

        if !text.bytes().all(|c| c.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self { text })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the letters as bytes
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false; kept for clippy's `len_without_is_empty`
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get the letter at a specific position
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[inline]
    #[must_use]
    pub fn letter_at(&self, position: usize) -> u8 {
        self.letters()[position]
    }

    /// Count occurrences of a letter
    #[inline]
    #[must_use]
    pub fn count_of(&self, letter: u8) -> usize {
        self.letters().iter().filter(|&&c| c == letter).count()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.text(), "crane");
        assert_eq!(word.letters(), b"crane");
        assert_eq!(word.len(), 5);
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("CrAnE").unwrap();
        assert_eq!(word.text(), "crane");
    }

    #[test]
    fn word_creation_length_bounds() {
        assert!(Word::new("word").is_ok());
        assert!(Word::new("accommodate").is_ok());
        assert_eq!(Word::new("abc"), Err(WordError::InvalidLength(3)));
        assert_eq!(
            Word::new("abcdefghijkl"),
            Err(WordError::InvalidLength(12))
        );
        assert_eq!(Word::new(""), Err(WordError::InvalidLength(0)));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("cran3"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("cran "), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("créme"), Err(WordError::NonAscii));
    }

    #[test]
    fn word_counts_duplicates() {
        let word = Word::new("speed").unwrap();
        assert_eq!(word.count_of(b'e'), 2);
        assert_eq!(word.count_of(b'z'), 0);
    }

    #[test]
    fn word_letter_at() {
        let word = Word::new("dawdle").unwrap();
        assert_eq!(word.letter_at(0), b'd');
        assert_eq!(word.letter_at(5), b'e');
    }

    #[test]
    fn word_display_and_parse() {
        let word: Word = "Wolf".parse().unwrap();
        assert_eq!(format!("{word}"), "wolf");
    }
}
