//! Per-letter feedback for a guess
//!
//! A clue classifies every letter of a guess as:
//! - `Absent` (letter not in the target, or all its copies already accounted for)
//! - `Elsewhere` (letter in the target, wrong position)
//! - `Correct` (letter in the right position)

use super::Word;
use super::wording::glyph;

/// Classification of one guessed letter
///
/// Ordered so that the best feedback seen for a letter is the maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Classification {
    Absent,
    Elsewhere,
    Correct,
}

impl Classification {
    /// Word used when reading a clue aloud
    #[must_use]
    pub const fn spoken(self) -> &'static str {
        match self {
            Self::Absent => "no",
            Self::Elsewhere => "elsewhere",
            Self::Correct => "correct",
        }
    }

    /// Whether this letter counts toward the target's copies of it
    #[inline]
    #[must_use]
    pub const fn is_marked(self) -> bool {
        !matches!(self, Self::Absent)
    }
}

/// A letter of a guess together with its classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CluedLetter {
    pub letter: u8,
    pub classification: Classification,
}

/// Emoji sets for shared results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Palette {
    #[default]
    Standard,
    ColorBlind,
}

impl Palette {
    #[must_use]
    pub const fn emoji(self, classification: Classification) -> char {
        match (self, classification) {
            (_, Classification::Absent) => '⬛',
            (Self::Standard, Classification::Elsewhere) => '🟨',
            (Self::Standard, Classification::Correct) => '🟩',
            (Self::ColorBlind, Classification::Elsewhere) => '🟦',
            (Self::ColorBlind, Classification::Correct) => '🟧',
        }
    }
}

/// Feedback for a whole guess, one entry per position
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Clue(Vec<CluedLetter>);

impl Clue {
    /// Clue `guess` against `target`
    ///
    /// Repeated letters are credited at most as many times as they appear in
    /// the target, with exact matches taking priority.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches, collect the unmatched target letters
    /// 2. Second pass: mark each remaining guess letter `Elsewhere` if an
    ///    unmatched copy is left (consuming it), otherwise `Absent`
    ///
    /// # Panics
    /// Panics if the words have different lengths.
    ///
    /// # Examples
    /// ```
    /// use dawdle::core::{Classification, Clue, Word};
    ///
    /// let clue = Clue::evaluate(&Word::new("abab").unwrap(), &Word::new("aabb").unwrap());
    /// let classes: Vec<_> = clue.iter().map(|c| c.classification).collect();
    /// assert_eq!(
    ///     classes,
    ///     [
    ///         Classification::Correct,
    ///         Classification::Elsewhere,
    ///         Classification::Elsewhere,
    ///         Classification::Correct,
    ///     ]
    /// );
    /// ```
    #[must_use]
    pub fn evaluate(guess: &Word, target: &Word) -> Self {
        assert_eq!(
            guess.len(),
            target.len(),
            "cannot clue a {}-letter guess against a {}-letter target",
            guess.len(),
            target.len()
        );

        // First pass: greens, and the leftover target letters
        let mut leftover: Vec<u8> = Vec::with_capacity(target.len());
        let mut letters: Vec<CluedLetter> = guess
            .letters()
            .iter()
            .zip(target.letters())
            .map(|(&g, &t)| {
                let classification = if g == t {
                    Classification::Correct
                } else {
                    leftover.push(t);
                    Classification::Absent
                };
                CluedLetter {
                    letter: g,
                    classification,
                }
            })
            .collect();

        // Second pass: yellows, each leftover copy used once
        for clued in &mut letters {
            if clued.classification == Classification::Correct {
                continue;
            }
            if let Some(j) = leftover.iter().position(|&t| t == clued.letter) {
                leftover.swap_remove(j);
                clued.classification = Classification::Elsewhere;
            }
        }

        Self(letters)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CluedLetter> {
        self.0.iter()
    }

    /// The clued letter at `position`
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[inline]
    #[must_use]
    pub fn at(&self, position: usize) -> CluedLetter {
        self.0[position]
    }

    /// Every position correct
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.0
            .iter()
            .all(|c| c.classification == Classification::Correct)
    }

    /// Positions where `letter` was classified `Correct` or `Elsewhere`
    #[must_use]
    pub fn marked_count(&self, letter: u8) -> usize {
        self.0
            .iter()
            .filter(|c| c.letter == letter && c.classification.is_marked())
            .count()
    }

    /// Spoken description, e.g. `"W correct, O correct, L no, F no"`
    #[must_use]
    pub fn describe(&self) -> String {
        self.0
            .iter()
            .map(|c| format!("{} {}", glyph(c.letter), c.classification.spoken()))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Emoji row such as `"🟩🟩⬛⬛"`
    #[must_use]
    pub fn to_emoji(&self, palette: Palette) -> String {
        self.0
            .iter()
            .map(|c| palette.emoji(c.classification))
            .collect()
    }
}

impl<'a> IntoIterator for &'a Clue {
    type Item = &'a CluedLetter;
    type IntoIter = std::slice::Iter<'a, CluedLetter>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
