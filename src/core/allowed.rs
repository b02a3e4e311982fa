//! Letters still allowed in each position
//!
//! Every position starts with the full alphabet. After each locked-in guess a
//! correct letter pins its position, and any other guessed letter is struck
//! from the position it was tried in. Sets only ever shrink.

use super::{Classification, Clue, Violation, Word};
use std::fmt;

/// A set of letters `a..=z`, one bit per letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LetterSet(u32);

impl LetterSet {
    /// Every letter of the alphabet
    pub const ALPHABET: Self = Self((1 << 26) - 1);

    pub const EMPTY: Self = Self(0);

    #[inline]
    const fn bit(letter: u8) -> u32 {
        debug_assert!(letter.is_ascii_lowercase(), "letters are a..=z");
        1 << (letter - b'a')
    }

    /// A set holding only `letter`
    #[inline]
    #[must_use]
    pub const fn only(letter: u8) -> Self {
        Self(Self::bit(letter))
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, letter: u8) -> bool {
        self.0 & Self::bit(letter) != 0
    }

    #[inline]
    #[must_use]
    pub const fn without(self, letter: u8) -> Self {
        Self(self.0 & !Self::bit(letter))
    }

    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// The single letter in the set, if there is exactly one
    #[must_use]
    pub const fn single(self) -> Option<u8> {
        if self.len() == 1 {
            Some(b'a' + self.0.trailing_zeros() as u8)
        } else {
            None
        }
    }

    /// Letters in alphabetical order
    pub fn letters(self) -> impl Iterator<Item = u8> {
        (b'a'..=b'z').filter(move |&letter| self.contains(letter))
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.letters() {
            write!(f, "{}", char::from(letter))?;
        }
        Ok(())
    }
}

/// Whether `letter` may still be played where `allowed` applies
#[inline]
#[must_use]
pub const fn is_allowed(letter: u8, allowed: LetterSet) -> bool {
    allowed.contains(letter)
}

/// Per-position allowed letters for one game
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AllowedLetters {
    sets: Vec<LetterSet>,
}

impl AllowedLetters {
    /// Every letter allowed in each of `length` positions
    #[must_use]
    pub fn full(length: usize) -> Self {
        Self {
            sets: vec![LetterSet::ALPHABET; length],
        }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// Allowed letters at `position`
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[inline]
    #[must_use]
    pub fn at(&self, position: usize) -> LetterSet {
        self.sets[position]
    }

    pub fn iter(&self) -> impl Iterator<Item = LetterSet> + '_ {
        self.sets.iter().copied()
    }

    /// Apply a locked-in clue in place
    ///
    /// A correct letter pins its position; any other letter is removed from
    /// the position it was guessed in. Applying the same clue twice is a no-op.
    ///
    /// # Panics
    /// Panics if the clue length differs from the tracked length.
    pub fn narrow(&mut self, clue: &Clue) {
        assert_eq!(clue.len(), self.len(), "clue length must match");
        for (set, clued) in self.sets.iter_mut().zip(clue) {
            *set = if clued.classification == Classification::Correct {
                LetterSet::only(clued.letter)
            } else {
                set.without(clued.letter)
            };
        }
    }

    /// A new snapshot with `clue` applied, leaving `self` untouched
    #[must_use]
    pub fn narrowed(&self, clue: &Clue) -> Self {
        let mut next = self.clone();
        next.narrow(clue);
        next
    }

    /// One violation for every position whose letter is no longer allowed
    ///
    /// # Panics
    /// Panics if the candidate length differs from the tracked length.
    #[must_use]
    pub fn check(&self, candidate: &Word) -> Vec<Violation> {
        assert_eq!(candidate.len(), self.len(), "candidate length must match");
        candidate
            .letters()
            .iter()
            .zip(&self.sets)
            .enumerate()
            .filter(|&(_, (&letter, &allowed))| !is_allowed(letter, allowed))
            .map(|(position, (&letter, allowed))| match allowed.single() {
                Some(only) => Violation::MustBe {
                    position,
                    letter: only,
                },
                None => Violation::AlreadyBeen { position, letter },
            })
            .collect()
    }
}
