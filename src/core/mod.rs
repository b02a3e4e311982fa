//! Core rule engine
//!
//! Clue evaluation, difficulty rules and allowed-letter tracking. Everything
//! here is pure or works on values the caller owns; no I/O, no randomness.

mod allowed;
mod clue;
mod difficulty;
mod violation;
mod word;
pub mod wording;

pub use allowed::{AllowedLetters, LetterSet, is_allowed};
pub use clue::{Classification, Clue, CluedLetter, Palette};
pub use difficulty::{Difficulty, check_violations};
pub use violation::Violation;
pub use word::{DEFAULT_LENGTH, MAX_LENGTH, MIN_LENGTH, Word, WordError};
