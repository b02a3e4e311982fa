//! Remaining-candidate counting
//!
//! Player feedback only: how many dictionary words could still legally be
//! guessed next. A plain filter over the words of one length, spread across
//! threads with rayon.

use crate::core::{AllowedLetters, Clue, Difficulty, Word};
use crate::wordlists::Dictionary;
use rayon::prelude::*;
use tracing::instrument;

/// Whether `candidate` passes both the allowed letters and the difficulty rules
#[must_use]
pub fn is_legal(
    candidate: &Word,
    allowed: &AllowedLetters,
    difficulty: Difficulty,
    clues: &[Clue],
) -> bool {
    allowed.check(candidate).is_empty() && difficulty.check_clues(clues, candidate).is_empty()
}

fn history_clues(difficulty: Difficulty, history: &[Word], target: &Word) -> Vec<Clue> {
    if difficulty == Difficulty::Normal {
        return Vec::new();
    }
    history
        .iter()
        .map(|guess| Clue::evaluate(guess, target))
        .collect()
}

/// Count dictionary words of `length` that could legally be guessed next
///
/// # Examples
/// ```
/// use dawdle::core::{AllowedLetters, Difficulty, Word};
/// use dawdle::game::count_remaining;
/// use dawdle::wordlists::{Dictionary, loader::words_from_slice};
///
/// let words = words_from_slice(&["word", "wolf"]);
/// let dictionary = Dictionary::new(words.clone(), words);
/// let target = Word::new("word").unwrap();
///
/// let n = count_remaining(&dictionary, 4, &AllowedLetters::full(4), Difficulty::Normal, &[], &target);
/// assert_eq!(n, 2);
/// ```
#[must_use]
#[instrument(level = "trace", skip_all, fields(length = length, difficulty = %difficulty, guesses = history.len()))]
pub fn count_remaining(
    dictionary: &Dictionary,
    length: usize,
    allowed: &AllowedLetters,
    difficulty: Difficulty,
    history: &[Word],
    target: &Word,
) -> usize {
    let clues = history_clues(difficulty, history, target);
    dictionary
        .words(length)
        .par_iter()
        .filter(|word| is_legal(word, allowed, difficulty, &clues))
        .count()
}

/// The words `count_remaining` counts, in dictionary order
#[must_use]
pub fn remaining_words<'d>(
    dictionary: &'d Dictionary,
    length: usize,
    allowed: &AllowedLetters,
    difficulty: Difficulty,
    history: &[Word],
    target: &Word,
) -> Vec<&'d Word> {
    let clues = history_clues(difficulty, history, target);
    dictionary
        .words(length)
        .par_iter()
        .filter(|word| is_legal(word, allowed, difficulty, &clues))
        .collect()
}
