//! One-shot rule inspection
//!
//! `clue` shows how a guess is scored against a target; `check` replays a
//! history and reports every reason a candidate would be refused next.

use crate::core::{AllowedLetters, Clue, Difficulty, Word};
use crate::game::Violations;
use crate::wordlists::Dictionary;
use anyhow::{Context, Result, ensure};

/// A guess scored against a target
pub struct ClueReport {
    pub guess: Word,
    pub target: Word,
    pub clue: Clue,
}

/// Score `guess` against `target`; neither needs to be in the dictionary
///
/// # Errors
///
/// Returns an error if either word is invalid or their lengths differ.
pub fn clue_words(guess: &str, target: &str) -> Result<ClueReport> {
    let guess = Word::new(guess).with_context(|| format!("Invalid guess {guess:?}"))?;
    let target = Word::new(target).with_context(|| format!("Invalid target {target:?}"))?;
    ensure!(
        guess.len() == target.len(),
        "Guess has {} letters but the target has {}",
        guess.len(),
        target.len()
    );

    let clue = Clue::evaluate(&guess, &target);
    Ok(ClueReport {
        guess,
        target,
        clue,
    })
}

/// What would happen to `candidate` after `history`
pub struct CheckReport {
    pub candidate: Word,
    pub difficulty: Difficulty,
    pub violations: Violations,
    /// Whether the candidate is a dictionary word
    pub known_word: bool,
}

impl CheckReport {
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        self.known_word && self.violations.is_empty()
    }
}

/// Replay `history` against `target`, then judge `candidate`
///
/// # Errors
///
/// Returns an error if any word is invalid or the lengths differ.
pub fn check_candidate(
    dictionary: &Dictionary,
    difficulty: Difficulty,
    target: &str,
    history: &[String],
    candidate: &str,
) -> Result<CheckReport> {
    let target = Word::new(target).with_context(|| format!("Invalid target {target:?}"))?;
    let candidate =
        Word::new(candidate).with_context(|| format!("Invalid candidate {candidate:?}"))?;

    let mut clues = Vec::with_capacity(history.len());
    for text in history {
        let guess = Word::new(text.as_str()).with_context(|| format!("Invalid guess {text:?}"))?;
        ensure!(
            guess.len() == target.len(),
            "Guess {guess} does not match the {}-letter target",
            target.len()
        );
        clues.push(Clue::evaluate(&guess, &target));
    }
    ensure!(
        candidate.len() == target.len(),
        "Candidate has {} letters but the target has {}",
        candidate.len(),
        target.len()
    );

    let mut allowed = AllowedLetters::full(target.len());
    for clue in &clues {
        allowed.narrow(clue);
    }

    Ok(CheckReport {
        known_word: dictionary.contains(candidate.text()),
        violations: Violations {
            difficulty: difficulty.check_clues(&clues, &candidate),
            allowed: allowed.check(&candidate),
        },
        candidate,
        difficulty,
    })
}
