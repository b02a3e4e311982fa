//! Why a guess or a game setup was rejected

use crate::core::Violation;
use std::fmt;
use thiserror::Error;

/// Which way a guess missed the word length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthProblem {
    Short,
    Long,
}

impl fmt::Display for LengthProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Short => "short",
            Self::Long => "long",
        })
    }
}

/// Rule breaches found for one candidate, difficulty rules first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Violations {
    pub difficulty: Vec<Violation>,
    pub allowed: Vec<Violation>,
}

impl Violations {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.difficulty.is_empty() && self.allowed.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Violation> {
        self.difficulty.iter().chain(&self.allowed)
    }

    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.iter().map(ToString::to_string).collect()
    }
}

/// A guess that was not accepted; the game is left unchanged
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("Too {problem}")]
    LengthMismatch {
        problem: LengthProblem,
        expected: usize,
        actual: usize,
    },

    #[error("Not a valid word")]
    NotInDictionary(String),

    #[error("Word not allowed")]
    NotAllowed(Violations),

    #[error("The game is over")]
    GameOver,
}

impl GuessError {
    pub(crate) fn length(expected: usize, actual: usize) -> Self {
        Self::LengthMismatch {
            problem: if actual < expected {
                LengthProblem::Short
            } else {
                LengthProblem::Long
            },
            expected,
            actual,
        }
    }

    /// Follow-up lines shown under the headline message
    #[must_use]
    pub fn details(&self) -> Vec<String> {
        match self {
            Self::NotAllowed(violations) => violations.messages(),
            _ => Vec::new(),
        }
    }
}

/// A game could not be set up
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetupError {
    #[error("Invalid target word {0:?}: not in the dictionary")]
    UnknownTarget(String),

    #[error("No {0}-letter target words available")]
    NoTargets(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_messages() {
        assert_eq!(GuessError::length(5, 3).to_string(), "Too short");
        assert_eq!(GuessError::length(5, 7).to_string(), "Too long");
    }

    #[test]
    fn violations_keep_difficulty_first() {
        let violations = Violations {
            difficulty: vec![Violation::CantContain { letter: b'k' }],
            allowed: vec![Violation::AlreadyBeen {
                position: 0,
                letter: b'd',
            }],
        };
        let err = GuessError::NotAllowed(violations);

        assert_eq!(err.to_string(), "Word not allowed");
        assert_eq!(
            err.details(),
            ["Guess can't contain K", "1st letter has already been D"]
        );
        assert!(GuessError::GameOver.details().is_empty());
    }
}
