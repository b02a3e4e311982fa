//! Reasons a candidate guess is not allowed
//!
//! Positions are 0-based here and rendered as 1-based ordinals.

use super::wording::{glyph, number_word, ordinal};
use thiserror::Error;

/// A single rule a candidate guess breaks
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
pub enum Violation {
    /// A known green moved or was dropped
    #[error("{} letter must be {}", ordinal(*.position + 1), glyph(*.letter))]
    MustBe { position: usize, letter: u8 },

    /// Fewer copies of a letter than the clue proved exist
    #[error("{}", must_contain_at_least(*.letter, *.count))]
    MustContainAtLeast { letter: u8, count: usize },

    /// A letter repeated in a position already known to be wrong for it
    #[error("{} letter can't be {}", ordinal(*.position + 1), glyph(*.letter))]
    CantBe { position: usize, letter: u8 },

    /// A letter the target is known not to contain
    #[error("Guess can't contain {}", glyph(*.letter))]
    CantContain { letter: u8 },

    /// A letter whose exact count is known, used a different number of times
    #[error("{}", must_contain_exactly(*.letter, *.count))]
    MustContainExactly { letter: u8, count: usize },

    /// A letter already ruled out at this position
    #[error("{} letter has already been {}", ordinal(*.position + 1), glyph(*.letter))]
    AlreadyBeen { position: usize, letter: u8 },
}

fn must_contain_at_least(letter: u8, count: usize) -> String {
    if count > 1 {
        format!(
            "Guess must contain at least {} {}s",
            number_word(count),
            glyph(letter)
        )
    } else {
        format!("Guess must contain {}", glyph(letter))
    }
}

fn must_contain_exactly(letter: u8, count: usize) -> String {
    let plural = if count == 1 { "" } else { "s" };
    format!(
        "Guess must contain exactly {} {}{plural}",
        number_word(count),
        glyph(letter)
    )
}
