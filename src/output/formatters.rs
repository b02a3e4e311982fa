//! Formatting utilities for terminal output

use crate::core::{Classification, Clue, Palette, wording::glyph};
use crate::game::Game;
use colored::{ColoredString, Colorize};

/// One letter on its clue colour, e.g. a black `W` on green
#[must_use]
pub fn colored_letter(letter: u8, classification: Classification) -> ColoredString {
    let text = format!(" {} ", glyph(letter));
    match classification {
        Classification::Correct => text.black().on_green().bold(),
        Classification::Elsewhere => text.black().on_yellow().bold(),
        Classification::Absent => text.white().on_bright_black(),
    }
}

/// A whole clue as coloured letter tiles
#[must_use]
pub fn colored_clue(clue: &Clue) -> String {
    clue.iter()
        .map(|c| colored_letter(c.letter, c.classification).to_string())
        .collect()
}

/// Emoji summary of a finished game
///
/// Each row carries the number of words that were still legal when that guess
/// was played.
#[must_use]
pub fn share_text(game: &Game<'_>, description: &str, palette: Palette) -> String {
    let remaining = game.remaining_history();
    let rows: Vec<String> = game
        .turns()
        .iter()
        .zip(&remaining)
        .map(|(turn, before)| format!("{} ({before})", turn.clue.to_emoji(palette)))
        .collect();

    format!(
        "dawdle: {description}\nScore: {}\n{}",
        game.score(),
        rows.join("\n")
    )
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
