//! Settings for a series of games

use crate::core::{DEFAULT_LENGTH, Difficulty, MAX_LENGTH, MIN_LENGTH, Palette};

/// Default number of guesses before the player has survived the game
pub const DEFAULT_MAX_GUESSES: usize = 100;

/// Highest game number a seeded series can start from
pub const MAX_GAME_NUMBER: u32 = 1000;

/// Everything needed to start games; lengths and game numbers are normalised
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub length: usize,
    pub difficulty: Difficulty,
    pub max_guesses: usize,
    pub seed: Option<u32>,
    pub game_number: u32,
    /// A fixed target ("challenge"); its length overrides `length`
    pub target: Option<String>,
    pub palette: Palette,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            difficulty: Difficulty::Normal,
            max_guesses: DEFAULT_MAX_GUESSES,
            seed: None,
            game_number: 1,
            target: None,
            palette: Palette::Standard,
        }
    }
}

impl GameConfig {
    /// Word length, falling back to the default when out of range
    #[must_use]
    pub fn normalized_length(length: usize) -> usize {
        if (MIN_LENGTH..=MAX_LENGTH).contains(&length) {
            length
        } else {
            DEFAULT_LENGTH
        }
    }

    /// Game number, falling back to 1 when out of range
    #[must_use]
    pub fn normalized_game_number(game_number: u32) -> u32 {
        if (1..=MAX_GAME_NUMBER).contains(&game_number) {
            game_number
        } else {
            1
        }
    }

    /// Apply both normalisations and keep at least one guess
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.length = Self::normalized_length(self.length);
        self.game_number = Self::normalized_game_number(self.game_number);
        self.max_guesses = self.max_guesses.max(1);
        self.target = self.target.map(|t| t.trim().to_lowercase());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_values_fall_back() {
        let config = GameConfig {
            length: 12,
            game_number: 0,
            max_guesses: 0,
            target: Some(" WORD ".to_string()),
            ..GameConfig::default()
        }
        .normalized();

        assert_eq!(config.length, DEFAULT_LENGTH);
        assert_eq!(config.game_number, 1);
        assert_eq!(config.max_guesses, 1);
        assert_eq!(config.target.as_deref(), Some("word"));
    }

    #[test]
    fn in_range_values_kept() {
        assert_eq!(GameConfig::normalized_length(4), 4);
        assert_eq!(GameConfig::normalized_length(11), 11);
        assert_eq!(GameConfig::normalized_length(3), DEFAULT_LENGTH);
        assert_eq!(GameConfig::normalized_game_number(1000), 1000);
        assert_eq!(GameConfig::normalized_game_number(1001), 1);
    }
}
