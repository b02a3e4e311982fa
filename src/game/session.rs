//! A series of games sharing one configuration
//!
//! Owns the target picker so seeded series are reproducible: game `n` of seed
//! `s` is always the same word for a given length and target list.

use super::config::GameConfig;
use super::engine::Game;
use super::error::SetupError;
use super::target::{TargetPicker, describe_seed};
use crate::core::Word;
use crate::wordlists::Dictionary;
use tracing::info;

#[derive(Debug, Clone)]
pub struct Session<'d> {
    dictionary: &'d Dictionary,
    config: GameConfig,
    picker: TargetPicker,
    game_number: u32,
    challenge: Option<Word>,
}

impl<'d> Session<'d> {
    /// Validate `config` against `dictionary`
    ///
    /// # Errors
    /// `UnknownTarget` if a challenge target is not a dictionary word.
    pub fn new(dictionary: &'d Dictionary, config: GameConfig) -> Result<Self, SetupError> {
        let mut config = config.normalized();

        let challenge = match config.target.as_deref() {
            Some(text) => match Word::new(text) {
                Ok(word) if dictionary.contains(word.text()) => {
                    config.length = word.len();
                    Some(word)
                }
                _ => return Err(SetupError::UnknownTarget(text.to_string())),
            },
            None => None,
        };

        Ok(Self {
            dictionary,
            picker: TargetPicker::new(config.seed),
            game_number: config.game_number,
            config,
            challenge,
        })
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Start the current game
    ///
    /// # Errors
    /// `NoTargets` if no target of the configured length exists.
    pub fn start(&mut self) -> Result<Game<'d>, SetupError> {
        let length = self.config.length;
        let target = match &self.challenge {
            Some(word) => word.clone(),
            None => self
                .picker
                .pick_for_game(self.dictionary.targets(length), self.game_number)
                .cloned()
                .ok_or(SetupError::NoTargets(length))?,
        };

        info!(game = %self.describe(), "starting");
        Ok(Game::new(
            self.dictionary,
            target,
            self.config.difficulty,
            self.config.max_guesses,
        ))
    }

    /// Move on to the next game of the series; a challenge becomes a normal game
    ///
    /// # Errors
    /// `NoTargets` if no target of the configured length exists.
    pub fn next_game(&mut self) -> Result<Game<'d>, SetupError> {
        self.challenge = None;
        self.game_number = self.game_number.saturating_add(1);
        self.start()
    }

    /// How to find this game again, for sharing
    #[must_use]
    pub fn describe(&self) -> String {
        match (&self.challenge, self.picker.seed()) {
            (Some(_), _) => "challenge game".to_string(),
            (None, Some(seed)) => format!("{} (game {})", describe_seed(seed), self.game_number),
            (None, None) => "random game".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn dictionary() -> Dictionary {
        let words = words_from_slice(&["word", "wolf", "dart", "dark", "crane", "dawdle"]);
        Dictionary::new(words.clone(), words)
    }

    #[test]
    fn challenge_target_sets_length() {
        let dictionary = dictionary();
        let config = GameConfig {
            target: Some("Dawdle".to_string()),
            ..GameConfig::default()
        };
        let mut session = Session::new(&dictionary, config).unwrap();

        assert_eq!(session.config().length, 6);
        assert_eq!(session.describe(), "challenge game");
        assert_eq!(session.start().unwrap().target().text(), "dawdle");
    }

    #[test]
    fn unknown_challenge_is_rejected() {
        let dictionary = dictionary();
        for target in ["zzzz", "a1b2"] {
            let config = GameConfig {
                target: Some(target.to_string()),
                ..GameConfig::default()
            };
            assert_eq!(
                Session::new(&dictionary, config).unwrap_err(),
                SetupError::UnknownTarget(target.to_string())
            );
        }
    }

    #[test]
    fn seeded_sessions_agree() {
        let dictionary = dictionary();
        let config = GameConfig {
            length: 4,
            seed: Some(99),
            game_number: 3,
            ..GameConfig::default()
        };

        let mut a = Session::new(&dictionary, config.clone()).unwrap();
        let mut b = Session::new(&dictionary, config).unwrap();
        assert_eq!(a.describe(), "seed 99 (game 3)");
        assert_eq!(a.start().unwrap().target(), b.start().unwrap().target());
        assert_eq!(a.next_game().unwrap().target(), b.next_game().unwrap().target());
        assert_eq!(a.describe(), "seed 99 (game 4)");
    }

    #[test]
    fn next_game_after_challenge_picks_a_target() {
        let dictionary = dictionary();
        let config = GameConfig {
            target: Some("word".to_string()),
            ..GameConfig::default()
        };
        let mut session = Session::new(&dictionary, config).unwrap();
        session.start().unwrap();

        let game = session.next_game().unwrap();
        assert_eq!(game.word_length(), 4);
        assert_eq!(session.describe(), "random game");
    }

    #[test]
    fn missing_length_reports_no_targets() {
        let dictionary = dictionary();
        let config = GameConfig {
            length: 9,
            ..GameConfig::default()
        };
        let mut session = Session::new(&dictionary, config).unwrap();
        assert_eq!(session.start().unwrap_err(), SetupError::NoTargets(9));
    }
}
