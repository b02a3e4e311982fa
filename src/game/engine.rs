//! One game in progress
//!
//! Wires the rule engine together in submission order: length and dictionary
//! checks, difficulty rules, allowed letters, then the clue and the
//! remaining-candidate count. A rejected guess changes nothing.

use super::counter::count_remaining;
use super::error::{GuessError, Violations};
use crate::core::{AllowedLetters, Classification, Clue, Difficulty, Word, wording::glyph};
use crate::wordlists::Dictionary;
use rustc_hash::FxHashMap;
use tracing::{debug, info};

/// Where a game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Playing,
    /// The target was guessed
    Solved,
    /// The guess limit was reached without hitting the target
    Survived,
    /// The player stopped early
    GaveUp,
}

impl GameState {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::Playing)
    }

    #[must_use]
    pub const fn is_won(self) -> bool {
        matches!(self, Self::Solved | Self::Survived)
    }
}

/// An accepted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub guess: Word,
    pub clue: Clue,
    /// Words still legal after this guess
    pub remaining: usize,
}

/// A single game against a fixed target
#[derive(Debug, Clone)]
pub struct Game<'d> {
    dictionary: &'d Dictionary,
    target: Word,
    difficulty: Difficulty,
    max_guesses: usize,
    turns: Vec<Turn>,
    allowed: AllowedLetters,
    initial_remaining: usize,
    state: GameState,
}

impl<'d> Game<'d> {
    /// Start a game
    ///
    /// # Parameters
    /// - `dictionary`: valid guesses, also used for the remaining count
    /// - `target`: the hidden word
    /// - `difficulty`: rules for the whole game
    /// - `max_guesses`: guesses needed to survive the game
    #[must_use]
    pub fn new(
        dictionary: &'d Dictionary,
        target: Word,
        difficulty: Difficulty,
        max_guesses: usize,
    ) -> Self {
        let allowed = AllowedLetters::full(target.len());
        let initial_remaining =
            count_remaining(dictionary, target.len(), &allowed, difficulty, &[], &target);

        info!(
            length = target.len(),
            %difficulty,
            max_guesses,
            initial_remaining,
            "new game"
        );

        Self {
            dictionary,
            target,
            difficulty,
            max_guesses,
            turns: Vec::new(),
            allowed,
            initial_remaining,
            state: GameState::Playing,
        }
    }

    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    #[must_use]
    pub fn word_length(&self) -> usize {
        self.target.len()
    }

    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub const fn max_guesses(&self) -> usize {
        self.max_guesses
    }

    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    #[must_use]
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// Letters still allowed per position
    #[must_use]
    pub const fn allowed(&self) -> &AllowedLetters {
        &self.allowed
    }

    /// Accepted guesses so far
    #[must_use]
    pub fn score(&self) -> usize {
        self.turns.len()
    }

    /// Accepted guesses in order
    #[must_use]
    pub fn guesses(&self) -> Vec<Word> {
        self.turns.iter().map(|turn| turn.guess.clone()).collect()
    }

    /// Words still legal as the next guess
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.turns
            .last()
            .map_or(self.initial_remaining, |turn| turn.remaining)
    }

    /// Remaining counts: before the first guess, then after each guess
    #[must_use]
    pub fn remaining_history(&self) -> Vec<usize> {
        std::iter::once(self.initial_remaining)
            .chain(self.turns.iter().map(|turn| turn.remaining))
            .collect()
    }

    /// Every reason `candidate` would be refused right now
    ///
    /// # Panics
    /// Panics if `candidate` is not the game's word length.
    #[must_use]
    pub fn violations(&self, candidate: &Word) -> Violations {
        Violations {
            difficulty: self
                .difficulty
                .check_clues(self.turns.iter().map(|turn| &turn.clue), candidate),
            allowed: self.allowed.check(candidate),
        }
    }

    /// Submit a guess
    ///
    /// On success the guess is locked in and its turn returned; on error the
    /// game is unchanged.
    ///
    /// # Errors
    /// - `GameOver` once the game has ended
    /// - `LengthMismatch` if the guess is not the target's length
    /// - `NotInDictionary` if it is not a known word
    /// - `NotAllowed` with every difficulty and allowed-letter violation
    pub fn submit(&mut self, input: &str) -> Result<Turn, GuessError> {
        if self.state.is_over() {
            return Err(GuessError::GameOver);
        }

        let input = input.trim().to_lowercase();
        let actual = input.chars().count();
        if actual != self.word_length() {
            debug!(guess = %input, "rejected: wrong length");
            return Err(GuessError::length(self.word_length(), actual));
        }

        let guess = match Word::new(input.as_str()) {
            Ok(word) if self.dictionary.contains(word.text()) => word,
            _ => {
                debug!(guess = %input, "rejected: not in dictionary");
                return Err(GuessError::NotInDictionary(input));
            }
        };

        let violations = self.violations(&guess);
        if !violations.is_empty() {
            debug!(%guess, violations = ?violations.messages(), "rejected: not allowed");
            return Err(GuessError::NotAllowed(violations));
        }

        let clue = Clue::evaluate(&guess, &self.target);
        self.allowed = self.allowed.narrowed(&clue);

        let mut history = self.guesses();
        history.push(guess.clone());
        let remaining = count_remaining(
            self.dictionary,
            self.word_length(),
            &self.allowed,
            self.difficulty,
            &history,
            &self.target,
        );

        let turn = Turn {
            guess,
            clue,
            remaining,
        };
        self.turns.push(turn.clone());
        debug!(guess = %turn.guess, clue = %turn.clue.describe(), remaining, "accepted");

        if turn.clue.is_solved() {
            self.finish(GameState::Solved);
        } else if self.turns.len() >= self.max_guesses {
            self.finish(GameState::Survived);
        }

        Ok(turn)
    }

    /// End the game early; only possible while playing after at least one guess
    ///
    /// Returns whether the game was ended.
    pub fn give_up(&mut self) -> bool {
        if self.state.is_over() || self.turns.is_empty() {
            return false;
        }
        self.finish(GameState::GaveUp);
        true
    }

    /// Play the same target again from scratch
    pub fn restart(&mut self) {
        self.turns.clear();
        self.allowed = AllowedLetters::full(self.word_length());
        self.state = GameState::Playing;
        info!("restarted with the same target");
    }

    fn finish(&mut self, state: GameState) {
        self.state = state;
        info!(?state, score = self.score(), target = %self.target, "game over");
    }

    /// Best classification seen for each guessed letter, for keyboard display
    #[must_use]
    pub fn letter_info(&self) -> FxHashMap<u8, Classification> {
        let mut info: FxHashMap<u8, Classification> = FxHashMap::default();
        for clued in self.turns.iter().flat_map(|turn| turn.clue.iter()) {
            let best = info.entry(clued.letter).or_insert(clued.classification);
            *best = (*best).max(clued.classification);
        }
        info
    }

    /// Game-over headline, `None` while playing
    #[must_use]
    pub fn summary(&self) -> Option<String> {
        let target: String = self.target.letters().iter().map(|&c| glyph(c)).collect();
        let score = self.score();
        match self.state {
            GameState::Playing => None,
            GameState::Solved => Some(format!("You scored {score} for {target}!")),
            GameState::Survived => Some(format!(
                "Congrats! Your score is OVER {} for {target}!!!",
                self.max_guesses
            )),
            GameState::GaveUp => Some(format!(
                "Your score would have been at least {score} for {target}."
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Violation;
    use crate::game::error::LengthProblem;
    use crate::wordlists::loader::words_from_slice;

    fn dictionary() -> Dictionary {
        let words = words_from_slice(&[
            "word", "wolf", "wore", "worn", "cord", "dark", "darn", "dart", "barn", "yarn", "crane",
        ]);
        Dictionary::new(words.clone(), words)
    }

    fn game<'d>(dictionary: &'d Dictionary, target: &str, difficulty: Difficulty) -> Game<'d> {
        Game::new(dictionary, Word::new(target).unwrap(), difficulty, 100)
    }

    #[test]
    fn new_game_counts_every_word_of_its_length() {
        let dictionary = dictionary();
        let game = game(&dictionary, "word", Difficulty::Normal);

        assert_eq!(game.state(), GameState::Playing);
        assert_eq!(game.remaining(), 10);
        assert_eq!(game.remaining_history(), [10]);
        assert_eq!(game.summary(), None);
    }

    #[test]
    fn accepted_guess_updates_everything() {
        let dictionary = dictionary();
        let mut game = game(&dictionary, "word", Difficulty::Normal);

        let turn = game.submit("WOLF").unwrap();
        assert_eq!(turn.guess.text(), "wolf");
        assert_eq!(turn.clue.to_emoji(crate::core::Palette::Standard), "🟩🟩⬛⬛");
        // word, wore, worn
        assert_eq!(turn.remaining, 3);
        assert_eq!(game.score(), 1);
        assert_eq!(game.remaining_history(), [10, 3]);
        assert_eq!(game.allowed().at(0).single(), Some(b'w'));
    }

    #[test]
    fn rejected_guesses_leave_game_unchanged() {
        let dictionary = dictionary();
        let mut game = game(&dictionary, "word", Difficulty::Hard);
        game.submit("wolf").unwrap();
        let allowed = game.allowed().clone();

        assert_eq!(
            game.submit("wor"),
            Err(GuessError::LengthMismatch {
                problem: LengthProblem::Short,
                expected: 4,
                actual: 3
            })
        );
        assert_eq!(game.submit("wolfs").unwrap_err().to_string(), "Too long");
        assert_eq!(
            game.submit("wxyz"),
            Err(GuessError::NotInDictionary("wxyz".to_string()))
        );
        assert_eq!(
            game.submit("w0rd"),
            Err(GuessError::NotInDictionary("w0rd".to_string()))
        );

        let err = game.submit("cord").unwrap_err();
        assert_eq!(err.to_string(), "Word not allowed");
        assert_eq!(err.details(), ["1st letter must be W", "1st letter must be W"]);

        assert_eq!(game.score(), 1);
        assert_eq!(game.allowed(), &allowed);
        assert_eq!(game.state(), GameState::Playing);
    }

    #[test]
    fn repeated_guess_is_refused_by_allowed_letters() {
        let dictionary = dictionary();
        let mut game = game(&dictionary, "word", Difficulty::Normal);
        game.submit("wolf").unwrap();

        match game.submit("wolf") {
            Err(GuessError::NotAllowed(violations)) => {
                assert!(violations.difficulty.is_empty());
                assert_eq!(
                    violations.allowed,
                    [
                        Violation::AlreadyBeen {
                            position: 2,
                            letter: b'l'
                        },
                        Violation::AlreadyBeen {
                            position: 3,
                            letter: b'f'
                        },
                    ]
                );
            }
            other => panic!("expected NotAllowed, got {other:?}"),
        }
    }

    #[test]
    fn guessing_the_target_solves() {
        let dictionary = dictionary();
        let mut game = game(&dictionary, "word", Difficulty::Normal);
        game.submit("wolf").unwrap();
        game.submit("word").unwrap();

        assert_eq!(game.state(), GameState::Solved);
        assert!(game.state().is_won());
        assert_eq!(game.summary().unwrap(), "You scored 2 for WORD!");
        assert_eq!(game.submit("wore"), Err(GuessError::GameOver));
        assert!(!game.give_up());
    }

    #[test]
    fn reaching_the_limit_survives() {
        let dictionary = dictionary();
        let mut game = Game::new(&dictionary, Word::new("dart").unwrap(), Difficulty::Normal, 2);
        game.submit("barn").unwrap();
        game.submit("dark").unwrap();

        assert_eq!(game.state(), GameState::Survived);
        assert_eq!(
            game.summary().unwrap(),
            "Congrats! Your score is OVER 2 for DART!!!"
        );
    }

    #[test]
    fn give_up_needs_a_guess() {
        let dictionary = dictionary();
        let mut game = game(&dictionary, "dart", Difficulty::Normal);
        assert!(!game.give_up());

        game.submit("wolf").unwrap();
        assert!(game.give_up());
        assert_eq!(game.state(), GameState::GaveUp);
        assert!(!game.state().is_won());
        assert_eq!(
            game.summary().unwrap(),
            "Your score would have been at least 1 for DART."
        );
    }

    #[test]
    fn restart_keeps_target() {
        let dictionary = dictionary();
        let mut game = game(&dictionary, "dart", Difficulty::Hard);
        game.submit("dark").unwrap();
        game.give_up();

        game.restart();
        assert_eq!(game.state(), GameState::Playing);
        assert_eq!(game.score(), 0);
        assert_eq!(game.target().text(), "dart");
        assert_eq!(game.allowed(), &AllowedLetters::full(4));
        assert!(game.submit("barn").is_ok());
    }

    #[test]
    fn letter_info_keeps_best_classification() {
        let dictionary = dictionary();
        let mut game = game(&dictionary, "word", Difficulty::Normal);
        game.submit("dark").unwrap();
        game.submit("cord").unwrap();

        let info = game.letter_info();
        // D: elsewhere in DARK, then correct in CORD
        assert_eq!(info[&b'd'], Classification::Correct);
        assert_eq!(info[&b'c'], Classification::Absent);
        assert_eq!(info[&b'a'], Classification::Absent);
        assert_eq!(info[&b'r'], Classification::Correct);
        assert!(!info.contains_key(&b'z'));
    }
}
