//! Simulate command
//!
//! A bot plays many games, guessing uniformly among the words that are still
//! legal. Shows how long random play survives at each difficulty.

use crate::core::{Difficulty, Word};
use crate::game::{Game, GameState, TargetPicker, remaining_words};
use crate::wordlists::Dictionary;
use anyhow::{Result, bail};
use indicatif::{ProgressBar, ProgressStyle};
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// How a batch of simulated games went
#[derive(Debug)]
pub struct SimulationResult {
    pub games: usize,
    pub difficulty: Difficulty,
    pub max_guesses: usize,
    /// Games the bot ended by hitting the target
    pub solved: usize,
    /// Games that reached the guess limit
    pub survived: usize,
    pub average_score: f64,
    pub min_score: usize,
    pub max_score: usize,
    /// Score -> number of games
    pub distribution: BTreeMap<usize, usize>,
    pub duration: Duration,
}

/// Settings for a simulation run
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    pub games: usize,
    pub length: usize,
    pub difficulty: Difficulty,
    pub max_guesses: usize,
    /// Reproducible targets and bot choices
    pub seed: Option<u32>,
    pub show_progress: bool,
}

/// Play one game with the random bot, returning the final score and state
pub fn play_bot_game<R: Rng>(
    dictionary: &Dictionary,
    target: Word,
    difficulty: Difficulty,
    max_guesses: usize,
    rng: &mut R,
) -> (usize, GameState) {
    let mut game = Game::new(dictionary, target, difficulty, max_guesses);

    while !game.state().is_over() {
        let history = game.guesses();
        let legal = remaining_words(
            dictionary,
            game.word_length(),
            game.allowed(),
            difficulty,
            &history,
            game.target(),
        );
        let Some(&guess) = legal.choose(rng) else {
            game.give_up();
            break;
        };
        if let Err(err) = game.submit(guess.text()) {
            debug!(%guess, %err, "bot guess refused");
            game.give_up();
            break;
        }
    }

    (game.score(), game.state())
}

/// Run the simulation across all cores
///
/// # Errors
///
/// Returns an error if there are no targets of the requested length or the
/// progress bar template is invalid.
pub fn run_simulation(dictionary: &Dictionary, config: &SimulationConfig) -> Result<SimulationResult> {
    let targets = dictionary.targets(config.length);
    if targets.is_empty() {
        bail!("No {}-letter target words available", config.length);
    }

    let mut picker = TargetPicker::new(config.seed);
    let games: Vec<Word> = (0..config.games)
        .filter_map(|_| picker.pick(targets).cloned())
        .collect();

    info!(
        games = games.len(),
        length = config.length,
        difficulty = %config.difficulty,
        "simulating"
    );

    let pb = if config.show_progress {
        ProgressBar::new(games.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")?
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let outcomes: Vec<(usize, GameState)> = games
        .into_par_iter()
        .enumerate()
        .map(|(index, target)| {
            let mut rng = match config.seed {
                Some(seed) => StdRng::seed_from_u64((u64::from(seed) << 32) | index as u64),
                None => StdRng::from_rng(&mut rand::rng()),
            };
            let outcome = play_bot_game(
                dictionary,
                target,
                config.difficulty,
                config.max_guesses,
                &mut rng,
            );
            pb.inc(1);
            outcome
        })
        .collect();
    pb.finish_with_message("Complete!");

    Ok(summarize(config, &outcomes, start.elapsed()))
}

fn summarize(
    config: &SimulationConfig,
    outcomes: &[(usize, GameState)],
    duration: Duration,
) -> SimulationResult {
    let mut distribution = BTreeMap::new();
    for &(score, _) in outcomes {
        *distribution.entry(score).or_insert(0) += 1;
    }
    let total: usize = outcomes.iter().map(|&(score, _)| score).sum();
    let count_state = |wanted: GameState| outcomes.iter().filter(|&&(_, s)| s == wanted).count();

    SimulationResult {
        games: outcomes.len(),
        difficulty: config.difficulty,
        max_guesses: config.max_guesses,
        solved: count_state(GameState::Solved),
        survived: count_state(GameState::Survived),
        average_score: if outcomes.is_empty() {
            0.0
        } else {
            total as f64 / outcomes.len() as f64
        },
        min_score: distribution.keys().next().copied().unwrap_or(0),
        max_score: distribution.keys().next_back().copied().unwrap_or(0),
        distribution,
        duration,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn dictionary() -> Dictionary {
        let words = words_from_slice(&[
            "word", "wolf", "wore", "worn", "cord", "dark", "darn", "dart", "barn", "yarn",
        ]);
        Dictionary::new(words.clone(), words)
    }

    fn config(difficulty: Difficulty) -> SimulationConfig {
        SimulationConfig {
            games: 20,
            length: 4,
            difficulty,
            max_guesses: 100,
            seed: Some(5),
            show_progress: false,
        }
    }

    #[test]
    fn bot_always_finds_the_target() {
        let dictionary = dictionary();
        for difficulty in Difficulty::ALL {
            let mut rng = StdRng::seed_from_u64(1);
            let (score, state) = play_bot_game(
                &dictionary,
                Word::new("dart").unwrap(),
                difficulty,
                100,
                &mut rng,
            );
            assert_eq!(state, GameState::Solved, "{difficulty}");
            assert!((1..=10).contains(&score));
        }
    }

    #[test]
    fn bot_survives_a_short_limit() {
        let dictionary = dictionary();
        let mut rng = StdRng::seed_from_u64(3);
        let (score, state) = play_bot_game(
            &dictionary,
            Word::new("dart").unwrap(),
            Difficulty::Normal,
            1,
            &mut rng,
        );
        assert_eq!(score, 1);
        assert!(state.is_won());
    }

    #[test]
    fn simulation_counts_every_game() {
        let dictionary = dictionary();
        let result = run_simulation(&dictionary, &config(Difficulty::Hard)).unwrap();

        assert_eq!(result.games, 20);
        assert_eq!(result.solved + result.survived, 20);
        assert_eq!(result.distribution.values().sum::<usize>(), 20);
        assert!(result.average_score >= result.min_score as f64);
        assert!(result.average_score <= result.max_score as f64);
    }

    #[test]
    fn seeded_simulation_reproduces() {
        let dictionary = dictionary();
        let a = run_simulation(&dictionary, &config(Difficulty::UltraHard)).unwrap();
        let b = run_simulation(&dictionary, &config(Difficulty::UltraHard)).unwrap();
        assert_eq!(a.distribution, b.distribution);
    }

    #[test]
    fn missing_length_is_an_error() {
        let dictionary = dictionary();
        let config = SimulationConfig {
            length: 7,
            ..config(Difficulty::Normal)
        };
        assert!(run_simulation(&dictionary, &config).is_err());
    }
}
