//! Game flow on top of the rule engine
//!
//! - `counter`: how many words could still be guessed
//! - `engine`: one game, guess by guess
//! - `session`: a series of games with seeded target selection

pub mod config;
mod counter;
mod engine;
mod error;
mod session;
mod target;

pub use config::{DEFAULT_MAX_GUESSES, GameConfig, MAX_GAME_NUMBER};
pub use counter::{count_remaining, is_legal, remaining_words};
pub use engine::{Game, GameState, Turn};
pub use error::{GuessError, LengthProblem, SetupError, Violations};
pub use session::Session;
pub use target::{Mulberry32, SEED_OFFSET, TargetPicker, describe_seed, seed_for_date, today_seed};
