//! Command implementations

pub mod inspect;
pub mod simple;
pub mod simulate;

pub use inspect::{CheckReport, ClueReport, check_candidate, clue_words};
pub use simple::{run_simple, run_simple_with};
pub use simulate::{SimulationConfig, SimulationResult, play_bot_game, run_simulation};
