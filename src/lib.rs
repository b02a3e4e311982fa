//! Dawdle
//!
//! A Wordle variant where the goal is to avoid the target for as long as
//! possible. Every guess must be a real word, must never reuse a letter in a
//! position it was already ruled out of, and at higher difficulties must stay
//! consistent with every earlier clue.
//!
//! # Quick Start
//!
//! ```rust
//! use dawdle::core::{Clue, Difficulty, Word, check_violations};
//!
//! let target = Word::new("word").unwrap();
//! let guess = Word::new("wolf").unwrap();
//!
//! let clue = Clue::evaluate(&guess, &target);
//! assert_eq!(clue.describe(), "W correct, O correct, L no, F no");
//!
//! let candidate = Word::new("cake").unwrap();
//! let problems = check_violations(Difficulty::Hard, &[guess], &target, &candidate);
//! assert_eq!(problems[0].to_string(), "1st letter must be W");
//! ```

// Rule engine
pub mod core;

// Games, sessions and the candidate counter
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Tracing subscriber setup
pub mod logging;
