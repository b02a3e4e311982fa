//! Dawdle - CLI
//!
//! Play in the terminal UI or line by line, inspect clues and rule checks, or
//! let a random bot show how long games last.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dawdle::{
    commands::{SimulationConfig, check_candidate, clue_words, run_simple, run_simulation},
    core::{Difficulty, Palette},
    game::{DEFAULT_MAX_GUESSES, GameConfig, Session, today_seed},
    logging,
    output::{print_check_report, print_clue_report, print_simulation_result},
    wordlists::Dictionary,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "dawdle",
    about = "A Wordle variant where you try to survive as many guesses as possible",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Difficulty: normal (default), hard, ultra-hard
    #[arg(short, long, global = true, default_value = "normal")]
    difficulty: Difficulty,

    /// Word length, 4 to 11 (anything else plays 5)
    #[arg(short, long, global = true, default_value_t = 5)]
    length: usize,

    /// Guesses needed to survive a game
    #[arg(short, long, global = true, default_value_t = DEFAULT_MAX_GUESSES)]
    max_guesses: usize,

    /// Seed for reproducible targets
    #[arg(long, global = true)]
    seed: Option<u32>,

    /// Play today's game (seeded by the date)
    #[arg(long, global = true, conflicts_with = "seed")]
    today: bool,

    /// Game number within a seeded series, 1 to 1000
    #[arg(short, long, global = true, default_value_t = 1)]
    game: u32,

    /// Play against a fixed target word
    #[arg(short, long, global = true)]
    target: Option<String>,

    /// Custom word list file, one word per line (used for guesses and targets)
    #[arg(short = 'w', long, global = true)]
    dictionary: Option<PathBuf>,

    /// Use blue/orange instead of yellow/green
    #[arg(long, global = true)]
    color_blind: bool,

    /// Write logs to this file (the TUI logs nothing otherwise)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based game without TUI)
    Simple,

    /// Show the clue a guess gets against a target
    Clue {
        guess: String,

        #[arg(value_name = "TARGET")]
        answer: String,
    },

    /// Explain why a candidate would or would not be allowed
    Check {
        /// The word you are thinking of guessing
        candidate: String,

        /// Earlier guesses, comma separated
        #[arg(long, value_delimiter = ',')]
        history: Vec<String>,
    },

    /// Let a random bot play many games
    Simulate {
        /// Number of games to play
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,
    },
}

impl Cli {
    fn palette(&self) -> Palette {
        if self.color_blind {
            Palette::ColorBlind
        } else {
            Palette::Standard
        }
    }

    fn game_config(&self) -> GameConfig {
        GameConfig {
            length: self.length,
            difficulty: self.difficulty,
            max_guesses: self.max_guesses,
            seed: if self.today {
                Some(today_seed())
            } else {
                self.seed
            },
            game_number: self.game,
            target: self.target.clone(),
            palette: self.palette(),
        }
        .normalized()
    }
}

/// Load the embedded lists, or a custom file given with `--dictionary`
fn load_dictionary(path: Option<&PathBuf>) -> Result<Dictionary> {
    match path {
        Some(path) => Dictionary::from_file(path)
            .with_context(|| format!("Failed to read word list {}", path.display())),
        None => Ok(Dictionary::embedded()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.as_ref().unwrap_or(&Commands::Play);
    logging::init_for(matches!(command, Commands::Play), cli.log_file.as_deref())?;

    let dictionary = load_dictionary(cli.dictionary.as_ref())?;

    match command {
        Commands::Play => run_play_command(&cli, &dictionary),
        Commands::Simple => {
            let mut session = Session::new(&dictionary, cli.game_config())?;
            run_simple(&mut session)
        }
        Commands::Clue { guess, answer } => {
            let report = clue_words(guess, answer)?;
            print_clue_report(&report, cli.palette());
            Ok(())
        }
        Commands::Check { candidate, history } => {
            let target = cli
                .target
                .as_deref()
                .context("check needs the target word, pass it with --target")?;
            let report = check_candidate(&dictionary, cli.difficulty, target, history, candidate)?;
            print_check_report(&report);
            Ok(())
        }
        Commands::Simulate { count } => run_simulate_command(&cli, &dictionary, *count),
    }
}

fn run_simulate_command(cli: &Cli, dictionary: &Dictionary, count: usize) -> Result<()> {
    let config = cli.game_config();
    println!(
        "Simulating {count} {}-letter games at {} difficulty...",
        config.length, config.difficulty
    );

    let result = run_simulation(
        dictionary,
        &SimulationConfig {
            games: count,
            length: config.length,
            difficulty: config.difficulty,
            max_guesses: config.max_guesses,
            seed: config.seed,
            show_progress: true,
        },
    )?;
    print_simulation_result(&result);
    Ok(())
}

fn run_play_command(cli: &Cli, dictionary: &Dictionary) -> Result<()> {
    use dawdle::interactive::{App, run_tui};

    let session = Session::new(dictionary, cli.game_config())?;
    let app = App::new(session)?;
    run_tui(app)
}
