//! Simple interactive CLI mode
//!
//! Line-based game without the TUI: type a guess, read the clue and how many
//! words are still legal.

use crate::core::wording::glyph;
use crate::game::{Game, GameState, GuessError, Session};
use crate::output::formatters::{colored_clue, share_text};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// What the player asked for after a line of input
enum Action {
    Quit,
    NewGame,
    Again,
    GiveUp,
    Share,
    Help,
    Unknown(String),
    Guess(String),
}

/// Commands start with `:` so every dictionary word stays guessable
fn parse_action(input: &str) -> Action {
    let input = input.trim().to_lowercase();
    if !input.starts_with(':') {
        return Action::Guess(input);
    }
    match input[1..].trim() {
        "quit" | "q" | "exit" => Action::Quit,
        "new" | "n" => Action::NewGame,
        "again" | "a" => Action::Again,
        "give up" | "giveup" | "g" => Action::GiveUp,
        "share" | "s" => Action::Share,
        "help" | "h" | "?" => Action::Help,
        other => Action::Unknown(other.to_string()),
    }
}

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error on I/O failure or if no target word is available.
pub fn run_simple(session: &mut Session<'_>) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_simple_with(session, &mut stdin.lock(), &mut stdout.lock())
}

/// The game loop over any line source and sink
///
/// # Errors
///
/// Returns an error on I/O failure or if no target word is available.
pub fn run_simple_with<R: BufRead, W: Write>(
    session: &mut Session<'_>,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    let palette = session.config().palette;
    let mut game = session.start()?;

    writeln!(out, "\n{}", "═".repeat(62).bright_cyan())?;
    writeln!(out, "{}", "  dawdle - how long can you avoid the word?".bold())?;
    writeln!(out, "{}", "═".repeat(62).bright_cyan())?;
    print_help(out)?;
    print_status(out, &game, &session.describe())?;

    loop {
        write!(out, "Guess {}: ", game.score() + 1)?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            return Ok(());
        }

        match parse_action(&line) {
            Action::Quit => {
                writeln!(out, "\nThanks for playing!\n")?;
                return Ok(());
            }
            Action::Help => print_help(out)?,
            Action::Unknown(command) => {
                writeln!(
                    out,
                    "{}",
                    format!("Unknown command :{command}, try :help").yellow()
                )?;
            }
            Action::NewGame => {
                game = session.next_game()?;
                writeln!(out, "\nNew game started!")?;
                print_status(out, &game, &session.describe())?;
            }
            Action::Again => {
                game.restart();
                writeln!(out, "\nSame word, fresh start.")?;
                print_status(out, &game, &session.describe())?;
            }
            Action::GiveUp => {
                if game.give_up() {
                    print_game_over(out, &game)?;
                } else {
                    writeln!(out, "{}", "Make at least one guess first.".yellow())?;
                }
            }
            Action::Share => {
                if game.state().is_over() {
                    writeln!(out, "\n{}\n", share_text(&game, &session.describe(), palette))?;
                } else {
                    writeln!(out, "{}", "Finish the game to share it.".yellow())?;
                }
            }
            Action::Guess(text) if text.is_empty() => {}
            Action::Guess(text) => match game.submit(&text) {
                Ok(turn) => {
                    writeln!(
                        out,
                        "  {}  {} {}",
                        colored_clue(&turn.clue),
                        turn.clue.to_emoji(palette),
                        format!("({} left)", turn.remaining).bright_black()
                    )?;
                    if game.state().is_over() {
                        print_game_over(out, &game)?;
                    }
                }
                Err(err) => print_rejection(out, &err)?,
            },
        }
    }
}

fn print_help<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\nEvery guess must be a real word. Don't hit the target!")?;
    writeln!(
        out,
        "Commands: :giveup, :again (same word), :new, :share, :quit\n"
    )
}

fn print_status<W: Write>(out: &mut W, game: &Game<'_>, description: &str) -> io::Result<()> {
    writeln!(
        out,
        "{} | {} letters | {} | {} words to choose from\n",
        description.bright_cyan(),
        game.word_length(),
        game.difficulty(),
        game.remaining()
    )
}

fn print_rejection<W: Write>(out: &mut W, err: &GuessError) -> io::Result<()> {
    writeln!(out, "  {}", err.to_string().red().bold())?;
    for detail in err.details() {
        writeln!(out, "    {}", detail.red())?;
    }
    Ok(())
}

fn print_game_over<W: Write>(out: &mut W, game: &Game<'_>) -> io::Result<()> {
    let Some(summary) = game.summary() else {
        return Ok(());
    };
    let styled = match game.state() {
        GameState::GaveUp => summary.yellow().bold(),
        _ => summary.green().bold(),
    };
    writeln!(out, "\n{styled}")?;

    let target: String = game.target().letters().iter().map(|&c| glyph(c)).collect();
    writeln!(
        out,
        "Type :new for another word, :again to replay {target}, or :share.\n"
    )
}
