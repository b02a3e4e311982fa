//! TUI application state and logic

use crate::core::Palette;
use crate::game::{Game, GameState, Session};
use crate::output::formatters::share_text;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::warn;

/// Application state
pub struct App<'a> {
    pub session: Session<'a>,
    pub game: Game<'a>,
    pub palette: Palette,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub best_score: usize,
}

impl<'a> App<'a> {
    /// Start the session's first game
    ///
    /// # Errors
    ///
    /// Returns an error if no target word of the configured length exists.
    pub fn new(mut session: Session<'a>) -> Result<Self> {
        let game = session.start()?;
        let palette = session.config().palette;

        let mut app = Self {
            session,
            game,
            palette,
            input_buffer: String::new(),
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
        };
        app.add_message(
            "Guess words, but try not to hit the target!",
            MessageStyle::Info,
        );
        app.announce_game();
        Ok(app)
    }

    fn announce_game(&mut self) {
        let text = format!(
            "{}: {} words to choose from",
            self.session.describe(),
            self.game.remaining()
        );
        self.add_message(&text, MessageStyle::Info);
    }

    pub fn push_letter(&mut self, c: char) {
        if self.game.state().is_over() || !c.is_ascii_alphabetic() {
            return;
        }
        if self.input_buffer.len() < self.game.word_length() {
            self.input_buffer.push(c.to_ascii_lowercase());
        }
    }

    pub fn submit_guess(&mut self) {
        let input = std::mem::take(&mut self.input_buffer);
        match self.game.submit(&input) {
            Ok(turn) => {
                if self.game.state().is_over() {
                    self.finish_game();
                } else {
                    self.add_message(
                        &format!("{} words left", turn.remaining),
                        MessageStyle::Info,
                    );
                }
            }
            Err(err) => {
                self.input_buffer = input;
                self.add_message(&err.to_string(), MessageStyle::Error);
                for detail in err.details() {
                    self.add_message(&detail, MessageStyle::Error);
                }
            }
        }
    }

    pub fn give_up(&mut self) {
        if self.game.give_up() {
            self.input_buffer.clear();
            self.finish_game();
        } else {
            self.add_message("Make at least one guess first", MessageStyle::Error);
        }
    }

    fn finish_game(&mut self) {
        self.stats.total_games += 1;
        if self.game.state().is_won() {
            self.stats.games_won += 1;
        }
        self.stats.best_score = self.stats.best_score.max(self.game.score());

        if let Some(summary) = self.game.summary() {
            let style = match self.game.state() {
                GameState::GaveUp => MessageStyle::Error,
                _ => MessageStyle::Success,
            };
            self.add_message(&summary, style);
        }
        self.add_message(
            "Enter: new word | Backspace: play this word again | s: share",
            MessageStyle::Info,
        );
    }

    pub fn new_game(&mut self) {
        match self.session.next_game() {
            Ok(game) => {
                self.game = game;
                self.input_buffer.clear();
                self.messages.clear();
                self.announce_game();
            }
            Err(err) => {
                warn!(%err, "could not start a new game");
                self.add_message(&err.to_string(), MessageStyle::Error);
            }
        }
    }

    pub fn play_again(&mut self) {
        self.game.restart();
        self.input_buffer.clear();
        self.messages.clear();
        self.add_message("Same word, fresh start", MessageStyle::Info);
    }

    pub fn share(&mut self) {
        let text = share_text(&self.game, &self.session.describe(), self.palette);
        self.add_message(&text, MessageStyle::Success);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 8 messages
        if self.messages.len() > 8 {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') => self.should_quit = true,
                KeyCode::Char('g') => self.give_up(),
                KeyCode::Char('n') => self.new_game(),
                _ => {}
            }
            return;
        }

        if self.game.state().is_over() {
            match key.code {
                KeyCode::Esc | KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Enter => self.new_game(),
                KeyCode::Backspace => self.play_again(),
                KeyCode::Char('s') => self.share(),
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char(c) => self.push_letter(c),
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Enter => self.submit_guess(),
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
