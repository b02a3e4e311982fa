//! TUI rendering with ratatui
//!
//! Board, allowed letters, keyboard and messages for the game.

use super::app::{App, MessageStyle};
use crate::core::{Classification, LetterSet, Palette, wording::glyph};
use crate::game::GameState;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};
use rustc_hash::FxHashMap;

const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50), // Board
            Constraint::Percentage(50), // Info
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let title = format!(
        "DAWDLE - {} | {} letters | {}",
        app.session.describe(),
        app.game.word_length(),
        app.game.difficulty()
    );
    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn clue_style(classification: Classification, palette: Palette) -> Style {
    let bg = match (palette, classification) {
        (_, Classification::Absent) => Color::DarkGray,
        (Palette::Standard, Classification::Correct) => Color::Green,
        (Palette::Standard, Classification::Elsewhere) => Color::Yellow,
        (Palette::ColorBlind, Classification::Correct) => Color::LightRed,
        (Palette::ColorBlind, Classification::Elsewhere) => Color::LightBlue,
    };
    Style::new().fg(Color::Black).bg(bg).add_modifier(Modifier::BOLD)
}

fn tile(letter: u8, style: Style) -> Span<'static> {
    Span::styled(format!(" {} ", glyph(letter)), style)
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let remaining = app.game.remaining_history();
    let mut lines: Vec<Line> = app
        .game
        .turns()
        .iter()
        .zip(&remaining)
        .enumerate()
        .map(|(i, (turn, before))| {
            let mut spans = vec![Span::styled(
                format!("{:>3} ", i + 1),
                Style::default().fg(Color::DarkGray),
            )];
            spans.extend(
                turn.clue
                    .iter()
                    .map(|c| tile(c.letter, clue_style(c.classification, app.palette))),
            );
            spans.push(Span::styled(
                format!(" ({before})"),
                Style::default().fg(Color::DarkGray),
            ));
            Line::from(spans)
        })
        .collect();

    if !app.game.state().is_over() {
        let typed = app.input_buffer.as_bytes();
        let mut spans = vec![Span::styled(
            format!("{:>3} ", app.game.score() + 1),
            Style::default().fg(Color::Yellow),
        )];
        for position in 0..app.game.word_length() {
            spans.push(match typed.get(position) {
                Some(&letter) => tile(letter, Style::default().fg(Color::White).bg(Color::Blue)),
                None => Span::styled(" _ ", Style::default().fg(Color::DarkGray)),
            });
        }
        spans.push(Span::styled(
            format!(" ({})", app.game.remaining()),
            Style::default().fg(Color::DarkGray),
        ));
        lines.push(Line::from(spans));
    }

    // Keep the newest rows in view
    let visible = area.height.saturating_sub(2) as usize;
    let skip = lines.len().saturating_sub(visible);
    let lines: Vec<Line> = lines.into_iter().skip(skip).collect();

    let board = Paragraph::new(lines).block(
        Block::default()
            .title(" Guesses (words available) ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let allowed_height = app.game.word_length() as u16 + 2;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(allowed_height), // Allowed letters
            Constraint::Length(5),              // Keyboard
            Constraint::Min(4),                 // Messages
        ])
        .split(area);

    render_allowed(f, app, chunks[0]);
    render_keyboard(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn describe_set(set: LetterSet) -> String {
    match set.len() {
        26 => "any letter".to_string(),
        0 => "nothing".to_string(),
        n if n > 13 => {
            let missing: String = (b'a'..=b'z')
                .filter(|&c| !set.contains(c))
                .map(glyph)
                .collect();
            format!("not {missing}")
        }
        _ => set.letters().map(glyph).collect(),
    }
}

fn render_allowed(f: &mut Frame, app: &App, area: Rect) {
    let lines: Vec<Line> = app
        .game
        .allowed()
        .iter()
        .enumerate()
        .map(|(position, set)| {
            let style = if set.single().is_some() {
                Style::default().fg(Color::Green)
            } else {
                Style::default()
            };
            Line::from(vec![
                Span::styled(
                    format!("{:>2}: ", position + 1),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(describe_set(set), style),
            ])
        })
        .collect();

    let allowed = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Allowed Letters ")
                .borders(Borders::ALL),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(allowed, area);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let info: FxHashMap<u8, Classification> = app.game.letter_info();
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .bytes()
                .map(|letter| match info.get(&letter) {
                    Some(&classification) => tile(letter, clue_style(classification, app.palette)),
                    None => tile(letter, Style::default().fg(Color::White)),
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Keyboard ").borders(Borders::ALL));
    f.render_widget(keyboard, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.game.state() {
        GameState::Playing => (
            " Type a guess | Enter: submit | Ctrl-G: give up ",
            app.input_buffer.to_uppercase(),
            Color::Yellow,
        ),
        GameState::Solved | GameState::Survived => (
            " Game over | Enter: new word | Backspace: again | s: share ",
            String::new(),
            Color::Green,
        ),
        GameState::GaveUp => (
            " Gave up | Enter: new word | Backspace: again | s: share ",
            String::new(),
            Color::Red,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let score = Paragraph::new(format!(
        "Score: {}/{}",
        app.game.score(),
        app.game.max_guesses()
    ))
    .alignment(Alignment::Center);
    f.render_widget(score, chunks[0]);

    let stats = Paragraph::new(format!(
        "Games: {} | Best: {}",
        app.stats.total_games, app.stats.best_score
    ))
    .alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let remaining = Paragraph::new(format!("Words available: {}", app.game.remaining()))
        .alignment(Alignment::Center);
    f.render_widget(remaining, chunks[2]);

    let help = Paragraph::new("Esc: Quit | Ctrl-N: New Game")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describe_set_reads_naturally() {
        assert_eq!(describe_set(LetterSet::ALPHABET), "any letter");
        assert_eq!(describe_set(LetterSet::only(b'w')), "W");
        assert_eq!(
            describe_set(LetterSet::ALPHABET.without(b'l').without(b'f')),
            "not FL"
        );
        assert_eq!(describe_set(LetterSet::EMPTY), "nothing");
    }
}
