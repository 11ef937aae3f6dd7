//! TUI rendering with ratatui
//!
//! Everything drawn here comes from a [`RoundSnapshot`]; nothing is cached between
//! frames.

use super::app::{App, MessageStyle};
use crate::core::KEYBOARD_ROWS;
use crate::engine::{Clock, RoundSnapshot, RoundState};
use crate::output::formatters::{gallows_lines, lives_hearts, used_letters_text};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui<C: Clock>(f: &mut Frame, app: &App<C>, snapshot: &RoundSnapshot) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(11),   // Gallows + word
            Constraint::Length(5), // Keyboard
            Constraint::Length(7), // Messages
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, snapshot, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(20), Constraint::Min(30)])
        .split(chunks[1]);

    render_gallows(f, snapshot, main_chunks[0]);
    render_round_panel(f, snapshot, main_chunks[1]);
    render_keyboard(f, snapshot, chunks[2]);
    render_messages(f, app, chunks[3]);
    render_status(f, app, chunks[4]);
}

fn render_header(f: &mut Frame, snapshot: &RoundSnapshot, area: Rect) {
    let header = Paragraph::new(format!(
        "🎩 HANGMAN - {} Level - Round {}",
        snapshot.level,
        snapshot.round.value()
    ))
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

fn render_gallows(f: &mut Frame, snapshot: &RoundSnapshot, area: Rect) {
    let color = match snapshot.state {
        RoundState::Won => Color::Green,
        RoundState::Lost => Color::Red,
        _ => Color::White,
    };

    let lines: Vec<Line> = gallows_lines(snapshot.gallows_stage())
        .into_iter()
        .map(Line::from)
        .collect();

    let gallows = Paragraph::new(lines)
        .style(Style::default().fg(color))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(gallows, area);
}

fn render_round_panel(f: &mut Frame, snapshot: &RoundSnapshot, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Word
            Constraint::Length(3), // Timer
        ])
        .split(area);

    let word_style = match snapshot.state {
        RoundState::Won => Style::default().fg(Color::Green),
        RoundState::Lost => Style::default().fg(Color::Red),
        _ => Style::default().fg(Color::Yellow),
    }
    .add_modifier(Modifier::BOLD);

    let mut content = vec![
        Line::from(""),
        Line::from(Span::styled(snapshot.mask.clone(), word_style)).alignment(Alignment::Center),
        Line::from(""),
        Line::from(vec![
            Span::raw("Lives: "),
            Span::styled(
                lives_hearts(snapshot.lives, snapshot.max_lives),
                Style::default().fg(Color::Red),
            ),
            Span::raw(format!(" {}/{}", snapshot.lives, snapshot.max_lives)),
        ]),
        Line::from(format!(
            "Used letters: {}",
            used_letters_text(&snapshot.used_letters)
        )),
    ];

    if let Some(ref secret) = snapshot.revealed {
        content.push(Line::from(vec![
            Span::raw("The word was: "),
            Span::styled(
                secret.to_uppercase(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
    }

    let word = Paragraph::new(content).block(
        Block::default()
            .title(" Word ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(word, chunks[0]);

    let fraction = snapshot.time_fraction();
    let color = if fraction > 0.5 {
        Color::Green
    } else if fraction > 0.2 {
        Color::Yellow
    } else {
        Color::Red
    };

    let gauge = Gauge::default()
        .block(Block::default().title(" Time ").borders(Borders::ALL))
        .gauge_style(Style::default().fg(color))
        .ratio(fraction)
        .label(format!("{:.1}s", snapshot.time_remaining.as_secs_f64()));
    f.render_widget(gauge, chunks[1]);
}

fn render_keyboard(f: &mut Frame, snapshot: &RoundSnapshot, area: Rect) {
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .map(|c| {
                    let key = snapshot.keyboard[(c as u8 - b'a') as usize];
                    let style = if key.enabled {
                        Style::default()
                            .fg(Color::White)
                            .add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(Color::DarkGray)
                    };
                    Span::styled(format!(" {} ", c.to_ascii_uppercase()), style)
                })
                .collect();
            Line::from(spans).alignment(Alignment::Center)
        })
        .collect();

    let keyboard = Paragraph::new(lines).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL),
    );
    f.render_widget(keyboard, area);
}

fn render_messages<C: Clock>(f: &mut Frame, app: &App<C>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Warning => Style::default().fg(Color::Yellow),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status<C: Clock>(f: &mut Frame, app: &App<C>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let stats_text = format!(
        "Rounds: {} | Win Rate: {:.0}% | Streak: {} (best {})",
        app.stats.rounds_played,
        app.stats.win_rate(),
        app.stats.current_streak,
        app.stats.best_streak
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[0]);

    let help_text = if app.engine.state().is_finished() {
        "Enter/n: New Round | Tab: Level | q/Esc: Quit"
    } else {
        "a-z: Guess | Tab: Level | Esc: Quit"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}
