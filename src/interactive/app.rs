//! TUI application state and logic

use crate::core::Level;
use crate::engine::{
    Clock, GuessOutcome, RoundEngine, RoundId, RoundSnapshot, RoundState, SystemClock, Tick,
};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;

/// Interval between timer ticks
pub const TICK_RATE: Duration = Duration::from_millis(100);

/// Application state
pub struct App<C: Clock = SystemClock> {
    pub engine: RoundEngine<C>,
    /// Round the tick loop is currently scheduled against
    pub round: RoundId,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    recorded: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Warning,
    Error,
}

/// Per-session results; nothing is persisted
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub rounds_played: usize,
    pub rounds_won: usize,
    pub current_streak: usize,
    pub best_streak: usize,
}

impl Statistics {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.rounds_played == 0 {
            0.0
        } else {
            self.rounds_won as f64 / self.rounds_played as f64 * 100.0
        }
    }

    fn record(&mut self, won: bool) {
        self.rounds_played += 1;
        if won {
            self.rounds_won += 1;
            self.current_streak += 1;
            self.best_streak = self.best_streak.max(self.current_streak);
        } else {
            self.current_streak = 0;
        }
    }
}

impl<C: Clock> App<C> {
    /// Create the app and start the first round
    pub fn new(mut engine: RoundEngine<C>) -> Self {
        let round = engine.start_round();

        let mut app = Self {
            engine,
            round,
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
            recorded: false,
        };
        app.add_message(
            "Welcome! Type letters to guess. Each guess has a time limit.",
            MessageStyle::Info,
        );
        app
    }

    #[must_use]
    pub fn snapshot(&self) -> RoundSnapshot {
        self.engine.snapshot()
    }

    pub fn new_round(&mut self) {
        self.round = self.engine.start_round();
        self.recorded = false;
        self.add_message("New round started!", MessageStyle::Info);
    }

    /// Switch level, rebuild the pool, and start a fresh round
    pub fn toggle_level(&mut self) {
        let level: Level = self.engine.level().toggled();
        self.engine.set_level(level);
        self.add_message(&format!("Level: {level}"), MessageStyle::Info);
        self.new_round();
    }

    pub fn guess(&mut self, letter: char) {
        let shown = letter.to_uppercase();
        match self.engine.guess_char(letter) {
            GuessOutcome::Correct => {
                self.add_message(&format!("'{shown}' is in the word"), MessageStyle::Success);
            }
            GuessOutcome::Incorrect => {
                self.add_message(&format!("'{shown}' is not in the word"), MessageStyle::Error);
            }
            GuessOutcome::Rejected => {
                if self.engine.state() == RoundState::InProgress
                    && self.engine.has_guessed(letter)
                {
                    self.add_message(
                        &format!("You already guessed '{shown}'"),
                        MessageStyle::Warning,
                    );
                }
            }
        }
        self.check_finished();
    }

    /// Timer tick; the only place timeouts come from
    pub fn on_tick(&mut self) {
        if let Tick::TimedOut { lives, .. } = self.engine.tick(self.round) {
            self.add_message(
                &format!("Time's up! You lose a life ({lives} left)"),
                MessageStyle::Warning,
            );
        }
        self.check_finished();
    }

    fn check_finished(&mut self) {
        if self.recorded || !self.engine.state().is_finished() {
            return;
        }
        self.recorded = true;

        let won = self.engine.state() == RoundState::Won;
        self.stats.record(won);

        let secret = self.engine.revealed_secret().unwrap_or_default().to_uppercase();
        if won {
            self.add_message(
                &format!("🎉 You won! The word was: {secret}"),
                MessageStyle::Success,
            );
        } else {
            self.add_message(
                &format!("💀 You lost. The word was: {secret}"),
                MessageStyle::Error,
            );
        }
        self.add_message("Press Enter or 'n' for a new round, 'q' to quit.", MessageStyle::Info);
    }

    /// One pass of the event loop
    ///
    /// The deadline is checked before the key is applied, so a guess typed after
    /// the deadline cannot restart the timer ahead of the timeout.
    pub fn step(&mut self, key: Option<KeyEvent>) {
        self.on_tick();
        if let Some(key) = key {
            self.handle_key(key);
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab => self.toggle_level(),
            _ if self.engine.state().is_finished() => match key.code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('n') | KeyCode::Enter => self.new_round(),
                _ => {}
            },
            KeyCode::Char(c) if c.is_alphabetic() => self.guess(c),
            KeyCode::Char(_) => {
                self.add_message("Please enter a single letter", MessageStyle::Warning);
            }
            _ => {}
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<C: Clock>(app: App<C>) -> Result<()> {
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

fn run_app<B: ratatui::backend::Backend, C: Clock>(
    terminal: &mut Terminal<B>,
    mut app: App<C>,
) -> Result<()> {
    loop {
        let snapshot = app.snapshot();
        terminal.draw(|f| super::rendering::ui(f, &app, &snapshot))?;

        let key = if event::poll(TICK_RATE)?
            && let Event::Key(key) = event::read()?
            // Only process key press events (fixes Windows double-input bug)
            && key.kind == KeyEventKind::Press
        {
            Some(key)
        } else {
            None
        };

        app.step(key);

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
