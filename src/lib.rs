//! Hangman
//!
//! A timed Hangman game: a [`WordPool`](wordlists::WordPool) of candidate secrets per
//! difficulty level and a [`RoundEngine`](engine::RoundEngine) state machine that owns
//! a round's mask, guessed letters, lives and per-guess deadline.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman::core::Level;
//! use hangman::engine::{EngineConfig, GuessOutcome, ManualClock, RoundEngine, RoundState};
//! use hangman::wordlists::WordPool;
//!
//! let pool = WordPool::from_entries(Level::Basic, ["python"]);
//! let mut engine = RoundEngine::with_clock(pool, EngineConfig::default(), ManualClock::new());
//!
//! engine.start_round();
//! assert_eq!(engine.render_mask(), "_ _ _ _ _ _");
//! assert_eq!(engine.guess("p"), GuessOutcome::Correct);
//! assert_eq!(engine.render_mask(), "p _ _ _ _ _");
//! assert_eq!(engine.state(), RoundState::InProgress);
//! ```

// Core domain types
pub mod core;

// Round state machine
pub mod engine;

// Word lists and pools
pub mod wordlists;

// Automatic guessers for batch play
pub mod autoplay;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Tracing subscriber setup
pub mod logging;
