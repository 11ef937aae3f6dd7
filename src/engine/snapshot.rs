//! Read-only view of a round for rendering

use super::round::{RoundId, RoundState};
use crate::core::{KeyState, Level};
use std::time::Duration;

/// Number of figure stages drawn on the gallows
pub const GALLOWS_STAGES: u32 = 6;

/// Rendered state of the current round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundSnapshot {
    pub round: RoundId,
    pub level: Level,
    pub state: RoundState,
    pub mask: String,
    pub lives: u32,
    pub max_lives: u32,
    pub time_remaining: Duration,
    pub round_time: Duration,
    /// Guessed letters in alphabetical order
    pub used_letters: Vec<char>,
    pub keyboard: [KeyState; 26],
    /// The secret, present only once the round has ended
    pub revealed: Option<String>,
}

impl RoundSnapshot {
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    /// Lives lost so far
    #[must_use]
    pub const fn lives_lost(&self) -> u32 {
        self.max_lives.saturating_sub(self.lives)
    }

    /// How much of the figure to draw, `0..=GALLOWS_STAGES`
    ///
    /// Scales lives lost onto the six figure parts so the figure is complete exactly
    /// when the last life is gone.
    #[must_use]
    pub const fn gallows_stage(&self) -> u32 {
        if self.max_lives == 0 {
            return 0;
        }
        (self.lives_lost() * GALLOWS_STAGES).div_ceil(self.max_lives)
    }

    /// Fraction of the guess window left, `0.0..=1.0`
    #[must_use]
    pub fn time_fraction(&self) -> f64 {
        if self.round_time.is_zero() {
            return 0.0;
        }
        (self.time_remaining.as_secs_f64() / self.round_time.as_secs_f64()).clamp(0.0, 1.0)
    }
}
