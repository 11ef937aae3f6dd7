//! Round types

use crate::core::{LetterSet, Secret};
use rustc_hash::FxHashSet;
use std::fmt;
use std::time::{Duration, Instant};

/// Lifecycle state of the current round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoundState {
    #[default]
    NotStarted,
    InProgress,
    Won,
    Lost,
}

impl RoundState {
    /// Whether the round has ended
    #[must_use]
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl fmt::Display for RoundState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::NotStarted => "not started",
            Self::InProgress => "in progress",
            Self::Won => "won",
            Self::Lost => "lost",
        };
        write!(f, "{name}")
    }
}

/// Classification of a single guess attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The letter occurs in the secret
    Correct,
    /// The letter does not occur in the secret; a life was lost
    Incorrect,
    /// Not a single letter, already guessed, or no round in progress; nothing changed
    Rejected,
}

/// Generation number of a round
///
/// Incremented on every round start. Work scheduled against an older id is stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct RoundId(u64);

impl RoundId {
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    pub(crate) const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for RoundId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Mutable state of one round, owned by the engine
#[derive(Debug, Clone)]
pub(crate) struct Round {
    pub id: RoundId,
    pub state: RoundState,
    pub secret: Option<Secret>,
    pub guessed: LetterSet,
    /// Guessed letters outside `a..=z`; they can never occur in a secret
    pub other_guesses: FxHashSet<char>,
    pub lives: u32,
    pub deadline: Instant,
    /// Time left when the round ended; the timer stops on win or loss
    pub frozen_remaining: Option<Duration>,
}

impl Round {
    pub fn not_started(now: Instant, lives: u32) -> Self {
        Self {
            id: RoundId::default(),
            state: RoundState::NotStarted,
            secret: None,
            guessed: LetterSet::new(),
            other_guesses: FxHashSet::default(),
            lives,
            deadline: now,
            frozen_remaining: Some(Duration::ZERO),
        }
    }

    pub fn secret_text(&self) -> &str {
        self.secret.as_ref().map_or("", Secret::text)
    }
}
