//! Automatic guessers
//!
//! Guessers pick the next letter from a round snapshot. They drive batch simulation
//! and can stand in for a player in tests.

use crate::engine::RoundSnapshot;
use clap::ValueEnum;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use std::fmt;

/// English letters from most to least frequent
pub const FREQUENCY_ORDER: &str = "etaoinshrdlcumwfgypbvkjxqz";

/// A strategy for choosing the next letter
pub trait Guesser {
    /// Pick a letter that has not been guessed yet
    ///
    /// Returns `None` once every letter is used.
    fn next_letter(&mut self, snapshot: &RoundSnapshot) -> Option<char>;
}

/// Guesser selectable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum GuesserKind {
    /// Unused letters in English frequency order
    #[default]
    Frequency,
    /// Uniformly random unused letters
    Random,
}

impl GuesserKind {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Frequency => "frequency",
            Self::Random => "random",
        }
    }
}

impl fmt::Display for GuesserKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Enum wrapper for all guesser types
///
/// Allows runtime selection while keeping static dispatch.
pub enum GuesserType {
    Frequency(FrequencyGuesser),
    Random(RandomGuesser),
}

impl GuesserType {
    /// Create a guesser of the given kind; `seed` only affects the random guesser
    #[must_use]
    pub fn new(kind: GuesserKind, seed: u64) -> Self {
        match kind {
            GuesserKind::Frequency => Self::Frequency(FrequencyGuesser),
            GuesserKind::Random => Self::Random(RandomGuesser::seeded(seed)),
        }
    }
}

impl Guesser for GuesserType {
    fn next_letter(&mut self, snapshot: &RoundSnapshot) -> Option<char> {
        match self {
            Self::Frequency(g) => g.next_letter(snapshot),
            Self::Random(g) => g.next_letter(snapshot),
        }
    }
}

/// Guesses unused letters in English frequency order
pub struct FrequencyGuesser;

impl Guesser for FrequencyGuesser {
    fn next_letter(&mut self, snapshot: &RoundSnapshot) -> Option<char> {
        FREQUENCY_ORDER
            .chars()
            .find(|&c| snapshot.keyboard[(c as u8 - b'a') as usize].enabled)
    }
}

/// Guesses uniformly among unused letters
pub struct RandomGuesser {
    rng: StdRng,
}

impl RandomGuesser {
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Guesser for RandomGuesser {
    fn next_letter(&mut self, snapshot: &RoundSnapshot) -> Option<char> {
        let open: Vec<char> = snapshot
            .keyboard
            .iter()
            .filter(|k| k.enabled)
            .map(|k| k.letter)
            .collect();
        open.choose(&mut self.rng).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Level;
    use crate::engine::{EngineConfig, GuessOutcome, ManualClock, RoundEngine, RoundState};
    use crate::wordlists::WordPool;

    fn engine(secret: &str) -> RoundEngine<ManualClock> {
        let pool = WordPool::from_entries(Level::Basic, [secret]);
        let config = EngineConfig {
            seed: Some(1),
            ..EngineConfig::default()
        };
        RoundEngine::with_clock(pool, config, ManualClock::new())
    }

    #[test]
    fn frequency_order_covers_alphabet() {
        let mut letters: Vec<char> = FREQUENCY_ORDER.chars().collect();
        letters.sort_unstable();
        letters.dedup();
        assert_eq!(letters.len(), 26);
    }

    #[test]
    fn frequency_guesser_skips_used_letters() {
        let mut engine = engine("python");
        engine.start_round();
        engine.guess("e");
        engine.guess("t");

        let mut guesser = FrequencyGuesser;
        assert_eq!(guesser.next_letter(&engine.snapshot()), Some('a'));
    }

    #[test]
    fn frequency_guesser_wins_easy_word() {
        let mut engine = engine("tea");
        engine.start_round();
        let mut guesser = FrequencyGuesser;

        while engine.state() == RoundState::InProgress {
            let letter = guesser.next_letter(&engine.snapshot()).unwrap();
            assert_ne!(engine.guess_char(letter), GuessOutcome::Rejected);
        }
        assert_eq!(engine.state(), RoundState::Won);
        assert_eq!(engine.lives(), 6);
    }

    #[test]
    fn random_guesser_never_repeats() {
        let mut engine = engine("jazz");
        engine.start_round();
        let mut guesser = RandomGuesser::seeded(9);

        while engine.state() == RoundState::InProgress {
            let letter = guesser.next_letter(&engine.snapshot()).unwrap();
            assert_ne!(engine.guess_char(letter), GuessOutcome::Rejected);
        }
        assert!(engine.state().is_finished());
    }

    #[test]
    fn guesser_kind_builds_matching_guesser() {
        assert!(matches!(GuesserType::new(GuesserKind::Random, 0), GuesserType::Random(_)));
        assert!(matches!(
            GuesserType::new(GuesserKind::Frequency, 0),
            GuesserType::Frequency(_)
        ));
    }

    #[test]
    fn guesser_kind_parses_known_names_only() {
        assert_eq!(GuesserKind::from_str("random", true), Ok(GuesserKind::Random));
        assert_eq!(GuesserKind::from_str("FREQUENCY", true), Ok(GuesserKind::Frequency));
        assert!(GuesserKind::from_str("frequncy", true).is_err());
        assert_eq!(GuesserKind::Random.to_string(), "random");
    }
}
