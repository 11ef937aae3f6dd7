//! Round engine
//!
//! Owns the current round and every transition on it. All mutation goes through
//! `&mut self`, so guesses, timeouts and round starts are serialized by construction.

use super::clock::{Clock, SystemClock};
use super::round::{GuessOutcome, Round, RoundId, RoundState};
use super::snapshot::RoundSnapshot;
use crate::core::{KeyState, LetterSet, Level, keyboard, render_mask};
use crate::wordlists::{WordPool, WordSources};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rustc_hash::FxHashSet;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Lives per round unless configured otherwise
pub const DEFAULT_MAX_LIVES: u32 = 6;

/// Time window per guess unless configured otherwise
pub const DEFAULT_ROUND_TIME: Duration = Duration::from_secs(15);

/// Engine configuration, fixed for the engine's lifetime
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub max_lives: u32,
    pub round_time: Duration,
    /// Sources consulted by [`RoundEngine::set_level`]
    pub sources: WordSources,
    /// Seed for secret selection; `None` seeds from the OS
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_lives: DEFAULT_MAX_LIVES,
            round_time: DEFAULT_ROUND_TIME,
            sources: WordSources::default(),
            seed: None,
        }
    }
}

/// Result of a periodic tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// The tick was scheduled for a round that has since been replaced
    Stale,
    /// No round is in progress
    Idle,
    /// The round is running with this much time left
    Running(Duration),
    /// The deadline passed and a timeout was applied
    TimedOut { lives: u32, state: RoundState },
}

/// The Hangman round state machine
pub struct RoundEngine<C: Clock = SystemClock> {
    config: EngineConfig,
    pool: WordPool,
    clock: C,
    rng: StdRng,
    round: Round,
}

impl RoundEngine<SystemClock> {
    /// Create an engine on the wall clock
    #[must_use]
    pub fn new(pool: WordPool, config: EngineConfig) -> Self {
        Self::with_clock(pool, config, SystemClock)
    }
}

impl<C: Clock> RoundEngine<C> {
    /// Create an engine reading time from `clock`
    ///
    /// A `max_lives` of zero is raised to one.
    pub fn with_clock(pool: WordPool, mut config: EngineConfig, clock: C) -> Self {
        if config.max_lives == 0 {
            warn!("max_lives must be at least 1, using 1");
            config.max_lives = 1;
        }

        let rng = config
            .seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        let round = Round::not_started(clock.now(), config.max_lives);

        Self {
            config,
            pool,
            clock,
            rng,
            round,
        }
    }

    /// Start a new round, abandoning any current one
    ///
    /// Returns the new round's id. Ticks scheduled against earlier ids become stale.
    pub fn start_round(&mut self) -> RoundId {
        let secret = self.pool.select_random(&mut self.rng).clone();
        let id = self.round.id.next();

        self.round = Round {
            id,
            state: RoundState::InProgress,
            secret: Some(secret),
            guessed: LetterSet::new(),
            other_guesses: FxHashSet::default(),
            lives: self.config.max_lives,
            deadline: self.clock.now() + self.config.round_time,
            frozen_remaining: None,
        };

        info!(
            round = %id,
            level = %self.pool.level(),
            letters = self.round.secret_text().len(),
            "round started"
        );
        id
    }

    /// Guess from raw input, which must be exactly one character
    pub fn guess(&mut self, input: &str) -> GuessOutcome {
        let mut chars = input.chars();
        match (chars.next(), chars.next()) {
            (Some(letter), None) => self.guess_char(letter),
            _ => {
                debug!(round = %self.round.id, input, "rejected guess input");
                GuessOutcome::Rejected
            }
        }
    }

    /// Guess a single letter
    ///
    /// Rejected, with no state change, unless a round is in progress and `letter` is
    /// an alphabetic character, with a single-character lowercase form, not guessed
    /// before. A correct guess restarts the timer; an incorrect one costs a life and
    /// leaves the timer running. Letters outside `a..=z` are always incorrect.
    pub fn guess_char(&mut self, letter: char) -> GuessOutcome {
        if self.round.state != RoundState::InProgress || !letter.is_alphabetic() {
            return GuessOutcome::Rejected;
        }

        let mut lowered = letter.to_lowercase();
        let (Some(letter), None) = (lowered.next(), lowered.next()) else {
            return GuessOutcome::Rejected;
        };

        let fresh = if letter.is_ascii_lowercase() {
            self.round.guessed.insert(letter)
        } else {
            self.round.other_guesses.insert(letter)
        };
        if !fresh {
            return GuessOutcome::Rejected;
        }

        let hit = self
            .round
            .secret
            .as_ref()
            .is_some_and(|secret| secret.has_letter(letter));

        let outcome = if hit {
            self.round.deadline = self.clock.now() + self.config.round_time;
            if self.is_revealed() {
                self.finish(RoundState::Won);
            }
            GuessOutcome::Correct
        } else {
            self.round.lives = self.round.lives.saturating_sub(1);
            if self.round.lives == 0 {
                self.finish(RoundState::Lost);
            }
            GuessOutcome::Incorrect
        };

        debug!(
            round = %self.round.id,
            %letter,
            ?outcome,
            lives = self.round.lives,
            "guess processed"
        );
        outcome
    }

    /// Apply a timeout to the current round
    ///
    /// Costs one life and restarts the timer. No effect unless a round is in progress.
    /// Returns the state after the transition.
    pub fn timeout(&mut self) -> RoundState {
        if self.round.state != RoundState::InProgress {
            return self.round.state;
        }

        self.round.lives = self.round.lives.saturating_sub(1);
        self.round.deadline = self.clock.now() + self.config.round_time;
        debug!(round = %self.round.id, lives = self.round.lives, "guess timed out");

        if self.round.lives == 0 {
            self.finish(RoundState::Lost);
            self.round.frozen_remaining = Some(Duration::ZERO);
        }
        self.round.state
    }

    /// Apply a timeout only if `round` is still the current round
    ///
    /// Returns `None` for a stale id.
    pub fn timeout_for(&mut self, round: RoundId) -> Option<RoundState> {
        (round == self.round.id).then(|| self.timeout())
    }

    /// Periodic tick for `round`
    ///
    /// The tick is the only source of timeouts: when the deadline has passed it
    /// applies one. Ticks for a superseded round are discarded.
    pub fn tick(&mut self, round: RoundId) -> Tick {
        if round != self.round.id {
            return Tick::Stale;
        }
        if self.round.state != RoundState::InProgress {
            return Tick::Idle;
        }

        let remaining = self.time_remaining();
        if remaining.is_zero() {
            let state = self.timeout();
            Tick::TimedOut {
                lives: self.round.lives,
                state,
            }
        } else {
            Tick::Running(remaining)
        }
    }

    /// Load the pool for `level` from the configured sources and use it from the
    /// next round on
    pub fn set_level(&mut self, level: Level) {
        let pool = WordPool::load(level, self.config.sources.for_level(level));
        self.replace_pool(pool);
    }

    /// Replace the word pool; the current round's secret is unaffected
    pub fn replace_pool(&mut self, pool: WordPool) {
        info!(level = %pool.level(), entries = pool.len(), "word pool replaced");
        self.pool = pool;
    }

    fn is_revealed(&self) -> bool {
        self.round
            .secret
            .as_ref()
            .is_some_and(|secret| secret.is_revealed_by(&self.round.guessed))
    }

    fn finish(&mut self, state: RoundState) {
        self.round.frozen_remaining = Some(self.live_remaining());
        self.round.state = state;
        info!(
            round = %self.round.id,
            outcome = %state,
            secret = self.round.secret_text(),
            lives = self.round.lives,
            "round finished"
        );
    }

    fn live_remaining(&self) -> Duration {
        self.round.deadline.saturating_duration_since(self.clock.now())
    }

    /// Time left before the next timeout
    ///
    /// Zero before the first round; stops counting once the round ends.
    #[must_use]
    pub fn time_remaining(&self) -> Duration {
        self.round
            .frozen_remaining
            .unwrap_or_else(|| self.live_remaining())
    }

    #[must_use]
    pub fn time_remaining_secs(&self) -> f64 {
        self.time_remaining().as_secs_f64()
    }

    /// Mask of the current secret; empty before the first round
    #[must_use]
    pub fn render_mask(&self) -> String {
        render_mask(self.round.secret_text(), &self.round.guessed)
    }

    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.round.state
    }

    #[must_use]
    pub const fn round_id(&self) -> RoundId {
        self.round.id
    }

    #[must_use]
    pub const fn lives(&self) -> u32 {
        self.round.lives
    }

    #[must_use]
    pub const fn max_lives(&self) -> u32 {
        self.config.max_lives
    }

    #[must_use]
    pub const fn round_time(&self) -> Duration {
        self.config.round_time
    }

    #[must_use]
    pub const fn level(&self) -> Level {
        self.pool.level()
    }

    #[must_use]
    pub const fn pool(&self) -> &WordPool {
        &self.pool
    }

    #[must_use]
    pub const fn guessed(&self) -> LetterSet {
        self.round.guessed
    }

    /// Whether `letter` (case-insensitive) was already guessed this round
    #[must_use]
    pub fn has_guessed(&self, letter: char) -> bool {
        let mut lowered = letter.to_lowercase();
        match (lowered.next(), lowered.next()) {
            (Some(c), None) if c.is_ascii_lowercase() => self.round.guessed.contains(c),
            (Some(c), None) => self.round.other_guesses.contains(&c),
            _ => false,
        }
    }

    /// Guessed letters: `a..=z` alphabetically, then any others in code point order
    #[must_use]
    pub fn guessed_letters(&self) -> Vec<char> {
        let mut letters = self.round.guessed.to_sorted_vec();
        let mut others: Vec<char> = self.round.other_guesses.iter().copied().collect();
        others.sort_unstable();
        letters.extend(others);
        letters
    }

    #[must_use]
    pub fn keyboard(&self) -> [KeyState; 26] {
        keyboard(&self.round.guessed)
    }

    /// The secret, once the round has ended
    #[must_use]
    pub fn revealed_secret(&self) -> Option<&str> {
        if self.round.state.is_finished() {
            Some(self.round.secret_text())
        } else {
            None
        }
    }

    /// Everything a presentation layer needs to draw the round
    #[must_use]
    pub fn snapshot(&self) -> RoundSnapshot {
        RoundSnapshot {
            round: self.round.id,
            level: self.level(),
            state: self.round.state,
            mask: self.render_mask(),
            lives: self.round.lives,
            max_lives: self.config.max_lives,
            time_remaining: self.time_remaining(),
            round_time: self.config.round_time,
            used_letters: self.guessed_letters(),
            keyboard: self.keyboard(),
            revealed: self.revealed_secret().map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::ManualClock;
    use proptest::prelude::*;

    fn engine_for(level: Level, secret: &str) -> (RoundEngine<ManualClock>, ManualClock) {
        engine_with_lives(level, secret, DEFAULT_MAX_LIVES)
    }

    fn engine_with_lives(
        level: Level,
        secret: &str,
        max_lives: u32,
    ) -> (RoundEngine<ManualClock>, ManualClock) {
        let clock = ManualClock::new();
        let config = EngineConfig {
            max_lives,
            seed: Some(42),
            ..EngineConfig::default()
        };
        let pool = WordPool::from_entries(level, [secret]);
        let engine = RoundEngine::with_clock(pool, config, clock.clone());
        (engine, clock)
    }

    #[test]
    fn not_started_engine() {
        let (engine, _) = engine_for(Level::Basic, "python");

        assert_eq!(engine.state(), RoundState::NotStarted);
        assert_eq!(engine.render_mask(), "");
        assert_eq!(engine.time_remaining(), Duration::ZERO);
        assert_eq!(engine.lives(), DEFAULT_MAX_LIVES);
        assert_eq!(engine.revealed_secret(), None);
    }

    #[test]
    fn start_round_initializes_state() {
        let (mut engine, _) = engine_for(Level::Basic, "python");
        let id = engine.start_round();

        assert_eq!(id, engine.round_id());
        assert_eq!(engine.state(), RoundState::InProgress);
        assert_eq!(engine.render_mask(), "_ _ _ _ _ _");
        assert_eq!(engine.lives(), 6);
        assert_eq!(engine.time_remaining(), DEFAULT_ROUND_TIME);
        assert!(engine.guessed_letters().is_empty());
    }

    #[test]
    fn python_scenario() {
        let (mut engine, _) = engine_for(Level::Basic, "python");
        engine.start_round();

        assert_eq!(engine.guess("p"), GuessOutcome::Correct);
        assert_eq!(engine.render_mask(), "p _ _ _ _ _");

        assert_eq!(engine.guess("z"), GuessOutcome::Incorrect);
        assert_eq!(engine.lives(), 5);

        assert_eq!(engine.guess("p"), GuessOutcome::Rejected);
        assert_eq!(engine.lives(), 5);

        for letter in ["y", "t", "h", "o"] {
            assert_eq!(engine.guess(letter), GuessOutcome::Correct);
            assert_eq!(engine.state(), RoundState::InProgress);
        }
        assert_eq!(engine.guess("n"), GuessOutcome::Correct);

        assert_eq!(engine.render_mask(), "p y t h o n");
        assert_eq!(engine.state(), RoundState::Won);
        assert_eq!(engine.revealed_secret(), Some("python"));
    }

    #[test]
    fn phrase_loss_scenario() {
        let (mut engine, _) = engine_for(Level::Intermediate, "unit testing");
        engine.start_round();

        for letter in ['u', 'n', 'i', 't'] {
            assert_eq!(engine.guess_char(letter), GuessOutcome::Correct);
        }
        for letter in ['a', 'b', 'c', 'd', 'f'] {
            assert_eq!(engine.guess_char(letter), GuessOutcome::Incorrect);
            assert_eq!(engine.state(), RoundState::InProgress);
        }
        assert_eq!(engine.guess_char('h'), GuessOutcome::Incorrect);

        assert_eq!(engine.lives(), 0);
        assert_eq!(engine.state(), RoundState::Lost);
        assert_eq!(engine.render_mask(), "u n i t   t _ _ t i n _");
        assert_eq!(engine.revealed_secret(), Some("unit testing"));
    }

    #[test]
    fn consecutive_timeouts_exhaust_lives() {
        let (mut engine, clock) = engine_for(Level::Basic, "python");
        let id = engine.start_round();

        for expected in (1..=5).rev() {
            clock.advance(DEFAULT_ROUND_TIME);
            assert_eq!(
                engine.tick(id),
                Tick::TimedOut {
                    lives: expected,
                    state: RoundState::InProgress
                }
            );
            assert_eq!(engine.time_remaining(), DEFAULT_ROUND_TIME);
        }

        clock.advance(DEFAULT_ROUND_TIME);
        assert_eq!(
            engine.tick(id),
            Tick::TimedOut {
                lives: 0,
                state: RoundState::Lost
            }
        );
        assert_eq!(engine.time_remaining(), Duration::ZERO);
        assert_eq!(engine.tick(id), Tick::Idle);
    }

    #[test]
    fn tick_before_deadline_reports_remaining() {
        let (mut engine, clock) = engine_for(Level::Basic, "python");
        let id = engine.start_round();

        clock.advance(Duration::from_secs(4));
        assert_eq!(engine.tick(id), Tick::Running(Duration::from_secs(11)));
        assert_eq!(engine.lives(), 6);
    }

    #[test]
    fn correct_guess_restarts_timer() {
        let (mut engine, clock) = engine_for(Level::Basic, "python");
        engine.start_round();

        clock.advance(Duration::from_secs(10));
        engine.guess("p");
        assert_eq!(engine.time_remaining(), DEFAULT_ROUND_TIME);
    }

    #[test]
    fn incorrect_guess_keeps_timer_running() {
        let (mut engine, clock) = engine_for(Level::Basic, "python");
        engine.start_round();

        clock.advance(Duration::from_secs(10));
        engine.guess("z");
        assert_eq!(engine.time_remaining(), Duration::from_secs(5));
    }

    #[test]
    fn stale_ticks_are_discarded() {
        let (mut engine, clock) = engine_for(Level::Basic, "python");
        let first = engine.start_round();
        let second = engine.start_round();
        assert!(second > first);

        clock.advance(Duration::from_secs(20));
        assert_eq!(engine.tick(first), Tick::Stale);
        assert_eq!(engine.timeout_for(first), None);
        assert_eq!(engine.lives(), 6);

        assert!(matches!(engine.tick(second), Tick::TimedOut { lives: 5, .. }));
        assert_eq!(engine.timeout_for(second), Some(RoundState::InProgress));
        assert_eq!(engine.lives(), 4);
    }

    #[test]
    fn invalid_input_is_rejected() {
        let (mut engine, _) = engine_for(Level::Basic, "python");
        engine.start_round();

        for input in ["", "py", "1", " ", "?", "éé", "\u{130}"] {
            assert_eq!(engine.guess(input), GuessOutcome::Rejected, "input {input:?}");
        }
        assert_eq!(engine.lives(), 6);
        assert!(engine.guessed_letters().is_empty());
    }

    #[test]
    fn non_ascii_letter_costs_a_life() {
        let (mut engine, clock) = engine_for(Level::Basic, "python");
        engine.start_round();
        clock.advance(Duration::from_secs(5));

        assert_eq!(engine.guess("é"), GuessOutcome::Incorrect);
        assert_eq!(engine.lives(), 5);
        assert_eq!(engine.time_remaining(), Duration::from_secs(10));
        assert!(engine.has_guessed('É'));

        assert_eq!(engine.guess("É"), GuessOutcome::Rejected);
        assert_eq!(engine.guess("é"), GuessOutcome::Rejected);
        assert_eq!(engine.lives(), 5);

        engine.guess("p");
        assert_eq!(engine.guessed_letters(), vec!['p', 'é']);
        assert_eq!(engine.render_mask(), "p _ _ _ _ _");
    }

    #[test]
    fn non_ascii_guesses_reset_with_the_round() {
        let (mut engine, _) = engine_for(Level::Basic, "python");
        engine.start_round();
        engine.guess("ß");
        assert!(engine.has_guessed('ß'));

        engine.start_round();
        assert!(!engine.has_guessed('ß'));
        assert_eq!(engine.guess("ß"), GuessOutcome::Incorrect);
    }

    #[test]
    fn repeat_guess_is_case_insensitive() {
        let (mut engine, _) = engine_for(Level::Basic, "python");
        engine.start_round();

        assert_eq!(engine.guess("Z"), GuessOutcome::Incorrect);
        assert_eq!(engine.guess("z"), GuessOutcome::Rejected);
        assert_eq!(engine.lives(), 5);
        assert_eq!(engine.guessed_letters(), vec!['z']);
    }

    #[test]
    fn guesses_outside_a_round_are_rejected() {
        let (mut engine, _) = engine_for(Level::Basic, "ab");
        assert_eq!(engine.guess("a"), GuessOutcome::Rejected);

        engine.start_round();
        engine.guess("a");
        engine.guess("b");
        assert_eq!(engine.state(), RoundState::Won);
        assert_eq!(engine.guess("c"), GuessOutcome::Rejected);
        assert_eq!(engine.lives(), 6);
    }

    #[test]
    fn completing_word_on_last_life_wins() {
        let (mut engine, _) = engine_with_lives(Level::Basic, "ab", 1);
        engine.start_round();

        assert_eq!(engine.guess("a"), GuessOutcome::Correct);
        assert_eq!(engine.guess("b"), GuessOutcome::Correct);
        assert_eq!(engine.state(), RoundState::Won);
        assert_eq!(engine.lives(), 1);
    }

    #[test]
    fn zero_max_lives_is_raised_to_one() {
        let (mut engine, _) = engine_with_lives(Level::Basic, "python", 0);
        assert_eq!(engine.max_lives(), 1);

        engine.start_round();
        assert_eq!(engine.guess("z"), GuessOutcome::Incorrect);
        assert_eq!(engine.state(), RoundState::Lost);
    }

    #[test]
    fn timeout_outside_a_round_is_a_no_op() {
        let (mut engine, _) = engine_for(Level::Basic, "python");
        assert_eq!(engine.timeout(), RoundState::NotStarted);
        assert_eq!(engine.lives(), 6);
        assert_eq!(engine.tick(engine.round_id()), Tick::Idle);
    }

    #[test]
    fn timer_stops_when_round_ends() {
        let (mut engine, clock) = engine_for(Level::Basic, "ab");
        engine.start_round();
        clock.advance(Duration::from_secs(3));
        engine.guess("a");
        engine.guess("b");

        let at_win = engine.time_remaining();
        clock.advance(Duration::from_secs(30));
        assert_eq!(engine.time_remaining(), at_win);
    }

    #[test]
    fn new_round_after_loss_resets() {
        let (mut engine, _) = engine_with_lives(Level::Basic, "python", 1);
        engine.start_round();
        engine.guess("z");
        assert_eq!(engine.state(), RoundState::Lost);

        engine.start_round();
        assert_eq!(engine.state(), RoundState::InProgress);
        assert_eq!(engine.lives(), 1);
        assert!(engine.guessed_letters().is_empty());
        assert_eq!(engine.revealed_secret(), None);
    }

    #[test]
    fn set_level_applies_from_next_round() {
        let clock = ManualClock::new();
        let config = EngineConfig {
            seed: Some(3),
            ..EngineConfig::default()
        };
        let pool = WordPool::from_entries(Level::Basic, ["python"]);
        let mut engine = RoundEngine::with_clock(pool, config, clock);
        engine.start_round();

        engine.set_level(Level::Intermediate);
        assert_eq!(engine.level(), Level::Intermediate);
        assert_eq!(engine.render_mask(), "_ _ _ _ _ _");

        engine.start_round();
        let mask = engine.render_mask();
        assert!(mask.contains("   "), "expected a phrase mask, got {mask:?}");
    }

    #[test]
    fn snapshot_reflects_round() {
        let (mut engine, _) = engine_for(Level::Basic, "python");
        engine.start_round();
        engine.guess("z");
        engine.guess("p");

        let snapshot = engine.snapshot();
        assert_eq!(snapshot.mask, "p _ _ _ _ _");
        assert_eq!(snapshot.lives, 5);
        assert_eq!(snapshot.used_letters, vec!['p', 'z']);
        assert!(!snapshot.keyboard[('p' as u8 - b'a') as usize].enabled);
        assert!(snapshot.keyboard[0].enabled);
        assert_eq!(snapshot.revealed, None);
        assert_eq!(snapshot.level, Level::Basic);
    }

    #[derive(Debug, Clone)]
    enum Action {
        Guess(char),
        Timeout,
    }

    fn action_strategy() -> impl Strategy<Value = Action> {
        prop_oneof![
            4 => proptest::char::range('a', 'z').prop_map(Action::Guess),
            1 => Just(Action::Timeout),
        ]
    }

    proptest! {
        #[test]
        fn round_invariants_hold(actions in proptest::collection::vec(action_strategy(), 0..40)) {
            let (mut engine, _) = engine_for(Level::Intermediate, "unit testing");
            engine.start_round();

            let mut lives = engine.lives();
            let mut guessed = engine.guessed();

            for action in actions {
                let before = engine.state();
                let outcome = match action {
                    Action::Guess(c) => Some(engine.guess_char(c)),
                    Action::Timeout => {
                        engine.timeout();
                        None
                    }
                };

                if before != RoundState::InProgress {
                    prop_assert_eq!(engine.lives(), lives);
                    prop_assert_eq!(engine.guessed(), guessed);
                    if let Some(outcome) = outcome {
                        prop_assert_eq!(outcome, GuessOutcome::Rejected);
                    }
                }

                prop_assert!(engine.lives() <= lives);
                prop_assert!(guessed.iter().all(|c| engine.guessed().contains(c)));
                prop_assert_eq!(engine.lives() == 0, engine.state() == RoundState::Lost);

                let revealed = "unit testing"
                    .chars()
                    .filter(|&c| c != ' ')
                    .all(|c| engine.guessed().contains(c));
                prop_assert_eq!(revealed, engine.state() == RoundState::Won);

                lives = engine.lives();
                guessed = engine.guessed();
            }
        }

        #[test]
        fn repeated_guess_changes_nothing(letter in proptest::char::range('a', 'z')) {
            let (mut engine, _) = engine_for(Level::Basic, "python");
            engine.start_round();

            let first = engine.guess_char(letter);
            prop_assert_ne!(first, GuessOutcome::Rejected);

            let lives = engine.lives();
            let guessed = engine.guessed();
            prop_assert_eq!(engine.guess_char(letter), GuessOutcome::Rejected);
            prop_assert_eq!(engine.lives(), lives);
            prop_assert_eq!(engine.guessed(), guessed);
        }
    }
}
