//! Batch simulation
//!
//! Plays many rounds with an automatic guesser to measure how hard a word pool is.

use crate::autoplay::{Guesser, GuesserKind, GuesserType};
use crate::core::Level;
use crate::engine::{EngineConfig, ManualClock, RoundEngine, RoundState};
use crate::wordlists::WordPool;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};
use tracing::info;

/// Settings for a simulation run
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    pub rounds: usize,
    pub guesser: GuesserKind,
    pub max_lives: u32,
    /// Base seed; round `i` uses `seed + i`
    pub seed: u64,
}

/// Outcome of one simulated round
#[derive(Debug, Clone)]
pub struct RoundRecord {
    pub secret: String,
    pub won: bool,
    pub lives_left: u32,
    pub wrong_guesses: u32,
}

/// Aggregate statistics of a simulation run
#[derive(Debug)]
pub struct SimulationResult {
    pub level: Level,
    pub guesser: GuesserKind,
    pub rounds: usize,
    pub wins: usize,
    pub win_rate: f64,
    pub average_wrong_guesses: f64,
    /// Lives left at the end of each round, `0` for every loss
    pub lives_distribution: FxHashMap<u32, usize>,
    /// Secrets lost most often, worst first
    pub hardest: Vec<(String, usize)>,
    pub duration: Duration,
    pub rounds_per_second: f64,
}

/// Play one round to completion without advancing the clock
///
/// Timeouts never fire because the clock stands still.
#[must_use]
pub fn play_round(
    pool: &WordPool,
    guesser: GuesserKind,
    max_lives: u32,
    seed: u64,
) -> RoundRecord {
    let config = EngineConfig {
        max_lives,
        seed: Some(seed),
        ..EngineConfig::default()
    };
    let mut engine = RoundEngine::with_clock(pool.clone(), config, ManualClock::new());
    let mut guesser = GuesserType::new(guesser, seed);

    engine.start_round();
    while engine.state() == RoundState::InProgress {
        let Some(letter) = guesser.next_letter(&engine.snapshot()) else {
            break;
        };
        engine.guess_char(letter);
    }

    RoundRecord {
        secret: engine.revealed_secret().unwrap_or_default().to_string(),
        won: engine.state() == RoundState::Won,
        lives_left: engine.lives(),
        wrong_guesses: engine.max_lives() - engine.lives(),
    }
}

/// Simulate `config.rounds` rounds in parallel
pub fn run_simulation(
    pool: &WordPool,
    config: &SimulationConfig,
    show_progress: bool,
) -> SimulationResult {
    let pb = if show_progress {
        ProgressBar::new(config.rounds as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );
    pb.set_message(format!("{} / {}", pool.level(), config.guesser));

    let start = Instant::now();

    let records: Vec<RoundRecord> = (0..config.rounds)
        .into_par_iter()
        .map(|i| {
            let seed = config.seed.wrapping_add(i as u64);
            let record = play_round(pool, config.guesser, config.max_lives, seed);
            pb.inc(1);
            record
        })
        .collect();

    pb.finish_and_clear();
    let duration = start.elapsed();

    let result = summarize(pool.level(), config.guesser, &records, duration);
    info!(
        level = %result.level,
        rounds = result.rounds,
        wins = result.wins,
        "simulation finished"
    );
    result
}

fn summarize(
    level: Level,
    guesser: GuesserKind,
    records: &[RoundRecord],
    duration: Duration,
) -> SimulationResult {
    let rounds = records.len();
    let wins = records.iter().filter(|r| r.won).count();
    let wrong_total: u64 = records.iter().map(|r| u64::from(r.wrong_guesses)).sum();

    let mut lives_distribution: FxHashMap<u32, usize> = FxHashMap::default();
    let mut losses: FxHashMap<&str, usize> = FxHashMap::default();
    for record in records {
        *lives_distribution.entry(record.lives_left).or_insert(0) += 1;
        if !record.won {
            *losses.entry(record.secret.as_str()).or_insert(0) += 1;
        }
    }

    let mut hardest: Vec<(String, usize)> = losses
        .into_iter()
        .map(|(secret, count)| (secret.to_string(), count))
        .collect();
    hardest.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    hardest.truncate(5);

    let per_round = |total: f64| if rounds == 0 { 0.0 } else { total / rounds as f64 };

    SimulationResult {
        level,
        guesser,
        rounds,
        wins,
        win_rate: per_round(wins as f64),
        average_wrong_guesses: per_round(wrong_total as f64),
        lives_distribution,
        hardest,
        duration,
        rounds_per_second: if duration.is_zero() {
            0.0
        } else {
            rounds as f64 / duration.as_secs_f64()
        },
    }
}
