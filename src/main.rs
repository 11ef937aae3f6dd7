//! Hangman - CLI
//!
//! Timed Hangman with TUI and line modes, plus batch simulation and word list checks.

use anyhow::Result;
use clap::{Parser, Subcommand};
use hangman::{
    autoplay::GuesserKind,
    commands::{SimulationConfig, check_word_list, run_simple, run_simulation},
    core::Level,
    engine::{DEFAULT_MAX_LIVES, EngineConfig, RoundEngine},
    logging::{LogTarget, init_logging},
    output::{print_check_report, print_simulation_result},
    wordlists::{WordPool, WordSource, WordSources},
};
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

/// Seed used by `simulate` when `--seed` is not given, so runs are repeatable
const DEFAULT_SIMULATION_SEED: u64 = 42;

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Timed Hangman: guess the word (or phrase) before the gallows fills up",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Difficulty: basic (single words) or intermediate (phrases)
    #[arg(short, long, global = true, env = "HANGMAN_LEVEL", default_value = "basic")]
    level: Level,

    /// Word list file for the basic level (one word per line)
    #[arg(long, global = true, env = "HANGMAN_WORDS")]
    words: Option<PathBuf>,

    /// Phrase list file for the intermediate level (one phrase per line)
    #[arg(long, global = true, env = "HANGMAN_PHRASES")]
    phrases: Option<PathBuf>,

    /// Lives per round
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_LIVES,
          value_parser = clap::value_parser!(u32).range(1..=26))]
    lives: u32,

    /// Seconds allowed for each guess
    #[arg(long, global = true, default_value_t = 15,
          value_parser = clap::value_parser!(u64).range(1..=3600))]
    round_time: u64,

    /// RNG seed for repeatable secret selection
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based game without TUI)
    Simple,

    /// Play many rounds automatically and report win statistics
    Simulate {
        /// Number of rounds per level
        #[arg(short = 'n', long, default_value = "200")]
        rounds: usize,

        /// Automatic guesser to play with
        #[arg(short, long, value_enum, default_value_t = GuesserKind::Frequency)]
        guesser: GuesserKind,

        /// Simulate both levels instead of only --level
        #[arg(long)]
        all_levels: bool,
    },

    /// Validate a custom word or phrase list
    Check {
        /// File with one entry per line
        path: PathBuf,
    },
}

impl Cli {
    fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            max_lives: self.lives,
            round_time: Duration::from_secs(self.round_time),
            sources: WordSources {
                basic: WordSource::from_path(self.words.clone()),
                intermediate: WordSource::from_path(self.phrases.clone()),
            },
            seed: self.seed,
        }
    }
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play);

    // The TUI owns the terminal, so it only logs when given a file
    let target = match (&command, cli.log_file.as_deref()) {
        (_, Some(path)) => LogTarget::File(path),
        (Commands::Play, None) => LogTarget::Disabled,
        (_, None) => LogTarget::Stderr,
    };
    init_logging(cli.verbose, target)?;

    match command {
        Commands::Play => run_play_command(&cli),
        Commands::Simple => run_simple_command(&cli),
        Commands::Simulate {
            rounds,
            guesser,
            all_levels,
        } => {
            run_simulate_command(&cli, rounds, guesser, all_levels);
            Ok(())
        }
        Commands::Check { path } => {
            let report = check_word_list(&path, cli.level)?;
            print_check_report(&report);
            Ok(())
        }
    }
}

fn build_engine(cli: &Cli) -> RoundEngine {
    let config = cli.engine_config();
    let pool = WordPool::load(cli.level, config.sources.for_level(cli.level));
    info!(level = %cli.level, entries = pool.len(), "starting game");
    RoundEngine::new(pool, config)
}

fn run_play_command(cli: &Cli) -> Result<()> {
    use hangman::interactive::{App, run_tui};

    let app = App::new(build_engine(cli));
    run_tui(app)
}

fn run_simple_command(cli: &Cli) -> Result<()> {
    let mut engine = build_engine(cli);
    run_simple(&mut engine)
}

fn run_simulate_command(cli: &Cli, rounds: usize, guesser: GuesserKind, all_levels: bool) {
    let levels: &[Level] = if all_levels {
        &Level::ALL
    } else {
        std::slice::from_ref(&cli.level)
    };
    let sources = cli.engine_config().sources;

    for &level in levels {
        println!("Simulating {rounds} {level} rounds with the {guesser} guesser...");

        let pool = WordPool::load(level, sources.for_level(level));
        let config = SimulationConfig {
            rounds,
            guesser,
            max_lives: cli.lives,
            seed: cli.seed.unwrap_or(DEFAULT_SIMULATION_SEED),
        };
        let result = run_simulation(&pool, &config, true);
        print_simulation_result(&result);
    }
}
