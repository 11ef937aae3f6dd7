//! Logging initialization
//!
//! Structured logging via `tracing`, written to stderr or a log file. The
//! `HANGMAN_LOG` environment variable overrides the verbosity flag.

use anyhow::{Context, Result};
use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a `tracing` filter directive
pub const LOG_ENV: &str = "HANGMAN_LOG";

/// Where log lines go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget<'a> {
    Stderr,
    File(&'a Path),
    /// Logging off, e.g. while the TUI owns the terminal
    Disabled,
}

/// Maps a verbosity level to a tracing directive string
///
/// - 0 → `"warn"`
/// - 1 → `"info"`
/// - 2 → `"debug"`
/// - 3+ → `"trace"`
#[must_use]
pub const fn verbosity_to_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber
///
/// Uses `try_init()`, so calling this more than once is harmless.
///
/// # Errors
///
/// Returns an error if the log file cannot be created.
pub fn init_logging(verbosity: u8, target: LogTarget<'_>) -> Result<()> {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(verbosity_to_directive(verbosity)));

    match target {
        LogTarget::Stderr => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(verbosity >= 2)
                .with_writer(std::io::stderr)
                .try_init();
        }
        LogTarget::File(path) => {
            let file = File::create(path)
                .with_context(|| format!("cannot create log file {}", path.display()))?;
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init();
        }
        LogTarget::Disabled => {}
    }

    Ok(())
}
