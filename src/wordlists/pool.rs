//! Word pool for a difficulty level
//!
//! A pool is built once per level selection and replaced, never mutated, when the
//! level changes. It is never empty: sources that yield nothing fall back to the
//! hardcoded minimal list for the level.

use super::loader::{load_from_file, screen_entries};
use super::{BASIC_WORDS, FALLBACK_PHRASES, FALLBACK_WORDS, INTERMEDIATE_PHRASES};
use crate::core::{Level, Secret};
use rand::Rng;
use rand::seq::IndexedRandom;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Where a level's entries come from
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum WordSource {
    /// Lists compiled into the binary
    #[default]
    Embedded,
    /// A text file with one entry per line
    File(PathBuf),
}

impl WordSource {
    /// `File` when a path is given, `Embedded` otherwise
    #[must_use]
    pub fn from_path(path: Option<PathBuf>) -> Self {
        path.map_or(Self::Embedded, Self::File)
    }
}

/// Configured source for each level
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordSources {
    pub basic: WordSource,
    pub intermediate: WordSource,
}

impl WordSources {
    #[must_use]
    pub const fn for_level(&self, level: Level) -> &WordSource {
        match level {
            Level::Basic => &self.basic,
            Level::Intermediate => &self.intermediate,
        }
    }
}

/// Candidate secrets for one level
#[derive(Debug, Clone)]
pub struct WordPool {
    level: Level,
    entries: Vec<Secret>,
}

impl WordPool {
    /// Load the pool for `level` from `source`
    ///
    /// Never fails: an unreadable file or a source with no valid entries yields the
    /// hardcoded fallback list for the level.
    #[must_use]
    pub fn load(level: Level, source: &WordSource) -> Self {
        match source {
            WordSource::Embedded => Self::from_entries(level, embedded_entries(level)),
            WordSource::File(path) => match load_from_file(path) {
                Ok(entries) => Self::from_entries(level, entries),
                Err(err) => {
                    warn!(
                        %level,
                        path = %path.display(),
                        error = %err,
                        "word source unavailable, using built-in list"
                    );
                    Self::fallback(level)
                }
            },
        }
    }

    /// Build a pool from explicit entries
    ///
    /// Entries are screened for the level; invalid ones are dropped silently. If
    /// nothing survives, the fallback list is used instead.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::Level;
    /// use hangman::wordlists::WordPool;
    ///
    /// let pool = WordPool::from_entries(Level::Basic, ["python", "two words"]);
    /// assert_eq!(pool.len(), 1);
    /// ```
    pub fn from_entries<I, S>(level: Level, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let screened = screen_entries(level, entries);

        if !screened.rejected.is_empty() {
            debug!(
                %level,
                rejected = screened.rejected.len(),
                "dropped invalid word list entries"
            );
        }

        if screened.accepted.is_empty() {
            warn!(%level, "word source has no valid entries, using built-in list");
            return Self::fallback(level);
        }

        debug!(%level, entries = screened.accepted.len(), "word pool loaded");
        Self {
            level,
            entries: screened.accepted,
        }
    }

    /// The hardcoded minimal pool for `level`
    #[must_use]
    pub fn fallback(level: Level) -> Self {
        let raw = match level {
            Level::Basic => FALLBACK_WORDS,
            Level::Intermediate => FALLBACK_PHRASES,
        };
        let entries: Vec<Secret> = raw.iter().filter_map(|&s| Secret::new(s).ok()).collect();
        debug_assert!(!entries.is_empty(), "fallback list for {level} is empty");

        Self { level, entries }
    }

    #[must_use]
    pub const fn level(&self) -> Level {
        self.level
    }

    #[must_use]
    pub fn entries(&self) -> &[Secret] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false` for a constructed pool
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Pick one secret uniformly at random
    ///
    /// # Panics
    /// Panics if the pool is empty, which construction rules out.
    pub fn select_random<R: Rng + ?Sized>(&self, rng: &mut R) -> &Secret {
        self.entries
            .choose(rng)
            .expect("word pool is never empty after construction")
    }
}

fn embedded_entries(level: Level) -> &'static [&'static str] {
    match level {
        Level::Basic => BASIC_WORDS,
        Level::Intermediate => INTERMEDIATE_PHRASES,
    }
}
