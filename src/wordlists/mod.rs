//! Word lists for Hangman
//!
//! Provides embedded word lists compiled into the binary, hardcoded fallbacks, and
//! the [`WordPool`] that rounds draw their secrets from.

mod embedded;
pub mod loader;
mod pool;

pub use embedded::{
    BASIC_WORDS, BASIC_WORDS_COUNT, DICTIONARY, DICTIONARY_COUNT, INTERMEDIATE_PHRASES,
    INTERMEDIATE_PHRASES_COUNT,
};
pub use pool::{WordPool, WordSource, WordSources};

/// Minimal basic pool used when no other source yields a word
pub const FALLBACK_WORDS: &[&str] = &["python", "hangman", "testing", "programming", "computer"];

/// Minimal intermediate pool used when no other source yields a phrase
pub const FALLBACK_PHRASES: &[&str] = &[
    "test driven development",
    "unit testing",
    "python programming",
    "software engineering",
];
