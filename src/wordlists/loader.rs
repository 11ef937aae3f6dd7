//! Word list loading utilities
//!
//! Reads raw entries from files or embedded constants and screens them into valid
//! secrets for a level.

use super::DICTIONARY;
use crate::core::{Level, Secret};
use rustc_hash::FxHashSet;
use std::borrow::Borrow;
use std::fs;
use std::hash::Hash;
use std::io;
use std::path::Path;
use std::sync::LazyLock;

static EMBEDDED_DICTIONARY: LazyLock<FxHashSet<&'static str>> =
    LazyLock::new(|| DICTIONARY.iter().copied().collect());

/// The dictionary intermediate phrases are validated against
#[must_use]
pub fn embedded_dictionary() -> &'static FxHashSet<&'static str> {
    &EMBEDDED_DICTIONARY
}

/// Load raw entries from a file
///
/// Lines are normalized with [`normalize_entry`]; blank lines and `#` comments are
/// skipped. No level validation happens here.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use hangman::wordlists::loader::load_from_file;
///
/// let entries = load_from_file("words.txt").unwrap();
/// println!("Loaded {} entries", entries.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;

    let entries = content
        .lines()
        .filter(|line| !line.trim_start().starts_with('#'))
        .filter_map(normalize_entry)
        .collect();

    Ok(entries)
}

/// Trim, lowercase, and collapse interior whitespace to single spaces
///
/// Returns `None` for blank input.
///
/// # Examples
/// ```
/// use hangman::wordlists::loader::normalize_entry;
///
/// assert_eq!(normalize_entry("  Unit \t Testing "), Some("unit testing".to_string()));
/// assert_eq!(normalize_entry("   "), None);
/// ```
#[must_use]
pub fn normalize_entry(line: &str) -> Option<String> {
    let joined = line
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ");

    if joined.is_empty() { None } else { Some(joined) }
}

/// Check that every whitespace-separated token of `phrase` is in `dictionary`
///
/// Tokens are compared in lowercase; the dictionary is expected to be lowercase.
/// A phrase with no tokens is not valid.
///
/// # Examples
/// ```
/// use hangman::wordlists::loader::{embedded_dictionary, validate_phrase};
///
/// let dictionary = embedded_dictionary();
/// assert!(validate_phrase("Unit Testing", dictionary));
/// assert!(!validate_phrase("unit flurbing", dictionary));
/// ```
#[must_use]
pub fn validate_phrase<T>(phrase: &str, dictionary: &FxHashSet<T>) -> bool
where
    T: Borrow<str> + Eq + Hash,
{
    let mut tokens = phrase.split_whitespace().peekable();
    if tokens.peek().is_none() {
        return false;
    }

    tokens.all(|token| dictionary.contains(token.to_lowercase().as_str()))
}

/// Outcome of screening raw entries for a level
#[derive(Debug, Clone, Default)]
pub struct Screened {
    /// Entries that are valid secrets for the level, in source order
    pub accepted: Vec<Secret>,
    /// Normalized entries that were dropped
    pub rejected: Vec<String>,
}

/// Screen raw entries into secrets valid for `level`
///
/// Basic entries must be a single word; intermediate entries must have at least two
/// words and pass [`validate_phrase`] against the embedded dictionary. Entries failing either rule,
/// or failing [`Secret::new`], are rejected. Duplicates are kept once.
pub fn screen_entries<I, S>(level: Level, raw: I) -> Screened
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let dictionary = embedded_dictionary();
    let mut seen: FxHashSet<String> = FxHashSet::default();
    let mut screened = Screened::default();

    for entry in raw {
        let Some(normalized) = normalize_entry(entry.as_ref()) else {
            continue;
        };

        let accepted = match Secret::new(normalized.as_str()) {
            Ok(secret) => match level {
                Level::Basic => (secret.word_count() == 1).then_some(secret),
                Level::Intermediate => {
                    let is_phrase = secret.word_count() >= 2;
                    (is_phrase && validate_phrase(secret.text(), dictionary)).then_some(secret)
                }
            },
            Err(_) => None,
        };

        match accepted {
            Some(secret) => {
                if seen.insert(secret.text().to_string()) {
                    screened.accepted.push(secret);
                }
            }
            None => screened.rejected.push(normalized),
        }
    }

    screened
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_list(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!(
            "hangman-loader-{}-{name}.txt",
            std::process::id()
        ));
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn load_from_file_normalizes_lines() {
        let path = temp_list("normalize", "Python\n\n  # comment\n  Unit   Testing \n");
        let entries = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(entries, vec!["python", "unit testing"]);
    }

    #[test]
    fn load_from_missing_file_errors() {
        let path = std::env::temp_dir().join("hangman-loader-does-not-exist.txt");
        assert!(load_from_file(path).is_err());
    }

    #[test]
    fn validate_phrase_accepts_dictionary_tokens() {
        let dictionary: FxHashSet<String> =
            ["unit", "testing"].iter().map(ToString::to_string).collect();

        assert!(validate_phrase("unit testing", &dictionary));
        assert!(validate_phrase("UNIT testing", &dictionary));
        assert!(validate_phrase("testing", &dictionary));
        assert!(!validate_phrase("unit tests", &dictionary));
        assert!(!validate_phrase("", &dictionary));
        assert!(!validate_phrase("   ", &dictionary));
    }

    #[test]
    fn screen_basic_rejects_phrases_and_symbols() {
        let screened = screen_entries(Level::Basic, ["python", "unit testing", "c++", "Rust"]);

        let accepted: Vec<&str> = screened.accepted.iter().map(Secret::text).collect();
        assert_eq!(accepted, vec!["python", "rust"]);
        assert_eq!(screened.rejected, vec!["unit testing", "c++"]);
    }

    #[test]
    fn screen_intermediate_uses_dictionary() {
        let screened = screen_entries(
            Level::Intermediate,
            ["unit testing", "unit flurbing", "code review", "r2d2 testing"],
        );

        let accepted: Vec<&str> = screened.accepted.iter().map(Secret::text).collect();
        assert_eq!(accepted, vec!["unit testing", "code review"]);
        assert_eq!(screened.rejected.len(), 2);
    }

    #[test]
    fn screen_intermediate_requires_several_words() {
        let screened = screen_entries(Level::Intermediate, ["testing", "unit testing"]);

        let accepted: Vec<&str> = screened.accepted.iter().map(Secret::text).collect();
        assert_eq!(accepted, vec!["unit testing"]);
        assert_eq!(screened.rejected, vec!["testing"]);
    }

    #[test]
    fn screen_drops_duplicates() {
        let screened = screen_entries(Level::Basic, ["python", "PYTHON", " python "]);
        assert_eq!(screened.accepted.len(), 1);
        assert!(screened.rejected.is_empty());
    }

    #[test]
    fn screen_skips_blank_entries() {
        let screened = screen_entries(Level::Basic, ["", "   ", "rust"]);
        assert_eq!(screened.accepted.len(), 1);
        assert!(screened.rejected.is_empty());
    }
}
