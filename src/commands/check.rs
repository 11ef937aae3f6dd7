//! Word list check command
//!
//! Reports which entries of a custom word list would be accepted for a level.

use crate::core::Level;
use crate::wordlists::loader::{load_from_file, screen_entries};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Result of checking a word list
#[derive(Debug, Clone)]
pub struct CheckReport {
    pub path: PathBuf,
    pub level: Level,
    pub accepted: usize,
    /// Normalized entries that would be dropped, in file order
    pub rejected: Vec<String>,
}

impl CheckReport {
    /// Whether the list would be used as-is rather than replaced by the fallback
    #[must_use]
    pub const fn is_usable(&self) -> bool {
        self.accepted > 0
    }
}

/// Screen the file at `path` for `level`
///
/// # Errors
///
/// Returns an error if the file cannot be read. Unlike loading a pool during play,
/// an unreadable list is reported rather than replaced.
pub fn check_word_list(path: &Path, level: Level) -> Result<CheckReport> {
    let entries = load_from_file(path)
        .with_context(|| format!("cannot read word list {}", path.display()))?;
    let screened = screen_entries(level, entries);

    Ok(CheckReport {
        path: path.to_path_buf(),
        level,
        accepted: screened.accepted.len(),
        rejected: screened.rejected,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn check_reports_rejected_entries() {
        let path = std::env::temp_dir().join(format!("hangman-check-{}.txt", std::process::id()));
        fs::write(&path, "python\nunit testing\nc3po\n").unwrap();

        let report = check_word_list(&path, Level::Basic).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(report.accepted, 1);
        assert_eq!(report.rejected, vec!["unit testing", "c3po"]);
        assert!(report.is_usable());
    }

    #[test]
    fn check_missing_file_errors() {
        let err = check_word_list(Path::new("/no/such/list.txt"), Level::Basic).unwrap_err();
        assert!(err.to_string().contains("/no/such/list.txt"));
    }
}
