//! Secret word or phrase
//!
//! A Secret is a lowercase word, or a phrase of lowercase words separated by
//! single spaces. It is fixed for the lifetime of a round.

use super::letters::LetterSet;
use std::fmt;

/// A validated secret with its set of distinct letters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Secret {
    text: String,
    letters: LetterSet,
}

/// Error type for invalid secrets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SecretError {
    Empty,
    NonAscii,
    InvalidCharacter(char),
    InvalidSpacing,
}

impl fmt::Display for SecretError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Secret must contain at least one letter"),
            Self::NonAscii => write!(f, "Secret must contain only ASCII letters and spaces"),
            Self::InvalidCharacter(c) => write!(f, "Secret contains invalid character {c:?}"),
            Self::InvalidSpacing => write!(
                f,
                "Secret words must be separated by single spaces with none at either end"
            ),
        }
    }
}

impl std::error::Error for SecretError {}

impl Secret {
    /// Create a new Secret from a string
    ///
    /// The text is lowercased before validation.
    ///
    /// # Errors
    /// Returns `SecretError` if:
    /// - The text is empty
    /// - Contains non-ASCII characters
    /// - Contains anything other than letters and spaces
    /// - Has leading, trailing, or repeated spaces
    ///
    /// # Examples
    /// ```
    /// use hangman::core::Secret;
    ///
    /// let secret = Secret::new("Unit Testing").unwrap();
    /// assert_eq!(secret.text(), "unit testing");
    ///
    /// assert!(Secret::new("unit  testing").is_err());
    /// assert!(Secret::new("r2d2").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, SecretError> {
        let text: String = text.into().to_lowercase();

        if text.is_empty() {
            return Err(SecretError::Empty);
        }

        if !text.is_ascii() {
            return Err(SecretError::NonAscii);
        }

        if let Some(bad) = text.chars().find(|&c| c != ' ' && !c.is_ascii_lowercase()) {
            return Err(SecretError::InvalidCharacter(bad));
        }

        if text.starts_with(' ') || text.ends_with(' ') || text.contains("  ") {
            return Err(SecretError::InvalidSpacing);
        }

        let letters = text.chars().collect();

        Ok(Self { text, letters })
    }

    /// Get the secret as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Check whether a letter occurs anywhere in the secret (case-insensitive)
    ///
    /// Spaces are never targets, so `has_letter(' ')` is always `false`.
    #[inline]
    #[must_use]
    pub const fn has_letter(&self, letter: char) -> bool {
        self.letters.contains(letter)
    }

    /// Distinct letters of the secret
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> LetterSet {
        self.letters
    }

    /// Number of space-separated words
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.text.split(' ').count()
    }

    /// Whether every letter of the secret is in `guessed`
    #[must_use]
    pub fn is_revealed_by(&self, guessed: &LetterSet) -> bool {
        self.letters.iter().all(|c| guessed.contains(c))
    }
}

impl fmt::Display for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
