//! Difficulty levels

use std::fmt;
use std::str::FromStr;

/// Difficulty level, selecting which pool secrets are drawn from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Level {
    /// Single words
    #[default]
    Basic,
    /// Multi-word phrases built from a fixed dictionary
    Intermediate,
}

impl Level {
    /// All levels, in menu order
    pub const ALL: [Self; 2] = [Self::Basic, Self::Intermediate];

    /// Lowercase name as accepted on the command line
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Intermediate => "intermediate",
        }
    }

    /// The other level
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Basic => Self::Intermediate,
            Self::Intermediate => Self::Basic,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Basic => write!(f, "Basic"),
            Self::Intermediate => write!(f, "Intermediate"),
        }
    }
}

/// Error returned when a level name is not recognised
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError(String);

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown level '{}', expected 'basic' or 'intermediate'",
            self.0
        )
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "basic" | "b" => Ok(Self::Basic),
            "intermediate" | "i" => Ok(Self::Intermediate),
            other => Err(ParseLevelError(other.to_string())),
        }
    }
}
