//! Set of guessed letters
//!
//! A 26-bit set over `a..=z`. Iteration is always in alphabetical order, which is
//! the order the used-letters list is displayed in.

use std::fmt;

/// Set of lowercase ASCII letters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LetterSet(u32);

impl LetterSet {
    /// Create an empty set
    #[must_use]
    pub const fn new() -> Self {
        Self(0)
    }

    const fn bit(letter: char) -> Option<u32> {
        let lower = letter.to_ascii_lowercase();
        if lower.is_ascii_lowercase() {
            Some(1 << (lower as u32 - 'a' as u32))
        } else {
            None
        }
    }

    /// Insert a letter (case-insensitive)
    ///
    /// Returns `true` if the letter was newly added. Non-letters are never
    /// inserted and return `false`.
    pub fn insert(&mut self, letter: char) -> bool {
        match Self::bit(letter) {
            Some(bit) if self.0 & bit == 0 => {
                self.0 |= bit;
                true
            }
            _ => false,
        }
    }

    /// Check membership (case-insensitive)
    #[inline]
    #[must_use]
    pub const fn contains(&self, letter: char) -> bool {
        match Self::bit(letter) {
            Some(bit) => self.0 & bit != 0,
            None => false,
        }
    }

    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn clear(&mut self) {
        self.0 = 0;
    }

    /// Letters in alphabetical order
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        ('a'..='z').filter(|&c| self.contains(c))
    }

    /// Letters in alphabetical order, collected
    #[must_use]
    pub fn to_sorted_vec(&self) -> Vec<char> {
        self.iter().collect()
    }
}

impl FromIterator<char> for LetterSet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut set = Self::new();
        for c in iter {
            set.insert(c);
        }
        set
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.iter() {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}
