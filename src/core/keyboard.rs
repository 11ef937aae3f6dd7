//! On-screen keyboard state
//!
//! Key enablement is derived from the guessed letters on every render rather
//! than stored, so it can never drift from the round state.

use super::letters::LetterSet;

/// QWERTY layout used by the on-screen keyboard
pub const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// A single on-screen key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyState {
    pub letter: char,
    pub enabled: bool,
}

/// Map every letter `a..=z` to whether it can still be guessed
#[must_use]
pub fn keyboard(guessed: &LetterSet) -> [KeyState; 26] {
    let mut keys = [KeyState {
        letter: 'a',
        enabled: true,
    }; 26];

    for (key, letter) in keys.iter_mut().zip('a'..='z') {
        *key = KeyState {
            letter,
            enabled: !guessed.contains(letter),
        };
    }

    keys
}
