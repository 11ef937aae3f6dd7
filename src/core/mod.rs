//! Core domain types for Hangman
//!
//! This module contains the fundamental domain types with no I/O and no clock.
//! Everything here is a pure function of its inputs and is safe to call at any time.

mod keyboard;
mod letters;
mod level;
mod mask;
mod secret;

pub use keyboard::{KEYBOARD_ROWS, KeyState, keyboard};
pub use letters::LetterSet;
pub use level::{Level, ParseLevelError};
pub use mask::{MASK_PLACEHOLDER, render_mask};
pub use secret::{Secret, SecretError};
