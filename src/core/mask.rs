//! Mask rendering
//!
//! The mask is the partially revealed display form of a secret: one segment per
//! character, segments separated by a single space.

use super::letters::LetterSet;

/// Symbol shown in place of an unguessed letter
pub const MASK_PLACEHOLDER: char = '_';

/// Render the mask of `secret` under `guessed`
///
/// Each character of the secret becomes one segment: spaces are kept as spaces,
/// letters whose lowercase form is in `guessed` are shown, anything else becomes
/// [`MASK_PLACEHOLDER`]. An empty secret renders as an empty string.
///
/// # Examples
/// ```
/// use hangman::core::{LetterSet, render_mask};
///
/// let guessed: LetterSet = "pn".chars().collect();
/// assert_eq!(render_mask("python", &guessed), "p _ _ _ _ n");
/// assert_eq!(render_mask("", &guessed), "");
/// ```
#[must_use]
pub fn render_mask(secret: &str, guessed: &LetterSet) -> String {
    let mut out = String::with_capacity(secret.len() * 2);

    for (i, c) in secret.chars().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        if c == ' ' || guessed.contains(c) {
            out.push(c);
        } else {
            out.push(MASK_PLACEHOLDER);
        }
    }

    out
}
