//! Formatting utilities for terminal output

use std::time::Duration;

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max).max(0.0) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar showing how much of the guess window is left
#[must_use]
pub fn timer_bar(remaining: Duration, window: Duration, width: usize) -> String {
    create_progress_bar(remaining.as_secs_f64(), window.as_secs_f64(), width)
}

/// One heart per remaining life, hollow hearts for lives lost
#[must_use]
pub fn lives_hearts(lives: u32, max_lives: u32) -> String {
    let lost = max_lives.saturating_sub(lives) as usize;
    format!("{}{}", "♥".repeat(lives as usize), "♡".repeat(lost))
}

/// Used letters as `a, e, z`, or `None` when nothing has been guessed
#[must_use]
pub fn used_letters_text(letters: &[char]) -> String {
    if letters.is_empty() {
        return "None".to_string();
    }
    letters
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// ASCII gallows for a figure stage `0..=6`
#[must_use]
pub fn gallows_lines(stage: u32) -> [String; 7] {
    let part = |min: u32, c: char| if stage >= min { c } else { ' ' };

    [
        "  +---+".to_string(),
        "  |   |".to_string(),
        format!("  {}   |", part(1, 'O')),
        format!(" {}{}{}  |", part(3, '/'), part(2, '|'), part(4, '\\')),
        format!(" {} {}  |", part(5, '/'), part(6, '\\')),
        "      |".to_string(),
        "=========".to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn timer_bar_scales_to_window() {
        let bar = timer_bar(Duration::from_secs(3), Duration::from_secs(15), 5);
        assert_eq!(bar, "█░░░░");
    }

    #[test]
    fn hearts_show_lost_lives() {
        assert_eq!(lives_hearts(4, 6), "♥♥♥♥♡♡");
        assert_eq!(lives_hearts(0, 2), "♡♡");
    }

    #[test]
    fn used_letters_formatting() {
        assert_eq!(used_letters_text(&[]), "None");
        assert_eq!(used_letters_text(&['a', 'e', 'z']), "a, e, z");
    }

    #[test]
    fn gallows_grows_with_stage() {
        let empty = gallows_lines(0);
        assert_eq!(empty[2], "      |");
        assert_eq!(empty[3], "      |");

        let full = gallows_lines(6);
        assert_eq!(full[2], "  O   |");
        assert_eq!(full[3], " /|\\  |");
        assert_eq!(full[4], " / \\  |");
    }
}
