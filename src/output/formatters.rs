//! Formatting utilities for terminal output

use crate::core::{Feedback, KeyboardAggregator, LetterColor, Word};
use colored::{ColoredString, Colorize};

/// QWERTY rows used for keyboard shading
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Color one letter tile
#[must_use]
pub fn color_tile(letter: char, color: LetterColor) -> ColoredString {
    let tile = format!(" {letter} ");
    match color {
        LetterColor::Green => tile.black().on_green().bold(),
        LetterColor::Yellow => tile.black().on_yellow().bold(),
        LetterColor::Grey => tile.white().on_bright_black(),
        LetterColor::None => tile.normal(),
    }
}

/// A guess as colored tiles
#[must_use]
pub fn colored_row(guess: &Word, feedback: &Feedback) -> String {
    guess
        .chars()
        .iter()
        .zip(feedback.colors())
        .map(|(&c, &color)| color_tile(c, color).to_string())
        .collect()
}

/// The shaded keyboard on one line, rows separated by spaces
#[must_use]
pub fn keyboard_line(keyboard: &KeyboardAggregator) -> String {
    KEYBOARD_ROWS
        .iter()
        .map(|row| {
            row.chars()
                .map(|c| match keyboard.color_of(c) {
                    LetterColor::Green => c.to_string().green().bold().to_string(),
                    LetterColor::Yellow => c.to_string().yellow().bold().to_string(),
                    LetterColor::Grey => c.to_string().bright_black().to_string(),
                    LetterColor::None => c.to_string(),
                })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("  ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max).clamp(0.0, 1.0) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
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
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn row_keeps_every_letter() {
        colored::control::set_override(false);
        let guess = Word::new("trace").unwrap();
        let feedback: Feedback = "-GGYG".parse().unwrap();
        assert_eq!(colored_row(&guess, &feedback), " T  R  A  C  E ");
        assert!(keyboard_line(&KeyboardAggregator::new()).starts_with("QWERTYUIOP"));
    }
}
