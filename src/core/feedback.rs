//! Guess feedback calculation and representation
//!
//! Feedback is one [`LetterColor`] per guess position. Calculation follows the
//! standard duplicate-aware rules: a letter that appears k times in the target
//! is credited (green or yellow) at most k times across the guess.

use super::{LetterColor, Word};
use crate::error::InputError;
use std::fmt;
use std::str::FromStr;

/// Per-position feedback for one guess
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback {
    colors: Vec<LetterColor>,
}

impl Feedback {
    /// Wrap an explicit color row
    #[must_use]
    pub const fn from_colors(colors: Vec<LetterColor>) -> Self {
        Self { colors }
    }

    /// A row of `len` blank cells
    #[must_use]
    pub fn blank(len: usize) -> Self {
        Self {
            colors: vec![LetterColor::None; len],
        }
    }

    /// Calculate the feedback when `guess` is played against `target`
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches green and remove them from the
    ///    target's residual letter counts
    /// 2. Second pass: for every remaining position, mark yellow if the letter
    ///    still has residual count (and consume one), otherwise grey
    ///
    /// # Errors
    /// Returns [`InputError::IncompleteGuess`] if the lengths differ.
    ///
    /// # Examples
    /// ```
    /// use quizdle::core::{Feedback, LetterColor, Word};
    ///
    /// let guess = Word::new("trace").unwrap();
    /// let target = Word::new("crane").unwrap();
    /// let feedback = Feedback::calculate(&guess, &target).unwrap();
    ///
    /// assert_eq!(feedback.to_string(), "-GGYG");
    /// assert_eq!(feedback.colors()[3], LetterColor::Yellow);
    /// ```
    pub fn calculate(guess: &Word, target: &Word) -> Result<Self, InputError> {
        if guess.len() != target.len() {
            return Err(InputError::IncompleteGuess {
                expected: target.len(),
                got: guess.len(),
            });
        }

        let mut colors = vec![LetterColor::Grey; guess.len()];
        let mut target_available = target.char_counts();

        // First pass: greens
        for (i, (&g, &t)) in guess.chars().iter().zip(target.chars()).enumerate() {
            if g == t {
                colors[i] = LetterColor::Green;
                if let Some(count) = target_available.get_mut(&g) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: yellows from what is left
        for (i, &g) in guess.chars().iter().enumerate() {
            if colors[i] == LetterColor::Green {
                continue;
            }
            if let Some(count) = target_available.get_mut(&g)
                && *count > 0
            {
                colors[i] = LetterColor::Yellow;
                *count -= 1;
            }
        }

        Ok(Self { colors })
    }

    /// The color row
    #[inline]
    #[must_use]
    pub fn colors(&self) -> &[LetterColor] {
        &self.colors
    }

    /// Mutable access for gating decisions
    #[inline]
    pub(crate) fn colors_mut(&mut self) -> &mut [LetterColor] {
        &mut self.colors
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// All cells green
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        !self.colors.is_empty() && self.colors.iter().all(|&c| c == LetterColor::Green)
    }

    /// Every non-grey cell as `(index, color)`, left to right
    ///
    /// These are the cells the quiz gate may challenge.
    #[must_use]
    pub fn matched_cells(&self) -> Vec<(usize, LetterColor)> {
        self.colors
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_match())
            .map(|(i, &c)| (i, c))
            .collect()
    }

    /// Count cells of a given color
    #[must_use]
    pub fn count(&self, color: LetterColor) -> usize {
        self.colors.iter().filter(|&&c| c == color).count()
    }

    /// Render as emoji squares
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.colors.iter().map(|c| c.emoji()).collect()
    }
}

impl FromStr for Feedback {
    type Err = String;

    /// Parse a row like `"-GGYG"` (see [`LetterColor::from_symbol`])
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .map(|ch| {
                LetterColor::from_symbol(ch).ok_or_else(|| format!("Invalid feedback symbol: {ch}"))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self::from_colors)
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for color in &self.colors {
            write!(f, "{}", color.symbol())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feedback(guess: &str, target: &str) -> Feedback {
        Feedback::calculate(&Word::new(guess).unwrap(), &Word::new(target).unwrap()).unwrap()
    }

    #[test]
    fn trace_against_crane_golden() {
        // T grey, R green, A green, C yellow (the C left over after greens), E green
        let fb = feedback("trace", "crane");
        assert_eq!(
            fb.colors(),
            &[
                LetterColor::Grey,
                LetterColor::Green,
                LetterColor::Green,
                LetterColor::Yellow,
                LetterColor::Green,
            ]
        );
    }

    #[test]
    fn allah_against_llama_respects_letter_counts() {
        let fb = feedback("allah", "llama");
        assert_eq!(fb.to_string(), "YGYY-");

        // No letter is credited more often than it appears in the target
        let target = Word::new("llama").unwrap().char_counts();
        let guess = Word::new("allah").unwrap();
        for &letter in guess.chars() {
            let credited = guess
                .chars()
                .iter()
                .zip(fb.colors())
                .filter(|&(&g, c)| g == letter && c.is_match())
                .count();
            assert!(credited <= target.get(&letter).copied().unwrap_or(0));
        }
    }

    #[test]
    fn green_consumes_before_yellow() {
        // ROBOT vs FLOOR: the second O is green, so only one O remains for yellow
        assert_eq!(feedback("robot", "floor").to_string(), "YY-G-");
        // SPEED vs ERASE: two Es in the target, both yellow
        assert_eq!(feedback("speed", "erase").to_string(), "Y-YY-");
        // Guess has more copies than the target: only the green E is credited
        assert_eq!(feedback("eerie", "crane").to_string(), "--Y-G");
    }

    #[test]
    fn perfect_and_all_grey() {
        let fb = feedback("hola", "hola");
        assert!(fb.is_perfect());
        assert_eq!(fb.count(LetterColor::Green), 4);

        let fb = feedback("abcd", "efgh");
        assert!(!fb.is_perfect());
        assert!(fb.matched_cells().is_empty());
        assert_eq!(fb.count(LetterColor::Grey), 4);
    }

    #[test]
    fn evaluation_is_deterministic() {
        let first = feedback("allah", "llama");
        for _ in 0..10 {
            assert_eq!(feedback("allah", "llama"), first);
        }
    }

    #[test]
    fn matched_cells_are_left_to_right() {
        // Greens are found in the first pass but the list is ordered by index
        let fb = feedback("trace", "crane");
        assert_eq!(
            fb.matched_cells(),
            vec![
                (1, LetterColor::Green),
                (2, LetterColor::Green),
                (3, LetterColor::Yellow),
                (4, LetterColor::Green),
            ]
        );
    }

    #[test]
    fn length_mismatch_is_rejected() {
        let result = Feedback::calculate(&Word::new("cat").unwrap(), &Word::new("crane").unwrap());
        assert_eq!(
            result,
            Err(InputError::IncompleteGuess {
                expected: 5,
                got: 3
            })
        );
    }

    #[test]
    fn parse_and_display() {
        let fb: Feedback = "GY-.".parse().unwrap();
        assert_eq!(
            fb.colors(),
            &[
                LetterColor::Green,
                LetterColor::Yellow,
                LetterColor::Grey,
                LetterColor::None
            ]
        );
        assert_eq!(fb.to_string(), "GY-.");
        assert_eq!(fb.to_emoji(), "🟩🟨⬛⬜");
        assert!("GXG".parse::<Feedback>().is_err());
    }
}
