//! Keyboard shading
//!
//! Tracks the best color ever observed for each letter across the guesses of
//! the current word. Colors only move up the `LetterColor` order.

use super::{Feedback, LetterColor, Word};
use rustc_hash::FxHashMap;

/// Best-known color per letter for the current word
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardAggregator {
    colors: FxHashMap<char, LetterColor>,
}

impl KeyboardAggregator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `color` for `letter`, keeping whichever is higher
    ///
    /// Returns `true` if the stored color changed.
    pub fn update(&mut self, letter: char, color: LetterColor) -> bool {
        let stored = self.colors.entry(letter).or_default();
        if color > *stored {
            *stored = color;
            true
        } else {
            false
        }
    }

    /// Merge the cells of `feedback` at `positions` using the letters of `guess`
    pub fn merge_cells(&mut self, guess: &Word, feedback: &Feedback, positions: &[usize]) {
        for &i in positions {
            self.update(guess.char_at(i), feedback.colors()[i]);
        }
    }

    /// Current color of `letter` (`None` if never seen)
    #[must_use]
    pub fn color_of(&self, letter: char) -> LetterColor {
        self.colors.get(&letter).copied().unwrap_or_default()
    }

    /// Forget everything (new word)
    pub fn reset(&mut self) {
        self.colors.clear();
    }

    /// Letters with a recorded color other than `None`
    pub fn shaded(&self) -> impl Iterator<Item = (char, LetterColor)> + '_ {
        self.colors
            .iter()
            .filter(|(_, c)| **c != LetterColor::None)
            .map(|(&l, &c)| (l, c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn never_downgrades() {
        let mut kb = KeyboardAggregator::new();
        assert!(kb.update('A', LetterColor::Green));
        assert!(!kb.update('A', LetterColor::Yellow));
        assert!(!kb.update('A', LetterColor::Grey));
        assert!(!kb.update('A', LetterColor::None));
        assert_eq!(kb.color_of('A'), LetterColor::Green);
    }

    #[test]
    fn upgrades_in_order() {
        let mut kb = KeyboardAggregator::new();
        assert_eq!(kb.color_of('R'), LetterColor::None);
        kb.update('R', LetterColor::Grey);
        assert_eq!(kb.color_of('R'), LetterColor::Grey);
        kb.update('R', LetterColor::Yellow);
        assert_eq!(kb.color_of('R'), LetterColor::Yellow);
        kb.update('R', LetterColor::Green);
        assert_eq!(kb.color_of('R'), LetterColor::Green);
    }

    #[test]
    fn update_is_idempotent() {
        let mut kb = KeyboardAggregator::new();
        kb.update('E', LetterColor::Yellow);
        let snapshot = kb.clone();
        assert!(!kb.update('E', LetterColor::Yellow));
        assert_eq!(kb, snapshot);
    }

    #[test]
    fn merge_only_selected_cells() {
        let guess = Word::new("trace").unwrap();
        let target = Word::new("crane").unwrap();
        let feedback = Feedback::calculate(&guess, &target).unwrap();

        let mut kb = KeyboardAggregator::new();
        kb.merge_cells(&guess, &feedback, &[0, 3]);

        assert_eq!(kb.color_of('T'), LetterColor::Grey);
        assert_eq!(kb.color_of('C'), LetterColor::Yellow);
        assert_eq!(kb.color_of('R'), LetterColor::None);
        assert_eq!(kb.shaded().count(), 2);

        kb.reset();
        assert_eq!(kb.shaded().count(), 0);
    }
}
