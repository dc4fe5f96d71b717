//! Target word queue and per-word play state

use super::hint::HintController;
use crate::content::TargetWord;
use crate::core::{Feedback, KeyboardAggregator, Word};
use crate::error::InputError;
use std::collections::VecDeque;

/// Ordered queue of the words still to be played in a session
#[derive(Debug, Clone)]
pub struct WordPool {
    words: VecDeque<TargetWord>,
    total: usize,
}

impl WordPool {
    #[must_use]
    pub fn new(words: Vec<TargetWord>) -> Self {
        let total = words.len();
        Self {
            words: words.into(),
            total,
        }
    }

    /// Take the next word, in authored order
    pub fn next_word(&mut self) -> Option<TargetWord> {
        self.words.pop_front()
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Words taken so far (including the one being played)
    #[must_use]
    pub fn taken(&self) -> usize {
        self.total - self.words.len()
    }
}

/// A submitted guess as it is shown on the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardRow {
    pub guess: Word,
    pub colors: Feedback,
}

/// State of the word currently being played
///
/// Created when a word is loaded and dropped when it is won or lost.
#[derive(Debug, Clone)]
pub struct WordState {
    target: Word,
    attempts_remaining: u32,
    max_guesses: u32,
    guess: Vec<char>,
    pub(crate) hint: HintController,
    pub(crate) keyboard: KeyboardAggregator,
    rows: Vec<BoardRow>,
}

impl WordState {
    #[must_use]
    pub fn new(entry: TargetWord, max_guesses: u32) -> Self {
        Self {
            target: entry.word,
            attempts_remaining: max_guesses,
            max_guesses,
            guess: Vec::new(),
            hint: HintController::new(entry.hint),
            keyboard: KeyboardAggregator::new(),
            rows: Vec::new(),
        }
    }

    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    #[must_use]
    pub const fn attempts_remaining(&self) -> u32 {
        self.attempts_remaining
    }

    #[must_use]
    pub const fn attempts_used(&self) -> u32 {
        self.max_guesses - self.attempts_remaining
    }

    #[must_use]
    pub fn current_guess(&self) -> &[char] {
        &self.guess
    }

    #[must_use]
    pub fn rows(&self) -> &[BoardRow] {
        &self.rows
    }

    /// Append a letter to the guess buffer
    ///
    /// # Errors
    /// Rejects non-letters and letters past the target length.
    pub fn type_letter(&mut self, letter: char) -> Result<char, InputError> {
        if !letter.is_alphabetic() {
            return Err(InputError::InvalidLetter(letter));
        }
        if self.guess.len() >= self.target.len() {
            return Err(InputError::BufferFull(self.target.len()));
        }

        // Multi-char uppercase expansions (e.g. 'ß') are not valid cells
        let mut upper = letter.to_uppercase();
        let letter = match (upper.next(), upper.next()) {
            (Some(c), None) => c,
            _ => return Err(InputError::InvalidLetter(letter)),
        };

        self.guess.push(letter);
        Ok(letter)
    }

    /// Remove the last letter from the guess buffer
    ///
    /// # Errors
    /// Returns [`InputError::EmptyBuffer`] if there is nothing to delete.
    pub fn delete_letter(&mut self) -> Result<char, InputError> {
        self.guess.pop().ok_or(InputError::EmptyBuffer)
    }

    /// The buffered guess as a word, if it is complete
    ///
    /// # Errors
    /// Returns [`InputError::IncompleteGuess`] if the buffer length differs
    /// from the target length.
    pub fn complete_guess(&self) -> Result<Word, InputError> {
        let incomplete = || InputError::IncompleteGuess {
            expected: self.target.len(),
            got: self.guess.len(),
        };
        if self.guess.len() != self.target.len() {
            return Err(incomplete());
        }
        Word::new(self.guess.iter().collect::<String>()).map_err(|_| incomplete())
    }

    /// Record an applied guess and clear the buffer
    pub(crate) fn push_row(&mut self, row: BoardRow) {
        self.rows.push(row);
        self.guess.clear();
    }

    /// Spend one attempt, returning how many remain
    pub(crate) fn consume_attempt(&mut self) -> u32 {
        self.attempts_remaining = self.attempts_remaining.saturating_sub(1);
        self.attempts_remaining
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target(word: &str) -> TargetWord {
        TargetWord {
            word: Word::new(word).unwrap(),
            hint: None,
        }
    }

    #[test]
    fn pool_yields_words_in_order() {
        let mut pool = WordPool::new(vec![target("hola"), target("adios")]);
        assert_eq!(pool.total(), 2);
        assert_eq!(pool.taken(), 0);

        assert_eq!(pool.next_word().unwrap().word.text(), "HOLA");
        assert_eq!(pool.taken(), 1);
        assert_eq!(pool.next_word().unwrap().word.text(), "ADIOS");
        assert!(pool.next_word().is_none());
        assert_eq!(pool.remaining(), 0);
    }

    #[test]
    fn guess_buffer_respects_target_length() {
        let mut state = WordState::new(target("sol"), 5);
        assert_eq!(state.type_letter('s'), Ok('S'));
        assert_eq!(state.type_letter('o'), Ok('O'));
        assert!(matches!(
            state.complete_guess(),
            Err(InputError::IncompleteGuess {
                expected: 3,
                got: 2
            })
        ));
        state.type_letter('l').unwrap();
        assert_eq!(state.type_letter('x'), Err(InputError::BufferFull(3)));
        assert_eq!(state.complete_guess().unwrap().text(), "SOL");
    }

    #[test]
    fn delete_and_invalid_input() {
        let mut state = WordState::new(target("sol"), 5);
        assert_eq!(state.delete_letter(), Err(InputError::EmptyBuffer));
        assert_eq!(state.type_letter('1'), Err(InputError::InvalidLetter('1')));
        state.type_letter('s').unwrap();
        assert_eq!(state.delete_letter(), Ok('S'));
        assert!(state.current_guess().is_empty());
    }

    #[test]
    fn attempts_count_down() {
        let mut state = WordState::new(target("sol"), 2);
        assert_eq!(state.attempts_remaining(), 2);
        assert_eq!(state.consume_attempt(), 1);
        assert_eq!(state.attempts_used(), 1);
        assert_eq!(state.consume_attempt(), 0);
        assert_eq!(state.consume_attempt(), 0);
    }
}
