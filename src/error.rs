//! Error types
//!
//! Input errors are transient notices and never change session state. Content
//! errors block a session from starting. Score errors are reported as warnings.

use crate::core::WordError;
use thiserror::Error;

/// Rejected player input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Not enough letters! Expected {expected}, got {got}")]
    IncompleteGuess { expected: usize, got: usize },

    #[error("The guess is already {0} letters long")]
    BufferFull(usize),

    #[error("Nothing to delete")]
    EmptyBuffer,

    #[error("'{0}' is not a letter")]
    InvalidLetter(char),

    #[error("Busy: finish the current question first")]
    Busy,

    #[error("Please select at least one option before submitting")]
    NoSelection,

    #[error("Option {0} does not exist")]
    UnknownOption(usize),

    #[error("There is no open question")]
    NoOpenChallenge,

    #[error("Nothing to advance to yet")]
    NotSettling,

    #[error("The session is over")]
    SessionComplete,
}

/// Malformed wordle content
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("Wordle has no words")]
    NoWords,

    #[error("Wordle has no quiz questions")]
    NoQuestions,

    #[error("Word #{index} is invalid: {source}")]
    InvalidWord {
        index: usize,
        #[source]
        source: WordError,
    },

    #[error("Question {id} needs at least 2 options, has {count}")]
    TooFewOptions { id: u64, count: usize },

    #[error("Question {id} lists option '{option}' more than once")]
    DuplicateOption { id: u64, option: String },

    #[error("Question {id} has no correct answers")]
    NoCorrectAnswers { id: u64 },

    #[error("Question {id}: correct answer '{answer}' is not one of its options")]
    AnswerNotAnOption { id: u64, answer: String },

    #[error("Question {id} is single choice but has {count} correct answers")]
    SingleWithManyAnswers { id: u64, count: usize },

    #[error("Words need at least one guess, max_guesses is 0")]
    NoGuesses,

    #[error("Wordle {0} not found")]
    NotFound(u64),

    #[error("Failed to read content: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse content: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Score submission failure
#[derive(Debug, Error)]
pub enum ScoreError {
    #[error("Failed to access score book: {0}")]
    Io(#[from] std::io::Error),

    #[error("Score book is corrupt: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Score store unavailable: {0}")]
    Unavailable(String),
}
