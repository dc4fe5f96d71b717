//! Quizdle
//!
//! A word-guessing game where letter matches have to be earned by answering quiz
//! questions. A wordle bundles target words (with optional hints), a question bank
//! and a difficulty mode; one [`game::SessionController`] plays through it.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use quizdle::config::SessionConfig;
//! use quizdle::content::demo_wordle;
//! use quizdle::game::{GuessProgress, SessionController};
//! use quizdle::scores::MemoryScores;
//!
//! let content = demo_wordle().unwrap();
//! let mut session = SessionController::start(content, SessionConfig::default(), MemoryScores::new()).unwrap();
//!
//! for letter in "ORBIT".chars() {
//!     session.type_letter(letter).unwrap();
//! }
//! if let GuessProgress::Challenge(challenge) = session.submit_guess().unwrap() {
//!     println!("{}", challenge.question.prompt);
//! }
//! ```

// Letters, colors and guess evaluation
pub mod core;

// Wordle content and loading
pub mod content;

// Session state machine and quiz gate
pub mod game;

// Score persistence
pub mod scores;

pub mod config;
pub mod error;
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
