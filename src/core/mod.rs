//! Core domain types for the puzzle board
//!
//! Pure, deterministic types with no I/O: words, letter colors, guess feedback
//! and keyboard shading.

mod color;
mod feedback;
mod keyboard;
mod word;

pub use color::LetterColor;
pub use feedback::Feedback;
pub use keyboard::KeyboardAggregator;
pub use word::{Word, WordError};
