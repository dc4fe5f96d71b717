//! Built-in demo wordle
//!
//! Compiled into the binary so the game can be played without any content files.

use super::{ContentSource, WordleContent};
use crate::error::ContentError;

/// Id the demo wordle is served under
pub const DEMO_WORDLE_ID: u64 = 0;

const DEMO_JSON: &str = include_str!("../../data/demo_wordle.json");

/// Parse the embedded demo wordle
///
/// # Errors
/// Only fails if the embedded file is malformed.
pub fn demo_wordle() -> Result<WordleContent, ContentError> {
    Ok(serde_json::from_str(DEMO_JSON)?)
}

/// Content source serving only the demo wordle
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedContent;

impl ContentSource for EmbeddedContent {
    fn fetch_wordle_content(&self, wordle_id: u64) -> Result<WordleContent, ContentError> {
        if wordle_id == DEMO_WORDLE_ID {
            demo_wordle()
        } else {
            Err(ContentError::NotFound(wordle_id))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Difficulty;

    #[test]
    fn demo_is_valid() {
        let content = demo_wordle().unwrap();
        let targets = content.validate().unwrap();

        assert_eq!(content.difficulty, Difficulty::Low);
        assert_eq!(targets.len(), 4);
        assert_eq!(targets[0].word.text(), "ORBIT");
        assert!(targets[3].hint.is_none());
    }

    #[test]
    fn only_demo_id_is_served() {
        assert!(EmbeddedContent.fetch_wordle_content(DEMO_WORDLE_ID).is_ok());
        assert!(matches!(
            EmbeddedContent.fetch_wordle_content(9),
            Err(ContentError::NotFound(9))
        ));
    }
}
