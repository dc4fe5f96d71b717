//! Wordle content: target words, hints and the quiz question bank
//!
//! Content is authored elsewhere and read-only to the game. It is validated once
//! at load time; a session never starts on malformed content.

mod embedded;
pub mod loader;

pub use embedded::{DEMO_WORDLE_ID, EmbeddedContent, demo_wordle};
pub use loader::{ContentSource, JsonContentSource, load_from_file};

use crate::config::SessionConfig;
use crate::core::Word;
use crate::error::ContentError;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How strictly letter matches are quiz-gated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// One question per guess
    #[default]
    Low,
    /// One question per matched cell
    High,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => f.write_str("low"),
            Self::High => f.write_str("high"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKind {
    #[default]
    Single,
    Multiple,
}

/// A multiple-choice quiz question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    #[serde(default)]
    pub id: u64,
    #[serde(alias = "question")]
    pub prompt: String,
    pub options: Vec<String>,
    #[serde(alias = "correctAnswers", alias = "correctAnswer")]
    pub correct_answers: Vec<String>,
    #[serde(default, alias = "type")]
    pub kind: QuestionKind,
}

impl Question {
    /// Whether `selected` is exactly the set of correct answers
    ///
    /// Order and repeated selections do not matter.
    #[must_use]
    pub fn is_correct<S: AsRef<str>>(&self, selected: &[S]) -> bool {
        let chosen: FxHashSet<&str> = selected.iter().map(AsRef::as_ref).collect();
        let correct: FxHashSet<&str> = self.correct_answers.iter().map(String::as_str).collect();
        chosen == correct
    }

    /// Check the invariants answer resolution relies on
    ///
    /// # Errors
    /// Returns the first [`ContentError`] found.
    pub fn validate(&self) -> Result<(), ContentError> {
        let id = self.id;

        if self.options.len() < 2 {
            return Err(ContentError::TooFewOptions {
                id,
                count: self.options.len(),
            });
        }

        let mut seen = FxHashSet::default();
        for option in &self.options {
            if !seen.insert(option.as_str()) {
                return Err(ContentError::DuplicateOption {
                    id,
                    option: option.clone(),
                });
            }
        }

        if self.correct_answers.is_empty() {
            return Err(ContentError::NoCorrectAnswers { id });
        }

        if let Some(answer) = self
            .correct_answers
            .iter()
            .find(|answer| !seen.contains(answer.as_str()))
        {
            return Err(ContentError::AnswerNotAnOption {
                id,
                answer: answer.clone(),
            });
        }

        if self.kind == QuestionKind::Single && self.correct_answers.len() > 1 {
            return Err(ContentError::SingleWithManyAnswers {
                id,
                count: self.correct_answers.len(),
            });
        }

        Ok(())
    }
}

/// Raw word entry as authored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    pub word: String,
    #[serde(default)]
    pub hint: Option<String>,
}

/// A validated target word ready for play
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetWord {
    pub word: Word,
    pub hint: Option<String>,
}

/// Everything a session needs from the content boundary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordleContent {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub difficulty: Difficulty,
    pub words: Vec<WordEntry>,
    pub questions: Vec<Question>,
    /// Optional per-wordle session settings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<SessionConfig>,
}

impl WordleContent {
    /// Validate the content and produce the ordered target words
    ///
    /// # Errors
    /// Returns a [`ContentError`] if there are no words or no questions, if a
    /// word or question is malformed, or if the embedded settings allow no guesses.
    pub fn validate(&self) -> Result<Vec<TargetWord>, ContentError> {
        if self.words.is_empty() {
            return Err(ContentError::NoWords);
        }
        if self.questions.is_empty() {
            return Err(ContentError::NoQuestions);
        }

        for question in &self.questions {
            question.validate()?;
        }
        if let Some(settings) = &self.settings {
            settings.validate()?;
        }

        self.words
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                let word = Word::new(&entry.word)
                    .map_err(|source| ContentError::InvalidWord { index, source })?;
                let hint = entry
                    .hint
                    .as_deref()
                    .map(str::trim)
                    .filter(|h| !h.is_empty())
                    .map(str::to_string);
                Ok(TargetWord { word, hint })
            })
            .collect()
    }
}
