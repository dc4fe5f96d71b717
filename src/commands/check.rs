//! Content check command
//!
//! Validates a wordle the same way a session would and summarizes it.

use crate::content::{Difficulty, QuestionKind, WordleContent};

/// One target word in a check report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordSummary {
    pub word: String,
    pub length: usize,
    pub has_hint: bool,
}

/// Summary of a wordle file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    pub id: u64,
    pub name: String,
    pub difficulty: Difficulty,
    pub words: Vec<WordSummary>,
    pub single_questions: usize,
    pub multiple_questions: usize,
    /// Most questions a single guess can require
    pub max_questions_per_guess: usize,
    /// Validation failure, if any
    pub problem: Option<String>,
}

impl CheckReport {
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.problem.is_none()
    }

    #[must_use]
    pub const fn question_count(&self) -> usize {
        self.single_questions + self.multiple_questions
    }
}

/// Check `content` and build its report
#[must_use]
pub fn check_content(content: &WordleContent) -> CheckReport {
    let (targets, problem) = match content.validate() {
        Ok(targets) => (Some(targets), None),
        Err(e) => (None, Some(e.to_string())),
    };

    // Raw entries are listed even when validation fails
    let words: Vec<WordSummary> = match targets {
        Some(targets) => targets
            .iter()
            .map(|t| WordSummary {
                word: t.word.text().to_string(),
                length: t.word.len(),
                has_hint: t.hint.is_some(),
            })
            .collect(),
        None => content
            .words
            .iter()
            .map(|entry| WordSummary {
                word: entry.word.trim().to_uppercase(),
                length: entry.word.trim().chars().count(),
                has_hint: entry.hint.as_deref().is_some_and(|h| !h.trim().is_empty()),
            })
            .collect(),
    };

    let multiple_questions = content
        .questions
        .iter()
        .filter(|q| q.kind == QuestionKind::Multiple)
        .count();

    let max_questions_per_guess = match content.difficulty {
        Difficulty::Low => 1,
        Difficulty::High => words.iter().map(|w| w.length).max().unwrap_or(0).max(1),
    };

    CheckReport {
        id: content.id,
        name: content.name.clone(),
        difficulty: content.difficulty,
        single_questions: content.questions.len() - multiple_questions,
        multiple_questions,
        max_questions_per_guess,
        words,
        problem,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{WordEntry, demo_wordle};

    #[test]
    fn demo_wordle_is_valid() {
        let report = check_content(&demo_wordle().unwrap());
        assert!(report.is_valid());
        assert_eq!(report.words.len(), 4);
        assert_eq!(report.words[0].word, "ORBIT");
        assert!(report.words[0].has_hint);
        assert!(!report.words[3].has_hint);
        assert_eq!(report.question_count(), 6);
        assert_eq!(report.max_questions_per_guess, 1);
    }

    #[test]
    fn invalid_content_is_reported() {
        let mut content = demo_wordle().unwrap();
        content.words.push(WordEntry {
            word: "r2d2".to_string(),
            hint: None,
        });
        content.difficulty = Difficulty::High;

        let report = check_content(&content);
        assert!(!report.is_valid());
        assert!(report.problem.unwrap().contains("Word #4"));
        assert_eq!(report.words.len(), 5);
        assert_eq!(report.max_questions_per_guess, 5);
    }
}
