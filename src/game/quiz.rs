//! Quiz gate
//!
//! Decides which letter matches of a guess must be earned by answering a quiz
//! question, and turns the answers into the colors that are actually shown.
//!
//! - `low` difficulty: one question per guess; a wrong answer forfeits every
//!   matched cell of that guess.
//! - `high` difficulty: one question per matched cell, asked left to right;
//!   each answer only decides its own cell.
//! - A fully correct guess always gets exactly one question, whatever the
//!   difficulty. A wrong answer forfeits the whole guess.
//!
//! Forfeited cells are shown as [`LetterColor::None`] and never reach the
//! keyboard.

use crate::content::{Difficulty, Question};
use crate::core::{Feedback, LetterColor, Word};

/// What an open question is guarding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChallengePurpose {
    /// All matches of a guess (low difficulty)
    Guess,
    /// A single matched cell (high difficulty)
    Cell(usize),
    /// The final confirmation of a fully correct guess
    WholeWord,
    /// Unlocking the hint
    Hint,
}

/// A quiz question presented to the player
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Challenge {
    pub question: Question,
    pub purpose: ChallengePurpose,
    /// 1-based position among the questions for the same guess
    pub number: usize,
    pub total: usize,
}

impl Challenge {
    /// Check an answer set against the question
    #[must_use]
    pub fn is_answered_by<S: AsRef<str>>(&self, selected: &[S]) -> bool {
        self.question.is_correct(selected)
    }
}

/// The questions a guess requires
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatePlan {
    /// Nothing matched, nothing to guard
    Ungated,
    /// One question covering every match
    PerGuess,
    /// One question per matched cell, in this order
    PerCell(Vec<usize>),
    /// One question confirming the solved word
    WholeWord,
}

impl GatePlan {
    #[must_use]
    pub fn challenges(&self) -> usize {
        match self {
            Self::Ungated => 0,
            Self::PerGuess | Self::WholeWord => 1,
            Self::PerCell(cells) => cells.len(),
        }
    }
}

/// Plans the questions for each guess according to difficulty
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizGate {
    difficulty: Difficulty,
}

impl QuizGate {
    #[must_use]
    pub const fn new(difficulty: Difficulty) -> Self {
        Self { difficulty }
    }

    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Which questions `feedback` calls for
    #[must_use]
    pub fn plan(&self, feedback: &Feedback) -> GatePlan {
        if feedback.is_perfect() {
            return GatePlan::WholeWord;
        }

        let matched = feedback.matched_cells();
        if matched.is_empty() {
            return GatePlan::Ungated;
        }

        match self.difficulty {
            Difficulty::Low => GatePlan::PerGuess,
            Difficulty::High => GatePlan::PerCell(matched.into_iter().map(|(i, _)| i).collect()),
        }
    }

    /// Start reviewing a freshly evaluated guess
    #[must_use]
    pub fn review(&self, guess: Word, computed: Feedback) -> GuessReview {
        let plan = self.plan(&computed);
        GuessReview {
            guess,
            computed,
            plan,
            answers: Vec::new(),
        }
    }
}

/// A guess whose questions are being answered one at a time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessReview {
    guess: Word,
    computed: Feedback,
    plan: GatePlan,
    answers: Vec<bool>,
}

impl GuessReview {
    #[must_use]
    pub const fn plan(&self) -> &GatePlan {
        &self.plan
    }

    #[must_use]
    pub const fn guess(&self) -> &Word {
        &self.guess
    }

    #[must_use]
    pub const fn computed(&self) -> &Feedback {
        &self.computed
    }

    /// Purpose of the next unanswered question, if any remain
    #[must_use]
    pub fn next_purpose(&self) -> Option<ChallengePurpose> {
        let asked = self.answers.len();
        match &self.plan {
            GatePlan::Ungated => None,
            GatePlan::PerGuess => (asked == 0).then_some(ChallengePurpose::Guess),
            GatePlan::WholeWord => (asked == 0).then_some(ChallengePurpose::WholeWord),
            GatePlan::PerCell(cells) => cells.get(asked).map(|&i| ChallengePurpose::Cell(i)),
        }
    }

    /// Build the next challenge around `question`
    #[must_use]
    pub fn challenge(&self, question: Question) -> Option<Challenge> {
        self.next_purpose().map(|purpose| Challenge {
            question,
            purpose,
            number: self.answers.len() + 1,
            total: self.plan.challenges(),
        })
    }

    /// Record the outcome of the question that was just answered
    pub fn record(&mut self, correct: bool) {
        if self.next_purpose().is_some() {
            self.answers.push(correct);
        }
    }

    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.next_purpose().is_none()
    }

    /// (correct, asked) so far
    #[must_use]
    pub fn tally(&self) -> (usize, usize) {
        (
            self.answers.iter().filter(|&&ok| ok).count(),
            self.answers.len(),
        )
    }

    /// Turn the recorded answers into the shown colors
    ///
    /// Unanswered questions count as wrong.
    #[must_use]
    pub fn verdict(self) -> GuessVerdict {
        let answer = |n: usize| self.answers.get(n).copied().unwrap_or(false);
        let all_cells: Vec<usize> = (0..self.computed.len()).collect();
        let mut shown = self.computed.clone();

        let (merge, won) = match &self.plan {
            GatePlan::Ungated => (all_cells, false),
            GatePlan::PerGuess => {
                if answer(0) {
                    (all_cells, false)
                } else {
                    for (i, _) in self.computed.matched_cells() {
                        shown.colors_mut()[i] = LetterColor::None;
                    }
                    (Vec::new(), false)
                }
            }
            GatePlan::PerCell(cells) => {
                let mut merge = Vec::new();
                for (n, &i) in cells.iter().enumerate() {
                    if answer(n) {
                        merge.push(i);
                    } else {
                        shown.colors_mut()[i] = LetterColor::None;
                    }
                }
                // Only confirmed cells reach the keyboard
                (merge, false)
            }
            GatePlan::WholeWord => {
                if answer(0) {
                    (all_cells, true)
                } else {
                    shown = Feedback::blank(self.computed.len());
                    (Vec::new(), false)
                }
            }
        };

        let (correct, asked) = self.tally();
        GuessVerdict {
            guess: self.guess,
            computed: self.computed,
            shown,
            merge,
            won,
            correct_answers: correct,
            questions_asked: asked,
        }
    }
}

/// Final colors for one guess after the quiz gate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessVerdict {
    pub guess: Word,
    /// Colors from the evaluator, before gating
    pub computed: Feedback,
    /// Colors the player gets to see
    pub shown: Feedback,
    /// Cells to merge into the keyboard
    pub merge: Vec<usize>,
    /// The word was solved and confirmed
    pub won: bool,
    pub correct_answers: usize,
    pub questions_asked: usize,
}
