//! Play session state machine
//!
//! One `SessionController` drives one play-through of a wordle: it loads words
//! in order, collects letters, evaluates guesses, runs the quiz gate, keeps the
//! score and reports it once the last word is done.
//!
//! Every public method is one input event and runs to completion. Only one
//! guess can be under evaluation and only one question can be open at a time:
//! letter, delete, submit and hint events are rejected with
//! [`InputError::Busy`] unless the session is waiting for a guess.

use super::hint::{HintAccess, HintResponse};
use super::pool::{BoardRow, WordPool, WordState};
use super::quiz::{Challenge, ChallengePurpose, GuessReview, GuessVerdict, QuizGate};
use super::sampler::QuestionSampler;
use crate::config::SessionConfig;
use crate::content::{Difficulty, WordleContent};
use crate::core::{Feedback, KeyboardAggregator, Word};
use crate::error::{ContentError, InputError};
use crate::scores::{ScoreAck, ScoreSink};

/// Coarse session phase, for display and input routing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Letters, delete, submit and hint requests are accepted
    AwaitingGuess,
    /// A quiz question is open; only an answer is accepted
    QuizPending,
    /// A word just ended; waiting for the driver to advance
    Settling,
    /// All words played and the score reported
    Complete,
}

/// How a word ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordOutcome {
    Won { word: Word, attempts_used: u32 },
    /// The target is revealed to the player
    Lost { word: Word },
}

impl WordOutcome {
    #[must_use]
    pub const fn word(&self) -> &Word {
        match self {
            Self::Won { word, .. } | Self::Lost { word } => word,
        }
    }

    #[must_use]
    pub const fn is_won(&self) -> bool {
        matches!(self, Self::Won { .. })
    }
}

/// Result of submitting a guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessProgress {
    /// A quiz question must be answered first
    Challenge(Challenge),
    /// No question was needed; the guess was applied
    Applied(GuessResult),
}

/// Result of answering a question
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChallengeProgress {
    /// Another question for the same guess
    Next(Challenge),
    /// The guess is fully resolved and applied
    Guess(GuessResult),
    /// The hint question was resolved
    Hint(HintResponse),
}

/// Result of a hint request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HintRequest {
    Revealed(String),
    Unavailable,
    /// A question was opened to unlock the hint
    Challenge(Challenge),
}

/// Result of advancing after a word ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    NextWord { number: usize, total: usize },
    Complete(SessionReport),
}

/// A guess after the quiz gate, as applied to the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessResult {
    pub guess: Word,
    /// Evaluator colors before gating
    pub computed: Feedback,
    /// Colors shown on the board
    pub shown: Feedback,
    pub correct_answers: usize,
    pub questions_asked: usize,
    pub attempts_remaining: u32,
    /// Set when this guess ended the word
    pub outcome: Option<WordOutcome>,
}

/// Per-word line in the final report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordRecord {
    pub word: String,
    pub solved: bool,
    pub guesses: u32,
    pub hint_unlocked: bool,
}

/// Outcome of the score submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Saved(ScoreAck),
    /// Non-fatal; the session result stands
    Failed(String),
}

/// Summary produced when the session completes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionReport {
    pub wordle_id: u64,
    pub wordle_name: String,
    pub difficulty: Difficulty,
    pub score: u32,
    pub words: Vec<WordRecord>,
    pub submission: Submission,
}

enum Pending {
    Guess(GuessReview),
    Hint,
}

enum State {
    AwaitingGuess,
    QuizPending { open: Challenge, pending: Pending },
    Settling(WordOutcome),
    Complete(SessionReport),
}

/// Drives one play session
pub struct SessionController<S: ScoreSink> {
    wordle_id: u64,
    wordle_name: String,
    config: SessionConfig,
    gate: QuizGate,
    pool: WordPool,
    sampler: QuestionSampler,
    word: WordState,
    state: State,
    score: u32,
    records: Vec<WordRecord>,
    sink: S,
}

impl<S: ScoreSink> SessionController<S> {
    /// Validate `content` and load the first word
    ///
    /// # Errors
    /// Returns a [`ContentError`] if the content is malformed; no session is
    /// started in that case.
    pub fn start(content: WordleContent, config: SessionConfig, sink: S) -> Result<Self, ContentError> {
        let targets = content.validate()?;
        config.validate()?;
        let mut pool = WordPool::new(targets);
        let sampler = QuestionSampler::new(content.questions, config.seed)?;
        let first = pool.next_word().ok_or(ContentError::NoWords)?;

        tracing::info!(
            wordle_id = content.id,
            name = %content.name,
            difficulty = %content.difficulty,
            words = pool.total(),
            "session started"
        );

        let mut session = Self {
            wordle_id: content.id,
            wordle_name: content.name,
            word: WordState::new(first, config.max_guesses),
            config,
            gate: QuizGate::new(content.difficulty),
            pool,
            sampler,
            state: State::AwaitingGuess,
            score: 0,
            records: Vec::new(),
            sink,
        };
        session.enter_word();
        Ok(session)
    }

    fn enter_word(&mut self) {
        self.sampler.reset();
        self.state = State::AwaitingGuess;
        tracing::info!(
            number = self.pool.taken(),
            total = self.pool.total(),
            length = self.word.target().len(),
            "word loaded"
        );
    }

    const fn no_open_challenge(&self) -> InputError {
        match self.state {
            State::Complete(_) => InputError::SessionComplete,
            _ => InputError::NoOpenChallenge,
        }
    }

    fn require_awaiting_guess(&self) -> Result<(), InputError> {
        match self.state {
            State::AwaitingGuess => Ok(()),
            State::Complete(_) => Err(InputError::SessionComplete),
            State::QuizPending { .. } | State::Settling(_) => Err(InputError::Busy),
        }
    }

    // =========================================================================
    // Input events
    // =========================================================================

    /// Add a letter to the current guess
    ///
    /// # Errors
    /// Rejected while busy, past the word length, or for non-letters.
    pub fn type_letter(&mut self, letter: char) -> Result<char, InputError> {
        self.require_awaiting_guess()?;
        self.word.type_letter(letter)
    }

    /// Remove the last letter of the current guess
    ///
    /// # Errors
    /// Rejected while busy or when the guess is empty.
    pub fn delete_letter(&mut self) -> Result<char, InputError> {
        self.require_awaiting_guess()?;
        self.word.delete_letter()
    }

    /// Submit the current guess
    ///
    /// # Errors
    /// Rejected while busy or if the guess is not the length of the word; the
    /// session is unchanged in that case.
    pub fn submit_guess(&mut self) -> Result<GuessProgress, InputError> {
        self.require_awaiting_guess()?;
        let guess = self.word.complete_guess()?;
        let feedback = Feedback::calculate(&guess, self.word.target())?;
        tracing::debug!(guess = %guess, feedback = %feedback, "guess evaluated");

        let review = self.gate.review(guess, feedback);
        if review.is_resolved() {
            return Ok(GuessProgress::Applied(self.apply(review.verdict())));
        }

        let open = self.draw_challenge(&review);
        self.state = State::QuizPending {
            open: open.clone(),
            pending: Pending::Guess(review),
        };
        Ok(GuessProgress::Challenge(open))
    }

    /// Ask for the current word's hint
    ///
    /// # Errors
    /// Rejected while busy.
    pub fn request_hint(&mut self) -> Result<HintRequest, InputError> {
        self.require_awaiting_guess()?;
        match self.word.hint.access() {
            HintAccess::Free(text) => Ok(HintRequest::Revealed(text)),
            HintAccess::Unavailable => Ok(HintRequest::Unavailable),
            HintAccess::NeedsChallenge => {
                let open = Challenge {
                    question: self.sampler.draw(),
                    purpose: ChallengePurpose::Hint,
                    number: 1,
                    total: 1,
                };
                tracing::debug!(question = open.question.id, "hint challenge opened");
                self.state = State::QuizPending {
                    open: open.clone(),
                    pending: Pending::Hint,
                };
                Ok(HintRequest::Challenge(open))
            }
        }
    }

    /// Answer the open question with the selected option texts
    ///
    /// # Errors
    /// Returns [`InputError::NoOpenChallenge`] if no question is open and
    /// [`InputError::NoSelection`] for an empty selection (the question stays
    /// open).
    pub fn answer_challenge<A: AsRef<str>>(&mut self, selected: &[A]) -> Result<ChallengeProgress, InputError> {
        let State::QuizPending { open, .. } = &self.state else {
            return Err(self.no_open_challenge());
        };
        if selected.is_empty() {
            return Err(InputError::NoSelection);
        }

        let correct = open.is_answered_by(selected);
        tracing::debug!(question = open.question.id, purpose = ?open.purpose, correct, "challenge answered");

        let State::QuizPending { pending, .. } = std::mem::replace(&mut self.state, State::AwaitingGuess) else {
            return Err(InputError::NoOpenChallenge);
        };

        match pending {
            Pending::Hint => Ok(ChallengeProgress::Hint(self.word.hint.resolve(correct))),
            Pending::Guess(mut review) => {
                review.record(correct);
                if review.is_resolved() {
                    return Ok(ChallengeProgress::Guess(self.apply(review.verdict())));
                }
                let open = self.draw_challenge(&review);
                self.state = State::QuizPending {
                    open: open.clone(),
                    pending: Pending::Guess(review),
                };
                Ok(ChallengeProgress::Next(open))
            }
        }
    }

    /// Answer the open question by option index
    ///
    /// # Errors
    /// As [`SessionController::answer_challenge`], plus
    /// [`InputError::UnknownOption`] for an index out of range.
    pub fn answer_by_index(&mut self, indices: &[usize]) -> Result<ChallengeProgress, InputError> {
        let State::QuizPending { open, .. } = &self.state else {
            return Err(self.no_open_challenge());
        };
        let selected = indices
            .iter()
            .map(|&i| {
                open.question
                    .options
                    .get(i)
                    .cloned()
                    .ok_or(InputError::UnknownOption(i))
            })
            .collect::<Result<Vec<_>, _>>()?;
        self.answer_challenge(&selected)
    }

    /// Leave the settle pause after a word ended
    ///
    /// Loads the next word, or completes the session and submits the score.
    ///
    /// # Errors
    /// Returns [`InputError::NotSettling`] unless a word just ended.
    pub fn advance(&mut self) -> Result<Advance, InputError> {
        match self.state {
            State::Settling(_) => {}
            State::Complete(_) => return Err(InputError::SessionComplete),
            _ => return Err(InputError::NotSettling),
        }

        match self.pool.next_word() {
            Some(next) => {
                self.word = WordState::new(next, self.config.max_guesses);
                self.enter_word();
                Ok(Advance::NextWord {
                    number: self.pool.taken(),
                    total: self.pool.total(),
                })
            }
            None => {
                let report = self.complete();
                Ok(Advance::Complete(report))
            }
        }
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    fn draw_challenge(&mut self, review: &GuessReview) -> Challenge {
        let question = self.sampler.draw();
        // Only called for unresolved reviews, which always have a next purpose
        let open = review.challenge(question.clone()).unwrap_or(Challenge {
            question,
            purpose: ChallengePurpose::Guess,
            number: 1,
            total: 1,
        });
        tracing::debug!(
            question = open.question.id,
            purpose = ?open.purpose,
            number = open.number,
            total = open.total,
            "challenge opened"
        );
        open
    }

    fn apply(&mut self, verdict: GuessVerdict) -> GuessResult {
        self.word
            .keyboard
            .merge_cells(&verdict.guess, &verdict.shown, &verdict.merge);
        self.word.push_row(BoardRow {
            guess: verdict.guess.clone(),
            colors: verdict.shown.clone(),
        });

        let outcome = if verdict.won {
            self.score += 1;
            let attempts_used = self.word.attempts_used() + 1;
            tracing::info!(word = %verdict.guess, attempts_used, score = self.score, "word won");
            Some(WordOutcome::Won {
                word: self.word.target().clone(),
                attempts_used,
            })
        } else if self.word.consume_attempt() == 0 {
            tracing::info!(word = %self.word.target(), "word lost");
            Some(WordOutcome::Lost {
                word: self.word.target().clone(),
            })
        } else {
            None
        };

        if let Some(outcome) = &outcome {
            self.records.push(WordRecord {
                word: outcome.word().text().to_string(),
                solved: outcome.is_won(),
                guesses: u32::try_from(self.word.rows().len()).unwrap_or(u32::MAX),
                hint_unlocked: self.word.hint.is_unlocked(),
            });
            self.state = State::Settling(outcome.clone());
        } else {
            self.state = State::AwaitingGuess;
        }

        GuessResult {
            guess: verdict.guess,
            computed: verdict.computed,
            shown: verdict.shown,
            correct_answers: verdict.correct_answers,
            questions_asked: verdict.questions_asked,
            attempts_remaining: self.word.attempts_remaining(),
            outcome,
        }
    }

    fn complete(&mut self) -> SessionReport {
        let submission = match self.sink.submit_score(self.wordle_id, self.score) {
            Ok(ack) => Submission::Saved(ack),
            Err(e) => {
                tracing::warn!(wordle_id = self.wordle_id, score = self.score, error = %e, "score submission failed");
                Submission::Failed(e.to_string())
            }
        };
        tracing::info!(wordle_id = self.wordle_id, score = self.score, "session complete");

        let report = SessionReport {
            wordle_id: self.wordle_id,
            wordle_name: self.wordle_name.clone(),
            difficulty: self.gate.difficulty(),
            score: self.score,
            words: self.records.clone(),
            submission,
        };
        self.state = State::Complete(report.clone());
        report
    }

    // =========================================================================
    // Observers
    // =========================================================================

    #[must_use]
    pub const fn phase(&self) -> Phase {
        match self.state {
            State::AwaitingGuess => Phase::AwaitingGuess,
            State::QuizPending { .. } => Phase::QuizPending,
            State::Settling(_) => Phase::Settling,
            State::Complete(_) => Phase::Complete,
        }
    }

    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub const fn wordle_id(&self) -> u64 {
        self.wordle_id
    }

    #[must_use]
    pub fn wordle_name(&self) -> &str {
        &self.wordle_name
    }

    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.gate.difficulty()
    }

    #[must_use]
    pub const fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[must_use]
    pub const fn attempts_remaining(&self) -> u32 {
        self.word.attempts_remaining()
    }

    #[must_use]
    pub const fn max_guesses(&self) -> u32 {
        self.config.max_guesses
    }

    /// Length of the word being played
    #[must_use]
    pub fn word_length(&self) -> usize {
        self.word.target().len()
    }

    /// 1-based number of the word being played
    #[must_use]
    pub fn word_index(&self) -> usize {
        self.pool.taken()
    }

    #[must_use]
    pub const fn words_total(&self) -> usize {
        self.pool.total()
    }

    #[must_use]
    pub fn current_guess(&self) -> &[char] {
        self.word.current_guess()
    }

    #[must_use]
    pub fn board(&self) -> &[BoardRow] {
        self.word.rows()
    }

    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardAggregator {
        &self.word.keyboard
    }

    #[must_use]
    pub const fn hint_unlocked(&self) -> bool {
        self.word.hint.is_unlocked()
    }

    #[must_use]
    pub const fn has_hint(&self) -> bool {
        self.word.hint.has_hint()
    }

    #[must_use]
    pub const fn open_challenge(&self) -> Option<&Challenge> {
        match &self.state {
            State::QuizPending { open, .. } => Some(open),
            _ => None,
        }
    }

    /// How the last word ended, while settling
    #[must_use]
    pub const fn settling_outcome(&self) -> Option<&WordOutcome> {
        match &self.state {
            State::Settling(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// Final report once complete
    #[must_use]
    pub const fn report(&self) -> Option<&SessionReport> {
        match &self.state {
            State::Complete(report) => Some(report),
            _ => None,
        }
    }

    /// Words finished so far
    #[must_use]
    pub fn records(&self) -> &[WordRecord] {
        &self.records
    }

    #[must_use]
    pub const fn sink(&self) -> &S {
        &self.sink
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Question, QuestionKind, WordEntry};
    use crate::scores::MemoryScores;

    fn content(difficulty: Difficulty, words: &[(&str, Option<&str>)]) -> WordleContent {
        WordleContent {
            id: 11,
            name: "unit".to_string(),
            difficulty,
            words: words
                .iter()
                .map(|(w, h)| WordEntry {
                    word: (*w).to_string(),
                    hint: h.map(ToString::to_string),
                })
                .collect(),
            questions: vec![Question {
                id: 1,
                prompt: "2+2?".to_string(),
                options: vec!["4".to_string(), "5".to_string()],
                correct_answers: vec!["4".to_string()],
                kind: QuestionKind::Single,
            }],
            settings: None,
        }
    }

    fn start(difficulty: Difficulty, words: &[(&str, Option<&str>)]) -> SessionController<MemoryScores> {
        let config = SessionConfig {
            seed: Some(7),
            ..SessionConfig::default()
        };
        SessionController::start(content(difficulty, words), config, MemoryScores::new()).unwrap()
    }

    fn type_word<S: ScoreSink>(session: &mut SessionController<S>, word: &str) {
        for c in word.chars() {
            session.type_letter(c).unwrap();
        }
    }

    #[test]
    fn starts_awaiting_first_word() {
        let session = start(Difficulty::Low, &[("sol", None), ("luna", None)]);
        assert_eq!(session.phase(), Phase::AwaitingGuess);
        assert_eq!(session.word_index(), 1);
        assert_eq!(session.words_total(), 2);
        assert_eq!(session.word_length(), 3);
        assert_eq!(session.attempts_remaining(), 5);
        assert!(!session.hint_unlocked());
    }

    #[test]
    fn invalid_content_does_not_start() {
        let result = SessionController::start(
            content(Difficulty::Low, &[]),
            SessionConfig::default(),
            MemoryScores::new(),
        );
        assert!(matches!(result, Err(ContentError::NoWords)));
    }

    #[test]
    fn short_submit_changes_nothing() {
        let mut session = start(Difficulty::Low, &[("sol", None)]);
        session.type_letter('s').unwrap();
        assert!(matches!(
            session.submit_guess(),
            Err(InputError::IncompleteGuess {
                expected: 3,
                got: 1
            })
        ));
        assert_eq!(session.current_guess(), &['S']);
        assert_eq!(session.attempts_remaining(), 5);
        assert_eq!(session.phase(), Phase::AwaitingGuess);
    }

    #[test]
    fn input_blocked_while_question_open() {
        let mut session = start(Difficulty::Low, &[("sol", Some("star"))]);
        type_word(&mut session, "son");
        assert!(matches!(
            session.submit_guess(),
            Ok(GuessProgress::Challenge(_))
        ));

        assert_eq!(session.type_letter('a'), Err(InputError::Busy));
        assert_eq!(session.delete_letter(), Err(InputError::Busy));
        assert_eq!(session.submit_guess(), Err(InputError::Busy));
        assert_eq!(session.request_hint(), Err(InputError::Busy));
        assert_eq!(session.advance(), Err(InputError::NotSettling));
        assert_eq!(session.answer_challenge::<&str>(&[]), Err(InputError::NoSelection));
        assert_eq!(session.phase(), Phase::QuizPending);
    }

    #[test]
    fn answer_without_question_is_rejected() {
        let mut session = start(Difficulty::Low, &[("sol", None)]);
        assert_eq!(session.answer_challenge(&["4"]), Err(InputError::NoOpenChallenge));
        assert_eq!(session.answer_by_index(&[0]), Err(InputError::NoOpenChallenge));
    }

    #[test]
    fn unmatched_guess_applies_without_question() {
        let mut session = start(Difficulty::High, &[("sol", None)]);
        type_word(&mut session, "abc");
        let Ok(GuessProgress::Applied(result)) = session.submit_guess() else {
            panic!("expected immediate application");
        };
        assert_eq!(result.shown.to_string(), "---");
        assert_eq!(result.attempts_remaining, 4);
        assert!(session.current_guess().is_empty());
        assert_eq!(session.board().len(), 1);
    }

    #[test]
    fn answer_by_index_maps_options() {
        let mut session = start(Difficulty::Low, &[("sol", None)]);
        type_word(&mut session, "son");
        session.submit_guess().unwrap();
        assert_eq!(session.answer_by_index(&[9]), Err(InputError::UnknownOption(9)));
        let progress = session.answer_by_index(&[0]).unwrap();
        let ChallengeProgress::Guess(result) = progress else {
            panic!("expected guess result");
        };
        assert_eq!(result.shown.to_string(), "GG-");
    }

    #[test]
    fn hint_flow() {
        let mut session = start(Difficulty::Low, &[("sol", Some("star")), ("luna", None)]);

        let HintRequest::Challenge(challenge) = session.request_hint().unwrap() else {
            panic!("expected hint challenge");
        };
        assert_eq!(challenge.purpose, ChallengePurpose::Hint);
        assert_eq!(
            session.answer_challenge(&["5"]),
            Ok(ChallengeProgress::Hint(HintResponse::Denied))
        );
        assert!(!session.hint_unlocked());
        assert_eq!(session.attempts_remaining(), 5);

        session.request_hint().unwrap();
        assert_eq!(
            session.answer_challenge(&["4"]),
            Ok(ChallengeProgress::Hint(HintResponse::Revealed("star".to_string())))
        );
        for _ in 0..3 {
            assert_eq!(
                session.request_hint(),
                Ok(HintRequest::Revealed("star".to_string()))
            );
        }
        assert_eq!(session.phase(), Phase::AwaitingGuess);
    }

    #[test]
    fn hint_unavailable_without_text() {
        let mut session = start(Difficulty::Low, &[("luna", None)]);
        assert_eq!(session.request_hint(), Ok(HintRequest::Unavailable));
        assert_eq!(session.phase(), Phase::AwaitingGuess);
    }

    #[test]
    fn hint_does_not_disturb_guess_buffer() {
        let mut session = start(Difficulty::Low, &[("sol", Some("star"))]);
        session.type_letter('s').unwrap();
        session.request_hint().unwrap();
        session.answer_challenge(&["4"]).unwrap();
        assert_eq!(session.current_guess(), &['S']);
    }

    #[test]
    fn complete_session_reports_once() {
        let mut session = start(Difficulty::Low, &[("sol", None)]);
        type_word(&mut session, "sol");
        session.submit_guess().unwrap();
        session.answer_challenge(&["4"]).unwrap();
        assert_eq!(session.phase(), Phase::Settling);

        let Ok(Advance::Complete(report)) = session.advance() else {
            panic!("expected completion");
        };
        assert_eq!(report.score, 1);
        assert_eq!(report.words.len(), 1);
        assert!(report.words[0].solved);
        assert_eq!(report.submission, Submission::Saved(ScoreAck::Created { score: 1 }));

        assert_eq!(session.phase(), Phase::Complete);
        assert_eq!(session.advance(), Err(InputError::SessionComplete));
        assert_eq!(session.type_letter('a'), Err(InputError::SessionComplete));
        assert_eq!(session.sink().submissions(), &[(11, 1)]);
        assert_eq!(session.report(), Some(&report));
    }
}
