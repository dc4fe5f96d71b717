//! Play session engine
//!
//! [`SessionController`] composes the word queue, the question sampler, the
//! quiz gate and the hint controller into one event-driven state machine.

mod hint;
mod pool;
mod quiz;
mod sampler;
mod session;

pub use hint::{HintAccess, HintController, HintResponse};
pub use pool::{BoardRow, WordPool, WordState};
pub use quiz::{Challenge, ChallengePurpose, GatePlan, GuessReview, GuessVerdict, QuizGate};
pub use sampler::QuestionSampler;
pub use session::{
    Advance, ChallengeProgress, GuessProgress, GuessResult, HintRequest, Phase, SessionController,
    SessionReport, Submission, WordOutcome, WordRecord,
};
