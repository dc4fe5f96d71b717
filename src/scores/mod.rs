//! Score persistence boundary
//!
//! A session reports its final score exactly once. Stores keep the best score
//! per player and wordle, so repeated plays never lower a stored result.

mod book;

pub use book::ScoreBook;

use crate::error::ScoreError;
use rustc_hash::FxHashMap;
use std::fmt;

/// How a submitted score was merged with the stored best
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreAck {
    /// First result for this wordle
    Created { score: u32 },
    /// Beat the previous best
    Improved { previous: u32, score: u32 },
    /// Did not beat the stored best, which is unchanged
    Kept { best: u32 },
}

impl ScoreAck {
    /// Merge `score` into an optional stored best
    #[must_use]
    pub const fn merge(previous: Option<u32>, score: u32) -> Self {
        match previous {
            None => Self::Created { score },
            Some(previous) if score > previous => Self::Improved { previous, score },
            Some(best) => Self::Kept { best },
        }
    }

    /// The best score after the merge
    #[must_use]
    pub const fn best(self) -> u32 {
        match self {
            Self::Created { score } | Self::Improved { score, .. } => score,
            Self::Kept { best } => best,
        }
    }
}

impl fmt::Display for ScoreAck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Created { score } => write!(f, "New result saved ({score})"),
            Self::Improved { previous, score } => {
                write!(f, "New best score! {previous} → {score}")
            }
            Self::Kept { best } => write!(f, "Best score unchanged ({best})"),
        }
    }
}

/// Receives the final score of a session
pub trait ScoreSink {
    /// Submit `score` for `wordle_id`
    ///
    /// # Errors
    /// Returns a [`ScoreError`] if the score could not be stored.
    fn submit_score(&mut self, wordle_id: u64, score: u32) -> Result<ScoreAck, ScoreError>;
}

impl<T: ScoreSink + ?Sized> ScoreSink for &mut T {
    fn submit_score(&mut self, wordle_id: u64, score: u32) -> Result<ScoreAck, ScoreError> {
        (**self).submit_score(wordle_id, score)
    }
}

impl<T: ScoreSink + ?Sized> ScoreSink for Box<T> {
    fn submit_score(&mut self, wordle_id: u64, score: u32) -> Result<ScoreAck, ScoreError> {
        (**self).submit_score(wordle_id, score)
    }
}

/// In-memory best scores, for simulations and tests
#[derive(Debug, Clone, Default)]
pub struct MemoryScores {
    best: FxHashMap<u64, u32>,
    submissions: Vec<(u64, u32)>,
}

impl MemoryScores {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn best(&self, wordle_id: u64) -> Option<u32> {
        self.best.get(&wordle_id).copied()
    }

    /// Every submission in order
    #[must_use]
    pub fn submissions(&self) -> &[(u64, u32)] {
        &self.submissions
    }
}

impl ScoreSink for MemoryScores {
    fn submit_score(&mut self, wordle_id: u64, score: u32) -> Result<ScoreAck, ScoreError> {
        self.submissions.push((wordle_id, score));
        let ack = ScoreAck::merge(self.best(wordle_id), score);
        self.best.insert(wordle_id, ack.best());
        Ok(ack)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_keeps_maximum() {
        assert_eq!(ScoreAck::merge(None, 2), ScoreAck::Created { score: 2 });
        assert_eq!(
            ScoreAck::merge(Some(2), 3),
            ScoreAck::Improved {
                previous: 2,
                score: 3
            }
        );
        assert_eq!(ScoreAck::merge(Some(3), 3), ScoreAck::Kept { best: 3 });
        assert_eq!(ScoreAck::merge(Some(3), 1).best(), 3);
    }

    #[test]
    fn memory_scores_track_best_and_history() {
        let mut scores = MemoryScores::new();
        scores.submit_score(1, 2).unwrap();
        scores.submit_score(1, 1).unwrap();
        scores.submit_score(2, 0).unwrap();

        assert_eq!(scores.best(1), Some(2));
        assert_eq!(scores.best(2), Some(0));
        assert_eq!(scores.best(3), None);
        assert_eq!(scores.submissions(), &[(1, 2), (1, 1), (2, 0)]);
    }

    #[test]
    fn sink_through_mutable_reference() {
        fn submit(mut sink: impl ScoreSink) -> ScoreAck {
            sink.submit_score(5, 4).unwrap()
        }

        let mut scores = MemoryScores::new();
        assert_eq!(submit(&mut scores), ScoreAck::Created { score: 4 });
        assert_eq!(scores.best(5), Some(4));
    }
}
