//! Non-repeating question draws
//!
//! Questions are drawn without replacement from a shuffled copy of the bank.
//! When the copy runs out it is refilled with a fresh shuffle, so a question can
//! only repeat after every other question has been asked once.

use crate::content::Question;
use crate::error::ContentError;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

#[derive(Debug, Clone)]
pub struct QuestionSampler {
    pool: Vec<Question>,
    remaining: Vec<Question>,
    rng: StdRng,
}

impl QuestionSampler {
    /// Create a sampler over `pool`, seeded for reproducible draws if `seed` is set
    ///
    /// # Errors
    /// Returns [`ContentError::NoQuestions`] for an empty pool.
    pub fn new(pool: Vec<Question>, seed: Option<u64>) -> Result<Self, ContentError> {
        if pool.is_empty() {
            return Err(ContentError::NoQuestions);
        }

        let rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        let mut sampler = Self {
            pool,
            remaining: Vec::new(),
            rng,
        };
        sampler.reset();
        Ok(sampler)
    }

    /// Draw the next question, reshuffling the full bank first if the cycle is spent
    pub fn draw(&mut self) -> Question {
        if self.remaining.is_empty() {
            tracing::debug!(questions = self.pool.len(), "question cycle exhausted, reshuffling");
            self.reset();
        }
        // The pool is never empty, so a refilled cycle always has an item
        self.remaining
            .pop()
            .unwrap_or_else(|| self.pool[0].clone())
    }

    /// Start a fresh shuffled cycle over the whole bank
    pub fn reset(&mut self) {
        self.remaining.clone_from(&self.pool);
        self.remaining.shuffle(&mut self.rng);
    }

    /// Questions left before the next reshuffle
    #[must_use]
    pub fn remaining_in_cycle(&self) -> usize {
        self.remaining.len()
    }

    #[must_use]
    pub fn pool_size(&self) -> usize {
        self.pool.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::QuestionKind;
    use rustc_hash::FxHashSet;

    fn bank(n: u64) -> Vec<Question> {
        (1..=n)
            .map(|id| Question {
                id,
                prompt: format!("Question {id}"),
                options: vec!["yes".to_string(), "no".to_string()],
                correct_answers: vec!["yes".to_string()],
                kind: QuestionKind::Single,
            })
            .collect()
    }

    #[test]
    fn one_cycle_is_a_permutation() {
        for seed in 0..20 {
            let mut sampler = QuestionSampler::new(bank(7), Some(seed)).unwrap();
            let ids: FxHashSet<u64> = (0..7).map(|_| sampler.draw().id).collect();
            assert_eq!(ids.len(), 7, "seed {seed} repeated a question within a cycle");
            assert_eq!(sampler.remaining_in_cycle(), 0);
        }
    }

    #[test]
    fn reshuffles_after_exhaustion() {
        let mut sampler = QuestionSampler::new(bank(3), Some(1)).unwrap();
        for _ in 0..3 {
            sampler.draw();
        }
        // Second cycle is again a full permutation
        let ids: FxHashSet<u64> = (0..3).map(|_| sampler.draw().id).collect();
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn reset_refills_the_cycle() {
        let mut sampler = QuestionSampler::new(bank(4), Some(2)).unwrap();
        sampler.draw();
        sampler.draw();
        assert_eq!(sampler.remaining_in_cycle(), 2);
        sampler.reset();
        assert_eq!(sampler.remaining_in_cycle(), 4);
        assert_eq!(sampler.pool_size(), 4);
    }

    #[test]
    fn single_question_always_drawn() {
        let mut sampler = QuestionSampler::new(bank(1), None).unwrap();
        for _ in 0..5 {
            assert_eq!(sampler.draw().id, 1);
        }
    }

    #[test]
    fn same_seed_same_order() {
        let mut a = QuestionSampler::new(bank(10), Some(99)).unwrap();
        let mut b = QuestionSampler::new(bank(10), Some(99)).unwrap();
        for _ in 0..25 {
            assert_eq!(a.draw().id, b.draw().id);
        }
    }

    #[test]
    fn empty_bank_is_rejected() {
        assert!(matches!(
            QuestionSampler::new(Vec::new(), None),
            Err(ContentError::NoQuestions)
        ));
    }
}
