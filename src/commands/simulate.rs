//! Simulation command
//!
//! Plays many sessions of one wordle with a scripted student and aggregates the
//! results. The student answers each quiz question correctly with a fixed
//! probability and only guesses words from the wordle's own list that agree with
//! the feedback it was shown.

use crate::config::SessionConfig;
use crate::content::WordleContent;
use crate::core::{Feedback, LetterColor, Word};
use crate::game::{BoardRow, Challenge, Phase, SessionController};
use crate::scores::MemoryScores;
use anyhow::{Context, Result, anyhow};
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// How a simulation is run
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    pub sessions: usize,
    /// Probability of answering a question correctly, clamped to 0..=1
    pub accuracy: f64,
    /// Ask for each word's hint before the first guess
    pub use_hints: bool,
    pub show_progress: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            sessions: 100,
            accuracy: 0.8,
            use_hints: true,
            show_progress: true,
        }
    }
}

/// Result of one simulated session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionRun {
    pub score: u32,
    pub words: usize,
    pub solved_guesses: u32,
    pub questions_asked: usize,
    pub questions_correct: usize,
    pub hints_unlocked: usize,
}

/// Aggregate over all simulated sessions
#[derive(Debug)]
pub struct SimulationStatistics {
    pub wordle_name: String,
    pub sessions: usize,
    pub words_per_session: usize,
    pub accuracy: f64,
    pub score_distribution: FxHashMap<u32, usize>,
    pub average_score: f64,
    pub min_score: u32,
    pub max_score: u32,
    /// Share of words solved over all sessions
    pub solve_rate: f64,
    /// Guesses per solved word
    pub average_guesses: f64,
    pub questions_asked: usize,
    pub questions_correct: usize,
    pub hints_unlocked: usize,
    pub total_time: Duration,
}

impl SimulationStatistics {
    fn from_runs(content: &WordleContent, sim: &SimulationConfig, runs: &[SessionRun], total_time: Duration) -> Self {
        let mut score_distribution: FxHashMap<u32, usize> = FxHashMap::default();
        for run in runs {
            *score_distribution.entry(run.score).or_insert(0) += 1;
        }

        let total_score: u32 = runs.iter().map(|r| r.score).sum();
        let total_words: usize = runs.iter().map(|r| r.words).sum();
        let solved_guesses: u32 = runs.iter().map(|r| r.solved_guesses).sum();
        let ratio = |num: f64, den: f64| if den > 0.0 { num / den } else { 0.0 };

        Self {
            wordle_name: content.name.clone(),
            sessions: runs.len(),
            words_per_session: content.words.len(),
            accuracy: sim.accuracy,
            average_score: ratio(f64::from(total_score), runs.len() as f64),
            min_score: runs.iter().map(|r| r.score).min().unwrap_or(0),
            max_score: runs.iter().map(|r| r.score).max().unwrap_or(0),
            solve_rate: ratio(f64::from(total_score), total_words as f64),
            average_guesses: ratio(f64::from(solved_guesses), f64::from(total_score)),
            questions_asked: runs.iter().map(|r| r.questions_asked).sum(),
            questions_correct: runs.iter().map(|r| r.questions_correct).sum(),
            hints_unlocked: runs.iter().map(|r| r.hints_unlocked).sum(),
            score_distribution,
            total_time,
        }
    }
}

/// Scripted student
struct Student {
    rng: StdRng,
    accuracy: f64,
    vocabulary: Vec<Word>,
}

impl Student {
    fn new(vocabulary: Vec<Word>, accuracy: f64, seed: Option<u64>) -> Self {
        Self {
            rng: seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64),
            accuracy: accuracy.clamp(0.0, 1.0),
            vocabulary,
        }
    }

    /// Pick an answer set, correct with probability `accuracy`
    fn answer(&mut self, challenge: &Challenge) -> Vec<String> {
        let question = &challenge.question;
        if self.rng.random_bool(self.accuracy) {
            return question.correct_answers.clone();
        }

        let wrong: Vec<&String> = question
            .options
            .iter()
            .filter(|o| !question.correct_answers.contains(o))
            .collect();
        match wrong.choose(&mut self.rng) {
            Some(option) => vec![(*option).clone()],
            // Every option is correct; a single pick is still incomplete
            None => question.options.iter().take(1).cloned().collect(),
        }
    }

    /// Choose a word of `length` letters agreeing with every board row
    fn guess(&mut self, length: usize, board: &[BoardRow]) -> Option<Word> {
        let fitting: Vec<&Word> = self
            .vocabulary
            .iter()
            .filter(|w| w.len() == length)
            .collect();
        let candidates: Vec<&Word> = fitting
            .iter()
            .copied()
            .filter(|w| board.iter().all(|row| agrees_with(w, row)))
            .collect();

        candidates
            .choose(&mut self.rng)
            .or_else(|| fitting.first())
            .map(|w| (*w).clone())
    }
}

/// Whether `candidate` could be the target given one shown row
///
/// Forfeited cells carry no information. A row with any shown color cannot be
/// the target itself, since a correct word is either won or fully blanked.
fn agrees_with(candidate: &Word, row: &BoardRow) -> bool {
    let shown = row.colors.colors();
    if candidate == &row.guess {
        return shown.iter().all(|&c| c == LetterColor::None);
    }
    let Ok(expected) = Feedback::calculate(&row.guess, candidate) else {
        return false;
    };
    shown
        .iter()
        .zip(expected.colors())
        .all(|(&s, &e)| s == LetterColor::None || s == e)
}

/// Play one complete session with a scripted student
///
/// # Errors
/// Returns an error if the content is invalid or the session rejects input the
/// student should never send.
pub fn play_scripted_session(
    content: WordleContent,
    config: SessionConfig,
    accuracy: f64,
    use_hints: bool,
) -> Result<SessionRun> {
    let vocabulary = content
        .validate()?
        .into_iter()
        .map(|t| t.word)
        .collect();
    let mut student = Student::new(vocabulary, accuracy, config.seed);
    let mut session = SessionController::start(content, config, MemoryScores::new())?;
    let mut run = SessionRun::default();
    let mut hint_asked_for = 0;

    loop {
        match session.phase() {
            Phase::AwaitingGuess => {
                if use_hints && session.has_hint() && hint_asked_for != session.word_index() {
                    hint_asked_for = session.word_index();
                    session.request_hint()?;
                    continue;
                }
                let guess = student
                    .guess(session.word_length(), session.board())
                    .ok_or_else(|| anyhow!("no word of length {}", session.word_length()))?;
                for letter in guess.chars() {
                    session.type_letter(*letter)?;
                }
                session.submit_guess()?;
            }
            Phase::QuizPending => {
                let challenge = session
                    .open_challenge()
                    .cloned()
                    .context("quiz pending without an open question")?;
                let answer = student.answer(&challenge);
                run.questions_asked += 1;
                if challenge.is_answered_by(&answer) {
                    run.questions_correct += 1;
                }
                session.answer_challenge(&answer)?;
            }
            Phase::Settling => {
                session.advance()?;
            }
            Phase::Complete => break,
        }
    }

    let records = session.records();
    run.score = session.score();
    run.words = records.len();
    run.solved_guesses = records.iter().filter(|r| r.solved).map(|r| r.guesses).sum();
    run.hints_unlocked = records.iter().filter(|r| r.hint_unlocked).count();
    Ok(run)
}

/// Run `sim.sessions` scripted sessions in parallel
///
/// With a seed in `config`, session `i` uses seed + i and the result is
/// reproducible.
///
/// # Errors
/// Returns the first session error (invalid content fails before any session
/// runs).
pub fn run_simulation(
    content: &WordleContent,
    config: &SessionConfig,
    sim: &SimulationConfig,
) -> Result<SimulationStatistics> {
    content.validate()?;

    let pb = if sim.show_progress {
        let pb = ProgressBar::new(sim.sessions as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")?
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    let runs = (0..sim.sessions)
        .into_par_iter()
        .map(|i| {
            let config = SessionConfig {
                seed: config.seed.map(|s| s.wrapping_add(i as u64)),
                ..config.clone()
            };
            let run = play_scripted_session(content.clone(), config, sim.accuracy, sim.use_hints);
            pb.inc(1);
            run
        })
        .collect::<Result<Vec<_>>>()?;
    pb.finish_with_message("Complete!");

    let stats = SimulationStatistics::from_runs(content, sim, &runs, start.elapsed());
    tracing::info!(
        sessions = stats.sessions,
        average_score = stats.average_score,
        "simulation finished"
    );
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::demo_wordle;

    fn seeded() -> SessionConfig {
        SessionConfig {
            seed: Some(42),
            ..SessionConfig::default()
        }
    }

    fn quiet(sessions: usize, accuracy: f64) -> SimulationConfig {
        SimulationConfig {
            sessions,
            accuracy,
            use_hints: true,
            show_progress: false,
        }
    }

    #[test]
    fn perfect_student_solves_every_word() {
        // Each guess removes at least itself from four candidates
        let run = play_scripted_session(demo_wordle().unwrap(), seeded(), 1.0, true).unwrap();
        assert_eq!(run.words, 4);
        assert_eq!(run.score, 4);
        assert_eq!(run.questions_asked, run.questions_correct);
        assert_eq!(run.hints_unlocked, 3);
    }

    #[test]
    fn hopeless_student_scores_zero() {
        let run = play_scripted_session(demo_wordle().unwrap(), seeded(), 0.0, false).unwrap();
        assert_eq!(run.score, 0);
        assert_eq!(run.words, 4);
        assert_eq!(run.questions_correct, 0);
        assert_eq!(run.hints_unlocked, 0);
    }

    #[test]
    fn statistics_add_up() {
        let content = demo_wordle().unwrap();
        let stats = run_simulation(&content, &seeded(), &quiet(20, 0.5)).unwrap();

        assert_eq!(stats.sessions, 20);
        assert_eq!(stats.words_per_session, 4);
        assert_eq!(stats.score_distribution.values().sum::<usize>(), 20);
        assert!(stats.max_score <= 4);
        assert!(stats.min_score <= stats.max_score);
        assert!((0.0..=1.0).contains(&stats.solve_rate));
        assert!(stats.questions_correct <= stats.questions_asked);
    }

    #[test]
    fn seeded_simulation_is_reproducible() {
        let content = demo_wordle().unwrap();
        let a = run_simulation(&content, &seeded(), &quiet(8, 0.6)).unwrap();
        let b = run_simulation(&content, &seeded(), &quiet(8, 0.6)).unwrap();
        assert_eq!(a.score_distribution, b.score_distribution);
        assert_eq!(a.questions_asked, b.questions_asked);
    }

    #[test]
    fn agreement_ignores_forfeited_cells() {
        let row = BoardRow {
            guess: Word::new("comet").unwrap(),
            colors: "G....".parse().unwrap(),
        };
        assert!(agrees_with(&Word::new("crane").unwrap(), &row));
        assert!(!agrees_with(&Word::new("orbit").unwrap(), &row));
        assert!(!agrees_with(&Word::new("comet").unwrap(), &row));
    }

    #[test]
    fn invalid_content_fails_fast() {
        let mut content = demo_wordle().unwrap();
        content.questions.clear();
        assert!(run_simulation(&content, &seeded(), &quiet(3, 1.0)).is_err());
    }
}
