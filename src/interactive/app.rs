//! TUI application state and logic

use crate::content::QuestionKind;
use crate::game::{
    Advance, ChallengeProgress, GuessProgress, GuessResult, HintRequest, HintResponse, Phase,
    SessionController, SessionReport, Submission, WordOutcome,
};
use crate::scores::ScoreSink;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};

/// How often the loop wakes up to check the settle timer
const TICK: Duration = Duration::from_millis(100);

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Application state
pub struct App<S: ScoreSink> {
    pub session: SessionController<S>,
    pub messages: Vec<Message>,
    /// Checked options of the open question
    pub selection: Vec<bool>,
    pub cursor: usize,
    /// Hint text revealed for the current word
    pub hint: Option<String>,
    pub settle_deadline: Option<Instant>,
    pub report: Option<SessionReport>,
    pub should_quit: bool,
}

impl<S: ScoreSink> App<S> {
    #[must_use]
    pub fn new(session: SessionController<S>) -> Self {
        let mut app = Self {
            session,
            messages: Vec::new(),
            selection: Vec::new(),
            cursor: 0,
            hint: None,
            settle_deadline: None,
            report: None,
            should_quit: false,
        };
        app.add_message(
            "Welcome! Matching letters must be earned by answering quiz questions.",
            MessageStyle::Info,
        );
        app.add_message("Type a guess and press Enter. Tab asks for a hint.", MessageStyle::Info);
        app
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 6 messages
        if self.messages.len() > 6 {
            self.messages.remove(0);
        }
    }

    /// Handle one key press
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.session.phase() {
            Phase::AwaitingGuess => self.handle_guess_key(key.code, now),
            Phase::QuizPending => self.handle_quiz_key(key.code, now),
            // Input is blocked until the next word loads
            Phase::Settling => {}
            Phase::Complete => {
                if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc | KeyCode::Enter) {
                    self.should_quit = true;
                }
            }
        }
    }

    fn handle_guess_key(&mut self, code: KeyCode, now: Instant) {
        match code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab | KeyCode::Char('?') => self.request_hint(),
            KeyCode::Char(c) => {
                if let Err(e) = self.session.type_letter(c) {
                    self.add_message(&e.to_string(), MessageStyle::Error);
                }
            }
            KeyCode::Backspace => {
                if let Err(e) = self.session.delete_letter() {
                    self.add_message(&e.to_string(), MessageStyle::Error);
                }
            }
            KeyCode::Enter => match self.session.submit_guess() {
                Ok(GuessProgress::Applied(result)) => self.apply_result(&result, now),
                Ok(GuessProgress::Challenge(_)) => {
                    self.open_question();
                    self.add_message("Answer the question to see your colors!", MessageStyle::Info);
                }
                Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
            },
            _ => {}
        }
    }

    fn handle_quiz_key(&mut self, code: KeyCode, now: Instant) {
        match code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Up => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Down => {
                if self.cursor + 1 < self.selection.len() {
                    self.cursor += 1;
                }
            }
            KeyCode::Char(' ') => self.toggle(self.cursor),
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(index) = c.to_digit(10).and_then(|d| (d as usize).checked_sub(1)) {
                    self.cursor = index.min(self.selection.len().saturating_sub(1));
                    self.toggle(index);
                }
            }
            KeyCode::Enter => self.submit_answer(now),
            _ => {}
        }
    }

    /// Check or uncheck an option; single-choice questions keep one checked
    pub fn toggle(&mut self, index: usize) {
        if index >= self.selection.len() {
            return;
        }
        let single = self
            .session
            .open_challenge()
            .is_none_or(|c| c.question.kind == QuestionKind::Single);
        if single {
            let checked = !self.selection[index];
            self.selection.fill(false);
            self.selection[index] = checked;
        } else {
            self.selection[index] = !self.selection[index];
        }
    }

    fn open_question(&mut self) {
        let options = self
            .session
            .open_challenge()
            .map_or(0, |c| c.question.options.len());
        self.selection = vec![false; options];
        self.cursor = 0;
    }

    fn submit_answer(&mut self, now: Instant) {
        let indices: Vec<usize> = self
            .selection
            .iter()
            .enumerate()
            .filter_map(|(i, &checked)| checked.then_some(i))
            .collect();

        match self.session.answer_by_index(&indices) {
            Ok(ChallengeProgress::Next(_)) => {
                self.open_question();
                self.add_message("Next question...", MessageStyle::Info);
            }
            Ok(ChallengeProgress::Guess(result)) => {
                self.selection.clear();
                self.apply_result(&result, now);
            }
            Ok(ChallengeProgress::Hint(response)) => {
                self.selection.clear();
                match response {
                    HintResponse::Revealed(text) => {
                        self.add_message("Hint unlocked!", MessageStyle::Success);
                        self.hint = Some(text);
                    }
                    HintResponse::Denied => {
                        self.add_message("Wrong answer, no hint this time.", MessageStyle::Error);
                    }
                    HintResponse::Unavailable => {
                        self.add_message("This word has no hint.", MessageStyle::Info);
                    }
                }
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    fn request_hint(&mut self) {
        match self.session.request_hint() {
            Ok(HintRequest::Revealed(text)) => self.hint = Some(text),
            Ok(HintRequest::Unavailable) => {
                self.add_message("This word has no hint.", MessageStyle::Info);
            }
            Ok(HintRequest::Challenge(_)) => {
                self.open_question();
                self.add_message("Answer correctly to unlock the hint.", MessageStyle::Info);
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    fn apply_result(&mut self, result: &GuessResult, now: Instant) {
        if result.questions_asked > 0 && result.correct_answers < result.questions_asked {
            self.add_message(
                &format!(
                    "{}/{} answers correct, some letters stay hidden",
                    result.correct_answers, result.questions_asked
                ),
                MessageStyle::Error,
            );
        }

        match &result.outcome {
            Some(WordOutcome::Won { word, attempts_used }) => {
                self.add_message(
                    &format!("🎉 Correct! {word} in {attempts_used} attempt(s)"),
                    MessageStyle::Success,
                );
                self.settle_deadline = Some(now + self.session.config().settle_delay());
            }
            Some(WordOutcome::Lost { word }) => {
                self.add_message(&format!("Out of attempts. The word was {word}"), MessageStyle::Error);
                self.settle_deadline = Some(now + self.session.config().settle_delay());
            }
            None => {}
        }
    }

    /// Load the next word once the settle delay has passed
    pub fn tick(&mut self, now: Instant) {
        let Some(deadline) = self.settle_deadline else {
            return;
        };
        if now < deadline {
            return;
        }
        self.settle_deadline = None;

        match self.session.advance() {
            Ok(Advance::NextWord { number, total }) => {
                self.hint = None;
                self.add_message(&format!("Word {number} of {total}"), MessageStyle::Info);
            }
            Ok(Advance::Complete(report)) => {
                let style = match report.submission {
                    Submission::Saved(_) => MessageStyle::Success,
                    Submission::Failed(_) => MessageStyle::Error,
                };
                let text = match &report.submission {
                    Submission::Saved(ack) => ack.to_string(),
                    Submission::Failed(reason) => format!("Score could not be saved: {reason}"),
                };
                self.add_message(&text, style);
                self.report = Some(report);
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }
}

/// Run the TUI application
///
/// Returns the session report if the session was played to the end.
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: ScoreSink>(app: App<S>) -> Result<Option<SessionReport>> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend, S: ScoreSink>(
    terminal: &mut Terminal<B>,
    mut app: App<S>,
) -> Result<Option<SessionReport>> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if event::poll(TICK)?
            && let Event::Key(key) = event::read()?
            // Only process key press events (fixes Windows double-input bug)
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key, Instant::now());
        }
        app.tick(Instant::now());

        if app.should_quit {
            break;
        }
    }

    Ok(app.report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SessionConfig;
    use crate::content::{Difficulty, Question, WordEntry, WordleContent};
    use crate::error::InputError;
    use crate::scores::MemoryScores;

    fn app(words: &[&str]) -> App<MemoryScores> {
        let content = WordleContent {
            id: 9,
            name: "Keys".to_string(),
            difficulty: Difficulty::Low,
            words: words
                .iter()
                .map(|w| WordEntry {
                    word: (*w).to_string(),
                    hint: Some("a greeting".to_string()),
                })
                .collect(),
            questions: vec![Question {
                id: 1,
                prompt: "Pick the even ones".to_string(),
                options: vec!["2".to_string(), "3".to_string(), "4".to_string()],
                correct_answers: vec!["2".to_string(), "4".to_string()],
                kind: QuestionKind::Multiple,
            }],
            settings: None,
        };
        let session =
            SessionController::start(content, SessionConfig::default(), MemoryScores::new()).unwrap();
        App::new(session)
    }

    fn press(app: &mut App<MemoryScores>, code: KeyCode, now: Instant) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE), now);
    }

    fn type_str(app: &mut App<MemoryScores>, text: &str, now: Instant) {
        for c in text.chars() {
            press(app, KeyCode::Char(c), now);
        }
    }

    #[test]
    fn typing_builds_the_guess() {
        let now = Instant::now();
        let mut app = app(&["hola"]);
        type_str(&mut app, "hol", now);
        press(&mut app, KeyCode::Backspace, now);
        assert_eq!(app.session.current_guess(), &['H', 'O']);

        press(&mut app, KeyCode::Enter, now);
        assert_eq!(app.session.phase(), Phase::AwaitingGuess);
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);
    }

    #[test]
    fn delete_on_empty_guess_shows_notice() {
        let now = Instant::now();
        let mut app = app(&["hola"]);
        let before = app.messages.len();
        press(&mut app, KeyCode::Backspace, now);

        assert_eq!(app.messages.len(), before + 1);
        let notice = app.messages.last().unwrap();
        assert_eq!(notice.style, MessageStyle::Error);
        assert_eq!(notice.text, InputError::EmptyBuffer.to_string());
    }

    #[test]
    fn quiz_selection_and_settle() {
        let start = Instant::now();
        let mut app = app(&["hola", "chau"]);
        type_str(&mut app, "hola", start);
        press(&mut app, KeyCode::Enter, start);
        assert_eq!(app.session.phase(), Phase::QuizPending);
        assert_eq!(app.selection, vec![false, false, false]);

        // Letters are ignored while the question is open
        type_str(&mut app, "x", start);
        assert_eq!(app.session.current_guess(), &['H', 'O', 'L', 'A']);

        press(&mut app, KeyCode::Char('1'), start);
        press(&mut app, KeyCode::Down, start);
        press(&mut app, KeyCode::Down, start);
        press(&mut app, KeyCode::Char(' '), start);
        assert_eq!(app.selection, vec![true, false, true]);

        press(&mut app, KeyCode::Enter, start);
        assert_eq!(app.session.phase(), Phase::Settling);
        assert_eq!(app.session.score(), 1);

        app.tick(start + Duration::from_millis(500));
        assert_eq!(app.session.phase(), Phase::Settling);
        app.tick(start + Duration::from_millis(2000));
        assert_eq!(app.session.phase(), Phase::AwaitingGuess);
        assert_eq!(app.session.word_index(), 2);
    }

    #[test]
    fn empty_answer_keeps_question_open() {
        let now = Instant::now();
        let mut app = app(&["hola"]);
        press(&mut app, KeyCode::Tab, now);
        assert_eq!(app.session.phase(), Phase::QuizPending);
        press(&mut app, KeyCode::Enter, now);
        assert_eq!(app.session.phase(), Phase::QuizPending);

        press(&mut app, KeyCode::Char('1'), now);
        press(&mut app, KeyCode::Char('3'), now);
        press(&mut app, KeyCode::Enter, now);
        assert_eq!(app.hint.as_deref(), Some("a greeting"));
    }

    #[test]
    fn session_end_produces_report() {
        let now = Instant::now();
        let mut app = app(&["hola"]);
        for _ in 0..5 {
            type_str(&mut app, "hola", now);
            press(&mut app, KeyCode::Enter, now);
            press(&mut app, KeyCode::Char('2'), now);
            press(&mut app, KeyCode::Enter, now);
        }
        assert_eq!(app.session.phase(), Phase::Settling);
        assert_eq!(app.session.board().len(), 5);
        app.tick(now + Duration::from_secs(3));

        let report = app.report.as_ref().unwrap();
        assert_eq!(report.score, 0);
        assert_eq!(app.session.sink().submissions(), &[(9, 0)]);

        press(&mut app, KeyCode::Char('q'), now);
        assert!(app.should_quit);
    }
}
