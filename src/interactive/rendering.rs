//! TUI rendering with ratatui
//!
//! Board, keyboard, messages and the quiz question overlay.

use super::app::{App, MessageStyle};
use crate::core::LetterColor;
use crate::game::{ChallengePurpose, Phase, WordOutcome};
use crate::output::formatters::KEYBOARD_ROWS;
use crate::scores::ScoreSink;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui<S: ScoreSink>(f: &mut Frame, app: &App<S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Board and keyboard
            Constraint::Percentage(45), // Progress, hint, messages
        ])
        .split(chunks[1]);

    render_play_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);
    render_status(f, app, chunks[2]);

    match app.session.phase() {
        Phase::QuizPending => render_question(f, app),
        Phase::Complete => render_summary(f, app),
        Phase::AwaitingGuess | Phase::Settling => {}
    }
}

fn render_header<S: ScoreSink>(f: &mut Frame, app: &App<S>, area: Rect) {
    let title = format!(
        "🧠 QUIZDLE - {} ({} difficulty)",
        app.session.wordle_name(),
        app.session.difficulty()
    );
    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn tile_style(color: LetterColor) -> Style {
    let style = match color {
        LetterColor::Green => Style::default().fg(Color::Black).bg(Color::Green),
        LetterColor::Yellow => Style::default().fg(Color::Black).bg(Color::Yellow),
        LetterColor::Grey => Style::default().fg(Color::White).bg(Color::DarkGray),
        LetterColor::None => Style::default().fg(Color::White),
    };
    style.add_modifier(Modifier::BOLD)
}

fn render_play_panel<S: ScoreSink>(f: &mut Frame, app: &App<S>, area: Rect) {
    let rows = u16::try_from(app.session.max_guesses()).unwrap_or(u16::MAX);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(rows.saturating_add(2)), // Board
            Constraint::Min(5),           // Keyboard
        ])
        .split(area);

    render_board(f, app, chunks[0]);
    render_keyboard(f, app, chunks[1]);
}

fn render_board<S: ScoreSink>(f: &mut Frame, app: &App<S>, area: Rect) {
    let session = &app.session;
    let length = session.word_length();
    let mut lines: Vec<Line> = session
        .board()
        .iter()
        .map(|row| {
            Line::from(
                row.guess
                    .chars()
                    .iter()
                    .zip(row.colors.colors())
                    .map(|(&c, &color)| Span::styled(format!(" {c} "), tile_style(color)))
                    .collect::<Vec<_>>(),
            )
        })
        .collect();

    if session.phase() == Phase::AwaitingGuess {
        let typed = session.current_guess();
        let cells = (0..length)
            .map(|i| match typed.get(i) {
                Some(c) => Span::styled(format!("[{c}]"), Style::default().fg(Color::Yellow)),
                None => Span::styled("[ ]", Style::default().fg(Color::DarkGray)),
            })
            .collect::<Vec<_>>();
        lines.push(Line::from(cells));
    }

    // Pad with empty rows, but never past what the board can show
    let padded = usize::try_from(session.max_guesses())
        .unwrap_or(usize::MAX)
        .min(usize::from(area.height));
    while lines.len() < padded {
        lines.push(Line::from(Span::styled(
            " · ".repeat(length),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let title = format!(
        " Word {}/{} | {} letters ",
        session.word_index(),
        session.words_total(),
        length
    );
    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_keyboard<S: ScoreSink>(f: &mut Frame, app: &App<S>, area: Rect) {
    let keyboard = app.session.keyboard();
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            Line::from(
                row.chars()
                    .map(|c| Span::styled(format!(" {c} "), tile_style(keyboard.color_of(c))))
                    .collect::<Vec<_>>(),
            )
        })
        .collect();

    let widget = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL),
    );
    f.render_widget(widget, area);
}

fn render_info_panel<S: ScoreSink>(f: &mut Frame, app: &App<S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Attempts gauge
            Constraint::Length(4), // Hint
            Constraint::Min(5),    // Messages
        ])
        .split(area);

    render_attempts(f, app, chunks[0]);
    render_hint(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_attempts<S: ScoreSink>(f: &mut Frame, app: &App<S>, area: Rect) {
    let remaining = app.session.attempts_remaining();
    let max = u64::from(app.session.max_guesses().max(1));
    let percent = u16::try_from((u64::from(remaining) * 100 / max).min(100)).unwrap_or(100);

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Attempts ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(format!("{remaining}/{max} left"));

    f.render_widget(gauge, area);
}

fn render_hint<S: ScoreSink>(f: &mut Frame, app: &App<S>, area: Rect) {
    let (text, style) = match &app.hint {
        Some(hint) => (hint.clone(), Style::default().fg(Color::Yellow)),
        None if app.session.has_hint() => (
            "Press Tab to earn the hint".to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        None => (
            "No hint for this word".to_string(),
            Style::default().fg(Color::DarkGray),
        ),
    };

    let hint = Paragraph::new(text)
        .style(style)
        .wrap(Wrap { trim: true })
        .block(Block::default().title(" 💡 Hint ").borders(Borders::ALL));
    f.render_widget(hint, area);
}

fn render_messages<S: ScoreSink>(f: &mut Frame, app: &App<S>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status<S: ScoreSink>(f: &mut Frame, app: &App<S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(50),
        ])
        .split(area);

    let phase = match app.session.phase() {
        Phase::AwaitingGuess => "Your guess",
        Phase::QuizPending => "Quiz!",
        Phase::Settling => match app.session.settling_outcome() {
            Some(WordOutcome::Won { .. }) => "Solved!",
            _ => "Word over",
        },
        Phase::Complete => "Finished",
    };
    f.render_widget(Paragraph::new(phase).alignment(Alignment::Center), chunks[0]);

    let score = format!("Score: {}", app.session.score());
    f.render_widget(Paragraph::new(score).alignment(Alignment::Center), chunks[1]);

    let help_text = match app.session.phase() {
        Phase::AwaitingGuess => "Enter: Submit | Tab: Hint | Esc: Quit",
        Phase::QuizPending => "1-9/Space: Select | ↑↓: Move | Enter: Answer",
        Phase::Settling => "Next word coming up...",
        Phase::Complete => "q: Quit",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

/// Rectangle of the given size centered in `area`
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [rect] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);
    rect
}

fn render_question<S: ScoreSink>(f: &mut Frame, app: &App<S>) {
    let Some(challenge) = app.session.open_challenge() else {
        return;
    };
    let question = &challenge.question;

    let purpose = match challenge.purpose {
        ChallengePurpose::Guess => "to keep this guess's letters".to_string(),
        ChallengePurpose::Cell(i) => format!("to keep letter {}", i + 1),
        ChallengePurpose::WholeWord => "to confirm the word".to_string(),
        ChallengePurpose::Hint => "to unlock the hint".to_string(),
    };

    let mut lines = vec![
        Line::from(Span::styled(
            question.prompt.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    for (i, option) in question.options.iter().enumerate() {
        let checked = app.selection.get(i).copied().unwrap_or(false);
        let mark = if checked { "[x]" } else { "[ ]" };
        let style = if i == app.cursor {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        lines.push(Line::from(Span::styled(format!("{mark} {}. {option}", i + 1), style)));
    }

    let title = format!(
        " Question {}/{} {} ",
        challenge.number, challenge.total, purpose
    );
    let height = u16::try_from(question.options.len()).unwrap_or(u16::MAX).saturating_add(5);
    let area = centered(f.area(), 64, height);
    let popup = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(Clear, area);
    f.render_widget(popup, area);
}

fn render_summary<S: ScoreSink>(f: &mut Frame, app: &App<S>) {
    let Some(report) = app.session.report() else {
        return;
    };

    let mut lines = vec![
        Line::from(Span::styled(
            format!("Score: {} / {}", report.score, report.words.len()),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    for word in &report.words {
        let (status, color) = if word.solved {
            (format!("solved in {}", word.guesses), Color::Green)
        } else {
            ("not solved".to_string(), Color::Red)
        };
        lines.push(Line::from(vec![
            Span::raw(format!("{:<12}", word.word)),
            Span::styled(status, Style::default().fg(color)),
        ]));
    }

    let height = u16::try_from(report.words.len()).unwrap_or(u16::MAX).saturating_add(5);
    let area = centered(f.area(), 44, height);
    let popup = Paragraph::new(lines).block(
        Block::default()
            .title(" 🎉 Session complete ")
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .style(Style::default().fg(Color::Green)),
    );
    f.render_widget(Clear, area);
    f.render_widget(popup, area);
}
