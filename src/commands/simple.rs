//! Simple interactive CLI mode
//!
//! Line-based play without TUI. A whole guess is entered per line; quiz
//! questions are answered by option numbers.

use crate::game::{
    Advance, Challenge, ChallengeProgress, GuessProgress, GuessResult, HintRequest, HintResponse,
    Phase, SessionController, SessionReport, WordOutcome,
};
use crate::output::formatters::{colored_row, keyboard_line};
use crate::scores::ScoreSink;
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{BufRead, Write};

/// Run a session reading commands from `input` and printing to `out`
///
/// Returns the final report, or `None` if the player quit or input ended
/// before the session completed.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
pub fn run_simple<S, R, W>(
    session: &mut SessionController<S>,
    mut input: R,
    out: &mut W,
) -> Result<Option<SessionReport>>
where
    S: ScoreSink,
    R: BufRead,
    W: Write,
{
    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║                    Quizdle - Simple Mode                     ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(
        out,
        "{} ({} difficulty, {} words)",
        session.wordle_name().bright_cyan().bold(),
        session.difficulty(),
        session.words_total()
    )?;
    writeln!(out, "Type a guess and press Enter. Answer quiz questions by number,")?;
    writeln!(out, "several numbers separated by commas for multiple choice.")?;
    writeln!(out, "Commands: 'hint' for the word's hint, 'quit' to exit\n")?;

    print_word_header(session, out)?;

    loop {
        match session.phase() {
            Phase::Complete => {
                return Ok(session.report().cloned());
            }
            Phase::Settling => {
                if let Some(outcome) = session.settling_outcome() {
                    print_outcome(outcome, out)?;
                }
                match session.advance()? {
                    Advance::NextWord { .. } => print_word_header(session, out)?,
                    Advance::Complete(report) => return Ok(Some(report)),
                }
            }
            Phase::QuizPending => {
                let Some(challenge) = session.open_challenge().cloned() else {
                    continue;
                };
                print_challenge(&challenge, out)?;
                let Some(line) = read_line(&mut input, out, "Answer")? else {
                    return Ok(None);
                };
                if is_quit(&line) {
                    return Ok(None);
                }
                let Some(indices) = parse_selection(&line) else {
                    writeln!(out, "❌ Enter option numbers like '2' or '1,3'\n")?;
                    continue;
                };
                match session.answer_by_index(&indices) {
                    Ok(ChallengeProgress::Next(_)) => writeln!(out, "Next question...\n")?,
                    Ok(ChallengeProgress::Guess(result)) => print_guess_result(session, &result, out)?,
                    Ok(ChallengeProgress::Hint(HintResponse::Revealed(hint))) => {
                        writeln!(out, "💡 Hint: {}\n", hint.bright_yellow())?;
                    }
                    Ok(ChallengeProgress::Hint(_)) => {
                        writeln!(out, "{}\n", "Wrong answer, no hint this time.".red())?;
                    }
                    Err(e) => writeln!(out, "❌ {e}\n")?,
                }
            }
            Phase::AwaitingGuess => {
                let prompt = format!(
                    "Guess {}/{}",
                    session.max_guesses() - session.attempts_remaining() + 1,
                    session.max_guesses()
                );
                let Some(line) = read_line(&mut input, out, &prompt)? else {
                    return Ok(None);
                };
                if is_quit(&line) {
                    writeln!(out, "\n👋 Thanks for playing!\n")?;
                    return Ok(None);
                }
                if matches!(line.to_lowercase().as_str(), "hint" | "h" | "?") {
                    match session.request_hint()? {
                        HintRequest::Revealed(hint) => writeln!(out, "💡 Hint: {}\n", hint.bright_yellow())?,
                        HintRequest::Unavailable => writeln!(out, "This word has no hint.\n")?,
                        HintRequest::Challenge(_) => writeln!(out, "Answer a question to unlock the hint.\n")?,
                    }
                    continue;
                }
                submit_line(session, &line, out)?;
            }
        }
    }
}

/// Replace the guess buffer with `line` and submit it
fn submit_line<S: ScoreSink, W: Write>(session: &mut SessionController<S>, line: &str, out: &mut W) -> Result<()> {
    while session.delete_letter().is_ok() {}
    for letter in line.chars().filter(|c| !c.is_whitespace()) {
        if let Err(e) = session.type_letter(letter) {
            while session.delete_letter().is_ok() {}
            writeln!(out, "❌ {e}\n")?;
            return Ok(());
        }
    }

    match session.submit_guess() {
        Ok(GuessProgress::Applied(result)) => print_guess_result(session, &result, out)?,
        Ok(GuessProgress::Challenge(_)) => writeln!(out, "Answer to see your colors!\n")?,
        Err(e) => {
            while session.delete_letter().is_ok() {}
            writeln!(out, "❌ {e}\n")?;
        }
    }
    Ok(())
}

fn print_word_header<S: ScoreSink, W: Write>(session: &SessionController<S>, out: &mut W) -> Result<()> {
    writeln!(out, "{}", "─".repeat(60).cyan())?;
    writeln!(
        out,
        "Word {}/{}: {} letters | Score: {}",
        session.word_index(),
        session.words_total(),
        session.word_length(),
        session.score()
    )?;
    writeln!(out, "{}", "─".repeat(60).cyan())?;
    Ok(())
}

fn print_challenge<W: Write>(challenge: &Challenge, out: &mut W) -> Result<()> {
    writeln!(
        out,
        "\n❓ {} {}",
        format!("Question {}/{}:", challenge.number, challenge.total).bright_cyan(),
        challenge.question.prompt.bold()
    )?;
    for (i, option) in challenge.question.options.iter().enumerate() {
        writeln!(out, "   {}. {option}", i + 1)?;
    }
    Ok(())
}

fn print_guess_result<S: ScoreSink, W: Write>(
    session: &SessionController<S>,
    result: &GuessResult,
    out: &mut W,
) -> Result<()> {
    writeln!(out, "\n  {}  {}", colored_row(&result.guess, &result.shown), result.shown.to_emoji())?;
    if result.questions_asked > 0 {
        writeln!(
            out,
            "  Quiz: {}/{} correct",
            result.correct_answers, result.questions_asked
        )?;
    }
    if result.outcome.is_none() {
        writeln!(out, "  {}", keyboard_line(session.keyboard()))?;
        writeln!(out, "  {} attempts left\n", result.attempts_remaining)?;
    }
    Ok(())
}

fn print_outcome<W: Write>(outcome: &WordOutcome, out: &mut W) -> Result<()> {
    match outcome {
        WordOutcome::Won { word, attempts_used } => writeln!(
            out,
            "\n{}\n",
            format!("🎉 Correct! {word} in {attempts_used} attempt(s)").green().bold()
        )?,
        WordOutcome::Lost { word } => writeln!(
            out,
            "\n{} {}\n",
            "Out of attempts. The word was".red(),
            word.text().bright_yellow().bold()
        )?,
    }
    Ok(())
}

/// Parse "1", "1,3" or "1 3" into zero-based option indices
fn parse_selection(line: &str) -> Option<Vec<usize>> {
    let indices = line
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<usize>().ok().and_then(|n| n.checked_sub(1)))
        .collect::<Option<Vec<_>>>()?;
    (!indices.is_empty()).then_some(indices)
}

fn is_quit(line: &str) -> bool {
    matches!(line.to_lowercase().as_str(), "quit" | "q" | "exit")
}

/// Prompt and read one trimmed line, `None` at end of input
fn read_line<R: BufRead, W: Write>(input: &mut R, out: &mut W, prompt: &str) -> Result<Option<String>> {
    write!(out, "{prompt}: ")?;
    out.flush()?;

    let mut line = String::new();
    let read = input.read_line(&mut line).context("failed to read input")?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
