//! Display functions for command results

use super::formatters::create_progress_bar;
use crate::commands::{CheckReport, SimulationStatistics};
use crate::game::{SessionReport, Submission};
use colored::Colorize;

/// Print the end-of-session summary
pub fn print_session_report(report: &SessionReport) {
    println!("\n{}", "═".repeat(60).bright_cyan());
    println!(
        "{}",
        "    🎉 🎊 ✨  S E S S I O N   C O M P L E T E  ✨ 🎊 🎉"
            .bright_green()
            .bold()
    );
    println!("{}", "═".repeat(60).bright_cyan());

    println!(
        "\n  {} ({} difficulty)",
        report.wordle_name.bright_white().bold(),
        report.difficulty
    );
    println!(
        "  Score: {} / {}",
        report.score.to_string().bright_yellow().bold(),
        report.words.len()
    );

    println!("\n  Words:");
    for (i, word) in report.words.iter().enumerate() {
        let status = if word.solved {
            format!("solved in {}", word.guesses).green()
        } else {
            "not solved".red()
        };
        let hint = if word.hint_unlocked { " 💡" } else { "" };
        println!(
            "    {}. {} {}{}",
            (i + 1).to_string().bright_black(),
            word.word.bright_white().bold(),
            status,
            hint
        );
    }

    match &report.submission {
        Submission::Saved(ack) => println!("\n  {}", ack.to_string().bright_cyan()),
        Submission::Failed(reason) => println!(
            "\n  {} {}",
            "⚠ Score could not be saved:".yellow().bold(),
            reason
        ),
    }
    println!("\n{}\n", "═".repeat(60).bright_cyan());
}

/// Print a content check report
pub fn print_check_report(report: &CheckReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "WORDLE CHECK:".bright_cyan().bold(),
        report.name.bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n  Id:          {}", report.id);
    println!("  Difficulty:  {}", report.difficulty);
    println!(
        "  Questions:   {} ({} single, {} multiple)",
        report.question_count(),
        report.single_questions,
        report.multiple_questions
    );
    println!(
        "  Per guess:   up to {} question(s)",
        report.max_questions_per_guess
    );

    println!("\n  Words:");
    for word in &report.words {
        println!(
            "    {} {} letters{}",
            word.word.bright_white().bold(),
            word.length,
            if word.has_hint { ", hint" } else { "" }
        );
    }

    println!();
    match &report.problem {
        None => println!("{}", "✅ Content is valid".green().bold()),
        Some(problem) => println!("{} {}", "❌ Invalid:".red().bold(), problem),
    }
}

/// Print simulation statistics
pub fn print_simulation_statistics(stats: &SimulationStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Simulation Results: {} ", stats.wordle_name);
    println!("{}", "═".repeat(70));

    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Sessions played:     {}", stats.sessions);
    println!("  Words per session:   {}", stats.words_per_session);
    println!("  Answer accuracy:     {:.0}%", stats.accuracy * 100.0);
    println!(
        "  Average score:       {}",
        format!("{:.2}", stats.average_score).bright_yellow().bold()
    );
    println!(
        "  Words solved:        {}",
        format!("{:.1}%", stats.solve_rate * 100.0).green()
    );
    println!("  Guesses per solve:   {:.2}", stats.average_guesses);
    println!(
        "  Questions:           {} asked, {} correct",
        stats.questions_asked, stats.questions_correct
    );
    println!("  Hints unlocked:      {}", stats.hints_unlocked);
    println!(
        "  Total time:          {:.2}s",
        stats.total_time.as_secs_f64()
    );

    println!("\n📈 {}", "Score Distribution".bright_cyan().bold());
    let max_count = stats.score_distribution.values().copied().max().unwrap_or(1);
    for score in 0..=stats.words_per_session as u32 {
        let count = stats.score_distribution.get(&score).copied().unwrap_or(0);
        let percentage = if stats.sessions > 0 {
            count as f64 / stats.sessions as f64 * 100.0
        } else {
            0.0
        };
        let bar = create_progress_bar(count as f64, max_count as f64, 40);
        println!("  {score:2}: {} {count:4} ({percentage:5.1}%)", bar.green());
    }
}
