//! Quizdle - CLI
//!
//! Quiz-gated word guessing with TUI and line-based modes, a content checker and
//! a batch simulator.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use quizdle::{
    commands::{SimulationConfig, check_content, run_simple, run_simulation},
    config::SessionConfig,
    content::{ContentSource, DEMO_WORDLE_ID, EmbeddedContent, JsonContentSource, WordleContent},
    game::SessionController,
    logging::{self, LogTarget},
    output::{print_check_report, print_session_report, print_simulation_statistics},
    scores::ScoreBook,
};
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "quizdle",
    about = "Word guessing where every matched letter has to be earned with a quiz answer",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordle to play: 'demo' (default, built in), a JSON file, or a directory of <id>.json files
    #[arg(short = 'w', long, global = true, default_value = "demo")]
    wordle: String,

    /// Wordle id to load when --wordle is a directory
    #[arg(long, global = true, default_value_t = DEMO_WORDLE_ID)]
    id: u64,

    /// Player name used in the score book
    #[arg(short, long, global = true, default_value = "player")]
    player: String,

    /// Score book file
    #[arg(long, global = true, default_value = "quizdle_scores.json")]
    scores: PathBuf,

    /// Guesses allowed per word (overrides the wordle's settings)
    #[arg(short = 'g', long, global = true)]
    max_guesses: Option<u32>,

    /// Seed for question order (and simulated answers)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, no TUI)
    Simple,

    /// Validate a wordle file and summarize it
    Check {
        /// File to check (defaults to --wordle)
        path: Option<PathBuf>,
    },

    /// Play many sessions with a scripted student and report statistics
    Simulate {
        /// Number of sessions
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,

        /// Probability that the student answers a question correctly
        #[arg(short, long, default_value = "0.8")]
        accuracy: f64,

        /// Never ask for hints
        #[arg(long)]
        no_hints: bool,
    },
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play);

    // The TUI owns the terminal, so it only logs to a file
    let target = match (&cli.log_file, &command) {
        (Some(path), _) => LogTarget::File(path),
        (None, Commands::Play) => LogTarget::Off,
        (None, _) => LogTarget::Stderr,
    };
    logging::init(logging::level_for(cli.verbose, cli.quiet), target)?;

    match command {
        Commands::Play => run_play_command(&cli),
        Commands::Simple => run_simple_command(&cli),
        Commands::Check { path } => run_check_command(&cli, path),
        Commands::Simulate {
            count,
            accuracy,
            no_hints,
        } => run_simulate_command(&cli, count, accuracy, !no_hints),
    }
}

/// Load the wordle named by --wordle / --id
fn load_content(cli: &Cli) -> Result<WordleContent> {
    let content = if cli.wordle == "demo" {
        EmbeddedContent.fetch_wordle_content(DEMO_WORDLE_ID)
    } else {
        JsonContentSource::new(&cli.wordle).fetch_wordle_content(cli.id)
    };
    content.with_context(|| format!("cannot load wordle '{}'", cli.wordle))
}

/// Session settings: the wordle's own, then command-line overrides
fn session_config(cli: &Cli, content: &WordleContent) -> SessionConfig {
    content
        .settings
        .clone()
        .unwrap_or_default()
        .with_overrides(cli.max_guesses, cli.seed)
}

fn start_session(cli: &Cli) -> Result<SessionController<ScoreBook>> {
    let content = load_content(cli)?;
    let config = session_config(cli, &content);
    let book = ScoreBook::new(&cli.scores, &cli.player);
    SessionController::start(content, config, book).context("wordle content is invalid")
}

fn run_play_command(cli: &Cli) -> Result<()> {
    use quizdle::interactive::{App, run_tui};

    let session = start_session(cli)?;
    if let Some(report) = run_tui(App::new(session))? {
        print_session_report(&report);
    }
    Ok(())
}

fn run_simple_command(cli: &Cli) -> Result<()> {
    let mut session = start_session(cli)?;
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    if let Some(report) = run_simple(&mut session, stdin.lock(), &mut stdout)? {
        print_session_report(&report);
    }
    Ok(())
}

fn run_check_command(cli: &Cli, path: Option<PathBuf>) -> Result<()> {
    let content = match path {
        Some(path) => quizdle::content::load_from_file(&path)
            .with_context(|| format!("cannot load {}", path.display()))?,
        None => load_content(cli)?,
    };

    let report = check_content(&content);
    print_check_report(&report);
    if !report.is_valid() {
        bail!("wordle content is invalid");
    }
    Ok(())
}

fn run_simulate_command(cli: &Cli, count: usize, accuracy: f64, use_hints: bool) -> Result<()> {
    if !(0.0..=1.0).contains(&accuracy) {
        bail!("accuracy must be between 0 and 1, got {accuracy}");
    }

    let content = load_content(cli)?;
    let config = session_config(cli, &content);
    println!(
        "🎯 Simulating {count} sessions of '{}' at {:.0}% accuracy...",
        content.name,
        accuracy * 100.0
    );

    let sim = SimulationConfig {
        sessions: count,
        accuracy,
        use_hints,
        show_progress: true,
    };
    let stats = run_simulation(&content, &config, &sim)?;
    print_simulation_statistics(&stats);
    Ok(())
}
