//! Bulls & Cows - CLI
//!
//! Guess the hidden isogram, in a simple line-based console or a full-screen TUI.

use anyhow::{Context, Result};
use bulls_cows::{
    commands::{dictionary_info, run_simple, score_guess},
    game::{Game, GameStats},
    output::{print_dictionary_info, print_score_result},
    wordlists::{
        ISOGRAMS, WordIndex,
        loader::{index_from_slice, load_from_file},
    },
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "bulls_cows",
    about = "Bulls & Cows: guess the hidden isogram",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Seed for picking hidden words (random when omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Write logs to this file instead of stderr (level set by RUST_LOG)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Line-based console game (default)
    Simple,

    /// Full-screen interactive TUI game
    Play,

    /// Score a single guess against a hidden word
    Score {
        /// The hidden word
        hidden: String,

        /// The guess to score
        guess: String,
    },

    /// Show word counts and try budgets of the dictionary
    Info,
}

/// Set up tracing output, to `log_file` when given and stderr otherwise
fn init_logging(log_file: Option<&PathBuf>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    if let Some(path) = log_file {
        let file = std::fs::File::create(path)
            .with_context(|| format!("Failed to create log file {}", path.display()))?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(Arc::new(file))
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }

    Ok(())
}

/// Load the dictionary selected by the -w flag
///
/// - "embedded": the isogram list compiled into the binary
/// - "<path>": one word per line from a file
fn load_wordlist(wordlist: &str) -> Result<WordIndex> {
    match wordlist {
        "embedded" => Ok(index_from_slice(ISOGRAMS)?),
        path => load_from_file(path).with_context(|| format!("Failed to load wordlist {path}")),
    }
}

fn build_game(cli: &Cli) -> Result<Game> {
    let index = load_wordlist(&cli.wordlist)?;
    Ok(match cli.seed {
        Some(seed) => Game::with_seed(index, seed),
        None => Game::new(index),
    })
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_ref())?;

    // Default to the console game if no command given
    match cli.command.as_ref() {
        None | Some(Commands::Simple) => run_simple_command(&cli),
        Some(Commands::Play) => run_play_command(&cli),
        Some(Commands::Score { hidden, guess }) => run_score_command(hidden, guess),
        Some(Commands::Info) => run_info_command(&cli),
    }
}

fn run_simple_command(cli: &Cli) -> Result<()> {
    let mut game = build_game(cli)?;
    let mut stats = GameStats::new();

    run_simple(&mut game, &mut stats).map_err(|e| anyhow::anyhow!(e))?;
    log_final_stats(&stats);
    Ok(())
}

fn run_play_command(cli: &Cli) -> Result<()> {
    use bulls_cows::interactive::{App, run_tui};

    let game = build_game(cli)?;
    let stats = run_tui(App::new(game))?;
    log_final_stats(&stats);
    Ok(())
}

fn run_score_command(hidden: &str, guess: &str) -> Result<()> {
    let result = score_guess(hidden, guess).map_err(|e| anyhow::anyhow!(e))?;
    print_score_result(&result);
    Ok(())
}

fn run_info_command(cli: &Cli) -> Result<()> {
    let index = load_wordlist(&cli.wordlist)?;
    print_dictionary_info(&dictionary_info(&index, &cli.wordlist));
    Ok(())
}

fn log_final_stats(stats: &GameStats) {
    info!(
        total_games = stats.total_games(),
        games_won = stats.games_won(),
        win_percentage = stats.win_percentage(),
        best_winning_streak = stats.best_winning_streak(),
        "session finished"
    );
}
