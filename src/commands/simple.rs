//! Simple interactive CLI mode
//!
//! Line-based game without TUI: ask for a word length, then for guesses until the
//! word is found or the tries run out, then offer to play again.

use crate::core::LengthStatus;
use crate::game::{Game, GameSession, GameStats, ReplayChoice};
use crate::output::formatters::{guess_status_message, length_status_message};
use crate::output::{write_intro, write_round_summary};
use colored::Colorize;
use std::io::{BufRead, Write};

/// Line-based terminal: prompts on `output`, answers from `input`
struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    fn say(&mut self, text: &str) -> Result<(), String> {
        writeln!(self.output, "{text}").map_err(|e| e.to_string())
    }

    /// Show `prompt` and read one line; `None` once the input is exhausted
    fn ask(&mut self, prompt: &str) -> Result<Option<String>, String> {
        write!(self.output, "{prompt}").map_err(|e| e.to_string())?;
        self.output.flush().map_err(|e| e.to_string())?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|e| e.to_string())?;
        if read == 0 {
            return Ok(None);
        }

        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error on the terminal or if the dictionary
/// has no words for a length inside its bounds.
pub fn run_simple(game: &mut Game, stats: &mut GameStats) -> Result<(), String> {
    let stdin = std::io::stdin();
    run_console(game, stats, stdin.lock(), std::io::stdout())
}

/// Play rounds reading answers from `input` and writing prompts to `output`
///
/// Returns when the player quits or the input ends. Only finished rounds are
/// recorded in `stats`.
///
/// # Errors
///
/// Returns an error if reading or writing fails or if the dictionary has no words
/// for a length inside its bounds.
pub fn run_console<R: BufRead, W: Write>(
    game: &mut Game,
    stats: &mut GameStats,
    input: R,
    output: W,
) -> Result<(), String> {
    let mut console = Console { input, output };

    write_intro(&mut console.output).map_err(|e| e.to_string())?;
    console.say(&format!(
        "\nLoaded {} isograms of {} to {} letters.",
        game.index().total_words(),
        game.bounds().min(),
        game.bounds().max()
    ))?;

    'length: while let Some(length) = ask_word_length(&mut console, game)? {
        'word: loop {
            let mut session = game.new_session(length).map_err(|e| e.to_string())?;

            loop {
                if !play_round(&mut console, game, &mut session)? {
                    break 'length;
                }

                stats.record_result(session.is_won());
                write_round_summary(&mut console.output, &session, stats)
                    .map_err(|e| e.to_string())?;

                match ask_replay(&mut console, session.is_won())? {
                    ReplayChoice::SameWord => session.reset(),
                    ReplayChoice::DifferentWord => continue 'word,
                    ReplayChoice::DifferentLength => continue 'length,
                    ReplayChoice::Quit => break 'length,
                }
            }
        }
    }

    console.say(&format!("\n{}", "Thanks for playing!".bright_cyan()))
}

/// Ask until a valid word length is entered; `None` if the input ends
fn ask_word_length<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    game: &Game,
) -> Result<Option<usize>, String> {
    let bounds = game.bounds();
    let prompt = format!(
        "\nEnter the length of the isogram to try and guess (between {} and {}): ",
        bounds.min(),
        bounds.max()
    );

    loop {
        let Some(input) = console.ask(&prompt)? else {
            return Ok(None);
        };

        let status = game.check_word_length(&input);
        if let LengthStatus::Ok(length) = status {
            return Ok(Some(length));
        }
        if let Some(problem) = length_status_message(status, bounds) {
            console.say(&problem.yellow().to_string())?;
        }
    }
}

/// Play one round to the end; `false` if the input ended first
fn play_round<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    game: &Game,
    session: &mut GameSession,
) -> Result<bool, String> {
    let length = session.hidden_word_length();

    console.say(&format!(
        "\n{}",
        "Can you guess the isogram I'm thinking of?".bright_cyan()
    ))?;
    console.say(&format!("  Number of letters: {length}"))?;
    console.say(&format!("  Maximum number of tries: {}", session.max_tries()))?;
    console.say(&format!(
        "  Dictionary size: {}\n",
        game.dictionary_size(length)
    ))?;

    while !session.is_over() {
        let Some(guess) = ask_guess(console, session)? else {
            return Ok(false);
        };

        let count = session.submit_valid_guess(&guess);
        console.say(&format!("{count}\n"))?;
    }

    Ok(true)
}

/// Ask until a valid guess is entered; `None` if the input ends
fn ask_guess<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    session: &GameSession,
) -> Result<Option<String>, String> {
    let prompt = format!(
        "Try {} out of {}. Enter your guess: ",
        session.current_try(),
        session.max_tries()
    );

    loop {
        let Some(guess) = console.ask(&prompt)? else {
            return Ok(None);
        };

        let status = session.check_guess(&guess);
        match guess_status_message(status, session.hidden_word_length()) {
            None => return Ok(Some(guess)),
            Some(problem) => console.say(&format!("{}\n", problem.yellow()))?,
        }
    }
}

/// Show the replay menu until a valid choice is made; quits if the input ends
fn ask_replay<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    won: bool,
) -> Result<ReplayChoice, String> {
    loop {
        console.say("\nDo you want to play again?")?;
        console.say("  1 - Play again with a different word of the same length")?;
        console.say("  2 - Play again with a word of a different length")?;
        if !won {
            console.say("  3 - Play again with the same word")?;
        }
        console.say("  Q - Quit")?;

        let Some(response) = console.ask("Please enter a choice from above: ")? else {
            return Ok(ReplayChoice::Quit);
        };
        if let Some(choice) = ReplayChoice::parse(&response, won) {
            return Ok(choice);
        }
    }
}
