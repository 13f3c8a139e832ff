//! Display functions for command results and rounds

use super::formatters::{bull_cow_squares, create_progress_bar, pluralize};
use crate::commands::{DictionaryInfo, ScoreResult};
use crate::game::{GameSession, GameStats};
use colored::Colorize;
use std::io::{self, Write};

const BANNER: &str = r"
MM                   MM
MMM+                8MM
MMMMMM            :MMM                        MM,     ZMM
ZMMM+MMMM+       MMMM                         MMMO  MMMMM
   MMM  MMMMMMMMMMMN                            MMMMMMMZ
    MMMMM   MMMMMMMMM                        ZMMMZMZ, MMMMMM
      $MMD  MMM    MMMMMMM         MMMMMMMMMMMMM         MMM
777MMMMDI               I7MMM~  7MMMIIIIIII+
MMM?                       MMM +MM
                           ZMM +M+
        B U L L S          MMM  MM            C O W S
                     MMMMMMMO    MMMMMMM
               ZMMMMMMMM               MMMMM
             MMMM                         MMMMM
            MMM                               MMMMM
           MMO                                   MM,";

/// Write the welcome banner and the isogram explanation
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn write_intro<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", BANNER.bright_yellow())?;
    writeln!(out, "\n{}", "Welcome to Bulls & Cows".bright_cyan().bold())?;
    writeln!(
        out,
        "Isogram: a word that does not have any repeating letters in it."
    )?;
    writeln!(out, "  \"planet\" is an isogram, while \"pollen\" is not.")?;
    writeln!(
        out,
        "Bulls are letters in the right place, cows are letters in the wrong place."
    )
}

/// Write the result of a finished round, plus the running record once more than
/// one round has been played
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn write_round_summary<W: Write>(
    out: &mut W,
    session: &GameSession,
    stats: &GameStats,
) -> io::Result<()> {
    let rule = "*".repeat(53);
    writeln!(out, "{}", rule.cyan())?;

    match session.turns_under_par() {
        Some(0) => {
            writeln!(out, "  {}", "CONGRATULATIONS, you won!".green().bold())?;
            writeln!(out, "  You won this game right on par")?;
        }
        Some(under_par) => {
            writeln!(out, "  {}", "CONGRATULATIONS, you won!".green().bold())?;
            writeln!(
                out,
                "  Won this game with {} under par",
                pluralize(under_par, "turn")
            )?;
        }
        None => writeln!(out, "  {}", "Sorry, you lost.".red().bold())?,
    }

    if stats.total_games() > 1 {
        write_stats(out, stats)?;
    }

    writeln!(out, "{}", rule.cyan())
}

fn write_stats<W: Write>(out: &mut W, stats: &GameStats) -> io::Result<()> {
    let bar = create_progress_bar(f64::from(stats.win_percentage()), 100.0, 20);

    writeln!(out, "  Games Lost  : {}", stats.games_lost())?;
    writeln!(out, "  Games Won   : {}", stats.games_won())?;
    writeln!(
        out,
        "  Total Games : {} ({}%) [{}]",
        stats.total_games(),
        stats.win_percentage(),
        bar.green()
    )?;

    if stats.current_losing_streak() > 1 {
        writeln!(
            out,
            "  Current Losing Streak : {}",
            stats.current_losing_streak()
        )?;
    }
    if stats.current_winning_streak() > 1 {
        writeln!(
            out,
            "  Current Winning Streak: {}",
            stats.current_winning_streak()
        )?;
    }
    if stats.worst_losing_streak() > stats.current_losing_streak() {
        writeln!(
            out,
            "  Worst Losing Streak   : {}",
            stats.worst_losing_streak()
        )?;
    }
    if stats.best_winning_streak() > stats.current_winning_streak() {
        writeln!(
            out,
            "  Best Winning Streak   : {}",
            stats.best_winning_streak()
        )?;
    }

    Ok(())
}

/// Print the result of scoring a single guess
pub fn print_score_result(result: &ScoreResult) {
    println!(
        "\n{} {} {}",
        result.guess.to_uppercase().bright_white().bold(),
        "vs".bright_black(),
        result.hidden.to_uppercase().bright_yellow().bold()
    );
    println!(
        "  {}  {}",
        bull_cow_squares(result.count, result.hidden.len()),
        result.count
    );

    if result.is_win() {
        println!("{}", "✅ Exact match!".green().bold());
    }
}

/// Print a summary of the loaded dictionary
pub fn print_dictionary_info(info: &DictionaryInfo) {
    println!("\n{}", "═".repeat(40).cyan());
    println!(" {} ", "DICTIONARY".bright_cyan().bold());
    println!("{}", "═".repeat(40).cyan());

    println!("\n  Source:      {}", info.source);
    println!("  Words:       {}", info.total_words);
    println!(
        "  Lengths:     {} to {}",
        info.bounds.min(),
        info.bounds.max()
    );

    println!(
        "\n  {:>6}  {:>6}  {:>9}",
        "Length".bright_cyan(),
        "Words".bright_cyan(),
        "Max tries".bright_cyan()
    );
    for row in &info.lengths {
        println!(
            "  {:>6}  {:>6}  {:>9}",
            row.length, row.words, row.max_tries
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_summary(session: &GameSession, stats: &GameStats) -> String {
        let mut out = Vec::new();
        write_round_summary(&mut out, session, stats).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn summary_for_win_under_par() {
        let mut session = GameSession::new("plan");
        session.submit_valid_guess("plan");
        let mut stats = GameStats::new();
        stats.record_result(true);

        let text = render_summary(&session, &stats);
        assert!(text.contains("CONGRATULATIONS, you won!"));
        assert!(text.contains("Won this game with 7 turns under par"));
        assert!(!text.contains("Total Games"));
    }

    #[test]
    fn summary_for_win_on_par() {
        let mut session = GameSession::new("cat");
        for _ in 0..4 {
            session.submit_valid_guess("dog");
        }
        session.submit_valid_guess("cat");

        let text = render_summary(&session, &GameStats::new());
        assert!(text.contains("right on par"));
    }

    #[test]
    fn summary_for_loss_with_history() {
        let session = GameSession::new("cat");
        let mut stats = GameStats::new();
        stats.record_result(false);
        stats.record_result(false);

        let text = render_summary(&session, &stats);
        assert!(text.contains("Sorry, you lost."));
        assert!(text.contains("Games Lost  : 2"));
        assert!(text.contains("Total Games : 2 (0%)"));
        assert!(text.contains("Current Losing Streak : 2"));
        assert!(!text.contains("Worst Losing Streak"));
    }

    #[test]
    fn summary_shows_best_streak_once_broken() {
        let session = GameSession::new("cat");
        let mut stats = GameStats::new();
        for won in [true, true, true, false, false] {
            stats.record_result(won);
        }

        let text = render_summary(&session, &stats);
        assert!(text.contains("Best Winning Streak   : 2"));
        assert!(!text.contains("Current Winning Streak"));
    }

    #[test]
    fn intro_explains_isograms() {
        let mut out = Vec::new();
        write_intro(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("\"planet\" is an isogram"));
    }
}
