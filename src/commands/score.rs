//! One-off scoring command
//!
//! Scores a single guess against a given hidden word without starting a game.

use crate::core::{BullCowCount, GuessStatus, LengthBounds, check_guess};
use crate::game::GameSession;
use crate::output::formatters::guess_status_message;

/// Result of scoring one guess
#[derive(Debug, Clone)]
pub struct ScoreResult {
    pub hidden: String,
    pub guess: String,
    pub count: BullCowCount,
}

impl ScoreResult {
    /// True when the guess matches the hidden word exactly
    #[must_use]
    pub const fn is_win(&self) -> bool {
        self.count.is_perfect(self.hidden.len())
    }
}

/// Score `guess` against `hidden`
///
/// The hidden word must itself be a lowercase isogram of a supported length, and
/// the guess is validated against it exactly as in a game.
///
/// # Errors
///
/// Returns an error if either word fails validation.
///
/// # Examples
/// ```
/// use bulls_cows::commands::score_guess;
///
/// let result = score_guess("plan", "apln").unwrap();
/// assert_eq!((result.count.bulls, result.count.cows), (1, 3));
/// assert!(score_guess("plan", "plans").is_err());
/// ```
pub fn score_guess(hidden: &str, guess: &str) -> Result<ScoreResult, String> {
    let bounds = LengthBounds::default();
    if !bounds.contains(hidden.len()) {
        return Err(format!(
            "Invalid hidden word: must have between {} and {} letters, got {}",
            bounds.min(),
            bounds.max(),
            hidden.len()
        ));
    }

    let hidden_status = check_guess(hidden, hidden.len());
    if let Some(problem) = guess_status_message(hidden_status, hidden.len()) {
        return Err(format!("Invalid hidden word: {problem}"));
    }

    let mut session = GameSession::new(hidden);
    match session.check_guess(guess) {
        GuessStatus::Ok => {}
        status => {
            let problem = guess_status_message(status, hidden.len()).unwrap_or_default();
            return Err(format!("Invalid guess: {problem}"));
        }
    }

    let count = session.submit_valid_guess(guess);
    Ok(ScoreResult {
        hidden: hidden.to_string(),
        guess: guess.to_string(),
        count,
    })
}
