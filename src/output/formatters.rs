//! Formatting utilities for terminal output

use crate::core::{BullCowCount, GuessStatus, LengthBounds, LengthStatus};

/// Format a score as one square per letter: bulls first, then cows, then misses
#[must_use]
pub fn bull_cow_squares(count: BullCowCount, length: usize) -> String {
    let misses = length.saturating_sub(count.matched());
    let mut result = String::with_capacity(length * 4);

    result.push_str(&"🟩".repeat(count.bulls));
    result.push_str(&"🟨".repeat(count.cows));
    result.push_str(&"⬜".repeat(misses));

    result
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// `count` followed by `noun`, pluralised with an `s` unless `count` is 1
#[must_use]
pub fn pluralize(count: u32, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

/// Explain why a word length was rejected, or `None` if it was accepted
#[must_use]
pub fn length_status_message(status: LengthStatus, bounds: LengthBounds) -> Option<String> {
    match status {
        LengthStatus::NotANumber => Some("Please enter a number.".to_string()),
        LengthStatus::OutOfRange => Some(format!(
            "Please enter a number between {} and {}.",
            bounds.min(),
            bounds.max()
        )),
        LengthStatus::Ok(_) => None,
    }
}

/// Explain why a guess was rejected, or `None` if it was accepted
#[must_use]
pub fn guess_status_message(status: GuessStatus, hidden_length: usize) -> Option<String> {
    match status {
        GuessStatus::NotIsogram => {
            Some("Please enter an isogram; a word with no duplicate letters.".to_string())
        }
        GuessStatus::NotLowercase => Some("Please enter all lowercase letters.".to_string()),
        GuessStatus::WrongLength => Some(format!("Please enter a {hidden_length} letter word.")),
        GuessStatus::Ok => None,
    }
}
