//! Validation of player input
//!
//! Two independent checks are exposed:
//! - [`check_word_length`] for the requested hidden word length
//! - [`check_guess`] for a guess at the hidden word
//!
//! Both return an enumerated status instead of an error so the caller can report
//! the problem and ask again.

use super::LengthBounds;
use rustc_hash::FxHashSet;

/// Outcome of checking a requested word length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthStatus {
    /// The input is empty or not an integer
    NotANumber,
    /// The input is an integer outside the loaded bounds
    OutOfRange,
    /// The input is a usable word length
    Ok(usize),
}

/// Outcome of checking a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessStatus {
    /// A letter repeats (ignoring case)
    NotIsogram,
    /// A character is not an ASCII lowercase letter
    NotLowercase,
    /// The guess length differs from the hidden word length
    WrongLength,
    Ok,
}

impl GuessStatus {
    #[inline]
    #[must_use]
    pub const fn is_ok(self) -> bool {
        matches!(self, Self::Ok)
    }
}

/// Check whether no letter of `word` repeats, ignoring case
///
/// Words of zero or one letter are isograms.
///
/// # Examples
/// ```
/// use bulls_cows::core::is_isogram;
///
/// assert!(is_isogram("planet"));
/// assert!(!is_isogram("pollen"));
/// assert!(!is_isogram("Papa"));
/// ```
#[must_use]
pub fn is_isogram(word: &str) -> bool {
    let mut seen = FxHashSet::default();
    word.chars()
        .all(|letter| seen.insert(letter.to_ascii_lowercase()))
}

/// Check whether every character of `word` is an ASCII lowercase letter
///
/// The empty word is lowercase.
#[must_use]
pub fn is_lowercase(word: &str) -> bool {
    word.chars().all(|c| c.is_ascii_lowercase())
}

/// Parse `input` as an integer, ignoring surrounding whitespace
#[must_use]
pub fn parse_integer(input: &str) -> Option<i64> {
    input.trim().parse().ok()
}

/// Check a requested hidden word length against the loaded `bounds`
///
/// # Examples
/// ```
/// use bulls_cows::core::{LengthBounds, LengthStatus, check_word_length};
///
/// let bounds = LengthBounds::new(3, 6);
/// assert_eq!(check_word_length("4", bounds), LengthStatus::Ok(4));
/// assert_eq!(check_word_length("7", bounds), LengthStatus::OutOfRange);
/// assert_eq!(check_word_length("four", bounds), LengthStatus::NotANumber);
/// ```
#[must_use]
pub fn check_word_length(input: &str, bounds: LengthBounds) -> LengthStatus {
    let Some(number) = parse_integer(input) else {
        return LengthStatus::NotANumber;
    };

    match usize::try_from(number) {
        Ok(length) if bounds.contains(length) => LengthStatus::Ok(length),
        _ => LengthStatus::OutOfRange,
    }
}

/// Check a guess against the length of the hidden word
///
/// Checks run in a fixed order and only the first failure is reported:
/// isogram, then lowercase, then length.
///
/// # Examples
/// ```
/// use bulls_cows::core::{GuessStatus, check_guess};
///
/// assert_eq!(check_guess("plan", 4), GuessStatus::Ok);
/// assert_eq!(check_guess("PoP", 4), GuessStatus::NotIsogram);
/// assert_eq!(check_guess("PLAN", 4), GuessStatus::NotLowercase);
/// assert_eq!(check_guess("plant", 4), GuessStatus::WrongLength);
/// ```
#[must_use]
pub fn check_guess(guess: &str, hidden_length: usize) -> GuessStatus {
    if !is_isogram(guess) {
        GuessStatus::NotIsogram
    } else if !is_lowercase(guess) {
        GuessStatus::NotLowercase
    } else if guess.len() != hidden_length {
        GuessStatus::WrongLength
    } else {
        GuessStatus::Ok
    }
}
