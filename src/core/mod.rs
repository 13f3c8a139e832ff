//! Core domain rules for Bulls & Cows
//!
//! This module contains the pure game rules: scoring, input validation and the
//! difficulty table. Nothing here holds state or performs I/O.

mod difficulty;
mod score;
mod validate;

pub use difficulty::{ABSOLUTE_MAX_LENGTH, ABSOLUTE_MIN_LENGTH, LengthBounds, max_tries};
pub use score::BullCowCount;
pub use validate::{
    GuessStatus, LengthStatus, check_guess, check_word_length, is_isogram, is_lowercase,
    parse_integer,
};
