//! A single round against one hidden word

use crate::core::{BullCowCount, GuessStatus, check_guess, max_tries};
use std::fmt;
use tracing::debug;

/// Error type for starting a round
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// The dictionary has no words of the requested length
    EmptyWordList(usize),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyWordList(length) => {
                write!(f, "No isograms of length {length} in the dictionary")
            }
        }
    }
}

impl std::error::Error for SessionError {}

/// State of one round: the hidden word, the try counter and the win flag
///
/// The try counter starts at 1 and names the try about to be played. The session
/// never refuses a guess; callers stop asking once [`GameSession::is_over`] is true.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    hidden_word: String,
    current_try: u32,
    won: bool,
}

impl GameSession {
    /// Start a round with the given hidden word
    #[must_use]
    pub fn new(hidden_word: impl Into<String>) -> Self {
        Self {
            hidden_word: hidden_word.into(),
            current_try: 1,
            won: false,
        }
    }

    /// Replay the round with the same hidden word
    pub fn reset(&mut self) {
        self.current_try = 1;
        self.won = false;
    }

    /// The hidden word
    ///
    /// Only meant for revealing the answer once the round is over.
    #[inline]
    #[must_use]
    pub fn hidden_word(&self) -> &str {
        &self.hidden_word
    }

    #[inline]
    #[must_use]
    pub fn hidden_word_length(&self) -> usize {
        self.hidden_word.len()
    }

    /// Number of the try about to be played (starts at 1)
    #[inline]
    #[must_use]
    pub const fn current_try(&self) -> u32 {
        self.current_try
    }

    /// Try budget for the hidden word's length
    #[must_use]
    pub fn max_tries(&self) -> u32 {
        max_tries(self.hidden_word_length())
    }

    #[inline]
    #[must_use]
    pub const fn is_won(&self) -> bool {
        self.won
    }

    /// True once the word is guessed or the try budget is spent
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.won || self.current_try > self.max_tries()
    }

    /// Tries left before the budget is spent
    #[must_use]
    pub fn tries_remaining(&self) -> u32 {
        (self.max_tries() + 1).saturating_sub(self.current_try)
    }

    /// How many tries were left unused when the round was won
    ///
    /// `Some(0)` means the word was found with the last try. Returns `None` if the
    /// round has not been won.
    #[must_use]
    pub fn turns_under_par(&self) -> Option<u32> {
        self.won.then(|| self.tries_remaining())
    }

    /// Validate a guess against the hidden word's length
    #[must_use]
    pub fn check_guess(&self, guess: &str) -> GuessStatus {
        check_guess(guess, self.hidden_word_length())
    }

    /// Score a guess that already passed [`GameSession::check_guess`]
    ///
    /// The try counter advances before scoring, and the round is won when every
    /// letter is a bull.
    ///
    /// # Examples
    /// ```
    /// use bulls_cows::game::GameSession;
    ///
    /// let mut session = GameSession::new("plan");
    /// let count = session.submit_valid_guess("apln");
    /// assert_eq!((count.bulls, count.cows), (1, 3));
    /// assert_eq!(session.current_try(), 2);
    /// assert!(!session.is_won());
    /// ```
    pub fn submit_valid_guess(&mut self, guess: &str) -> BullCowCount {
        self.current_try += 1;

        let count = BullCowCount::calculate(guess, &self.hidden_word);
        if count.is_perfect(self.hidden_word_length()) {
            self.won = true;
        }

        debug!(
            try_number = self.current_try - 1,
            bulls = count.bulls,
            cows = count.cows,
            won = self.won,
            "scored guess"
        );
        count
    }
}
