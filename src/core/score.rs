//! Bulls and cows scoring
//!
//! A guess is scored against the hidden word letter by letter:
//! - a **bull** is a letter in the same position in both words
//! - a **cow** is a letter present in the hidden word but at a different position
//!
//! Both words are expected to be lowercase isograms of equal length, which the
//! validator guarantees before a guess ever reaches the scorer.

use std::fmt;

/// Result of scoring one guess against the hidden word
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct BullCowCount {
    pub bulls: usize,
    pub cows: usize,
}

impl BullCowCount {
    /// Create a count from raw values
    #[inline]
    #[must_use]
    pub const fn new(bulls: usize, cows: usize) -> Self {
        Self { bulls, cows }
    }

    /// Score `guess` against `hidden`
    ///
    /// Every letter of the guess is compared with every letter of the hidden word.
    /// Equal letters count as a bull when they share a position and as a cow otherwise.
    /// Comparison is case-sensitive: guesses are validated as lowercase upstream.
    ///
    /// # Examples
    /// ```
    /// use bulls_cows::core::BullCowCount;
    ///
    /// let count = BullCowCount::calculate("apln", "plan");
    /// assert_eq!(count.bulls, 1); // N
    /// assert_eq!(count.cows, 3); // A, P, L
    /// ```
    #[must_use]
    pub fn calculate(guess: &str, hidden: &str) -> Self {
        let mut count = Self::default();

        for (i, guess_letter) in guess.bytes().enumerate() {
            for (j, hidden_letter) in hidden.bytes().enumerate() {
                if guess_letter == hidden_letter {
                    if i == j {
                        count.bulls += 1;
                    } else {
                        count.cows += 1;
                    }
                }
            }
        }

        count
    }

    /// Check whether every letter of a word of `length` letters is a bull
    #[inline]
    #[must_use]
    pub const fn is_perfect(self, length: usize) -> bool {
        self.bulls == length
    }

    /// Total letters of the guess found anywhere in the hidden word
    #[inline]
    #[must_use]
    pub const fn matched(self) -> usize {
        self.bulls + self.cows
    }
}

impl fmt::Display for BullCowCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bulls = {}  Cows = {}", self.bulls, self.cows)
    }
}
