//! Main game engine

use super::session::{GameSession, SessionError};
use crate::core::{LengthBounds, LengthStatus, check_word_length};
use crate::wordlists::WordIndex;
use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use tracing::{debug, instrument};

/// Bulls & Cows engine
///
/// Owns the dictionary and the random generator used to pick hidden words. The
/// generator is seeded once, when the engine is built.
#[derive(Debug)]
pub struct Game {
    index: WordIndex,
    rng: StdRng,
}

impl Game {
    /// Create an engine seeded from the operating system
    #[must_use]
    pub fn new(index: WordIndex) -> Self {
        Self {
            index,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Create an engine with a fixed seed, for reproducible games
    #[must_use]
    pub fn with_seed(index: WordIndex, seed: u64) -> Self {
        Self {
            index,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    #[inline]
    #[must_use]
    pub const fn index(&self) -> &WordIndex {
        &self.index
    }

    /// Word lengths the player may choose from
    #[inline]
    #[must_use]
    pub const fn bounds(&self) -> LengthBounds {
        self.index.bounds()
    }

    /// Number of words the hidden word is drawn from for `length`
    #[must_use]
    pub fn dictionary_size(&self, length: usize) -> usize {
        self.index.dictionary_size(length)
    }

    /// Validate a requested word length against the loaded dictionary
    #[must_use]
    pub fn check_word_length(&self, input: &str) -> LengthStatus {
        check_word_length(input, self.bounds())
    }

    /// Start a round with a hidden word drawn uniformly from words of `length` letters
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::EmptyWordList`] if the dictionary has no words of
    /// that length. Lengths accepted by [`Game::check_word_length`] can still hit
    /// this when the dictionary skips a length inside its bounds.
    ///
    /// # Examples
    /// ```
    /// use bulls_cows::game::Game;
    /// use bulls_cows::wordlists::WordIndex;
    ///
    /// let index = WordIndex::from_lines(["plan", "crane"]).unwrap();
    /// let mut game = Game::with_seed(index, 7);
    /// let session = game.new_session(4).unwrap();
    /// assert_eq!(session.hidden_word(), "plan");
    /// assert!(game.new_session(3).is_err());
    /// ```
    #[instrument(skip(self))]
    pub fn new_session(&mut self, length: usize) -> Result<GameSession, SessionError> {
        let words = self.index.words(length);
        let hidden_word = words
            .choose(&mut self.rng)
            .ok_or(SessionError::EmptyWordList(length))?;

        debug!(dictionary_size = words.len(), "drew hidden word");
        Ok(GameSession::new(hidden_word.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_index() -> WordIndex {
        WordIndex::from_lines(["cat", "dog", "sun", "plan", "ship", "crane"]).unwrap()
    }

    #[test]
    fn new_session_draws_word_of_requested_length() {
        let mut game = Game::with_seed(test_index(), 42);

        for _ in 0..20 {
            let session = game.new_session(3).unwrap();
            assert_eq!(session.hidden_word_length(), 3);
            assert!(["cat", "dog", "sun"].contains(&session.hidden_word()));
            assert_eq!(session.current_try(), 1);
            assert!(!session.is_won());
        }
    }

    #[test]
    fn draws_cover_every_candidate() {
        let mut game = Game::with_seed(test_index(), 1);
        let mut seen = std::collections::HashSet::new();

        for _ in 0..200 {
            seen.insert(game.new_session(3).unwrap().hidden_word().to_string());
        }

        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn same_seed_same_words() {
        let mut first = Game::with_seed(test_index(), 99);
        let mut second = Game::with_seed(test_index(), 99);

        for _ in 0..10 {
            assert_eq!(
                first.new_session(3).unwrap(),
                second.new_session(3).unwrap()
            );
        }
    }

    #[test]
    fn empty_length_fails_fast() {
        let mut game = Game::with_seed(test_index(), 0);
        assert_eq!(game.new_session(4).unwrap().hidden_word_length(), 4);
        assert_eq!(
            game.new_session(8).unwrap_err(),
            SessionError::EmptyWordList(8)
        );
    }

    #[test]
    fn word_length_checked_against_loaded_bounds() {
        let game = Game::new(test_index());
        assert_eq!(game.check_word_length("3"), LengthStatus::Ok(3));
        assert_eq!(game.check_word_length("5"), LengthStatus::Ok(5));
        assert_eq!(game.check_word_length("6"), LengthStatus::OutOfRange);
        assert_eq!(game.check_word_length("x"), LengthStatus::NotANumber);
    }

    #[test]
    fn dictionary_size_per_length() {
        let game = Game::new(test_index());
        assert_eq!(game.dictionary_size(3), 3);
        assert_eq!(game.dictionary_size(4), 2);
        assert_eq!(game.dictionary_size(5), 1);
        assert_eq!(game.dictionary_size(6), 0);
    }
}
