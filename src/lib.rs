//! Bulls & Cows
//!
//! A terminal word game: guess the hidden isogram, a word with no repeating
//! letters. Each guess is scored in bulls (right letter, right place) and cows
//! (right letter, wrong place) until the word is found or the tries run out.
//!
//! # Quick Start
//!
//! ```rust
//! use bulls_cows::game::{Game, GameStats};
//! use bulls_cows::wordlists::WordIndex;
//!
//! let index = WordIndex::from_lines(["plan", "ship", "crane"]).unwrap();
//! let mut game = Game::with_seed(index, 42);
//! let mut stats = GameStats::new();
//!
//! let mut session = game.new_session(5).unwrap();
//! let count = session.submit_valid_guess("crane");
//! assert_eq!(count.bulls, 5);
//! assert!(session.is_won());
//!
//! stats.record_result(session.is_won());
//! assert_eq!(stats.win_percentage(), 100);
//! ```

// Core domain rules
pub mod core;

// Game state
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
