//! Command implementations

pub mod info;
pub mod score;
pub mod simple;

pub use info::{DictionaryInfo, LengthInfo, dictionary_info};
pub use score::{ScoreResult, score_guess};
pub use simple::{run_console, run_simple};
