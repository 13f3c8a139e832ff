//! Game state
//!
//! - [`Game`]: the engine owning the dictionary and the word generator
//! - [`GameSession`]: one round against one hidden word
//! - [`GameStats`]: results across rounds, owned by the caller
//! - [`ReplayChoice`]: the menu shown between rounds

mod engine;
mod replay;
mod session;
mod stats;

pub use engine::Game;
pub use replay::ReplayChoice;
pub use session::{GameSession, SessionError};
pub use stats::GameStats;
