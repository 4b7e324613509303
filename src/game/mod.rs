//! Core game state, events and the engine that drives them.

pub mod constants;
pub mod engine;
pub mod events;
pub mod game_state;

pub use constants::*;
pub use engine::*;
pub use events::*;
pub use game_state::*;
