//! TaskQuest - a to-do list where finishing a task means winning a fight.
//!
//! This library holds the rules core: combat resolution, progression,
//! the potion shop and the quest lifecycle, plus the engine that owns the
//! game state and publishes events to the presentation layer.

pub mod character;
pub mod combat;
pub mod config;
pub mod error;
pub mod game;
pub mod items;
pub mod quests;
pub mod utils;

pub use crate::config::GameConfig;
pub use character::Player;
pub use error::{Rejection, StoreError};
pub use game::{BattleReport, GameEngine, GameEvent, GameState};
pub use utils::SaveStore;
