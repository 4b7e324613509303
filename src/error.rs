//! Error types for game rule rejections and storage failures.

use thiserror::Error;

/// Reasons a game operation was refused.
///
/// A rejected operation never mutates player or quest state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("quest {0} not found")]
    NotFound(String),

    #[error("quest {0} is already completed")]
    AlreadyCompleted(String),

    #[error("insufficient funds: price {price}, gold {gold}")]
    InsufficientFunds { price: u32, gold: u32 },

    #[error("item {0} is not in the shop catalog")]
    UnknownItem(String),

    #[error("monster {0} is not in the monster catalog")]
    UnknownMonster(String),

    #[error("monster catalog is empty")]
    NoMonsters,
}

/// Errors raised while loading configuration or reading, writing and checking
/// the save file.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("could not determine a data directory for the save file")]
    NoDataDir,

    #[error("invalid configuration: {0}")]
    Config(#[from] ::config::ConfigError),

    #[error("invalid save data: {0}")]
    InvalidState(String),
}

pub type Result<T> = std::result::Result<T, StoreError>;
