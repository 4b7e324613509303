//! Utility modules: save file persistence.

pub mod persistence;

pub use persistence::*;
