//! Quest records and their pending -> completed lifecycle.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
