//! Shop catalog and purchases.

pub mod shop;
pub mod types;

pub use shop::*;
pub use types::*;
