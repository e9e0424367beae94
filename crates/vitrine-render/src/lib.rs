#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Vitrine Render Library
//!
//! Placeholder substitution and price-cell updates.

pub mod cells;
pub mod template;

// Re-export core types
pub use vitrine_core::{Error, Result};

pub use cells::update_price_cells;
pub use template::{placeholders, render, ValueSet};
