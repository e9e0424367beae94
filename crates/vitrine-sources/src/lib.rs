#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Vitrine Sources Library
//!
//! Fetchers for the external read-only services a refresh run consumes.

pub mod mock;
pub mod prices;
pub mod scp;
pub mod wikipedia;

// Re-export core types
pub use vitrine_core::{Error, Result};

pub use prices::{format_usd, CmcPriceSource, PriceSource, Quote};
pub use scp::{CromScpSource, ScpSource};
