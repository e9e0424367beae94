#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Vitrine CLI Library
//!
//! The refresh workflow behind the `vitrine` binary.

pub mod workflow;

// Re-export core types
pub use vitrine_core::{Error, Result};
