#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Vitrine Core Library
//!
//! Core types, errors, and configuration shared across the Vitrine crates.

pub mod config;
pub mod error;
pub mod types;

// Re-exports for convenience
pub use config::{parse_currencies, PromptTemplate};
pub use error::{Error, Result};
pub use types::{RunId, ScpArticle, WikipediaArticle};
