#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Vitrine LLM Library
//!
//! Summarization provider abstraction and implementations.

pub mod gemini;
pub mod mock;
pub mod provider;
pub mod retry;
pub mod summarizer;

// Re-export core types
pub use vitrine_core::{Error, Result};

pub use gemini::GeminiProvider;
pub use mock::MockLlmProvider;
pub use provider::{CompletionRequest, CompletionResponse, LlmProvider, Message};
pub use retry::RetryProvider;
pub use summarizer::Summarizer;
