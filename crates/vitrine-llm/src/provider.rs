//! The LLM provider trait and its request/response types.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use vitrine_core::Result;

/// A single message in a completion request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Role of the message author, e.g. `"user"`
    pub role: String,

    /// Message text
    pub content: String,
}

impl Message {
    /// Creates a user-role message.
    pub fn user<S: Into<String>>(content: S) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Request for a text completion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionRequest {
    /// Conversation messages, in order
    pub messages: Vec<Message>,

    /// Optional system-level instructions
    pub system_prompt: Option<String>,

    /// Sampling temperature
    pub temperature: Option<f32>,

    /// Upper bound on generated tokens
    pub max_output_tokens: Option<u32>,
}

impl CompletionRequest {
    /// Creates a new completion request from messages.
    pub fn new(messages: Vec<Message>) -> Self {
        Self {
            messages,
            system_prompt: None,
            temperature: None,
            max_output_tokens: None,
        }
    }

    /// Sets a system prompt.
    pub fn with_system_prompt<S: Into<String>>(mut self, prompt: S) -> Self {
        self.system_prompt = Some(prompt.into());
        self
    }

    /// Sets the sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Sets the output token limit.
    pub fn with_max_output_tokens(mut self, max: u32) -> Self {
        self.max_output_tokens = Some(max);
        self
    }
}

/// Response from a completion request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionResponse {
    /// Generated text
    pub content: String,
}

/// A text-completion provider.
///
/// The seam between the workflow and the concrete LLM service; tests swap
/// in [`crate::MockLlmProvider`], production wires up
/// [`crate::GeminiProvider`] behind [`crate::RetryProvider`].
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Generates a completion for the given request.
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse>;
}
