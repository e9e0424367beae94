//! Mock LLM provider for tests.

use crate::provider::{CompletionRequest, CompletionResponse, LlmProvider};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;
use vitrine_core::{Error, Result};

/// An in-memory provider that replays canned responses.
///
/// Responses queued with [`MockLlmProvider::new`] are returned in order;
/// once the queue is drained, the fallback response (if configured with
/// [`MockLlmProvider::with_response`]) is returned indefinitely. A drained
/// queue with no fallback yields an LLM error.
pub struct MockLlmProvider {
    responses: Mutex<VecDeque<String>>,
    fallback: Option<String>,
}

impl MockLlmProvider {
    /// Creates a mock that replays the given responses in order.
    pub fn new(responses: Vec<String>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            fallback: None,
        }
    }

    /// Creates a mock that always returns the same response.
    pub fn with_response<S: Into<String>>(response: S) -> Self {
        Self {
            responses: Mutex::new(VecDeque::new()),
            fallback: Some(response.into()),
        }
    }
}

#[async_trait]
impl LlmProvider for MockLlmProvider {
    async fn complete(&self, _request: CompletionRequest) -> Result<CompletionResponse> {
        let next = {
            let mut queue = self
                .responses
                .lock()
                .map_err(|_| Error::llm("mock provider lock poisoned"))?;
            queue.pop_front()
        };

        match next.or_else(|| self.fallback.clone()) {
            Some(content) => Ok(CompletionResponse { content }),
            None => Err(Error::llm("mock provider has no responses left")),
        }
    }
}
