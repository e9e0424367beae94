//! Bounded-retry wrapper around an LLM provider.

use crate::provider::{CompletionRequest, CompletionResponse, LlmProvider};
use async_trait::async_trait;
use backon::{ExponentialBuilder, Retryable};
use std::sync::Arc;
use vitrine_core::{Error, Result};

/// Default number of retry attempts for transient provider failures.
const DEFAULT_MAX_RETRIES: usize = 3;

/// Wraps any [`LlmProvider`] with exponential-backoff retry of retryable
/// errors. Permanent errors (rejections, configuration) pass through
/// untouched.
pub struct RetryProvider {
    inner: Arc<dyn LlmProvider>,
    max_retries: usize,
}

impl RetryProvider {
    /// Wraps a provider with the default retry budget.
    pub fn new(inner: Arc<dyn LlmProvider>) -> Self {
        Self {
            inner,
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }

    /// Sets a custom retry budget.
    pub fn with_max_retries(mut self, max_retries: usize) -> Self {
        self.max_retries = max_retries;
        self
    }
}

#[async_trait]
impl LlmProvider for RetryProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse> {
        let attempt = || {
            let request = request.clone();
            async move { self.inner.complete(request).await }
        };

        attempt
            .retry(ExponentialBuilder::default().with_max_times(self.max_retries))
            .when(Error::is_retryable)
            .notify(|err: &Error, dur: std::time::Duration| {
                tracing::warn!(
                    error = %err,
                    backoff_ms = dur.as_millis() as u64,
                    "Retrying LLM request"
                );
            })
            .await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Provider that fails with a retryable error a fixed number of times
    /// before succeeding.
    struct FlakyProvider {
        failures_remaining: AtomicUsize,
        calls: AtomicUsize,
    }

    impl FlakyProvider {
        fn new(failures: usize) -> Self {
            Self {
                failures_remaining: AtomicUsize::new(failures),
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl LlmProvider for FlakyProvider {
        async fn complete(&self, _request: CompletionRequest) -> Result<CompletionResponse> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self
                .failures_remaining
                .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
                .is_ok()
            {
                return Err(Error::llm("transient failure"));
            }
            Ok(CompletionResponse {
                content: "recovered".to_string(),
            })
        }
    }

    /// Provider that always fails with a permanent error.
    struct RejectingProvider {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl LlmProvider for RejectingProvider {
        async fn complete(&self, _request: CompletionRequest) -> Result<CompletionResponse> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(Error::summary_rejected("not retryable"))
        }
    }

    fn request() -> CompletionRequest {
        CompletionRequest::new(vec![crate::provider::Message::user("go")])
    }

    #[tokio::test]
    async fn test_retries_transient_failures() {
        let flaky = Arc::new(FlakyProvider::new(2));
        let provider = RetryProvider::new(flaky.clone());

        let response = provider.complete(request()).await.unwrap();
        assert_eq!(response.content, "recovered");
        assert_eq!(flaky.calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_exhausts_retry_budget() {
        let flaky = Arc::new(FlakyProvider::new(10));
        let provider = RetryProvider::new(flaky.clone()).with_max_retries(2);

        let result = provider.complete(request()).await;
        assert!(result.is_err());
        // Initial attempt plus two retries.
        assert_eq!(flaky.calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_permanent_errors_are_not_retried() {
        let rejecting = Arc::new(RejectingProvider {
            calls: AtomicUsize::new(0),
        });
        let provider = RetryProvider::new(rejecting.clone());

        let result = provider.complete(request()).await;
        assert!(matches!(result, Err(Error::SummaryRejected { .. })));
        assert_eq!(rejecting.calls.load(Ordering::SeqCst), 1);
    }
}
