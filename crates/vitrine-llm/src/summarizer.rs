//! Article summarization with acceptance rules.

use crate::provider::{CompletionRequest, LlmProvider, Message};
use std::sync::Arc;
use vitrine_core::{config::PromptTemplate, Error, Result};

/// Minimum accepted summary length in characters.
///
/// Summaries at or below this length carry too little content to be worth
/// publishing; the run fails rather than writing a thin summary.
pub const MIN_SUMMARY_CHARS: usize = 200;

/// Sampling temperature used for summarization requests.
const SUMMARY_TEMPERATURE: f32 = 0.6;

/// Number of re-asks when the model reports an error in-band.
const DEFAULT_MAX_RETRIES: u32 = 3;

/// Generates and validates article summaries through an [`LlmProvider`].
///
/// The provider's output is accepted only if it passes the in-band checks:
/// a response containing `INAPPROPRIATE` is rejected outright, a response
/// containing `ERROR` is re-asked up to the retry budget, and the trimmed
/// text must exceed [`MIN_SUMMARY_CHARS`]. Accepted summaries have newlines
/// collapsed to spaces so they fit a single template line.
pub struct Summarizer {
    provider: Arc<dyn LlmProvider>,
    max_retries: u32,
}

impl Summarizer {
    /// Creates a summarizer with the default retry budget.
    pub fn new(provider: Arc<dyn LlmProvider>) -> Self {
        Self {
            provider,
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }

    /// Sets a custom re-ask budget for in-band `ERROR` responses.
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Summarizes the article at `url` using the given prompt template.
    pub async fn summarize(
        &self,
        prompt: &PromptTemplate,
        system_prompt: Option<&str>,
        url: &str,
    ) -> Result<String> {
        let user_prompt = prompt.format_url(url);
        let mut attempts_left = self.max_retries;

        tracing::info!(url = %url, "Requesting summary");

        loop {
            let mut request = CompletionRequest::new(vec![Message::user(user_prompt.clone())])
                .with_temperature(SUMMARY_TEMPERATURE);
            if let Some(system) = system_prompt {
                request = request.with_system_prompt(system);
            }

            let response = self.provider.complete(request).await?;
            let text = response.content;

            if text.contains("INAPPROPRIATE") {
                tracing::warn!(url = %url, "Model flagged the article as inappropriate");
                return Err(Error::summary_rejected(
                    "model flagged the content as inappropriate",
                ));
            }

            if text.contains("ERROR") {
                if attempts_left == 0 {
                    return Err(Error::llm(
                        "model kept reporting an error generating the summary",
                    ));
                }
                attempts_left -= 1;
                tracing::warn!(
                    url = %url,
                    attempts_left,
                    "Model reported an error, retrying summarization"
                );
                continue;
            }

            let trimmed = text.trim();
            if trimmed.len() <= MIN_SUMMARY_CHARS {
                tracing::warn!(url = %url, chars = trimmed.len(), "Summary too short");
                return Err(Error::summary_rejected(format!(
                    "summary too short: {} chars",
                    trimmed.len()
                )));
            }

            let summary = trimmed.replace('\n', " ");
            tracing::info!(url = %url, chars = summary.len(), "Summary accepted");
            return Ok(summary);
        }
    }
}
