//! The refresh workflow: fetch everything, assemble the value set, render.

use std::sync::Arc;
use vitrine_core::{config::PromptTemplate, Result, RunId};
use vitrine_llm::Summarizer;
use vitrine_render::{render, ValueSet};
use vitrine_sources::{wikipedia, PriceSource, ScpSource};

/// Input for one refresh run.
#[derive(Debug, Clone)]
pub struct RefreshInput {
    /// Unique ID for this run, carried through tracing
    pub run_id: RunId,

    /// Currency symbols to quote; may be empty when the template carries
    /// no price placeholders
    pub currencies: Vec<String>,

    /// Prompt template for SCP summaries
    pub scp_prompt: PromptTemplate,

    /// Prompt template for Wikipedia summaries
    pub wikipedia_prompt: PromptTemplate,

    /// Optional system prompt for SCP summaries
    pub scp_system_prompt: Option<String>,

    /// Optional system prompt for Wikipedia summaries
    pub wikipedia_system_prompt: Option<String>,
}

impl RefreshInput {
    /// Creates a new refresh input with a fresh run ID.
    pub fn new(
        currencies: Vec<String>,
        scp_prompt: PromptTemplate,
        wikipedia_prompt: PromptTemplate,
    ) -> Self {
        Self {
            run_id: RunId::new(),
            currencies,
            scp_prompt,
            wikipedia_prompt,
            scp_system_prompt: None,
            wikipedia_system_prompt: None,
        }
    }

    /// Sets a system prompt for SCP summaries.
    pub fn with_scp_system_prompt<S: Into<String>>(mut self, prompt: S) -> Self {
        self.scp_system_prompt = Some(prompt.into());
        self
    }

    /// Sets a system prompt for Wikipedia summaries.
    pub fn with_wikipedia_system_prompt<S: Into<String>>(mut self, prompt: S) -> Self {
        self.wikipedia_system_prompt = Some(prompt.into());
        self
    }
}

/// Linear refresh workflow behind the `vitrine refresh` subcommand.
///
/// Fetches run sequentially; any failure aborts the run before anything is
/// written, leaving the previously committed file untouched. The next
/// scheduled invocation is the sole recovery mechanism.
pub struct RefreshWorkflow {
    scp: Arc<dyn ScpSource>,
    prices: Arc<dyn PriceSource>,
    summarizer: Summarizer,
}

impl RefreshWorkflow {
    /// Creates a workflow over the given sources.
    pub fn new(
        scp: Arc<dyn ScpSource>,
        prices: Arc<dyn PriceSource>,
        summarizer: Summarizer,
    ) -> Self {
        Self {
            scp,
            prices,
            summarizer,
        }
    }

    /// Runs one refresh: quotes, SCP article, Wikipedia article, render.
    ///
    /// Returns the rendered document; the caller performs the single file
    /// write on success.
    pub async fn run(
        &self,
        input: &RefreshInput,
        template: &str,
        wikipedia_url: String,
    ) -> Result<String> {
        tracing::info!(
            run_id = %input.run_id,
            currencies = input.currencies.len(),
            "Starting refresh run"
        );

        let mut values = ValueSet::new();

        // Step 1: price quotes, one placeholder per symbol
        for symbol in &input.currencies {
            let quote = self.prices.quote(symbol).await?;
            values.insert(format!("PRICE_{symbol}"), quote.formatted());
        }

        // Step 2: SCP article and its summary
        let scp = self.scp.random_article().await?;
        tracing::info!(run_id = %input.run_id, title = %scp.title, "Summarizing SCP article");
        let scp_summary = self
            .summarizer
            .summarize(
                &input.scp_prompt,
                input.scp_system_prompt.as_deref(),
                &scp.url,
            )
            .await?;

        values.insert("SCP_URL", scp.url);
        values.insert("SCP_TITLE", scp.title);
        values.insert("SCP_TITLE_ALT", scp.title_alt);
        values.insert("SCP_SUMMARY", scp_summary);

        // Step 3: Wikipedia article and its summary
        let wiki = wikipedia::article_from_url(wikipedia_url);
        tracing::info!(run_id = %input.run_id, title = %wiki.title, "Summarizing Wikipedia article");
        let wiki_summary = self
            .summarizer
            .summarize(
                &input.wikipedia_prompt,
                input.wikipedia_system_prompt.as_deref(),
                &wiki.url,
            )
            .await?;

        values.insert("WIKIPEDIA_URL", wiki.url);
        values.insert("WIKIPEDIA_TITLE", wiki.title);
        values.insert("WIKIPEDIA_SUMMARY", wiki_summary);

        // Step 4: render the template
        let rendered = render(template, &values)?;

        tracing::info!(
            run_id = %input.run_id,
            values = values.len(),
            bytes = rendered.len(),
            "Refresh run completed"
        );

        Ok(rendered)
    }
}
