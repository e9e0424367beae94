//! Common test utilities and harness for Vitrine integration tests.

use std::sync::Arc;
use vitrine_cli::workflow::{RefreshInput, RefreshWorkflow};
use vitrine_core::config::PromptTemplate;
use vitrine_core::ScpArticle;
use vitrine_llm::{MockLlmProvider, Summarizer};
use vitrine_sources::mock::{MockPriceSource, MockScpSource};

/// A template covering every placeholder the refresh workflow supplies.
pub const FULL_TEMPLATE: &str = "\
# Profile

## Featured SCP

[{{SCP_TITLE}} — {{SCP_TITLE_ALT}}]({{SCP_URL}})

{{SCP_SUMMARY}}

## Featured Wikipedia article

[{{WIKIPEDIA_TITLE}}]({{WIKIPEDIA_URL}})

{{WIKIPEDIA_SUMMARY}}

## Prices

<table>
<tr><td>Bitcoin</td><td id=\"#BTC\">{{PRICE_BTC}}</td></tr>
</table>
";

/// Returns a summary long enough to pass the acceptance rules.
pub fn long_summary() -> String {
    "A detailed, informative summary of the featured article. ".repeat(5)
}

/// Returns the SCP article every successful mock run features.
pub fn scp_article() -> ScpArticle {
    ScpArticle {
        title: "SCP-173".to_string(),
        title_alt: "The Sculpture".to_string(),
        url: "https://scp-wiki.wikidot.com/scp-173".to_string(),
    }
}

/// Builds a refresh input for the given currency symbols.
pub fn refresh_input(currencies: &[&str]) -> RefreshInput {
    RefreshInput::new(
        currencies.iter().map(|s| s.to_string()).collect(),
        PromptTemplate::new("Summarize the SCP article at {url}").unwrap(),
        PromptTemplate::new("Summarize the Wikipedia article at {url}").unwrap(),
    )
}

/// Builds a workflow whose every fetch succeeds.
pub fn healthy_workflow() -> RefreshWorkflow {
    let llm = Arc::new(MockLlmProvider::with_response(long_summary()));
    RefreshWorkflow::new(
        Arc::new(MockScpSource::new(scp_article())),
        Arc::new(MockPriceSource::new(&[("BTC", 67123.456)])),
        Summarizer::new(llm),
    )
}

/// Builds a workflow whose SCP fetch always fails.
pub fn scp_failing_workflow() -> RefreshWorkflow {
    let llm = Arc::new(MockLlmProvider::with_response(long_summary()));
    RefreshWorkflow::new(
        Arc::new(MockScpSource::failing()),
        Arc::new(MockPriceSource::new(&[("BTC", 67123.456)])),
        Summarizer::new(llm),
    )
}
