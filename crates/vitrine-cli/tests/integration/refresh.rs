//! Integration tests for the refresh path.

use crate::common::{
    healthy_workflow, refresh_input, scp_failing_workflow, FULL_TEMPLATE,
};
use vitrine_core::Error;
use vitrine_render::placeholders;

const WIKI_URL: &str = "https://en.wikipedia.org/wiki/Quantum_mechanics";

#[tokio::test]
async fn test_refresh_renders_complete_document() {
    let workflow = healthy_workflow();
    let input = refresh_input(&["BTC"]);

    let rendered = workflow
        .run(&input, FULL_TEMPLATE, WIKI_URL.to_string())
        .await
        .expect("refresh should succeed");

    // Every placeholder gone, fetched values present, markup preserved.
    assert!(placeholders(&rendered).is_empty());
    assert!(rendered.contains("[SCP-173 — The Sculpture](https://scp-wiki.wikidot.com/scp-173)"));
    assert!(rendered.contains("[Quantum mechanics](https://en.wikipedia.org/wiki/Quantum_mechanics)"));
    assert!(rendered.contains("<td id=\"#BTC\">67,123.46</td>"));
    assert!(rendered.starts_with("# Profile\n"));
}

#[tokio::test]
async fn test_refresh_writes_file_only_on_success() {
    let dir = tempfile::tempdir().expect("tempdir");
    let output = dir.path().join("README.md");

    let workflow = healthy_workflow();
    let input = refresh_input(&["BTC"]);

    let rendered = workflow
        .run(&input, FULL_TEMPLATE, WIKI_URL.to_string())
        .await
        .expect("refresh should succeed");
    std::fs::write(&output, &rendered).expect("write should succeed");

    let written = std::fs::read_to_string(&output).expect("read back");
    assert_eq!(written, rendered);
}

#[tokio::test]
async fn test_failed_fetch_leaves_output_untouched() {
    let dir = tempfile::tempdir().expect("tempdir");
    let output = dir.path().join("README.md");
    std::fs::write(&output, "previously committed content").expect("seed output");

    let workflow = scp_failing_workflow();
    let input = refresh_input(&["BTC"]);

    let result = workflow.run(&input, FULL_TEMPLATE, WIKI_URL.to_string()).await;
    assert!(matches!(result, Err(Error::Fetch { .. })));

    // The caller never writes on failure; the old file must survive.
    let preserved = std::fs::read_to_string(&output).expect("read back");
    assert_eq!(preserved, "previously committed content");
}

#[tokio::test]
async fn test_refresh_rejects_template_with_unknown_placeholder() {
    let workflow = healthy_workflow();
    let input = refresh_input(&[]);
    let template = "{{SCP_TITLE}} {{PRICE_DOGE}}";

    let result = workflow.run(&input, template, WIKI_URL.to_string()).await;

    let Err(Error::MissingValue { token }) = result else {
        unreachable!("Expected MissingValue error");
    };
    assert_eq!(token, "PRICE_DOGE");
}

#[tokio::test]
async fn test_refresh_without_currencies_skips_prices() {
    let workflow = healthy_workflow();
    let input = refresh_input(&[]);
    let template = "{{SCP_TITLE}} / {{WIKIPEDIA_TITLE}}";

    let rendered = workflow
        .run(&input, template, WIKI_URL.to_string())
        .await
        .expect("refresh should succeed without currencies");
    assert_eq!(rendered, "SCP-173 / Quantum mechanics");
}
