//! Configuration parsing helpers.
//!
//! Vitrine is configured from the process environment (surfaced through the
//! CLI's `env =` argument fallbacks). This module holds the parsing and
//! validation that is shared between the binary and the tests: the
//! comma-separated currency list and the `{url}` prompt templates.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Marker that a prompt template must contain; replaced with the article
/// URL when the prompt is sent to the LLM.
pub const URL_MARKER: &str = "{url}";

/// Parses a comma-separated currency list, e.g. `"BTC,ETH"`.
///
/// Symbols are trimmed and upper-cased; empty entries are rejected so a
/// trailing comma surfaces as a configuration error instead of a silent
/// empty fetch.
pub fn parse_currencies(raw: &str) -> Result<Vec<String>> {
    if raw.trim().is_empty() {
        return Err(Error::config("currency list is empty"));
    }

    raw.split(',')
        .map(|entry| {
            let symbol = entry.trim();
            if symbol.is_empty() {
                return Err(Error::config(format!(
                    "empty entry in currency list: {raw:?}"
                )));
            }
            Ok(symbol.to_ascii_uppercase())
        })
        .collect()
}

/// A validated user prompt template for summarization.
///
/// The template must contain the literal `{url}` marker, which is replaced
/// with the article URL at request time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptTemplate(String);

impl PromptTemplate {
    /// Validates and wraps a prompt template.
    pub fn new<S: Into<String>>(template: S) -> Result<Self> {
        let template = template.into();
        if !template.contains(URL_MARKER) {
            return Err(Error::config(format!(
                "prompt template must contain the {URL_MARKER} marker"
            )));
        }
        Ok(Self(template))
    }

    /// Renders the template with the given article URL.
    pub fn format_url(&self, url: &str) -> String {
        self.0.replace(URL_MARKER, url)
    }

    /// Returns the raw template text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
