//! Mock sources for tests.

use crate::prices::{PriceSource, Quote};
use crate::scp::ScpSource;
use async_trait::async_trait;
use std::collections::HashMap;
use vitrine_core::{Error, Result, ScpArticle};

/// [`ScpSource`] that returns a fixed article, or fails on demand.
pub struct MockScpSource {
    article: Option<ScpArticle>,
}

impl MockScpSource {
    /// Creates a mock that always returns the given article.
    pub fn new(article: ScpArticle) -> Self {
        Self {
            article: Some(article),
        }
    }

    /// Creates a mock that always fails with a fetch error.
    pub fn failing() -> Self {
        Self { article: None }
    }
}

#[async_trait]
impl ScpSource for MockScpSource {
    async fn random_article(&self) -> Result<ScpArticle> {
        self.article
            .clone()
            .ok_or_else(|| Error::fetch("mock SCP source failure"))
    }
}

/// [`PriceSource`] backed by a fixed symbol-to-price table.
pub struct MockPriceSource {
    quotes: HashMap<String, f64>,
}

impl MockPriceSource {
    /// Creates a mock from `(symbol, usd)` pairs.
    pub fn new(quotes: &[(&str, f64)]) -> Self {
        Self {
            quotes: quotes
                .iter()
                .map(|(symbol, usd)| (symbol.to_string(), *usd))
                .collect(),
        }
    }
}

#[async_trait]
impl PriceSource for MockPriceSource {
    async fn quote(&self, symbol: &str) -> Result<Quote> {
        match self.quotes.get(symbol) {
            Some(usd) => Ok(Quote {
                symbol: symbol.to_string(),
                usd: *usd,
            }),
            None => Err(Error::fetch(format!("no mock quote for {symbol}"))),
        }
    }
}
