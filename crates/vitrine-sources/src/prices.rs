//! Cryptocurrency USD quotes from the CoinMarketCap price-conversion API.

use async_trait::async_trait;
use serde::Deserialize;
use vitrine_core::{Error, Result};

/// Default CoinMarketCap API base URL.
pub const DEFAULT_ENDPOINT: &str = "https://pro-api.coinmarketcap.com";

/// A USD quote for one currency symbol.
#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    /// Currency symbol, e.g. `"BTC"`
    pub symbol: String,

    /// Price of one unit in USD
    pub usd: f64,
}

impl Quote {
    /// Formats the USD price with comma thousands separators and two
    /// decimals, e.g. `67,123.45`.
    pub fn formatted(&self) -> String {
        format_usd(self.usd)
    }
}

/// A source of USD quotes.
#[async_trait]
pub trait PriceSource: Send + Sync {
    /// Fetches the current USD quote for one symbol.
    async fn quote(&self, symbol: &str) -> Result<Quote>;
}

/// [`PriceSource`] backed by the CoinMarketCap price-conversion endpoint.
pub struct CmcPriceSource {
    http: reqwest::Client,
    api_key: String,
    endpoint: String,
}

impl CmcPriceSource {
    /// Creates a new source with the given API key.
    pub fn new<S: Into<String>>(api_key: S) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.into(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }

    /// Overrides the API base URL.
    pub fn with_endpoint<S: Into<String>>(mut self, endpoint: S) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

#[async_trait]
impl PriceSource for CmcPriceSource {
    async fn quote(&self, symbol: &str) -> Result<Quote> {
        tracing::info!(symbol = %symbol, "Requesting USD quote");

        let response = self
            .http
            .get(format!("{}/v2/tools/price-conversion", self.endpoint))
            .query(&[("amount", "1"), ("symbol", symbol)])
            .header("Accept", "application/json")
            .header("X-CMC_PRO_API_KEY", &self.api_key)
            .send()
            .await
            .map_err(|e| Error::fetch_with_source("price request failed", e))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(Error::fetch(format!(
                "price API returned {status} for {symbol}: {text}"
            )));
        }

        let body: ConversionResponse = response
            .json()
            .await
            .map_err(|e| Error::fetch_with_source("price response was not valid JSON", e))?;

        let usd = body.usd_price().ok_or_else(|| {
            Error::fetch(format!("price response for {symbol} lacked a USD quote"))
        })?;

        tracing::debug!(symbol = %symbol, usd, "Quote received");

        Ok(Quote {
            symbol: symbol.to_string(),
            usd,
        })
    }
}

/// Formats a USD amount with comma thousands separators and two decimals.
pub fn format_usd(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some(parts) => parts,
        None => (fixed.as_str(), "00"),
    };

    let digits: Vec<char> = int_part.chars().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*c);
    }

    let sign = if amount < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{sign}{grouped}.{frac_part}")
}

// --- Wire types -------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct ConversionResponse {
    #[serde(default)]
    data: Vec<ConversionData>,
}

#[derive(Debug, Deserialize)]
struct ConversionData {
    quote: Option<QuoteMap>,
}

#[derive(Debug, Deserialize)]
struct QuoteMap {
    #[serde(rename = "USD")]
    usd: Option<UsdQuote>,
}

#[derive(Debug, Deserialize)]
struct UsdQuote {
    price: Option<f64>,
}

impl ConversionResponse {
    /// Extracts `data[0].quote.USD.price`.
    fn usd_price(&self) -> Option<f64> {
        self.data.first()?.quote.as_ref()?.usd.as_ref()?.price
    }
}
