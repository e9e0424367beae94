//! Random SCP Foundation articles from the Crom GraphQL API.

use async_trait::async_trait;
use backon::{ExponentialBuilder, Retryable};
use serde::Deserialize;
use vitrine_core::{Error, Result, ScpArticle};

/// Default Crom GraphQL endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.crom.avn.sh/graphql";

/// Default number of retry attempts for transient API failures.
const DEFAULT_MAX_RETRIES: usize = 3;

/// GraphQL query for one random page on the official SCP wiki tagged `scp`.
const RANDOM_SCP_QUERY: &str = "{randomPage(filter: {anyBaseUrl: \
\"http://scp-wiki.wikidot.com\", allTags: \"scp\"}) {page \
{alternateTitles {title}, url, wikidotInfo{title}}}}";

/// A source of random SCP articles.
#[async_trait]
pub trait ScpSource: Send + Sync {
    /// Fetches one random SCP article's metadata.
    async fn random_article(&self) -> Result<ScpArticle>;
}

/// [`ScpSource`] backed by the Crom GraphQL API.
pub struct CromScpSource {
    http: reqwest::Client,
    endpoint: String,
    max_retries: usize,
}

impl CromScpSource {
    /// Creates a new source against the default endpoint.
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }

    /// Overrides the GraphQL endpoint.
    pub fn with_endpoint<S: Into<String>>(mut self, endpoint: S) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Sets a custom retry budget.
    pub fn with_max_retries(mut self, max_retries: usize) -> Self {
        self.max_retries = max_retries;
        self
    }

    async fn fetch_once(&self) -> Result<ScpArticle> {
        tracing::info!(endpoint = %self.endpoint, "Requesting random SCP article");

        let response = self
            .http
            .post(&self.endpoint)
            .json(&serde_json::json!({ "query": RANDOM_SCP_QUERY }))
            .send()
            .await
            .map_err(|e| Error::fetch_with_source("SCP API request failed", e))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(Error::fetch(format!(
                "SCP API returned {status}: {text}"
            )));
        }

        let body: GraphqlResponse = response
            .json()
            .await
            .map_err(|e| Error::fetch_with_source("SCP API response was not valid JSON", e))?;

        body.into_article()
    }
}

impl Default for CromScpSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ScpSource for CromScpSource {
    async fn random_article(&self) -> Result<ScpArticle> {
        let article = (|| self.fetch_once())
            .retry(ExponentialBuilder::default().with_max_times(self.max_retries))
            .when(Error::is_retryable)
            .notify(|err: &Error, dur: std::time::Duration| {
                tracing::warn!(
                    error = %err,
                    backoff_ms = dur.as_millis() as u64,
                    "Retrying SCP API request"
                );
            })
            .await?;

        tracing::info!(title = %article.title, url = %article.url, "SCP article received");
        Ok(article)
    }
}

// --- Wire types -------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct GraphqlResponse {
    data: Option<GraphqlData>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GraphqlData {
    random_page: Option<RandomPage>,
}

#[derive(Debug, Deserialize)]
struct RandomPage {
    page: Option<Page>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Page {
    #[serde(default)]
    alternate_titles: Vec<AlternateTitle>,
    url: String,
    wikidot_info: Option<WikidotInfo>,
}

#[derive(Debug, Deserialize)]
struct AlternateTitle {
    title: String,
}

#[derive(Debug, Deserialize)]
struct WikidotInfo {
    title: String,
}

impl GraphqlResponse {
    fn into_article(self) -> Result<ScpArticle> {
        let page = self
            .data
            .and_then(|data| data.random_page)
            .and_then(|random| random.page)
            .ok_or_else(|| Error::fetch("SCP API response lacked a page"))?;

        let title = page
            .wikidot_info
            .map(|info| info.title)
            .ok_or_else(|| Error::fetch("SCP API response lacked a page title"))?;

        let title_alt = page
            .alternate_titles
            .into_iter()
            .next()
            .map(|alt| alt.title)
            .unwrap_or_default();

        Ok(ScpArticle {
            title,
            title_alt,
            url: page.url,
        })
    }
}
