//! Random Wikipedia article selection from a local URL list.

use rand::Rng;
use std::path::Path;
use vitrine_core::{Error, Result, WikipediaArticle};

/// Picks one URL uniformly at random from a line-separated UTF-8 file.
///
/// Blank lines are skipped; the chosen line is returned trimmed. An empty
/// file (or one containing only blank lines) is a configuration error.
pub fn pick_random_url(urls_path: &Path) -> Result<String> {
    tracing::info!(path = %urls_path.display(), "Picking a random Wikipedia URL");

    let contents = std::fs::read_to_string(urls_path)?;
    let urls: Vec<&str> = contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    if urls.is_empty() {
        return Err(Error::config(format!(
            "Wikipedia URL file {} contains no URLs",
            urls_path.display()
        )));
    }

    let index = rand::rng().random_range(0..urls.len());
    let url = urls[index].to_string();

    tracing::info!(url = %url, "Wikipedia URL picked");
    Ok(url)
}

/// Derives a human-readable title from a Wikipedia article URL: the last
/// path segment, percent-decoded, with underscores replaced by spaces.
pub fn title_from_url(url: &str) -> String {
    let segment = url.rsplit('/').next().unwrap_or(url);
    let decoded = urlencoding::decode(segment)
        .map(|cow| cow.into_owned())
        .unwrap_or_else(|_| segment.to_string());
    decoded.replace('_', " ")
}

/// Builds a [`WikipediaArticle`] (without a summary) from its URL.
pub fn article_from_url<S: Into<String>>(url: S) -> WikipediaArticle {
    let url = url.into();
    WikipediaArticle {
        title: title_from_url(&url),
        url,
    }
}
