//! Value types shared across the Vitrine crates.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a single refresh run.
///
/// Internally represented as a UUID v4. A fresh ID is minted per invocation
/// and carried through tracing spans; nothing about a run persists across
/// invocations besides the rendered document itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RunId(Uuid);

impl RunId {
    /// Creates a new random run ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a run ID from a UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for RunId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for RunId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

/// Metadata for a fetched SCP Foundation article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScpArticle {
    /// Official title, e.g. "SCP-173"
    pub title: String,

    /// Alternate title, e.g. "The Sculpture". Empty when the article has
    /// no alternate titles.
    pub title_alt: String,

    /// Full URL to the article on the wiki
    pub url: String,
}

/// Metadata for a chosen Wikipedia article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WikipediaArticle {
    /// Human-readable title derived from the URL
    pub title: String,

    /// Full URL to the article
    pub url: String,
}
