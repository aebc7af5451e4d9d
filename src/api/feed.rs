//! Astronomy feed client
//!
//! Fetches the static JSON feed of daily astronomy items in a single GET.
//! No query parameters, no auth, no timeout, no retry.

use serde::Deserialize;
use thiserror::Error;

use crate::models::FeedItem;

/// Fixed feed location
pub const FEED_URL: &str = "https://cdn.jsdelivr.net/gh/GCA-Classroom/apod/data.json";

/// Feed fetch error types
///
/// Every variant surfaces to the user as the same message; the variant only
/// matters for the log.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Feed returned HTTP {0}")]
    Status(u16),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Feed client
#[derive(Debug, Clone)]
pub struct FeedClient {
    url: String,
    client: reqwest::Client,
}

impl FeedClient {
    /// Create a client pointed at the fixed feed URL
    pub fn new() -> Self {
        Self::with_url(FEED_URL)
    }

    /// Create a client with a custom feed URL (config override, tests)
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: reqwest::Client::new(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch and validate every item in the feed
    pub async fn fetch_items(&self) -> Result<Vec<FeedItem>, FetchError> {
        tracing::debug!(url = %self.url, "fetching feed");

        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let text = response.text().await?;
        let items = parse_feed(&text)?;

        tracing::info!(count = items.len(), "feed loaded");
        Ok(items)
    }
}

impl Default for FeedClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a feed body into items
///
/// The body must be a JSON array and every element must carry all five
/// fields with string values.
pub fn parse_feed(body: &str) -> Result<Vec<FeedItem>, FetchError> {
    #[derive(Deserialize)]
    #[serde(transparent)]
    struct Feed(Vec<FeedItem>);

    serde_json::from_str::<Feed>(body)
        .map(|feed| feed.0)
        .map_err(|e| FetchError::InvalidResponse(format!("JSON parse error: {}", e)))
}
