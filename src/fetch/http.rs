//! HTTP release fetcher
//!
//! Implements ReleaseFetcher with a reqwest client.

use super::{FetchError, ReleaseFetcher};
use async_trait::async_trait;
use tracing::debug;

/// Fetches releases over HTTP
pub struct HttpReleaseFetcher {
    client: reqwest::Client,
}

impl HttpReleaseFetcher {
    /// Create a fetcher with a default client
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// # use ontology_changes_sdk::fetch::{HttpReleaseFetcher, fetch_release_date};
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let fetcher = HttpReleaseFetcher::new();
    /// let date = fetch_release_date(
    ///     &fetcher,
    ///     "http://current.geneontology.org/metadata/release-date.json",
    /// )
    /// .await?;
    /// println!("Current release: {}", date);
    /// # Ok(())
    /// # }
    /// ```
    pub fn new() -> Self {
        Self::with_client(reqwest::Client::new())
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    async fn get(&self, url: &str) -> Result<reqwest::Response, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::NetworkError(format!("Failed to fetch {}: {}", url, e)))?;

        if !response.status().is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: response.status().as_u16(),
            });
        }

        Ok(response)
    }
}

impl Default for HttpReleaseFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl ReleaseFetcher for HttpReleaseFetcher {
    async fn fetch_text(&self, url: &str) -> Result<String, FetchError> {
        let text = self
            .get(url)
            .await?
            .text()
            .await
            .map_err(|e| FetchError::NetworkError(format!("Failed to read body of {}: {}", url, e)))?;
        debug!(url, bytes = text.len(), "Fetched document");
        Ok(text)
    }

    async fn fetch_json(&self, url: &str) -> Result<serde_json::Value, FetchError> {
        self.get(url)
            .await?
            .json()
            .await
            .map_err(|e| FetchError::InvalidJson {
                url: url.to_string(),
                message: e.to_string(),
            })
    }
}
