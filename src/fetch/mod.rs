//! Release fetching
//!
//! Downloads the current ontology document and the JSON file that declares
//! its release date. The [`ReleaseFetcher`] trait keeps the pipeline free of
//! any particular HTTP client:
//! - HttpReleaseFetcher: reqwest client (feature `api-backend`)
//! - any in-process fake implementing the trait (tests)

use async_trait::async_trait;

/// JSON field of the release-date document holding the date
pub const RELEASE_DATE_FIELD: &str = "date";

/// Error type for fetch operations
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("Request to {url} failed with status {status}")]
    Status { url: String, status: u16 },
    #[error("Invalid JSON from {url}: {message}")]
    InvalidJson { url: String, message: String },
    #[error("Field '{field}' missing from release metadata")]
    MissingField { field: &'static str },
}

/// Source of ontology releases
#[async_trait(?Send)]
pub trait ReleaseFetcher: Send + Sync {
    /// Fetch a document as text
    async fn fetch_text(&self, url: &str) -> Result<String, FetchError>;

    /// Fetch a document and decode it as JSON
    async fn fetch_json(&self, url: &str) -> Result<serde_json::Value, FetchError> {
        let text = self.fetch_text(url).await?;
        serde_json::from_str(&text).map_err(|e| FetchError::InvalidJson {
            url: url.to_string(),
            message: e.to_string(),
        })
    }
}

/// Extract the release date from release metadata (`{"date": "2024-01-17"}`)
pub fn release_date_from_json(metadata: &serde_json::Value) -> Result<String, FetchError> {
    metadata
        .get(RELEASE_DATE_FIELD)
        .and_then(|value| value.as_str())
        .map(str::to_string)
        .ok_or(FetchError::MissingField {
            field: RELEASE_DATE_FIELD,
        })
}

/// Fetch release metadata from `url` and return its date
pub async fn fetch_release_date<F: ReleaseFetcher + ?Sized>(
    fetcher: &F,
    url: &str,
) -> Result<String, FetchError> {
    let metadata = fetcher.fetch_json(url).await?;
    release_date_from_json(&metadata)
}

#[cfg(feature = "api-backend")]
pub mod http;

#[cfg(feature = "api-backend")]
pub use http::HttpReleaseFetcher;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct StaticFetcher(&'static str);

    #[async_trait(?Send)]
    impl ReleaseFetcher for StaticFetcher {
        async fn fetch_text(&self, _url: &str) -> Result<String, FetchError> {
            Ok(self.0.to_string())
        }
    }

    #[test]
    fn test_release_date_from_json() {
        let date = release_date_from_json(&json!({"date": "2024-01-17"})).unwrap();
        assert_eq!(date, "2024-01-17");
    }

    #[test]
    fn test_release_date_missing() {
        let result = release_date_from_json(&json!({"version": "2024-01-17"}));
        assert!(matches!(result, Err(FetchError::MissingField { field: "date" })));

        let result = release_date_from_json(&json!({"date": 20240117}));
        assert!(matches!(result, Err(FetchError::MissingField { .. })));
    }

    #[tokio::test]
    async fn test_fetch_release_date() {
        let fetcher = StaticFetcher(r#"{"date": "2023-11-15"}"#);
        let date = fetch_release_date(&fetcher, "http://example.org/release-date.json")
            .await
            .unwrap();
        assert_eq!(date, "2023-11-15");
    }

    #[tokio::test]
    async fn test_fetch_json_rejects_invalid_body() {
        let fetcher = StaticFetcher("<html>");
        let result = fetcher.fetch_json("http://example.org").await;
        assert!(matches!(result, Err(FetchError::InvalidJson { .. })));
    }
}
