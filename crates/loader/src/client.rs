use std::time::Duration;

use async_trait::async_trait;
use dashboard_core::DEFAULT_HTTP_TIMEOUT_SECS;
use serde::de::DeserializeOwned;

use crate::error::LoadError;
use crate::source::DataSource;

/// Longest body excerpt carried inside an error message.
const ERROR_BODY_EXCERPT: usize = 200;

/// Raw document fetch; the seam services depend on.
#[async_trait]
pub trait RecordLoader: Send + Sync {
    /// Returns the document body.
    ///
    /// # Errors
    /// Returns an error if the document cannot be reached or read.
    async fn fetch_text(&self, source: &DataSource) -> Result<String, LoadError>;
}

/// Parses a flat JSON array of records.
///
/// # Errors
/// Returns [`LoadError::JsonParse`] if `body` is not an array of `T`.
pub fn parse_records<T: DeserializeOwned>(body: &str, context: &str) -> Result<Vec<T>, LoadError> {
    serde_json::from_str(body).map_err(|e| LoadError::JsonParse {
        context: format!("{context} (body: {})", truncate(body, ERROR_BODY_EXCERPT)),
        source: e,
    })
}

/// Fetches JSON documents from HTTP URLs or the local filesystem.
#[derive(Debug, Clone)]
pub struct DataLoader {
    client: reqwest::Client,
}

impl DataLoader {
    /// # Errors
    /// Returns an error if the HTTP client cannot be built (TLS backend failure).
    pub fn new(timeout: Duration) -> Result<Self, LoadError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LoadError::ClientInit(e.to_string()))?;
        Ok(Self { client })
    }

    /// Loader with the default timeout.
    ///
    /// # Errors
    /// See [`DataLoader::new`].
    pub fn with_default_timeout() -> Result<Self, LoadError> {
        Self::new(Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS))
    }

    /// Fetches `source` once and parses it as a JSON array.
    ///
    /// # Errors
    /// Returns an error on network/IO failure, a non-success HTTP status, or a
    /// body that is not a JSON array of `T`.
    pub async fn load<T: DeserializeOwned>(&self, source: &DataSource) -> Result<Vec<T>, LoadError> {
        let body = self.fetch_text(source).await?;
        let records: Vec<T> = parse_records(&body, &source.to_string())?;
        tracing::debug!(%source, count = records.len(), "loaded records");
        Ok(records)
    }

    async fn fetch_http(&self, url: &str) -> Result<String, LoadError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Could not read error body".to_owned());
            return Err(LoadError::HttpStatus {
                code: status.as_u16(),
                body: truncate(&body, ERROR_BODY_EXCERPT).to_owned(),
            });
        }
        Ok(response.text().await?)
    }
}

#[async_trait]
impl RecordLoader for DataLoader {
    async fn fetch_text(&self, source: &DataSource) -> Result<String, LoadError> {
        tracing::debug!(%source, "fetching document");
        match source {
            DataSource::Http(url) => self.fetch_http(url).await,
            DataSource::File(path) => tokio::fs::read_to_string(path)
                .await
                .map_err(|e| LoadError::Io { path: path.clone(), source: e }),
        }
    }
}

/// Truncates a string to the given maximum length at a char boundary.
#[must_use]
pub fn truncate(s: &str, max_len: usize) -> &str {
    if s.len() <= max_len {
        return s;
    }
    let mut end = max_len;
    while end > 0 && !s.is_char_boundary(end) {
        end = end.saturating_sub(1);
    }
    s.get(..end).unwrap_or("")
}
