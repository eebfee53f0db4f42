//! Typed error enum for the loader crate.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from fetching or parsing a JSON document.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),
    #[error("HTTP status {code}: {body}")]
    HttpStatus { code: u16, body: String },
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("JSON parse error in {context}: {source}")]
    JsonParse {
        context: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("client initialization failed: {0}")]
    ClientInit(String),
}

impl LoadError {
    /// Whether the document was reached but its content was unusable.
    #[must_use]
    pub const fn is_malformed(&self) -> bool {
        matches!(self, Self::JsonParse { .. })
    }
}
