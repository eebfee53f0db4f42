//! Typed error enum for the service layer.

use dashboard_core::PaginationError;
use dashboard_loader::LoadError;
use thiserror::Error;

/// Service-layer error unifying load and pagination failures.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The JSON document could not be fetched or parsed. Already notified.
    #[error("load: {0}")]
    Load(#[from] LoadError),

    /// A page or page-size request was rejected; state unchanged.
    #[error("pagination: {0}")]
    Pagination(#[from] PaginationError),

    /// Caller provided invalid input (unknown collection, unsupported option).
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl ServiceError {
    /// Whether the caller asked for something the current state cannot serve.
    pub fn is_bad_request(&self) -> bool {
        matches!(self, Self::Pagination(_) | Self::InvalidInput(_))
    }
}
