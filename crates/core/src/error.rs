use thiserror::Error;

/// Errors returned by [`crate::PaginationEngine`] when a request is rejected.
///
/// The engine state is left untouched whenever one of these is returned.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaginationError {
    #[error("page {page} is out of range (total pages: {total_pages})")]
    OutOfRange { page: usize, total_pages: usize },

    #[error("invalid page size: {0} (must be at least 1)")]
    InvalidPageSize(usize),
}

pub type Result<T> = std::result::Result<T, PaginationError>;
