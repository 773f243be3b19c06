use thiserror::Error;

/// Errors reported by the search service boundary.
///
/// Only two kinds are recognized and surfaced to the user as warnings:
/// [`ServiceError::IndexAlreadyExists`] and [`ServiceError::IndexNotFound`].
/// Everything else propagates to the top-level handler.
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("index '{0}' already exists")]
    IndexAlreadyExists(String),

    #[error("index '{0}' does not exist")]
    IndexNotFound(String),

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("invalid response payload: {0}")]
    InvalidResponse(#[from] serde_json::Error),

    #[error("search service returned {status}: {message}")]
    Unexpected { status: u16, message: String },
}

/// Result type for search service operations.
pub type Result<T> = std::result::Result<T, ServiceError>;
