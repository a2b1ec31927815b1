//! Error types for catalog queries
//!
//! The poll loop collapses every variant here into "stop polling" — it does
//! not distinguish transport failures from API rejections, and an empty
//! page (which is not an error at this layer) gets the same treatment.

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("catalog query rejected: {0}")]
    Api(String),

    #[error("invalid catalog response: {0}")]
    Decode(String),
}

/// Result alias for catalog operations.
pub type Result<T> = std::result::Result<T, Error>;
