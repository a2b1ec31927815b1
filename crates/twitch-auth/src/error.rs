//! Error types for token acquisition

/// Errors from the token endpoint interaction.
///
/// Every variant is fatal to the poller: the control loop never retries
/// authentication, it propagates the error and the process exits non-zero.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("authentication rejected: {0}")]
    AuthRejected(String),

    #[error("invalid token response: {0}")]
    InvalidResponse(String),
}

/// Result alias for auth operations.
pub type Result<T> = std::result::Result<T, Error>;
