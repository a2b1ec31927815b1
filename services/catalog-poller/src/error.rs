//! Poller-specific error types

use thiserror::Error;

/// Fatal poller errors. Everything here aborts the process with a non-zero
/// exit code.
///
/// Per-page fetch failures are deliberately absent: they end the poll loop
/// gracefully and the accumulated list is still returned, so they never
/// surface as Rust errors from `PollLoop::run`.
#[derive(Error, Debug)]
pub enum Error {
    #[error("authentication failed: {0}")]
    Auth(#[from] twitch_auth::Error),
}

/// Result alias using the poller Error
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_error_wraps_source_message() {
        let err: Error = twitch_auth::Error::AuthRejected("token endpoint returned 403".into()).into();
        let msg = err.to_string();
        assert!(msg.starts_with("authentication failed:"), "got: {msg}");
        assert!(msg.contains("403"), "got: {msg}");
    }
}
