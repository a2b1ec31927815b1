//! Twitch OAuth client-credentials authentication
//!
//! Acquires app access tokens for the IGDB catalog API. The flow is the
//! plain client-credentials grant: a static client id/secret pair is posted
//! to the Twitch token endpoint and a short-lived bearer token comes back.
//! No end user, no refresh token — when the token ages out, the caller
//! simply authenticates again.
//!
//! This crate is a standalone library with no dependency on the poller
//! binary, so it can be tested against a mock token endpoint in isolation.

pub mod constants;
pub mod credentials;
pub mod error;
pub mod token;

pub use constants::TOKEN_ENDPOINT;
pub use credentials::ClientCredentials;
pub use error::{Error, Result};
pub use token::{AuthToken, authenticate};
