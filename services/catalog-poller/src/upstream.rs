//! HTTP-backed collaborator implementations
//!
//! Binds the loop's `Authenticator`/`Fetcher` seams to the real
//! `twitch-auth` and `igdb-catalog` clients. Both adapters share one
//! `reqwest::Client`; endpoint URLs are constructor parameters so tests can
//! point them at local mock servers, with the crate constants as the
//! production values.

use std::future::Future;
use std::pin::Pin;

use igdb_catalog::GameRecord;
use twitch_auth::{AuthToken, ClientCredentials};

use crate::poll::{Authenticator, Fetcher};

/// Client-credentials authentication against the Twitch token endpoint.
pub struct HttpAuthenticator {
    client: reqwest::Client,
    credentials: ClientCredentials,
    token_url: String,
}

impl HttpAuthenticator {
    pub fn new(
        client: reqwest::Client,
        credentials: ClientCredentials,
        token_url: impl Into<String>,
    ) -> Self {
        Self {
            client,
            credentials,
            token_url: token_url.into(),
        }
    }
}

impl Authenticator for HttpAuthenticator {
    fn authenticate(
        &self,
    ) -> Pin<Box<dyn Future<Output = twitch_auth::Result<AuthToken>> + Send + '_>> {
        Box::pin(twitch_auth::authenticate(
            &self.client,
            &self.token_url,
            &self.credentials,
        ))
    }
}

/// Paginated catalog queries against the IGDB games endpoint.
pub struct HttpFetcher {
    client: reqwest::Client,
    client_id: String,
    games_url: String,
}

impl HttpFetcher {
    pub fn new(
        client: reqwest::Client,
        client_id: impl Into<String>,
        games_url: impl Into<String>,
    ) -> Self {
        Self {
            client,
            client_id: client_id.into(),
            games_url: games_url.into(),
        }
    }
}

impl Fetcher for HttpFetcher {
    fn fetch_page<'a>(
        &'a self,
        token: &'a AuthToken,
        limit: u32,
        offset: u64,
    ) -> Pin<Box<dyn Future<Output = igdb_catalog::Result<Vec<GameRecord>>> + Send + 'a>> {
        Box::pin(igdb_catalog::fetch_page(
            &self.client,
            &self.games_url,
            &self.client_id,
            &token.access_token,
            limit,
            offset,
        ))
    }
}
