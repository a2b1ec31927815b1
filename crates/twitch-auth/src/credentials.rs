//! Client credential pair

use common::Secret;

/// Immutable client id/secret pair, sourced once at startup.
///
/// The secret is `Secret`-wrapped so a Debug-print of the credentials (or
/// any struct holding them) cannot leak it into logs.
#[derive(Debug, Clone)]
pub struct ClientCredentials {
    pub client_id: String,
    pub client_secret: Secret<String>,
}

impl ClientCredentials {
    pub fn new(client_id: impl Into<String>, client_secret: String) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: Secret::new(client_secret),
        }
    }
}
