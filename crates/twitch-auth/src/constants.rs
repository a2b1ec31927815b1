//! Twitch OAuth constants
//!
//! The token endpoint is Twitch's identity service (`id.twitch.tv`), not
//! the IGDB API host — IGDB delegates authentication to Twitch entirely.

/// Token endpoint for the client-credentials grant
pub const TOKEN_ENDPOINT: &str = "https://id.twitch.tv/oauth2/token";

/// Grant type sent with every token request
pub const GRANT_TYPE: &str = "client_credentials";
