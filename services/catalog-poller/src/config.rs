//! Configuration types and loading
//!
//! Precedence: env vars > config file > defaults. Credentials are env-only
//! (`CLIENT_ID` / `CLIENT_SECRET`), never stored in the TOML, and the
//! secret is `Secret`-wrapped the moment it is read.

use common::Secret;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::warn;
use twitch_auth::ClientCredentials;

use crate::filter::NameFilter;

/// Default config file looked for when neither `--config` nor
/// `CONFIG_PATH` is given. Unlike an explicit path, its absence just means
/// defaults.
const DEFAULT_CONFIG_FILE: &str = "catalog-poller.toml";

/// Root configuration
#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub filter: NameFilter,
    #[serde(skip)]
    pub client_id: String,
    #[serde(skip, default = "empty_secret")]
    pub client_secret: Secret<String>,
}

/// Catalog API settings
#[derive(Debug, Deserialize)]
pub struct ApiConfig {
    /// Records per page; `API_RATE` in the environment overrides this
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

fn default_page_size() -> u32 {
    10
}

fn empty_secret() -> Secret<String> {
    Secret::new(String::new())
}

impl Config {
    /// Load configuration from an optional TOML file, then overlay
    /// environment variables.
    ///
    /// `API_RATE` must parse as a positive integer; anything else is
    /// logged and ignored so a valid page size always applies. The
    /// original consumer of this API silently ended up with NaN here —
    /// the explicit fallback is deliberate.
    pub fn load(path: Option<&Path>) -> common::Result<Self> {
        let mut config: Config = match path {
            Some(p) => {
                let contents = std::fs::read_to_string(p)?;
                toml::from_str(&contents)?
            }
            None => Config {
                api: ApiConfig::default(),
                filter: NameFilter::default(),
                client_id: String::new(),
                client_secret: empty_secret(),
            },
        };

        if let Ok(id) = std::env::var("CLIENT_ID") {
            config.client_id = id;
        }
        if let Ok(secret) = std::env::var("CLIENT_SECRET") {
            config.client_secret = Secret::new(secret);
        }

        if let Ok(rate) = std::env::var("API_RATE") {
            match rate.parse::<u32>() {
                Ok(n) if n > 0 => config.api.page_size = n,
                _ => warn!(
                    value = %rate,
                    fallback = config.api.page_size,
                    "ignoring invalid API_RATE"
                ),
            }
        }

        if config.api.page_size == 0 {
            return Err(common::Error::Config(
                "page_size must be greater than 0".into(),
            ));
        }
        if config.filter.length == 0 {
            return Err(common::Error::Config(
                "filter length must be greater than 0".into(),
            ));
        }
        if config.client_id.is_empty() || config.client_secret.is_empty() {
            // Matches the original behavior: empty credentials are allowed
            // here and fail at the token endpoint instead.
            warn!("CLIENT_ID/CLIENT_SECRET not set, authentication will fail");
        }

        Ok(config)
    }

    /// Resolve the config file path: `--config` arg, then `CONFIG_PATH`
    /// env var, then the default file if it exists.
    pub fn resolve_path(cli_path: Option<&str>) -> Option<PathBuf> {
        if let Some(p) = cli_path {
            return Some(PathBuf::from(p));
        }
        if let Ok(p) = std::env::var("CONFIG_PATH") {
            return Some(PathBuf::from(p));
        }
        let default = PathBuf::from(DEFAULT_CONFIG_FILE);
        default.exists().then_some(default)
    }

    /// Credential pair for the authenticator.
    pub fn credentials(&self) -> ClientCredentials {
        ClientCredentials::new(self.client_id.clone(), self.client_secret.expose().clone())
    }
}
