//! IGDB Catalog Poller
//!
//! Single-binary client that:
//! 1. Acquires a Twitch app access token (client-credentials grant)
//! 2. Polls the IGDB games catalog in batches of four paginated requests,
//!    at most one batch per 2.5 seconds
//! 3. Filters each record's names and accumulates the keepers
//! 4. Re-authenticates when the token ages out
//! 5. Prints the accumulated list, comma-separated, when the catalog stops
//!    yielding pages

mod config;
mod error;
mod filter;
mod poll;
mod upstream;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::poll::{CYCLE_INTERVAL, PollLoop};
use crate::upstream::{HttpAuthenticator, HttpFetcher};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing with JSON output and LOG_LEVEL / RUST_LOG support
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_env("LOG_LEVEL")
                .or_else(|_| EnvFilter::try_from_default_env())
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    info!("starting igdb-catalog-poller");

    // CLI: simple --config flag parsing
    let args: Vec<String> = std::env::args().collect();
    let cli_config_path = args
        .iter()
        .position(|a| a == "--config")
        .and_then(|i| args.get(i + 1))
        .map(|s| s.as_str());

    let config_path = Config::resolve_path(cli_config_path);
    match &config_path {
        Some(path) => info!(path = %path.display(), "loading configuration"),
        None => info!("no config file, using defaults"),
    }

    let config = Config::load(config_path.as_deref()).context("failed to load configuration")?;

    info!(
        page_size = config.api.page_size,
        filter = ?config.filter,
        "configuration loaded"
    );

    let client = reqwest::Client::new();
    let authenticator = HttpAuthenticator::new(
        client.clone(),
        config.credentials(),
        twitch_auth::TOKEN_ENDPOINT,
    );
    let fetcher = HttpFetcher::new(client, config.client_id.clone(), igdb_catalog::GAMES_ENDPOINT);

    let poll = PollLoop::new(
        authenticator,
        fetcher,
        config.api.page_size,
        config.filter,
        CYCLE_INTERVAL,
    );

    // Any authentication failure — at startup or on refresh — propagates
    // here and exits the process non-zero. A failed or empty page does
    // not: the loop returns what it accumulated.
    let names = poll.run().await.context("polling aborted")?;

    info!(count = names.len(), "printing accumulated names");
    println!("{}", names.join(","));

    Ok(())
}
