//! IGDB catalog query client
//!
//! Fetches paginated game records from the IGDB `/v4/games` endpoint. IGDB
//! queries are POSTs carrying an Apicalypse query string in the body; the
//! bearer token comes from `twitch-auth` and the `Client-ID` header carries
//! the same client id used for authentication.
//!
//! The client is deliberately dumb: it returns whatever page the API hands
//! back, including an empty one. Deciding what an empty page means is the
//! poll loop's job.

pub mod constants;
pub mod error;
pub mod fetch;
pub mod query;
pub mod records;

pub use constants::GAMES_ENDPOINT;
pub use error::{Error, Result};
pub use fetch::fetch_page;
pub use query::build_query;
pub use records::{AltName, GameRecord};
