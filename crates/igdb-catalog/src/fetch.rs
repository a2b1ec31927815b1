//! Paginated page fetch
//!
//! One authenticated POST per page. The response is a JSON array of
//! records; an empty array is a successful (empty) page here — the poll
//! loop is the layer that treats it as a termination signal.

use tracing::debug;

use crate::error::{Error, Result};
use crate::query::build_query;
use crate::records::GameRecord;

/// Fetch one page of records.
///
/// `games_url` is the production `GAMES_ENDPOINT` constant in the binary;
/// it is a parameter so tests can point at a local mock server. `client_id`
/// rides along in the `Client-ID` header as the API requires, next to the
/// bearer token.
pub async fn fetch_page(
    client: &reqwest::Client,
    games_url: &str,
    client_id: &str,
    access_token: &str,
    limit: u32,
    offset: u64,
) -> Result<Vec<GameRecord>> {
    let response = client
        .post(games_url)
        .header(reqwest::header::ACCEPT, "application/json")
        .header("Client-ID", client_id)
        .bearer_auth(access_token)
        .body(build_query(limit, offset))
        .send()
        .await
        .map_err(|e| Error::Http(format!("page request failed: {e}")))?;

    let status = response.status();
    if !status.is_success() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| String::from("<no body>"));
        return Err(Error::Api(format!(
            "catalog endpoint returned {status}: {body}"
        )));
    }

    let page = response
        .json::<Vec<GameRecord>>()
        .await
        .map_err(|e| Error::Decode(e.to_string()))?;

    debug!(offset, limit, records = page.len(), "page fetched");
    Ok(page)
}
