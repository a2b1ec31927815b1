//! The polling control loop
//!
//! Owns all sequencing: authenticate once, then repeat batches of four
//! concurrent paginated fetches, filter and accumulate names, refresh the
//! token when it ages out, and pace cycles to at least 2.5 s apart. The
//! loop ends on the first failed or empty page — deliberately without
//! telling "no more data" apart from "the API broke" — and returns whatever
//! accumulated up to that point.
//!
//! Collaborators are trait objects so the loop can be tested with scripted
//! doubles and paused time, with HTTP-backed implementations in
//! [`crate::upstream`].

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use futures_util::future::join_all;
use igdb_catalog::GameRecord;
use tokio::time::{Instant, sleep};
use tracing::{debug, info, warn};
use twitch_auth::AuthToken;

use crate::error::Result;
use crate::filter::{NameFilter, flatten};

/// Fetch requests dispatched concurrently per cycle
pub const BATCH_SIZE: usize = 4;

/// Minimum wall-clock spacing between the starts of consecutive cycles
pub const CYCLE_INTERVAL: Duration = Duration::from_millis(2500);

/// Token acquisition seam.
///
/// Uses `Pin<Box<dyn Future>>` return types for dyn-compatibility, the same
/// shape for the HTTP implementation and the test doubles.
pub trait Authenticator: Send + Sync {
    fn authenticate(
        &self,
    ) -> Pin<Box<dyn Future<Output = twitch_auth::Result<AuthToken>> + Send + '_>>;
}

/// Page fetch seam.
pub trait Fetcher: Send + Sync {
    fn fetch_page<'a>(
        &'a self,
        token: &'a AuthToken,
        limit: u32,
        offset: u64,
    ) -> Pin<Box<dyn Future<Output = igdb_catalog::Result<Vec<GameRecord>>> + Send + 'a>>;
}

/// Mutable loop bookkeeping, owned exclusively by the loop.
///
/// There is exactly one live token at any time: `token` is replaced
/// wholesale on refresh, never partially mutated. `next_offset` only ever
/// grows and `accumulated` is append-only.
struct LoopState {
    token: AuthToken,
    /// When the current token was acquired; drives the expiry check
    token_refreshed_at: Instant,
    /// End of the previous batch; drives cycle pacing
    last_cycle_at: Instant,
    accumulated: Vec<String>,
    keep_going: bool,
    page_size: u32,
    next_offset: u64,
}

/// The poll loop and its collaborators.
pub struct PollLoop<A, F> {
    authenticator: A,
    fetcher: F,
    page_size: u32,
    filter: NameFilter,
    cycle_interval: Duration,
}

impl<A: Authenticator, F: Fetcher> PollLoop<A, F> {
    /// `cycle_interval` is [`CYCLE_INTERVAL`] in production; tests shrink it.
    pub fn new(
        authenticator: A,
        fetcher: F,
        page_size: u32,
        filter: NameFilter,
        cycle_interval: Duration,
    ) -> Self {
        Self {
            authenticator,
            fetcher,
            page_size,
            filter,
            cycle_interval,
        }
    }

    /// Run until a fetch fails or comes back empty.
    ///
    /// Returns the accumulated names on graceful termination. The only
    /// error path is authentication (startup or refresh), which is fatal
    /// and never retried.
    pub async fn run(&self) -> Result<Vec<String>> {
        let token = self.authenticator.authenticate().await?;
        info!(expires_in = token.expires_in, "authenticated, polling");

        let now = Instant::now();
        let mut state = LoopState {
            token,
            token_refreshed_at: now,
            last_cycle_at: now,
            accumulated: Vec::new(),
            keep_going: true,
            page_size: self.page_size,
            next_offset: 0,
        };

        while state.keep_going {
            run_cycle(self, &mut state).await?;
        }

        info!(total = state.accumulated.len(), "polling finished");
        Ok(state.accumulated)
    }
}

/// One cycle: dispatch a batch, consume results in dispatch order, check
/// token expiry, pace the next cycle.
async fn run_cycle<A: Authenticator, F: Fetcher>(
    poll: &PollLoop<A, F>,
    state: &mut LoopState,
) -> Result<()> {
    // Offsets are claimed synchronously before each dispatch, so they are
    // strictly increasing and non-overlapping whatever order responses
    // arrive in.
    let mut batch = Vec::with_capacity(BATCH_SIZE);
    for _ in 0..BATCH_SIZE {
        let offset = state.next_offset;
        state.next_offset += u64::from(state.page_size);
        batch.push(poll.fetcher.fetch_page(&state.token, state.page_size, offset));
    }

    // All four run concurrently and all four are awaited — a failure does
    // not cancel the requests already in flight. Results are consumed in
    // dispatch order (head-of-line), which is intentional.
    let results = join_all(batch).await;
    let batch_done_at = Instant::now();

    for result in results {
        if !state.keep_going {
            // Past the failure point: awaited, but discarded
            continue;
        }
        match result {
            Ok(page) if !page.is_empty() => {
                for record in &page {
                    state.accumulated.extend(flatten(record, &poll.filter));
                }
                debug!(records = page.len(), "page processed");
            }
            Ok(_) => {
                // Empty page and API error get the same treatment on
                // purpose; the loop cannot tell end-of-data from failure.
                info!("empty page, stopping after this cycle");
                state.keep_going = false;
            }
            Err(e) => {
                warn!(error = %e, "fetch failed, stopping after this cycle");
                state.keep_going = false;
            }
        }
    }
    debug!(accumulated = state.accumulated.len(), "batch consumed");

    // Expiry check runs every cycle, including the final one. A refresh
    // failure is fatal, same as the startup authentication.
    let token_age = batch_done_at.duration_since(state.token_refreshed_at);
    if token_age.as_secs() >= state.token.expires_in {
        state.token = poll.authenticator.authenticate().await?;
        state.token_refreshed_at = Instant::now();
        info!(expires_in = state.token.expires_in, "access token refreshed");
    }

    // Pacing is measured from the end of the batch, not after the sleep,
    // and also runs on the final iteration.
    let since_last = batch_done_at.duration_since(state.last_cycle_at);
    if since_last < poll.cycle_interval {
        sleep(poll.cycle_interval - since_last).await;
    }
    state.last_cycle_at = batch_done_at;

    Ok(())
}
