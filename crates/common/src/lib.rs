//! Shared types for the catalog poller workspace

mod error;
mod secret;

pub use error::{Error, Result};
pub use secret::Secret;
