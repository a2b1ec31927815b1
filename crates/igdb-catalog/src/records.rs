//! Catalog record types

use serde::Deserialize;

/// One game record as returned by the catalog query.
///
/// Only the fields the query requests are present; `alternative_names` is
/// omitted by the API for records that have none.
#[derive(Debug, Clone, Deserialize)]
pub struct GameRecord {
    pub id: u64,
    pub name: String,
    pub alternative_names: Option<Vec<AltName>>,
}

/// An alternative (regional, abbreviated, working-title) name of a record.
#[derive(Debug, Clone, Deserialize)]
pub struct AltName {
    pub id: u64,
    pub name: String,
}
