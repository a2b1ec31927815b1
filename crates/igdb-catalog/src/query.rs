//! Apicalypse query construction

/// Build the paginated games query.
///
/// The `"M"*` name-prefix filter is part of the query text on purpose — it
/// is a fixed property of this poller, not a parameter. Only `limit` and
/// `offset` vary between requests.
pub fn build_query(limit: u32, offset: u64) -> String {
    format!(
        r#"fields name, alternative_names.name; where name = "M"*; limit {limit}; offset {offset};"#
    )
}
