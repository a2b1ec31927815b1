//! Record filter ("flatten")
//!
//! Reduces one catalog record to the strings the poller keeps: the record's
//! own name when its length matches the configured rule, then each
//! alternative name that starts with `M` and matches the same rule, in
//! their original order. No deduplication — if upstream repeats a name, so
//! does the output.

use igdb_catalog::GameRecord;
use serde::Deserialize;

/// How a name's length is compared against [`NameFilter::length`].
///
/// Both rules have shipped at different times (an exact-6 match and a
/// strictly-below-10 match). Which one is correct is an open product
/// question, so the rule is configuration instead of a constant; the
/// default follows the most recent behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthRule {
    /// Keep names whose length equals `length` exactly
    Exact,
    /// Keep names whose length is strictly less than `length`
    Below,
}

/// Name-length filter applied to own and alternative names alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct NameFilter {
    #[serde(default = "default_rule")]
    pub rule: LengthRule,
    #[serde(default = "default_length")]
    pub length: usize,
}

fn default_rule() -> LengthRule {
    LengthRule::Exact
}

fn default_length() -> usize {
    6
}

impl Default for NameFilter {
    fn default() -> Self {
        Self {
            rule: default_rule(),
            length: default_length(),
        }
    }
}

impl NameFilter {
    /// Lengths are counted in Unicode codepoints, not bytes — catalog names
    /// come back in many scripts.
    fn length_matches(&self, name: &str) -> bool {
        let count = name.chars().count();
        match self.rule {
            LengthRule::Exact => count == self.length,
            LengthRule::Below => count < self.length,
        }
    }
}

/// Flatten one record into the names to accumulate.
///
/// Pure function: the own name (if kept) always precedes the alternative
/// names, which keep their API order.
pub fn flatten(record: &GameRecord, filter: &NameFilter) -> Vec<String> {
    let mut kept = Vec::new();

    if filter.length_matches(&record.name) {
        kept.push(record.name.clone());
    }

    if let Some(alts) = &record.alternative_names {
        for alt in alts {
            if alt.name.starts_with('M') && filter.length_matches(&alt.name) {
                kept.push(alt.name.clone());
            }
        }
    }

    kept
}
