//! Storage helpers shared by the per-resource `db` modules
//!
//! Identifiers are `u64` in the domain and `INTEGER` (signed 64-bit) in
//! SQLite.

/// Domain id to SQL id. Ids above `i64::MAX` cannot exist in the table,
/// so callers treat `None` as not found.
pub(crate) fn db_id(id: u64) -> Option<i64> {
    i64::try_from(id).ok()
}

/// SQL id to domain id. Row ids and counters are never negative.
pub(crate) fn domain_id(raw: i64) -> u64 {
    u64::try_from(raw).unwrap_or_default()
}
