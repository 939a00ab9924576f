//! Substring search over the catalog.
//!
//! A linear scan over the cached record list: a record matches when its
//! name or key contains the term, or when any tag does. There is no ranking;
//! results keep catalog order.

use crate::catalog::{Catalog, IconRecord};

/// Normalize a raw query: trim and lowercase.
pub fn normalize_query(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Whether an input edit should trigger a search.
///
/// Clearing the field always does; otherwise inputs shorter than `min_len`
/// characters are ignored to bound the scan cost of very broad terms.
pub fn should_trigger(raw: &str, min_len: usize) -> bool {
    let len = raw.trim().chars().count();
    len == 0 || len >= min_len
}

/// Check a single record against an already-normalized term.
pub fn matches(record: &IconRecord, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }

    if record.folded.name.contains(term) || record.folded.key.contains(term) {
        return true;
    }

    record.folded.tags.iter().any(|tag| tag.contains(term))
}

/// Filter candidate record indices by a query, preserving order.
///
/// An empty (or whitespace-only) query passes every candidate.
pub fn search<I>(catalog: &Catalog, candidates: I, query: &str) -> Vec<usize>
where
    I: IntoIterator<Item = usize>,
{
    let term = normalize_query(query);
    candidates
        .into_iter()
        .filter(|&i| catalog.get(i).is_some_and(|record| matches(record, &term)))
        .collect()
}
