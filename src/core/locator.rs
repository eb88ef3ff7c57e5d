//! Selection of a schedule entry.
//!
//! Display keys (`"{day} - {location} - {vendor}"`) are what a user sees in a
//! list and are not unique: when several entries share a key, the first one
//! in file order is selected. The stable record id is the unambiguous way to
//! point at an entry.

use crate::errors::{AppError, AppResult};
use crate::models::{RecordId, RecordSet};

/// How a command names the entry it acts on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    Key(String),
    /// Zero-based position in file order.
    Position(usize),
    Id(RecordId),
}

/// One display key per record, same order as the set.
pub fn build_keys(set: &RecordSet) -> Vec<String> {
    set.iter().map(|r| r.display_key()).collect()
}

/// Position of the first key equal to `selected`.
pub fn resolve(keys: &[String], selected: &str) -> AppResult<usize> {
    keys.iter()
        .position(|k| k == selected)
        .ok_or_else(|| AppError::NotFound(format!("no entry '{}'", selected)))
}

/// Position of the entry with `id`. Blank ids never match.
pub fn resolve_id(set: &RecordSet, id: &RecordId) -> AppResult<usize> {
    if id.is_empty() {
        return Err(AppError::NotFound(
            "entries without an id can only be picked by key or number".into(),
        ));
    }
    set.position_of(id)
        .ok_or_else(|| AppError::NotFound(format!("no entry with id {}", id)))
}

/// Resolve a selector to a position. Positions are returned unchecked; the
/// operations report them as out of range.
pub fn locate(set: &RecordSet, selector: &Selector) -> AppResult<usize> {
    match selector {
        Selector::Key(k) => resolve(&build_keys(set), k),
        Selector::Position(p) => Ok(*p),
        Selector::Id(id) => resolve_id(set, id),
    }
}

/// Positions sharing their display key with an earlier entry.
pub fn shadowed(keys: &[String]) -> Vec<usize> {
    keys.iter()
        .enumerate()
        .filter(|(i, k)| keys[..*i].contains(k))
        .map(|(i, _)| i)
        .collect()
}
