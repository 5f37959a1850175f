//! Sort keys and the comparator.

use std::cmp::Ordering;

use crate::sort::SortOrder;

/// A value a column exposes for ordering.
///
/// A sortable column must return the same kind for every record; the
/// sorter rejects mixed kinds before comparing anything.
#[derive(Debug, Clone, PartialEq)]
pub enum SortKey {
    /// Textual key, ordered lexicographically by Unicode code point.
    Text(String),
    /// Numeric key, ordered by `f64::total_cmp`.
    Number(f64),
}

impl SortKey {
    pub(crate) fn same_kind(&self, other: &SortKey) -> bool {
        matches!(
            (self, other),
            (SortKey::Text(_), SortKey::Text(_)) | (SortKey::Number(_), SortKey::Number(_))
        )
    }
}

/// Compare two sort keys under the given direction.
///
/// Returns `None` for mixed kinds. [`SortOrder::Descending`] reverses the
/// natural relation. Pure; no side effects.
pub fn compare(a: &SortKey, b: &SortKey, order: SortOrder) -> Option<Ordering> {
    let natural = match (a, b) {
        (SortKey::Text(a), SortKey::Text(b)) => a.cmp(b),
        (SortKey::Number(a), SortKey::Number(b)) => a.total_cmp(b),
        _ => return None,
    };
    Some(match order {
        SortOrder::Ascending => natural,
        SortOrder::Descending => natural.reverse(),
    })
}

impl From<&str> for SortKey {
    fn from(value: &str) -> Self {
        SortKey::Text(value.to_string())
    }
}

impl From<String> for SortKey {
    fn from(value: String) -> Self {
        SortKey::Text(value)
    }
}

impl From<f64> for SortKey {
    fn from(value: f64) -> Self {
        SortKey::Number(value)
    }
}

impl From<f32> for SortKey {
    fn from(value: f32) -> Self {
        SortKey::Number(f64::from(value))
    }
}

impl From<i32> for SortKey {
    fn from(value: i32) -> Self {
        SortKey::Number(f64::from(value))
    }
}

impl From<u32> for SortKey {
    fn from(value: u32) -> Self {
        SortKey::Number(f64::from(value))
    }
}

impl From<i64> for SortKey {
    fn from(value: i64) -> Self {
        SortKey::Number(value as f64)
    }
}

impl From<u64> for SortKey {
    fn from(value: u64) -> Self {
        SortKey::Number(value as f64)
    }
}
