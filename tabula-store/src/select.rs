//! The memoized derived-view selector.

use std::sync::{Arc, Mutex};

use tabula::GridRow;

use crate::record::StoreRecord;
use crate::store::{QueryState, StoreSnapshot};

/// One record in a derived view, annotated with its highlight match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewEntry<R> {
    pub record: R,
    pub matches_highlight: bool,
}

impl<R: GridRow> GridRow for ViewEntry<R> {
    type Key = R::Key;

    fn key(&self) -> R::Key {
        self.record.key()
    }
}

/// A filtered, highlight-annotated projection of the record collection.
///
/// Never mutated in place: the selector produces a fresh view whenever
/// its inputs change and returns the identical cached view otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DerivedView<R> {
    entries: Vec<ViewEntry<R>>,
}

impl<R> DerivedView<R> {
    /// Entries in store order.
    pub fn entries(&self) -> &[ViewEntry<R>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ViewEntry<R>> {
        self.entries.iter()
    }
}

impl<'a, R> IntoIterator for &'a DerivedView<R> {
    type Item = &'a ViewEntry<R>;
    type IntoIter = std::slice::Iter<'a, ViewEntry<R>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

struct CacheEntry<R> {
    records: Arc<Vec<R>>,
    search_term: String,
    highlight_term: String,
    result: Arc<DerivedView<R>>,
}

/// Computes the derived view from a store snapshot, remembering the most
/// recent computation.
///
/// Declared dependencies are the record collection (compared by pointer
/// identity) and the two query strings (compared by value). Anything
/// else in the snapshot may change without invalidating the cache.
/// Cache depth is 1: only the immediately preceding computation is
/// remembered.
pub struct ViewSelector<R> {
    cache: Mutex<Option<CacheEntry<R>>>,
}

impl<R: StoreRecord> ViewSelector<R> {
    pub fn new() -> Self {
        Self {
            cache: Mutex::new(None),
        }
    }

    /// The derived view for `snapshot`.
    ///
    /// A record is included iff the case-folded search term is empty or
    /// a substring of its case-folded search text. `matches_highlight`
    /// is set the same way from the highlight term, independently of the
    /// search term. Record order is store order. Case folding is
    /// `str::to_lowercase`.
    ///
    /// A cache hit returns the previously produced view by identity, so
    /// downstream memoization keyed on the view keeps working.
    pub fn select(&self, snapshot: &StoreSnapshot<R>) -> Arc<DerivedView<R>> {
        let mut cache = match self.cache.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };

        if let Some(entry) = cache.as_ref() {
            if Arc::ptr_eq(&entry.records, &snapshot.records)
                && entry.search_term == snapshot.query.search_term
                && entry.highlight_term == snapshot.query.highlight_term
            {
                log::trace!("derived view cache hit");
                return Arc::clone(&entry.result);
            }
        }

        let result = Arc::new(compute(&snapshot.records, &snapshot.query));
        log::debug!(
            "derived view recomputed: {} of {} records",
            result.len(),
            snapshot.records.len()
        );
        *cache = Some(CacheEntry {
            records: Arc::clone(&snapshot.records),
            search_term: snapshot.query.search_term.clone(),
            highlight_term: snapshot.query.highlight_term.clone(),
            result: Arc::clone(&result),
        });
        result
    }
}

impl<R: StoreRecord> Default for ViewSelector<R> {
    fn default() -> Self {
        Self::new()
    }
}

fn compute<R: StoreRecord>(records: &[R], query: &QueryState) -> DerivedView<R> {
    let search = query.search_term.to_lowercase();
    let highlight = query.highlight_term.to_lowercase();

    let entries = records
        .iter()
        .filter_map(|record| {
            let text = record.search_text().to_lowercase();
            if !search.is_empty() && !text.contains(&search) {
                return None;
            }
            Some(ViewEntry {
                matches_highlight: !highlight.is_empty() && text.contains(&highlight),
                record: record.clone(),
            })
        })
        .collect();

    DerivedView { entries }
}
