//! The record store: single mutable source of truth for records, query
//! state, and pending form input.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::record::StoreRecord;

/// Read-only query inputs for the derived view.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryState {
    pub search_term: String,
    pub highlight_term: String,
}

/// Pending form input held in the store.
///
/// Not a dependency of the derived view; mutating it must not disturb
/// selector caches.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormState {
    fields: BTreeMap<String, String>,
}

impl FormState {
    /// The value of a field, empty if never set.
    pub fn get(&self, field: &str) -> &str {
        self.fields.get(field).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(field.into(), value.into());
    }

    pub fn clear(&mut self) {
        self.fields.clear();
    }
}

/// A cheap copy of the store contents, used as selector input.
///
/// Shares the record collection with the store by `Arc`, so two
/// snapshots taken between mutations refer to the identical collection.
#[derive(Debug, Clone)]
pub struct StoreSnapshot<R> {
    pub records: Arc<Vec<R>>,
    pub query: QueryState,
    pub form: FormState,
}

/// The canonical record collection plus presentation-owned inputs.
///
/// Every record mutation rebuilds the collection behind a fresh `Arc`,
/// so readers detect change by pointer identity alone. Change
/// notification follows the dirty-flag pattern: mutations set the flag,
/// observers check and clear it.
#[derive(Debug)]
pub struct RecordStore<R> {
    records: Arc<Vec<R>>,
    query: QueryState,
    form: FormState,
    dirty: AtomicBool,
}

impl<R: StoreRecord> RecordStore<R> {
    pub fn new() -> Self {
        Self {
            records: Arc::new(Vec::new()),
            query: QueryState::default(),
            form: FormState::default(),
            dirty: AtomicBool::new(false),
        }
    }

    /// All records in insertion order.
    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn query(&self) -> &QueryState {
        &self.query
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    /// Append a record. Identifier uniqueness is the caller's contract.
    pub fn add_record(&mut self, record: R) {
        self.with_records(|records| records.push(record));
    }

    /// Remove the record with the given id. Returns `false` if absent,
    /// leaving the collection identity untouched.
    pub fn remove_record(&mut self, id: &R::Id) -> bool {
        if !self.records.iter().any(|record| record.id() == *id) {
            return false;
        }
        self.with_records(|records| records.retain(|record| record.id() != *id));
        true
    }

    /// Update one record's fields in place. Returns `false` if absent.
    pub fn update_record(&mut self, id: &R::Id, update: impl FnOnce(&mut R)) -> bool {
        let Some(index) = self.records.iter().position(|record| record.id() == *id) else {
            return false;
        };
        self.with_records(|records| update(&mut records[index]));
        true
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.query.search_term = term.into();
        self.mark_dirty();
    }

    pub fn set_highlight_term(&mut self, term: impl Into<String>) {
        self.query.highlight_term = term.into();
        self.mark_dirty();
    }

    pub fn set_form_field(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.form.set(field, value);
        self.mark_dirty();
    }

    pub fn clear_form(&mut self) {
        self.form.clear();
        self.mark_dirty();
    }

    /// Snapshot the store for selector input.
    pub fn snapshot(&self) -> StoreSnapshot<R> {
        StoreSnapshot {
            records: Arc::clone(&self.records),
            query: self.query.clone(),
            form: self.form.clone(),
        }
    }

    /// Whether the store changed since the last [`clear_dirty`](Self::clear_dirty).
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }

    fn mark_dirty(&self) {
        self.dirty.store(true, Ordering::SeqCst);
    }

    fn with_records(&mut self, mutate: impl FnOnce(&mut Vec<R>)) {
        // Rebuild rather than mutate through the Arc: a mutation must
        // always produce a new collection identity.
        let mut next = Vec::clone(&self.records);
        mutate(&mut next);
        log::trace!("store mutated: {} records", next.len());
        self.records = Arc::new(next);
        self.mark_dirty();
    }
}

impl<R: StoreRecord> Default for RecordStore<R> {
    fn default() -> Self {
        Self::new()
    }
}
