//! Store-side record identity.

/// Trait for records held in a [`RecordStore`](crate::store::RecordStore).
pub trait StoreRecord: Clone {
    /// Stable identifier type.
    type Id: Clone + Eq;

    /// The record's stable unique identifier. The store is the source of
    /// truth for uniqueness.
    fn id(&self) -> Self::Id;

    /// The field searched and highlighted by the derived-view selector.
    fn search_text(&self) -> &str;
}
