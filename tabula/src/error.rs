//! Configuration-error taxonomy.

use thiserror::Error;

/// A caller contract violation in the column configuration or a sort
/// request.
///
/// None of these are recoverable internally; the toolkit reports them at
/// the call site instead of guessing intent or substituting a default.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Two columns in one configuration share a label.
    #[error("duplicate column label '{0}'")]
    DuplicateLabel(String),

    /// The sort state names a label absent from the configuration.
    #[error("no column labelled '{0}'")]
    UnknownSortColumn(String),

    /// The sort state names a column without a sort value.
    #[error("column '{0}' is not sortable")]
    NotSortable(String),

    /// A column's sort value returned both text and numeric keys.
    #[error("column '{0}' produced mixed sort key kinds")]
    MixedSortKeys(String),
}
