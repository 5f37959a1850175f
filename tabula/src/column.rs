//! Column descriptors and row identity.

use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

use crate::content::Content;
use crate::value::SortKey;

/// Trait for records that can be displayed as grid rows.
///
/// # Example
///
/// ```
/// use tabula::GridRow;
///
/// #[derive(Clone)]
/// struct User {
///     id: u32,
///     name: String,
/// }
///
/// impl GridRow for User {
///     type Key = u32;
///
///     fn key(&self) -> u32 {
///         self.id
///     }
/// }
/// ```
pub trait GridRow: Clone {
    /// The key type used to identify this row.
    type Key: Clone + Eq + Hash + ToString;

    /// Return a stable unique key for this row.
    ///
    /// Keys identify rows across re-renders. Uniqueness is the data
    /// owner's responsibility, not checked here.
    fn key(&self) -> Self::Key;
}

type CellFn<R> = Arc<dyn Fn(&R) -> Content + Send + Sync>;
type HeaderFn = Arc<dyn Fn() -> Content + Send + Sync>;
pub(crate) type SortValueFn<R> = Arc<dyn Fn(&R) -> SortKey + Send + Sync>;

/// How one column renders and, optionally, sorts.
///
/// The label doubles as the column's sort identity and must be unique
/// within one configuration list. A column without a sort value cannot
/// be selected as the sort key.
pub struct Column<R> {
    label: String,
    cell: CellFn<R>,
    header: Option<HeaderFn>,
    sort_value: Option<SortValueFn<R>>,
}

impl<R> Column<R> {
    /// Create a column with the given label and cell renderer.
    pub fn new(
        label: impl Into<String>,
        cell: impl Fn(&R) -> Content + Send + Sync + 'static,
    ) -> Self {
        Self {
            label: label.into(),
            cell: Arc::new(cell),
            header: None,
            sort_value: None,
        }
    }

    /// Override the default header, which shows the label as text.
    pub fn header(mut self, header: impl Fn() -> Content + Send + Sync + 'static) -> Self {
        self.header = Some(Arc::new(header));
        self
    }

    /// Make this column sortable by the given key extractor.
    ///
    /// The extractor must return the same [`SortKey`] kind for every
    /// record; mixed kinds are rejected when sorting.
    pub fn sort_value(mut self, sort_value: impl Fn(&R) -> SortKey + Send + Sync + 'static) -> Self {
        self.sort_value = Some(Arc::new(sort_value));
        self
    }

    /// The column label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Whether this column can be selected as the sort key.
    pub fn is_sortable(&self) -> bool {
        self.sort_value.is_some()
    }

    /// Render the cell content for a record.
    pub fn render_cell(&self, row: &R) -> Content {
        (self.cell)(row)
    }

    /// Render the header content: the custom header if set, else the label.
    pub fn render_header(&self) -> Content {
        match &self.header {
            Some(header) => header(),
            None => Content::Text(self.label.clone()),
        }
    }

    pub(crate) fn sort_value_fn(&self) -> Option<&SortValueFn<R>> {
        self.sort_value.as_ref()
    }
}

impl<R> Clone for Column<R> {
    fn clone(&self) -> Self {
        Self {
            label: self.label.clone(),
            cell: Arc::clone(&self.cell),
            header: self.header.clone(),
            sort_value: self.sort_value.clone(),
        }
    }
}

impl<R> fmt::Debug for Column<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("label", &self.label)
            .field("custom_header", &self.header.is_some())
            .field("sortable", &self.sort_value.is_some())
            .finish()
    }
}
