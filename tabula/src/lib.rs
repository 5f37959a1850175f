pub mod column;
pub mod content;
pub mod error;
pub mod grid;
pub mod sort;
pub mod value;

pub use column::{Column, GridRow};
pub use content::Content;
pub use error::ConfigError;
pub use grid::{Grid, HeaderCell, Row};
pub use sort::{render_sorted, sort_rows, SortIndicator, SortOrder, SortState};
pub use value::{compare, SortKey};
