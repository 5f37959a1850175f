pub mod record;
pub mod select;
pub mod store;

pub use record::StoreRecord;
pub use select::{DerivedView, ViewEntry, ViewSelector};
pub use store::{FormState, QueryState, RecordStore, StoreSnapshot};
