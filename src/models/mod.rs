pub mod catalog;
pub mod order;
pub mod summary;

pub use catalog::{normalize_name, Catalog, CatalogItem};
pub use order::{OrderRecord, ParseStats, ParsedTable};
pub use summary::{Discrepancy, ItemTotal, SummaryMap};
