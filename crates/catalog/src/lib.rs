//! Catalog of library materials.
//!
//! Loads materials once from delimited rows and answers aggregate queries
//! over the resulting ordered, immutable collection. The CSV adapter in
//! [`source`] is a thin front end; everything else works on plain rows.

pub mod catalog;
pub mod loader;
pub mod options;
pub mod report;
pub mod source;

pub use catalog::{Catalog, LONG_LOAN_DAYS};
pub use loader::{CatalogLoader, MIN_FIELDS, RowOutcome, SkipReason, load_rows, parse_row};
pub use options::LoadOptions;
pub use report::{CatalogReport, HighestCostItem};
