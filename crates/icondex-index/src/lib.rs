//! icondex-index: Icon records, catalog loading, and the query engine.

pub mod catalog;
pub mod query;
pub mod record;

pub use catalog::IconCatalog;
pub use query::{Query, QueryEngine};
pub use record::{split_import_path, IconRecord, ProviderTag};
