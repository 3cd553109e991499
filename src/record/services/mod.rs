//! Orchestration services for records and user profiles.

mod catalog;

pub use catalog::{RecordCatalogError, RecordCatalogResult, RecordCatalogService};
