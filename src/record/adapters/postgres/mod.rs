//! `PostgreSQL` adapters for record persistence.

mod models;
mod repository;
mod schema;

pub use repository::{PostgresRecordRepository, RecordPgPool};
