//! In-memory adapters for record persistence.

mod record;

pub use record::InMemoryRecordRepository;
