//! Port contracts for record and user-profile persistence.
//!
//! Ports define infrastructure-agnostic interfaces the treatment, board and
//! metrics services depend on.

pub mod directory;
pub mod repository;

pub use directory::UserDirectory;
pub use repository::{RecordRepository, RecordRepositoryError, RecordRepositoryResult};
