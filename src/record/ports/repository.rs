//! Repository port for record persistence, lookup and partial updates.

use crate::record::domain::{OwnerEmail, Record, RecordId, RecordUpdate};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for record repository operations.
pub type RecordRepositoryResult<T> = Result<T, RecordRepositoryError>;

/// Record persistence contract.
#[async_trait]
pub trait RecordRepository: Send + Sync {
    /// Stores a new record.
    ///
    /// # Errors
    ///
    /// Returns [`RecordRepositoryError::DuplicateRecord`] when the record ID
    /// already exists.
    async fn store(&self, record: &Record) -> RecordRepositoryResult<()>;

    /// Finds a record by identifier.
    ///
    /// Returns `None` when the record does not exist.
    async fn find_by_id(&self, id: RecordId) -> RecordRepositoryResult<Option<Record>>;

    /// Returns every record owned by the given user, oldest first.
    async fn find_by_owner(&self, owner: &OwnerEmail) -> RecordRepositoryResult<Vec<Record>>;

    /// Overwrites the fields the update supplies and returns the updated
    /// record.
    ///
    /// # Errors
    ///
    /// Returns [`RecordRepositoryError::NotFound`] when the record does not
    /// exist.
    async fn update(&self, update: &RecordUpdate) -> RecordRepositoryResult<Record>;
}

/// Errors returned by record and user-profile persistence implementations.
#[derive(Debug, Clone, Error)]
pub enum RecordRepositoryError {
    /// A record with the same identifier already exists.
    #[error("duplicate record identifier: {0}")]
    DuplicateRecord(RecordId),

    /// A profile for the email already exists.
    #[error("duplicate user profile: {0}")]
    DuplicateUser(OwnerEmail),

    /// The record was not found.
    #[error("record not found: {0}")]
    NotFound(RecordId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl RecordRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
