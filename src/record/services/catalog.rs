//! Service layer for registering users and creating their records.

use crate::record::{
    domain::{OwnerEmail, Record, RecordDomainError, RecordId, UserProfile},
    ports::{RecordRepository, RecordRepositoryError, UserDirectory},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Service-level errors for record catalog operations.
#[derive(Debug, Error)]
pub enum RecordCatalogError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] RecordDomainError),

    /// No profile is registered for the owner.
    #[error("no user registered for {0}")]
    UnknownOwner(OwnerEmail),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] RecordRepositoryError),
}

/// Result type for record catalog operations.
pub type RecordCatalogResult<T> = Result<T, RecordCatalogError>;

/// Registers users and creates, lists and fetches their records.
#[derive(Clone)]
pub struct RecordCatalogService<R, C>
where
    R: RecordRepository + UserDirectory,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> RecordCatalogService<R, C>
where
    R: RecordRepository + UserDirectory,
    C: Clock + Send + Sync,
{
    /// Creates a new catalog service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Registers a user profile.
    ///
    /// # Errors
    ///
    /// Returns [`RecordCatalogError::Repository`] when a profile already
    /// exists for the email or persistence fails.
    pub async fn register_user(&self, profile: &UserProfile) -> RecordCatalogResult<()> {
        self.repository.store_user(profile).await?;
        info!(email = %profile.email(), "registered user");
        Ok(())
    }

    /// Looks up a user profile.
    ///
    /// # Errors
    ///
    /// Returns [`RecordCatalogError::Repository`] when the lookup fails.
    pub async fn find_user(&self, email: &OwnerEmail) -> RecordCatalogResult<Option<UserProfile>> {
        Ok(self.repository.find_user_by_email(email).await?)
    }

    /// Creates an empty record for a registered user.
    ///
    /// # Errors
    ///
    /// Returns [`RecordCatalogError::UnknownOwner`] when no profile exists for
    /// the owner, [`RecordCatalogError::Domain`] when the name is blank, and
    /// [`RecordCatalogError::Repository`] when persistence fails.
    pub async fn create_record(
        &self,
        owner: &OwnerEmail,
        record_name: &str,
    ) -> RecordCatalogResult<Record> {
        if self.repository.find_user_by_email(owner).await?.is_none() {
            return Err(RecordCatalogError::UnknownOwner(owner.clone()));
        }

        let record = Record::new(owner.clone(), record_name, &*self.clock)?;
        self.repository.store(&record).await?;
        info!(record_id = %record.id(), owner = %owner, "created record");
        Ok(record)
    }

    /// Returns a user's records, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`RecordCatalogError::Repository`] when the lookup fails.
    pub async fn records_for(&self, owner: &OwnerEmail) -> RecordCatalogResult<Vec<Record>> {
        Ok(self.repository.find_by_owner(owner).await?)
    }

    /// Fetches a record by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`RecordCatalogError::Repository`] when the lookup fails.
    pub async fn record(&self, record_id: RecordId) -> RecordCatalogResult<Option<Record>> {
        Ok(self.repository.find_by_id(record_id).await?)
    }
}
