//! Directory port for user profiles.

use super::RecordRepositoryResult;
use crate::record::domain::{OwnerEmail, UserProfile};
use async_trait::async_trait;

/// User-profile lookup contract.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Registers a profile.
    ///
    /// # Errors
    ///
    /// Returns [`super::RecordRepositoryError::DuplicateUser`] when a profile
    /// already exists for the email.
    async fn store_user(&self, profile: &UserProfile) -> RecordRepositoryResult<()>;

    /// Finds the profile registered under the email.
    ///
    /// Returns `None` when no profile exists.
    async fn find_user_by_email(
        &self,
        email: &OwnerEmail,
    ) -> RecordRepositoryResult<Option<UserProfile>>;
}
