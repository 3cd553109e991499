//! In-memory record repository and user directory.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::record::{
    domain::{OwnerEmail, Record, RecordId, RecordUpdate, UserProfile},
    ports::{RecordRepository, RecordRepositoryError, RecordRepositoryResult, UserDirectory},
};

/// Thread-safe in-memory record store.
///
/// Implements both [`RecordRepository`] and [`UserDirectory`], so a single
/// instance can stand in for the records service in tests and local runs.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRecordRepository {
    state: Arc<RwLock<InMemoryRecordState>>,
}

#[derive(Debug, Default)]
struct InMemoryRecordState {
    records: HashMap<RecordId, Record>,
    owner_index: HashMap<OwnerEmail, Vec<RecordId>>,
    users: HashMap<OwnerEmail, UserProfile>,
}

impl InMemoryRecordRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(err: impl std::fmt::Display) -> RecordRepositoryError {
    RecordRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl RecordRepository for InMemoryRecordRepository {
    async fn store(&self, record: &Record) -> RecordRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        if state.records.contains_key(&record.id()) {
            return Err(RecordRepositoryError::DuplicateRecord(record.id()));
        }

        state
            .owner_index
            .entry(record.owner().clone())
            .or_default()
            .push(record.id());
        state.records.insert(record.id(), record.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: RecordId) -> RecordRepositoryResult<Option<Record>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.records.get(&id).cloned())
    }

    async fn find_by_owner(&self, owner: &OwnerEmail) -> RecordRepositoryResult<Vec<Record>> {
        let state = self.state.read().map_err(lock_error)?;
        let records = state
            .owner_index
            .get(owner)
            .map(|ids| {
                ids.iter()
                    .filter_map(|id| state.records.get(id).cloned())
                    .collect()
            })
            .unwrap_or_default();
        Ok(records)
    }

    async fn update(&self, update: &RecordUpdate) -> RecordRepositoryResult<Record> {
        let mut state = self.state.write().map_err(lock_error)?;
        let record = state
            .records
            .get_mut(&update.record_id())
            .ok_or(RecordRepositoryError::NotFound(update.record_id()))?;
        record.apply(update);
        Ok(record.clone())
    }
}

#[async_trait]
impl UserDirectory for InMemoryRecordRepository {
    async fn store_user(&self, profile: &UserProfile) -> RecordRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        if state.users.contains_key(profile.email()) {
            return Err(RecordRepositoryError::DuplicateUser(profile.email().clone()));
        }
        state.users.insert(profile.email().clone(), profile.clone());
        Ok(())
    }

    async fn find_user_by_email(
        &self,
        email: &OwnerEmail,
    ) -> RecordRepositoryResult<Option<UserProfile>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.users.get(email).cloned())
    }
}
