//! Record aggregate root.

use super::{OwnerEmail, RecordDomainError, RecordId, RecordUpdate, error::ensure_fits};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Longest record name, in characters.
pub const MAX_RECORD_NAME_CHARS: usize = 255;

/// Patient record holding the analysis text and its structured board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    id: RecordId,
    owner: OwnerEmail,
    record_name: String,
    analysis_result: String,
    kanban_records: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedRecordData {
    /// Persisted record identifier.
    pub id: RecordId,
    /// Persisted owner email.
    pub owner: OwnerEmail,
    /// Persisted display label.
    pub record_name: String,
    /// Persisted analysis text, empty when no report has been analysed.
    pub analysis_result: String,
    /// Persisted board text, empty when no plan has been structured.
    pub kanban_records: String,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Record {
    /// Creates an empty record for the given owner.
    ///
    /// # Errors
    ///
    /// Returns [`RecordDomainError::EmptyRecordName`] when the name is blank
    /// and [`RecordDomainError::TooLong`] when it exceeds
    /// [`MAX_RECORD_NAME_CHARS`].
    pub fn new(
        owner: OwnerEmail,
        record_name: impl Into<String>,
        clock: &impl Clock,
    ) -> Result<Self, RecordDomainError> {
        let name = record_name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(RecordDomainError::EmptyRecordName);
        }
        ensure_fits("record name", trimmed, MAX_RECORD_NAME_CHARS)?;

        let timestamp = clock.utc();
        Ok(Self {
            id: RecordId::new(),
            owner,
            record_name: trimmed.to_owned(),
            analysis_result: String::new(),
            kanban_records: String::new(),
            created_at: timestamp,
            updated_at: timestamp,
        })
    }

    /// Reconstructs a record from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedRecordData) -> Self {
        Self {
            id: data.id,
            owner: data.owner,
            record_name: data.record_name,
            analysis_result: data.analysis_result,
            kanban_records: data.kanban_records,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the record identifier.
    #[must_use]
    pub const fn id(&self) -> RecordId {
        self.id
    }

    /// Returns the owner email.
    #[must_use]
    pub const fn owner(&self) -> &OwnerEmail {
        &self.owner
    }

    /// Returns the display label.
    #[must_use]
    pub fn record_name(&self) -> &str {
        &self.record_name
    }

    /// Returns the analysis text; empty until a report has been analysed.
    #[must_use]
    pub fn analysis_result(&self) -> &str {
        &self.analysis_result
    }

    /// Returns the serialised board; empty until a plan has been structured.
    #[must_use]
    pub fn kanban_records(&self) -> &str {
        &self.kanban_records
    }

    /// Returns `true` when the analysis text holds more than whitespace.
    #[must_use]
    pub fn has_analysis(&self) -> bool {
        !self.analysis_result.trim().is_empty()
    }

    /// Returns `true` when a structured board has been persisted.
    #[must_use]
    pub fn has_board(&self) -> bool {
        !self.kanban_records.trim().is_empty()
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest update timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Applies a partial update; fields the update omits are left as they are.
    pub fn apply(&mut self, update: &RecordUpdate) {
        if let Some(analysis_result) = update.analysis_result() {
            analysis_result.clone_into(&mut self.analysis_result);
        }
        if let Some(kanban_records) = update.kanban_records() {
            kanban_records.clone_into(&mut self.kanban_records);
        }
        self.updated_at = update.updated_at();
    }
}
