//! Partial record updates.

use super::RecordId;
use chrono::{DateTime, Utc};
use mockable::Clock;

/// Partial update of a record's analysis and board fields.
///
/// Only fields that have been set are written; the rest stay untouched in
/// storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordUpdate {
    record_id: RecordId,
    analysis_result: Option<String>,
    kanban_records: Option<String>,
    updated_at: DateTime<Utc>,
}

impl RecordUpdate {
    /// Creates an update for the record, timestamped from the clock.
    #[must_use]
    pub fn new(record_id: RecordId, clock: &impl Clock) -> Self {
        Self {
            record_id,
            analysis_result: None,
            kanban_records: None,
            updated_at: clock.utc(),
        }
    }

    /// Overwrites the analysis text.
    #[must_use]
    pub fn with_analysis_result(mut self, analysis_result: impl Into<String>) -> Self {
        self.analysis_result = Some(analysis_result.into());
        self
    }

    /// Overwrites the serialised board.
    #[must_use]
    pub fn with_kanban_records(mut self, kanban_records: impl Into<String>) -> Self {
        self.kanban_records = Some(kanban_records.into());
        self
    }

    /// Resets the serialised board to empty.
    #[must_use]
    pub fn clearing_kanban_records(self) -> Self {
        self.with_kanban_records(String::new())
    }

    /// Returns the target record identifier.
    #[must_use]
    pub const fn record_id(&self) -> RecordId {
        self.record_id
    }

    /// Returns the analysis text to write, if any.
    #[must_use]
    pub fn analysis_result(&self) -> Option<&str> {
        self.analysis_result.as_deref()
    }

    /// Returns the board text to write, if any.
    #[must_use]
    pub fn kanban_records(&self) -> Option<&str> {
        self.kanban_records.as_deref()
    }

    /// Returns the timestamp stamped on the record when applied.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
