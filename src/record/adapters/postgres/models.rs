//! Diesel row models for record persistence.

use super::schema::{records, user_profiles};
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = records)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct RecordRow {
    /// Record identifier.
    pub id: uuid::Uuid,
    /// Owner email.
    pub owner_email: String,
    /// Display label.
    pub record_name: String,
    /// Analysis text.
    pub analysis_result: String,
    /// Serialised board.
    pub kanban_records: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert model for records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = records)]
pub struct NewRecordRow {
    /// Record identifier.
    pub id: uuid::Uuid,
    /// Owner email.
    pub owner_email: String,
    /// Display label.
    pub record_name: String,
    /// Analysis text.
    pub analysis_result: String,
    /// Serialised board.
    pub kanban_records: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Partial update model; `None` fields are left out of the `SET` clause.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = records)]
pub struct RecordChangeset {
    /// Replacement analysis text.
    pub analysis_result: Option<String>,
    /// Replacement board text.
    pub kanban_records: Option<String>,
    /// Update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Query result and insert row for user profiles.
#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = user_profiles)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UserProfileRow {
    /// Profile email.
    pub email: String,
    /// Display username.
    pub username: String,
    /// Optional age.
    pub age: Option<i32>,
    /// Optional location.
    pub location: Option<String>,
}
