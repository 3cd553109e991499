//! Error types for record domain validation.

use thiserror::Error;

/// Errors returned while constructing record domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RecordDomainError {
    /// The owner email is not a single `local@domain` address.
    #[error("invalid owner email '{0}'")]
    InvalidOwnerEmail(String),

    /// The record name is empty after trimming.
    #[error("record name must not be empty")]
    EmptyRecordName,

    /// The profile username is empty after trimming.
    #[error("username must not be empty")]
    EmptyUsername,

    /// A text field holds more characters than its column allows.
    #[error("{field} is {length} characters long; the limit is {max}")]
    TooLong {
        /// Field name.
        field: &'static str,
        /// Length in characters after trimming.
        length: usize,
        /// Maximum length in characters.
        max: usize,
    },
}

/// Rejects `value` when it holds more than `max` characters.
pub(super) fn ensure_fits(
    field: &'static str,
    value: &str,
    max: usize,
) -> Result<(), RecordDomainError> {
    let length = value.chars().count();
    if length > max {
        return Err(RecordDomainError::TooLong { field, length, max });
    }
    Ok(())
}
