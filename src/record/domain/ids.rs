//! Identifier and validated scalar types for the record domain.

use super::RecordDomainError;
use super::error::ensure_fits;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque identifier of a patient record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(Uuid);

impl RecordId {
    /// Creates a new random record identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a record identifier from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the wrapped UUID.
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl AsRef<Uuid> for RecordId {
    fn as_ref(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Longest email address, in characters (RFC 5321 local part plus domain).
pub const MAX_EMAIL_CHARS: usize = 320;

/// Email address identifying the user a record belongs to.
///
/// Stored lower-cased so lookups are case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OwnerEmail(String);

impl OwnerEmail {
    /// Creates a validated owner email.
    ///
    /// # Errors
    ///
    /// Returns [`RecordDomainError::InvalidOwnerEmail`] unless the value holds
    /// exactly one `@` with non-empty local and domain parts and no
    /// whitespace, and [`RecordDomainError::TooLong`] when it exceeds
    /// [`MAX_EMAIL_CHARS`].
    pub fn new(value: impl Into<String>) -> Result<Self, RecordDomainError> {
        let raw = value.into();
        let normalized = raw.trim().to_ascii_lowercase();
        let mut parts = normalized.split('@');
        let local = parts.next().unwrap_or_default();
        let domain = parts.next().unwrap_or_default();
        let is_valid = !local.is_empty()
            && !domain.is_empty()
            && parts.next().is_none()
            && !normalized.chars().any(char::is_whitespace);

        if !is_valid {
            return Err(RecordDomainError::InvalidOwnerEmail(raw));
        }
        ensure_fits("email", &normalized, MAX_EMAIL_CHARS)?;
        Ok(Self(normalized))
    }

    /// Returns the email as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for OwnerEmail {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for OwnerEmail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
