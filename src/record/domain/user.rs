//! User profile shown alongside the dashboard.

use super::{OwnerEmail, RecordDomainError, error::ensure_fits};
use serde::{Deserialize, Serialize};

/// Longest username, in characters.
pub const MAX_USERNAME_CHARS: usize = 255;

/// Profile of the user who owns a set of records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    email: OwnerEmail,
    username: String,
    age: Option<u16>,
    location: Option<String>,
}

impl UserProfile {
    /// Creates a profile with the required fields.
    ///
    /// # Errors
    ///
    /// Returns [`RecordDomainError::EmptyUsername`] when the username is
    /// blank and [`RecordDomainError::TooLong`] when it exceeds
    /// [`MAX_USERNAME_CHARS`].
    pub fn new(email: OwnerEmail, username: impl Into<String>) -> Result<Self, RecordDomainError> {
        let raw = username.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(RecordDomainError::EmptyUsername);
        }
        ensure_fits("username", trimmed, MAX_USERNAME_CHARS)?;
        Ok(Self {
            email,
            username: trimmed.to_owned(),
            age: None,
            location: None,
        })
    }

    /// Sets the age.
    #[must_use]
    pub fn with_age(mut self, age: u16) -> Self {
        self.age = Some(age);
        self
    }

    /// Sets the location.
    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Returns the email the profile is registered under.
    #[must_use]
    pub const fn email(&self) -> &OwnerEmail {
        &self.email
    }

    /// Returns the username.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the age, if recorded.
    #[must_use]
    pub const fn age(&self) -> Option<u16> {
        self.age
    }

    /// Returns the location, if recorded.
    #[must_use]
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }
}
