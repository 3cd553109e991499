//! Board tasks.

use super::ColumnId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Task identifier, unique within one board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskKey(String);

impl TaskKey {
    /// Wraps a task identifier.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the identifier as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TaskKey {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One actionable treatment step and the column it currently sits in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardTask {
    id: TaskKey,
    column_id: ColumnId,
    content: String,
}

impl BoardTask {
    /// Creates a task.
    #[must_use]
    pub fn new(id: TaskKey, column_id: ColumnId, content: impl Into<String>) -> Self {
        Self {
            id,
            column_id,
            content: content.into(),
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskKey {
        &self.id
    }

    /// Returns the current column.
    #[must_use]
    pub const fn column_id(&self) -> ColumnId {
        self.column_id
    }

    /// Returns the AI-authored description.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    pub(crate) const fn set_column(&mut self, column_id: ColumnId) {
        self.column_id = column_id;
    }
}
