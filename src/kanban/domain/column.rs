//! Board columns and the closed set of column identifiers.

use super::ParseColumnIdError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a board column or of the `overdue` task status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnId {
    /// Tasks that have not been started.
    Todo,
    /// Tasks in progress.
    Doing,
    /// Completed tasks.
    Done,
    /// Tasks past their due point. Not a rendered column.
    Overdue,
}

/// The three rendered columns, in display order.
pub const BOARD_COLUMNS: [ColumnId; 3] = [ColumnId::Todo, ColumnId::Doing, ColumnId::Done];

impl ColumnId {
    /// Returns the wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::Doing => "doing",
            Self::Done => "done",
            Self::Overdue => "overdue",
        }
    }

    /// Returns `true` for the three rendered columns.
    #[must_use]
    pub const fn is_board_column(self) -> bool {
        !matches!(self, Self::Overdue)
    }

    /// Returns the title used when a board is rebuilt without AI-authored
    /// titles.
    #[must_use]
    pub const fn default_title(self) -> &'static str {
        match self {
            Self::Todo => "Todo",
            Self::Doing => "Work in progress",
            Self::Done => "Done",
            Self::Overdue => "Overdue",
        }
    }
}

impl TryFrom<&str> for ColumnId {
    type Error = ParseColumnIdError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "todo" => Ok(Self::Todo),
            "doing" => Ok(Self::Doing),
            "done" => Ok(Self::Done),
            "overdue" => Ok(Self::Overdue),
            _ => Err(ParseColumnIdError(value.to_owned())),
        }
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A rendered board column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    id: ColumnId,
    title: String,
}

impl Column {
    /// Creates a column.
    #[must_use]
    pub fn new(id: ColumnId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
        }
    }

    /// Returns the column identifier.
    #[must_use]
    pub const fn id(&self) -> ColumnId {
        self.id
    }

    /// Returns the display title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }
}
