//! Wire document for persisted boards.

use super::PlanFormatError;
use crate::kanban::domain::{ColumnId, ColumnTally, Kanban};
use serde::{Deserialize, Serialize};

/// `{columns, tasks}` document as authored by the model and stored on a
/// record.
///
/// Identifiers stay as raw strings here; [`super::validate_plan`] turns them
/// into typed board values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanDocument {
    /// Columns in display order.
    pub columns: Vec<ColumnDocument>,
    /// Tasks in plan order.
    pub tasks: Vec<TaskDocument>,
}

/// Column entry of a [`PlanDocument`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDocument {
    /// Column identifier.
    pub id: String,
    /// Display title.
    pub title: String,
}

/// Task entry of a [`PlanDocument`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDocument {
    /// Task identifier.
    pub id: String,
    /// Column or status the task sits in.
    pub column_id: String,
    /// Task description.
    pub content: String,
}

impl PlanDocument {
    /// Parses fence-free plan text.
    ///
    /// # Errors
    ///
    /// Returns [`PlanFormatError::Malformed`] when the text is not JSON or
    /// lacks the `columns`/`tasks` shape.
    pub fn parse(text: &str) -> Result<Self, PlanFormatError> {
        serde_json::from_str(text).map_err(|err| PlanFormatError::Malformed {
            reason: err.to_string(),
        })
    }

    /// Builds the wire document for a board.
    #[must_use]
    pub fn from_board(board: &Kanban) -> Self {
        Self {
            columns: board
                .columns()
                .iter()
                .map(|column| ColumnDocument {
                    id: column.id().as_str().to_owned(),
                    title: column.title().to_owned(),
                })
                .collect(),
            tasks: board
                .tasks()
                .iter()
                .map(|task| TaskDocument {
                    id: task.id().as_str().to_owned(),
                    column_id: task.column_id().as_str().to_owned(),
                    content: task.content().to_owned(),
                })
                .collect(),
        }
    }

    /// Returns `true` when some column carries exactly this title.
    #[must_use]
    pub fn has_column_titled(&self, title: &str) -> bool {
        self.columns.iter().any(|column| column.title == title)
    }

    /// Counts tasks per status without validating the document.
    ///
    /// Tasks with an unrecognised column id still count towards the total.
    #[must_use]
    pub fn tally(&self) -> ColumnTally {
        let mut tally = ColumnTally::default();
        for task in &self.tasks {
            match ColumnId::try_from(task.column_id.as_str()) {
                Ok(column_id) => tally.record(column_id),
                Err(_) => tally.record_unclassified(),
            }
        }
        tally
    }
}
