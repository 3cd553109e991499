//! Structural validation rules for plan documents.
//!
//! Each rule checks one aspect of a document and reports every violation it
//! finds; [`validate_plan`] runs them all before building a board.

use super::{ColumnDocument, PlanDocument, PlanValidationError, TaskDocument};
use crate::kanban::domain::{BOARD_COLUMNS, BoardTask, Column, ColumnId, Kanban, TaskKey};
use std::collections::HashSet;

/// Which task statuses a document may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskColumnPolicy {
    /// Tasks must sit in `todo`, `doing` or `done`. Applied to fresh model
    /// output.
    BoardOnly,
    /// Tasks may additionally be marked `overdue`. Applied to boards read back
    /// from storage.
    AllowOverdue,
}

impl TaskColumnPolicy {
    const fn accepts(self, column_id: ColumnId) -> bool {
        match self {
            Self::BoardOnly => column_id.is_board_column(),
            Self::AllowOverdue => true,
        }
    }
}

/// Validates a parsed document and builds the board it describes.
///
/// # Errors
///
/// Returns [`PlanValidationError`] listing every rule the document breaks.
pub fn validate_plan(
    document: &PlanDocument,
    policy: TaskColumnPolicy,
) -> Result<Kanban, PlanValidationError> {
    let mut errors = Vec::new();

    let columns = match validate_column_layout(&document.columns) {
        Ok(columns) => columns,
        Err(err) => {
            errors.push(err);
            Vec::new()
        }
    };
    if let Err(err) = validate_task_ids(&document.tasks) {
        errors.push(err);
    }
    let tasks = match validate_task_columns(&document.tasks, policy) {
        Ok(tasks) => tasks,
        Err(err) => {
            errors.push(err);
            Vec::new()
        }
    };

    if errors.is_empty() {
        Ok(Kanban::from_validated(columns, tasks))
    } else {
        Err(PlanValidationError::multiple(errors))
    }
}

/// Checks that the columns are exactly `todo`, `doing`, `done`, in order.
///
/// # Errors
///
/// Returns [`PlanValidationError::ColumnCount`] or
/// [`PlanValidationError::ColumnLayout`].
pub fn validate_column_layout(
    columns: &[ColumnDocument],
) -> Result<Vec<Column>, PlanValidationError> {
    if columns.len() != BOARD_COLUMNS.len() {
        return Err(PlanValidationError::ColumnCount(columns.len()));
    }

    let mut errors = Vec::new();
    let mut validated = Vec::with_capacity(BOARD_COLUMNS.len());
    for (position, (column, expected)) in columns.iter().zip(BOARD_COLUMNS).enumerate() {
        if column.id == expected.as_str() {
            validated.push(Column::new(expected, column.title.clone()));
        } else {
            errors.push(PlanValidationError::ColumnLayout {
                position,
                expected: expected.as_str(),
                found: column.id.clone(),
            });
        }
    }

    if errors.is_empty() {
        Ok(validated)
    } else {
        Err(PlanValidationError::multiple(errors))
    }
}

/// Checks that task ids are non-empty and unique.
///
/// # Errors
///
/// Returns [`PlanValidationError::EmptyTaskId`] or
/// [`PlanValidationError::DuplicateTaskId`] for each offending task.
pub fn validate_task_ids(tasks: &[TaskDocument]) -> Result<(), PlanValidationError> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();
    for (index, task) in tasks.iter().enumerate() {
        if task.id.trim().is_empty() {
            errors.push(PlanValidationError::EmptyTaskId(index));
        } else if !seen.insert(task.id.as_str()) {
            errors.push(PlanValidationError::DuplicateTaskId(TaskKey::new(
                task.id.clone(),
            )));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(PlanValidationError::multiple(errors))
    }
}

/// Checks that every task references an accepted column and builds the tasks.
///
/// # Errors
///
/// Returns [`PlanValidationError::UnknownColumn`] for each task outside the
/// accepted set.
pub fn validate_task_columns(
    tasks: &[TaskDocument],
    policy: TaskColumnPolicy,
) -> Result<Vec<BoardTask>, PlanValidationError> {
    let mut errors = Vec::new();
    let mut validated = Vec::with_capacity(tasks.len());
    for task in tasks {
        let task_id = TaskKey::new(task.id.clone());
        match ColumnId::try_from(task.column_id.as_str()) {
            Ok(column_id) if policy.accepts(column_id) => {
                validated.push(BoardTask::new(task_id, column_id, task.content.clone()));
            }
            _ => errors.push(PlanValidationError::UnknownColumn {
                task_id,
                column_id: task.column_id.clone(),
            }),
        }
    }

    if errors.is_empty() {
        Ok(validated)
    } else {
        Err(PlanValidationError::multiple(errors))
    }
}
