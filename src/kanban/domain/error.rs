//! Error types for board operations and column parsing.

use super::{ColumnId, TaskKey};
use thiserror::Error;

/// Errors returned by in-memory board operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum KanbanError {
    /// No task with the key exists on the board.
    #[error("task not found on board: {0}")]
    TaskNotFound(TaskKey),

    /// The target is not a column a user can move tasks into.
    #[error("tasks cannot be moved to '{0}'")]
    InvalidMoveTarget(ColumnId),
}

/// Error returned while parsing a column identifier.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown column id: {0}")]
pub struct ParseColumnIdError(pub String);
