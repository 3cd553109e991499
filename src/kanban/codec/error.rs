//! Error types for plan decoding.

use crate::kanban::domain::TaskKey;
use std::time::Duration;
use thiserror::Error;

/// The plan text could not be read as a plan document.
///
/// Recoverable: asking the model again usually succeeds.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PlanFormatError {
    /// Nothing was left after stripping code fences.
    #[error("plan response is empty")]
    Empty,

    /// The text is not a `{columns, tasks}` document.
    #[error("plan response is not in the expected format: {reason}")]
    Malformed {
        /// Parser diagnostic.
        reason: String,
    },

    /// The structuring request did not answer in time.
    #[error("plan response timed out after {0:?}")]
    TimedOut(Duration),
}

/// The plan parsed but breaks the board structure.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PlanValidationError {
    /// The plan does not have exactly three columns.
    #[error("plan must have 3 columns, found {0}")]
    ColumnCount(usize),

    /// The column at a position is not the expected one.
    #[error("column {position} must be '{expected}', found '{found}'")]
    ColumnLayout {
        /// Zero-based position in the column list.
        position: usize,
        /// Expected column id.
        expected: &'static str,
        /// Column id found in the plan.
        found: String,
    },

    /// A task references a column outside the accepted set.
    #[error("task '{task_id}' references unknown column '{column_id}'")]
    UnknownColumn {
        /// Offending task.
        task_id: TaskKey,
        /// Column id the task references.
        column_id: String,
    },

    /// Two tasks share an identifier.
    #[error("duplicate task id '{0}'")]
    DuplicateTaskId(TaskKey),

    /// A task has a blank identifier.
    #[error("task at index {0} has an empty id")]
    EmptyTaskId(usize),

    /// Several rules failed.
    #[error("plan failed {} validation rules", .0.len())]
    Multiple(Vec<PlanValidationError>),
}

impl PlanValidationError {
    /// Combines rule failures into one error, flattening nested lists and
    /// unwrapping a single failure.
    #[must_use]
    pub fn multiple(errors: Vec<Self>) -> Self {
        let mut flat: Vec<Self> = errors
            .into_iter()
            .flat_map(|err| match err {
                Self::Multiple(inner) => inner,
                other => vec![other],
            })
            .collect();
        if flat.len() == 1
            && let Some(single) = flat.pop()
        {
            return single;
        }
        Self::Multiple(flat)
    }

    /// Returns the individual rule failures.
    #[must_use]
    pub fn errors(&self) -> &[Self] {
        match self {
            Self::Multiple(inner) => inner,
            other => std::slice::from_ref(other),
        }
    }
}

/// Decoding failed at the format or validation step.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PlanDecodeError {
    /// Parsing failed.
    #[error(transparent)]
    Format(#[from] PlanFormatError),

    /// Validation failed.
    #[error(transparent)]
    Validation(#[from] PlanValidationError),
}
