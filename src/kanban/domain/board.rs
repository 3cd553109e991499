//! Screening board aggregate.

use super::{BoardTask, Column, ColumnId, ColumnTally, KanbanError, TaskKey};

/// A validated screening board.
///
/// Boards are only built by [`crate::kanban::codec`] after structural
/// validation, so `columns` is always `todo`, `doing`, `done` in that order
/// and every task sits in one of those columns or is marked `overdue`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Kanban {
    columns: Vec<Column>,
    tasks: Vec<BoardTask>,
}

impl Kanban {
    pub(crate) const fn from_validated(columns: Vec<Column>, tasks: Vec<BoardTask>) -> Self {
        Self { columns, tasks }
    }

    /// Returns the columns in display order.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Returns every task in plan order.
    #[must_use]
    pub fn tasks(&self) -> &[BoardTask] {
        &self.tasks
    }

    /// Finds a task by key.
    #[must_use]
    pub fn task(&self, task_id: &TaskKey) -> Option<&BoardTask> {
        self.tasks.iter().find(|task| task.id() == task_id)
    }

    /// Iterates the tasks in one column, in plan order.
    ///
    /// The iterator is lazy and can be cloned to restart it from the same
    /// position.
    pub fn tasks_by_column(
        &self,
        column_id: ColumnId,
    ) -> impl Iterator<Item = &BoardTask> + Clone {
        self.tasks
            .iter()
            .filter(move |task| task.column_id() == column_id)
    }

    /// Moves a task into another column and returns the updated task.
    ///
    /// Moving a task into the column it already occupies leaves the board
    /// untouched. Task order never changes.
    ///
    /// # Errors
    ///
    /// Returns [`KanbanError::InvalidMoveTarget`] when the target is
    /// `overdue` and [`KanbanError::TaskNotFound`] when no task has the key.
    pub fn move_task(
        &mut self,
        task_id: &TaskKey,
        target: ColumnId,
    ) -> Result<BoardTask, KanbanError> {
        if !target.is_board_column() {
            return Err(KanbanError::InvalidMoveTarget(target));
        }

        let task = self
            .tasks
            .iter_mut()
            .find(|task| task.id() == task_id)
            .ok_or_else(|| KanbanError::TaskNotFound(task_id.clone()))?;
        if task.column_id() != target {
            task.set_column(target);
        }
        Ok(task.clone())
    }

    /// Counts the board's tasks per status.
    #[must_use]
    pub fn tally(&self) -> ColumnTally {
        let mut tally = ColumnTally::default();
        for task in &self.tasks {
            tally.record(task.column_id());
        }
        tally
    }
}
