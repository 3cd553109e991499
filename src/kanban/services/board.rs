//! Service layer for loading boards and persisting task moves.

use crate::kanban::{
    codec::{PlanDecodeError, PlanFormatError, TaskColumnPolicy, decode_board, encode_board},
    domain::{BoardTask, ColumnId, Kanban, KanbanError, TaskKey},
};
use crate::record::{
    domain::{Record, RecordId, RecordUpdate},
    ports::{RecordRepository, RecordRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Service-level errors for board operations.
#[derive(Debug, Error)]
pub enum BoardServiceError {
    /// The record does not exist.
    #[error("record not found: {0}")]
    RecordNotFound(RecordId),

    /// The record has no structured board yet.
    #[error("record {0} has no screening board")]
    NoBoard(RecordId),

    /// The persisted board could not be decoded.
    #[error(transparent)]
    Decode(#[from] PlanDecodeError),

    /// The board rejected the operation.
    #[error(transparent)]
    Board(#[from] KanbanError),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] RecordRepositoryError),
}

impl From<PlanFormatError> for BoardServiceError {
    fn from(err: PlanFormatError) -> Self {
        Self::Decode(PlanDecodeError::Format(err))
    }
}

/// Result type for board service operations.
pub type BoardServiceResult<T> = Result<T, BoardServiceError>;

/// Loads persisted boards and writes task moves back to their record.
#[derive(Clone)]
pub struct ScreeningBoardService<R, C>
where
    R: RecordRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> ScreeningBoardService<R, C>
where
    R: RecordRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new board service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Loads and decodes the board persisted on a record.
    ///
    /// Stored boards may mark tasks `overdue`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::RecordNotFound`] or
    /// [`BoardServiceError::NoBoard`] when there is nothing to load, and
    /// [`BoardServiceError::Decode`] when the stored text is not a valid
    /// board.
    pub async fn load_board(&self, record_id: RecordId) -> BoardServiceResult<Kanban> {
        let record = self
            .repository
            .find_by_id(record_id)
            .await?
            .ok_or(BoardServiceError::RecordNotFound(record_id))?;
        if !record.has_board() {
            return Err(BoardServiceError::NoBoard(record_id));
        }
        Ok(decode_board(
            record.kanban_records(),
            TaskColumnPolicy::AllowOverdue,
        )?)
    }

    /// Moves a task on a record's board and persists the result.
    ///
    /// Nothing is written when the task already sits in the target column.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Board`] when the task is missing or the
    /// target is not a board column, plus any error from
    /// [`Self::load_board`] or the repository.
    pub async fn move_task(
        &self,
        record_id: RecordId,
        task_id: &TaskKey,
        target: ColumnId,
    ) -> BoardServiceResult<BoardTask> {
        let mut board = self.load_board(record_id).await?;
        let unchanged = board
            .task(task_id)
            .is_some_and(|task| task.column_id() == target);

        let moved = board.move_task(task_id, target)?;
        if unchanged {
            debug!(%record_id, %task_id, column = %target, "task already in target column");
            return Ok(moved);
        }

        self.save_board(record_id, &board).await?;
        info!(%record_id, %task_id, column = %target, "moved screening task");
        Ok(moved)
    }

    /// Persists a board as the record's serialised plan.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Repository`] when the update fails.
    pub async fn save_board(
        &self,
        record_id: RecordId,
        board: &Kanban,
    ) -> BoardServiceResult<Record> {
        let text = encode_board(board)?;
        let update = RecordUpdate::new(record_id, &*self.clock).with_kanban_records(text);
        Ok(self.repository.update(&update).await?)
    }
}
