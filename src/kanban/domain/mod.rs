//! Domain model for screening boards.

mod board;
mod column;
mod error;
mod task;
mod tally;

pub use board::Kanban;
pub use column::{BOARD_COLUMNS, Column, ColumnId};
pub use error::{KanbanError, ParseColumnIdError};
pub use task::{BoardTask, TaskKey};
pub use tally::ColumnTally;
