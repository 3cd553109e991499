//! Application services for screening boards.

mod board;

pub use board::{BoardServiceError, BoardServiceResult, ScreeningBoardService};
