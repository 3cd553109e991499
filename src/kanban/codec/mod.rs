//! Conversion between AI-authored plan text and validated boards.
//!
//! Decoding runs in three steps: strip markdown code fences, parse the wire
//! document, then validate its structure into a [`Kanban`]. Only text that
//! passes all three is ever persisted as a record's board.
//!
//! The wire document is the storage contract for `kanban_records`:
//!
//! ```json
//! {"columns":[{"id":"todo","title":"Todo"},{"id":"doing","title":"Work in progress"},{"id":"done","title":"Done"}],
//!  "tasks":[{"id":"1","columnId":"todo","content":"Book a follow-up scan"}]}
//! ```

mod document;
mod error;
mod fence;
mod rules;

pub use document::{ColumnDocument, PlanDocument, TaskDocument};
pub use error::{PlanDecodeError, PlanFormatError, PlanValidationError};
pub use fence::strip_code_fences;
pub use rules::{TaskColumnPolicy, validate_plan};

use crate::kanban::domain::Kanban;

/// Plan text with fences removed, together with its parsed document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanedPlan {
    text: String,
    document: PlanDocument,
}

impl CleanedPlan {
    /// Returns the cleaned text exactly as it will be persisted.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the parsed wire document.
    #[must_use]
    pub const fn document(&self) -> &PlanDocument {
        &self.document
    }

    /// Consumes the plan, returning the cleaned text.
    #[must_use]
    pub fn into_text(self) -> String {
        self.text
    }
}

/// Strips code fences from a model response and parses the wire document.
///
/// # Errors
///
/// Returns [`PlanFormatError::Empty`] when nothing is left after stripping
/// and [`PlanFormatError::Malformed`] when the text is not a plan document.
pub fn clean_response(raw: &str) -> Result<CleanedPlan, PlanFormatError> {
    let text = strip_code_fences(raw);
    if text.is_empty() {
        return Err(PlanFormatError::Empty);
    }
    let document = PlanDocument::parse(&text)?;
    Ok(CleanedPlan { text, document })
}

/// Decodes persisted or freshly generated plan text into a board.
///
/// # Errors
///
/// Returns [`PlanDecodeError::Format`] when the text cannot be parsed and
/// [`PlanDecodeError::Validation`] when the parsed plan breaks the board
/// structure.
pub fn decode_board(raw: &str, policy: TaskColumnPolicy) -> Result<Kanban, PlanDecodeError> {
    let cleaned = clean_response(raw)?;
    Ok(validate_plan(cleaned.document(), policy)?)
}

/// Serialises a board into the wire document.
///
/// # Errors
///
/// Returns [`PlanFormatError::Malformed`] if serialisation fails.
pub fn encode_board(board: &Kanban) -> Result<String, PlanFormatError> {
    serde_json::to_string(&PlanDocument::from_board(board)).map_err(|err| {
        PlanFormatError::Malformed {
            reason: err.to_string(),
        }
    })
}
