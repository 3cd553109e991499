//! Error taxonomy for the treatment-plan pipeline.

use crate::assistant::domain::PromptError;
use crate::assistant::ports::GenerativeModelError;
use crate::kanban::codec::{PlanFormatError, PlanValidationError};
use crate::record::domain::RecordId;
use crate::record::ports::RecordRepositoryError;
use thiserror::Error;

/// Errors surfaced by report analysis and plan structuring.
///
/// None of these are retried by the pipeline; each leaves the record exactly
/// as it was before the failing call.
#[derive(Debug, Error)]
pub enum TreatmentPlanError {
    /// The generative model call failed or timed out.
    #[error("analysis request failed: {0}")]
    AnalysisRequest(#[source] GenerativeModelError),

    /// The structuring response could not be parsed as a plan. Recoverable
    /// by trying again.
    #[error("structured plan could not be read: {0}")]
    PlanFormat(#[from] PlanFormatError),

    /// The structuring response parsed but breaks the board structure.
    #[error("structured plan is invalid: {0}")]
    PlanValidation(#[from] PlanValidationError),

    /// Reading or writing the record failed.
    #[error("record persistence failed: {0}")]
    Persistence(#[from] RecordRepositoryError),

    /// The uploaded report cannot be analysed.
    #[error("invalid report: {0}")]
    InvalidReport(String),

    /// The record has no analysis text to structure.
    #[error("record {0} has no treatment plan to structure")]
    MissingAnalysis(RecordId),

    /// The plan text handed to the structurer is blank.
    #[error("treatment plan text is empty")]
    EmptyPlanText,

    /// The record does not exist.
    #[error("record not found: {0}")]
    RecordNotFound(RecordId),

    /// A prompt template failed to render.
    #[error(transparent)]
    Prompt(#[from] PromptError),
}

impl From<GenerativeModelError> for TreatmentPlanError {
    fn from(err: GenerativeModelError) -> Self {
        Self::AnalysisRequest(err)
    }
}

impl TreatmentPlanError {
    /// Returns `true` when the same request may succeed if tried again.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        match self {
            Self::AnalysisRequest(err) => err.is_retryable(),
            Self::PlanFormat(_) | Self::PlanValidation(_) => true,
            Self::Persistence(_)
            | Self::InvalidReport(_)
            | Self::MissingAnalysis(_)
            | Self::EmptyPlanText
            | Self::RecordNotFound(_)
            | Self::Prompt(_) => false,
        }
    }
}

/// Result type for treatment-plan operations.
pub type TreatmentPlanResult<T> = Result<T, TreatmentPlanError>;
