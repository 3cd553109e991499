//! Service layer for turning plan text into a screening board.

use crate::assistant::{
    domain::{ModelRequest, render_structuring_prompt},
    ports::{GenerativeModel, GenerativeModelError},
};
use crate::config::PipelineSettings;
use crate::kanban::{
    codec::{PlanFormatError, TaskColumnPolicy, clean_response, validate_plan},
    domain::Kanban,
};
use crate::record::{
    domain::{RecordId, RecordUpdate},
    ports::RecordRepository,
};
use crate::treatment::domain::{TreatmentPlanError, TreatmentPlanResult};
use mockable::Clock;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// A validated board together with the cleaned text it was parsed from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructuredPlan {
    board: Kanban,
    text: String,
}

impl StructuredPlan {
    /// Returns the validated board.
    #[must_use]
    pub const fn board(&self) -> &Kanban {
        &self.board
    }

    /// Returns the cleaned response text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Consumes the plan, returning the board.
    #[must_use]
    pub fn into_board(self) -> Kanban {
        self.board
    }
}

/// Asks the model to structure plan text and persists validated boards.
#[derive(Clone)]
pub struct PlanStructuringService<R, M, C>
where
    R: RecordRepository,
    M: GenerativeModel,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    model: Arc<M>,
    clock: Arc<C>,
    settings: PipelineSettings,
}

impl<R, M, C> PlanStructuringService<R, M, C>
where
    R: RecordRepository,
    M: GenerativeModel,
    C: Clock + Send + Sync,
{
    /// Creates a new structuring service with default pipeline settings.
    #[must_use]
    pub fn new(repository: Arc<R>, model: Arc<M>, clock: Arc<C>) -> Self {
        Self {
            repository,
            model,
            clock,
            settings: PipelineSettings::default(),
        }
    }

    /// Replaces the pipeline settings.
    #[must_use]
    pub const fn with_settings(mut self, settings: PipelineSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Structures free-text plan without touching any record.
    ///
    /// # Errors
    ///
    /// Returns [`TreatmentPlanError::EmptyPlanText`] for blank input,
    /// [`TreatmentPlanError::PlanFormat`] when the response is not a plan
    /// document or the call times out, [`TreatmentPlanError::PlanValidation`]
    /// when the document breaks the board structure, and
    /// [`TreatmentPlanError::AnalysisRequest`] when the model call fails.
    pub async fn structure_text(&self, plan_text: &str) -> TreatmentPlanResult<StructuredPlan> {
        if plan_text.trim().is_empty() {
            return Err(TreatmentPlanError::EmptyPlanText);
        }

        let prompt = render_structuring_prompt(plan_text)?;
        let response = self.request_structure(&ModelRequest::text(prompt)).await?;

        let cleaned = clean_response(&response)?;
        let board = validate_plan(cleaned.document(), TaskColumnPolicy::BoardOnly)?;
        debug!(
            tasks = board.tasks().len(),
            "structuring response passed validation"
        );
        Ok(StructuredPlan {
            board,
            text: cleaned.into_text(),
        })
    }

    /// Structures a record's analysis and stores the cleaned board text.
    ///
    /// Nothing is written unless the response parses and validates.
    ///
    /// # Errors
    ///
    /// Returns [`TreatmentPlanError::RecordNotFound`] or
    /// [`TreatmentPlanError::MissingAnalysis`] when there is nothing to
    /// structure, any error from [`Self::structure_text`], and
    /// [`TreatmentPlanError::Persistence`] when the repository fails.
    pub async fn structure_plan(&self, record_id: RecordId) -> TreatmentPlanResult<Kanban> {
        let record = self
            .repository
            .find_by_id(record_id)
            .await?
            .ok_or(TreatmentPlanError::RecordNotFound(record_id))?;
        if !record.has_analysis() {
            return Err(TreatmentPlanError::MissingAnalysis(record_id));
        }

        let structured = self
            .structure_text(record.analysis_result())
            .await
            .inspect_err(|err| warn!(%record_id, error = %err, "plan structuring failed"))?;

        let update = RecordUpdate::new(record_id, &*self.clock).with_kanban_records(structured.text());
        self.repository.update(&update).await?;
        info!(
            %record_id,
            tasks = structured.board().tasks().len(),
            "stored screening board"
        );
        Ok(structured.into_board())
    }

    async fn request_structure(&self, request: &ModelRequest) -> TreatmentPlanResult<String> {
        let timeout = self.settings.call_timeout;
        match tokio::time::timeout(timeout, self.model.generate(request)).await {
            Ok(Ok(text)) => Ok(text),
            Ok(Err(GenerativeModelError::TimedOut(elapsed))) => {
                Err(PlanFormatError::TimedOut(elapsed).into())
            }
            Ok(Err(GenerativeModelError::EmptyResponse)) => Err(PlanFormatError::Empty.into()),
            Ok(Err(err)) => Err(err.into()),
            Err(_) => Err(PlanFormatError::TimedOut(timeout).into()),
        }
    }
}
