//! Service layer for report analysis.

use crate::assistant::{
    domain::{ANALYSIS_PROMPT, ModelRequest},
    ports::{GenerativeModel, GenerativeModelError},
};
use crate::config::PipelineSettings;
use crate::record::{
    domain::{Record, RecordId, RecordUpdate},
    ports::RecordRepository,
};
use crate::treatment::domain::{ReportUpload, TreatmentPlanError, TreatmentPlanResult};
use mockable::Clock;
use std::sync::Arc;
use tracing::{info, warn};

/// Sends uploaded reports to the model and stores the returned plan text.
#[derive(Clone)]
pub struct ReportAnalysisService<R, M, C>
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

impl<R, M, C> ReportAnalysisService<R, M, C>
where
    R: RecordRepository,
    M: GenerativeModel,
    C: Clock + Send + Sync,
{
    /// Creates a new analysis service with default pipeline settings.
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

    /// Analyses a report and stores the plan text on the record.
    ///
    /// On success the record's analysis is replaced and its board cleared,
    /// since any earlier board was derived from the previous analysis. On
    /// failure nothing is written.
    ///
    /// # Errors
    ///
    /// Returns [`TreatmentPlanError::RecordNotFound`] when the record does not
    /// exist, [`TreatmentPlanError::AnalysisRequest`] when the model call
    /// fails, times out or returns no text, and
    /// [`TreatmentPlanError::Persistence`] when the repository fails.
    pub async fn analyze_report(
        &self,
        record_id: RecordId,
        upload: &ReportUpload,
    ) -> TreatmentPlanResult<Record> {
        self.repository
            .find_by_id(record_id)
            .await?
            .ok_or(TreatmentPlanError::RecordNotFound(record_id))?;

        let request = ModelRequest::text(ANALYSIS_PROMPT).with_attachment(upload.to_inline_data());
        let timeout = self.settings.call_timeout;
        let analysis = tokio::time::timeout(timeout, self.model.generate(&request))
            .await
            .map_err(|_| GenerativeModelError::TimedOut(timeout))
            .and_then(|result| result)
            .inspect_err(|err| warn!(%record_id, error = %err, "report analysis failed"))?;
        if analysis.trim().is_empty() {
            return Err(GenerativeModelError::EmptyResponse.into());
        }

        let update = RecordUpdate::new(record_id, &*self.clock)
            .with_analysis_result(analysis)
            .clearing_kanban_records();
        let record = self.repository.update(&update).await?;
        info!(
            %record_id,
            file = upload.file_name(),
            bytes = upload.len(),
            "stored report analysis"
        );
        Ok(record)
    }
}
