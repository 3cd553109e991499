//! Shared fixtures for in-memory pipeline tests.

use std::sync::Arc;

use careboard::{
    assistant::adapters::ScriptedModel,
    kanban::services::ScreeningBoardService,
    metrics::services::DashboardMetricsService,
    record::{
        adapters::memory::InMemoryRecordRepository,
        domain::{OwnerEmail, RecordId, UserProfile},
        services::RecordCatalogService,
    },
    treatment::{
        domain::ReportUpload,
        services::{PlanStructuringService, ReportAnalysisService},
    },
};
use mockable::DefaultClock;
use rstest::fixture;

/// Owner used by every pipeline test.
pub const OWNER: &str = "patient@example.com";

/// Free-text plan returned by the scripted analysis call.
pub const PLAN_TEXT: &str = "Book an MRI within 2 weeks. Repeat the blood panel monthly.";

/// Board returned by the scripted structuring call.
pub const PLAN_BOARD: &str = concat!(
    r#"{"columns":[{"id":"todo","title":"Todo"},{"id":"doing","title":"Work in progress"},"#,
    r#"{"id":"done","title":"Done"}],"tasks":["#,
    r#"{"id":"1","columnId":"todo","content":"Book an MRI"},"#,
    r#"{"id":"2","columnId":"todo","content":"Repeat the blood panel"},"#,
    r#"{"id":"3","columnId":"done","content":"Initial consultation"}]}"#
);

type Repo = InMemoryRecordRepository;

/// Services wired to one in-memory repository and one scripted model.
pub struct Pipeline {
    pub repository: Arc<Repo>,
    pub model: Arc<ScriptedModel>,
    pub catalog: RecordCatalogService<Repo, DefaultClock>,
    pub analysis: ReportAnalysisService<Repo, ScriptedModel, DefaultClock>,
    pub structuring: PlanStructuringService<Repo, ScriptedModel, DefaultClock>,
    pub boards: ScreeningBoardService<Repo, DefaultClock>,
    pub metrics: DashboardMetricsService<Repo>,
}

impl Pipeline {
    /// Registers [`OWNER`] and creates an empty record for them.
    pub async fn new_record(&self, name: &str) -> Result<RecordId, eyre::Report> {
        let owner = owner()?;
        if self.catalog.find_user(&owner).await?.is_none() {
            self.catalog
                .register_user(&UserProfile::new(owner.clone(), "Patient")?)
                .await?;
        }
        Ok(self.catalog.create_record(&owner, name).await?.id())
    }
}

/// Fixture building a fresh pipeline.
#[fixture]
pub fn pipeline() -> Pipeline {
    let repository = Arc::new(InMemoryRecordRepository::new());
    let model = Arc::new(ScriptedModel::new());
    let clock = Arc::new(DefaultClock);
    Pipeline {
        catalog: RecordCatalogService::new(Arc::clone(&repository), Arc::clone(&clock)),
        analysis: ReportAnalysisService::new(
            Arc::clone(&repository),
            Arc::clone(&model),
            Arc::clone(&clock),
        ),
        structuring: PlanStructuringService::new(
            Arc::clone(&repository),
            Arc::clone(&model),
            Arc::clone(&clock),
        ),
        boards: ScreeningBoardService::new(Arc::clone(&repository), clock),
        metrics: DashboardMetricsService::new(Arc::clone(&repository)),
        repository,
        model,
    }
}

/// Returns the parsed [`OWNER`] email.
pub fn owner() -> Result<OwnerEmail, eyre::Report> {
    Ok(OwnerEmail::new(OWNER)?)
}

/// Returns a small PNG upload.
pub fn scan_upload() -> Result<ReportUpload, eyre::Report> {
    Ok(ReportUpload::new(
        "scan.png",
        "image/png",
        vec![0x89, b'P', b'N', b'G'],
    )?)
}
