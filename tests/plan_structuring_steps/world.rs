//! Shared world state for plan structuring BDD scenarios.

use std::sync::Arc;

use careboard::{
    assistant::adapters::ScriptedModel,
    kanban::domain::Kanban,
    record::{
        adapters::memory::InMemoryRecordRepository,
        domain::{Record, RecordId},
    },
    treatment::{domain::TreatmentPlanError, services::PlanStructuringService},
};
use mockable::DefaultClock;
use rstest::fixture;

/// Board the scripted model answers with in the canonical scenarios.
pub const CANONICAL_BOARD: &str = concat!(
    r#"{"columns":[{"id":"todo","title":"Todo"},{"id":"doing","title":"Work in progress"},"#,
    r#"{"id":"done","title":"Done"}],"#,
    r#""tasks":[{"id":"1","columnId":"todo","content":"Take medication X"}]}"#
);

/// Service type used by the BDD world.
pub type TestStructuringService =
    PlanStructuringService<InMemoryRecordRepository, ScriptedModel, DefaultClock>;

/// Scenario world for plan structuring behaviour tests.
pub struct StructuringWorld {
    pub repository: Arc<InMemoryRecordRepository>,
    pub model: Arc<ScriptedModel>,
    pub service: TestStructuringService,
    pub record_id: Option<RecordId>,
    pub stored_before: Option<Record>,
    pub last_result: Option<Result<Kanban, TreatmentPlanError>>,
}

impl StructuringWorld {
    /// Creates a world with an empty repository and no scripted replies.
    #[must_use]
    pub fn new() -> Self {
        let repository = Arc::new(InMemoryRecordRepository::new());
        let model = Arc::new(ScriptedModel::new());
        let service = PlanStructuringService::new(
            Arc::clone(&repository),
            Arc::clone(&model),
            Arc::new(DefaultClock),
        );
        Self {
            repository,
            model,
            service,
            record_id: None,
            stored_before: None,
            last_result: None,
        }
    }

    /// Returns the record created by the scenario.
    pub fn record_id(&self) -> Result<RecordId, eyre::Report> {
        self.record_id
            .ok_or_else(|| eyre::eyre!("missing record in scenario world"))
    }
}

impl Default for StructuringWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> StructuringWorld {
    StructuringWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
