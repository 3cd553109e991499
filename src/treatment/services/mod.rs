//! Orchestration services for the treatment-plan pipeline.

mod analysis;
mod structuring;

pub use analysis::ReportAnalysisService;
pub use structuring::{PlanStructuringService, StructuredPlan};
