//! Domain types for the treatment-plan pipeline.

mod error;
mod upload;

pub use error::{TreatmentPlanError, TreatmentPlanResult};
pub use upload::{ACCEPTED_REPORT_TYPES, ReportUpload};
