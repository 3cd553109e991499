//! Domain types for dashboard metrics.

mod aggregate;
mod card;

pub use aggregate::{DashboardMetrics, LEGACY_TREATMENT_COLUMN_TITLE, aggregate};
pub use card::{MetricCard, MetricIcon, MetricKind};
