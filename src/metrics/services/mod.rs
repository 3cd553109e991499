//! Service layer for dashboard metrics.

use crate::metrics::domain::{DashboardMetrics, aggregate};
use crate::record::{
    domain::OwnerEmail,
    ports::{RecordRepository, RecordRepositoryError},
};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Service-level errors for metrics operations.
#[derive(Debug, Error)]
pub enum MetricsError {
    /// Fetching the records failed; no partial metrics are produced.
    #[error(transparent)]
    Repository(#[from] RecordRepositoryError),
}

/// Result type for metrics operations.
pub type MetricsResult<T> = Result<T, MetricsError>;

/// Computes dashboard metrics for a user's records.
#[derive(Clone)]
pub struct DashboardMetricsService<R>
where
    R: RecordRepository,
{
    repository: Arc<R>,
}

impl<R> DashboardMetricsService<R>
where
    R: RecordRepository,
{
    /// Creates a new metrics service.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Fetches the owner's records and aggregates their boards.
    ///
    /// # Errors
    ///
    /// Returns [`MetricsError::Repository`] when the records cannot be
    /// fetched.
    pub async fn dashboard_for(&self, owner: &OwnerEmail) -> MetricsResult<DashboardMetrics> {
        let records = self.repository.find_by_owner(owner).await?;
        let metrics = aggregate(&records);
        info!(
            owner = %owner,
            folders = metrics.total_folders,
            screenings = metrics.total_screenings,
            "computed dashboard metrics"
        );
        Ok(metrics)
    }
}
