//! Aggregation of stored boards into dashboard counters.

use crate::kanban::codec::clean_response;
use crate::kanban::domain::ColumnTally;
use crate::record::domain::Record;
use serde::{Deserialize, Serialize};
use std::ops::AddAssign;
use tracing::{debug, warn};

/// Column title that marks a board as an AI personalised treatment.
///
/// Boards produced by the current structuring prompt never use this title;
/// it is only found on boards stored by older versions.
pub const LEGACY_TREATMENT_COLUMN_TITLE: &str = "AI Personalized Treatment";

/// Fixed-shape counters shown on the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMetrics {
    /// Number of records, whatever their board state.
    pub total_folders: u64,
    /// Records whose board has a column titled
    /// [`LEGACY_TREATMENT_COLUMN_TITLE`].
    pub ai_personalized_treatment: u64,
    /// Tasks placed on a board. Overdue tasks have no column and are only
    /// counted in `overdue_screenings`.
    pub total_screenings: u64,
    /// Tasks in `done`.
    pub completed_screenings: u64,
    /// Tasks in `doing`.
    pub pending_screenings: u64,
    /// Tasks marked `overdue`.
    pub overdue_screenings: u64,
}

impl DashboardMetrics {
    const fn add_tally(&mut self, tally: ColumnTally) {
        self.total_screenings += tally.total.saturating_sub(tally.overdue);
        self.completed_screenings += tally.done;
        self.pending_screenings += tally.doing;
        self.overdue_screenings += tally.overdue;
    }
}

impl AddAssign for DashboardMetrics {
    fn add_assign(&mut self, other: Self) {
        self.total_folders += other.total_folders;
        self.ai_personalized_treatment += other.ai_personalized_treatment;
        self.total_screenings += other.total_screenings;
        self.completed_screenings += other.completed_screenings;
        self.pending_screenings += other.pending_screenings;
        self.overdue_screenings += other.overdue_screenings;
    }
}

/// Computes dashboard counters over a set of records.
///
/// The result does not depend on record order. A record with an unreadable
/// board is logged and contributes only to `total_folders`.
#[must_use]
pub fn aggregate(records: &[Record]) -> DashboardMetrics {
    records
        .iter()
        .map(record_metrics)
        .fold(DashboardMetrics::default(), |mut total, metrics| {
            total += metrics;
            total
        })
}

fn record_metrics(record: &Record) -> DashboardMetrics {
    let mut metrics = DashboardMetrics {
        total_folders: 1,
        ..DashboardMetrics::default()
    };
    if !record.has_board() {
        return metrics;
    }

    match clean_response(record.kanban_records()) {
        Ok(plan) => {
            let document = plan.document();
            if document.has_column_titled(LEGACY_TREATMENT_COLUMN_TITLE) {
                debug!(record_id = %record.id(), "board carries the legacy treatment column");
                metrics.ai_personalized_treatment = 1;
            }
            metrics.add_tally(document.tally());
        }
        Err(err) => {
            warn!(record_id = %record.id(), error = %err, "skipping unreadable screening board");
        }
    }
    metrics
}
