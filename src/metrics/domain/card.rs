//! Dashboard card table.

use super::DashboardMetrics;
use serde::Serialize;

/// Icon shown on a dashboard card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MetricIcon {
    /// Hourglass, for work in progress.
    HourglassHigh,
    /// Dashed check circle, for completion.
    CircleDashedCheck,
    /// Folder, for record counts.
    Folder,
    /// Person scan, for screenings.
    UserScan,
    /// Alert circle, for overdue work.
    AlertCircle,
}

impl MetricIcon {
    /// Returns the icon key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::HourglassHigh => "hourglass-high",
            Self::CircleDashedCheck => "circle-dashed-check",
            Self::Folder => "folder",
            Self::UserScan => "user-scan",
            Self::AlertCircle => "alert-circle",
        }
    }
}

/// The cards shown on the dashboard, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum MetricKind {
    /// Tasks in progress, shown as specialist appointments.
    SpecialistAppointmentsPending,
    /// Completed tasks out of all tasks.
    TreatmentProgressUpdate,
    /// Record count.
    TotalFolders,
    /// Task count.
    TotalScreenings,
    /// Tasks in `done`.
    CompletedScreenings,
    /// Tasks in `doing`.
    PendingScreenings,
    /// Tasks marked `overdue`.
    OverdueScreenings,
}

impl MetricKind {
    /// Every card in display order.
    pub const ALL: [Self; 7] = [
        Self::SpecialistAppointmentsPending,
        Self::TreatmentProgressUpdate,
        Self::TotalFolders,
        Self::TotalScreenings,
        Self::CompletedScreenings,
        Self::PendingScreenings,
        Self::OverdueScreenings,
    ];

    /// Returns the card title.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::SpecialistAppointmentsPending => "Specialist Appointments Pending",
            Self::TreatmentProgressUpdate => "Treatment Progress Update",
            Self::TotalFolders => "Total Folders",
            Self::TotalScreenings => "Total Screenings",
            Self::CompletedScreenings => "Completed Screenings",
            Self::PendingScreenings => "Pending Screenings",
            Self::OverdueScreenings => "Overdue Screenings",
        }
    }

    /// Returns the card icon.
    #[must_use]
    pub const fn icon(self) -> MetricIcon {
        match self {
            Self::SpecialistAppointmentsPending | Self::PendingScreenings => {
                MetricIcon::HourglassHigh
            }
            Self::TreatmentProgressUpdate | Self::CompletedScreenings => {
                MetricIcon::CircleDashedCheck
            }
            Self::TotalFolders => MetricIcon::Folder,
            Self::TotalScreenings => MetricIcon::UserScan,
            Self::OverdueScreenings => MetricIcon::AlertCircle,
        }
    }

    /// Returns `true` for the two cards shown in the top row.
    #[must_use]
    pub const fn is_headline(self) -> bool {
        matches!(
            self,
            Self::SpecialistAppointmentsPending | Self::TreatmentProgressUpdate
        )
    }

    /// Renders the card value from the counters.
    #[must_use]
    pub fn value(self, metrics: &DashboardMetrics) -> String {
        match self {
            Self::SpecialistAppointmentsPending | Self::PendingScreenings => {
                metrics.pending_screenings.to_string()
            }
            Self::TreatmentProgressUpdate => format!(
                "{} of {}",
                metrics.completed_screenings, metrics.total_screenings
            ),
            Self::TotalFolders => metrics.total_folders.to_string(),
            Self::TotalScreenings => metrics.total_screenings.to_string(),
            Self::CompletedScreenings => metrics.completed_screenings.to_string(),
            Self::OverdueScreenings => metrics.overdue_screenings.to_string(),
        }
    }
}

/// A rendered dashboard card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricCard {
    /// Which counter the card shows.
    pub kind: MetricKind,
    /// Card title.
    pub title: &'static str,
    /// Card icon.
    pub icon: MetricIcon,
    /// Rendered value.
    pub value: String,
}

impl DashboardMetrics {
    /// Renders every dashboard card in display order.
    #[must_use]
    pub fn cards(&self) -> Vec<MetricCard> {
        MetricKind::ALL
            .into_iter()
            .map(|kind| MetricCard {
                kind,
                title: kind.title(),
                icon: kind.icon(),
                value: kind.value(self),
            })
            .collect()
    }
}
