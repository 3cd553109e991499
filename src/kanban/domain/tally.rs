//! Per-status task counts.

use super::ColumnId;
use std::ops::AddAssign;

/// Task counts per status for one or more boards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColumnTally {
    /// Every task counted, whatever its status.
    pub total: u64,
    /// Tasks in `todo`.
    pub todo: u64,
    /// Tasks in `doing`.
    pub doing: u64,
    /// Tasks in `done`.
    pub done: u64,
    /// Tasks marked `overdue`.
    pub overdue: u64,
}

impl ColumnTally {
    /// Counts one task in the given status.
    pub const fn record(&mut self, column_id: ColumnId) {
        self.total += 1;
        match column_id {
            ColumnId::Todo => self.todo += 1,
            ColumnId::Doing => self.doing += 1,
            ColumnId::Done => self.done += 1,
            ColumnId::Overdue => self.overdue += 1,
        }
    }

    /// Counts one task whose status is not a known column id.
    pub const fn record_unclassified(&mut self) {
        self.total += 1;
    }
}

impl AddAssign for ColumnTally {
    fn add_assign(&mut self, other: Self) {
        self.total += other.total;
        self.todo += other.todo;
        self.doing += other.doing;
        self.done += other.done;
        self.overdue += other.overdue;
    }
}
