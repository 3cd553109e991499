//! Step definitions for dashboard metrics scenarios.

pub mod when;
