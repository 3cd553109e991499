//! Dashboard metrics for careboard.
//!
//! Metrics are derived from every record a user owns by counting the tasks
//! on each stored screening board. Boards are read leniently: a record whose
//! board cannot be parsed is logged and counts only towards the folder
//! total.
//!
//! - Counters, aggregation and the dashboard card table in [`domain`]
//! - Record fetching in [`services`]

pub mod domain;
pub mod services;
