//! Step definitions for plan structuring scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
