//! Screening board state for careboard.
//!
//! A screening board is the structured form of a treatment plan: three
//! ordered columns (`todo`, `doing`, `done`) and the tasks placed in them.
//! Tasks may also carry the `overdue` status, which has no column of its own.
//!
//! - Domain types in [`domain`]
//! - Wire-format decoding, fence stripping and validation in [`codec`]
//! - Board loading and persisted moves in [`services`]

pub mod codec;
pub mod domain;
pub mod services;

#[cfg(test)]
mod tests;
