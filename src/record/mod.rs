//! Patient record persistence for careboard.
//!
//! A record is the container a patient uploads reports into. It carries the
//! raw analysis text returned by the generative model and the serialised
//! screening board derived from it. This module owns the persistence
//! contract for both fields and for the user profiles records belong to:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
