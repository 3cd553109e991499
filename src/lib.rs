//! Careboard: treatment plans turned into screening boards.
//!
//! A patient uploads a diagnostic report into a record. The report is sent
//! to a generative model, which answers with a free-text treatment plan. A
//! second model call restructures that plan into a board of screening
//! tasks spread over `todo`, `doing` and `done` columns. Boards can be
//! edited by moving tasks, and the boards of all a user's records feed a
//! small set of dashboard metrics.
//!
//! # Architecture
//!
//! Each bounded context follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, APIs, etc.)
//! - **Services**: Orchestration over ports
//!
//! # Modules
//!
//! - [`record`]: Records, user profiles and their persistence
//! - [`kanban`]: Screening boards, the plan wire format and validation
//! - [`assistant`]: Generative-model access and prompt templates
//! - [`treatment`]: Report analysis and plan structuring
//! - [`metrics`]: Dashboard counters and cards
//! - [`config`]: Start-up configuration
//! - [`telemetry`]: Tracing subscriber installation

pub mod assistant;
pub mod config;
pub mod kanban;
pub mod metrics;
pub mod record;
pub mod telemetry;
pub mod treatment;

#[cfg(test)]
mod test_support;
