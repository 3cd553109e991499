//! Port contracts for generative-model access.

pub mod model;

pub use model::{GenerativeModel, GenerativeModelError, GenerativeModelResult};
