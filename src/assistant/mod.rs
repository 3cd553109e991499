//! Generative-model access for careboard.
//!
//! The treatment services talk to the model only through the
//! [`ports::GenerativeModel`] port. Two adapters implement it: an HTTP client
//! for the Gemini `generateContent` API and a scripted double for tests and
//! offline runs.
//!
//! - Request types and prompt templates in [`domain`]
//! - Port contract in [`ports`]
//! - Adapter implementations in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;

#[cfg(test)]
mod tests;
