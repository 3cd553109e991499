//! Treatment-plan pipeline for careboard.
//!
//! An uploaded report is analysed by the generative model into a free-text
//! treatment plan, which is then structured into a screening board. Each
//! step persists its result on the record only after it succeeds, so a
//! failure always leaves the previously stored state intact.
//!
//! - Upload validation and the error taxonomy in [`domain`]
//! - Analysis and structuring orchestration in [`services`]

pub mod domain;
pub mod services;

#[cfg(test)]
mod tests;
