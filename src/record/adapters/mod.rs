//! Adapter implementations for record persistence ports.

pub mod memory;
pub mod postgres;
