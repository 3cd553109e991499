//! Unit tests for the assistant context.
