//! Unit tests for the record context.
