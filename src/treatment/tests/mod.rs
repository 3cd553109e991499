//! Unit tests for the treatment-plan pipeline.
