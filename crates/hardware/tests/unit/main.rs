//! # Unit Tests
//!
//! Component-level tests for the individual translation layers.
