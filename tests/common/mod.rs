//! Common test utilities for shakegrid integration tests.
//!
//! This module is shared across all integration test files.

pub mod test_data;
