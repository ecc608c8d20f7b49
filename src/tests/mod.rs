//! Test modules for the crate.
//!
//! This module contains the shared testing infrastructure, including:
//! - Model-based property tests using proptest
//! - Ownership checks for the owning sets
//! - Test fixtures and utilities
//!
//! The test philosophy follows the project standards:
//! - Testing all edge cases, including full tables and tombstone-only tables
//! - Property-based testing against a `std::collections::HashSet` model

pub mod test_utils;

// Re-export commonly used testing tools to simplify imports in test modules
pub use test_utils::{
    init_test_tracing, live_tracked, operations_strategy, word_strategy, SetOperation, Tracked,
};
