//! Test modules for the Lala Trie crate.
//!
//! This module contains the crate-internal test suites:
//! - Configuration loading and validation
//! - Error types and reporting
//! - Property-based tests of the trie against a reference map
//!
//! Shared strategies and fixtures live in `test_utils`.
