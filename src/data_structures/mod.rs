//! Data structures for the Lala Trie crate.
//!
//! This module contains the string-keyed trie map and its supporting types.
//! All implementations adhere to the project requirements:
//! - No unsafe code
//! - Explicit error types for every rejected input
//! - Compact, cache-friendly node layout

pub mod lala_trie;

// Re-export common data structures
pub use lala_trie::{LalaTrie, LalaTrieConfig, LalaTrieError, LalaTrieResult, TrieStats};
