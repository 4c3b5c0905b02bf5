//! Error types for the Lala Trie.
//!
//! This module defines the errors that can occur during Lala Trie operations.
//! A lookup miss is not an error; it is reported through the trie's default value.

/// Errors that can occur in Lala Trie operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LalaTrieError {
    /// Error when an empty key is provided.
    #[error("Empty key not allowed")]
    EmptyKey,

    /// Error when a key is longer than the configured maximum.
    #[error("Key '{key}' exceeds maximum key length of {max_length}")]
    KeyTooLong {
        /// The key that was too long.
        key: String,
        /// The maximum allowed length, in characters.
        max_length: usize,
    },

    /// Error when the node arena cannot address another node.
    #[error("Node arena is full ({capacity} nodes)")]
    CapacityExceeded {
        /// Number of nodes the arena can address.
        capacity: usize,
    },
}
