//! Configuration for the Lala Trie.

/// Configuration options for the Lala Trie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LalaTrieConfig {
    /// Whether keys are compared case-sensitively.
    /// When `false`, keys are lower-cased before every lookup and insertion.
    pub case_sensitive: bool,

    /// Maximum key length in characters, or `None` for no limit
    pub max_key_length: Option<usize>,

    /// Number of node slots to reserve up front
    pub initial_capacity: usize,
}

impl LalaTrieConfig {
    /// Creates the default configuration: case-sensitive, unbounded keys, no pre-allocation.
    pub fn new() -> Self {
        Self {
            case_sensitive: true,
            max_key_length: None,
            initial_capacity: 0,
        }
    }

    /// Set whether keys are compared case-sensitively.
    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    /// Reject keys longer than `max_key_length` characters.
    pub fn with_max_key_length(mut self, max_key_length: usize) -> Self {
        self.max_key_length = Some(max_key_length);
        self
    }

    /// Reserve room for `initial_capacity` nodes.
    pub fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }
}

impl Default for LalaTrieConfig {
    fn default() -> Self {
        Self::new()
    }
}
