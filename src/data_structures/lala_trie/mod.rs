//! Lala Trie Implementation
//!
//! A string-keyed map built on a left-child/right-sibling trie. Every node
//! holds a single character plus two links: `first_child`, the chain of
//! characters that may follow it, and `next_sibling`, the next alternative
//! character at the same depth. Keys that share a prefix share the nodes of
//! that prefix, and a node costs two compact handles, one `char` and one
//! optional value regardless of how many children it has.
//!
//! # Example
//!
//! ```
//! use lala_trie_lib::data_structures::LalaTrie;
//!
//! let mut trie = LalaTrie::with_default("missing");
//! trie.set("item 1", "sweet")?.set("item 12", "cool")?;
//!
//! assert_eq!(trie.get("item 1")?, Some(&"sweet"));
//! assert_eq!(trie.get("item 12")?, Some(&"cool"));
//! assert_eq!(trie.get("item 2")?, Some(&"missing"));
//! # Ok::<(), lala_trie_lib::data_structures::LalaTrieError>(())
//! ```

mod arena;
mod config;
mod error;
mod node;

use std::borrow::Cow;

use serde::Serialize;
use tracing::trace;

use arena::NodeArena;
pub use config::LalaTrieConfig;
pub use error::LalaTrieError;
use node::NodeId;

/// Result type for Lala Trie operations
pub type LalaTrieResult<T> = Result<T, LalaTrieError>;

/// Allocation figures for a [`LalaTrie`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TrieStats {
    /// Number of keys carrying a value
    pub keys: usize,

    /// Number of allocated nodes
    pub nodes: usize,

    /// Size of a single node slot in bytes
    pub node_size_bytes: usize,

    /// Bytes reserved by the node arena
    pub reserved_bytes: usize,
}

/// String-keyed map backed by a left-child/right-sibling trie.
///
/// Key features:
/// * Shared storage for common key prefixes
/// * Configurable value returned on lookup misses
/// * Optional case-insensitive keys and key length limit
/// * Arena-allocated nodes linked by 32-bit handles
#[derive(Debug, Clone)]
pub struct LalaTrie<V> {
    /// Storage for every node
    arena: NodeArena<V>,

    /// Head of the chain of first-character nodes
    root_chain: Option<NodeId>,

    /// Value returned by `get` on a miss
    default_value: Option<V>,

    /// Number of keys carrying a value
    len: usize,

    /// Configuration options
    config: LalaTrieConfig,
}

impl<V> LalaTrie<V> {
    /// Creates an empty trie that returns `None` on a miss.
    pub fn new() -> Self {
        Self::with_config(LalaTrieConfig::default(), None)
    }

    /// Creates an empty trie that returns `default_value` on a miss.
    pub fn with_default(default_value: V) -> Self {
        Self::with_config(LalaTrieConfig::default(), Some(default_value))
    }

    /// Creates an empty trie with the given configuration and miss value.
    ///
    /// # Arguments
    ///
    /// * `config` - Key normalisation, length limit and arena pre-allocation
    /// * `default_value` - Value `get` returns on a miss, or `None` for no value
    pub fn with_config(config: LalaTrieConfig, default_value: Option<V>) -> Self {
        Self {
            arena: NodeArena::with_capacity(config.initial_capacity),
            root_chain: None,
            default_value,
            len: 0,
            config,
        }
    }

    /// Looks up `key`, falling back to the default value on a miss.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(&V))` - The stored value, or the default if the key is absent.
    /// * `Ok(None)` - The key is absent and the trie has no default.
    /// * `Err(LalaTrieError)` - If the key is empty or too long.
    pub fn get<K>(&self, key: K) -> LalaTrieResult<Option<&V>>
    where
        K: AsRef<str>,
    {
        Ok(self.get_stored(key)?.or(self.default_value.as_ref()))
    }

    /// Looks up `key` without falling back to the default value.
    ///
    /// Distinguishes an absent key from a stored value that happens to equal the default.
    pub fn get_stored<K>(&self, key: K) -> LalaTrieResult<Option<&V>>
    where
        K: AsRef<str>,
    {
        let key = self.normalize_key(key.as_ref())?;
        Ok(self
            .find_node(&key)
            .and_then(|id| self.arena[id].value.as_ref()))
    }

    /// Checks whether a value is stored under `key`.
    pub fn contains_key<K>(&self, key: K) -> LalaTrieResult<bool>
    where
        K: AsRef<str>,
    {
        Ok(self.get_stored(key)?.is_some())
    }

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// Creates one node for every character of `key` that is not already on
    /// an existing path.
    ///
    /// # Arguments
    ///
    /// * `key` - Non-empty key, case folded if the trie is case-insensitive
    /// * `value` - The value to store
    ///
    /// # Returns
    ///
    /// The trie itself, so calls can be chained with `?`.
    ///
    /// # Errors
    ///
    /// Fails with `EmptyKey` or `KeyTooLong` before touching the trie. On
    /// `CapacityExceeded` nodes created so far are kept but no value is stored.
    pub fn set<K>(&mut self, key: K, value: V) -> LalaTrieResult<&mut Self>
    where
        K: AsRef<str>,
    {
        let key = self.normalize_key(key.as_ref())?;
        let nodes_before = self.arena.len();

        let mut chars = key.chars().peekable();
        let first = *chars.peek().ok_or(LalaTrieError::EmptyKey)?;

        // The first node of an empty trie is created up front and then found
        // by the ordinary sibling search below.
        let mut chain_head = match self.root_chain {
            Some(head) => head,
            None => {
                let head = self.arena.alloc(first)?;
                self.root_chain = Some(head);
                head
            }
        };

        let mut node = chain_head;
        while let Some(character) = chars.next() {
            node = match self.arena.find_sibling_with(chain_head, character) {
                Some(found) => found,
                None => self.arena.append_sibling(chain_head, character)?,
            };

            if let Some(&next_character) = chars.peek() {
                chain_head = match self.arena[node].first_child {
                    Some(child) => child,
                    None => self.arena.append_child(node, next_character)?,
                };
            }
        }

        if self.arena[node].value.replace(value).is_none() {
            self.len += 1;
        }

        let created = self.arena.len() - nodes_before;
        if created > 0 {
            trace!(created, nodes = self.arena.len(), "Extended trie path");
        }

        Ok(self)
    }

    /// Returns the value handed out on a miss.
    pub fn default_value(&self) -> Option<&V> {
        self.default_value.as_ref()
    }

    /// Returns the configuration this trie was built with.
    pub fn config(&self) -> &LalaTrieConfig {
        &self.config
    }

    /// Returns the number of keys carrying a value.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Checks whether no key carries a value.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of allocated nodes.
    pub fn node_count(&self) -> usize {
        self.arena.len()
    }

    /// Returns allocation figures for this trie.
    pub fn stats(&self) -> TrieStats {
        let node_size_bytes = NodeArena::<V>::node_size();
        TrieStats {
            keys: self.len,
            nodes: self.arena.len(),
            node_size_bytes,
            reserved_bytes: self.arena.capacity() * node_size_bytes,
        }
    }

    /// Walks `key` down the trie without allocating, returning the node of its last character.
    fn find_node(&self, key: &str) -> Option<NodeId> {
        let mut next_chain_head = self.root_chain;
        let mut node = None;

        for character in key.chars() {
            let found = self.arena.find_sibling_with(next_chain_head?, character)?;
            next_chain_head = self.arena[found].first_child;
            node = Some(found);
        }

        node
    }

    /// Applies key validation and case folding.
    fn normalize_key<'k>(&self, key: &'k str) -> LalaTrieResult<Cow<'k, str>> {
        if key.is_empty() {
            return Err(LalaTrieError::EmptyKey);
        }

        // The limit applies to the key as given; folding can change its length.
        if let Some(max_length) = self.config.max_key_length {
            if key.chars().count() > max_length {
                return Err(LalaTrieError::KeyTooLong {
                    key: key.to_string(),
                    max_length,
                });
            }
        }

        if self.config.case_sensitive {
            Ok(Cow::Borrowed(key))
        } else {
            Ok(Cow::Owned(key.to_lowercase()))
        }
    }
}

impl<V> Default for LalaTrie<V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trie_basic_operations() {
        let mut trie = LalaTrie::new();
        assert!(trie.is_empty());
        assert_eq!(trie.node_count(), 0);

        trie.set("item 1", "sweet").unwrap();
        assert_eq!(trie.get("item 1").unwrap(), Some(&"sweet"));
        assert_eq!(trie.get("item 2").unwrap(), None);

        trie.set("item 12", "cool").unwrap();
        assert_eq!(trie.get("item 1").unwrap(), Some(&"sweet"));
        assert_eq!(trie.get("item 12").unwrap(), Some(&"cool"));
        assert_eq!(trie.len(), 2);
    }

    #[test]
    fn test_prefix_keys_do_not_interfere() {
        let mut trie = LalaTrie::new();
        trie.set("a", 1).unwrap().set("ab", 2).unwrap();

        assert_eq!(trie.get("a").unwrap(), Some(&1));
        assert_eq!(trie.get("ab").unwrap(), Some(&2));
        assert_eq!(trie.get("abc").unwrap(), None);
    }

    #[test]
    fn test_longer_key_first_then_prefix() {
        let mut trie = LalaTrie::new();
        trie.set("cart", 3).unwrap();
        assert_eq!(trie.get("car").unwrap(), None);

        trie.set("car", 2).unwrap();
        assert_eq!(trie.get("car").unwrap(), Some(&2));
        assert_eq!(trie.get("cart").unwrap(), Some(&3));
        assert_eq!(trie.node_count(), 4);
    }

    #[test]
    fn test_miss_returns_default() {
        let mut trie = LalaTrie::with_default(-1);
        assert_eq!(trie.get("anything").unwrap(), Some(&-1));

        trie.set("abc", 7).unwrap();
        assert_eq!(trie.get("ab").unwrap(), Some(&-1));
        assert_eq!(trie.get("abd").unwrap(), Some(&-1));
        assert_eq!(trie.get("abcd").unwrap(), Some(&-1));
        assert_eq!(trie.get("x").unwrap(), Some(&-1));
    }

    #[test]
    fn test_stored_default_is_distinguishable_from_miss() {
        let mut trie = LalaTrie::with_default(0);
        trie.set("zero", 0).unwrap();

        assert_eq!(trie.get("zero").unwrap(), Some(&0));
        assert_eq!(trie.get("none").unwrap(), Some(&0));
        assert_eq!(trie.get_stored("zero").unwrap(), Some(&0));
        assert_eq!(trie.get_stored("none").unwrap(), None);
        assert!(trie.contains_key("zero").unwrap());
        assert!(!trie.contains_key("none").unwrap());
    }

    #[test]
    fn test_update_keeps_structure() {
        let mut trie = LalaTrie::new();
        trie.set("key", "v1").unwrap().set("keys", "other").unwrap();
        let nodes = trie.node_count();

        trie.set("key", "v2").unwrap();
        assert_eq!(trie.get("key").unwrap(), Some(&"v2"));
        assert_eq!(trie.get("keys").unwrap(), Some(&"other"));
        assert_eq!(trie.node_count(), nodes);
        assert_eq!(trie.len(), 2);
    }

    #[test]
    fn test_shared_prefixes_share_nodes() {
        let mut trie = LalaTrie::new();
        trie.set("cat", 1).unwrap();
        assert_eq!(trie.node_count(), 3);

        trie.set("car", 2).unwrap();
        assert_eq!(trie.node_count(), 4);

        trie.set("cart", 3).unwrap();
        assert_eq!(trie.node_count(), 5);

        assert_eq!(trie.get("cat").unwrap(), Some(&1));
        assert_eq!(trie.get("car").unwrap(), Some(&2));
        assert_eq!(trie.get("cart").unwrap(), Some(&3));
    }

    #[test]
    fn test_single_character_first_key() {
        let mut trie = LalaTrie::new();
        trie.set("a", 'x').unwrap();

        assert_eq!(trie.node_count(), 1);
        assert_eq!(trie.get("a").unwrap(), Some(&'x'));

        trie.set("b", 'y').unwrap();
        assert_eq!(trie.node_count(), 2);
        assert_eq!(trie.get("a").unwrap(), Some(&'x'));
        assert_eq!(trie.get("b").unwrap(), Some(&'y'));
    }

    #[test]
    fn test_root_chain_holds_first_characters() {
        let mut trie = LalaTrie::new();
        trie.set("ab", 1).unwrap().set("b", 2).unwrap().set("cd", 3).unwrap();

        let head = trie.root_chain.unwrap();
        let mut firsts = Vec::new();
        let mut cursor = Some(head);
        while let Some(id) = cursor {
            firsts.push(trie.arena[id].character);
            cursor = trie.arena[id].next_sibling;
        }
        assert_eq!(firsts, vec!['a', 'b', 'c']);
    }

    #[test]
    fn test_empty_key_is_rejected() {
        let mut trie: LalaTrie<u8> = LalaTrie::new();
        assert_eq!(trie.set("", 1).err(), Some(LalaTrieError::EmptyKey));
        assert_eq!(trie.get("").err(), Some(LalaTrieError::EmptyKey));
        assert_eq!(trie.node_count(), 0);
    }

    #[test]
    fn test_case_insensitive_keys() {
        let config = LalaTrieConfig::new().with_case_sensitive(false);
        let mut trie = LalaTrie::with_config(config, None);
        trie.set("Content-Type", "json").unwrap();

        assert_eq!(trie.get("content-type").unwrap(), Some(&"json"));
        assert_eq!(trie.get("CONTENT-TYPE").unwrap(), Some(&"json"));
    }

    #[test]
    fn test_case_sensitive_by_default() {
        let mut trie = LalaTrie::new();
        trie.set("Key", 1).unwrap();
        assert_eq!(trie.get("key").unwrap(), None);
    }

    #[test]
    fn test_key_length_limit() {
        let config = LalaTrieConfig::new().with_max_key_length(3);
        let mut trie = LalaTrie::with_config(config, None);

        assert!(trie.set("abc", 1).is_ok());
        assert_eq!(
            trie.set("abcd", 2).err(),
            Some(LalaTrieError::KeyTooLong {
                key: "abcd".to_string(),
                max_length: 3,
            })
        );
        assert!(trie.get("abcd").is_err());
        assert_eq!(trie.node_count(), 3);
    }

    #[test]
    fn test_key_length_counts_key_before_folding() {
        let config = LalaTrieConfig::new()
            .with_case_sensitive(false)
            .with_max_key_length(1);
        let mut trie = LalaTrie::with_config(config, None);

        // 'İ' lowercases to two chars: 'i' plus a combining dot.
        assert_eq!("İ".to_lowercase().chars().count(), 2);
        trie.set("İ", 1).unwrap();
        assert_eq!(trie.get("İ").unwrap(), Some(&1));
        assert_eq!(trie.len(), 1);
    }

    #[test]
    fn test_key_too_long_reports_key_as_given() {
        let config = LalaTrieConfig::new()
            .with_case_sensitive(false)
            .with_max_key_length(3);
        let mut trie: LalaTrie<i32> = LalaTrie::with_config(config, None);

        assert_eq!(
            trie.set("ABCD", 1).err(),
            Some(LalaTrieError::KeyTooLong {
                key: "ABCD".to_string(),
                max_length: 3,
            })
        );
        assert!(trie.is_empty());
    }

    #[test]
    fn test_multibyte_characters_are_single_units() {
        let config = LalaTrieConfig::new().with_max_key_length(2);
        let mut trie = LalaTrie::with_config(config, None);
        trie.set("日本", 1).unwrap().set("日光", 2).unwrap();

        assert_eq!(trie.get("日本").unwrap(), Some(&1));
        assert_eq!(trie.get("日光").unwrap(), Some(&2));
        assert_eq!(trie.node_count(), 3);
    }

    #[test]
    fn test_stats() {
        let config = LalaTrieConfig::new().with_initial_capacity(16);
        let mut trie = LalaTrie::with_config(config, None);
        trie.set("ab", 1u64).unwrap().set("ac", 2).unwrap();

        let stats = trie.stats();
        assert_eq!(stats.keys, 2);
        assert_eq!(stats.nodes, 3);
        assert_eq!(stats.node_size_bytes, std::mem::size_of::<node::TrieNode<u64>>());
        assert!(stats.reserved_bytes >= 16 * stats.node_size_bytes);
    }
}
