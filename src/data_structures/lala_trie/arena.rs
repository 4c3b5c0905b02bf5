//! Node storage and sibling/child chain primitives.
//!
//! All nodes of a trie live in one contiguous `Vec`, and links between them
//! are [`NodeId`] handles. Nodes are never freed individually, so a handle
//! stays valid for the lifetime of the arena.

use std::ops::{Index, IndexMut};

use tracing::warn;

use super::error::LalaTrieError;
use super::node::{NodeId, TrieNode};
use super::LalaTrieResult;

/// Owner of every node in a trie.
#[derive(Debug, Clone)]
pub struct NodeArena<V> {
    nodes: Vec<TrieNode<V>>,
}

impl<V> NodeArena<V> {
    /// Creates an empty arena with room for `capacity` nodes.
    ///
    /// The capacity is a hint: if the reservation cannot be satisfied the
    /// arena starts empty and grows on demand.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut nodes = Vec::new();
        if let Err(e) = nodes.try_reserve_exact(capacity.min(NodeId::MAX_NODES)) {
            warn!(capacity, error = %e, "Could not pre-allocate trie nodes");
        }
        Self { nodes }
    }

    /// Number of nodes allocated so far.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Number of nodes the arena can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Allocates a detached node holding `character`.
    ///
    /// # Arguments
    ///
    /// * `character` - The character the new node holds
    ///
    /// # Returns
    ///
    /// * `Ok(NodeId)` - Handle of the new node, which has no links and no value
    /// * `Err(LalaTrieError::CapacityExceeded)` - If the arena cannot address another node
    pub fn alloc(&mut self, character: char) -> LalaTrieResult<NodeId> {
        let id = NodeId::from_index(self.nodes.len()).ok_or(LalaTrieError::CapacityExceeded {
            capacity: NodeId::MAX_NODES,
        })?;
        self.nodes.push(TrieNode::new(character));
        Ok(id)
    }

    /// Scans the sibling chain starting at `head` (inclusive) for `character`.
    ///
    /// # Arguments
    ///
    /// * `head` - First node of the chain to scan
    /// * `character` - The character to look for
    ///
    /// # Returns
    ///
    /// The first node of the chain holding `character`, or `None` if the chain
    /// ends without one.
    pub fn find_sibling_with(&self, head: NodeId, character: char) -> Option<NodeId> {
        let mut cursor = Some(head);
        while let Some(id) = cursor {
            let node = &self[id];
            if node.character == character {
                return Some(id);
            }
            cursor = node.next_sibling;
        }
        None
    }

    /// Attaches a new node holding `character` after the tail of the chain starting at `head`.
    ///
    /// Does not check for an existing sibling with the same character; callers
    /// run [`find_sibling_with`](Self::find_sibling_with) first.
    ///
    /// # Arguments
    ///
    /// * `head` - Any node of the chain to extend; the walk starts here
    /// * `character` - The character the new node holds
    ///
    /// # Returns
    ///
    /// * `Ok(NodeId)` - Handle of the new tail node
    /// * `Err(LalaTrieError::CapacityExceeded)` - If the arena is full; the chain is left unchanged
    pub fn append_sibling(&mut self, head: NodeId, character: char) -> LalaTrieResult<NodeId> {
        let mut tail = head;
        while let Some(next) = self[tail].next_sibling {
            tail = next;
        }
        let id = self.alloc(character)?;
        self[tail].next_sibling = Some(id);
        Ok(id)
    }

    /// Creates a new node holding `character` as the first child of `parent`.
    ///
    /// `parent` must not have a child chain yet.
    ///
    /// # Arguments
    ///
    /// * `parent` - The node that gains a child chain
    /// * `character` - The character the new child holds
    ///
    /// # Returns
    ///
    /// * `Ok(NodeId)` - Handle of the new child
    /// * `Err(LalaTrieError::CapacityExceeded)` - If the arena is full; `parent` is left unchanged
    pub fn append_child(&mut self, parent: NodeId, character: char) -> LalaTrieResult<NodeId> {
        debug_assert!(
            self[parent].first_child.is_none(),
            "append_child would orphan an existing child chain"
        );
        let id = self.alloc(character)?;
        self[parent].first_child = Some(id);
        Ok(id)
    }

    /// Size in bytes of one node slot.
    pub fn node_size() -> usize {
        std::mem::size_of::<TrieNode<V>>()
    }
}

impl<V> Default for NodeArena<V> {
    fn default() -> Self {
        Self::with_capacity(0)
    }
}

impl<V> Index<NodeId> for NodeArena<V> {
    type Output = TrieNode<V>;

    fn index(&self, id: NodeId) -> &Self::Output {
        &self.nodes[id.index()]
    }
}

impl<V> IndexMut<NodeId> for NodeArena<V> {
    fn index_mut(&mut self, id: NodeId) -> &mut Self::Output {
        &mut self.nodes[id.index()]
    }
}
