//! Node implementation for the Lala Trie.
//!
//! Nodes are stored in a [`NodeArena`](super::arena::NodeArena) and refer to
//! each other through compact [`NodeId`] handles. Each node holds one
//! character of a key path, the head of its child chain, the next node of its
//! own sibling chain, and an optional value.

use std::num::NonZeroU32;

/// Handle to a node inside a [`NodeArena`](super::arena::NodeArena).
///
/// Stored as the slot index plus one so that `Option<NodeId>` stays four bytes wide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(NonZeroU32);

impl NodeId {
    /// Largest number of nodes an arena can address.
    pub const MAX_NODES: usize = u32::MAX as usize;

    /// Builds a handle for the given arena slot, or `None` if the slot is not addressable.
    pub(crate) fn from_index(index: usize) -> Option<Self> {
        let raw = u32::try_from(index).ok()?.checked_add(1)?;
        NonZeroU32::new(raw).map(Self)
    }

    /// Returns the arena slot this handle points at.
    #[inline]
    pub(crate) fn index(self) -> usize {
        (self.0.get() - 1) as usize
    }
}

/// A node in the Lala Trie.
///
/// `first_child` starts the chain of characters that may follow this one;
/// `next_sibling` continues the chain this node belongs to.
#[derive(Debug, Clone)]
pub struct TrieNode<V> {
    /// Character at this position of the key path
    pub character: char,

    /// Head of the child chain
    pub first_child: Option<NodeId>,

    /// Next alternative at the same depth
    pub next_sibling: Option<NodeId>,

    /// Value of the key ending here, if any
    pub value: Option<V>,
}

impl<V> TrieNode<V> {
    /// Creates a detached node holding `character` and no value.
    pub fn new(character: char) -> Self {
        Self {
            character,
            first_child: None,
            next_sibling: None,
            value: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_id_round_trips_index() {
        for index in [0, 1, 41, 65_535] {
            let id = NodeId::from_index(index).unwrap();
            assert_eq!(id.index(), index);
        }
    }

    #[test]
    fn test_node_id_rejects_unaddressable_slots() {
        assert!(NodeId::from_index(NodeId::MAX_NODES).is_none());
        assert!(NodeId::from_index(NodeId::MAX_NODES - 1).is_some());
    }

    #[test]
    fn test_optional_links_stay_compact() {
        assert_eq!(std::mem::size_of::<Option<NodeId>>(), 4);
    }

    #[test]
    fn test_new_node_is_detached() {
        let node: TrieNode<u8> = TrieNode::new('x');
        assert_eq!(node.character, 'x');
        assert!(node.first_child.is_none());
        assert!(node.next_sibling.is_none());
        assert!(node.value.is_none());
    }
}
