//! Slot arena owning every trie node.
//!
//! Nodes are addressed by [`NodeId`] instead of pointers, which keeps parent
//! back-links free of ownership cycles. Freed slots go on a free list and are
//! reused by later allocations.

use crate::node::{NodeId, TrieNode};

#[derive(Debug)]
pub struct NodeArena {
    slots: Vec<Option<TrieNode>>,
    /// Free slot indices, reused LIFO.
    free: Vec<NodeId>,
    live: usize,
    /// Nodes ever created; never decremented.
    tags_created: usize,
}

impl NodeArena {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
            live: 0,
            tags_created: 0,
        }
    }

    pub fn alloc(&mut self, node: TrieNode) -> NodeId {
        self.live += 1;
        if let Some(id) = self.free.pop() {
            debug_assert!(self.slots[id.as_usize()].is_none());
            self.slots[id.as_usize()] = Some(node);
            return id;
        }
        let id = NodeId::from_usize(self.slots.len());
        self.slots.push(Some(node));
        id
    }

    /// Allocate a child node for `tag`. Counts toward [`Self::tags_created`].
    pub fn alloc_child(&mut self, parent: NodeId, tag: char) -> NodeId {
        self.tags_created += 1;
        self.alloc(TrieNode::child_of(parent, tag))
    }

    pub fn free_node(&mut self, id: NodeId) -> TrieNode {
        let node = self.slots[id.as_usize()]
            .take()
            .unwrap_or_else(|| panic!("double free of {id:?}"));
        self.live -= 1;
        self.free.push(id);
        node
    }

    /// # Panics
    /// Panics if `id` refers to a freed slot.
    #[inline]
    pub fn get(&self, id: NodeId) -> &TrieNode {
        self.slots[id.as_usize()]
            .as_ref()
            .unwrap_or_else(|| panic!("dangling node id {id:?}"))
    }

    /// # Panics
    /// Panics if `id` refers to a freed slot.
    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut TrieNode {
        self.slots[id.as_usize()]
            .as_mut()
            .unwrap_or_else(|| panic!("dangling node id {id:?}"))
    }

    /// Live nodes, root included.
    #[inline]
    pub fn len(&self) -> usize {
        self.live
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    #[inline]
    pub fn tags_created(&self) -> usize {
        self.tags_created
    }

    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    pub fn memory_usage(&self) -> usize {
        self.slots.capacity() * std::mem::size_of::<Option<TrieNode>>()
            + self.free.capacity() * std::mem::size_of::<NodeId>()
    }
}

impl Default for NodeArena {
    fn default() -> Self {
        Self::with_capacity(0)
    }
}
