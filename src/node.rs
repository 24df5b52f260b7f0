//! Trie nodes.
//!
//! A node is labeled by the symbol on the edge from its parent and links to its
//! children by [`NodeId`]. Nodes never own each other directly; the
//! [`NodeArena`](crate::arena::NodeArena) owns every node and the ids form the
//! tree.
//!
//! Two counters are kept per node:
//!
//! - `words`: how many direct children are terminal. A word ending at node `n`
//!   is recorded on `n`'s parent, so summing `words` over a subtree counts the
//!   words strictly below its root.
//! - `prefixes`: how many direct children exist. Always equal to the number of
//!   child edges.

use std::collections::BTreeMap;

/// Stable index of a node inside a [`NodeArena`](crate::arena::NodeArena).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct NodeId(u32);

impl NodeId {
    /// # Panics
    /// Panics if `idx` does not fit in 32 bits.
    #[inline]
    pub(crate) fn from_usize(idx: usize) -> Self {
        assert!(idx < u32::MAX as usize, "node index too large");
        Self(idx as u32)
    }

    #[inline]
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }
}

/// A single trie node.
#[derive(Clone, Debug, Default)]
pub struct TrieNode {
    tag: Option<char>,
    parent: Option<NodeId>,
    /// Ordered so that branch choice from a seeded source is reproducible.
    nodes: BTreeMap<char, NodeId>,
    terminal: bool,
    words: usize,
    prefixes: usize,
}

impl TrieNode {
    /// The root node: empty tag, no parent.
    pub(crate) fn root() -> Self {
        Self::default()
    }

    pub(crate) fn child_of(parent: NodeId, tag: char) -> Self {
        Self {
            tag: Some(tag),
            parent: Some(parent),
            ..Self::default()
        }
    }

    /// Symbol on the edge from the parent; `None` for the root.
    #[inline]
    pub fn tag(&self) -> Option<char> {
        self.tag
    }

    #[inline]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// True when a stored word ends at this node.
    #[inline]
    pub fn is_end(&self) -> bool {
        self.terminal
    }

    /// Number of direct children that are terminal.
    #[inline]
    pub fn words(&self) -> usize {
        self.words
    }

    /// Number of direct children.
    #[inline]
    pub fn prefixes(&self) -> usize {
        self.prefixes
    }

    #[inline]
    pub fn child(&self, tag: char) -> Option<NodeId> {
        self.nodes.get(&tag).copied()
    }

    #[inline]
    pub fn has_children(&self) -> bool {
        !self.nodes.is_empty()
    }

    /// Children in symbol order.
    pub fn children(&self) -> impl Iterator<Item = (char, NodeId)> + '_ {
        self.nodes.iter().map(|(&tag, &id)| (tag, id))
    }

    pub(crate) fn child_ids(&self) -> Vec<NodeId> {
        self.nodes.values().copied().collect()
    }

    pub(crate) fn link_child(&mut self, tag: char, id: NodeId) {
        let prev = self.nodes.insert(tag, id);
        debug_assert!(prev.is_none(), "edge {tag:?} already linked");
        self.prefixes += 1;
    }

    pub(crate) fn unlink_child(&mut self, tag: char) -> Option<NodeId> {
        let id = self.nodes.remove(&tag)?;
        self.prefixes -= 1;
        Some(id)
    }

    pub(crate) fn set_terminal(&mut self, terminal: bool) {
        self.terminal = terminal;
    }

    pub(crate) fn add_word(&mut self) {
        self.words += 1;
    }

    pub(crate) fn remove_word(&mut self) {
        debug_assert!(self.words > 0, "words counter underflow");
        self.words -= 1;
    }

    #[cfg(test)]
    pub(crate) fn edge_count(&self) -> usize {
        self.nodes.len()
    }
}
