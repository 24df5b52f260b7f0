//! Trail of nodes visited by a tolerant lookup.

use crate::node::NodeId;

/// Tag of the synthetic node recorded each time a word boundary is crossed.
pub const SEPARATOR: char = '\n';

/// One step of a lookup trail.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visit {
    /// A trie node, at `depth` symbols below the root (the root's children are
    /// at depth 1).
    Node { id: NodeId, tag: char, depth: usize },
    /// A word ends at the previously visited node.
    Boundary,
}

impl Visit {
    pub fn tag(&self) -> char {
        match *self {
            Visit::Node { tag, .. } => tag,
            Visit::Boundary => SEPARATOR,
        }
    }
}

/// Nodes visited by a tolerant lookup, in traversal order.
///
/// Branches that did not reach a terminal node are rolled back, so a trail is
/// empty exactly when the lookup missed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LookupTrail {
    visits: Vec<Visit>,
}

impl LookupTrail {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.visits.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.visits.is_empty()
    }

    pub fn visits(&self) -> &[Visit] {
        &self.visits
    }

    /// Visited symbols with [`SEPARATOR`] at every word boundary.
    pub fn symbols(&self) -> String {
        self.visits.iter().map(Visit::tag).collect()
    }

    /// Whole words ending at each boundary, in the order they were reached.
    ///
    /// The running path is cut back to each node's depth before the node's
    /// symbol is appended, so sibling branches of an exhaustive walk do not
    /// bleed into each other.
    pub fn words(&self) -> Vec<String> {
        let mut path: Vec<char> = Vec::new();
        let mut out = Vec::new();
        for visit in &self.visits {
            match *visit {
                Visit::Node { tag, depth, .. } => {
                    path.truncate(depth.saturating_sub(1));
                    path.push(tag);
                }
                Visit::Boundary => out.push(path.iter().collect()),
            }
        }
        out
    }

    #[inline]
    pub(crate) fn mark(&self) -> usize {
        self.visits.len()
    }

    #[inline]
    pub(crate) fn rollback(&mut self, mark: usize) {
        self.visits.truncate(mark);
    }

    #[inline]
    pub(crate) fn push_node(&mut self, id: NodeId, tag: char, depth: usize) {
        self.visits.push(Visit::Node { id, tag, depth });
    }

    #[inline]
    pub(crate) fn push_boundary(&mut self) {
        self.visits.push(Visit::Boundary);
    }
}
