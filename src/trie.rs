//! The trie engine: insertion, structural deletion, exact and tolerant lookup.

use tracing::{debug, trace};

use crate::arena::NodeArena;
use crate::error::{Result, TrieError};
use crate::lookup::{LookupTrail, SEPARATOR};
use crate::node::{NodeId, TrieNode};
use crate::strategy::BranchStrategy;

/// Result of [`Trie::delete`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The value is not stored; nothing changed.
    NotFound,
    /// The terminal node was a leaf and has been unlinked and freed, along with
    /// any ancestors left without a word or children.
    NodeRemoved,
    /// The terminal node still has children; only its word marker was cleared.
    ValueCleared,
}

impl DeleteOutcome {
    /// True for both successful outcomes.
    #[inline]
    pub fn is_found(self) -> bool {
        self != DeleteOutcome::NotFound
    }
}

/// Character trie rooted at a single node.
pub struct Trie {
    arena: NodeArena,
    root: NodeId,
}

impl Trie {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Reserve `capacity` node slots up front.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut arena = NodeArena::with_capacity(capacity);
        let root = arena.alloc(TrieNode::root());
        Self { arena, root }
    }

    #[inline]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// # Panics
    /// Panics if `id` is not a live node of this trie.
    #[inline]
    pub fn node(&self, id: NodeId) -> &TrieNode {
        self.arena.get(id)
    }

    /// Live nodes, root included.
    pub fn node_count(&self) -> usize {
        self.arena.len()
    }

    /// Nodes ever created by [`Trie::insert`]; freed nodes are not subtracted.
    pub fn tags_created(&self) -> usize {
        self.arena.tags_created()
    }

    pub fn memory_usage(&self) -> usize {
        self.arena.memory_usage()
    }

    /// Node slots allocated, live or free.
    pub fn capacity(&self) -> usize {
        self.arena.capacity()
    }

    fn validate_word(value: &str) -> Result<()> {
        if value.is_empty() {
            return Err(TrieError::invalid_argument("empty word"));
        }
        if value.contains(SEPARATOR) {
            return Err(TrieError::invalid_argument(format!(
                "word {value:?} contains the boundary separator {SEPARATOR:?}"
            )));
        }
        Ok(())
    }

    /// Store `value` as a word. Returns `false` if it was already stored.
    ///
    /// Creates one node per missing edge and bumps the `prefixes` counter of
    /// the node it hangs from. The word itself is counted on the parent of the
    /// terminal node.
    pub fn insert(&mut self, value: &str) -> Result<bool> {
        Self::validate_word(value)?;

        let mut parent = self.root;
        let mut current = self.root;
        let mut created = 0usize;
        for tag in value.chars() {
            parent = current;
            current = match self.arena.get(current).child(tag) {
                Some(child) => child,
                None => {
                    let child = self.arena.alloc_child(current, tag);
                    self.arena.get_mut(current).link_child(tag, child);
                    created += 1;
                    child
                }
            };
        }

        if self.arena.get(current).is_end() {
            trace!(word = value, "insert of stored word ignored");
            return Ok(false);
        }
        self.arena.get_mut(current).set_terminal(true);
        self.arena.get_mut(parent).add_word();
        debug!(word = value, created, "inserted word");
        Ok(true)
    }

    /// Node reached by following `value` from the root.
    fn descend(&self, value: &str) -> Option<NodeId> {
        value
            .chars()
            .try_fold(self.root, |id, tag| self.arena.get(id).child(tag))
    }

    /// Exact match. Never modifies the trie.
    pub fn find(&self, value: &str) -> bool {
        self.descend(value)
            .is_some_and(|id| self.arena.get(id).is_end())
    }

    /// Remove `value`.
    ///
    /// Counter updates are made on the immediate parent only; ancestors keep
    /// per-level counts.
    pub fn delete(&mut self, value: &str) -> DeleteOutcome {
        let Some(target) = self.descend(value) else {
            return DeleteOutcome::NotFound;
        };
        let node = self.arena.get(target);
        if !node.is_end() {
            return DeleteOutcome::NotFound;
        }
        // The root is never terminal.
        let Some(parent) = node.parent() else {
            return DeleteOutcome::NotFound;
        };
        let has_children = node.has_children();

        self.arena.get_mut(target).set_terminal(false);
        self.arena.get_mut(parent).remove_word();

        if has_children {
            debug!(word = value, "cleared word marker");
            return DeleteOutcome::ValueCleared;
        }

        let pruned = self.prune(target);
        debug!(word = value, pruned, "removed word");
        DeleteOutcome::NodeRemoved
    }

    /// Unlink and free `id`, then each ancestor left without a word or
    /// children. Returns the number of nodes freed.
    fn prune(&mut self, mut id: NodeId) -> usize {
        let mut pruned = 0;
        loop {
            let node = self.arena.get(id);
            let (Some(parent), Some(tag)) = (node.parent(), node.tag()) else {
                break;
            };
            if node.is_end() || node.has_children() {
                break;
            }
            self.arena.get_mut(parent).unlink_child(tag);
            self.arena.free_node(id);
            pruned += 1;
            id = parent;
        }
        pruned
    }

    /// Tolerant match.
    ///
    /// With `tolerance == 0` this is [`Trie::find`]. Otherwise each missing
    /// edge spends one unit and continues below the branch(es) picked by
    /// `strategy`, and a match that still has budget explores past the word
    /// boundary. See [`Trie::lookup`].
    pub fn find_tolerant<S>(&self, value: &str, tolerance: usize, strategy: &mut S) -> bool
    where
        S: BranchStrategy + ?Sized,
    {
        if tolerance == 0 {
            return self.find(value);
        }
        !self.lookup(value, tolerance, strategy).is_empty()
    }

    /// Tolerant match that records the nodes it visited.
    ///
    /// The trail holds every node on a successful path plus a boundary after
    /// each terminal node crossed, including the ones reached by spending
    /// leftover tolerance past the end of `value`. It is empty on a miss.
    ///
    /// Branches are walked depth-first with an explicit frame stack, so the
    /// strategy is consulted in the same order a recursive walk would use.
    pub fn lookup<S>(&self, value: &str, tolerance: usize, strategy: &mut S) -> LookupTrail
    where
        S: BranchStrategy + ?Sized,
    {
        let symbols: Vec<char> = value.chars().collect();
        let mut trail = LookupTrail::new();
        let root = self.enter_match(self.root, 0, 0, tolerance, &symbols, strategy, &mut trail);
        let mut stack: Vec<Frame> = vec![root];

        let found = loop {
            let frame = stack.last_mut().expect("stack non-empty");
            if let Some(child) = frame.pending.next() {
                let next = match frame.next {
                    Next::Match { depth, idx, budget } => {
                        self.enter_match(child, depth, idx, budget, &symbols, strategy, &mut trail)
                    }
                    Next::Extend { depth, budget } => {
                        self.enter_extend(child, depth, budget, strategy, &mut trail)
                    }
                };
                stack.push(next);
                continue;
            }

            let done = stack.pop().expect("stack non-empty");
            if !done.found {
                trail.rollback(done.mark);
            }
            match stack.last_mut() {
                Some(parent) => parent.found |= done.found,
                None => break done.found,
            }
        };

        debug_assert_eq!(found, !trail.is_empty());
        trace!(query = value, tolerance, found, visited = trail.len(), "tolerant lookup");
        trail
    }

    /// Visit `id` while `symbols[idx..]` is still to be matched.
    #[allow(clippy::too_many_arguments)]
    fn enter_match<S>(
        &self,
        id: NodeId,
        depth: usize,
        idx: usize,
        budget: usize,
        symbols: &[char],
        strategy: &mut S,
        trail: &mut LookupTrail,
    ) -> Frame
    where
        S: BranchStrategy + ?Sized,
    {
        let mark = trail.mark();
        if id != self.root {
            trail.push_node(id, self.edge_tag(id), depth);
        }
        let node = self.arena.get(id);

        let Some(&tag) = symbols.get(idx) else {
            // Input consumed: a hit if a word ends here, then spend what is
            // left of the budget past the boundary.
            if !node.is_end() {
                return Frame::miss(mark);
            }
            trail.push_boundary();
            let pending = if budget > 0 && node.has_children() {
                strategy.branches(&node.child_ids())
            } else {
                Vec::new()
            };
            let next = Next::Extend { depth: depth + 1, budget: budget.saturating_sub(1) };
            return Frame::new(mark, true, pending, next);
        };

        if let Some(child) = node.child(tag) {
            let next = Next::Match { depth: depth + 1, idx: idx + 1, budget };
            return Frame::new(mark, false, vec![child], next);
        }
        if budget == 0 || !node.has_children() {
            return Frame::miss(mark);
        }

        // Substitute `tag` with whatever the strategy picks.
        let pending = strategy.branches(&node.child_ids());
        let next = Next::Match { depth: depth + 1, idx: idx + 1, budget: budget - 1 };
        Frame::new(mark, false, pending, next)
    }

    /// One hop past a matched word. The hop stays in the trail only if it
    /// reaches another word.
    fn enter_extend<S>(
        &self,
        id: NodeId,
        depth: usize,
        budget: usize,
        strategy: &mut S,
        trail: &mut LookupTrail,
    ) -> Frame
    where
        S: BranchStrategy + ?Sized,
    {
        let mark = trail.mark();
        trail.push_node(id, self.edge_tag(id), depth);

        let node = self.arena.get(id);
        let found = node.is_end();
        if found {
            trail.push_boundary();
        }
        let pending = if budget > 0 && node.has_children() {
            strategy.branches(&node.child_ids())
        } else {
            Vec::new()
        };
        let next = Next::Extend { depth: depth + 1, budget: budget.saturating_sub(1) };
        Frame::new(mark, found, pending, next)
    }

    fn edge_tag(&self, id: NodeId) -> char {
        self.arena
            .get(id)
            .tag()
            .expect("only the root lacks a tag")
    }

    /// Sum of `words` below `prefix` (the whole trie for `None`).
    ///
    /// A word is counted on its terminal node's parent, so the prefix itself
    /// is not included: this is the number of stored words that strictly
    /// extend `prefix`. Returns 0 if no stored word starts with `prefix`.
    pub fn total_words(&self, prefix: Option<&str>) -> usize {
        self.sum_below(prefix, TrieNode::words)
    }

    /// Sum of `prefixes` below `prefix` (the whole trie for `None`). For the
    /// whole trie this is the number of edges.
    pub fn total_prefixes(&self, prefix: Option<&str>) -> usize {
        self.sum_below(prefix, TrieNode::prefixes)
    }

    /// Alias of [`Trie::total_prefixes`].
    pub fn total_tags(&self, prefix: Option<&str>) -> usize {
        self.total_prefixes(prefix)
    }

    fn sum_below(&self, prefix: Option<&str>, count: fn(&TrieNode) -> usize) -> usize {
        let start = match prefix {
            Some(prefix) => match self.descend(prefix) {
                Some(id) => id,
                None => return 0,
            },
            None => self.root,
        };

        let mut total = 0;
        let mut stack = vec![start];
        while let Some(id) = stack.pop() {
            let node = self.arena.get(id);
            total += count(node);
            stack.extend(node.children().map(|(_, child)| child));
        }
        total
    }

    /// Symbols on the root's outgoing edges, in order.
    pub fn symbols(&self) -> impl Iterator<Item = char> + '_ {
        self.arena.get(self.root).children().map(|(tag, _)| tag)
    }

    /// Every stored word in lexicographic (`char`) order.
    pub fn words(&self) -> Vec<String> {
        let mut out = Vec::new();
        let mut path: Vec<char> = Vec::new();
        let mut stack: Vec<(NodeId, usize)> = vec![(self.root, 0)];
        while let Some((id, depth)) = stack.pop() {
            let node = self.arena.get(id);
            path.truncate(depth.saturating_sub(1));
            if let Some(tag) = node.tag() {
                path.push(tag);
            }
            if node.is_end() {
                out.push(path.iter().collect());
            }
            let children: Vec<(NodeId, usize)> =
                node.children().map(|(_, child)| (child, depth + 1)).collect();
            stack.extend(children.into_iter().rev());
        }
        out
    }
}

/// How the children queued on a [`Frame`] are visited.
#[derive(Clone, Copy)]
enum Next {
    /// Continue matching at `symbols[idx..]`.
    Match { depth: usize, idx: usize, budget: usize },
    /// Hop past a matched word.
    Extend { depth: usize, budget: usize },
}

/// A node on the tolerant-lookup stack.
struct Frame {
    /// Trail length before this node was recorded.
    mark: usize,
    /// Whether this node or any finished child reached a word.
    found: bool,
    pending: std::vec::IntoIter<NodeId>,
    next: Next,
}

impl Frame {
    fn new(mark: usize, found: bool, pending: Vec<NodeId>, next: Next) -> Self {
        Self {
            mark,
            found,
            pending: pending.into_iter(),
            next,
        }
    }

    /// A node with nothing queued that did not reach a word.
    fn miss(mark: usize) -> Self {
        Self::new(mark, false, Vec::new(), Next::Extend { depth: 0, budget: 0 })
    }
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Trie {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.words()).finish()
    }
}
