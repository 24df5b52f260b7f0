//! Branch selection for tolerant lookup.
//!
//! When tolerant lookup spends a unit of tolerance (a missing edge, or a hop
//! past a word boundary) it asks a [`BranchStrategy`] which children of the
//! current node to explore.
//!
//! [`RandomBranch`] explores exactly one child picked uniformly at random. It is
//! cheap and bounded but not a nearest-match search: a word within the
//! tolerance can be missed if another branch is picked. [`ExhaustiveBranch`]
//! explores every child, turning the walk into a bounded depth-first search.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{RngCore, SeedableRng};

use crate::node::NodeId;

pub trait BranchStrategy {
    /// Pick the children to explore. `children` is non-empty and in symbol order.
    fn branches(&mut self, children: &[NodeId]) -> Vec<NodeId>;
}

/// Explore a single uniformly chosen child.
#[derive(Debug, Clone)]
pub struct RandomBranch<R = StdRng> {
    rng: R,
}

impl<R: RngCore> RandomBranch<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomBranch<StdRng> {
    /// Reproducible choices for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Seeded when `seed` is set, entropy otherwise.
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }
}

impl<R: RngCore> BranchStrategy for RandomBranch<R> {
    fn branches(&mut self, children: &[NodeId]) -> Vec<NodeId> {
        children.choose(&mut self.rng).copied().into_iter().collect()
    }
}

/// Explore every child within the tolerance budget.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExhaustiveBranch;

impl BranchStrategy for ExhaustiveBranch {
    fn branches(&mut self, children: &[NodeId]) -> Vec<NodeId> {
        children.to_vec()
    }
}
