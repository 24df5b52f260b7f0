//! Lock-guarded [`PrefixTree`] for use across threads.

use parking_lot::RwLock;

use crate::config::Config;
use crate::error::Result;
use crate::prefix_tree::PrefixTree;
use crate::strategy::{BranchStrategy, RandomBranch};
use crate::trie::DeleteOutcome;

/// A [`PrefixTree`] behind a reader-writer lock.
///
/// Exact queries take the read lock. `get` takes the write lock because it
/// advances the tree's random source.
pub struct SharedPrefixTree<S = RandomBranch> {
    inner: RwLock<PrefixTree<S>>,
}

impl SharedPrefixTree<RandomBranch> {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        Self::from_tree(PrefixTree::with_config(config))
    }
}

impl<S: BranchStrategy> SharedPrefixTree<S> {
    pub fn from_tree(tree: PrefixTree<S>) -> Self {
        Self {
            inner: RwLock::new(tree),
        }
    }

    pub fn into_inner(self) -> PrefixTree<S> {
        self.inner.into_inner()
    }

    pub fn contains(&self, value: &str) -> bool {
        self.inner.read().contains(value)
    }

    pub fn get(&self, value: &str) -> Vec<String> {
        self.inner.write().get(value)
    }

    pub fn get_with_tolerance(&self, value: &str, tolerance: usize) -> Vec<String> {
        self.inner.write().get_with_tolerance(value, tolerance)
    }

    pub fn set(&self, value: &str) -> Result<bool> {
        self.inner.write().set(value)
    }

    pub fn delete(&self, value: &str) -> DeleteOutcome {
        self.inner.write().delete(value)
    }

    /// Root edge symbols, collected under the read lock.
    pub fn symbols(&self) -> Vec<char> {
        self.inner.read().iter().collect()
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for SharedPrefixTree<RandomBranch> {
    fn default() -> Self {
        Self::new()
    }
}
