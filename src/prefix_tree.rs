//! Set-of-strings façade over [`Trie`].
//!
//! A value is both the key and the stored word. `get` is multi-valued: it
//! returns every whole word reached by a tolerant lookup.

use crate::config::Config;
use crate::error::{Result, TrieError};
use crate::strategy::{BranchStrategy, RandomBranch};
use crate::trie::{DeleteOutcome, Trie};

pub struct PrefixTree<S = RandomBranch> {
    trie: Trie,
    strategy: S,
    config: Config,
}

impl PrefixTree<RandomBranch> {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Random branch selection, seeded from `config.seed`.
    pub fn with_config(config: Config) -> Self {
        let strategy = RandomBranch::from_seed(config.seed);
        Self::with_strategy(config, strategy)
    }
}

impl<S: BranchStrategy> PrefixTree<S> {
    pub fn with_strategy(config: Config, strategy: S) -> Self {
        Self {
            trie: Trie::with_capacity(config.initial_capacity),
            strategy,
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The underlying trie, for counters and node inspection.
    pub fn trie(&self) -> &Trie {
        &self.trie
    }

    pub fn contains(&self, value: &str) -> bool {
        self.trie.find(value)
    }

    /// Whole words matching `value` within the configured default tolerance.
    ///
    /// Empty on a miss. Advances the random source, hence `&mut self`.
    pub fn get(&mut self, value: &str) -> Vec<String> {
        self.get_with_tolerance(value, self.config.default_tolerance)
    }

    pub fn get_with_tolerance(&mut self, value: &str, tolerance: usize) -> Vec<String> {
        self.trie
            .lookup(value, tolerance, &mut self.strategy)
            .words()
    }

    /// Tolerant membership test.
    pub fn contains_within(&mut self, value: &str, tolerance: usize) -> bool {
        self.trie.find_tolerant(value, tolerance, &mut self.strategy)
    }

    /// Store `value`. Returns `false` if it was already stored.
    pub fn set(&mut self, value: &str) -> Result<bool> {
        self.trie.insert(value)
    }

    pub fn delete(&mut self, value: &str) -> DeleteOutcome {
        self.trie.delete(value)
    }

    /// Like [`PrefixTree::delete`], but a missing value is an error.
    pub fn remove(&mut self, value: &str) -> Result<DeleteOutcome> {
        match self.trie.delete(value) {
            DeleteOutcome::NotFound => Err(TrieError::not_found(format!("{value:?}"))),
            outcome => Ok(outcome),
        }
    }

    /// Symbols on the root's outgoing edges. Not a word enumeration; see
    /// [`PrefixTree::words`].
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.trie.symbols()
    }

    pub fn words(&self) -> Vec<String> {
        self.trie.words()
    }

    /// Number of stored words.
    pub fn len(&self) -> usize {
        self.trie.total_words(None)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn total_words(&self, prefix: Option<&str>) -> usize {
        self.trie.total_words(prefix)
    }

    pub fn total_prefixes(&self, prefix: Option<&str>) -> usize {
        self.trie.total_prefixes(prefix)
    }

    pub fn tags_created(&self) -> usize {
        self.trie.tags_created()
    }
}

impl Default for PrefixTree<RandomBranch> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> std::fmt::Debug for PrefixTree<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrefixTree")
            .field("words", &self.trie)
            .field("config", &self.config)
            .finish()
    }
}
