//! # fuzzy-trie
//!
//! A character trie with per-node word/prefix accounting and a
//! tolerance-bounded fuzzy lookup.
//!
//! Tolerant lookup follows the query symbol by symbol. A missing edge spends
//! one unit of tolerance and continues below a branch picked by a
//! [`BranchStrategy`]; a match with budget left over explores past the word
//! boundary. The default [`RandomBranch`] strategy follows a single seeded
//! random branch, so results are best-effort rather than nearest-match.
//! [`ExhaustiveBranch`] explores every branch within the budget.
//!
//! ## Example
//!
//! ```rust
//! use fuzzy_trie::{Config, DeleteOutcome, PrefixTree};
//!
//! let mut tree = PrefixTree::with_config(Config::seeded(7));
//! for name in ["amy", "ann", "anne", "emma", "rob", "roger", "anna"] {
//!     tree.set(name).unwrap();
//! }
//!
//! assert_eq!(tree.len(), 7);
//! assert!(!tree.contains("ani"));
//! assert_eq!(tree.get("ani"), vec!["ann".to_string()]);
//!
//! assert_eq!(tree.delete("ann"), DeleteOutcome::ValueCleared);
//! assert!(tree.contains("anne"));
//! ```

pub mod arena;
pub mod config;
pub mod error;
pub mod lookup;
pub mod node;
pub mod prefix_tree;
pub mod shared;
pub mod strategy;
pub mod trie;

pub use config::Config;
pub use error::{Result, TrieError};
pub use lookup::{LookupTrail, Visit, SEPARATOR};
pub use node::{NodeId, TrieNode};
pub use prefix_tree::PrefixTree;
pub use shared::SharedPrefixTree;
pub use strategy::{BranchStrategy, ExhaustiveBranch, RandomBranch};
pub use trie::{DeleteOutcome, Trie};

#[cfg(test)]
pub(crate) fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[cfg(test)]
mod proptests;
