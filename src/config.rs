/// Configuration for a [`PrefixTree`](crate::PrefixTree).
#[derive(Debug, Clone)]
pub struct Config {
    /// Number of node slots reserved up front
    pub initial_capacity: usize,
    /// Tolerance used by [`PrefixTree::get`](crate::PrefixTree::get)
    pub default_tolerance: usize,
    /// Seed for random branch selection (`None` draws from OS entropy)
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial_capacity: 64,
            default_tolerance: 1,
            seed: None,
        }
    }
}

impl Config {
    /// Default configuration with a fixed seed, for reproducible lookups.
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }
}
