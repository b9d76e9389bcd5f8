use std::collections::HashMap;

/// Rank given to chains the table does not know
pub const UNKNOWN_RANK: i32 = -99;

/// Display priority per chain. Higher ranks are shown first.
#[derive(Debug, Clone, PartialEq)]
pub struct PriorityTable {
    ranks: HashMap<String, i32>,
    default_rank: i32,
}

impl PriorityTable {
    /// Empty table; every chain gets [`UNKNOWN_RANK`]
    pub fn new() -> Self {
        Self {
            ranks: HashMap::new(),
            default_rank: UNKNOWN_RANK,
        }
    }

    /// Set the rank of a chain
    pub fn with_rank(mut self, chain: impl Into<String>, rank: i32) -> Self {
        self.ranks.insert(chain.into(), rank);
        self
    }

    /// Rank of a chain, falling back to the default rank
    pub fn priority(&self, chain: &str) -> i32 {
        self.ranks.get(chain).copied().unwrap_or(self.default_rank)
    }

    /// Whether the chain ranks above the unknown sentinel
    pub fn is_known(&self, chain: &str) -> bool {
        self.priority(chain) > UNKNOWN_RANK
    }
}

impl Default for PriorityTable {
    fn default() -> Self {
        Self::new()
            .with_rank("Osmosis", 100)
            .with_rank("Ethereum", 50)
            .with_rank("Arbitrum", 30)
            .with_rank("Zilliqa", 20)
            .with_rank("Neo", 20)
    }
}
