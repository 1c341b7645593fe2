use serde::{Deserialize, Serialize};

/// Thresholds the tree applies while ingesting and pruning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TreeConfig {
    /// Positions reached with a lower probability are pruned.
    pub min_probability: f64,
    /// Visits a position needs before its running estimate may stop a game
    /// early. `None` records every game in full.
    ///
    /// Turning this on makes the tree depend on corpus order: a game cut
    /// short still counts towards its last position, so continuations
    /// recorded later look rarer than they are and may be pruned.
    pub early_exit_min_visits: Option<u64>,
}

impl Default for TreeConfig {
    fn default() -> Self {
        TreeConfig {
            min_probability: 0.1,
            early_exit_min_visits: None,
        }
    }
}
