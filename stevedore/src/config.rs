use serde::{Deserialize, Serialize};

/// Configuration for the stevedore driver
#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
#[serde(default)]
pub struct StevedoreConfig {
    /// Abort the run on the first invalid item. If false, the item is logged, tallied and skipped
    pub halt_on_invalid: bool,
    /// Audit the containers after the run and report admitted items they deny holding
    pub reveal_misplaced: bool,
}

impl Default for StevedoreConfig {
    fn default() -> Self {
        Self {
            halt_on_invalid: false,
            reveal_misplaced: true,
        }
    }
}
