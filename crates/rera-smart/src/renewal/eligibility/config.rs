use serde::{Deserialize, Serialize};

/// Tunable thresholds for the notice window checks.
///
/// The increase schedule itself is statutory and not configurable; only the
/// notice floor and the close-call margin vary by deployment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Days of notice the law requires before lease expiry.
    pub minimum_notice_days: i64,
    /// Valid notices under this margin still get flagged as cutting it close.
    pub tight_notice_days: i64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            minimum_notice_days: 90,
            tight_notice_days: 95,
        }
    }
}
