use serde::{Deserialize, Serialize};

pub const DEFAULT_TOLERANCE: i64 = 10;

/// Contractual schedule the balance engine measures against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceConfig {
    /// Contractual work per day, in **minutes** (480 = 8h).
    pub work_hours: i64,
    /// Symmetric band, in minutes, within which a day counts as on target.
    pub tolerance: i64,
}

impl BalanceConfig {
    pub fn new(work_hours: i64, tolerance: Option<i64>) -> Self {
        Self {
            work_hours,
            tolerance: tolerance.unwrap_or(DEFAULT_TOLERANCE),
        }
    }

    pub fn target_seconds(&self) -> i64 {
        self.work_hours.saturating_mul(60)
    }

    pub fn tolerance_seconds(&self) -> i64 {
        self.tolerance.saturating_mul(60)
    }
}
