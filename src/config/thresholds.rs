//! Classification thresholds for the ordinal risk categories.

use serde::{Deserialize, Serialize};

/// Cut points between the four risk categories, on the 0-100 composite
/// scale. Intervals are closed-open with the exact threshold belonging to
/// the higher category: `[critical, 100]` Critical, `[high, critical)`
/// High, `[moderate, high)` Moderate, `[0, moderate)` Low.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskThresholds {
    /// Scores at or above this value classify as Critical.
    #[serde(default = "default_critical")]
    pub critical: f64,

    /// Scores at or above this value (below critical) classify as High.
    #[serde(default = "default_high")]
    pub high: f64,

    /// Scores at or above this value (below high) classify as Moderate.
    #[serde(default = "default_moderate")]
    pub moderate: f64,
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self {
            critical: default_critical(),
            high: default_high(),
            moderate: default_moderate(),
        }
    }
}

fn default_critical() -> f64 {
    70.0
}

fn default_high() -> f64 {
    55.0
}

fn default_moderate() -> f64 {
    40.0
}

impl RiskThresholds {
    /// Validate strict ordering: 0 <= moderate < high < critical <= 100.
    pub fn validate(&self) -> Result<(), String> {
        for (value, name) in [
            (self.critical, "critical"),
            (self.high, "high"),
            (self.moderate, "moderate"),
        ] {
            if !value.is_finite() || !(0.0..=100.0).contains(&value) {
                return Err(format!(
                    "{} threshold must be within [0, 100], got {}",
                    name, value
                ));
            }
        }
        if !(self.moderate < self.high && self.high < self.critical) {
            return Err(format!(
                "thresholds must satisfy moderate < high < critical, got {} / {} / {}",
                self.moderate, self.high, self.critical
            ));
        }
        Ok(())
    }
}
