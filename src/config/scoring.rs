//! Scoring weights configuration for the composite risk score.
//!
//! The original data pipeline carried its weights as a loosely-typed
//! dictionary; here they are an explicit, validated structure enumerating
//! the four multipliers.

use serde::{Deserialize, Serialize};

/// Multipliers applied to the four sub-scores when forming the composite.
///
/// Each weight is a non-negative real. Under the default unit weights the
/// nominal composite maximum is 115 (30+30+30+25); the composite score type
/// clamps to [0, 100], so anything past the ceiling still classifies as
/// Critical.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    /// Multiplier for the heat stress sub-score.
    #[serde(default = "default_weight")]
    pub heat_weight: f64,

    /// Multiplier for the drought stress sub-score.
    #[serde(default = "default_weight")]
    pub drought_weight: f64,

    /// Multiplier for the fire history sub-score.
    #[serde(default = "default_weight")]
    pub fire_weight: f64,

    /// Multiplier for the WUI exposure sub-score.
    #[serde(default = "default_weight")]
    pub wui_weight: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            heat_weight: default_weight(),
            drought_weight: default_weight(),
            fire_weight: default_weight(),
            wui_weight: default_weight(),
        }
    }
}

fn default_weight() -> f64 {
    1.0
}

impl ScoringWeights {
    // Pure function: check if a weight is a valid non-negative multiplier
    pub fn is_valid_weight(weight: f64) -> bool {
        weight.is_finite() && weight >= 0.0
    }

    // Pure function: validate a single weight with name
    pub fn validate_weight(weight: f64, name: &str) -> Result<(), String> {
        if Self::is_valid_weight(weight) {
            Ok(())
        } else {
            Err(format!(
                "{} must be a non-negative finite number, got {}",
                name, weight
            ))
        }
    }

    /// Validate all four weights.
    pub fn validate(&self) -> Result<(), String> {
        Self::validate_weight(self.heat_weight, "heat_weight")?;
        Self::validate_weight(self.drought_weight, "drought_weight")?;
        Self::validate_weight(self.fire_weight, "fire_weight")?;
        Self::validate_weight(self.wui_weight, "wui_weight")?;
        Ok(())
    }
}
