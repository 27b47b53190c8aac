//! Configuration for scoring weights and classification thresholds.
//!
//! Loaded from `.firerisk.toml`, with every field optional and defaulted.
//! Weight overrides from the CLI are applied on top of whatever was loaded.

pub mod loader;
pub mod scoring;
pub mod thresholds;

use serde::{Deserialize, Serialize};

pub use loader::{load_config, load_config_from, parse_and_validate_config, CONFIG_FILE_NAME};
pub use scoring::ScoringWeights;
pub use thresholds::RiskThresholds;

/// Top-level configuration structure mirroring `.firerisk.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FireriskConfig {
    #[serde(default)]
    pub weights: ScoringWeights,

    #[serde(default)]
    pub thresholds: RiskThresholds,
}
