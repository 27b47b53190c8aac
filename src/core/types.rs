//! Core domain types for the risk scoring pipeline.
//!
//! A [`Dataset`] is an ordered collection of raw [`RegionRecord`]s sharing
//! one normalization context. Scoring turns it into a [`ScoredDataset`] of
//! [`ScoredRegion`]s, which is read-only for the rest of the session:
//! filtering produces a new `ScoredDataset`, never a mutation.

use crate::core::score_types::{Score0To100, Score0To25, Score0To30};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Raw per-region measurements, one record per county.
///
/// `region_id` is the stable join key (FIPS code); `name` follows the
/// uppercase county-name convention of the source data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionRecord {
    pub region_id: String,
    pub name: String,
    /// Temperature anomaly relative to climate normals, any real value.
    pub temperature_anomaly: f64,
    /// Precipitation deficit; larger values mean drier conditions.
    pub precipitation_deficit: f64,
    pub fire_event_count: u32,
    /// Percentage of developed land in the wildland-urban interface, [0,100].
    pub wui_interface_pct: f64,
    /// Percentage of developed land in wildland intermix, [0,100].
    pub wui_intermix_pct: f64,
    pub population: u64,
    /// Open categorical vocabulary, e.g. "Warming & Drying", "Stable".
    pub climate_trend_label: String,
}

/// The four bounded sub-scores produced by the normalizer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SubScores {
    pub heat_stress: Score0To30,
    pub drought_stress: Score0To30,
    pub fire_history_norm: Score0To30,
    pub wui_exposure: Score0To25,
}

/// A region with its derived sub-scores, composite score, and category.
///
/// Every derived field is a pure function of the raw record, the
/// collection-wide normalization context, and the weight configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredRegion {
    pub record: RegionRecord,
    pub scores: SubScores,
    pub risk_score: Score0To100,
    pub risk_category: RiskCategory,
}

/// Ordinal risk classification derived from thresholding the composite
/// score. Variants are declared in ascending order so the derived `Ord`
/// matches severity.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum RiskCategory {
    Low,
    Moderate,
    High,
    Critical,
}

impl RiskCategory {
    /// Get the category label for display.
    pub fn label(&self) -> &'static str {
        match self {
            RiskCategory::Critical => "Critical",
            RiskCategory::High => "High",
            RiskCategory::Moderate => "Moderate",
            RiskCategory::Low => "Low",
        }
    }

    /// All categories in descending severity order.
    pub fn all() -> [RiskCategory; 4] {
        [
            RiskCategory::Critical,
            RiskCategory::High,
            RiskCategory::Moderate,
            RiskCategory::Low,
        ]
    }
}

impl std::fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for RiskCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "critical" => Ok(RiskCategory::Critical),
            "high" => Ok(RiskCategory::High),
            "moderate" => Ok(RiskCategory::Moderate),
            "low" => Ok(RiskCategory::Low),
            other => Err(format!(
                "unknown risk category '{}' (expected critical, high, moderate, or low)",
                other
            )),
        }
    }
}

/// Ordered collection of raw region records, constructed once at load time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    regions: Vec<RegionRecord>,
}

impl Dataset {
    pub fn new(regions: Vec<RegionRecord>) -> Self {
        Self { regions }
    }

    pub fn regions(&self) -> &[RegionRecord] {
        &self.regions
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RegionRecord> {
        self.regions.iter()
    }
}

/// Ordered collection of scored regions. Read-only after scoring; filter
/// selections produce a fresh `ScoredDataset` from the full collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredDataset {
    regions: Vec<ScoredRegion>,
}

impl ScoredDataset {
    pub fn new(regions: Vec<ScoredRegion>) -> Self {
        Self { regions }
    }

    pub fn regions(&self) -> &[ScoredRegion] {
        &self.regions
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ScoredRegion> {
        self.regions.iter()
    }
}
