//! Aggregate statistics over a scored dataset or filtered view.
//!
//! Backs the headline metrics of the report output: category and trend
//! distributions, total population, and the WUI-weighted population at
//! risk.

use crate::core::types::{RiskCategory, ScoredDataset};
use crate::scoring::normalizer::{WUI_INTERFACE_WEIGHT, WUI_INTERMIX_WEIGHT};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DatasetSummary {
    pub region_count: usize,
    pub category_counts: BTreeMap<RiskCategory, usize>,
    pub trend_counts: BTreeMap<String, usize>,
    pub total_population: u64,
    /// Population weighted by each region's blended WUI fraction, rounded
    /// to the nearest whole person per region before summing.
    pub population_at_risk: u64,
}

impl DatasetSummary {
    pub fn count_for(&self, category: RiskCategory) -> usize {
        self.category_counts.get(&category).copied().unwrap_or(0)
    }
}

/// Summarize a scored dataset (or any filtered view of one).
pub fn summarize(dataset: &ScoredDataset) -> DatasetSummary {
    let mut summary = DatasetSummary {
        region_count: dataset.len(),
        ..Default::default()
    };

    for region in dataset.iter() {
        *summary
            .category_counts
            .entry(region.risk_category)
            .or_insert(0) += 1;
        *summary
            .trend_counts
            .entry(region.record.climate_trend_label.clone())
            .or_insert(0) += 1;
        summary.total_population += region.record.population;

        let wui_fraction = (WUI_INTERFACE_WEIGHT * region.record.wui_interface_pct
            + WUI_INTERMIX_WEIGHT * region.record.wui_intermix_pct)
            / 100.0;
        summary.population_at_risk +=
            (region.record.population as f64 * wui_fraction).round() as u64;
    }

    summary
}
