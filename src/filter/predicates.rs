//! Pure predicate functions for filtering scored regions.
//!
//! Each predicate is a pure function over one filter dimension. An empty
//! selection for a dimension means "no filtering on that dimension"
//! (pass-through), never "exclude all".

use crate::core::types::{RiskCategory, ScoredRegion};
use std::collections::BTreeSet;

/// Check if the region's category is among the selected categories.
/// An empty selection passes everything.
#[inline]
pub fn matches_category(region: &ScoredRegion, categories: &BTreeSet<RiskCategory>) -> bool {
    categories.is_empty() || categories.contains(&region.risk_category)
}

/// Check if the region's climate trend label is among the selected labels.
/// An empty selection passes everything. Labels compare exactly.
#[inline]
pub fn matches_trend(region: &ScoredRegion, trends: &BTreeSet<String>) -> bool {
    trends.is_empty() || trends.contains(&region.record.climate_trend_label)
}

/// Check if the region's population falls within the inclusive range.
/// `None` bounds pass everything on that side.
#[inline]
pub fn within_population(region: &ScoredRegion, min: Option<u64>, max: Option<u64>) -> bool {
    let population = region.record.population;
    min.is_none_or(|m| population >= m) && max.is_none_or(|m| population <= m)
}
