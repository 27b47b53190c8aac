//! Filter engine: user-selected predicates over the scored dataset.
//!
//! A filter selection is a conjunction of per-dimension predicates. The
//! result is always recomputed from the full scored dataset, never patched
//! incrementally; dataset sizes are small and correctness wins. The filtered
//! result is itself a [`ScoredDataset`], so summary, export, and output all
//! work on views unchanged.

pub mod predicates;

use crate::core::types::{RiskCategory, ScoredDataset, ScoredRegion};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

pub use predicates::{matches_category, matches_trend, within_population};

/// Active filter predicates. Empty selections pass their dimension through.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub categories: BTreeSet<RiskCategory>,
    pub trends: BTreeSet<String>,
    pub min_population: Option<u64>,
    pub max_population: Option<u64>,
}

impl FilterCriteria {
    /// True when no dimension filters anything.
    pub fn is_unfiltered(&self) -> bool {
        self.categories.is_empty()
            && self.trends.is_empty()
            && self.min_population.is_none()
            && self.max_population.is_none()
    }

    /// An inverted population range (min > max) normalizes to the empty
    /// view rather than an error.
    pub fn is_empty_range(&self) -> bool {
        matches!(
            (self.min_population, self.max_population),
            (Some(min), Some(max)) if min > max
        )
    }

    fn accepts(&self, region: &ScoredRegion) -> bool {
        matches_category(region, &self.categories)
            && matches_trend(region, &self.trends)
            && within_population(region, self.min_population, self.max_population)
    }
}

/// Lazy, restartable view over the scored dataset.
pub fn view<'a>(
    dataset: &'a ScoredDataset,
    criteria: &'a FilterCriteria,
) -> impl Iterator<Item = &'a ScoredRegion> + 'a {
    let empty_range = criteria.is_empty_range();
    dataset
        .iter()
        .filter(move |region| !empty_range && criteria.accepts(region))
}

/// Materialize the filtered view as a new read-only dataset, preserving the
/// order of the underlying collection.
pub fn apply(dataset: &ScoredDataset, criteria: &FilterCriteria) -> ScoredDataset {
    ScoredDataset::new(view(dataset, criteria).cloned().collect())
}

/// Counts of how a filter selection partitioned the dataset, for logging.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterStatistics {
    pub total_regions: usize,
    pub retained: usize,
}

impl FilterStatistics {
    pub fn from_result(dataset: &ScoredDataset, filtered: &ScoredDataset) -> Self {
        Self {
            total_regions: dataset.len(),
            retained: filtered.len(),
        }
    }

    pub fn excluded(&self) -> usize {
        self.total_regions - self.retained
    }
}
