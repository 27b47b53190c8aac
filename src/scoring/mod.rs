//! The scoring pipeline: normalization, composite scoring, classification.
//!
//! `score_dataset` is the single entry point. It is a pure function of the
//! raw dataset and the configuration; scoring the same inputs twice yields
//! identical output, so callers may memoize the result keyed on input
//! identity and recompute only when the raw data or weights change.

pub mod classify;
pub mod composite;
pub mod normalizer;
pub mod stats;

use crate::config::FireriskConfig;
use crate::core::types::{Dataset, ScoredDataset, ScoredRegion};

pub use classify::classify;
pub use composite::composite_score;
pub use normalizer::{sub_scores, NormalizationContext};

/// Score every region in the dataset.
///
/// Two passes: collection statistics first, then the per-region transforms.
/// Input order is preserved.
pub fn score_dataset(dataset: &Dataset, config: &FireriskConfig) -> ScoredDataset {
    let context = NormalizationContext::from_dataset(dataset);

    let regions = dataset
        .iter()
        .map(|record| {
            let scores = sub_scores(record, &context);
            let risk_score = composite_score(&scores, &config.weights);
            ScoredRegion {
                record: record.clone(),
                scores,
                risk_score,
                risk_category: classify(risk_score, &config.thresholds),
            }
        })
        .collect();

    ScoredDataset::new(regions)
}
