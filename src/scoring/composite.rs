//! Composite scorer: weighted linear combination of the four sub-scores.

use crate::config::ScoringWeights;
use crate::core::score_types::Score0To100;
use crate::core::types::SubScores;

/// Combine sub-scores into a single risk score.
///
/// `risk = heat*w1 + drought*w2 + fire*w3 + wui*w4`, clamped to [0, 100]
/// by the score type. Purely functional: nothing is mutated.
pub fn composite_score(scores: &SubScores, weights: &ScoringWeights) -> Score0To100 {
    let weighted = scores.heat_stress.value() * weights.heat_weight
        + scores.drought_stress.value() * weights.drought_weight
        + scores.fire_history_norm.value() * weights.fire_weight
        + scores.wui_exposure.value() * weights.wui_weight;
    Score0To100::new(weighted)
}
