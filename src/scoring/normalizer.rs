//! Normalization of raw measurements into bounded sub-scores.
//!
//! This is pass 2 of the two-pass algorithm: a [`NormalizationContext`]
//! computed once over the whole collection (pass 1) is applied to each
//! region independently. Every transform is total: extreme or degenerate
//! inputs clamp into the documented range instead of producing undefined
//! output.

use crate::core::score_types::{Score0To25, Score0To30};
use crate::core::types::{Dataset, RegionRecord, SubScores};
use crate::scoring::stats::{z_score, LogRange, SampleStats};

/// Z-scores are clamped to this many standard deviations before rescaling,
/// so z = 0 lands on the midpoint of the sub-score range.
pub const Z_CLAMP: f64 = 3.0;

/// Weight of the interface percentage in the WUI blend.
pub const WUI_INTERFACE_WEIGHT: f64 = 0.4;
/// Weight of the intermix percentage in the WUI blend. Intermix carries
/// more exposure emphasis than interface.
pub const WUI_INTERMIX_WEIGHT: f64 = 0.6;

/// Collection-wide statistics shared by every per-region transform.
///
/// Computed exactly once per dataset; scoring the same region against a
/// different context is a logic error the type system can't catch, so the
/// context is built and consumed inside [`crate::scoring::score_dataset`].
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizationContext {
    temperature: SampleStats,
    precipitation: SampleStats,
    fire_log_range: LogRange,
}

impl NormalizationContext {
    /// Pass 1: compute mean/standard deviation and the logged fire-count
    /// range over the full collection.
    pub fn from_dataset(dataset: &Dataset) -> Self {
        let temperatures: Vec<f64> = dataset.iter().map(|r| r.temperature_anomaly).collect();
        let deficits: Vec<f64> = dataset.iter().map(|r| r.precipitation_deficit).collect();

        Self {
            temperature: SampleStats::from_values(&temperatures),
            precipitation: SampleStats::from_values(&deficits),
            fire_log_range: LogRange::from_counts(dataset.iter().map(|r| r.fire_event_count)),
        }
    }
}

/// Map a z-score into [0, 30], clamping at +/- [`Z_CLAMP`] deviations.
fn z_to_score(z: f64) -> Score0To30 {
    let clamped = z.clamp(-Z_CLAMP, Z_CLAMP);
    Score0To30::new((clamped + Z_CLAMP) / (2.0 * Z_CLAMP) * Score0To30::MAX)
}

/// Heat stress: standardized temperature anomaly rescaled into [0, 30].
/// Higher anomaly means higher stress; a degenerate collection scores the
/// midpoint (15.0).
pub fn heat_stress(region: &RegionRecord, context: &NormalizationContext) -> Score0To30 {
    z_to_score(z_score(region.temperature_anomaly, &context.temperature))
}

/// Drought stress: standardized precipitation deficit rescaled into [0, 30].
/// Greater deficit means higher stress.
pub fn drought_stress(region: &RegionRecord, context: &NormalizationContext) -> Score0To30 {
    z_to_score(z_score(region.precipitation_deficit, &context.precipitation))
}

/// Fire history: ln(count + 1) rescaled by the collection's logged range
/// into [0, 30]. All regions tie at 0.0 when the range is degenerate.
pub fn fire_history_norm(region: &RegionRecord, context: &NormalizationContext) -> Score0To30 {
    Score0To30::new(context.fire_log_range.position(region.fire_event_count) * Score0To30::MAX)
}

/// WUI exposure: weighted blend of interface and intermix percentages
/// rescaled from [0, 100] into [0, 25]. Independent of collection
/// statistics, so it takes no context.
pub fn wui_exposure(region: &RegionRecord) -> Score0To25 {
    let blended = WUI_INTERFACE_WEIGHT * region.wui_interface_pct
        + WUI_INTERMIX_WEIGHT * region.wui_intermix_pct;
    Score0To25::new(blended / 100.0 * Score0To25::MAX)
}

/// Compute all four sub-scores for one region.
pub fn sub_scores(region: &RegionRecord, context: &NormalizationContext) -> SubScores {
    SubScores {
        heat_stress: heat_stress(region, context),
        drought_stress: drought_stress(region, context),
        fire_history_norm: fire_history_norm(region, context),
        wui_exposure: wui_exposure(region),
    }
}
