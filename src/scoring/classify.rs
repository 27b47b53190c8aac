//! Classification of composite scores into ordinal risk categories.

use crate::config::RiskThresholds;
use crate::core::score_types::Score0To100;
use crate::core::types::RiskCategory;

/// Map a composite score to its risk category.
///
/// Intervals are closed-open; the exact threshold value belongs to the
/// higher category (a score of exactly 70.0 is Critical, not High).
pub fn classify(score: Score0To100, thresholds: &RiskThresholds) -> RiskCategory {
    let value = score.value();
    if value >= thresholds.critical {
        RiskCategory::Critical
    } else if value >= thresholds.high {
        RiskCategory::High
    } else if value >= thresholds.moderate {
        RiskCategory::Moderate
    } else {
        RiskCategory::Low
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(value: f64) -> RiskCategory {
        classify(Score0To100::new(value), &RiskThresholds::default())
    }

    #[test]
    fn exact_threshold_belongs_to_higher_category() {
        assert_eq!(category(70.0), RiskCategory::Critical);
        assert_eq!(category(55.0), RiskCategory::High);
        assert_eq!(category(40.0), RiskCategory::Moderate);
    }

    #[test]
    fn just_below_threshold_stays_in_lower_category() {
        assert_eq!(category(69.999), RiskCategory::High);
        assert_eq!(category(54.999), RiskCategory::Moderate);
        assert_eq!(category(39.999), RiskCategory::Low);
    }

    #[test]
    fn scale_extremes() {
        assert_eq!(category(0.0), RiskCategory::Low);
        assert_eq!(category(100.0), RiskCategory::Critical);
    }

    #[test]
    fn over_ceiling_scores_still_classify_critical() {
        // Score0To100 clamps 115 -> 100, which is still >= 70
        assert_eq!(category(115.0), RiskCategory::Critical);
    }

    #[test]
    fn custom_thresholds_shift_the_cut_points() {
        let thresholds = RiskThresholds {
            critical: 90.0,
            high: 60.0,
            moderate: 30.0,
        };
        assert_eq!(
            classify(Score0To100::new(70.0), &thresholds),
            RiskCategory::High
        );
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn classification_is_monotonic(a in 0.0..100.0f64, b in 0.0..100.0f64) {
            let thresholds = RiskThresholds::default();
            let cat_a = classify(Score0To100::new(a), &thresholds);
            let cat_b = classify(Score0To100::new(b), &thresholds);
            if a <= b {
                prop_assert!(cat_a <= cat_b);
            }
        }
    }
}
