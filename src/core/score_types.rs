//! Type-safe score scales for the risk scoring system.
//!
//! This module provides newtype wrappers for the score scales used
//! throughout the pipeline. By encoding the scale in the type system, we
//! prevent bugs caused by mixing incompatible scales, and out-of-range
//! sub-scores become unrepresentable.
//!
//! # Score Scales
//!
//! - `Score0To30`: heat stress, drought stress, and fire history sub-scores
//! - `Score0To25`: WUI exposure sub-score
//! - `Score0To100`: composite risk score
//!
//! # Examples
//!
//! ```rust
//! use firerisk::core::score_types::{Score0To30, Score0To100};
//!
//! // Create scores with automatic bounds enforcement
//! let score = Score0To30::new(15.0);
//! assert_eq!(score.value(), 15.0);
//!
//! // Out-of-bounds values are clamped
//! let clamped = Score0To100::new(115.0);
//! assert_eq!(clamped.value(), 100.0);
//! ```

use serde::{Deserialize, Serialize};

/// Sub-score on the 0-30 scale.
///
/// Heat stress, drought stress, and normalized fire history all use this
/// scale. Values are automatically clamped to the [0.0, 30.0] range.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Score0To30(f64);

impl Score0To30 {
    pub const MAX: f64 = 30.0;

    /// Create a new sub-score, clamping to [0.0, 30.0].
    pub fn new(value: f64) -> Self {
        Self(value.clamp(0.0, Self::MAX))
    }

    /// Get the raw score value.
    pub fn value(self) -> f64 {
        self.0
    }
}

/// Sub-score on the 0-25 scale, used for WUI exposure.
///
/// Values are automatically clamped to the [0.0, 25.0] range.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Score0To25(f64);

impl Score0To25 {
    pub const MAX: f64 = 25.0;

    /// Create a new sub-score, clamping to [0.0, 25.0].
    pub fn new(value: f64) -> Self {
        Self(value.clamp(0.0, Self::MAX))
    }

    /// Get the raw score value.
    pub fn value(self) -> f64 {
        self.0
    }
}

/// Composite risk score on the 0-100 scale.
///
/// The weighted sum of sub-score maxima (30+30+30+25) nominally exceeds 100
/// under unit weights; this type resolves the documented range by clamping
/// at construction, so display and classification always see [0.0, 100.0].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Score0To100(f64);

impl Score0To100 {
    pub const MAX: f64 = 100.0;

    /// Create a new composite score, clamping to [0.0, 100.0].
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use firerisk::core::score_types::Score0To100;
    /// let score = Score0To100::new(85.0);
    /// assert_eq!(score.value(), 85.0);
    ///
    /// let clamped = Score0To100::new(115.0);
    /// assert_eq!(clamped.value(), 100.0);
    /// ```
    pub fn new(value: f64) -> Self {
        Self(value.clamp(0.0, Self::MAX))
    }

    /// Get the raw score value.
    pub fn value(self) -> f64 {
        self.0
    }
}

// Implement Display for user-facing output
impl std::fmt::Display for Score0To30 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

impl std::fmt::Display for Score0To25 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

impl std::fmt::Display for Score0To100 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn score_0_to_30_always_in_bounds(value in -1000.0..1000.0f64) {
            let score = Score0To30::new(value);
            assert!(score.value() >= 0.0 && score.value() <= 30.0);
        }

        #[test]
        fn score_0_to_25_always_in_bounds(value in -1000.0..1000.0f64) {
            let score = Score0To25::new(value);
            assert!(score.value() >= 0.0 && score.value() <= 25.0);
        }

        #[test]
        fn score_0_to_100_always_in_bounds(value in -1000.0..1000.0f64) {
            let score = Score0To100::new(value);
            assert!(score.value() >= 0.0 && score.value() <= 100.0);
        }

        #[test]
        fn clamping_preserves_ordering(a in 0.0..100.0f64, b in 0.0..100.0f64) {
            let score_a = Score0To100::new(a);
            let score_b = Score0To100::new(b);

            if a < b {
                assert!(score_a < score_b);
            } else if a > b {
                assert!(score_a > score_b);
            } else {
                assert_eq!(score_a, score_b);
            }
        }
    }
}
