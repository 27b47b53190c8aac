//! Collection-wide statistics for normalization.
//!
//! Pass 1 of the two-pass scoring algorithm: compute mean/standard deviation
//! and the logged fire-count range over the whole collection before any
//! per-region transform runs. Degenerate collections (size <= 1, constant
//! columns) get defined fallbacks instead of division errors.

/// Mean and population standard deviation of a sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleStats {
    pub mean: f64,
    pub std_dev: f64,
}

impl SampleStats {
    /// Compute mean and population standard deviation.
    ///
    /// An empty sample yields zero mean and zero deviation; callers rely on
    /// [`z_score`] to treat a zero deviation as "no signal".
    pub fn from_values(values: &[f64]) -> Self {
        if values.is_empty() {
            return Self {
                mean: 0.0,
                std_dev: 0.0,
            };
        }

        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;

        Self {
            mean,
            std_dev: variance.sqrt(),
        }
    }
}

/// Standardize a value against sample statistics.
///
/// A zero (or non-finite) standard deviation means the collection carries no
/// spread for this indicator; the z-score falls back to 0.0 so a size-1
/// collection scores at the midpoint rather than failing.
pub fn z_score(value: f64, stats: &SampleStats) -> f64 {
    if stats.std_dev <= f64::EPSILON || !stats.std_dev.is_finite() {
        return 0.0;
    }
    (value - stats.mean) / stats.std_dev
}

/// Range of log-transformed fire counts across the collection.
///
/// Counts go through ln(count + 1) so zero counts are admitted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogRange {
    min: f64,
    max: f64,
}

impl LogRange {
    /// Compute the logged range over raw event counts.
    pub fn from_counts<I: IntoIterator<Item = u32>>(counts: I) -> Self {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for count in counts {
            let logged = log1p_count(count);
            min = min.min(logged);
            max = max.max(logged);
        }
        if min > max {
            // Empty collection
            return Self { min: 0.0, max: 0.0 };
        }
        Self { min, max }
    }

    /// Position of a count within the logged range, in [0.0, 1.0].
    ///
    /// A degenerate range (all counts equal) positions every region at 0.0:
    /// a constant column carries no ranking signal, so all regions tie.
    pub fn position(&self, count: u32) -> f64 {
        let span = self.max - self.min;
        if span <= f64::EPSILON {
            return 0.0;
        }
        ((log1p_count(count) - self.min) / span).clamp(0.0, 1.0)
    }
}

fn log1p_count(count: u32) -> f64 {
    (f64::from(count) + 1.0).ln()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_of_known_sample() {
        let stats = SampleStats::from_values(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
        assert_eq!(stats.mean, 5.0);
        assert_eq!(stats.std_dev, 2.0);
    }

    #[test]
    fn empty_sample_is_degenerate() {
        let stats = SampleStats::from_values(&[]);
        assert_eq!(stats.mean, 0.0);
        assert_eq!(stats.std_dev, 0.0);
    }

    #[test]
    fn z_score_standardizes_against_mean() {
        let stats = SampleStats {
            mean: 10.0,
            std_dev: 2.0,
        };
        assert_eq!(z_score(14.0, &stats), 2.0);
        assert_eq!(z_score(10.0, &stats), 0.0);
        assert_eq!(z_score(6.0, &stats), -2.0);
    }

    #[test]
    fn z_score_falls_back_to_zero_for_single_region() {
        // Collection of size 1 has zero standard deviation
        let stats = SampleStats::from_values(&[3.5]);
        assert_eq!(stats.std_dev, 0.0);
        assert_eq!(z_score(3.5, &stats), 0.0);
    }

    #[test]
    fn log_range_admits_zero_counts() {
        let range = LogRange::from_counts([0, 3, 20]);
        assert_eq!(range.position(0), 0.0);
        assert_eq!(range.position(20), 1.0);
        let mid = range.position(3);
        assert!(mid > 0.0 && mid < 1.0);
    }

    #[test]
    fn log_range_all_zero_counts_tie() {
        let range = LogRange::from_counts([0, 0, 0]);
        assert_eq!(range.position(0), 0.0);
    }

    #[test]
    fn log_range_constant_nonzero_counts_tie() {
        let range = LogRange::from_counts([5, 5, 5]);
        assert_eq!(range.position(5), 0.0);
    }

    #[test]
    fn log_range_position_is_monotonic() {
        let range = LogRange::from_counts([0, 100]);
        let mut last = -1.0;
        for count in [0u32, 1, 5, 20, 50, 100] {
            let pos = range.position(count);
            assert!(pos > last);
            last = pos;
        }
    }
}
