//! Band lookup: which threshold colors a given reading.

use crate::threshold::Threshold;

/// Returns the threshold whose band contains `value`.
///
/// That is the threshold with the greatest cutoff at or below `value`. The
/// list order does not matter. Thresholds whose value is NaN never match.
/// Returns `None` when `value` is below every cutoff.
pub fn band_for(thresholds: &[Threshold], value: f64) -> Option<&Threshold> {
    thresholds
        .iter()
        .filter(|t| t.value <= value)
        .max_by(|a, b| a.value.total_cmp(&b.value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::threshold::ThresholdId;

    fn sample() -> Vec<Threshold> {
        vec![
            Threshold::new(ThresholdId(2), 2, 80.0, "red"),
            Threshold::new(ThresholdId(1), 1, 50.0, "yellow"),
            Threshold::new(ThresholdId(0), 0, f64::NEG_INFINITY, "green"),
        ]
    }

    #[test]
    fn test_band_lookup() {
        let thresholds = sample();
        assert_eq!(band_for(&thresholds, 10.0).map(|t| t.color.as_str()), Some("green"));
        assert_eq!(band_for(&thresholds, 50.0).map(|t| t.color.as_str()), Some("yellow"));
        assert_eq!(band_for(&thresholds, 79.9).map(|t| t.color.as_str()), Some("yellow"));
        assert_eq!(band_for(&thresholds, 1000.0).map(|t| t.color.as_str()), Some("red"));
    }

    #[test]
    fn test_band_lookup_below_all() {
        let thresholds = vec![Threshold::new(ThresholdId(0), 1, 20.0, "red")];
        assert!(band_for(&thresholds, 5.0).is_none());
        assert!(band_for(&[], 5.0).is_none());
    }

    #[test]
    fn test_band_lookup_ignores_nan() {
        let mut thresholds = sample();
        thresholds[1].value = f64::NAN;
        assert_eq!(band_for(&thresholds, 60.0).map(|t| t.color.as_str()), Some("green"));
    }
}
