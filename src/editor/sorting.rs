//! Ordering of the threshold list.
//!
//! The list is kept descending by value at every commit point. The sort is
//! stable, so equal values keep their relative order, and uses the IEEE total
//! order so NaN values from unparseable input still land somewhere fixed.

use crate::threshold::Threshold;

/// Sorts thresholds descending by value, in place.
pub fn sort_thresholds(thresholds: &mut [Threshold]) {
    thresholds.sort_by(|a, b| b.value.total_cmp(&a.value));
}

/// Returns a sorted copy of the list.
pub fn sorted(thresholds: &[Threshold]) -> Vec<Threshold> {
    let mut out = thresholds.to_vec();
    sort_thresholds(&mut out);
    out
}

/// Returns true if the list is already descending by value.
pub fn is_sorted_descending(thresholds: &[Threshold]) -> bool {
    thresholds
        .windows(2)
        .all(|pair| pair[0].value.total_cmp(&pair[1].value).is_ge())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::threshold::ThresholdId;

    fn t(id: u64, value: f64) -> Threshold {
        Threshold::new(ThresholdId(id), id as usize, value, "red")
    }

    #[test]
    fn test_sort_descending() {
        let list = vec![t(0, f64::NEG_INFINITY), t(1, 20.0), t(2, 80.0), t(3, 50.0)];
        let ids: Vec<u64> = sorted(&list).iter().map(|t| t.id.0).collect();
        assert_eq!(ids, vec![2, 3, 1, 0]);
    }

    #[test]
    fn test_sort_is_stable_for_ties() {
        let list = vec![t(0, 40.0), t(1, 40.0), t(2, 90.0), t(3, 40.0)];
        let ids: Vec<u64> = sorted(&list).iter().map(|t| t.id.0).collect();
        assert_eq!(ids, vec![2, 0, 1, 3]);
    }

    #[test]
    fn test_sort_idempotent() {
        let once = sorted(&[t(0, 5.0), t(1, 15.0), t(2, f64::NEG_INFINITY), t(3, 15.0)]);
        let twice = sorted(&once);
        assert_eq!(once, twice);
        assert!(is_sorted_descending(&twice));
    }

    #[test]
    fn test_sort_places_nan_deterministically() {
        let list = vec![t(0, 10.0), t(1, f64::NAN), t(2, 30.0)];
        let first = sorted(&list);
        let second = sorted(&first);
        let ids: Vec<u64> = first.iter().map(|t| t.id.0).collect();
        let again: Vec<u64> = second.iter().map(|t| t.id.0).collect();
        assert_eq!(ids, again);
        assert!(is_sorted_descending(&first));
    }

    #[test]
    fn test_is_sorted_descending() {
        assert!(is_sorted_descending(&[]));
        assert!(is_sorted_descending(&[t(0, 1.0)]));
        assert!(!is_sorted_descending(&[t(0, 1.0), t(1, 2.0)]));
    }
}
