//! Gauge coloring from committed thresholds.
//!
//! Splits the gauge range into colored segments, one per band that is
//! visible in the range.

use egui::Color32;
use thresholds::color::color_or;
use thresholds::{band_for, Threshold, BASE_COLOR};

/// Fill for threshold colors that do not parse.
const UNKNOWN_FILL: Color32 = Color32::GRAY;

/// A contiguous stretch of the gauge drawn in one color.
#[derive(Debug, Clone, PartialEq)]
pub struct GaugeSegment {
    pub start: f64,
    pub end: f64,
    pub color: Color32,
}

/// Computes the colored segments covering `[min, max]`.
///
/// Any part of the range below every threshold is drawn in the base color.
/// Thresholds with a NaN value are skipped.
pub fn gauge_segments(thresholds: &[Threshold], min: f64, max: f64) -> Vec<GaugeSegment> {
    let mut ascending: Vec<&Threshold> = thresholds.iter().filter(|t| !t.value.is_nan()).collect();
    ascending.sort_by(|a, b| a.value.total_cmp(&b.value));

    let mut segments = Vec::new();
    let mut cursor = min;
    let mut color = color_or(BASE_COLOR, UNKNOWN_FILL);

    for threshold in ascending {
        let start = threshold.value.clamp(min, max);
        if start > cursor {
            segments.push(GaugeSegment {
                start: cursor,
                end: start,
                color,
            });
            cursor = start;
        }
        color = color_or(&threshold.color, UNKNOWN_FILL);
    }

    if max > cursor {
        segments.push(GaugeSegment {
            start: cursor,
            end: max,
            color,
        });
    }
    segments
}

/// Color of the band containing `value`, or the base color below all bands.
pub fn value_color(thresholds: &[Threshold], value: f64) -> Color32 {
    band_for(thresholds, value)
        .map(|t| color_or(&t.color, UNKNOWN_FILL))
        .unwrap_or_else(|| color_or(BASE_COLOR, UNKNOWN_FILL))
}
