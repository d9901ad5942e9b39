//! Threshold data model.
//!
//! A threshold is one color band boundary: everything at or above `value`
//! (and below the next higher threshold) is drawn in `color`.
//!
//! # Examples
//!
//! ```
//! use thresholds::{Threshold, ThresholdId};
//!
//! let base = Threshold::new(ThresholdId(0), 0, f64::NEG_INFINITY, "#7EB26D");
//! assert!(base.is_base());
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Stable identity of a threshold inside one editor.
///
/// `index` and `value` both change under editing, so lookups for removal
/// and recoloring go through this id instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct ThresholdId(pub u64);

impl fmt::Display for ThresholdId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One color band boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Threshold {
    /// Editor-assigned identity, never part of the host's JSON form
    #[serde(skip)]
    pub id: ThresholdId,
    /// Positional rank used for palette lookups on insertion
    pub index: usize,
    /// Lower bound of the band; negative infinity for the base band
    #[serde(with = "value_serde")]
    pub value: f64,
    /// Any color string the color module can parse (hex or named)
    pub color: String,
}

impl Threshold {
    pub fn new(id: ThresholdId, index: usize, value: f64, color: impl Into<String>) -> Self {
        Self {
            id,
            index,
            value,
            color: color.into(),
        }
    }

    /// Returns true for the always-active band below every user cutoff.
    pub fn is_base(&self) -> bool {
        self.value == f64::NEG_INFINITY
    }
}

/// Formats a threshold value the way the editor's text field shows it.
pub fn format_value(value: f64) -> String {
    if value == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else if value == f64::INFINITY {
        "Infinity".to_string()
    } else if value.is_nan() {
        "NaN".to_string()
    } else {
        value.to_string()
    }
}

/// Parses raw text from the value field.
///
/// Nothing is rejected: text that is not a number becomes NaN and flows on
/// into sorting as is.
pub fn parse_value(raw: &str) -> f64 {
    raw.trim().parse::<f64>().unwrap_or(f64::NAN)
}

/// Reads a host threshold list from JSON.
pub fn thresholds_from_json(json: &str) -> Result<Vec<Threshold>, serde_json::Error> {
    serde_json::from_str(json)
}

/// Writes a threshold list as pretty JSON.
pub fn thresholds_to_json(thresholds: &[Threshold]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(thresholds)
}

/// JSON has no infinities: non-finite values go out as `null`, and `null`
/// comes back as negative infinity.
mod value_serde {
    use super::*;

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_finite() {
            serializer.serialize_f64(*value)
        } else {
            serializer.serialize_none()
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NEG_INFINITY))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(format_value(50.0), "50");
        assert_eq!(format_value(12.5), "12.5");
        assert_eq!(format_value(f64::NAN), "NaN");
    }

    #[test]
    fn test_parse_value() {
        assert_eq!(parse_value(" 42 "), 42.0);
        assert_eq!(parse_value("-Infinity"), f64::NEG_INFINITY);
        assert_eq!(parse_value("-inf"), f64::NEG_INFINITY);
        assert!(parse_value("abc").is_nan());
        assert!(parse_value("").is_nan());
    }

    #[test]
    fn test_json_base_value_is_null() {
        let thresholds = vec![
            Threshold::new(ThresholdId(3), 1, 80.0, "#EAB839"),
            Threshold::new(ThresholdId(4), 0, f64::NEG_INFINITY, "#7EB26D"),
        ];
        let json = thresholds_to_json(&thresholds).unwrap();
        assert!(json.contains("null"));
        assert!(!json.contains("\"id\""));

        let parsed = thresholds_from_json(&json).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].value, 80.0);
        assert!(parsed[1].is_base());
        // Ids are not carried in JSON
        assert_eq!(parsed[0].id, ThresholdId::default());
    }

    #[test]
    fn test_json_rejects_missing_color() {
        assert!(thresholds_from_json(r#"[{"index": 0, "value": 1}]"#).is_err());
    }
}
