//! Body and Garment Measurements
//!
//! The measurement record shared by both sides of a fit comparison (the
//! shopper's body and the garment laid flat), plus the tolerant numeric
//! coercion used when values arrive as loosely-typed JSON from a shop host.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body or garment dimensions in centimeters.
///
/// The same record describes both sides of a comparison. A value of 0 means
/// "not provided"; the hip is optional because many size charts omit it
/// entirely. Records built through [`Measurements::from_json`] are already
/// clean; hand-built records are normalized again inside the fit calculator,
/// so callers never have to pre-validate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Measurements {
    /// Shoulder width
    pub shoulders: f64,

    /// Chest contour
    pub chest: f64,

    /// Waist contour
    pub waist: f64,

    /// Hip contour; absent on most tops and many size charts
    pub hip: Option<f64>,

    /// Torso length (nape to hem)
    pub torso_length: f64,

    /// Inner leg length
    pub leg_length: f64,

    /// Foot length (footwear only)
    pub foot_length: f64,
}

impl Measurements {
    /// Build a record from loosely-typed host JSON.
    ///
    /// Missing keys, nulls, non-numeric strings and negative values all
    /// coerce to 0 (hip to `None`), so any JSON object produces a usable
    /// record.
    pub fn from_json(value: &Value) -> Self {
        let field = |key: &str| value.get(key).map(coerce_f64).unwrap_or(0.0);

        Measurements {
            shoulders: field("shoulders"),
            chest: field("chest"),
            waist: field("waist"),
            hip: value.get("hip").map(coerce_f64).filter(|v| *v > 0.0),
            torso_length: field("torso_length"),
            leg_length: field("leg_length"),
            foot_length: field("foot_length"),
        }
    }

    /// Copy with every value forced back into the measurement domain:
    /// non-finite and negative values collapse to 0, and a non-positive hip
    /// reads as absent.
    pub fn sanitized(&self) -> Self {
        Measurements {
            shoulders: sanitize_cm(self.shoulders),
            chest: sanitize_cm(self.chest),
            waist: sanitize_cm(self.waist),
            hip: self.hip.map(sanitize_cm).filter(|v| *v > 0.0),
            torso_length: sanitize_cm(self.torso_length),
            leg_length: sanitize_cm(self.leg_length),
            foot_length: sanitize_cm(self.foot_length),
        }
    }
}

// ============================================================================
// Numeric Coercion
// ============================================================================

/// Clamp a raw value into the measurement domain.
/// Negative, NaN and infinite values all read as "not provided".
fn sanitize_cm(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Extract a non-negative number from a loosely-typed JSON field.
///
/// Accepts JSON numbers and number-like strings with either decimal
/// separator ("82.5" and "82,5" both parse). Anything else coerces to 0,
/// so a malformed size chart degrades the advice instead of breaking it.
/// Used for centimeter fields and for the elasticity percentage.
pub fn coerce_f64(value: &Value) -> f64 {
    let parsed = value.as_f64().or_else(|| {
        value
            .as_str()
            .and_then(|s| s.trim().replace(',', ".").parse::<f64>().ok())
    });
    sanitize_cm(parsed.unwrap_or(0.0))
}

/// Round to 2 decimal places, ties away from zero.
///
/// Scales by 100 and uses `f64::round`, so exact binary halves move away
/// from zero (0.125 -> 0.13, -0.125 -> -0.13). Decimal literals with no
/// exact binary form sit just below the half and round down (1.005 is
/// stored as 1.00499.., giving 1.0).
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json_numbers_and_strings() {
        let m = Measurements::from_json(&json!({
            "shoulders": 44,
            "chest": "96.5",
            "waist": "82,5",
            "hip": 98.0,
            "torso_length": 66
        }));
        assert_eq!(m.shoulders, 44.0);
        assert_eq!(m.chest, 96.5);
        assert_eq!(m.waist, 82.5); // comma decimal separator
        assert_eq!(m.hip, Some(98.0));
        assert_eq!(m.torso_length, 66.0);
        assert_eq!(m.leg_length, 0.0); // missing key
    }

    #[test]
    fn test_from_json_garbage_coerces_to_zero() {
        let m = Measurements::from_json(&json!({
            "shoulders": "wide",
            "chest": null,
            "waist": -82.0,
            "hip": "n/a",
            "foot_length": [27.0]
        }));
        assert_eq!(m.shoulders, 0.0);
        assert_eq!(m.chest, 0.0);
        assert_eq!(m.waist, 0.0); // negative clamps to 0
        assert_eq!(m.hip, None); // coerced 0 reads as absent
        assert_eq!(m.foot_length, 0.0);
    }

    #[test]
    fn test_from_json_non_object() {
        let m = Measurements::from_json(&json!("not an object"));
        assert_eq!(m, Measurements::default());
    }

    #[test]
    fn test_sanitized_clamps_out_of_domain_values() {
        let m = Measurements {
            shoulders: -4.0,
            chest: f64::NAN,
            waist: f64::INFINITY,
            hip: Some(-98.0),
            torso_length: 66.0,
            leg_length: 0.0,
            foot_length: 27.0,
        };
        let clean = m.sanitized();
        assert_eq!(clean.shoulders, 0.0);
        assert_eq!(clean.chest, 0.0);
        assert_eq!(clean.waist, 0.0);
        assert_eq!(clean.hip, None);
        assert_eq!(clean.torso_length, 66.0);
        assert_eq!(clean.foot_length, 27.0);
    }

    #[test]
    fn test_coerce_f64_variants() {
        assert_eq!(coerce_f64(&json!(82.5)), 82.5);
        assert_eq!(coerce_f64(&json!("  82,5  ")), 82.5);
        assert_eq!(coerce_f64(&json!("82.5")), 82.5);
        assert_eq!(coerce_f64(&json!("")), 0.0);
        assert_eq!(coerce_f64(&json!(true)), 0.0);
        assert_eq!(coerce_f64(&json!(-3)), 0.0);
    }

    #[test]
    fn test_round2_ties_away_from_zero() {
        // 0.125 and -0.125 are exact binary halves
        assert_eq!(round2(0.125), 0.13);
        assert_eq!(round2(-0.125), -0.13);
        assert_eq!(round2(2.004), 2.0);
        assert_eq!(round2(2.006), 2.01);
        assert_eq!(round2(-1.299), -1.3);
    }

    #[test]
    fn test_round2_binary_representation_edge() {
        // 1.005 has no exact binary form; it is stored slightly below the
        // half, so it rounds down rather than up.
        assert_eq!(round2(1.005), 1.0);
    }
}
