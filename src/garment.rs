//! Garment Descriptor
//!
//! The caller-supplied garment under evaluation: identity, size label, raw
//! category, flat measurements, fabric stretch and the style ease preset.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::category::GarmentCategory;
use crate::measurements::{coerce_f64, Measurements};

/// One-size label shown when a shop sends a placeholder size
pub const ONE_SIZE_LABEL: &str = "Único";

/// Style ease preset: how loosely the garment is cut to be worn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EasePreset {
    /// Close-fitting cut, minimal allowance
    Slim,

    /// Standard cut
    #[default]
    Regular,

    /// Deliberately roomy cut
    Oversize,
}

impl EasePreset {
    /// Parse a preset label. Unknown, empty or missing labels fall back to
    /// `Regular`; preset resolution never fails.
    pub fn from_label(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "slim" => EasePreset::Slim,
            "oversize" => EasePreset::Oversize,
            _ => EasePreset::Regular,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EasePreset::Slim => "slim",
            EasePreset::Regular => "regular",
            EasePreset::Oversize => "oversize",
        }
    }
}

/// Accept any string (or null) for the preset field, falling back to
/// `Regular`, so a shop inventing preset names cannot break deserialization.
fn preset_from_any<'de, D>(deserializer: D) -> Result<EasePreset, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.map(|s| EasePreset::from_label(&s)).unwrap_or_default())
}

/// A garment as the shop host describes it.
///
/// Only `measurements` feeds the fit arithmetic; the rest is identity and
/// presentation. Every field has a safe default, so partial host payloads
/// deserialize cleanly.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Garment {
    /// Stable identifier from the host (SKU or variant id)
    pub id: String,

    /// Size label exactly as the shop shows it ("M", "42", "Default Title")
    pub size_label: String,

    /// Raw category label; normalized on use, never required to be canonical
    pub category: String,

    /// Brand name, display only
    pub brand: Option<String>,

    /// Flat garment measurements
    pub measurements: Measurements,

    /// Fabric stretch as a percentage of the flat measurement (0-100)
    pub elasticity_pct: f64,

    /// Style ease preset; unknown labels read as `Regular`
    #[serde(deserialize_with = "preset_from_any")]
    pub ease_preset: EasePreset,
}

impl Garment {
    /// Build from loosely-typed host JSON.
    ///
    /// Identity fields accept strings or numbers, measurements go through
    /// the tolerant centimeter coercion, and every missing field takes its
    /// default. Any JSON value produces a usable garment.
    pub fn from_json(value: &Value) -> Self {
        let text = |key: &str| match value.get(key) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            _ => String::new(),
        };

        Garment {
            id: text("id"),
            size_label: text("size_label"),
            category: text("category"),
            brand: value
                .get("brand")
                .and_then(Value::as_str)
                .map(str::to_string),
            measurements: value
                .get("measurements")
                .map(Measurements::from_json)
                .unwrap_or_default(),
            elasticity_pct: value.get("elasticity_pct").map(coerce_f64).unwrap_or(0.0),
            ease_preset: value
                .get("ease_preset")
                .and_then(Value::as_str)
                .map(EasePreset::from_label)
                .unwrap_or_default(),
        }
    }

    /// Multiplier applied to the garment's width measurements before
    /// comparison. The elasticity fraction is clamped to [0, 1] first, so a
    /// 120% or negative input can never distort the comparison.
    pub fn stretch_factor(&self) -> f64 {
        let pct = if self.elasticity_pct.is_finite() {
            self.elasticity_pct
        } else {
            0.0
        };
        1.0 + (pct / 100.0).clamp(0.0, 1.0)
    }

    /// Canonical class for this garment's raw category label
    pub fn canonical_category(&self) -> GarmentCategory {
        GarmentCategory::from_label(&self.category)
    }

    /// Size label ready for shopper-facing text
    pub fn display_size(&self) -> String {
        display_size_label(&self.size_label)
    }
}

/// Normalize a raw size label for display: trimmed, with platform
/// placeholder labels ("Default Title", "Default") rendered as the one-size
/// label.
pub fn display_size_label(raw: &str) -> String {
    let label = raw.trim();
    if label.eq_ignore_ascii_case("default title") || label.eq_ignore_ascii_case("default") {
        return ONE_SIZE_LABEL.to_string();
    }
    label.to_string()
}
