//! Fit Parameters
//!
//! Ease allowances, tolerance bands and decision thresholds for the fit
//! algorithms, all in centimeters. The built-in defaults are the production
//! values; a JSON override file can retune any top-level threshold without a
//! code change (zone tables are replaced whole when overridden).

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::garment::EasePreset;

/// Waist ceiling used when an override carries an unusable value (cm)
pub const PANTS_WAIST_CEILING_FALLBACK: f64 = 3.0;

/// Per-zone centimeter values for the upper-body algorithm.
/// Used twice: once as ease allowances, once as tolerance half-widths.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UpperZoneCm {
    pub shoulders: f64,
    pub chest: f64,
    pub waist: f64,
    pub torso_length: f64,
}

/// Complete parameter set for the fit algorithms.
///
/// `Default` carries the production values. Deserialization fills missing
/// fields from the defaults, so an override file only needs the values it
/// changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FitParams {
    /// Wearing ease added per upper-body zone, slim cut
    pub upper_ease_slim: UpperZoneCm,

    /// Wearing ease added per upper-body zone, regular cut
    pub upper_ease_regular: UpperZoneCm,

    /// Wearing ease added per upper-body zone, oversize cut
    pub upper_ease_oversize: UpperZoneCm,

    /// Symmetric tolerance half-widths for the upper-body zones
    pub upper_tolerance: UpperZoneCm,

    /// Pants waist perfect-fit ceiling, slim cut
    pub pants_waist_ceiling_slim: f64,

    /// Pants waist perfect-fit ceiling, regular cut
    pub pants_waist_ceiling_regular: f64,

    /// Pants waist perfect-fit ceiling, oversize cut
    pub pants_waist_ceiling_oversize: f64,

    /// Hip perfect-fit ceiling, slim cut (roomier: slim cuts already sit
    /// close at the waist, so the hip gets more allowance)
    pub hip_ceiling_slim: f64,

    /// Hip perfect-fit ceiling, every other cut
    pub hip_ceiling_default: f64,

    /// Hip delta more negative than this forces a size-up regardless of the
    /// waist verdict
    pub hip_critical_delta: f64,

    /// Symmetric band for the inner leg length
    pub leg_length_tolerance: f64,

    /// A shoe may exceed the foot by up to this much and still fit perfectly
    pub shoe_length_tolerance: f64,
}

impl Default for FitParams {
    fn default() -> Self {
        FitParams {
            upper_ease_slim: UpperZoneCm {
                shoulders: 1.0,
                chest: 2.0,
                waist: 2.0,
                torso_length: 1.0,
            },
            upper_ease_regular: UpperZoneCm {
                shoulders: 2.0,
                chest: 4.0,
                waist: 4.0,
                torso_length: 2.0,
            },
            upper_ease_oversize: UpperZoneCm {
                shoulders: 4.0,
                chest: 8.0,
                waist: 8.0,
                torso_length: 4.0,
            },
            upper_tolerance: UpperZoneCm {
                shoulders: 1.5,
                chest: 2.0,
                waist: 2.5,
                torso_length: 3.0,
            },
            pants_waist_ceiling_slim: 2.0,
            pants_waist_ceiling_regular: 3.0,
            pants_waist_ceiling_oversize: 4.0,
            hip_ceiling_slim: 3.0,
            hip_ceiling_default: 2.0,
            hip_critical_delta: -5.0,
            leg_length_tolerance: 2.0,
            shoe_length_tolerance: 0.6,
        }
    }
}

impl FitParams {
    /// Load a parameter override from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read fit parameter file: {:?}", path))?;

        serde_json::from_str(&contents).with_context(|| "Failed to parse fit parameter JSON")
    }

    /// Ease allowances for the upper-body zones under a preset
    pub fn upper_ease(&self, preset: EasePreset) -> &UpperZoneCm {
        match preset {
            EasePreset::Slim => &self.upper_ease_slim,
            EasePreset::Regular => &self.upper_ease_regular,
            EasePreset::Oversize => &self.upper_ease_oversize,
        }
    }

    /// Waist perfect-fit ceiling for a preset.
    /// A non-finite or negative override falls back to the safe ceiling.
    pub fn pants_waist_ceiling(&self, preset: EasePreset) -> f64 {
        let ceiling = match preset {
            EasePreset::Slim => self.pants_waist_ceiling_slim,
            EasePreset::Regular => self.pants_waist_ceiling_regular,
            EasePreset::Oversize => self.pants_waist_ceiling_oversize,
        };
        if ceiling.is_finite() && ceiling >= 0.0 {
            ceiling
        } else {
            PANTS_WAIST_CEILING_FALLBACK
        }
    }

    /// Hip perfect-fit ceiling for a preset
    pub fn hip_ceiling(&self, preset: EasePreset) -> f64 {
        match preset {
            EasePreset::Slim => self.hip_ceiling_slim,
            _ => self.hip_ceiling_default,
        }
    }
}
