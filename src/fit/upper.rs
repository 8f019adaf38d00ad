//! Upper-Body Fit
//!
//! Multi-zone algorithm over shoulders, chest and waist plus the torso
//! length. Each zone gets preset-specific wearing ease and its own symmetric
//! tolerance band. A tight zone outranks a loose one in the overall signal.

use smallvec::smallvec;

use super::comparator::{classify_band, classify_length_band};
use super::result::{
    FitResult, LengthZone, LengthZoneFit, WidthStatus, WidthZone, WidthZoneFit, WidthZones,
};
use crate::category::GarmentCategory;
use crate::garment::EasePreset;
use crate::measurements::{round2, Measurements};
use crate::params::FitParams;

/// Compute the upper-body verdict against sanitized measurements.
pub(super) fn compute(
    user: &Measurements,
    garment: &Measurements,
    stretch: f64,
    preset: EasePreset,
    params: &FitParams,
) -> FitResult {
    let ease = params.upper_ease(preset);
    let tolerance = &params.upper_tolerance;

    let mut widths: WidthZones = smallvec![];
    let zones = [
        (
            WidthZone::Shoulders,
            garment.shoulders,
            user.shoulders,
            ease.shoulders,
            tolerance.shoulders,
        ),
        (
            WidthZone::Chest,
            garment.chest,
            user.chest,
            ease.chest,
            tolerance.chest,
        ),
        (
            WidthZone::Waist,
            garment.waist,
            user.waist,
            ease.waist,
            tolerance.waist,
        ),
    ];
    for (zone, garment_value, user_value, zone_ease, zone_tolerance) in zones {
        let delta = round2(garment_value * stretch + zone_ease - user_value);
        widths.push(WidthZoneFit {
            zone,
            status: classify_band(delta, zone_tolerance),
            delta,
        });
    }

    let torso_delta = round2(garment.torso_length * stretch + ease.torso_length - user.torso_length);
    let torso = LengthZoneFit {
        zone: LengthZone::Torso,
        status: classify_length_band(torso_delta, tolerance.torso_length),
        delta: torso_delta,
    };

    // Ajustado anywhere outranks Holgado; Perfecto only when every width
    // zone lands in band
    let overall = if widths.iter().any(|w| w.status == WidthStatus::Ajustado) {
        WidthStatus::Ajustado
    } else if widths.iter().any(|w| w.status == WidthStatus::Holgado) {
        WidthStatus::Holgado
    } else {
        WidthStatus::Perfecto
    };

    FitResult {
        category: GarmentCategory::Upper,
        overall,
        widths,
        lengths: smallvec![torso],
        debug: None,
    }
}
