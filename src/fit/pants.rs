//! Pants Fit
//!
//! Waist-led algorithm: the waist alone decides the overall verdict, the
//! inner leg is advisory, and the hip is evaluated only when both the chart
//! and the shopper supply it.

use smallvec::smallvec;

use super::comparator::{classify_ceiling, classify_length_band};
use super::result::{
    FitResult, LengthStatus, LengthZone, LengthZoneFit, WidthZone, WidthZoneFit, WidthZones,
};
use crate::category::GarmentCategory;
use crate::garment::EasePreset;
use crate::measurements::{round2, Measurements};
use crate::params::FitParams;

/// Compute the pants verdict against sanitized measurements.
pub(super) fn compute(
    user: &Measurements,
    garment: &Measurements,
    stretch: f64,
    preset: EasePreset,
    params: &FitParams,
) -> FitResult {
    // Waist decides the overall verdict
    let waist_delta = round2(garment.waist * stretch - user.waist);
    let waist_status = classify_ceiling(waist_delta, params.pants_waist_ceiling(preset));

    let mut widths: WidthZones = smallvec![WidthZoneFit {
        zone: WidthZone::Waist,
        status: waist_status,
        delta: waist_delta,
    }];

    // Hip is appended only when both sides supply it
    if let (Some(garment_hip), Some(user_hip)) = (garment.hip, user.hip) {
        let hip_delta = round2(garment_hip * stretch - user_hip);
        widths.push(WidthZoneFit {
            zone: WidthZone::Hip,
            status: classify_ceiling(hip_delta, params.hip_ceiling(preset)),
            delta: hip_delta,
        });
    }

    // Leg length is advisory. Missing data reads as a perfect length, so the
    // shopper is never alerted over a measurement nobody provided.
    let leg = if garment.leg_length > 0.0 && user.leg_length > 0.0 {
        let leg_delta = round2(garment.leg_length - user.leg_length);
        LengthZoneFit {
            zone: LengthZone::Leg,
            status: classify_length_band(leg_delta, params.leg_length_tolerance),
            delta: leg_delta,
        }
    } else {
        LengthZoneFit {
            zone: LengthZone::Leg,
            status: LengthStatus::Perfecto,
            delta: 0.0,
        }
    };

    FitResult {
        category: GarmentCategory::Pants,
        overall: waist_status,
        widths,
        lengths: smallvec![leg],
        debug: None,
    }
}
