//! Shoe Fit
//!
//! Length-only algorithm: inner shoe length against foot length with a fixed
//! absolute ceiling. Fabric stretch never applies to footwear.

use smallvec::smallvec;

use super::comparator::classify_length_ceiling;
use super::result::{FitResult, LengthStatus, LengthZone, LengthZoneFit, WidthStatus};
use crate::category::GarmentCategory;
use crate::measurements::{round2, Measurements};
use crate::params::FitParams;

/// Compute the footwear verdict against sanitized measurements.
pub(super) fn compute(
    user: &Measurements,
    garment: &Measurements,
    params: &FitParams,
) -> FitResult {
    let delta = round2(garment.foot_length - user.foot_length);
    let status = classify_length_ceiling(delta, params.shoe_length_tolerance);

    // The overall width signal is derived from the length verdict so hosts
    // can reuse one traffic-light rendering across categories.
    let overall = match status {
        LengthStatus::Corto => WidthStatus::Ajustado,
        LengthStatus::Perfecto => WidthStatus::Perfecto,
        LengthStatus::Largo => WidthStatus::Holgado,
    };

    FitResult {
        category: GarmentCategory::Shoes,
        overall,
        widths: smallvec![],
        lengths: smallvec![LengthZoneFit {
            zone: LengthZone::Foot,
            status,
            delta,
        }],
        debug: None,
    }
}
