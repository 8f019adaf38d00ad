//! Fit Calculator
//!
//! Entry point for zone-by-zone fit computation. Resolves the garment's
//! canonical category, sanitizes both measurement records, then hands off to
//! the category's algorithm:
//!
//! - `upper` - symmetric tolerance over shoulders/chest/waist plus torso
//! - `pants` - waist-led ceiling rule with optional hip and advisory leg
//! - `shoes` - foot length only
//!
//! Every call returns a well-formed [`FitResult`]; invalid input degrades to
//! zeroed measurements instead of errors. Verdicts are computed on deltas
//! already rounded to two decimals, so they always agree with what shoppers
//! see.

pub mod comparator;
mod pants;
pub mod result;
mod shoes;
mod upper;

use std::sync::LazyLock;

use crate::category::GarmentCategory;
use crate::garment::Garment;
use crate::measurements::Measurements;
use crate::params::FitParams;
use result::{FitDebug, FitResult};

/// Built-in parameter set, initialized once
pub(crate) static DEFAULT_PARAMS: LazyLock<FitParams> = LazyLock::new(FitParams::default);

/// Compute a fit verdict with the built-in parameters.
pub fn compute_fit(user: &Measurements, garment: &Garment) -> FitResult {
    compute_fit_with(&DEFAULT_PARAMS, user, garment)
}

/// Compute a fit verdict with an explicit parameter set.
///
/// # Arguments
/// * `params` - Ease tables and thresholds to evaluate under
/// * `user` - The shopper's body measurements
/// * `garment` - The garment under evaluation
///
/// # Returns
/// A complete [`FitResult`]. Total for any input: out-of-domain numbers are
/// clamped, unknown categories run the upper-body algorithm.
pub fn compute_fit_with(params: &FitParams, user: &Measurements, garment: &Garment) -> FitResult {
    let category = garment.canonical_category();
    let preset = garment.ease_preset;
    let stretch = garment.stretch_factor();
    let user = user.sanitized();
    let garment_m = garment.measurements.sanitized();

    tracing::debug!(
        "computing fit: category={} preset={} stretch={:.2}",
        category.as_str(),
        preset.as_str(),
        stretch
    );

    let mut fit = match category {
        GarmentCategory::Pants => pants::compute(&user, &garment_m, stretch, preset, params),
        GarmentCategory::Shoes => shoes::compute(&user, &garment_m, params),
        GarmentCategory::Upper => upper::compute(&user, &garment_m, stretch, preset, params),
    };

    fit.debug = Some(FitDebug {
        raw_category: garment.category.clone(),
        preset,
        stretch_factor: stretch,
    });
    fit
}
