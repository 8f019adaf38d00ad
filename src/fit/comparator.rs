//! Delta Comparators
//!
//! The two banded classification rules shared by every fit algorithm: a
//! one-sided ceiling (any shortfall is tight, anything past the ceiling is
//! loose) and a symmetric band centered on the body measurement.
//!
//! All classification happens on deltas that were already rounded to two
//! decimals, so verdicts always agree with the numbers shoppers see.

use super::result::{LengthStatus, WidthStatus};

/// Classify a width delta against a perfect-fit ceiling.
///
/// # Arguments
/// * `delta` - Effective garment minus body, in cm
/// * `ceiling` - Upper bound of the perfect band, in cm
///
/// # Returns
/// `Ajustado` for any negative delta, `Perfecto` inside [0, ceiling],
/// `Holgado` past the ceiling.
pub fn classify_ceiling(delta: f64, ceiling: f64) -> WidthStatus {
    if delta < 0.0 {
        WidthStatus::Ajustado
    } else if delta <= ceiling {
        WidthStatus::Perfecto
    } else {
        WidthStatus::Holgado
    }
}

/// Classify a width delta against a symmetric band: inside ±tolerance is
/// `Perfecto`, below it `Ajustado`, above it `Holgado`. Both bounds are
/// inclusive.
pub fn classify_band(delta: f64, tolerance: f64) -> WidthStatus {
    if delta < -tolerance {
        WidthStatus::Ajustado
    } else if delta > tolerance {
        WidthStatus::Holgado
    } else {
        WidthStatus::Perfecto
    }
}

/// Length counterpart of [`classify_band`]
pub fn classify_length_band(delta: f64, tolerance: f64) -> LengthStatus {
    if delta < -tolerance {
        LengthStatus::Corto
    } else if delta > tolerance {
        LengthStatus::Largo
    } else {
        LengthStatus::Perfecto
    }
}

/// Length counterpart of [`classify_ceiling`], used for footwear: any
/// shortfall is `Corto`, inside [0, ceiling] is `Perfecto`, past it `Largo`.
pub fn classify_length_ceiling(delta: f64, ceiling: f64) -> LengthStatus {
    if delta < 0.0 {
        LengthStatus::Corto
    } else if delta <= ceiling {
        LengthStatus::Perfecto
    } else {
        LengthStatus::Largo
    }
}
