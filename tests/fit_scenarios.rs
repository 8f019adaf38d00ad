//! Fit Scenario Tests
//!
//! End-to-end checks of the fit calculator across the three garment classes:
//! realistic shopper/garment pairs through `compute_fit`, asserting zone
//! verdicts, deltas and the overall signal.

use approx::assert_relative_eq;
use serde_json::json;

use size_advisor_rust::{
    compute_fit, compute_fit_with, EasePreset, FitParams, Garment, GarmentCategory, LengthStatus,
    LengthZone, Measurements, WidthStatus, WidthZone,
};

/// A shopper used across scenarios: average build, EU size M territory
fn shopper() -> Measurements {
    Measurements {
        shoulders: 46.0,
        chest: 96.0,
        waist: 80.0,
        hip: Some(100.0),
        torso_length: 66.0,
        leg_length: 104.0,
        foot_length: 26.5,
    }
}

fn pants(waist: f64, hip: Option<f64>, leg: f64) -> Garment {
    Garment {
        size_label: "M".to_string(),
        category: "pantalones".to_string(),
        measurements: Measurements {
            waist,
            hip,
            leg_length: leg,
            ..Default::default()
        },
        ..Default::default()
    }
}

// ----------------------------------------------------------------------------
// Pants
// ----------------------------------------------------------------------------

#[test]
fn pants_waist_within_ceiling_reads_perfect() {
    let fit = compute_fit(&shopper(), &pants(82.0, Some(102.0), 105.0));
    assert_eq!(fit.category, GarmentCategory::Pants);
    assert_eq!(fit.overall, WidthStatus::Perfecto);

    let waist = fit.width(WidthZone::Waist).unwrap();
    assert_relative_eq!(waist.delta, 2.0);
    assert_eq!(waist.status, WidthStatus::Perfecto);
}

#[test]
fn pants_tight_waist_reads_ajustado() {
    let fit = compute_fit(&shopper(), &pants(76.0, Some(102.0), 105.0));
    assert_eq!(fit.overall, WidthStatus::Ajustado);
    assert_relative_eq!(fit.width(WidthZone::Waist).unwrap().delta, -4.0);
}

#[test]
fn pants_elasticity_expands_effective_waist() {
    // Flat waist 78 on an 80 body is tight; 10% stretch carries the
    // effective waist to 85.8, past the 3 cm regular ceiling
    let mut garment = pants(78.0, None, 0.0);
    garment.elasticity_pct = 10.0;
    let fit = compute_fit(&shopper(), &garment);

    let waist = fit.width(WidthZone::Waist).unwrap();
    assert_relative_eq!(waist.delta, 5.8);
    assert_eq!(waist.status, WidthStatus::Holgado);
}

#[test]
fn pants_slim_preset_narrows_the_waist_ceiling() {
    // Delta 2.5 is perfect on a regular cut, loose on slim
    let mut garment = pants(82.5, None, 0.0);
    let fit = compute_fit(&shopper(), &garment);
    assert_eq!(fit.overall, WidthStatus::Perfecto);

    garment.ease_preset = EasePreset::Slim;
    let fit = compute_fit(&shopper(), &garment);
    assert_eq!(fit.overall, WidthStatus::Holgado);
}

#[test]
fn pants_hip_requires_both_sides() {
    // Chart has a hip, shopper does not: zone omitted entirely
    let mut user = shopper();
    user.hip = None;
    let fit = compute_fit(&user, &pants(82.0, Some(102.0), 104.0));
    assert!(fit.width(WidthZone::Hip).is_none());
    assert_eq!(fit.widths.len(), 1);
}

#[test]
fn pants_leg_entry_always_present() {
    // Even with no leg data on either side, the leg zone reports perfect
    let fit = compute_fit(&shopper(), &pants(82.0, None, 0.0));
    let leg = fit.length(LengthZone::Leg).unwrap();
    assert_eq!(leg.status, LengthStatus::Perfecto);
    assert_relative_eq!(leg.delta, 0.0);
}

#[test]
fn pants_long_leg_flags_largo() {
    let fit = compute_fit(&shopper(), &pants(82.0, None, 107.0));
    let leg = fit.length(LengthZone::Leg).unwrap();
    assert_relative_eq!(leg.delta, 3.0);
    assert_eq!(leg.status, LengthStatus::Largo);
    // Leg never moves the overall width signal
    assert_eq!(fit.overall, WidthStatus::Perfecto);
}

// ----------------------------------------------------------------------------
// Footwear
// ----------------------------------------------------------------------------

fn shoe(inner_length: f64) -> Garment {
    Garment {
        size_label: "42".to_string(),
        category: "zapatillas".to_string(),
        measurements: Measurements {
            foot_length: inner_length,
            ..Default::default()
        },
        ..Default::default()
    }
}

#[test]
fn shoe_within_tolerance_reads_perfect() {
    let fit = compute_fit(&shopper(), &shoe(27.0));
    assert_eq!(fit.category, GarmentCategory::Shoes);
    assert!(fit.widths.is_empty());

    let foot = fit.length(LengthZone::Foot).unwrap();
    assert_relative_eq!(foot.delta, 0.5);
    assert_eq!(foot.status, LengthStatus::Perfecto);
    assert_eq!(fit.overall, WidthStatus::Perfecto);
}

#[test]
fn shoe_shorter_than_foot_reads_corto() {
    let fit = compute_fit(&shopper(), &shoe(26.2));
    assert_eq!(
        fit.length(LengthZone::Foot).unwrap().status,
        LengthStatus::Corto
    );
    assert_eq!(fit.overall, WidthStatus::Ajustado);
}

#[test]
fn shoe_elasticity_is_ignored() {
    // Stretch must not apply to footwear: delta stays garment minus foot
    let mut garment = shoe(27.0);
    garment.elasticity_pct = 50.0;
    let fit = compute_fit(&shopper(), &garment);
    assert_relative_eq!(fit.length(LengthZone::Foot).unwrap().delta, 0.5);
}

// ----------------------------------------------------------------------------
// Upper body
// ----------------------------------------------------------------------------

fn shirt(shoulders: f64, chest: f64, waist: f64, torso: f64) -> Garment {
    Garment {
        size_label: "M".to_string(),
        category: "camiseta".to_string(),
        measurements: Measurements {
            shoulders,
            chest,
            waist,
            torso_length: torso,
            ..Default::default()
        },
        ..Default::default()
    }
}

#[test]
fn upper_reports_all_three_width_zones_in_order() {
    let fit = compute_fit(&shopper(), &shirt(44.0, 92.0, 78.0, 64.0));
    assert_eq!(fit.category, GarmentCategory::Upper);
    let zones: Vec<WidthZone> = fit.widths.iter().map(|w| w.zone).collect();
    assert_eq!(
        zones,
        vec![WidthZone::Shoulders, WidthZone::Chest, WidthZone::Waist]
    );
    assert_eq!(fit.overall, WidthStatus::Perfecto);
}

#[test]
fn upper_tight_shoulder_outranks_loose_chest() {
    // Shoulders -2 under the band, chest +3 over it
    let fit = compute_fit(&shopper(), &shirt(42.0, 95.0, 78.0, 64.0));
    assert_eq!(
        fit.width(WidthZone::Shoulders).unwrap().status,
        WidthStatus::Ajustado
    );
    assert_eq!(
        fit.width(WidthZone::Chest).unwrap().status,
        WidthStatus::Holgado
    );
    assert_eq!(fit.overall, WidthStatus::Ajustado);
}

#[test]
fn upper_preset_shifts_the_perfect_window() {
    // An 88 cm flat chest sits 8 under the 96 cm body. Regular ease (+4)
    // leaves it tight; oversize ease (+8) lands the delta on exactly 0.
    let garment = shirt(44.0, 88.0, 76.0, 64.0);
    let regular = compute_fit(&shopper(), &garment);
    assert_eq!(
        regular.width(WidthZone::Chest).unwrap().status,
        WidthStatus::Ajustado
    );

    let mut oversize = garment.clone();
    oversize.ease_preset = EasePreset::Oversize;
    let fit = compute_fit(&shopper(), &oversize);
    assert_relative_eq!(fit.width(WidthZone::Chest).unwrap().delta, 0.0);
    assert_eq!(
        fit.width(WidthZone::Chest).unwrap().status,
        WidthStatus::Perfecto
    );
}

#[test]
fn upper_unknown_category_falls_back_to_upper() {
    let mut garment = shirt(44.0, 92.0, 78.0, 64.0);
    garment.category = "artículo misterioso".to_string();
    let fit = compute_fit(&shopper(), &garment);
    assert_eq!(fit.category, GarmentCategory::Upper);
}

// ----------------------------------------------------------------------------
// Totality and the tolerant boundary
// ----------------------------------------------------------------------------

#[test]
fn hostile_json_payload_still_produces_a_verdict() {
    let user = Measurements::from_json(&json!({
        "waist": "ochenta",
        "chest": null,
        "hip": -100,
        "foot_length": "26,5"
    }));
    let garment = Garment::from_json(&json!({
        "id": null,
        "size_label": 42,
        "category": "botas",
        "measurements": { "foot_length": "27,0" },
        "elasticity_pct": "mucho",
        "ease_preset": 7
    }));

    let fit = compute_fit(&user, &garment);
    assert_eq!(fit.category, GarmentCategory::Shoes);
    let foot = fit.length(LengthZone::Foot).unwrap();
    assert_relative_eq!(foot.delta, 0.5);
    assert_eq!(foot.status, LengthStatus::Perfecto);
}

#[test]
fn out_of_domain_numbers_never_panic() {
    let values = [
        0.0,
        -1.0,
        f64::NAN,
        f64::INFINITY,
        f64::NEG_INFINITY,
        f64::MAX,
        1e-300,
    ];
    for &a in &values {
        for &b in &values {
            let user = Measurements {
                shoulders: a,
                chest: b,
                waist: a,
                hip: Some(b),
                torso_length: a,
                leg_length: b,
                foot_length: a,
            };
            let garment = Garment {
                category: "jeans".to_string(),
                elasticity_pct: b,
                measurements: user.clone(),
                ..Default::default()
            };
            // The verdict must always be well-formed, whatever the numbers
            let fit = compute_fit(&user, &garment);
            assert_eq!(fit.category, GarmentCategory::Pants);
            assert!(fit.width(WidthZone::Waist).is_some());
            assert!(fit.length(LengthZone::Leg).is_some());
        }
    }
}

#[test]
fn sanitized_out_of_domain_values_give_finite_deltas() {
    // NaN, infinities and negatives clamp to 0 at the boundary, so every
    // delta they produce is finite
    let user = Measurements {
        shoulders: f64::NAN,
        chest: f64::NEG_INFINITY,
        waist: -80.0,
        hip: Some(f64::INFINITY),
        torso_length: f64::NAN,
        leg_length: -104.0,
        foot_length: f64::INFINITY,
    };
    let garment = Garment {
        category: "jeans".to_string(),
        measurements: user.clone(),
        ..Default::default()
    };
    let fit = compute_fit(&user, &garment);
    assert!(fit.widths.iter().all(|w| w.delta.is_finite()));
    assert!(fit.lengths.iter().all(|l| l.delta.is_finite()));
}

#[test]
fn custom_params_rescale_every_threshold() {
    let mut params = FitParams::default();
    params.pants_waist_ceiling_regular = 6.0;
    params.leg_length_tolerance = 0.5;

    let garment = pants(85.0, None, 105.0);
    let fit = compute_fit_with(&params, &shopper(), &garment);
    // Delta 5 fits the widened ceiling
    assert_eq!(fit.overall, WidthStatus::Perfecto);
    // Delta 1 now exceeds the narrowed leg band
    assert_eq!(
        fit.length(LengthZone::Leg).unwrap().status,
        LengthStatus::Largo
    );
}

#[test]
fn deltas_are_rounded_to_two_decimals() {
    // 81.333 - 80 = 1.333.. -> 1.33
    let fit = compute_fit(&shopper(), &pants(81.333, None, 0.0));
    assert_relative_eq!(fit.width(WidthZone::Waist).unwrap().delta, 1.33);
}

#[test]
fn debug_bag_travels_with_the_verdict() {
    let mut garment = pants(82.0, None, 104.0);
    garment.category = "Vaqueros".to_string();
    garment.elasticity_pct = 2.0;
    let fit = compute_fit(&shopper(), &garment);

    let debug = fit.debug.expect("debug bag always populated");
    assert_eq!(debug.raw_category, "Vaqueros");
    assert_eq!(debug.preset, EasePreset::Regular);
    assert_relative_eq!(debug.stretch_factor, 1.02, epsilon = 1e-12);
}
