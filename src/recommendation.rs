//! Size Recommendation
//!
//! Turns a fit verdict into an actionable recommendation: a stable machine
//! tag plus a shopper-facing Spanish title and message. Decision rules are
//! category-specific: pants follow the waist with a hip-critical override,
//! footwear follows foot length, and upper-body garments follow shoulders
//! and chest, with waist and torso demoted to review advisories.

use serde::{Deserialize, Serialize};

use crate::category::GarmentCategory;
use crate::fit::result::{FitResult, LengthStatus, LengthZone, WidthStatus, WidthZone};
use crate::fit::DEFAULT_PARAMS;
use crate::garment::Garment;
use crate::params::FitParams;

/// Machine-readable recommendation tag, stable across releases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecommendationTag {
    /// Take this size
    Ok,

    /// Go one size up
    SizeUp,

    /// Go one size down
    SizeDown,

    /// Width is fine but a length zone needs a second look
    CheckLength,
}

impl RecommendationTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecommendationTag::Ok => "OK",
            RecommendationTag::SizeUp => "SIZE_UP",
            RecommendationTag::SizeDown => "SIZE_DOWN",
            RecommendationTag::CheckLength => "CHECK_LENGTH",
        }
    }
}

/// Actionable size recommendation for one garment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Machine tag for host-side branching
    pub tag: RecommendationTag,

    /// Short shopper-facing headline
    pub title: String,

    /// Full shopper-facing advice
    pub message: String,
}

/// Build a recommendation from a fit verdict, using the built-in parameters.
///
/// # Arguments
/// * `category` - Optional raw category override; when `None` (or blank) the
///   garment's own label is used
/// * `garment` - The garment the verdict belongs to
/// * `fit` - The verdict produced by the fit calculator
pub fn make_recommendation(
    category: Option<&str>,
    garment: &Garment,
    fit: &FitResult,
) -> Recommendation {
    make_recommendation_with(&DEFAULT_PARAMS, category, garment, fit)
}

/// [`make_recommendation`] with an explicit parameter set.
pub fn make_recommendation_with(
    params: &FitParams,
    category: Option<&str>,
    garment: &Garment,
    fit: &FitResult,
) -> Recommendation {
    let raw = category
        .filter(|c| !c.trim().is_empty())
        .unwrap_or(&garment.category);
    let resolved = GarmentCategory::from_label(raw);

    let recommendation = match resolved {
        GarmentCategory::Pants => pants_recommendation(garment, fit, params),
        GarmentCategory::Shoes => shoes_recommendation(garment, fit),
        GarmentCategory::Upper => upper_recommendation(garment, fit),
    };

    tracing::debug!(
        "recommendation: category={} tag={}",
        resolved.as_str(),
        recommendation.tag.as_str()
    );
    recommendation
}

// ============================================================================
// Category Deciders
// ============================================================================

fn pants_recommendation(garment: &Garment, fit: &FitResult, params: &FitParams) -> Recommendation {
    let waist_status = fit
        .width(WidthZone::Waist)
        .map(|w| w.status)
        .unwrap_or(WidthStatus::Perfecto);
    let leg_status = fit
        .length(LengthZone::Leg)
        .map(|l| l.status)
        .unwrap_or(LengthStatus::Perfecto);
    let hip = fit.width(WidthZone::Hip);

    // A hip this tight cannot be worn no matter what the waist says
    let hip_critical = hip.is_some_and(|h| h.delta < params.hip_critical_delta);

    let tag = if hip_critical {
        RecommendationTag::SizeUp
    } else {
        match waist_status {
            WidthStatus::Ajustado => RecommendationTag::SizeUp,
            WidthStatus::Holgado => RecommendationTag::SizeDown,
            WidthStatus::Perfecto if leg_status != LengthStatus::Perfecto => {
                RecommendationTag::CheckLength
            }
            WidthStatus::Perfecto => RecommendationTag::Ok,
        }
    };

    // One clause per zone that strayed from the perfect band
    let mut clauses: Vec<&'static str> = Vec::new();
    match waist_status {
        WidthStatus::Ajustado => clauses.push("la cintura queda ajustada"),
        WidthStatus::Holgado => clauses.push("la cintura queda holgada"),
        WidthStatus::Perfecto => {}
    }
    if let Some(hip) = hip {
        if hip_critical {
            clauses.push("la cadera queda demasiado ajustada");
        } else {
            match hip.status {
                WidthStatus::Ajustado => clauses.push("la cadera queda ajustada"),
                WidthStatus::Holgado => clauses.push("la cadera queda holgada"),
                WidthStatus::Perfecto => {}
            }
        }
    }
    match leg_status {
        LengthStatus::Corto => clauses.push("el largo queda corto"),
        LengthStatus::Largo => clauses.push("el largo queda largo"),
        LengthStatus::Perfecto => {}
    }

    let label = garment.display_size();
    let message = if clauses.is_empty() {
        format!("La talla {} debería quedarte bien.", label)
    } else {
        format!(
            "Con la talla {}, {}. {}",
            label,
            join_clauses(&clauses),
            closing_advice(tag)
        )
    };

    Recommendation {
        tag,
        title: title_for(tag).to_string(),
        message,
    }
}

fn shoes_recommendation(garment: &Garment, fit: &FitResult) -> Recommendation {
    let status = fit
        .length(LengthZone::Foot)
        .map(|l| l.status)
        .unwrap_or(LengthStatus::Perfecto);
    let label = garment.display_size();

    let (tag, message) = match status {
        LengthStatus::Corto => (
            RecommendationTag::SizeUp,
            format!(
                "La talla {} se queda corta para tu pie. Te recomendamos elegir una talla más.",
                label
            ),
        ),
        LengthStatus::Largo => (
            RecommendationTag::SizeDown,
            format!(
                "La talla {} queda larga para tu pie. Te recomendamos elegir una talla menos.",
                label
            ),
        ),
        LengthStatus::Perfecto => (
            RecommendationTag::Ok,
            format!("La talla {} se ajusta bien a tu pie.", label),
        ),
    };

    Recommendation {
        tag,
        title: title_for(tag).to_string(),
        message,
    }
}

fn upper_recommendation(garment: &Garment, fit: &FitResult) -> Recommendation {
    // Shoulders and chest decide the tag; waist and torso only ever advise
    let decisive = [WidthZone::Shoulders, WidthZone::Chest];
    let decisive_has = |status: WidthStatus| {
        fit.widths
            .iter()
            .any(|w| decisive.contains(&w.zone) && w.status == status)
    };

    let tag = if decisive_has(WidthStatus::Ajustado) {
        RecommendationTag::SizeUp
    } else if decisive_has(WidthStatus::Holgado) {
        RecommendationTag::SizeDown
    } else {
        RecommendationTag::Ok
    };

    let label = garment.display_size();
    let message = match tag {
        RecommendationTag::Ok => {
            let advisories = advisory_clauses(fit);
            if advisories.is_empty() {
                format!("La talla {} debería quedarte bien.", label)
            } else {
                format!(
                    "La talla {} es correcta de hombros y pecho, pero revisa antes de comprar: {}.",
                    label,
                    join_clauses(&advisories)
                )
            }
        }
        _ => {
            let clauses = decisive_clauses(fit);
            format!(
                "Con la talla {}, {}. {}",
                label,
                join_clauses(&clauses),
                closing_advice(tag)
            )
        }
    };

    Recommendation {
        tag,
        title: title_for(tag).to_string(),
        message,
    }
}

// ============================================================================
// Message Composition
// ============================================================================

/// Clauses for the zones that decide the upper-body tag.
fn decisive_clauses(fit: &FitResult) -> Vec<&'static str> {
    let mut clauses = Vec::new();
    if let Some(shoulders) = fit.width(WidthZone::Shoulders) {
        match shoulders.status {
            WidthStatus::Ajustado => clauses.push("los hombros quedan ajustados"),
            WidthStatus::Holgado => clauses.push("los hombros quedan holgados"),
            WidthStatus::Perfecto => {}
        }
    }
    if let Some(chest) = fit.width(WidthZone::Chest) {
        match chest.status {
            WidthStatus::Ajustado => clauses.push("el pecho queda ajustado"),
            WidthStatus::Holgado => clauses.push("el pecho queda holgado"),
            WidthStatus::Perfecto => {}
        }
    }
    clauses
}

/// Clauses for the upper-body zones that advise but never decide.
fn advisory_clauses(fit: &FitResult) -> Vec<&'static str> {
    let mut clauses = Vec::new();
    if let Some(waist) = fit.width(WidthZone::Waist) {
        match waist.status {
            WidthStatus::Ajustado => clauses.push("la cintura queda ajustada"),
            WidthStatus::Holgado => clauses.push("la cintura queda holgada"),
            WidthStatus::Perfecto => {}
        }
    }
    if let Some(torso) = fit.length(LengthZone::Torso) {
        match torso.status {
            LengthStatus::Corto => clauses.push("el torso queda corto"),
            LengthStatus::Largo => clauses.push("el torso queda largo"),
            LengthStatus::Perfecto => {}
        }
    }
    clauses
}

/// Join clauses into one readable enumeration: "a", "a y b", "a, b y c".
fn join_clauses(clauses: &[&str]) -> String {
    match clauses {
        [] => String::new(),
        [only] => (*only).to_string(),
        [init @ .., last] => format!("{} y {}", init.join(", "), last),
    }
}

fn title_for(tag: RecommendationTag) -> &'static str {
    match tag {
        RecommendationTag::Ok => "Talla correcta",
        RecommendationTag::SizeUp => "Mejor una talla más",
        RecommendationTag::SizeDown => "Mejor una talla menos",
        RecommendationTag::CheckLength => "Revisa el largo",
    }
}

fn closing_advice(tag: RecommendationTag) -> &'static str {
    match tag {
        RecommendationTag::Ok => "Aun así debería quedarte bien.",
        RecommendationTag::SizeUp => "Te recomendamos elegir una talla más.",
        RecommendationTag::SizeDown => "Te recomendamos elegir una talla menos.",
        RecommendationTag::CheckLength => "Revisa el largo antes de comprar.",
    }
}
