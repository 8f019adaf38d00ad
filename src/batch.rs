//! Size-Run Evaluation
//!
//! Evaluates one shopper against a run of garments (the same style in
//! several sizes, or a whole catalog page) and picks the best-fitting size.
//! A single evaluation is cheap, so the parallel path only pays off at
//! catalog scale; both paths produce identical results.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::fit::result::FitResult;
use crate::fit::{compute_fit, compute_fit_with};
use crate::garment::Garment;
use crate::measurements::Measurements;
use crate::params::FitParams;
use crate::recommendation::{
    make_recommendation, make_recommendation_with, Recommendation, RecommendationTag,
};

/// Fit verdict and recommendation for one garment in a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizeEvaluation {
    /// Garment identifier as supplied by the host
    pub garment_id: String,

    /// Raw size label as supplied by the host
    pub size_label: String,

    pub fit: FitResult,
    pub recommendation: Recommendation,
}

/// Evaluate a single garment end to end with the built-in parameters.
pub fn evaluate(user: &Measurements, garment: &Garment) -> SizeEvaluation {
    let fit = compute_fit(user, garment);
    let recommendation = make_recommendation(None, garment, &fit);
    SizeEvaluation {
        garment_id: garment.id.clone(),
        size_label: garment.size_label.clone(),
        fit,
        recommendation,
    }
}

/// [`evaluate`] with an explicit parameter set.
pub fn evaluate_with(
    params: &FitParams,
    user: &Measurements,
    garment: &Garment,
) -> SizeEvaluation {
    let fit = compute_fit_with(params, user, garment);
    let recommendation = make_recommendation_with(params, None, garment, &fit);
    SizeEvaluation {
        garment_id: garment.id.clone(),
        size_label: garment.size_label.clone(),
        fit,
        recommendation,
    }
}

/// Evaluate a size run in input order.
pub fn evaluate_batch(user: &Measurements, garments: &[Garment]) -> Vec<SizeEvaluation> {
    garments.iter().map(|g| evaluate(user, g)).collect()
}

/// Parallel variant of [`evaluate_batch`] for catalog-scale runs.
/// Output order matches input order.
pub fn evaluate_batch_parallel(user: &Measurements, garments: &[Garment]) -> Vec<SizeEvaluation> {
    tracing::debug!("evaluating batch of {} garments in parallel", garments.len());
    garments.par_iter().map(|g| evaluate(user, g)).collect()
}

/// Rank of a tag when choosing among sizes: a clean fit beats a length
/// advisory, which beats any size change.
fn tag_rank(tag: RecommendationTag) -> u8 {
    match tag {
        RecommendationTag::Ok => 0,
        RecommendationTag::CheckLength => 1,
        RecommendationTag::SizeUp | RecommendationTag::SizeDown => 2,
    }
}

/// Sum of absolute zone deltas, the tie-breaker between equally-tagged sizes.
fn delta_distance(fit: &FitResult) -> f64 {
    let widths: f64 = fit.widths.iter().map(|w| w.delta.abs()).sum();
    let lengths: f64 = fit.lengths.iter().map(|l| l.delta.abs()).sum();
    widths + lengths
}

/// Index of the best-fitting size in an evaluated run.
///
/// Ordering: tag rank first, then the smaller total zone distance, then
/// input order. Returns `None` for an empty run.
pub fn best_fit(evaluations: &[SizeEvaluation]) -> Option<usize> {
    let mut best: Option<(usize, u8, f64)> = None;

    for (index, evaluation) in evaluations.iter().enumerate() {
        let rank = tag_rank(evaluation.recommendation.tag);
        let distance = delta_distance(&evaluation.fit);

        let better = match best {
            None => true,
            Some((_, best_rank, best_distance)) => {
                rank < best_rank || (rank == best_rank && distance < best_distance)
            }
        };
        if better {
            best = Some((index, rank, distance));
        }
    }

    best.map(|(index, _, _)| index)
}
