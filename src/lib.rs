//! Garment Size Advisor
//!
//! Compares a shopper's body measurements against a garment's flat
//! measurements and produces a zone-by-zone fit verdict plus an actionable
//! size recommendation.
//!
//! Module layout:
//! - `measurements`: shared measurement record and tolerant JSON coercion
//! - `category`: free-text category labels to canonical garment classes
//! - `garment`: the garment descriptor (labels, stretch, ease preset)
//! - `params`: ease tables, tolerance bands and decision thresholds
//! - `fit`: the per-category fit calculator
//! - `recommendation`: fit verdicts to shopper-facing advice
//! - `batch`: size-run evaluation and best-size selection
//!
//! The whole surface is synchronous, allocation-light and total: any input
//! produces a well-formed result instead of an error.

pub mod batch;
pub mod category;
pub mod fit;
pub mod garment;
pub mod measurements;
pub mod params;
pub mod recommendation;

// Re-export commonly used types
pub use batch::{
    best_fit, evaluate, evaluate_batch, evaluate_batch_parallel, evaluate_with, SizeEvaluation,
};
pub use category::GarmentCategory;
pub use fit::result::{
    FitDebug, FitResult, LengthStatus, LengthZone, LengthZoneFit, LengthZones, WidthStatus,
    WidthZone, WidthZoneFit, WidthZones,
};
pub use fit::{compute_fit, compute_fit_with};
pub use garment::{display_size_label, EasePreset, Garment, ONE_SIZE_LABEL};
pub use measurements::Measurements;
pub use params::{FitParams, UpperZoneCm};
pub use recommendation::{
    make_recommendation, make_recommendation_with, Recommendation, RecommendationTag,
};
