//! Score combination and grade determination.

use crate::criteria::{GradeBands, ScoreWeights};
use crate::model::Grade;

/// Round half up and clamp into `0..=100`.
pub(crate) fn to_score(value: f64) -> u32 {
    value.round().clamp(0.0, 100.0) as u32
}

/// Weighted combination of the three sub-scores.
pub fn combine_scores(
    coverage: u32,
    completeness: u32,
    clarity: u32,
    weights: &ScoreWeights,
) -> u32 {
    to_score(
        coverage as f64 * weights.coverage
            + completeness as f64 * weights.completeness
            + clarity as f64 * weights.clarity,
    )
}

pub fn determine_grade(score: u32, bands: &GradeBands) -> Grade {
    bands.band(score)
}
