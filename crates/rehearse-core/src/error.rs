//! Scoring criteria error types.
//!
//! The evaluation pipeline itself never fails; these errors are raised only
//! when a criteria file describes an inconsistent scoring configuration.

use thiserror::Error;

/// Errors raised by [`ScoringCriteria::validate`](crate::criteria::ScoringCriteria::validate).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CriteriaError {
    /// A weight group does not sum to 1.0.
    #[error("{group} weights must sum to 1.0, got {total:.3}")]
    WeightSum { group: &'static str, total: f64 },

    /// A single weight is negative.
    #[error("{group} weight '{name}' must not be negative, got {value}")]
    NegativeWeight {
        group: &'static str,
        name: &'static str,
        value: f64,
    },

    /// Grade band lower bounds are not strictly descending inside 0..=100.
    #[error("grade bands must be strictly descending within 0..=100, got {0:?}")]
    GradeBands([u32; 4]),

    /// Key point length bounds leave no valid length.
    #[error("key point line length bounds are inverted: min {min} >= max {max}")]
    KeyPointBounds { min: usize, max: usize },

    /// The ideal sentence-length window is empty.
    #[error("ideal sentence length window is inverted: {min} > {max}")]
    SentenceWindow { min: f64, max: f64 },

    /// A weight or constant is NaN or infinite.
    #[error("{name} must be a finite number, got {value}")]
    NotFinite { name: &'static str, value: f64 },

    /// A clarity or completeness constant is outside its usable range.
    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f64 },
}

impl CriteriaError {
    /// Returns `true` if the error concerns weight configuration.
    pub fn is_weight_error(&self) -> bool {
        matches!(
            self,
            CriteriaError::WeightSum { .. } | CriteriaError::NegativeWeight { .. }
        )
    }
}
