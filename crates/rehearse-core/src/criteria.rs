//! Scoring criteria: every weight and threshold the engine uses.
//!
//! Criteria are immutable once built. They can be loaded from a TOML file in
//! which every field is optional; missing fields keep their default value.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::CriteriaError;
use crate::locale::Locale;
use crate::model::Grade;

/// Tolerance used when checking that a weight group sums to 1.0.
const WEIGHT_TOLERANCE: f64 = 0.01;

/// Complete scoring configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringCriteria {
    /// Language of generated feedback.
    pub locale: Locale,
    /// Weights of the three sub-scores in the final score.
    pub weights: ScoreWeights,
    pub key_points: KeyPointRules,
    pub completeness: CompletenessRules,
    pub clarity: ClarityRules,
    pub grades: GradeBands,
    pub feedback: FeedbackRules,
}

/// Weights combining coverage, completeness, and clarity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreWeights {
    pub coverage: f64,
    pub completeness: f64,
    pub clarity: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            coverage: 0.6,
            completeness: 0.3,
            clarity: 0.1,
        }
    }
}

/// Length bounds used when extracting key points from a reference answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyPointRules {
    /// A line is kept only if its length is strictly greater than this.
    pub min_line_len: usize,
    /// A line is kept only if its length is strictly less than this.
    pub max_line_len: usize,
    /// Fragments (and fallback sentences) must be strictly longer than this.
    pub min_fragment_len: usize,
    /// Fewer key points than this triggers the sentence fallback.
    pub fallback_threshold: usize,
}

impl Default for KeyPointRules {
    fn default() -> Self {
        Self {
            min_line_len: 5,
            max_line_len: 100,
            min_fragment_len: 5,
            fallback_threshold: 3,
        }
    }
}

/// Length and paragraph-structure comparison settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompletenessRules {
    pub length_weight: f64,
    pub structure_weight: f64,
    /// Cap applied to `len(user) / len(reference)`.
    pub max_length_ratio: f64,
}

impl Default for CompletenessRules {
    fn default() -> Self {
        Self {
            length_weight: 0.7,
            structure_weight: 0.3,
            max_length_ratio: 1.5,
        }
    }
}

/// Sentence-length and punctuation-density heuristics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClarityRules {
    pub sentence_length_weight: f64,
    pub punctuation_weight: f64,
    pub ideal_sentence_min: f64,
    pub ideal_sentence_max: f64,
    /// Points lost per character above `ideal_sentence_max`.
    pub long_sentence_penalty: f64,
    /// Points per character below `ideal_sentence_min`.
    pub short_sentence_factor: f64,
    /// Punctuation marks per character in a well-punctuated answer.
    pub ideal_punctuation_density: f64,
    /// Points lost per unit of density deviation.
    pub punctuation_penalty: f64,
}

impl Default for ClarityRules {
    fn default() -> Self {
        Self {
            sentence_length_weight: 0.7,
            punctuation_weight: 0.3,
            ideal_sentence_min: 10.0,
            ideal_sentence_max: 40.0,
            long_sentence_penalty: 2.0,
            short_sentence_factor: 10.0,
            ideal_punctuation_density: 1.0 / 15.0,
            punctuation_penalty: 1000.0,
        }
    }
}

/// Lower bounds of the grade bands. Anything below `poor` is `VeryPoor`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GradeBands {
    pub excellent: u32,
    pub good: u32,
    pub average: u32,
    pub poor: u32,
}

impl Default for GradeBands {
    fn default() -> Self {
        Self {
            excellent: 90,
            good: 75,
            average: 60,
            poor: 40,
        }
    }
}

impl GradeBands {
    /// First band whose lower bound the score reaches, highest first.
    pub fn band(&self, score: u32) -> Grade {
        if score >= self.excellent {
            Grade::Excellent
        } else if score >= self.good {
            Grade::Good
        } else if score >= self.average {
            Grade::Average
        } else if score >= self.poor {
            Grade::Poor
        } else {
            Grade::VeryPoor
        }
    }

    fn as_array(&self) -> [u32; 4] {
        [self.excellent, self.good, self.average, self.poor]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedbackRules {
    /// Missing key points listed by name before the "and others" marker.
    pub max_missing_listed: usize,
}

impl Default for FeedbackRules {
    fn default() -> Self {
        Self {
            max_missing_listed: 3,
        }
    }
}

impl ScoringCriteria {
    /// Parse criteria from TOML and validate them.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let criteria: ScoringCriteria =
            toml::from_str(content).context("failed to parse scoring criteria TOML")?;
        criteria.validate()?;
        Ok(criteria)
    }

    /// Load criteria from a TOML file and validate them.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read criteria file: {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("invalid criteria file: {}", path.display()))
    }

    /// Load criteria from an explicit path, or `rehearse.toml` in the current
    /// directory if present, or fall back to the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        if let Some(p) = path {
            if !p.exists() {
                anyhow::bail!("criteria file not found: {}", p.display());
            }
            return Self::load(p);
        }

        let local = Path::new("rehearse.toml");
        if local.exists() {
            tracing::debug!("using criteria from {}", local.display());
            Self::load(local)
        } else {
            Ok(Self::default())
        }
    }

    /// Check the criteria for internal consistency.
    pub fn validate(&self) -> Result<(), CriteriaError> {
        check_weights(
            "score",
            &[
                ("coverage", self.weights.coverage),
                ("completeness", self.weights.completeness),
                ("clarity", self.weights.clarity),
            ],
        )?;
        check_weights(
            "completeness",
            &[
                ("length_weight", self.completeness.length_weight),
                ("structure_weight", self.completeness.structure_weight),
            ],
        )?;
        check_weights(
            "clarity",
            &[
                ("sentence_length_weight", self.clarity.sentence_length_weight),
                ("punctuation_weight", self.clarity.punctuation_weight),
            ],
        )?;

        let bands = self.grades.as_array();
        let descending = bands.windows(2).all(|w| w[0] > w[1]);
        if !descending || bands[0] > 100 {
            return Err(CriteriaError::GradeBands(bands));
        }

        let kp = &self.key_points;
        if kp.min_line_len >= kp.max_line_len {
            return Err(CriteriaError::KeyPointBounds {
                min: kp.min_line_len,
                max: kp.max_line_len,
            });
        }

        let clarity = &self.clarity;
        for (name, value) in [
            ("max_length_ratio", self.completeness.max_length_ratio),
            ("ideal_sentence_min", clarity.ideal_sentence_min),
            ("ideal_sentence_max", clarity.ideal_sentence_max),
            ("long_sentence_penalty", clarity.long_sentence_penalty),
            ("short_sentence_factor", clarity.short_sentence_factor),
            ("ideal_punctuation_density", clarity.ideal_punctuation_density),
            ("punctuation_penalty", clarity.punctuation_penalty),
        ] {
            if !value.is_finite() {
                return Err(CriteriaError::NotFinite { name, value });
            }
        }

        if clarity.ideal_sentence_min > clarity.ideal_sentence_max {
            return Err(CriteriaError::SentenceWindow {
                min: clarity.ideal_sentence_min,
                max: clarity.ideal_sentence_max,
            });
        }
        for (name, value) in [
            ("max_length_ratio", self.completeness.max_length_ratio),
            ("ideal_punctuation_density", clarity.ideal_punctuation_density),
        ] {
            if value <= 0.0 {
                return Err(CriteriaError::NonPositive { name, value });
            }
        }

        Ok(())
    }
}

fn check_weights(
    group: &'static str,
    weights: &[(&'static str, f64)],
) -> Result<(), CriteriaError> {
    for &(name, value) in weights {
        if !value.is_finite() {
            return Err(CriteriaError::NotFinite { name, value });
        }
        if value < 0.0 {
            return Err(CriteriaError::NegativeWeight { group, name, value });
        }
    }
    let total: f64 = weights.iter().map(|(_, w)| w).sum();
    if (total - 1.0).abs() > WEIGHT_TOLERANCE {
        return Err(CriteriaError::WeightSum { group, total });
    }
    Ok(())
}
