//! Core data model types for rehearse.
//!
//! These are the values an evaluation produces. They are created fresh for
//! every call and handed to the caller in full.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::locale::Locale;

/// Qualitative band derived from a 0-100 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Grade {
    Excellent,
    Good,
    Average,
    Poor,
    VeryPoor,
}

impl Grade {
    /// All grades, best first.
    pub const ALL: [Grade; 5] = [
        Grade::Excellent,
        Grade::Good,
        Grade::Average,
        Grade::Poor,
        Grade::VeryPoor,
    ];

    pub(crate) fn index(self) -> usize {
        match self {
            Grade::Excellent => 0,
            Grade::Good => 1,
            Grade::Average => 2,
            Grade::Poor => 3,
            Grade::VeryPoor => 4,
        }
    }

    /// Human-readable label in the given locale (e.g. "优秀").
    pub fn label(self, locale: Locale) -> &'static str {
        locale.messages().grade(self)
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Grade::Excellent => write!(f, "excellent"),
            Grade::Good => write!(f, "good"),
            Grade::Average => write!(f, "average"),
            Grade::Poor => write!(f, "poor"),
            Grade::VeryPoor => write!(f, "very_poor"),
        }
    }
}

impl FromStr for Grade {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "excellent" | "优秀" => Ok(Grade::Excellent),
            "good" | "良好" => Ok(Grade::Good),
            "average" | "一般" => Ok(Grade::Average),
            "poor" | "较差" => Ok(Grade::Poor),
            "very_poor" | "very-poor" | "差" => Ok(Grade::VeryPoor),
            other => Err(format!("unknown grade: {other}")),
        }
    }
}

/// One of the three scored aspects of an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Aspect {
    KeyPointCoverage,
    Completeness,
    Clarity,
}

impl Aspect {
    /// Aspects in the order they appear in [`EvaluationResult::details`].
    pub const ALL: [Aspect; 3] = [Aspect::KeyPointCoverage, Aspect::Completeness, Aspect::Clarity];

    pub(crate) fn index(self) -> usize {
        match self {
            Aspect::KeyPointCoverage => 0,
            Aspect::Completeness => 1,
            Aspect::Clarity => 2,
        }
    }

    pub fn label(self, locale: Locale) -> &'static str {
        locale.messages().aspect(self)
    }
}

impl fmt::Display for Aspect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Aspect::KeyPointCoverage => write!(f, "key_point_coverage"),
            Aspect::Completeness => write!(f, "completeness"),
            Aspect::Clarity => write!(f, "clarity"),
        }
    }
}

/// Score and description for a single aspect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AspectScore {
    pub aspect: Aspect,
    /// Sub-score in `0..=100`.
    pub score: u32,
    pub description: String,
}

/// Full outcome of evaluating one answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationResult {
    /// Final weighted score in `0..=100`.
    pub score: u32,
    pub grade: Grade,
    /// Overall message followed by the key point clause.
    pub feedback: String,
    /// Coverage, completeness, clarity in that order. Empty when no answer was given.
    pub details: Vec<AspectScore>,
    /// Key points found in the answer, in extraction order.
    #[serde(default)]
    pub matched_points: Vec<String>,
    /// Key points absent from the answer, in extraction order.
    #[serde(default)]
    pub missing_points: Vec<String>,
}

impl EvaluationResult {
    /// Result for an empty or whitespace-only answer.
    pub fn unanswered(locale: Locale) -> Self {
        Self {
            score: 0,
            grade: Grade::VeryPoor,
            feedback: locale.messages().no_answer.to_string(),
            details: Vec::new(),
            matched_points: Vec::new(),
            missing_points: Vec::new(),
        }
    }

    /// Look up the score for one aspect.
    pub fn aspect(&self, aspect: Aspect) -> Option<&AspectScore> {
        self.details.iter().find(|d| d.aspect == aspect)
    }

    /// Whether the evaluation short-circuited on an empty answer.
    pub fn is_unanswered(&self) -> bool {
        self.details.is_empty()
    }
}
