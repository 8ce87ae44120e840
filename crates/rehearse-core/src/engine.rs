//! Answer evaluation engine.
//!
//! Runs the full pipeline for one answer: key point extraction, coverage,
//! completeness, clarity, score combination, and feedback. The evaluator
//! holds only immutable criteria, so one instance can be shared freely
//! between threads.

use serde::{Deserialize, Serialize};

use crate::clarity::{analyze_clarity, ClarityBreakdown};
use crate::completeness::{analyze_completeness, CompletenessBreakdown};
use crate::coverage::{score_coverage, KeyPointCoverage};
use crate::criteria::ScoringCriteria;
use crate::feedback::{clarity_description, completeness_description, generate_feedback};
use crate::grade::{combine_scores, determine_grade};
use crate::keypoints::extract_key_points;
use crate::model::{Aspect, AspectScore, EvaluationResult, Grade};

/// Intermediate values of one evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub key_points: Vec<String>,
    pub coverage: KeyPointCoverage,
    pub completeness: CompletenessBreakdown,
    pub clarity: ClarityBreakdown,
    pub score: u32,
    pub grade: Grade,
}

/// Stateless evaluator parameterized by its scoring criteria.
#[derive(Debug, Clone, Default)]
pub struct AnswerEvaluator {
    criteria: ScoringCriteria,
}

impl AnswerEvaluator {
    pub fn new(criteria: ScoringCriteria) -> Self {
        Self { criteria }
    }

    pub fn criteria(&self) -> &ScoringCriteria {
        &self.criteria
    }

    /// Evaluate a candidate answer against a reference answer.
    ///
    /// Empty or whitespace-only answers short-circuit to a zero score with
    /// no details.
    pub fn evaluate(&self, user_answer: &str, reference: &str) -> EvaluationResult {
        let Some(analysis) = self.analyze(user_answer, reference) else {
            tracing::debug!("empty answer, skipping analysis");
            return EvaluationResult::unanswered(self.criteria.locale);
        };

        let locale = self.criteria.locale;
        let messages = locale.messages();
        let bands = &self.criteria.grades;

        let feedback = generate_feedback(
            analysis.grade,
            &analysis.coverage.missing,
            &self.criteria.feedback,
            locale,
        );

        let details = vec![
            AspectScore {
                aspect: Aspect::KeyPointCoverage,
                score: analysis.coverage.score,
                description: messages.coverage(
                    analysis.coverage.matched.len(),
                    analysis.coverage.total(),
                ),
            },
            AspectScore {
                aspect: Aspect::Completeness,
                score: analysis.completeness.score,
                description: completeness_description(analysis.completeness.score, bands, locale)
                    .to_string(),
            },
            AspectScore {
                aspect: Aspect::Clarity,
                score: analysis.clarity.score,
                description: clarity_description(analysis.clarity.score, bands, locale)
                    .to_string(),
            },
        ];

        EvaluationResult {
            score: analysis.score,
            grade: analysis.grade,
            feedback,
            details,
            matched_points: analysis.coverage.matched,
            missing_points: analysis.coverage.missing,
        }
    }

    /// Compute every intermediate score, or `None` for an empty answer.
    pub fn analyze(&self, user_answer: &str, reference: &str) -> Option<Analysis> {
        if user_answer.trim().is_empty() {
            return None;
        }

        let criteria = &self.criteria;
        let key_points = extract_key_points(reference, &criteria.key_points);
        if key_points.is_empty() {
            tracing::warn!("reference answer yields no key points, coverage will be 0");
        }

        let coverage = score_coverage(user_answer, &key_points);
        let completeness = analyze_completeness(user_answer, reference, &criteria.completeness);
        let clarity = analyze_clarity(user_answer, &criteria.clarity);

        let score = combine_scores(
            coverage.score,
            completeness.score,
            clarity.score,
            &criteria.weights,
        );
        let grade = determine_grade(score, &criteria.grades);

        tracing::debug!(
            key_points = key_points.len(),
            matched = coverage.matched.len(),
            coverage = coverage.score,
            completeness = completeness.score,
            clarity = clarity.score,
            score,
            %grade,
            "answer evaluated"
        );

        Some(Analysis {
            key_points,
            coverage,
            completeness,
            clarity,
            score,
            grade,
        })
    }
}

/// Evaluate with the default criteria.
pub fn evaluate_answer(user_answer: &str, reference: &str) -> EvaluationResult {
    AnswerEvaluator::default().evaluate(user_answer, reference)
}
