//! Aggregate statistics over a batch of evaluation results.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::{Aspect, EvaluationResult, Grade};

/// Summary of many evaluations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreSummary {
    /// Number of results summarized.
    pub total: usize,
    /// Results that were not empty answers.
    pub answered: usize,
    /// Mean final score; empty answers count as 0.
    pub mean_score: f64,
    pub median_score: f64,
    pub min_score: u32,
    pub max_score: u32,
    /// How many results landed in each grade.
    pub grade_distribution: BTreeMap<Grade, usize>,
    /// Mean sub-score per aspect over answered results.
    pub aspect_means: BTreeMap<Aspect, f64>,
}

/// Summarize a batch. An empty batch yields all zeros.
pub fn compute_summary(results: &[EvaluationResult]) -> ScoreSummary {
    let mut scores: Vec<u32> = results.iter().map(|r| r.score).collect();
    scores.sort_unstable();

    let mut grade_distribution = BTreeMap::new();
    for r in results {
        *grade_distribution.entry(r.grade).or_insert(0) += 1;
    }

    let answered: Vec<&EvaluationResult> = results.iter().filter(|r| !r.is_unanswered()).collect();
    let mut aspect_means = BTreeMap::new();
    if !answered.is_empty() {
        for aspect in Aspect::ALL {
            let sum: u32 = answered
                .iter()
                .filter_map(|r| r.aspect(aspect))
                .map(|a| a.score)
                .sum();
            aspect_means.insert(aspect, sum as f64 / answered.len() as f64);
        }
    }

    ScoreSummary {
        total: results.len(),
        answered: answered.len(),
        mean_score: mean(&scores),
        median_score: median(&scores),
        min_score: scores.first().copied().unwrap_or(0),
        max_score: scores.last().copied().unwrap_or(0),
        grade_distribution,
        aspect_means,
    }
}

fn mean(scores: &[u32]) -> f64 {
    if scores.is_empty() {
        return 0.0;
    }
    scores.iter().map(|&s| s as f64).sum::<f64>() / scores.len() as f64
}

/// Median of an already sorted slice.
fn median(sorted: &[u32]) -> f64 {
    let n = sorted.len();
    match n {
        0 => 0.0,
        _ if n % 2 == 1 => sorted[n / 2] as f64,
        _ => (sorted[n / 2 - 1] as f64 + sorted[n / 2] as f64) / 2.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::Locale;
    use crate::model::AspectScore;

    fn result(score: u32, grade: Grade, aspects: [u32; 3]) -> EvaluationResult {
        EvaluationResult {
            score,
            grade,
            feedback: String::new(),
            details: Aspect::ALL
                .iter()
                .zip(aspects)
                .map(|(&aspect, score)| AspectScore {
                    aspect,
                    score,
                    description: String::new(),
                })
                .collect(),
            matched_points: vec![],
            missing_points: vec![],
        }
    }

    #[test]
    fn empty_batch() {
        let summary = compute_summary(&[]);
        assert_eq!(summary.total, 0);
        assert_eq!(summary.mean_score, 0.0);
        assert_eq!(summary.median_score, 0.0);
        assert!(summary.grade_distribution.is_empty());
        assert!(summary.aspect_means.is_empty());
    }

    #[test]
    fn mixed_batch() {
        let results = vec![
            result(92, Grade::Excellent, [100, 90, 60]),
            result(64, Grade::Average, [50, 80, 100]),
            result(80, Grade::Good, [90, 60, 80]),
            EvaluationResult::unanswered(Locale::Zh),
        ];
        let summary = compute_summary(&results);
        assert_eq!(summary.total, 4);
        assert_eq!(summary.answered, 3);
        assert_eq!(summary.mean_score, 59.0);
        assert_eq!(summary.median_score, 72.0);
        assert_eq!(summary.min_score, 0);
        assert_eq!(summary.max_score, 92);
        assert_eq!(summary.grade_distribution[&Grade::VeryPoor], 1);
        assert_eq!(summary.grade_distribution[&Grade::Good], 1);
        assert!(!summary.grade_distribution.contains_key(&Grade::Poor));
        assert_eq!(summary.aspect_means[&Aspect::KeyPointCoverage], 80.0);
        assert_eq!(summary.aspect_means[&Aspect::Clarity], 80.0);
    }

    #[test]
    fn odd_median() {
        let results = vec![
            result(10, Grade::VeryPoor, [0, 0, 0]),
            result(50, Grade::Poor, [0, 0, 0]),
            result(70, Grade::Average, [0, 0, 0]),
        ];
        assert_eq!(compute_summary(&results).median_score, 50.0);
    }
}
