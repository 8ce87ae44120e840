//! Key point coverage scoring.

use serde::{Deserialize, Serialize};

use crate::grade::to_score;

/// Which key points a candidate answer contains.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyPointCoverage {
    pub matched: Vec<String>,
    pub missing: Vec<String>,
    /// `matched / total`, or 0 when there are no key points.
    pub ratio: f64,
    /// `round(ratio * 100)`.
    pub score: u32,
}

impl KeyPointCoverage {
    pub fn total(&self) -> usize {
        self.matched.len() + self.missing.len()
    }
}

/// Test every key point for case-insensitive containment in the answer.
///
/// Matching is plain substring search; no whitespace or punctuation
/// normalization is applied to either side.
pub fn score_coverage(user_answer: &str, key_points: &[String]) -> KeyPointCoverage {
    let haystack = user_answer.to_lowercase();

    let (matched, missing): (Vec<String>, Vec<String>) = key_points
        .iter()
        .cloned()
        .partition(|point| haystack.contains(&point.to_lowercase()));

    let ratio = if key_points.is_empty() {
        0.0
    } else {
        matched.len() as f64 / key_points.len() as f64
    };

    KeyPointCoverage {
        matched,
        missing,
        ratio,
        score: to_score(ratio * 100.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn counts_case_insensitive_matches() {
        let kp = points(&["Spring Core", "Spring AOP", "Spring MVC", "Spring ORM"]);
        let coverage = score_coverage("spring core and SPRING aop", &kp);
        assert_eq!(coverage.matched, points(&["Spring Core", "Spring AOP"]));
        assert_eq!(coverage.missing, points(&["Spring MVC", "Spring ORM"]));
        assert_eq!(coverage.ratio, 0.5);
        assert_eq!(coverage.score, 50);
        assert_eq!(coverage.total(), 4);
    }

    #[test]
    fn one_of_three_rounds() {
        let kp = points(&["first claim", "second claim", "third claim"]);
        assert_eq!(score_coverage("first claim", &kp).score, 33);
        assert_eq!(score_coverage("first claim, second claim", &kp).score, 67);
    }

    #[test]
    fn no_key_points_means_zero_coverage() {
        let coverage = score_coverage("anything at all", &[]);
        assert_eq!(coverage.ratio, 0.0);
        assert_eq!(coverage.score, 0);
        assert_eq!(coverage.total(), 0);
    }

    #[test]
    fn punctuation_differences_do_not_match() {
        let kp = points(&["速度快，占用内存"]);
        assert_eq!(score_coverage("速度快, 占用内存", &kp).score, 0);
    }
}
