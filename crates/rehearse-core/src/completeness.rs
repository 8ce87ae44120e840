//! Completeness: answer length and paragraph structure against the reference.

use serde::{Deserialize, Serialize};

use crate::criteria::CompletenessRules;
use crate::grade::to_score;
use crate::keypoints::char_len;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletenessBreakdown {
    /// Capped `len(user) / len(reference)`.
    pub length_ratio: f64,
    pub length_score: u32,
    pub user_paragraphs: usize,
    pub reference_paragraphs: usize,
    pub structure_score: u32,
    pub score: u32,
}

/// Number of segments produced by splitting on runs of newlines.
///
/// Leading and trailing runs still delimit an (empty) segment, so the count
/// is never zero.
pub fn paragraph_count(text: &str) -> usize {
    let mut runs = 0;
    let mut previous_newline = false;
    for c in text.chars() {
        let newline = c == '\n';
        if newline && !previous_newline {
            runs += 1;
        }
        previous_newline = newline;
    }
    runs + 1
}

pub fn analyze_completeness(
    user_answer: &str,
    reference: &str,
    rules: &CompletenessRules,
) -> CompletenessBreakdown {
    let user_len = char_len(user_answer);
    let reference_len = char_len(reference);

    let length_ratio = if reference_len == 0 {
        0.0
    } else {
        (user_len as f64 / reference_len as f64).min(rules.max_length_ratio)
    };
    let length_score = to_score(length_ratio * 100.0);

    let user_paragraphs = paragraph_count(user_answer);
    let reference_paragraphs = paragraph_count(reference);
    let structure_ratio = if reference_paragraphs == 0 {
        0.0
    } else {
        user_paragraphs as f64 / reference_paragraphs as f64
    };
    let structure_score = to_score(structure_ratio * 100.0);

    let score = to_score(
        length_score as f64 * rules.length_weight
            + structure_score as f64 * rules.structure_weight,
    );

    CompletenessBreakdown {
        length_ratio,
        length_score,
        user_paragraphs,
        reference_paragraphs,
        structure_score,
        score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyze(user: &str, reference: &str) -> CompletenessBreakdown {
        analyze_completeness(user, reference, &CompletenessRules::default())
    }

    #[test]
    fn paragraph_runs() {
        assert_eq!(paragraph_count(""), 1);
        assert_eq!(paragraph_count("one line"), 1);
        assert_eq!(paragraph_count("a\nb"), 2);
        assert_eq!(paragraph_count("a\n\n\nb"), 2);
        assert_eq!(paragraph_count("\na\n"), 3);
    }

    #[test]
    fn identical_text_is_complete() {
        let text = "first paragraph\n\nsecond paragraph";
        let result = analyze(text, text);
        assert_eq!(result.length_score, 100);
        assert_eq!(result.structure_score, 100);
        assert_eq!(result.score, 100);
    }

    #[test]
    fn longer_answers_are_capped() {
        let result = analyze(&"x".repeat(300), &"y".repeat(100));
        assert_eq!(result.length_ratio, 1.5);
        assert_eq!(result.length_score, 100);
    }

    #[test]
    fn half_length_single_paragraph() {
        // 10 of 20 chars, 1 of 2 paragraphs: 50 * 0.7 + 50 * 0.3 = 50
        let result = analyze("abcdefghij", "abcdefghij\nabcdefghi");
        assert_eq!(result.length_score, 50);
        assert_eq!(result.structure_score, 50);
        assert_eq!(result.score, 50);
    }

    #[test]
    fn weighted_combination_rounds() {
        // 1 of 3 chars -> 33, 1 of 1 paragraph -> 100: 23.1 + 30 = 53.1
        let result = analyze("a", "abc");
        assert_eq!(result.length_score, 33);
        assert_eq!(result.score, 53);
    }

    #[test]
    fn empty_reference_guards_length_ratio() {
        let result = analyze("some answer", "");
        assert_eq!(result.length_ratio, 0.0);
        assert_eq!(result.length_score, 0);
        assert_eq!(result.structure_score, 100);
        assert_eq!(result.score, 30);
    }
}
