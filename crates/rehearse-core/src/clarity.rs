//! Clarity heuristic based on sentence length and punctuation density.

use serde::{Deserialize, Serialize};

use crate::criteria::ClarityRules;
use crate::grade::to_score;
use crate::keypoints::{char_len, SENTENCE_TERMINATORS};

/// Marks counted towards punctuation density.
pub const PUNCTUATION: [char; 12] = [
    ',', '.', ';', ':', '!', '?', '，', '。', '；', '：', '！', '？',
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClarityBreakdown {
    pub sentence_count: usize,
    pub avg_sentence_length: f64,
    pub sentence_length_score: f64,
    pub punctuation_density: f64,
    pub punctuation_score: f64,
    pub score: u32,
}

pub fn analyze_clarity(user_answer: &str, rules: &ClarityRules) -> ClarityBreakdown {
    let lengths: Vec<usize> = user_answer
        .split(SENTENCE_TERMINATORS)
        .filter(|s| !s.trim().is_empty())
        .map(char_len)
        .collect();
    let avg_sentence_length = lengths.iter().sum::<usize>() as f64 / lengths.len().max(1) as f64;
    let sentence_length_score = sentence_length_score(avg_sentence_length, rules);

    let total_len = char_len(user_answer);
    let marks = user_answer.chars().filter(|c| PUNCTUATION.contains(c)).count();
    let punctuation_density = if total_len == 0 {
        0.0
    } else {
        marks as f64 / total_len as f64
    };
    let deviation = (punctuation_density - rules.ideal_punctuation_density).abs();
    let punctuation_score = (100.0 - deviation * rules.punctuation_penalty).max(0.0);

    let score = to_score(
        sentence_length_score * rules.sentence_length_weight
            + punctuation_score * rules.punctuation_weight,
    );

    ClarityBreakdown {
        sentence_count: lengths.len(),
        avg_sentence_length,
        sentence_length_score,
        punctuation_density,
        punctuation_score,
        score,
    }
}

fn sentence_length_score(avg: f64, rules: &ClarityRules) -> f64 {
    if avg > rules.ideal_sentence_max {
        (100.0 - (avg - rules.ideal_sentence_max) * rules.long_sentence_penalty).max(0.0)
    } else if avg < rules.ideal_sentence_min {
        (avg * rules.short_sentence_factor).max(0.0)
    } else {
        100.0
    }
}
