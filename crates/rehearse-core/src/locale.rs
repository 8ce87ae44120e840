//! Message catalogs for grades, aspects, and feedback.
//!
//! The default catalog reproduces the Chinese wording the question banks are
//! written in. Locale only changes text, never numbers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::model::{Aspect, Grade};

/// Language used for generated feedback.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Zh,
    En,
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::Zh => write!(f, "zh"),
            Locale::En => write!(f, "en"),
        }
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "zh" | "zh-cn" | "chinese" => Ok(Locale::Zh),
            "en" | "en-us" | "english" => Ok(Locale::En),
            other => Err(format!("unknown locale: {other}")),
        }
    }
}

/// Static strings for one locale. Arrays indexed by band run from
/// `Excellent` to `VeryPoor`.
#[derive(Debug)]
pub struct Messages {
    pub grades: [&'static str; 5],
    pub overall: [&'static str; 5],
    pub completeness: [&'static str; 5],
    pub clarity: [&'static str; 5],
    pub aspects: [&'static str; 3],
    pub no_answer: &'static str,
    pub all_covered: &'static str,
    pub missing_prefix: &'static str,
    pub missing_suffix: &'static str,
    pub separator: &'static str,
    pub and_others: &'static str,
    coverage_template: &'static str,
}

const ZH: Messages = Messages {
    grades: ["优秀", "良好", "一般", "较差", "差"],
    overall: [
        "您的回答非常出色！",
        "您的回答很好！",
        "您的回答基本合格。",
        "您的回答需要改进。",
        "您的回答有较大改进空间。",
    ],
    completeness: [
        "回答非常完整",
        "回答比较完整",
        "回答基本完整",
        "回答不够完整",
        "回答严重不完整",
    ],
    clarity: [
        "表述非常清晰",
        "表述比较清晰",
        "表述基本清晰",
        "表述不够清晰",
        "表述混乱",
    ],
    aspects: ["关键点覆盖", "答案完整性", "表述清晰度"],
    no_answer: "未提供答案",
    all_covered: " 您已覆盖所有关键点！",
    missing_prefix: " 您可以考虑补充以下关键点：",
    missing_suffix: "。",
    separator: "、",
    and_others: "等",
    coverage_template: "包含了{matched}/{total}个关键点",
};

const EN: Messages = Messages {
    grades: ["Excellent", "Good", "Average", "Poor", "Very poor"],
    overall: [
        "Outstanding answer!",
        "Good answer!",
        "Acceptable answer.",
        "Your answer needs improvement.",
        "Your answer has a lot of room for improvement.",
    ],
    completeness: [
        "very complete",
        "fairly complete",
        "mostly complete",
        "not complete enough",
        "severely incomplete",
    ],
    clarity: [
        "very clear",
        "fairly clear",
        "mostly clear",
        "not clear enough",
        "confused",
    ],
    aspects: ["Key point coverage", "Completeness", "Clarity"],
    no_answer: "no answer provided",
    all_covered: " You covered every key point!",
    missing_prefix: " Consider adding these key points: ",
    missing_suffix: ".",
    separator: "; ",
    and_others: " and others",
    coverage_template: "covered {matched}/{total} key points",
};

impl Locale {
    pub fn messages(self) -> &'static Messages {
        match self {
            Locale::Zh => &ZH,
            Locale::En => &EN,
        }
    }
}

impl Messages {
    pub fn grade(&self, grade: Grade) -> &'static str {
        self.grades[grade.index()]
    }

    pub fn aspect(&self, aspect: Aspect) -> &'static str {
        self.aspects[aspect.index()]
    }

    pub fn coverage(&self, matched: usize, total: usize) -> String {
        self.coverage_template
            .replace("{matched}", &matched.to_string())
            .replace("{total}", &total.to_string())
    }
}
