//! Natural-language feedback for an evaluated answer.

use crate::criteria::{FeedbackRules, GradeBands};
use crate::locale::Locale;
use crate::model::Grade;

/// Overall sentence for the grade followed by the key point clause.
pub fn generate_feedback(
    grade: Grade,
    missing_points: &[String],
    rules: &FeedbackRules,
    locale: Locale,
) -> String {
    let messages = locale.messages();
    let mut feedback = String::from(messages.overall[grade.index()]);

    if missing_points.is_empty() {
        feedback.push_str(messages.all_covered);
        return feedback;
    }

    let listed = missing_points
        .iter()
        .take(rules.max_missing_listed)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(messages.separator);

    feedback.push_str(messages.missing_prefix);
    feedback.push_str(&listed);
    if missing_points.len() > rules.max_missing_listed {
        feedback.push_str(messages.and_others);
    }
    feedback.push_str(messages.missing_suffix);
    feedback
}

pub fn completeness_description(score: u32, bands: &GradeBands, locale: Locale) -> &'static str {
    locale.messages().completeness[bands.band(score).index()]
}

pub fn clarity_description(score: u32, bands: &GradeBands, locale: Locale) -> &'static str {
    locale.messages().clarity[bands.band(score).index()]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn missing(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn all_points_covered() {
        let text = generate_feedback(Grade::Excellent, &[], &FeedbackRules::default(), Locale::Zh);
        assert_eq!(text, "您的回答非常出色！ 您已覆盖所有关键点！");
    }

    #[test]
    fn lists_up_to_three_missing_points() {
        let text = generate_feedback(
            Grade::Average,
            &missing(&["持久化机制", "主从复制"]),
            &FeedbackRules::default(),
            Locale::Zh,
        );
        assert_eq!(text, "您的回答基本合格。 您可以考虑补充以下关键点：持久化机制、主从复制。");
    }

    #[test]
    fn truncates_with_and_others_marker() {
        let text = generate_feedback(
            Grade::VeryPoor,
            &missing(&["point one", "point two", "point three", "point four"]),
            &FeedbackRules::default(),
            Locale::En,
        );
        assert_eq!(
            text,
            "Your answer has a lot of room for improvement. \
             Consider adding these key points: point one; point two; point three and others."
        );
    }

    #[test]
    fn exactly_three_missing_has_no_marker() {
        let text = generate_feedback(
            Grade::Poor,
            &missing(&["甲乙丙丁戊己", "庚辛壬癸子丑", "寅卯辰巳午未"]),
            &FeedbackRules::default(),
            Locale::Zh,
        );
        assert!(text.ends_with("寅卯辰巳午未。"));
        assert!(!text.contains('等'));
    }

    #[test]
    fn aspect_descriptions_use_grade_bands() {
        let bands = GradeBands::default();
        assert_eq!(completeness_description(90, &bands, Locale::Zh), "回答非常完整");
        assert_eq!(completeness_description(39, &bands, Locale::Zh), "回答严重不完整");
        assert_eq!(clarity_description(75, &bands, Locale::Zh), "表述比较清晰");
        assert_eq!(clarity_description(0, &bands, Locale::Zh), "表述混乱");
        assert_eq!(clarity_description(60, &bands, Locale::En), "mostly clear");
    }
}
