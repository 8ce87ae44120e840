//! Key point extraction from reference answers.
//!
//! Reference answers in a question bank are usually itemized lists. Each list
//! line is stripped of its enumeration marker and split on commas and
//! semicolons into atomic claims. Prose answers that produce too few claims
//! are split into sentences instead.

use std::sync::LazyLock;

use regex::Regex;

use crate::criteria::KeyPointRules;

/// ASCII and CJK sentence terminators.
pub const SENTENCE_TERMINATORS: [char; 6] = ['.', '。', '!', '！', '?', '？'];

/// ASCII and CJK list separators inside a single line.
pub const LIST_SEPARATORS: [char; 4] = [',', ';', '，', '；'];

/// Leading "1.", "2-", "*", "1.2." style markers.
static ENUMERATION_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9.\-*]+\s*").expect("enumeration marker pattern is valid"));

/// Length in Unicode scalar values, which is how every length threshold is measured.
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Remove a leading enumeration marker from an already trimmed line.
pub fn strip_enumeration(line: &str) -> &str {
    match ENUMERATION_MARKER.find(line) {
        Some(m) => &line[m.end()..],
        None => line,
    }
}

/// Derive the key points of a reference answer.
///
/// May return an empty list when nothing in the reference is long enough.
pub fn extract_key_points(reference: &str, rules: &KeyPointRules) -> Vec<String> {
    let mut points = Vec::new();

    for line in reference.split('\n') {
        let clean = strip_enumeration(line.trim());
        let len = char_len(clean);
        if len <= rules.min_line_len || len >= rules.max_line_len {
            continue;
        }

        points.extend(
            clean
                .split(LIST_SEPARATORS)
                .map(str::trim)
                .filter(|fragment| char_len(fragment) > rules.min_fragment_len)
                .map(String::from),
        );
    }

    if points.len() < rules.fallback_threshold {
        tracing::debug!(
            found = points.len(),
            threshold = rules.fallback_threshold,
            "too few list key points, splitting reference into sentences"
        );
        return sentence_points(reference, rules);
    }

    points
}

fn sentence_points(reference: &str, rules: &KeyPointRules) -> Vec<String> {
    reference
        .split(SENTENCE_TERMINATORS)
        .map(str::trim)
        .filter(|sentence| char_len(sentence) > rules.min_fragment_len)
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(reference: &str) -> Vec<String> {
        extract_key_points(reference, &KeyPointRules::default())
    }

    #[test]
    fn strips_enumeration_markers() {
        assert_eq!(strip_enumeration("1. 字符串类型"), "字符串类型");
        assert_eq!(strip_enumeration("- bullet point"), "bullet point");
        assert_eq!(strip_enumeration("* starred"), "starred");
        assert_eq!(strip_enumeration("2.1.3 nested"), "nested");
        assert_eq!(strip_enumeration("no marker here"), "no marker here");
        assert_eq!(strip_enumeration("10"), "");
    }

    #[test]
    fn marker_only_matches_line_start() {
        assert!(ENUMERATION_MARKER.is_match("3- item"));
        assert!(!ENUMERATION_MARKER.is_match("item 3."));
        assert_eq!(strip_enumeration("Java 8. features"), "Java 8. features");
    }

    #[test]
    fn itemized_reference_splits_on_separators() {
        let reference = "1. Strings store text, numbers\n\
                         2. Lists keep insertion order\n\
                         3. Sets hold unique members；无序集合元素\n\
                         4. ok";
        assert_eq!(
            extract(reference),
            vec![
                "Strings store text",
                "numbers",
                "Lists keep insertion order",
                "Sets hold unique members",
                "无序集合元素",
            ]
        );
    }

    #[test]
    fn short_fragments_are_dropped() {
        let reference = "- alpha beta, tiny\n- gamma delta\n- epsilon zeta";
        assert_eq!(
            extract(reference),
            vec!["alpha beta", "gamma delta", "epsilon zeta"]
        );
    }

    #[test]
    fn overlong_lines_are_skipped() {
        let long_line = "x".repeat(100);
        let reference = format!("{long_line}\n- first point\n- second point\n- third point");
        assert_eq!(
            extract(&reference),
            vec!["first point", "second point", "third point"]
        );
    }

    #[test]
    fn prose_falls_back_to_sentences() {
        let reference = "Redis keeps data in memory. It can persist to disk! Why use it? Speed.";
        assert_eq!(
            extract(reference),
            vec![
                "Redis keeps data in memory",
                "It can persist to disk",
                "Why use it",
            ]
        );
    }

    #[test]
    fn fallback_discards_list_points() {
        // Two list points are not enough; the whole text is re-split on terminators.
        let reference = "1. 优点是速度快\n2. 缺点是占用内存";
        assert_eq!(extract(reference), vec!["优点是速度快\n2", "缺点是占用内存"]);
    }

    #[test]
    fn cjk_terminators_split_sentences() {
        let reference = "控制反转降低耦合度。依赖注入是实现方式！容器负责创建对象？";
        assert_eq!(
            extract(reference),
            vec!["控制反转降低耦合度", "依赖注入是实现方式", "容器负责创建对象"]
        );
    }

    #[test]
    fn empty_and_tiny_references_yield_nothing() {
        assert!(extract("").is_empty());
        assert!(extract("short").is_empty());
        assert!(extract("a.\nb.\nc.").is_empty());
    }

    #[test]
    fn length_is_counted_in_characters() {
        // Six CJK characters is above the threshold even though it is 18 bytes.
        assert_eq!(char_len("优点是速度快"), 6);
        let reference = "- 优点是速度快\n- 缺点是占用内存\n- 适合做缓存层";
        assert_eq!(
            extract(reference),
            vec!["优点是速度快", "缺点是占用内存", "适合做缓存层"]
        );
    }
}
