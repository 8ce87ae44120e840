//! Property tests for the evaluation engine.

use proptest::prelude::*;
use rehearse_core::model::Grade;
use rehearse_core::{evaluate_answer, AnswerEvaluator};

fn reference_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z]{3,8}( [a-z]{3,8}){1,4}", 0..8).prop_map(|lines| {
        lines
            .iter()
            .enumerate()
            .map(|(i, line)| format!("{}. {line}", i + 1))
            .collect::<Vec<_>>()
            .join("\n")
    })
}

proptest! {
    #[test]
    fn empty_answer_always_scores_zero(reference in ".{0,200}") {
        let result = evaluate_answer("", &reference);
        prop_assert_eq!(result.score, 0);
        prop_assert_eq!(result.grade, Grade::VeryPoor);
        prop_assert!(result.details.is_empty());
    }

    #[test]
    fn scores_stay_in_range(answer in ".{0,300}", reference in ".{0,300}") {
        let result = evaluate_answer(&answer, &reference);
        prop_assert!(result.score <= 100);
        for detail in &result.details {
            prop_assert!(detail.score <= 100);
        }
    }

    #[test]
    fn evaluation_is_deterministic(answer in ".{0,200}", reference in reference_strategy()) {
        let evaluator = AnswerEvaluator::default();
        prop_assert_eq!(
            evaluator.evaluate(&answer, &reference),
            evaluator.evaluate(&answer, &reference)
        );
    }

    #[test]
    fn identical_answer_covers_everything(reference in reference_strategy()) {
        prop_assume!(!reference.trim().is_empty());
        let analysis = AnswerEvaluator::default().analyze(&reference, &reference).unwrap();
        if !analysis.key_points.is_empty() {
            prop_assert_eq!(analysis.coverage.ratio, 1.0);
            prop_assert!(matches!(analysis.grade, Grade::Good | Grade::Excellent));
        }
        prop_assert_eq!(analysis.completeness.length_score, 100);
    }

    #[test]
    fn adding_a_key_point_never_lowers_coverage(
        reference in reference_strategy(),
        answer in "[a-z][a-z ]{0,79}",
        pick in any::<prop::sample::Index>(),
    ) {
        let evaluator = AnswerEvaluator::default();
        let before = evaluator.analyze(&answer, &reference).unwrap();
        prop_assume!(!before.key_points.is_empty());

        let point = pick.get(&before.key_points);
        let extended = format!("{answer} {point}");
        let after = evaluator.analyze(&extended, &reference).unwrap();
        prop_assert!(after.coverage.score >= before.coverage.score);
    }
}
