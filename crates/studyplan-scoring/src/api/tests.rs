use studyplan_core::HardSoftScore;

use super::analysis::{ConstraintAnalysis, ConstraintMatch, Justification, ScoreExplanation};
use super::weight_overrides::ConstraintWeightOverrides;

fn matched(name: &str, ids: &[usize], score: HardSoftScore) -> ConstraintMatch {
    ConstraintMatch {
        constraint_name: name.to_string(),
        score,
        justification: Justification::new(ids.iter().copied(), 1, "test"),
    }
}

#[test]
fn test_analysis_sums_matches() {
    let analysis = ConstraintAnalysis::new(
        "Overlap",
        HardSoftScore::ONE_HARD,
        true,
        vec![
            matched("Overlap", &[0, 1], HardSoftScore::of_hard(-1)),
            matched("Overlap", &[1, 2], HardSoftScore::of_hard(-1)),
        ],
    );
    assert_eq!(analysis.score, HardSoftScore::of_hard(-2));
    assert_eq!(analysis.match_count(), 2);
}

#[test]
fn test_explanation_totals() {
    let hard = ConstraintAnalysis::new(
        "Overlap",
        HardSoftScore::ONE_HARD,
        true,
        vec![matched("Overlap", &[0, 1], HardSoftScore::of_hard(-1))],
    );
    let soft = ConstraintAnalysis::new("Late", HardSoftScore::ONE_SOFT, false, Vec::new());
    let explanation = ScoreExplanation::new(vec![hard, soft]);

    assert_eq!(explanation.score, HardSoftScore::of_hard(-1));
    assert_eq!(explanation.total_match_count(), 1);
    assert_eq!(explanation.non_zero_constraints().len(), 1);
    assert!(explanation.constraint("Late").is_some());
    assert_eq!(explanation.matches_for_session(1).len(), 1);
    assert!(explanation.matches_for_session(5).is_empty());
}

#[test]
fn test_weight_overrides() {
    let mut overrides = ConstraintWeightOverrides::from_pairs([("Overlap", HardSoftScore::of_hard(5))]);
    assert_eq!(overrides.len(), 1);
    assert_eq!(
        overrides.get_or_default("Overlap", HardSoftScore::ONE_HARD),
        HardSoftScore::of_hard(5)
    );
    assert_eq!(
        overrides.get_or_default("Late", HardSoftScore::ONE_SOFT),
        HardSoftScore::ONE_SOFT
    );
    overrides.put("Late", HardSoftScore::of_soft(3));
    assert!(overrides.contains("Late"));
    assert_eq!(overrides.remove("Overlap"), Some(HardSoftScore::of_hard(5)));
    assert!(!overrides.is_empty());
}
