use studyplan_core::HardSoftScore;
use studyplan_test::{task, task_with_break, time, ScheduleBuilder};

use super::*;
use crate::api::constraint_set::{ConstraintSet, IncrementalConstraint};

fn two_hour_tasks() -> ScheduleBuilder {
    ScheduleBuilder::new().task(task("A", 2.0, Some(10), 1.0))
}

#[test]
fn test_unassigned_schedule_scores_zero() {
    let schedule = ScheduleBuilder::new()
        .task(task("A", 4.0, Some(3), 1.0))
        .task(task("B", 2.0, Some(5), 2.0))
        .full_day_event(1)
        .build();
    let constraints = default_constraints();
    assert_eq!(constraints.evaluate_all(&schedule), HardSoftScore::ZERO);
}

#[test]
fn test_overlapping_sessions() {
    let schedule = two_hour_tasks()
        .assign(0, 1, time(9, 0))
        .assign(1, 1, time(9, 30))
        .build();
    let constraints = default_constraints();
    assert_eq!(constraints.0.evaluate(&schedule), HardSoftScore::of_hard(-1));
    assert_eq!(constraints.3.evaluate(&schedule), HardSoftScore::ZERO);
    assert_eq!(constraints.4.evaluate(&schedule), HardSoftScore::ZERO);
    assert_eq!(constraints.5.evaluate(&schedule), HardSoftScore::ZERO);
}

#[test]
fn test_sessions_on_different_dates_never_conflict() {
    let schedule = two_hour_tasks()
        .assign(0, 1, time(9, 0))
        .assign(1, 2, time(9, 0))
        .build();
    let score = default_constraints().evaluate_all(&schedule);
    assert_eq!(score.hard(), 0);
}

#[test]
fn test_deadline_lateness_ten_points_per_day() {
    let schedule = ScheduleBuilder::new()
        .task(task("A", 1.0, Some(10), 1.0))
        .days(20)
        .assign(0, 13, time(9, 0))
        .build();
    let lateness = default_constraints().1;
    assert_eq!(lateness.evaluate(&schedule), HardSoftScore::of_soft(-30));
}

#[test]
fn test_deadline_lateness_needs_date_and_deadline() {
    let on_time = ScheduleBuilder::new()
        .task(task("A", 1.0, Some(10), 1.0))
        .assign(0, 10, time(9, 0))
        .build();
    let no_deadline = ScheduleBuilder::new()
        .task(task("A", 1.0, None, 1.0))
        .assign(0, 13, time(9, 0))
        .build();
    let date_only = ScheduleBuilder::new()
        .task(task("A", 1.0, Some(2), 1.0))
        .assign_date(0, 4)
        .build();
    let lateness = default_constraints().1;
    assert_eq!(lateness.evaluate(&on_time), HardSoftScore::ZERO);
    assert_eq!(lateness.evaluate(&no_deadline), HardSoftScore::ZERO);
    assert_eq!(lateness.evaluate(&date_only), HardSoftScore::of_soft(-20));
}

#[test]
fn test_fixed_event_overlap() {
    let overlapping = ScheduleBuilder::new()
        .task(task("A", 1.0, None, 1.0))
        .fixed_event(1, time(9, 0), time(10, 0))
        .assign(0, 1, time(9, 30))
        .build();
    let touching = ScheduleBuilder::new()
        .task(task("A", 1.0, None, 1.0))
        .fixed_event(1, time(9, 0), time(10, 0))
        .assign(0, 1, time(10, 0))
        .build();
    let full_day = ScheduleBuilder::new()
        .task(task("A", 1.0, None, 1.0))
        .full_day_event(1)
        .assign(0, 1, time(15, 0))
        .build();
    let rule = default_constraints().2;
    assert_eq!(rule.evaluate(&overlapping), HardSoftScore::of_hard(-1));
    assert_eq!(rule.evaluate(&touching), HardSoftScore::ZERO);
    assert_eq!(rule.evaluate(&full_day), HardSoftScore::of_hard(-1));
}

#[test]
fn test_simultaneous_sessions_with_different_lengths() {
    let schedule = ScheduleBuilder::new()
        .task(task("A", 1.0, None, 1.0))
        .task(task("B", 2.0, None, 2.0))
        .assign(0, 1, time(9, 0))
        .assign(1, 1, time(9, 0))
        .build();
    let constraints = default_constraints();
    assert_eq!(constraints.3.evaluate(&schedule), HardSoftScore::of_hard(-1));
    assert_eq!(constraints.0.evaluate(&schedule), HardSoftScore::of_hard(-1));
}

#[test]
fn test_duplicate_time_slot_counts_groups() {
    let schedule = ScheduleBuilder::new()
        .task(task("A", 3.0, None, 1.0))
        .task(task("B", 2.0, None, 1.0))
        .assign(0, 1, time(9, 0))
        .assign(1, 1, time(9, 0))
        .assign(2, 1, time(9, 0))
        .assign(3, 2, time(14, 0))
        .assign(4, 2, time(14, 0))
        .build();
    let constraints = default_constraints();
    assert_eq!(constraints.4.evaluate(&schedule), HardSoftScore::of_hard(-2));
    assert_eq!(constraints.4.match_count(&schedule), 2);
    // Pairs: three on day 1 plus one on day 2
    assert_eq!(constraints.3.evaluate(&schedule), HardSoftScore::of_hard(-4));
}

#[test]
fn test_minimum_break_between_sessions() {
    let build = |start| {
        ScheduleBuilder::new()
            .task(task("A", 2.0, None, 1.0))
            .window(time(8, 0), time(22, 0), 15)
            .assign(0, 1, time(9, 0))
            .assign(1, 1, start)
            .build()
    };
    let rule = default_constraints().5;
    assert_eq!(rule.evaluate(&build(time(10, 0))), HardSoftScore::of_hard(-1));
    assert_eq!(rule.evaluate(&build(time(10, 15))), HardSoftScore::of_hard(-1));
    assert_eq!(rule.evaluate(&build(time(10, 30))), HardSoftScore::ZERO);
    // Other direction: second session ends at 8:50, 10 minutes before 9:00
    assert_eq!(rule.evaluate(&build(time(7, 50))), HardSoftScore::of_hard(-1));
    // Overlap is not a break violation
    assert_eq!(rule.evaluate(&build(time(9, 30))), HardSoftScore::ZERO);
}

#[test]
fn test_break_length_follows_window() {
    let schedule = ScheduleBuilder::new()
        .task(task("A", 2.0, None, 1.0))
        .window(time(8, 0), time(22, 0), 45)
        .assign(0, 1, time(9, 0))
        .assign(1, 1, time(10, 30))
        .build();
    let rule = default_constraints().5;
    assert_eq!(rule.evaluate(&schedule), HardSoftScore::of_hard(-1));
}

#[test]
fn test_preferred_hours() {
    let schedule = ScheduleBuilder::new()
        .task(task("A", 3.0, None, 1.0))
        .assign(0, 1, time(21, 30))
        .assign(1, 2, time(7, 0))
        .assign(2, 3, time(21, 0))
        .build();
    let rule = default_constraints().6;
    assert_eq!(rule.evaluate(&schedule), HardSoftScore::of_soft(-2));
}

#[test]
fn test_distribution_penalizes_clustering() {
    let schedule = ScheduleBuilder::new()
        .task(task("A", 3.0, Some(10), 1.0))
        .assign(0, 1, time(8, 0))
        .assign(1, 1, time(10, 0))
        .assign(2, 1, time(12, 0))
        .build();
    // Ideal offsets 3, 6, 9 from tomorrow: drift 4 + 9 + 14, clustering 5 + 5
    let rule = default_constraints().7;
    assert_eq!(rule.evaluate(&schedule), HardSoftScore::of_soft(-37));
}

#[test]
fn test_distribution_even_spread_is_free() {
    let schedule = ScheduleBuilder::new()
        .task(task("A", 3.0, Some(10), 1.0))
        .assign(0, 4, time(8, 0))
        .assign(1, 7, time(8, 0))
        .assign(2, 10, time(8, 0))
        .build();
    let rule = default_constraints().7;
    assert_eq!(rule.evaluate(&schedule), HardSoftScore::ZERO);
}

#[test]
fn test_distribution_drift() {
    let schedule = ScheduleBuilder::new()
        .task(task("A", 2.0, Some(5), 1.0))
        .assign(0, 2, time(8, 0))
        .assign(1, 3, time(8, 0))
        .build();
    // Ideal interval 2 days: drift 1 + round(2^1.2), gap 1 is not below 1
    let rule = default_constraints().7;
    assert_eq!(rule.evaluate(&schedule), HardSoftScore::of_soft(-3));
}

#[test]
fn test_distribution_skips_degenerate_tasks() {
    let single = ScheduleBuilder::new()
        .task(task("A", 1.0, Some(10), 1.0))
        .assign(0, 1, time(8, 0))
        .build();
    let no_deadline = ScheduleBuilder::new()
        .task(task("A", 2.0, None, 1.0))
        .assign(0, 1, time(8, 0))
        .assign(1, 1, time(10, 0))
        .build();
    let past_deadline = ScheduleBuilder::new()
        .task(task("A", 2.0, Some(1), 1.0))
        .assign(0, 1, time(8, 0))
        .assign(1, 1, time(10, 0))
        .build();
    let rule = default_constraints().7;
    assert_eq!(rule.evaluate(&single), HardSoftScore::ZERO);
    assert_eq!(rule.evaluate(&no_deadline), HardSoftScore::ZERO);
    assert_eq!(rule.evaluate(&past_deadline), HardSoftScore::ZERO);
}

#[test]
fn test_session_length_excludes_break() {
    // 1h session plus 1h break: a session at 10:00 does not overlap one at 9:00
    let schedule = ScheduleBuilder::new()
        .task(task_with_break("A", 2.0, None, 1.0, 1.0))
        .window(time(8, 0), time(22, 0), 0)
        .assign(0, 1, time(9, 0))
        .assign(1, 1, time(10, 0))
        .build();
    assert_eq!(default_constraints().0.evaluate(&schedule), HardSoftScore::ZERO);
}

#[test]
fn test_weight_overrides() {
    let mut overrides = ConstraintWeightOverrides::new();
    overrides.put(names::DEADLINE_LATENESS, HardSoftScore::of_soft(2));
    overrides.put(names::PREFERRED_HOURS, HardSoftScore::ONE_HARD);
    overrides.put("No such rule", HardSoftScore::ONE_HARD);

    let constraints = create_constraints(&overrides);
    assert_eq!(constraints.1.weight(), HardSoftScore::of_soft(2));
    assert!(constraints.6.is_hard());
    assert_eq!(constraints.0.weight(), HardSoftScore::ONE_HARD);

    let schedule = ScheduleBuilder::new()
        .task(task("A", 1.0, Some(2), 1.0))
        .assign(0, 3, time(21, 30))
        .build();
    assert_eq!(
        constraints.evaluate_all(&schedule),
        HardSoftScore::of(-1, -20)
    );
}

#[test]
fn test_constraint_names_in_rule_order() {
    let constraints = default_constraints();
    assert_eq!(constraints.constraint_count(), 8);
    assert_eq!(constraints.constraint_names(), names::ALL.map(String::from).to_vec());
}
