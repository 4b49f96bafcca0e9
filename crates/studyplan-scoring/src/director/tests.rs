use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use studyplan_core::{HardSoftScore, Schedule};
use studyplan_test::{task, time, ScheduleBuilder};

use super::*;
use crate::api::constraint_set::ConstraintSet;
use crate::constraints::default_constraints;

fn busy_schedule() -> Schedule {
    ScheduleBuilder::new()
        .task(task("Algebra", 5.0, Some(4), 1.0))
        .task(task("Biology", 4.0, Some(6), 2.0))
        .task(task("Chemistry", 3.0, None, 1.5))
        .fixed_event(1, time(9, 0), time(12, 0))
        .full_day_event(3)
        .days(6)
        .build()
}

#[test]
fn test_incremental_matches_full_recalculation() {
    let schedule = busy_schedule();
    let dates = schedule.date_domain().to_vec();
    let times = schedule.time_domain().to_vec();
    let constraints = default_constraints();

    let mut director = IncrementalScoreDirector::new(schedule, default_constraints());
    assert_eq!(director.calculate_score(), HardSoftScore::ZERO);

    let mut rng = ChaCha8Rng::seed_from_u64(7);
    for _ in 0..300 {
        let index = rng.random_range(0..director.working_solution().sessions.len());
        // Mostly assign, occasionally unassign
        let date = (rng.random_range(0..10) > 0).then(|| dates[rng.random_range(0..dates.len())]);
        let start = (rng.random_range(0..10) > 0).then(|| times[rng.random_range(0..times.len())]);
        director.change_session(index, date, start);

        let expected = constraints.evaluate_all(director.working_solution());
        assert_eq!(director.calculate_score(), expected);
    }
}

#[test]
fn test_changes_before_initialization_are_picked_up() {
    let mut director = IncrementalScoreDirector::new(busy_schedule(), default_constraints());
    let day = studyplan_test::day(1);
    director.change_session(0, Some(day), Some(time(10, 0)));
    assert_eq!(director.cached_score(), None);
    // Overlaps the 9:00-12:00 event
    assert_eq!(director.calculate_score().hard(), -1);
}

#[test]
fn test_recording_undo_restores_values_and_score() {
    let mut director = IncrementalScoreDirector::new(busy_schedule(), default_constraints());
    let day = studyplan_test::day(2);
    director.change_session(0, Some(day), Some(time(8, 0)));
    director.change_session(1, Some(day), Some(time(14, 0)));
    let before = director.calculate_score();
    let sessions_before = director.working_solution().sessions.clone();

    {
        let mut recording = RecordingScoreDirector::new(&mut director);
        recording.change_session(0, Some(day), Some(time(14, 0)));
        recording.change_session(2, Some(day), Some(time(14, 0)));
        assert_eq!(recording.change_count(), 2);
        assert!(recording.calculate_score() < before);
        recording.undo_changes();
        assert!(recording.is_empty());
    }

    assert_eq!(director.calculate_score(), before);
    assert_eq!(director.working_solution().sessions, sessions_before);
}

#[test]
fn test_recording_commit_keeps_changes() {
    let mut director = IncrementalScoreDirector::new(busy_schedule(), default_constraints());
    director.calculate_score();
    let day = studyplan_test::day(2);
    {
        let mut recording = RecordingScoreDirector::new(&mut director);
        recording.change_session(0, Some(day), Some(time(8, 0)));
        recording.commit();
    }
    assert_eq!(director.working_solution().sessions[0].date, Some(day));
}

#[test]
fn test_recording_drop_undoes_uncommitted_changes() {
    let mut director = IncrementalScoreDirector::new(busy_schedule(), default_constraints());
    let before = director.calculate_score();
    {
        let mut recording = RecordingScoreDirector::new(&mut director);
        recording.change_session(0, Some(studyplan_test::day(1)), Some(time(9, 0)));
    }
    assert_eq!(director.working_solution().sessions[0].date, None);
    assert_eq!(director.calculate_score(), before);
}

#[test]
fn test_simple_director_scores_and_clones() {
    let mut director = SimpleScoreDirector::new(busy_schedule(), default_constraints());
    director.change_session(0, Some(studyplan_test::day(1)), Some(time(9, 0)));
    let clone = director.clone_working_solution();
    assert_eq!(clone.score(), Some(HardSoftScore::of_hard(-1)));
    assert!(!director.is_incremental());
}

#[test]
fn test_explain_lists_matches() {
    let mut director = IncrementalScoreDirector::new(busy_schedule(), default_constraints());
    let day = studyplan_test::day(2);
    director.change_session(0, Some(day), Some(time(8, 0)));
    director.change_session(1, Some(day), Some(time(8, 0)));

    let explanation = director.explain();
    assert_eq!(explanation.score, director.calculate_score());
    let overlap = explanation
        .constraint(crate::constraints::names::OVERLAPPING_SESSIONS)
        .unwrap();
    assert_eq!(overlap.match_count(), 1);
    assert_eq!(overlap.matches[0].justification.session_ids.as_slice(), &[0, 1]);
    // Overlap, simultaneous start, duplicate slot and clustering
    assert_eq!(explanation.matches_for_session(1).len(), 4);
}
