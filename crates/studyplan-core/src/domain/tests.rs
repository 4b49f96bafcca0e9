use chrono::{NaiveDate, NaiveTime};

use super::*;
use crate::PlanError;

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, day).unwrap()
}

fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

fn facts(tasks: Vec<Task>) -> ProblemFacts {
    ProblemFacts {
        tasks,
        date_domain: vec![date(2), date(3)],
        time_domain: vec![time(8, 0), time(8, 30)],
        fixed_events: Vec::new(),
        window: StudyWindow::default(),
        planning_start: date(2),
    }
}

#[test]
fn test_recommended_session_count_rounds_up() {
    let even = Task::new("A", 8.0, None, 2.0, 0.0).unwrap();
    let odd = Task::new("B", 7.0, None, 2.0, 0.0).unwrap();
    let tiny = Task::new("C", 0.1, None, 2.0, 0.0).unwrap();
    assert_eq!(even.recommended_session_count(), 4);
    assert_eq!(odd.recommended_session_count(), 4);
    assert_eq!(tiny.recommended_session_count(), 1);
}

#[test]
fn test_recommended_session_count_ignores_float_noise() {
    // 0.1 * 3 is slightly more than 0.3
    let task = Task::new("A", 0.1 * 3.0, None, 0.1, 0.0).unwrap();
    assert_eq!(task.recommended_session_count(), 3);
}

#[test]
fn test_completed_task_has_no_sessions() {
    let done = Task::new("A", 0.0, None, 1.0, 0.0).unwrap();
    let over = Task::new("B", -2.0, None, 1.0, 0.0).unwrap();
    assert_eq!(done.recommended_session_count(), 0);
    assert_eq!(over.recommended_session_count(), 0);
    assert!(!over.is_schedulable());
}

#[test]
fn test_slot_length_includes_break() {
    let task = Task::new("A", 4.0, None, 1.5, 0.25).unwrap();
    assert_eq!(task.session_slot_length(), 1.75);
    assert_eq!(task.session_minutes(), 90);
    assert_eq!(task.recommended_session_count(), 3);
}

#[test]
fn test_invalid_task_parameters() {
    let zero = Task::new("A", 4.0, None, 0.0, 0.0);
    assert!(matches!(zero, Err(PlanError::InvalidTask { ref name, .. }) if name == "A"));
    assert!(Task::new("A", 4.0, None, 1.0, -0.5).is_err());
    assert!(Task::new("A", f64::NAN, None, 1.0, 0.0).is_err());
    assert!(Task::new("A", 4.0, None, f64::INFINITY, 0.0).is_err());
}

#[test]
fn test_session_length_must_fit_in_a_day() {
    let huge = Task::new("A", 4.0, None, 1e13, 0.0);
    assert!(matches!(huge, Err(PlanError::InvalidTask { ref reason, .. }) if reason.contains("one day")));
    assert!(Task::new("A", 4.0, None, 24.5, 0.0).is_err());
    // Under a minute after rounding
    assert!(Task::new("A", 4.0, None, 0.001, 0.0).is_err());

    let full_day = Task::new("A", 48.0, None, 24.0, 0.0).unwrap();
    assert_eq!(full_day.session_minutes(), MINUTES_PER_DAY);
    assert_eq!(full_day.recommended_session_count(), 2);
}

#[test]
fn test_session_count_is_capped() {
    let flood = Task::new("A", 1e9, None, 0.5, 0.0);
    assert!(matches!(flood, Err(PlanError::InvalidTask { ref reason, .. }) if reason.contains("too many")));

    let at_cap = Task::new("A", MAX_SESSIONS_PER_TASK as f64, None, 1.0, 0.0).unwrap();
    assert_eq!(at_cap.recommended_session_count(), MAX_SESSIONS_PER_TASK);
    assert!(Task::new("A", MAX_SESSIONS_PER_TASK as f64 + 1.0, None, 1.0, 0.0).is_err());
}

#[test]
fn test_recommended_session_count_uses_whole_minutes() {
    // 100 minutes over 40 minute sessions
    let task = Task::new("A", 100.0 / 60.0, None, 40.0 / 60.0, 0.0).unwrap();
    assert_eq!(task.recommended_session_count(), 3);
    // 120 minutes over 40 minute sessions, despite float noise
    let exact = Task::new("B", 2.0, None, 2.0 / 3.0, 0.0).unwrap();
    assert_eq!(exact.recommended_session_count(), 3);
}

#[test]
fn test_fixed_event_validation() {
    assert!(FixedEvent::new(date(2), time(10, 0), time(9, 0)).is_err());
    let event = FixedEvent::new(date(2), time(9, 0), time(10, 0)).unwrap();
    assert_eq!(event.start_minute(), 540);
    assert_eq!(event.end_minute(), 600);
}

#[test]
fn test_full_day_event_blocks_whole_day() {
    let event = FixedEvent::full_day(date(4));
    assert_eq!(event.start_time(), time(0, 0));
    assert_eq!(event.end_time(), time(23, 59));
    assert!(event.overlaps(date(4), 0, 30));
    assert!(event.overlaps(date(4), 1380, 1438));
    assert!(!event.overlaps(date(5), 600, 660));
}

#[test]
fn test_fixed_event_touching_interval_does_not_overlap() {
    let event = FixedEvent::new(date(2), time(9, 0), time(10, 0)).unwrap();
    assert!(!event.overlaps(date(2), 600, 660));
    assert!(!event.overlaps(date(2), 480, 540));
    assert!(event.overlaps(date(2), 570, 630));
}

#[test]
fn test_preferences_fill_missing_values() {
    let prefs = UserPreferences {
        preferred_start: Some(time(9, 0)),
        preferred_end: None,
        break_minutes: None,
    };
    let window = prefs.resolve(&StudyWindow::default());
    assert_eq!(window.start, time(9, 0));
    assert_eq!(window.end, time(22, 0));
    assert_eq!(window.break_minutes, 15);
}

#[test]
fn test_inverted_preferences_fall_back_to_defaults() {
    let prefs = UserPreferences::new(time(14, 0), time(10, 0), 20);
    let window = prefs.resolve(&StudyWindow::default());
    assert_eq!(window.start, time(8, 0));
    assert_eq!(window.end, time(22, 0));
    assert_eq!(window.break_minutes, 20);
}

#[test]
fn test_equal_preferences_fall_back_to_defaults() {
    let prefs = UserPreferences::new(time(10, 0), time(10, 0), 15);
    let window = prefs.resolve(&StudyWindow::default());
    assert_eq!(window, StudyWindow::default());
}

#[test]
fn test_session_interval_and_end_time() {
    let task = Task::new("A", 4.0, None, 1.5, 0.0).unwrap();
    let mut schedule = Schedule::new(facts(vec![task]), vec![Session::new(0, 0)]);
    assert_eq!(schedule.interval(0), None);
    assert_eq!(schedule.end_time(0), None);
    assert_eq!(schedule.unassigned_count(), 1);

    schedule.sessions[0].date = Some(date(2));
    assert_eq!(schedule.interval(0), None);

    schedule.sessions[0].start_time = Some(time(21, 30));
    let interval = schedule.interval(0).unwrap();
    assert_eq!(interval.start, 1290);
    assert_eq!(interval.end, 1380);
    assert_eq!(schedule.end_time(0), Some(time(23, 0)));
    assert_eq!(schedule.assigned_count(), 1);
}

#[test]
fn test_end_time_wraps_past_midnight() {
    let task = Task::new("A", 4.0, None, 2.0, 0.0).unwrap();
    let mut session = Session::new(0, 0);
    session.date = Some(date(2));
    session.start_time = Some(time(23, 0));
    let schedule = Schedule::new(facts(vec![task]), vec![session]);
    assert_eq!(schedule.end_time(0), Some(time(1, 0)));
    assert_eq!(schedule.interval(0).unwrap().end, 1500);
}

#[test]
fn test_interval_break_gap() {
    let a = SessionInterval {
        date: date(2),
        start: 480,
        end: 540,
    };
    let b = SessionInterval {
        date: date(2),
        start: 550,
        end: 600,
    };
    let c = SessionInterval {
        date: date(2),
        start: 600,
        end: 660,
    };
    assert!(a.ends_within_break_of(&b, 15));
    assert!(b.ends_within_break_of(&c, 15));
    assert!(!a.ends_within_break_of(&c, 15));
    assert!(!b.ends_within_break_of(&a, 15));
    assert!(!a.overlaps(&b));
}

#[test]
fn test_time_of_minute() {
    assert_eq!(time_of_minute(DEFAULT_STUDY_START_MINUTE), time(8, 0));
    assert_eq!(time_of_minute(DEFAULT_STUDY_END_MINUTE), time(22, 0));
    assert_eq!(time_of_minute(1440 + 90), time(1, 30));
}

#[test]
fn test_sessions_of_task() {
    let a = Task::new("A", 2.0, None, 1.0, 0.0).unwrap();
    let b = Task::new("B", 1.0, None, 1.0, 0.0).unwrap();
    let sessions = vec![Session::new(0, 0), Session::new(1, 1), Session::new(2, 0)];
    let schedule = Schedule::new(facts(vec![a, b]), sessions);
    assert_eq!(schedule.sessions_of_task(0).collect::<Vec<_>>(), vec![0, 2]);
    assert_eq!(schedule.task_of(1).name(), "B");
}
