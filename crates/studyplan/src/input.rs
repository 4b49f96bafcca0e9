//! Adapters from a learner's stored data to planning input.
//!
//! Storage stays with the caller. These functions only reshape the records
//! it already loaded: modules become tasks, calendar entries become fixed
//! events, and stale scheduler output is dropped before re-planning.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use studyplan_core::{FixedEvent, PlanError, Task};
use tracing::{debug, warn};

use crate::assemble::ScheduledSession;

/// A course module with its total and already studied hours.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyModule {
    pub name: String,
    pub hours_required: f64,
    #[serde(default)]
    pub already_studied: Option<f64>,
    #[serde(default)]
    pub deadline: Option<NaiveDate>,
}

impl StudyModule {
    pub fn remaining_hours(&self) -> f64 {
        self.hours_required - self.already_studied.unwrap_or(0.0)
    }
}

/// Builds one task per unfinished module.
///
/// Session and break lengths come from the learner's settings in minutes.
/// Modules with no remaining hours are skipped.
///
/// # Errors
///
/// Returns [`PlanError::InvalidTask`] if the session length is zero.
pub fn tasks_from_modules(
    modules: &[StudyModule],
    session_minutes: u32,
    break_minutes: u32,
) -> Result<Vec<Task>, PlanError> {
    let session_length = f64::from(session_minutes) / 60.0;
    let break_length = f64::from(break_minutes) / 60.0;

    let mut tasks = Vec::with_capacity(modules.len());
    for module in modules {
        let remaining = module.remaining_hours();
        if remaining <= 0.0 {
            debug!(module = %module.name, "module already completed, skipping");
            continue;
        }
        tasks.push(Task::new(
            module.name.clone(),
            remaining,
            module.deadline,
            session_length,
            break_length,
        )?);
    }
    Ok(tasks)
}

/// Category of a calendar entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    /// Output of a previous planning run.
    StudySession,
    Lecture,
    Exam,
    Personal,
    #[default]
    Other,
}

/// An entry of the learner's calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEntry {
    pub title: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub start_time: Option<NaiveTime>,
    #[serde(default)]
    pub end_time: Option<NaiveTime>,
    #[serde(default)]
    pub full_day: bool,
    #[serde(default)]
    pub kind: EntryKind,
}

impl CalendarEntry {
    /// Converts a planned session into a calendar entry, if it is assigned.
    pub fn from_scheduled(session: &ScheduledSession) -> Option<Self> {
        Some(Self {
            title: session.title(),
            date: session.date?,
            start_time: Some(session.start_time?),
            end_time: session.end_time,
            full_day: false,
            kind: EntryKind::StudySession,
        })
    }
}

/// Turns calendar entries into obstacles for the planner.
///
/// Study sessions from earlier runs are left out, so the planner does not
/// compete with its own output. Full-day entries block 00:00-23:59. Timed
/// entries missing a start or end are skipped with a warning.
///
/// # Errors
///
/// Returns [`PlanError::InvalidFixedEvent`] for an entry that ends before it
/// starts.
pub fn fixed_events_from_calendar(entries: &[CalendarEntry]) -> Result<Vec<FixedEvent>, PlanError> {
    let mut events = Vec::new();
    for entry in entries.iter().filter(|e| e.kind != EntryKind::StudySession) {
        if entry.full_day {
            events.push(FixedEvent::full_day(entry.date));
            continue;
        }
        match (entry.start_time, entry.end_time) {
            (Some(start), Some(end)) => events.push(FixedEvent::new(entry.date, start, end)?),
            _ => warn!(
                title = %entry.title,
                date = %entry.date,
                "calendar entry without start or end time, ignoring"
            ),
        }
    }
    Ok(events)
}

/// Drops study sessions dated after `today`, keeping everything else.
///
/// Call this before re-planning so the new run starts from a calendar free
/// of its own earlier output.
pub fn discard_future_study_sessions(
    entries: Vec<CalendarEntry>,
    today: NaiveDate,
) -> Vec<CalendarEntry> {
    entries
        .into_iter()
        .filter(|e| !(e.kind == EntryKind::StudySession && e.date > today))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use studyplan_test::{day, time, today};

    fn entry(kind: EntryKind, offset: i64) -> CalendarEntry {
        CalendarEntry {
            title: format!("{kind:?}"),
            date: day(offset),
            start_time: Some(time(10, 0)),
            end_time: Some(time(12, 0)),
            full_day: false,
            kind,
        }
    }

    fn module(name: &str, required: f64, studied: Option<f64>) -> StudyModule {
        StudyModule {
            name: name.to_string(),
            hours_required: required,
            already_studied: studied,
            deadline: Some(day(10)),
        }
    }

    #[test]
    fn modules_become_tasks_with_remaining_hours() {
        let modules = vec![
            module("Databases", 8.0, Some(3.0)),
            module("Networks", 5.0, Some(5.0)),
            module("Compilers", 4.0, None),
        ];
        let tasks = tasks_from_modules(&modules, 90, 30).unwrap();

        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].name(), "Databases");
        assert_eq!(tasks[0].hours_required(), 5.0);
        assert_eq!(tasks[0].session_length(), 1.5);
        assert_eq!(tasks[0].break_length(), 0.5);
        assert_eq!(tasks[0].recommended_session_count(), 4);
        assert_eq!(tasks[1].deadline(), Some(day(10)));
    }

    #[test]
    fn zero_session_length_is_rejected() {
        let modules = vec![module("Databases", 8.0, None)];
        assert!(matches!(
            tasks_from_modules(&modules, 0, 10),
            Err(PlanError::InvalidTask { .. })
        ));
    }

    #[test]
    fn calendar_excludes_own_sessions() {
        let entries = vec![
            entry(EntryKind::Lecture, 1),
            entry(EntryKind::StudySession, 1),
            entry(EntryKind::Exam, 2),
        ];
        let events = fixed_events_from_calendar(&entries).unwrap();

        assert_eq!(events.len(), 2);
        assert_eq!(events[0].date(), day(1));
        assert_eq!(events[1].date(), day(2));
    }

    #[test]
    fn full_day_entries_block_the_day() {
        let mut holiday = entry(EntryKind::Personal, 3);
        holiday.full_day = true;
        holiday.start_time = None;
        holiday.end_time = None;

        let events = fixed_events_from_calendar(&[holiday]).unwrap();
        assert_eq!(events, vec![FixedEvent::full_day(day(3))]);
    }

    #[test]
    fn untimed_entries_are_ignored() {
        let mut reminder = entry(EntryKind::Other, 1);
        reminder.end_time = None;
        assert!(fixed_events_from_calendar(&[reminder]).unwrap().is_empty());
    }

    #[test]
    fn inverted_entry_is_an_error() {
        let mut broken = entry(EntryKind::Lecture, 1);
        broken.start_time = Some(time(15, 0));
        assert!(matches!(
            fixed_events_from_calendar(&[broken]),
            Err(PlanError::InvalidFixedEvent { .. })
        ));
    }

    #[test]
    fn discards_only_future_study_sessions() {
        let entries = vec![
            entry(EntryKind::StudySession, 0),
            entry(EntryKind::StudySession, 1),
            entry(EntryKind::Lecture, 1),
            entry(EntryKind::StudySession, -2),
        ];
        let kept = discard_future_study_sessions(entries, today());

        assert_eq!(kept.len(), 3);
        assert!(kept
            .iter()
            .all(|e| e.kind != EntryKind::StudySession || e.date <= today()));
    }

    #[test]
    fn scheduled_sessions_round_trip_as_own_entries() {
        let session = ScheduledSession {
            task_name: "Databases".to_string(),
            date: Some(day(2)),
            start_time: Some(time(9, 0)),
            end_time: Some(time(10, 30)),
        };
        let entry = CalendarEntry::from_scheduled(&session).unwrap();

        assert_eq!(entry.kind, EntryKind::StudySession);
        assert_eq!(entry.title, "Study session: Databases");
        assert!(fixed_events_from_calendar(&[entry]).unwrap().is_empty());

        let unassigned = ScheduledSession {
            date: None,
            ..session
        };
        assert!(CalendarEntry::from_scheduled(&unassigned).is_none());
    }
}
