//! Maps a solved schedule back to plain session records.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use studyplan_core::Schedule;

/// Title prefix of scheduled sessions in the caller's calendar.
pub const SESSION_TITLE_PREFIX: &str = "Study session: ";

/// One session of the plan. Times are `None` when the solver could not
/// assign the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledSession {
    pub task_name: String,
    pub date: Option<NaiveDate>,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
}

impl ScheduledSession {
    pub fn title(&self) -> String {
        format!("{SESSION_TITLE_PREFIX}{}", self.task_name)
    }

    pub fn is_assigned(&self) -> bool {
        self.date.is_some() && self.start_time.is_some()
    }
}

/// Lists the schedule's sessions, assigned ones chronologically and
/// unassigned ones last.
pub fn assemble(schedule: &Schedule) -> Vec<ScheduledSession> {
    let mut order: Vec<usize> = (0..schedule.sessions.len()).collect();
    order.sort_by_key(|&i| {
        let s = &schedule.sessions[i];
        (!s.is_assigned(), s.date, s.start_time, s.id)
    });

    order
        .into_iter()
        .map(|i| {
            let session = &schedule.sessions[i];
            ScheduledSession {
                task_name: schedule.task_of(i).name().to_string(),
                date: session.date,
                start_time: session.start_time,
                end_time: schedule.end_time(i),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use studyplan_test::{day, task, time, ScheduleBuilder};

    #[test]
    fn sorts_chronologically_with_unassigned_last() {
        let schedule = ScheduleBuilder::new()
            .task(task("Algebra", 4.5, Some(9), 1.5))
            .task(task("History", 1.0, Some(9), 1.0))
            .assign(0, 3, time(9, 0))
            .assign(2, 1, time(14, 0))
            .assign(3, 1, time(10, 0))
            .build();

        let plan = assemble(&schedule);
        let names: Vec<&str> = plan.iter().map(|s| s.task_name.as_str()).collect();
        assert_eq!(names, ["History", "Algebra", "Algebra", "Algebra"]);

        assert_eq!(plan[0].date, Some(day(1)));
        assert_eq!(plan[0].end_time, Some(time(11, 0)));
        assert_eq!(plan[1].start_time, Some(time(14, 0)));
        assert_eq!(plan[1].end_time, Some(time(15, 30)));
        assert!(!plan[3].is_assigned());
        assert_eq!(plan[3].end_time, None);
    }

    #[test]
    fn title_names_the_task() {
        let session = ScheduledSession {
            task_name: "Databases".to_string(),
            date: None,
            start_time: None,
            end_time: None,
        };
        assert_eq!(session.title(), "Study session: Databases");
    }

    #[test]
    fn empty_schedule_yields_empty_plan() {
        assert!(assemble(&ScheduleBuilder::new().build()).is_empty());
    }
}
