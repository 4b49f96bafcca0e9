//! Schedule builder.
//!
//! # Example
//!
//! ```
//! use studyplan_test::{day, task, time, ScheduleBuilder};
//!
//! let schedule = ScheduleBuilder::new()
//!     .task(task("Algebra", 2.0, Some(10), 1.0))
//!     .assign(0, 1, time(9, 0))
//!     .build();
//! assert_eq!(schedule.sessions.len(), 2);
//! assert_eq!(schedule.sessions[0].date, Some(day(1)));
//! assert_eq!(schedule.sessions[1].date, None);
//! ```

use chrono::{Duration, NaiveDate, NaiveTime};
use studyplan_core::{FixedEvent, ProblemFacts, Schedule, Session, StudyWindow, Task};

use crate::calendar::{day, time, tomorrow};

/// A task with no break. `deadline` is a day offset from `today()`.
pub fn task(name: &str, hours: f64, deadline: Option<i64>, session_length: f64) -> Task {
    task_with_break(name, hours, deadline, session_length, 0.0)
}

/// A task with a break length in hours.
pub fn task_with_break(
    name: &str,
    hours: f64,
    deadline: Option<i64>,
    session_length: f64,
    break_length: f64,
) -> Task {
    Task::new(name, hours, deadline.map(day), session_length, break_length)
        .expect("valid fixture task")
}

/// Builds schedules with one session per recommended session of each task,
/// numbered task by task.
#[derive(Debug, Clone)]
pub struct ScheduleBuilder {
    tasks: Vec<Task>,
    fixed_events: Vec<FixedEvent>,
    window: StudyWindow,
    days: i64,
    granularity_minutes: i64,
    assignments: Vec<(usize, Option<NaiveDate>, Option<NaiveTime>)>,
}

impl Default for ScheduleBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ScheduleBuilder {
    /// Empty builder: default study window, 14 plannable days, 30 minute slots.
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            fixed_events: Vec::new(),
            window: StudyWindow::default(),
            days: 14,
            granularity_minutes: 30,
            assignments: Vec::new(),
        }
    }

    pub fn task(mut self, task: Task) -> Self {
        self.tasks.push(task);
        self
    }

    pub fn fixed_event(mut self, offset: i64, start: NaiveTime, end: NaiveTime) -> Self {
        self.fixed_events
            .push(FixedEvent::new(day(offset), start, end).expect("valid fixture event"));
        self
    }

    pub fn full_day_event(mut self, offset: i64) -> Self {
        self.fixed_events.push(FixedEvent::full_day(day(offset)));
        self
    }

    pub fn window(mut self, start: NaiveTime, end: NaiveTime, break_minutes: u32) -> Self {
        self.window = StudyWindow::new(start, end, break_minutes);
        self
    }

    /// Number of dates in the date domain, starting tomorrow.
    pub fn days(mut self, days: i64) -> Self {
        self.days = days;
        self
    }

    /// Assigns session `index` to `today() + offset` at `start`.
    pub fn assign(mut self, index: usize, offset: i64, start: NaiveTime) -> Self {
        self.assignments.push((index, Some(day(offset)), Some(start)));
        self
    }

    /// Sets only the date of session `index`.
    pub fn assign_date(mut self, index: usize, offset: i64) -> Self {
        self.assignments.push((index, Some(day(offset)), None));
        self
    }

    pub fn build(self) -> Schedule {
        let date_domain = (0..self.days)
            .map(|d| tomorrow() + Duration::days(d))
            .collect();

        let start = self.window.start_minute();
        let end = self.window.end_minute();
        let time_domain = (start..end)
            .step_by(self.granularity_minutes as usize)
            .map(|m| time((m / 60) as u32, (m % 60) as u32))
            .collect();

        let mut sessions = Vec::new();
        for (task_index, task) in self.tasks.iter().enumerate() {
            for _ in 0..task.recommended_session_count() {
                sessions.push(Session::new(sessions.len(), task_index));
            }
        }
        for (index, date, start_time) in self.assignments {
            sessions[index].date = date;
            sessions[index].start_time = start_time;
        }

        let facts = ProblemFacts {
            tasks: self.tasks,
            date_domain,
            time_domain,
            fixed_events: self.fixed_events,
            window: self.window,
            planning_start: tomorrow(),
        };
        Schedule::new(facts, sessions)
    }
}
