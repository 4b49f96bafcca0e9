//! Task decomposition into sessions and candidate domains.

use chrono::{Duration, NaiveDate, NaiveTime};
use studyplan_config::{ConfigError, PlanningConfig};
use studyplan_core::{
    time_of_minute, FixedEvent, ProblemFacts, Schedule, Session, StudyWindow, Task,
    UserPreferences,
};
use tracing::{debug, warn};

/// Days planned ahead when no task has a deadline.
pub const DEFAULT_HORIZON_DAYS: i64 = 30;

/// Output of [`Decomposer::decompose`]: the unassigned sessions and the
/// domains their variables draw from.
#[derive(Debug, Clone, PartialEq)]
pub struct Decomposition {
    /// Tasks that contribute at least one session.
    pub tasks: Vec<Task>,
    pub sessions: Vec<Session>,
    pub date_domain: Vec<NaiveDate>,
    pub time_domain: Vec<NaiveTime>,
    pub window: StudyWindow,
    /// First plannable date, the day after `today`.
    pub planning_start: NaiveDate,
}

impl Decomposition {
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Builds the working schedule with the given obstacles.
    pub fn into_schedule(self, fixed_events: Vec<FixedEvent>) -> Schedule {
        let facts = ProblemFacts {
            tasks: self.tasks,
            date_domain: self.date_domain,
            time_domain: self.time_domain,
            fixed_events,
            window: self.window,
            planning_start: self.planning_start,
        };
        Schedule::new(facts, self.sessions)
    }
}

/// Turns tasks into sessions and builds the date and time domains.
#[derive(Debug, Clone, PartialEq)]
pub struct Decomposer {
    date_buffer_days: i64,
    granularity_minutes: u32,
    defaults: StudyWindow,
}

impl Default for Decomposer {
    fn default() -> Self {
        Self {
            date_buffer_days: 0,
            granularity_minutes: 30,
            defaults: StudyWindow::default(),
        }
    }
}

impl Decomposer {
    pub fn new(date_buffer_days: u32, granularity_minutes: u32, defaults: StudyWindow) -> Self {
        Self {
            date_buffer_days: i64::from(date_buffer_days),
            granularity_minutes: granularity_minutes.max(1),
            defaults,
        }
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if the default study window is
    /// malformed.
    pub fn from_config(planning: &PlanningConfig) -> Result<Self, ConfigError> {
        Ok(Self::new(
            planning.date_buffer_days,
            planning.time_granularity_minutes,
            planning.study_window()?,
        ))
    }

    pub fn defaults(&self) -> &StudyWindow {
        &self.defaults
    }

    /// Decomposes `tasks` for a planning run started on `today`.
    ///
    /// Tasks without remaining hours are dropped. Sessions are emitted round
    /// robin over the remaining tasks, so ids interleave tasks.
    pub fn decompose(
        &self,
        tasks: Vec<Task>,
        preferences: &UserPreferences,
        today: NaiveDate,
    ) -> Decomposition {
        let tasks: Vec<Task> = tasks
            .into_iter()
            .filter(|task| {
                let keep = task.is_schedulable();
                if !keep {
                    warn!(
                        task = task.name(),
                        hours_required = task.hours_required(),
                        "skipping task without remaining hours"
                    );
                }
                keep
            })
            .collect();

        let window = self.resolve_window(preferences);
        let planning_start = today + Duration::days(1);
        let sessions = round_robin_sessions(&tasks);
        let date_domain = self.date_domain(&tasks, today);
        let time_domain = self.time_domain(&window);

        debug!(
            tasks = tasks.len(),
            sessions = sessions.len(),
            dates = date_domain.len(),
            times = time_domain.len(),
            "decomposed planning request"
        );

        Decomposition {
            tasks,
            sessions,
            date_domain,
            time_domain,
            window,
            planning_start,
        }
    }

    fn resolve_window(&self, preferences: &UserPreferences) -> StudyWindow {
        let requested_start = preferences.preferred_start.unwrap_or(self.defaults.start);
        let requested_end = preferences.preferred_end.unwrap_or(self.defaults.end);
        if requested_start >= requested_end {
            warn!(
                preferred_start = ?preferences.preferred_start,
                preferred_end = ?preferences.preferred_end,
                "study window is empty, using defaults"
            );
        }
        preferences.resolve(&self.defaults)
    }

    /// Every date from tomorrow through the latest deadline plus the buffer.
    ///
    /// Without deadlines the domain runs to `today + 30`. Deadlines in the past
    /// still leave tomorrow, so overdue work is planned as late as possible
    /// rather than not at all.
    pub fn date_domain(&self, tasks: &[Task], today: NaiveDate) -> Vec<NaiveDate> {
        let tomorrow = today + Duration::days(1);
        let last = match tasks.iter().filter_map(Task::deadline).max() {
            Some(deadline) => deadline + Duration::days(self.date_buffer_days),
            None => today + Duration::days(DEFAULT_HORIZON_DAYS),
        };
        let last = last.max(tomorrow);
        tomorrow.iter_days().take_while(|d| *d <= last).collect()
    }

    /// Start times from the window start, stepped by the granularity, up to but
    /// excluding the window end.
    pub fn time_domain(&self, window: &StudyWindow) -> Vec<NaiveTime> {
        let end = window.end_minute();
        (window.start_minute()..end)
            .step_by(self.granularity_minutes as usize)
            .map(|m| time_of_minute(m as u32))
            .collect()
    }
}

/// One session per recommended session of each task, interleaved across
/// tasks: A, B, A, A for tasks with 3 and 1 sessions.
pub fn round_robin_sessions(tasks: &[Task]) -> Vec<Session> {
    let mut remaining: Vec<usize> = tasks.iter().map(Task::recommended_session_count).collect();
    let total: usize = remaining.iter().sum();
    let mut sessions = Vec::with_capacity(total);

    while sessions.len() < total {
        for (task_index, left) in remaining.iter_mut().enumerate() {
            if *left > 0 {
                *left -= 1;
                sessions.push(Session::new(sessions.len(), task_index));
            }
        }
    }
    sessions
}
