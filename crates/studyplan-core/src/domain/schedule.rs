//! The working solution.

use std::sync::Arc;

use chrono::{Duration, NaiveDate, NaiveTime};

use super::{minute_of, FixedEvent, Session, SessionInterval, StudyWindow, Task};
use crate::score::HardSoftScore;

/// Read-only inputs of one planning run.
///
/// Shared by every clone of the [`Schedule`] through an `Arc`, so cloning a
/// schedule only copies the session assignments.
#[derive(Debug, Clone, PartialEq)]
pub struct ProblemFacts {
    pub tasks: Vec<Task>,
    /// Candidate dates, ascending.
    pub date_domain: Vec<NaiveDate>,
    /// Candidate start times, ascending.
    pub time_domain: Vec<NaiveTime>,
    pub fixed_events: Vec<FixedEvent>,
    pub window: StudyWindow,
    /// First plannable date ("tomorrow").
    pub planning_start: NaiveDate,
}

/// Sessions plus the facts they are planned against.
///
/// Invariant: every assigned date is in `date_domain` and every assigned start
/// time is in `time_domain`. Moves only draw values from those domains.
#[derive(Debug, Clone)]
pub struct Schedule {
    facts: Arc<ProblemFacts>,
    pub sessions: Vec<Session>,
    score: Option<HardSoftScore>,
}

impl Schedule {
    /// Creates an unscored schedule.
    pub fn new(facts: ProblemFacts, sessions: Vec<Session>) -> Self {
        Self::with_shared_facts(Arc::new(facts), sessions)
    }

    pub fn with_shared_facts(facts: Arc<ProblemFacts>, sessions: Vec<Session>) -> Self {
        Self {
            facts,
            sessions,
            score: None,
        }
    }

    pub fn facts(&self) -> &ProblemFacts {
        &self.facts
    }

    pub fn shared_facts(&self) -> &Arc<ProblemFacts> {
        &self.facts
    }

    pub fn tasks(&self) -> &[Task] {
        &self.facts.tasks
    }

    pub fn date_domain(&self) -> &[NaiveDate] {
        &self.facts.date_domain
    }

    pub fn time_domain(&self) -> &[NaiveTime] {
        &self.facts.time_domain
    }

    pub fn fixed_events(&self) -> &[FixedEvent] {
        &self.facts.fixed_events
    }

    pub fn window(&self) -> &StudyWindow {
        &self.facts.window
    }

    pub fn planning_start(&self) -> NaiveDate {
        self.facts.planning_start
    }

    pub fn score(&self) -> Option<HardSoftScore> {
        self.score
    }

    pub fn set_score(&mut self, score: Option<HardSoftScore>) {
        self.score = score;
    }

    /// Owning task of the session at `index`.
    #[inline]
    pub fn task_of(&self, index: usize) -> &Task {
        &self.facts.tasks[self.sessions[index].task_index]
    }

    /// Placed interval of the session at `index`, if fully assigned.
    #[inline]
    pub fn interval(&self, index: usize) -> Option<SessionInterval> {
        let session = &self.sessions[index];
        let date = session.date?;
        let start = minute_of(session.start_time?);
        let end = start + self.task_of(index).session_minutes();
        Some(SessionInterval { date, start, end })
    }

    /// `start_time + session_length`, rounded to the minute. Wraps past midnight.
    pub fn end_time(&self, index: usize) -> Option<NaiveTime> {
        let start = self.sessions[index].start_time?;
        let minutes = self.task_of(index).session_minutes();
        Some(start.overflowing_add_signed(Duration::minutes(minutes)).0)
    }

    pub fn assigned_count(&self) -> usize {
        self.sessions.iter().filter(|s| s.is_assigned()).count()
    }

    pub fn unassigned_count(&self) -> usize {
        self.sessions.len() - self.assigned_count()
    }

    /// Indices of sessions belonging to `task_index`.
    pub fn sessions_of_task(&self, task_index: usize) -> impl Iterator<Item = usize> + '_ {
        self.sessions
            .iter()
            .enumerate()
            .filter(move |(_, s)| s.task_index == task_index)
            .map(|(i, _)| i)
    }
}
