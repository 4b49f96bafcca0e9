//! Rules scored per session.

use studyplan_core::{HardSoftScore, Schedule};

use crate::api::analysis::Justification;
use crate::api::constraint_set::IncrementalConstraint;

/// Returns the match weight of one session (0 when it does not match).
pub type SessionWeigher = fn(&Schedule, usize) -> i64;

/// Penalizes sessions individually.
#[derive(Clone)]
pub struct SessionConstraint {
    name: &'static str,
    weight: HardSoftScore,
    weigher: SessionWeigher,
}

impl SessionConstraint {
    pub fn new(name: &'static str, weight: HardSoftScore, weigher: SessionWeigher) -> Self {
        Self {
            name,
            weight,
            weigher,
        }
    }
}

impl std::fmt::Debug for SessionConstraint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionConstraint")
            .field("name", &self.name)
            .field("weight", &self.weight)
            .finish()
    }
}

impl IncrementalConstraint for SessionConstraint {
    fn name(&self) -> &str {
        self.name
    }

    fn is_hard(&self) -> bool {
        self.weight.hard() != 0
    }

    fn weight(&self) -> HardSoftScore {
        self.weight
    }

    fn justifications(&self, schedule: &Schedule) -> Vec<Justification> {
        (0..schedule.sessions.len())
            .filter_map(|index| {
                let match_weight = (self.weigher)(schedule, index);
                if match_weight == 0 {
                    return None;
                }
                let session = &schedule.sessions[index];
                let task = schedule.task_of(index).name();
                let when = session
                    .date
                    .map(|d| d.to_string())
                    .unwrap_or_else(|| "unassigned".to_string());
                Some(Justification::new(
                    [session.id],
                    match_weight,
                    format!("session {} of '{task}' on {when}", session.id),
                ))
            })
            .collect()
    }

    #[inline]
    fn session_match_weight(&self, schedule: &Schedule, session_index: usize) -> i64 {
        (self.weigher)(schedule, session_index)
    }
}

/// Ten points per day past the task deadline.
pub(super) fn lateness(schedule: &Schedule, index: usize) -> i64 {
    let (Some(date), Some(deadline)) = (
        schedule.sessions[index].date,
        schedule.task_of(index).deadline(),
    ) else {
        return 0;
    };
    let days_late = (date - deadline).num_days();
    if days_late > 0 {
        days_late * 10
    } else {
        0
    }
}

/// One point per fixed event the session intersects.
pub(super) fn fixed_event_overlaps(schedule: &Schedule, index: usize) -> i64 {
    let Some(interval) = schedule.interval(index) else {
        return 0;
    };
    schedule
        .fixed_events()
        .iter()
        .filter(|event| event.overlaps(interval.date, interval.start, interval.end))
        .count() as i64
}

/// One point if the session starts before or ends after the study window.
pub(super) fn outside_preferred_hours(schedule: &Schedule, index: usize) -> i64 {
    let Some(interval) = schedule.interval(index) else {
        return 0;
    };
    i64::from(!schedule.window().contains(interval.start, interval.end))
}
