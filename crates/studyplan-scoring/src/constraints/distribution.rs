//! Even spacing of each task's sessions between tomorrow and its deadline.

use smallvec::SmallVec;
use studyplan_core::{HardSoftScore, Schedule};

use crate::api::analysis::Justification;
use crate::api::constraint_set::IncrementalConstraint;

/// Penalizes drift from evenly spaced ideal dates and clustering of one
/// task's sessions. Scored per task.
#[derive(Debug, Clone)]
pub struct DistributionConstraint {
    name: &'static str,
    weight: HardSoftScore,
}

impl DistributionConstraint {
    pub fn new(name: &'static str, weight: HardSoftScore) -> Self {
        Self { name, weight }
    }

    /// Distribution penalty of one task given the current dates.
    pub fn task_penalty(schedule: &Schedule, task_index: usize) -> i64 {
        let Some(deadline) = schedule.tasks()[task_index].deadline() else {
            return 0;
        };
        let tomorrow = schedule.planning_start();

        // Day offsets from tomorrow of every dated session of the task.
        let mut offsets: SmallVec<[i64; 8]> = schedule
            .sessions_of_task(task_index)
            .filter_map(|i| schedule.sessions[i].date)
            .map(|date| (date - tomorrow).num_days())
            .collect();
        if offsets.len() < 2 {
            return 0;
        }

        let days_available = (deadline - tomorrow).num_days();
        if days_available <= 0 {
            return 0;
        }
        offsets.sort_unstable();

        let ideal_interval = days_available as f64 / offsets.len() as f64;
        let mut penalty = 0;

        for (i, &actual) in offsets.iter().enumerate() {
            let ideal = ((i + 1) as f64 * ideal_interval).round() as i64;
            let drift = (actual - ideal).abs() as f64;
            penalty += drift.powf(1.2).round() as i64;
        }

        let min_interval = (ideal_interval * 0.5).max(1.0);
        for pair in offsets.windows(2) {
            let gap = (pair[1] - pair[0]) as f64;
            if gap < min_interval {
                penalty += ((min_interval - gap) * 3.0).round() as i64;
            }
        }
        penalty
    }
}

impl IncrementalConstraint for DistributionConstraint {
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
        (0..schedule.tasks().len())
            .filter_map(|task_index| {
                let penalty = Self::task_penalty(schedule, task_index);
                if penalty == 0 {
                    return None;
                }
                let ids: SmallVec<[usize; 2]> = schedule
                    .sessions_of_task(task_index)
                    .map(|i| &schedule.sessions[i])
                    .filter(|s| s.date.is_some())
                    .map(|s| s.id)
                    .collect();
                let task = schedule.tasks()[task_index].name();
                Some(Justification::new(
                    ids,
                    penalty,
                    format!("sessions of '{task}' unevenly spread"),
                ))
            })
            .collect()
    }

    // The whole task penalty moves with any of its sessions.
    fn session_match_weight(&self, schedule: &Schedule, session_index: usize) -> i64 {
        Self::task_penalty(schedule, schedule.sessions[session_index].task_index)
    }
}
