//! Duplicate (date, start time) groups.

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveTime};
use smallvec::SmallVec;
use studyplan_core::{HardSoftScore, Schedule};

use crate::api::analysis::Justification;
use crate::api::constraint_set::IncrementalConstraint;

/// Penalizes each (date, start time) group holding more than one session,
/// once per group.
#[derive(Debug, Clone)]
pub struct DuplicateTimeSlotConstraint {
    name: &'static str,
    weight: HardSoftScore,
}

impl DuplicateTimeSlotConstraint {
    pub fn new(name: &'static str, weight: HardSoftScore) -> Self {
        Self { name, weight }
    }
}

fn slot(schedule: &Schedule, index: usize) -> Option<(NaiveDate, NaiveTime)> {
    let session = &schedule.sessions[index];
    Some((session.date?, session.start_time?))
}

impl IncrementalConstraint for DuplicateTimeSlotConstraint {
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
        let mut groups: BTreeMap<(NaiveDate, NaiveTime), SmallVec<[usize; 2]>> = BTreeMap::new();
        for (index, session) in schedule.sessions.iter().enumerate() {
            if let Some(key) = slot(schedule, index) {
                groups.entry(key).or_default().push(session.id);
            }
        }
        groups
            .into_iter()
            .filter(|(_, ids)| ids.len() > 1)
            .map(|((date, time), ids)| {
                let description = format!("{} sessions at {date} {time}", ids.len());
                Justification::new(ids, 1, description)
            })
            .collect()
    }

    // A group is penalized once, so a session carries the group's penalty
    // only when it is the one that makes the group a duplicate.
    fn session_match_weight(&self, schedule: &Schedule, session_index: usize) -> i64 {
        let Some(key) = slot(schedule, session_index) else {
            return 0;
        };
        let group_size = (0..schedule.sessions.len())
            .filter(|&other| slot(schedule, other) == Some(key))
            .count();
        i64::from(group_size == 2)
    }
}
