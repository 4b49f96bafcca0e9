//! Rules over unordered pairs of placed sessions on the same date.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use studyplan_core::{HardSoftScore, Schedule, SessionInterval};

use crate::api::analysis::Justification;
use crate::api::constraint_set::IncrementalConstraint;

/// Symmetric test for a violating pair. Both intervals share a date.
pub type PairPredicate = fn(&Schedule, &SessionInterval, &SessionInterval) -> bool;

/// Penalizes each unordered pair of same-date sessions matching a predicate.
#[derive(Clone)]
pub struct PairConstraint {
    name: &'static str,
    weight: HardSoftScore,
    predicate: PairPredicate,
}

impl PairConstraint {
    pub fn new(name: &'static str, weight: HardSoftScore, predicate: PairPredicate) -> Self {
        Self {
            name,
            weight,
            predicate,
        }
    }
}

impl std::fmt::Debug for PairConstraint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PairConstraint")
            .field("name", &self.name)
            .field("weight", &self.weight)
            .finish()
    }
}

impl IncrementalConstraint for PairConstraint {
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
        let mut by_date: BTreeMap<NaiveDate, Vec<(usize, SessionInterval)>> = BTreeMap::new();
        for index in 0..schedule.sessions.len() {
            if let Some(interval) = schedule.interval(index) {
                by_date.entry(interval.date).or_default().push((index, interval));
            }
        }

        let mut matches = Vec::new();
        for (date, placed) in &by_date {
            for (k, (a, ia)) in placed.iter().enumerate() {
                for (b, ib) in &placed[k + 1..] {
                    if (self.predicate)(schedule, ia, ib) {
                        let (id_a, id_b) = (schedule.sessions[*a].id, schedule.sessions[*b].id);
                        matches.push(Justification::new(
                            [id_a, id_b],
                            1,
                            format!("sessions {id_a} and {id_b} on {date}"),
                        ));
                    }
                }
            }
        }
        matches
    }

    fn session_match_weight(&self, schedule: &Schedule, session_index: usize) -> i64 {
        let Some(target) = schedule.interval(session_index) else {
            return 0;
        };
        let mut count = 0;
        for other in 0..schedule.sessions.len() {
            if other == session_index {
                continue;
            }
            match schedule.interval(other) {
                Some(interval) if interval.date == target.date => {
                    if (self.predicate)(schedule, &target, &interval) {
                        count += 1;
                    }
                }
                _ => {}
            }
        }
        count
    }
}

/// `aStart < bEnd && bStart < aEnd`.
pub(super) fn overlapping(_: &Schedule, a: &SessionInterval, b: &SessionInterval) -> bool {
    a.overlaps(b)
}

/// Identical date and start time, regardless of duration.
pub(super) fn simultaneous(_: &Schedule, a: &SessionInterval, b: &SessionInterval) -> bool {
    a.date == b.date && a.start == b.start
}

/// One session ends at most `break_minutes` before the other starts.
pub(super) fn insufficient_break(
    schedule: &Schedule,
    a: &SessionInterval,
    b: &SessionInterval,
) -> bool {
    let break_minutes = schedule.window().break_minutes();
    a.ends_within_break_of(b, break_minutes) || b.ends_within_break_of(a, break_minutes)
}
