// Typed constraint set for incremental scoring.
//
// `ConstraintSet` is implemented for tuples of `IncrementalConstraint`, so the
// whole rule pipeline is monomorphized without virtual dispatch.

use studyplan_core::{HardSoftScore, Schedule};

use super::analysis::{ConstraintAnalysis, ConstraintMatch, Justification};

// A single scheduling rule with incremental scoring capability.
//
// # Incremental Protocol
//
// 1. Before changing a session's date or start time: call `on_retract`
// 2. Apply the change
// 3. After the change: call `on_insert`
// 4. Score delta = retract delta + insert delta
//
// Rules compute everything from the schedule they are handed, so the protocol
// holds as long as changes are applied one session at a time.
pub trait IncrementalConstraint: Send + Sync {
    // Returns the constraint name.
    fn name(&self) -> &str;

    // Returns true if this is a hard constraint.
    fn is_hard(&self) -> bool;

    // Score per unit of match weight (positive; penalties are negated).
    fn weight(&self) -> HardSoftScore;

    // All current violations with their match weights.
    fn justifications(&self, schedule: &Schedule) -> Vec<Justification>;

    // Total match weight of every violation that involves the session at
    // `session_index`, given the current assignments.
    fn session_match_weight(&self, schedule: &Schedule, session_index: usize) -> i64;

    // Full evaluation of this constraint.
    fn evaluate(&self, schedule: &Schedule) -> HardSoftScore {
        let total: i64 = self
            .justifications(schedule)
            .iter()
            .map(|j| j.match_weight)
            .sum();
        self.penalty(total)
    }

    // Returns the number of matches for this constraint.
    fn match_count(&self, schedule: &Schedule) -> usize {
        self.justifications(schedule).len()
    }

    // Called after a session's variables changed. Returns the score delta.
    #[inline]
    fn on_insert(&self, schedule: &Schedule, session_index: usize) -> HardSoftScore {
        self.penalty(self.session_match_weight(schedule, session_index))
    }

    // Called before a session's variables change. Returns the score delta.
    #[inline]
    fn on_retract(&self, schedule: &Schedule, session_index: usize) -> HardSoftScore {
        -self.penalty(self.session_match_weight(schedule, session_index))
    }

    // Converts a match weight into a (negative) score.
    #[inline]
    fn penalty(&self, match_weight: i64) -> HardSoftScore {
        -self.weight().multiply(match_weight)
    }

    // Returns detailed matches with their score impact.
    fn get_matches(&self, schedule: &Schedule) -> Vec<ConstraintMatch> {
        self.justifications(schedule)
            .into_iter()
            .map(|justification| ConstraintMatch {
                constraint_name: self.name().to_string(),
                score: self.penalty(justification.match_weight),
                justification,
            })
            .collect()
    }
}

// Result of evaluating a single constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintResult {
    // Constraint name.
    pub name: String,
    // Score contribution from this constraint.
    pub score: HardSoftScore,
    // Number of matches for this constraint.
    pub match_count: usize,
    // Whether this is a hard constraint.
    pub is_hard: bool,
}

// A set of constraints that can be evaluated together.
pub trait ConstraintSet: Send + Sync {
    // Evaluates all constraints and returns the total score.
    fn evaluate_all(&self, schedule: &Schedule) -> HardSoftScore;

    // Returns the number of constraints in this set.
    fn constraint_count(&self) -> usize;

    // Names of the constraints, in tuple order.
    fn constraint_names(&self) -> Vec<String>;

    // Evaluates each constraint individually.
    fn evaluate_each(&self, schedule: &Schedule) -> Vec<ConstraintResult>;

    // Evaluates each constraint with detailed match information.
    fn evaluate_detailed(&self, schedule: &Schedule) -> Vec<ConstraintAnalysis>;

    // Sum of every constraint's `on_insert`.
    fn on_insert_all(&self, schedule: &Schedule, session_index: usize) -> HardSoftScore;

    // Sum of every constraint's `on_retract`.
    fn on_retract_all(&self, schedule: &Schedule, session_index: usize) -> HardSoftScore;
}

impl ConstraintSet for () {
    #[inline]
    fn evaluate_all(&self, _schedule: &Schedule) -> HardSoftScore {
        HardSoftScore::ZERO
    }

    #[inline]
    fn constraint_count(&self) -> usize {
        0
    }

    fn constraint_names(&self) -> Vec<String> {
        Vec::new()
    }

    fn evaluate_each(&self, _schedule: &Schedule) -> Vec<ConstraintResult> {
        Vec::new()
    }

    fn evaluate_detailed(&self, _schedule: &Schedule) -> Vec<ConstraintAnalysis> {
        Vec::new()
    }

    #[inline]
    fn on_insert_all(&self, _schedule: &Schedule, _session_index: usize) -> HardSoftScore {
        HardSoftScore::ZERO
    }

    #[inline]
    fn on_retract_all(&self, _schedule: &Schedule, _session_index: usize) -> HardSoftScore {
        HardSoftScore::ZERO
    }
}

macro_rules! impl_constraint_set_for_tuple {
    ($($idx:tt: $T:ident),+) => {
        impl<$($T),+> ConstraintSet for ($($T,)+)
        where
            $($T: IncrementalConstraint,)+
        {
            #[inline]
            fn evaluate_all(&self, schedule: &Schedule) -> HardSoftScore {
                let mut total = HardSoftScore::ZERO;
                $(total += self.$idx.evaluate(schedule);)+
                total
            }

            #[inline]
            fn constraint_count(&self) -> usize {
                let mut count = 0;
                $(let _ = &self.$idx; count += 1;)+
                count
            }

            fn constraint_names(&self) -> Vec<String> {
                vec![$(self.$idx.name().to_string()),+]
            }

            fn evaluate_each(&self, schedule: &Schedule) -> Vec<ConstraintResult> {
                vec![$(ConstraintResult {
                    name: self.$idx.name().to_string(),
                    score: self.$idx.evaluate(schedule),
                    match_count: self.$idx.match_count(schedule),
                    is_hard: self.$idx.is_hard(),
                }),+]
            }

            fn evaluate_detailed(&self, schedule: &Schedule) -> Vec<ConstraintAnalysis> {
                vec![$(ConstraintAnalysis::new(
                    self.$idx.name(),
                    self.$idx.weight(),
                    self.$idx.is_hard(),
                    self.$idx.get_matches(schedule),
                )),+]
            }

            #[inline]
            fn on_insert_all(&self, schedule: &Schedule, session_index: usize) -> HardSoftScore {
                let mut total = HardSoftScore::ZERO;
                $(total += self.$idx.on_insert(schedule, session_index);)+
                total
            }

            #[inline]
            fn on_retract_all(&self, schedule: &Schedule, session_index: usize) -> HardSoftScore {
                let mut total = HardSoftScore::ZERO;
                $(total += self.$idx.on_retract(schedule, session_index);)+
                total
            }
        }
    };
}

impl_constraint_set_for_tuple!(0: C0);
impl_constraint_set_for_tuple!(0: C0, 1: C1);
impl_constraint_set_for_tuple!(0: C0, 1: C1, 2: C2);
impl_constraint_set_for_tuple!(0: C0, 1: C1, 2: C2, 3: C3);
impl_constraint_set_for_tuple!(0: C0, 1: C1, 2: C2, 3: C3, 4: C4);
impl_constraint_set_for_tuple!(0: C0, 1: C1, 2: C2, 3: C3, 4: C4, 5: C5);
impl_constraint_set_for_tuple!(0: C0, 1: C1, 2: C2, 3: C3, 4: C4, 5: C5, 6: C6);
impl_constraint_set_for_tuple!(0: C0, 1: C1, 2: C2, 3: C3, 4: C4, 5: C5, 6: C6, 7: C7);
impl_constraint_set_for_tuple!(0: C0, 1: C1, 2: C2, 3: C3, 4: C4, 5: C5, 6: C6, 7: C7, 8: C8);
impl_constraint_set_for_tuple!(0: C0, 1: C1, 2: C2, 3: C3, 4: C4, 5: C5, 6: C6, 7: C7, 8: C8, 9: C9);
