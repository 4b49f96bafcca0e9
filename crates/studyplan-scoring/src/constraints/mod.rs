//! The eight scheduling rules.
//!
//! Every rule ignores sessions whose variables it needs are unassigned, so an
//! untouched schedule scores zero.

mod distribution;
mod pair;
mod session;
mod time_slot;

#[cfg(test)]
mod tests;

use studyplan_core::HardSoftScore;
use tracing::warn;

use crate::api::weight_overrides::ConstraintWeightOverrides;

pub use distribution::DistributionConstraint;
pub use pair::{PairConstraint, PairPredicate};
pub use session::{SessionConstraint, SessionWeigher};
pub use time_slot::DuplicateTimeSlotConstraint;

/// Constraint names, usable as weight override keys.
pub mod names {
    pub const OVERLAPPING_SESSIONS: &str = "Overlapping sessions";
    pub const DEADLINE_LATENESS: &str = "Session after deadline";
    pub const FIXED_EVENT_OVERLAP: &str = "Session overlaps fixed event";
    pub const SIMULTANEOUS_SESSIONS: &str = "Simultaneous sessions";
    pub const DUPLICATE_TIME_SLOT: &str = "Duplicate time slot";
    pub const MINIMUM_BREAK: &str = "Minimum break between sessions";
    pub const PREFERRED_HOURS: &str = "Outside preferred hours";
    pub const EVEN_DISTRIBUTION: &str = "Even distribution until deadline";

    /// All names, in rule order.
    pub const ALL: [&str; 8] = [
        OVERLAPPING_SESSIONS,
        DEADLINE_LATENESS,
        FIXED_EVENT_OVERLAP,
        SIMULTANEOUS_SESSIONS,
        DUPLICATE_TIME_SLOT,
        MINIMUM_BREAK,
        PREFERRED_HOURS,
        EVEN_DISTRIBUTION,
    ];
}

/// The full rule pipeline in rule order.
pub type StudyConstraints = (
    PairConstraint,
    SessionConstraint,
    SessionConstraint,
    PairConstraint,
    DuplicateTimeSlotConstraint,
    PairConstraint,
    SessionConstraint,
    DistributionConstraint,
);

/// Builds the pipeline with default weights.
pub fn default_constraints() -> StudyConstraints {
    create_constraints(&ConstraintWeightOverrides::new())
}

/// Builds the pipeline, taking weights from `overrides` where present.
///
/// Override names that match no rule are ignored.
pub fn create_constraints(overrides: &ConstraintWeightOverrides) -> StudyConstraints {
    for name in overrides.names() {
        if !names::ALL.contains(&name) {
            warn!(constraint = name, "ignoring weight override for unknown constraint");
        }
    }
    let weight = |name: &str, default: HardSoftScore| overrides.get_or_default(name, default);

    (
        PairConstraint::new(
            names::OVERLAPPING_SESSIONS,
            weight(names::OVERLAPPING_SESSIONS, HardSoftScore::ONE_HARD),
            pair::overlapping,
        ),
        SessionConstraint::new(
            names::DEADLINE_LATENESS,
            weight(names::DEADLINE_LATENESS, HardSoftScore::ONE_SOFT),
            session::lateness,
        ),
        SessionConstraint::new(
            names::FIXED_EVENT_OVERLAP,
            weight(names::FIXED_EVENT_OVERLAP, HardSoftScore::ONE_HARD),
            session::fixed_event_overlaps,
        ),
        PairConstraint::new(
            names::SIMULTANEOUS_SESSIONS,
            weight(names::SIMULTANEOUS_SESSIONS, HardSoftScore::ONE_HARD),
            pair::simultaneous,
        ),
        DuplicateTimeSlotConstraint::new(
            names::DUPLICATE_TIME_SLOT,
            weight(names::DUPLICATE_TIME_SLOT, HardSoftScore::ONE_HARD),
        ),
        PairConstraint::new(
            names::MINIMUM_BREAK,
            weight(names::MINIMUM_BREAK, HardSoftScore::ONE_HARD),
            pair::insufficient_break,
        ),
        SessionConstraint::new(
            names::PREFERRED_HOURS,
            weight(names::PREFERRED_HOURS, HardSoftScore::ONE_SOFT),
            session::outside_preferred_hours,
        ),
        DistributionConstraint::new(
            names::EVEN_DISTRIBUTION,
            weight(names::EVEN_DISTRIBUTION, HardSoftScore::ONE_SOFT),
        ),
    )
}
