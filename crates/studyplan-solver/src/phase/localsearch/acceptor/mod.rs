//! Acceptors for local search move acceptance.
//!
//! Acceptors decide whether a candidate move is kept by comparing its score
//! with the last step's score.

mod configured;
mod hill_climbing;
mod late_acceptance;
mod simulated_annealing;

use std::fmt::Debug;

use studyplan_core::HardSoftScore;

use crate::scope::SolverRng;

pub use configured::ConfiguredAcceptor;
pub use hill_climbing::HillClimbingAcceptor;
pub use late_acceptance::LateAcceptanceAcceptor;
pub use simulated_annealing::SimulatedAnnealingAcceptor;

/// Trait for accepting or rejecting moves in local search.
///
/// Candidates of a step are offered in a fixed order, so an acceptor drawing
/// from `rng` stays reproducible under a fixed seed.
pub trait Acceptor: Send + Debug {
    fn is_accepted(
        &mut self,
        last_step_score: HardSoftScore,
        move_score: HardSoftScore,
        rng: &mut SolverRng,
    ) -> bool;

    /// Called when a phase starts.
    fn phase_started(&mut self, _initial_score: HardSoftScore) {}

    /// Called when a phase ends.
    fn phase_ended(&mut self) {}

    /// Called when a step ends with a move applied.
    fn step_ended(&mut self, _step_score: HardSoftScore) {}
}
