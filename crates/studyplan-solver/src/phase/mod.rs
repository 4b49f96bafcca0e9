//! Solver phases
//!
//! Phases run in sequence against the same solver scope:
//! - ConstructionHeuristicPhase: assigns every unassigned session
//! - LocalSearchPhase: improves the assigned schedule

pub mod construction;
pub mod localsearch;

use std::fmt::Debug;

use studyplan_scoring::ScoreDirector;

use crate::scope::SolverScope;
use crate::termination::Termination;

/// A phase of the solving process.
///
/// The phase modifies the working schedule in the solver scope and updates
/// the best schedule when it improves. It returns when `termination` fires or
/// when it has nothing left to do.
pub trait Phase<D: ScoreDirector>: Send + Debug {
    fn solve<T: Termination<D>>(
        &mut self,
        solver_scope: &mut SolverScope<D>,
        phase_index: usize,
        termination: &T,
    );

    /// Returns the name of this phase type.
    fn phase_type_name(&self) -> &'static str;
}
