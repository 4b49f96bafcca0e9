//! Termination conditions for solver phases.

mod best_score;
mod composite;
mod external;
mod step_count;
mod time;
mod unimproved;

use std::fmt::Debug;

use studyplan_scoring::ScoreDirector;

use crate::scope::SolverScope;

pub use best_score::BestScoreTermination;
pub use composite::OrTermination;
pub use external::ExternalTermination;
pub use step_count::StepCountTermination;
pub use time::TimeTermination;
pub use unimproved::UnimprovedTimeTermination;

/// Trait for determining when to stop solving.
pub trait Termination<D: ScoreDirector>: Send + Debug {
    /// Returns true if solving should terminate.
    fn is_terminated(&self, solver_scope: &SolverScope<D>) -> bool;
}

/// An absent termination never fires.
impl<D: ScoreDirector, T: Termination<D>> Termination<D> for Option<T> {
    fn is_terminated(&self, solver_scope: &SolverScope<D>) -> bool {
        self.as_ref()
            .is_some_and(|t| t.is_terminated(solver_scope))
    }
}
