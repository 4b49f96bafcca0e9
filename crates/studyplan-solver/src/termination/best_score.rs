//! Score target termination.

use studyplan_core::HardSoftScore;
use studyplan_scoring::ScoreDirector;

use super::Termination;
use crate::scope::SolverScope;

/// Terminates when a complete best schedule reaches the target score.
///
/// A partially assigned schedule never satisfies the target, since its
/// unassigned sessions contribute no penalty.
#[derive(Debug, Clone, Copy)]
pub struct BestScoreTermination {
    target: HardSoftScore,
}

impl BestScoreTermination {
    pub fn new(target: HardSoftScore) -> Self {
        Self { target }
    }
}

impl<D: ScoreDirector> Termination<D> for BestScoreTermination {
    fn is_terminated(&self, solver_scope: &SolverScope<D>) -> bool {
        solver_scope.is_best_complete()
            && solver_scope
                .best_score()
                .is_some_and(|best| best >= self.target)
    }
}
