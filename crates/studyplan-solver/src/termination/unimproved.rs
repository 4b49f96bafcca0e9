//! Terminates when the best schedule stops improving.

use std::time::Duration;

use studyplan_scoring::ScoreDirector;

use super::Termination;
use crate::scope::SolverScope;

/// Terminates once no best improvement happened for `limit`.
#[derive(Debug, Clone, Copy)]
pub struct UnimprovedTimeTermination {
    limit: Duration,
}

impl UnimprovedTimeTermination {
    pub fn new(limit: Duration) -> Self {
        Self { limit }
    }

    pub fn millis(ms: u64) -> Self {
        Self::new(Duration::from_millis(ms))
    }
}

impl<D: ScoreDirector> Termination<D> for UnimprovedTimeTermination {
    fn is_terminated(&self, solver_scope: &SolverScope<D>) -> bool {
        solver_scope.time_since_last_improvement() >= self.limit
    }
}
