//! Wall-clock termination.

use std::time::Duration;

use studyplan_scoring::ScoreDirector;

use super::Termination;
use crate::scope::SolverScope;

/// Terminates after a time limit measured from the start of the solve.
#[derive(Debug, Clone, Copy)]
pub struct TimeTermination {
    limit: Duration,
}

impl TimeTermination {
    pub fn new(limit: Duration) -> Self {
        Self { limit }
    }

    pub fn seconds(secs: u64) -> Self {
        Self::new(Duration::from_secs(secs))
    }

    pub fn millis(ms: u64) -> Self {
        Self::new(Duration::from_millis(ms))
    }

    pub fn limit(&self) -> Duration {
        self.limit
    }
}

impl<D: ScoreDirector> Termination<D> for TimeTermination {
    fn is_terminated(&self, solver_scope: &SolverScope<D>) -> bool {
        solver_scope.elapsed() >= self.limit
    }
}
