//! Termination requested from outside the solver.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use studyplan_scoring::ScoreDirector;

use super::Termination;
use crate::scope::SolverScope;

/// Terminates when a shared flag is raised, typically from another thread.
#[derive(Debug, Clone)]
pub struct ExternalTermination {
    flag: Arc<AtomicBool>,
}

impl ExternalTermination {
    pub fn new(flag: Arc<AtomicBool>) -> Self {
        Self { flag }
    }
}

impl<D: ScoreDirector> Termination<D> for ExternalTermination {
    fn is_terminated(&self, _solver_scope: &SolverScope<D>) -> bool {
        self.flag.load(Ordering::SeqCst)
    }
}
