// Simple score director with full recalculation.

use studyplan_core::{HardSoftScore, Schedule, Session};

use crate::api::analysis::ScoreExplanation;
use crate::api::constraint_set::ConstraintSet;

use super::ScoreDirector;

// A score director that recalculates the whole score on every request.
//
// O(n²) per calculation. Used as the reference when checking the
// incremental director.
#[derive(Clone)]
pub struct SimpleScoreDirector<C> {
    working_solution: Schedule,
    constraints: C,
}

impl<C: ConstraintSet> SimpleScoreDirector<C> {
    pub fn new(solution: Schedule, constraints: C) -> Self {
        Self {
            working_solution: solution,
            constraints,
        }
    }

    pub fn into_working_solution(self) -> Schedule {
        self.working_solution
    }
}

impl<C: ConstraintSet> ScoreDirector for SimpleScoreDirector<C> {
    fn working_solution(&self) -> &Schedule {
        &self.working_solution
    }

    fn calculate_score(&mut self) -> HardSoftScore {
        let score = self.constraints.evaluate_all(&self.working_solution);
        self.working_solution.set_score(Some(score));
        score
    }

    fn before_session_changed(&mut self, _session_index: usize) {}

    fn after_session_changed(&mut self, _session_index: usize) {
        self.working_solution.set_score(None);
    }

    fn session_mut(&mut self, session_index: usize) -> &mut Session {
        &mut self.working_solution.sessions[session_index]
    }

    fn explain(&mut self) -> ScoreExplanation {
        ScoreExplanation::new(self.constraints.evaluate_detailed(&self.working_solution))
    }
}
