//! Late acceptance acceptor.

use studyplan_core::HardSoftScore;

use super::Acceptor;
use crate::scope::SolverRng;

/// Accepts moves that are no worse than the last step, or no worse than the
/// step score from `late_acceptance_size` steps ago.
///
/// # Example
///
/// ```
/// use studyplan_solver::LateAcceptanceAcceptor;
///
/// let acceptor = LateAcceptanceAcceptor::new(400);
/// assert_eq!(acceptor.late_acceptance_size(), 400);
/// ```
#[derive(Debug, Clone)]
pub struct LateAcceptanceAcceptor {
    late_acceptance_size: usize,
    score_history: Vec<Option<HardSoftScore>>,
    current_index: usize,
}

impl LateAcceptanceAcceptor {
    pub fn new(late_acceptance_size: usize) -> Self {
        let late_acceptance_size = late_acceptance_size.max(1);
        Self {
            late_acceptance_size,
            score_history: vec![None; late_acceptance_size],
            current_index: 0,
        }
    }

    pub fn late_acceptance_size(&self) -> usize {
        self.late_acceptance_size
    }
}

impl Default for LateAcceptanceAcceptor {
    fn default() -> Self {
        Self::new(400)
    }
}

impl Acceptor for LateAcceptanceAcceptor {
    fn is_accepted(
        &mut self,
        last_step_score: HardSoftScore,
        move_score: HardSoftScore,
        _rng: &mut SolverRng,
    ) -> bool {
        if move_score >= last_step_score {
            return true;
        }
        match self.score_history[self.current_index] {
            Some(late_score) => move_score >= late_score,
            None => false,
        }
    }

    fn phase_started(&mut self, initial_score: HardSoftScore) {
        self.score_history.fill(Some(initial_score));
        self.current_index = 0;
    }

    fn step_ended(&mut self, step_score: HardSoftScore) {
        self.score_history[self.current_index] = Some(step_score);
        self.current_index = (self.current_index + 1) % self.late_acceptance_size;
    }
}
