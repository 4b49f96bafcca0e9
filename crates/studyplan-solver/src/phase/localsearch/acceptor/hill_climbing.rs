//! Hill climbing acceptor.

use studyplan_core::HardSoftScore;

use super::Acceptor;
use crate::scope::SolverRng;

/// Accepts moves that do not worsen the last step score.
///
/// Equal scores are accepted so the search can drift across plateaus.
#[derive(Debug, Clone, Copy, Default)]
pub struct HillClimbingAcceptor;

impl HillClimbingAcceptor {
    pub fn new() -> Self {
        Self
    }
}

impl Acceptor for HillClimbingAcceptor {
    fn is_accepted(
        &mut self,
        last_step_score: HardSoftScore,
        move_score: HardSoftScore,
        _rng: &mut SolverRng,
    ) -> bool {
        move_score >= last_step_score
    }
}
