//! Acceptor chosen at runtime from configuration.

use studyplan_config::AcceptorConfig;
use studyplan_core::HardSoftScore;

use super::{Acceptor, HillClimbingAcceptor, LateAcceptanceAcceptor, SimulatedAnnealingAcceptor};
use crate::scope::SolverRng;

/// One of the supported acceptors, dispatched by enum.
#[derive(Debug, Clone)]
pub enum ConfiguredAcceptor {
    HillClimbing(HillClimbingAcceptor),
    LateAcceptance(LateAcceptanceAcceptor),
    SimulatedAnnealing(SimulatedAnnealingAcceptor),
}

impl ConfiguredAcceptor {
    pub fn from_config(config: &AcceptorConfig) -> Self {
        match config {
            AcceptorConfig::HillClimbing => Self::HillClimbing(HillClimbingAcceptor::new()),
            AcceptorConfig::LateAcceptance(c) => {
                Self::LateAcceptance(LateAcceptanceAcceptor::new(c.late_acceptance_size))
            }
            AcceptorConfig::SimulatedAnnealing(c) => Self::SimulatedAnnealing(
                SimulatedAnnealingAcceptor::new(c.starting_temperature, c.decay_rate),
            ),
        }
    }

    fn inner(&mut self) -> &mut dyn Acceptor {
        match self {
            Self::HillClimbing(a) => a,
            Self::LateAcceptance(a) => a,
            Self::SimulatedAnnealing(a) => a,
        }
    }
}

impl Default for ConfiguredAcceptor {
    fn default() -> Self {
        Self::from_config(&AcceptorConfig::default())
    }
}

impl Acceptor for ConfiguredAcceptor {
    fn is_accepted(
        &mut self,
        last_step_score: HardSoftScore,
        move_score: HardSoftScore,
        rng: &mut SolverRng,
    ) -> bool {
        self.inner().is_accepted(last_step_score, move_score, rng)
    }

    fn phase_started(&mut self, initial_score: HardSoftScore) {
        self.inner().phase_started(initial_score);
    }

    fn phase_ended(&mut self) {
        self.inner().phase_ended();
    }

    fn step_ended(&mut self, step_score: HardSoftScore) {
        self.inner().step_ended(step_score);
    }
}
