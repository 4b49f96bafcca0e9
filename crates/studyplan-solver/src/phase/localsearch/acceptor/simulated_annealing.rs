//! Simulated annealing acceptor.

use rand::Rng;
use studyplan_core::HardSoftScore;

use super::Acceptor;
use crate::scope::SolverRng;

/// Accepts worsening moves with probability `exp(-delta / temperature)`.
///
/// `delta` is measured on [`HardSoftScore::to_scalar`], so a hard penalty
/// dwarfs any soft one and is practically never accepted. The temperature
/// decays multiplicatively after every step.
#[derive(Debug, Clone)]
pub struct SimulatedAnnealingAcceptor {
    starting_temperature: f64,
    current_temperature: f64,
    decay_rate: f64,
}

impl SimulatedAnnealingAcceptor {
    pub fn new(starting_temperature: f64, decay_rate: f64) -> Self {
        Self {
            starting_temperature,
            current_temperature: starting_temperature,
            decay_rate,
        }
    }

    pub fn current_temperature(&self) -> f64 {
        self.current_temperature
    }
}

impl Default for SimulatedAnnealingAcceptor {
    fn default() -> Self {
        Self::new(10.0, 0.999)
    }
}

impl Acceptor for SimulatedAnnealingAcceptor {
    fn is_accepted(
        &mut self,
        last_step_score: HardSoftScore,
        move_score: HardSoftScore,
        rng: &mut SolverRng,
    ) -> bool {
        if move_score >= last_step_score {
            return true;
        }
        if self.current_temperature <= 0.0 {
            return false;
        }
        let delta = last_step_score.to_scalar() - move_score.to_scalar();
        let probability = (-delta / self.current_temperature).exp();
        rng.random::<f64>() < probability
    }

    fn phase_started(&mut self, _initial_score: HardSoftScore) {
        self.current_temperature = self.starting_temperature;
    }

    fn step_ended(&mut self, _step_score: HardSoftScore) {
        self.current_temperature *= self.decay_rate;
    }
}
