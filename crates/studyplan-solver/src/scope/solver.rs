//! Solver-level scope.

use std::time::{Duration, Instant};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use studyplan_core::{HardSoftScore, Schedule};
use studyplan_scoring::ScoreDirector;
use tokio::sync::mpsc::UnboundedSender;
use tracing::debug;

use crate::statistics::{PhaseStatistics, ScoreImprovement, SolverStatistics};

/// Random source of a solve. Seeded runs are reproducible.
pub type SolverRng = ChaCha8Rng;

/// Top-level scope for the entire solving process.
///
/// A schedule with more assigned sessions always counts as better than one
/// with fewer, whatever the scores. Unassigned sessions score nothing, so the
/// raw score alone would favour the empty schedule.
pub struct SolverScope<D: ScoreDirector> {
    score_director: D,
    best_solution: Option<Schedule>,
    best_score: Option<HardSoftScore>,
    best_assigned: usize,
    rng: SolverRng,
    start_time: Option<Instant>,
    last_improvement: Option<Instant>,
    total_step_count: u64,
    statistics: SolverStatistics,
    best_solution_sender: Option<UnboundedSender<(Schedule, HardSoftScore)>>,
}

impl<D: ScoreDirector> SolverScope<D> {
    pub fn new(score_director: D) -> Self {
        Self::with_rng(score_director, ChaCha8Rng::from_os_rng())
    }

    pub fn with_seed(score_director: D, seed: u64) -> Self {
        Self::with_rng(score_director, ChaCha8Rng::seed_from_u64(seed))
    }

    fn with_rng(score_director: D, rng: SolverRng) -> Self {
        Self {
            score_director,
            best_solution: None,
            best_score: None,
            best_assigned: 0,
            rng,
            start_time: None,
            last_improvement: None,
            total_step_count: 0,
            statistics: SolverStatistics::new(),
            best_solution_sender: None,
        }
    }

    /// Starts the clock and records the working schedule as the first best.
    pub fn start_solving(&mut self) {
        let now = Instant::now();
        self.start_time = Some(now);
        self.last_improvement = Some(now);
        self.total_step_count = 0;

        let score = self.score_director.calculate_score();
        self.best_assigned = self.score_director.working_solution().assigned_count();
        self.best_solution = Some(self.score_director.clone_working_solution());
        self.best_score = Some(score);
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.map(|t| t.elapsed()).unwrap_or_default()
    }

    /// Time since the best schedule last improved.
    pub fn time_since_last_improvement(&self) -> Duration {
        self.last_improvement
            .map(|t| t.elapsed())
            .unwrap_or_default()
    }

    pub fn score_director(&self) -> &D {
        &self.score_director
    }

    pub fn score_director_mut(&mut self) -> &mut D {
        &mut self.score_director
    }

    pub fn working_solution(&self) -> &Schedule {
        self.score_director.working_solution()
    }

    pub fn calculate_score(&mut self) -> HardSoftScore {
        self.score_director.calculate_score()
    }

    pub fn best_solution(&self) -> Option<&Schedule> {
        self.best_solution.as_ref()
    }

    pub fn best_score(&self) -> Option<HardSoftScore> {
        self.best_score
    }

    /// True if the best schedule has every session assigned.
    pub fn is_best_complete(&self) -> bool {
        self.best_solution
            .as_ref()
            .is_some_and(|s| s.unassigned_count() == 0)
    }

    /// Replaces the best schedule if the working schedule is better.
    ///
    /// Returns true on improvement.
    pub fn update_best_solution(&mut self) -> bool {
        let score = self.score_director.calculate_score();
        let assigned = self.score_director.working_solution().assigned_count();
        let is_better = match self.best_score {
            None => true,
            Some(best) => (assigned, score) > (self.best_assigned, best),
        };
        if !is_better {
            return false;
        }

        let solution = self.score_director.clone_working_solution();
        if let Some(sender) = &self.best_solution_sender {
            // A dropped receiver only means nobody listens any more
            let _ = sender.send((solution.clone(), score));
        }
        self.best_solution = Some(solution);
        self.best_score = Some(score);
        self.best_assigned = assigned;
        self.last_improvement = Some(Instant::now());
        self.statistics.score_history.push(ScoreImprovement {
            time_offset: self.elapsed(),
            step_count: self.total_step_count,
            score,
        });

        debug!(
            event = "best_improved",
            step = self.total_step_count,
            assigned = assigned,
            score = %score,
        );
        true
    }

    pub fn rng(&mut self) -> &mut SolverRng {
        &mut self.rng
    }

    /// Borrows the working schedule and the random source together.
    pub fn working_solution_and_rng(&mut self) -> (&Schedule, &mut SolverRng) {
        (self.score_director.working_solution(), &mut self.rng)
    }

    /// Borrows the score director and the random source together.
    pub fn score_director_and_rng(&mut self) -> (&mut D, &mut SolverRng) {
        (&mut self.score_director, &mut self.rng)
    }

    pub fn increment_step_count(&mut self) -> u64 {
        self.total_step_count += 1;
        self.total_step_count
    }

    pub fn total_step_count(&self) -> u64 {
        self.total_step_count
    }

    pub fn record_moves(&mut self, evaluated: u64, accepted: u64) {
        self.statistics.total_moves_evaluated += evaluated;
        self.statistics.total_moves_accepted += accepted;
    }

    pub fn record_phase(&mut self, phase: PhaseStatistics) {
        self.statistics.phase_statistics.push(phase);
    }

    pub fn statistics(&self) -> &SolverStatistics {
        &self.statistics
    }

    pub fn set_best_solution_sender(&mut self, sender: UnboundedSender<(Schedule, HardSoftScore)>) {
        self.best_solution_sender = Some(sender);
    }

    /// Finishes the solve, returning the best schedule and final statistics.
    pub fn finish(mut self) -> (Schedule, HardSoftScore, SolverStatistics) {
        self.statistics.total_duration = self.elapsed();
        self.statistics.total_step_count = self.total_step_count;

        let schedule = match self.best_solution {
            Some(best) => best,
            None => self.score_director.clone_working_solution(),
        };
        let score = schedule.score().unwrap_or_default();
        (schedule, score, self.statistics)
    }
}
