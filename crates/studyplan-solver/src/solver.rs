//! Solver implementation.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use studyplan_config::{ConfigError, MoveThreadCount, SolverConfig};
use studyplan_core::{HardSoftScore, Schedule};
use studyplan_scoring::{
    create_constraints, ConstraintSet, ConstraintWeightOverrides, IncrementalScoreDirector,
    StudyConstraints,
};
use tokio::sync::mpsc::UnboundedSender;
use tracing::{info, warn};

use crate::heuristic::RandomMoveSelector;
use crate::phase::construction::ConstructionHeuristicPhase;
use crate::phase::localsearch::{AcceptedCountForager, ConfiguredAcceptor, LocalSearchPhase};
use crate::phase::Phase;
use crate::scope::SolverScope;
use crate::statistics::SolverStatistics;
use crate::termination::{
    BestScoreTermination, ExternalTermination, OrTermination, StepCountTermination,
    TimeTermination, UnimprovedTimeTermination,
};

/// Outcome of a solve: the best schedule seen, its score and run statistics.
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub schedule: Schedule,
    pub score: HardSoftScore,
    pub statistics: SolverStatistics,
}

impl SolveResult {
    /// True if every session got a date and a start time.
    pub fn is_complete(&self) -> bool {
        self.schedule.unassigned_count() == 0
    }
}

/// Runs construction then local search on a schedule.
///
/// The solver keeps no state between calls: every [`solve`](Self::solve)
/// gets its own score director and scope. One solver can serve many
/// requests, though they share the cancellation flag.
///
/// # Example
///
/// ```
/// use studyplan_config::SolverConfig;
/// use studyplan_scoring::default_constraints;
/// use studyplan_solver::Solver;
/// use studyplan_test::{task, ScheduleBuilder};
///
/// let config = SolverConfig::new().with_random_seed(1).with_step_limit(50);
/// let solver = Solver::new(config, default_constraints());
///
/// let schedule = ScheduleBuilder::new().task(task("Algebra", 2.0, Some(7), 1.0)).build();
/// let result = solver.solve(schedule);
///
/// assert!(result.is_complete());
/// assert!(result.score.is_feasible());
/// ```
#[derive(Debug)]
pub struct Solver<C = StudyConstraints> {
    config: SolverConfig,
    constraints: C,
    terminate_early_flag: Arc<AtomicBool>,
    best_solution_sender: Option<UnboundedSender<(Schedule, HardSoftScore)>>,
}

impl Solver<StudyConstraints> {
    /// Builds a solver with the constraint weights named in `config`.
    pub fn from_config(config: SolverConfig) -> Result<Self, ConfigError> {
        let overrides = ConstraintWeightOverrides::from_pairs(config.constraint_weights()?);
        let constraints = create_constraints(&overrides);
        Ok(Self::new(config, constraints))
    }
}

impl<C> Solver<C>
where
    C: ConstraintSet + Clone,
{
    pub fn new(config: SolverConfig, constraints: C) -> Self {
        Self {
            config,
            constraints,
            terminate_early_flag: Arc::new(AtomicBool::new(false)),
            best_solution_sender: None,
        }
    }

    /// Shares a cancellation flag with the caller.
    pub fn with_terminate_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.terminate_early_flag = flag;
        self
    }

    /// Streams every new best schedule to `sender`. The final best is sent
    /// once more when the solve ends.
    pub fn with_best_solution_sender(
        mut self,
        sender: UnboundedSender<(Schedule, HardSoftScore)>,
    ) -> Self {
        self.best_solution_sender = Some(sender);
        self
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    pub fn constraints(&self) -> &C {
        &self.constraints
    }

    /// Clone of the cancellation flag. Raising it ends a running solve at the
    /// next step. Every solve lowers it on start.
    pub fn terminate_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.terminate_early_flag)
    }

    pub fn terminate_early(&self) {
        self.terminate_early_flag.store(true, Ordering::SeqCst);
    }

    fn move_thread_count(&self) -> usize {
        match self.config.move_thread_count {
            MoveThreadCount::None => 1,
            MoveThreadCount::Auto => rayon::current_num_threads(),
            MoveThreadCount::Count(n) => n,
        }
    }

    /// Solves `schedule` within the configured budget.
    ///
    /// Never fails: an infeasible instance comes back with a hard penalty,
    /// and a zero budget returns the schedule as given.
    pub fn solve(&self, schedule: Schedule) -> SolveResult {
        // A cancellation only applies to the solve it interrupted
        self.terminate_early_flag.store(false, Ordering::SeqCst);

        let best_score_limit = match self.config.best_score_limit() {
            Ok(limit) => limit,
            Err(e) => {
                warn!(error = %e, "ignoring invalid best score limit");
                None
            }
        };
        let termination = OrTermination::new((
            TimeTermination::new(self.config.time_limit()),
            UnimprovedTimeTermination::new(self.config.unimproved_time_limit()),
            self.config.step_count_limit().map(StepCountTermination::new),
            best_score_limit.map(BestScoreTermination::new),
            ExternalTermination::new(self.terminate_flag()),
        ));

        info!(
            event = "solve_start",
            session_count = schedule.sessions.len(),
            task_count = schedule.tasks().len(),
            date_count = schedule.date_domain().len(),
            time_count = schedule.time_domain().len(),
            time_limit_ms = self.config.time_limit().as_millis() as u64,
            seed = ?self.config.random_seed,
        );

        let director = IncrementalScoreDirector::new(schedule, self.constraints.clone());
        let mut solver_scope = match self.config.random_seed {
            Some(seed) => SolverScope::with_seed(director, seed),
            None => SolverScope::new(director),
        };
        if let Some(sender) = &self.best_solution_sender {
            solver_scope.set_best_solution_sender(sender.clone());
        }
        solver_scope.start_solving();

        let has_work = {
            let schedule = solver_scope.working_solution();
            !schedule.sessions.is_empty()
                && !schedule.date_domain().is_empty()
                && !schedule.time_domain().is_empty()
        };
        if has_work {
            let mut construction = ConstructionHeuristicPhase::new(
                self.config.construction.construction_heuristic_type,
            );
            construction.solve(&mut solver_scope, 0, &termination);

            let local = &self.config.local_search;
            let mut local_search = LocalSearchPhase::new(
                RandomMoveSelector::new(),
                ConfiguredAcceptor::from_config(&local.acceptor),
                AcceptedCountForager::new(local.accepted_count_limit),
                local.move_count_per_step,
            )
            .with_move_thread_count(self.move_thread_count());
            local_search.solve(&mut solver_scope, 1, &termination);
        }

        let (schedule, score, statistics) = solver_scope.finish();
        info!(
            event = "solve_end",
            score = %score,
            assigned = schedule.assigned_count(),
            unassigned = schedule.unassigned_count(),
            steps = statistics.total_step_count,
            moves_evaluated = statistics.total_moves_evaluated,
            duration_ms = statistics.total_duration.as_millis() as u64,
        );

        if let Some(sender) = &self.best_solution_sender {
            let _ = sender.send((schedule.clone(), score));
        }
        SolveResult {
            schedule,
            score,
            statistics,
        }
    }
}

#[cfg(test)]
mod tests;
