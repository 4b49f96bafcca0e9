//! The planning entry point: decompose, solve, assemble.

use std::collections::HashSet;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use studyplan_config::{ConfigError, SolverConfig};
use studyplan_core::{FixedEvent, HardSoftScore, PlanError, Schedule, Task, UserPreferences};
use studyplan_scoring::{default_constraints, ScoreDirector, ScoreExplanation, SimpleScoreDirector};
use studyplan_solver::{Solver, SolverStatistics};
use tokio::sync::mpsc::UnboundedSender;
use tracing::{info, warn};

use crate::assemble::{assemble, ScheduledSession};
use crate::decompose::Decomposer;

/// Everything one planning run needs from the caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanningRequest {
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub fixed_events: Vec<FixedEvent>,
    #[serde(default)]
    pub preferences: UserPreferences,
}

impl PlanningRequest {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self {
            tasks,
            ..Self::default()
        }
    }

    pub fn with_fixed_events(mut self, fixed_events: Vec<FixedEvent>) -> Self {
        self.fixed_events = fixed_events;
        self
    }

    pub fn with_preferences(mut self, preferences: UserPreferences) -> Self {
        self.preferences = preferences;
        self
    }
}

/// The plan produced for a request.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanResult {
    pub sessions: Vec<ScheduledSession>,
    pub score: HardSoftScore,
    pub hard_penalty: i64,
    pub soft_penalty: i64,
    pub feasible: bool,
    /// Sessions the solver had no time to place.
    pub unassigned: usize,
    /// The solved working schedule, for [`Planner::explain`].
    #[serde(skip)]
    pub schedule: Option<Schedule>,
    #[serde(skip)]
    pub statistics: SolverStatistics,
}

impl PlanResult {
    fn new(schedule: Schedule, score: HardSoftScore, statistics: SolverStatistics) -> Self {
        Self {
            sessions: assemble(&schedule),
            score,
            hard_penalty: score.hard_penalty(),
            soft_penalty: score.soft_penalty(),
            // Unplaced sessions are a failure to schedule, not a feasible plan
            feasible: score.is_feasible() && schedule.unassigned_count() == 0,
            unassigned: schedule.unassigned_count(),
            schedule: Some(schedule),
            statistics,
        }
    }

    fn empty() -> Self {
        Self {
            sessions: Vec::new(),
            score: HardSoftScore::ZERO,
            hard_penalty: 0,
            soft_penalty: 0,
            feasible: true,
            unassigned: 0,
            schedule: None,
            statistics: SolverStatistics::default(),
        }
    }
}

/// Plans study sessions. Holds no per-request state.
///
/// # Example
///
/// ```
/// use studyplan::{Planner, PlanningRequest};
/// use studyplan::studyplan_config::SolverConfig;
///
/// let planner = Planner::new(SolverConfig::new().with_step_limit(10)).unwrap();
/// let plan = planner.plan(&PlanningRequest::default()).unwrap();
/// assert!(plan.sessions.is_empty());
/// ```
#[derive(Debug)]
pub struct Planner {
    decomposer: Decomposer,
    solver: Solver,
}

impl Planner {
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the configuration does not validate.
    pub fn new(config: SolverConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let decomposer = Decomposer::from_config(&config.planning)?;
        let solver = Solver::from_config(config)?;
        Ok(Self { decomposer, solver })
    }

    /// Loads `path`, falling back to the default configuration when the file
    /// is missing or unreadable.
    pub fn from_config_file(path: impl AsRef<Path>) -> Self {
        let config = SolverConfig::load(path).unwrap_or_default();
        Self::new(config).unwrap_or_else(|e| {
            warn!(error = %e, "invalid configuration, using defaults");
            Self::default()
        })
    }

    pub fn with_terminate_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.solver = self.solver.with_terminate_flag(flag);
        self
    }

    pub fn with_best_solution_sender(
        mut self,
        sender: UnboundedSender<(Schedule, HardSoftScore)>,
    ) -> Self {
        self.solver = self.solver.with_best_solution_sender(sender);
        self
    }

    pub fn config(&self) -> &SolverConfig {
        self.solver.config()
    }

    /// Raises the cancellation flag of running plans. The next plan starts
    /// with it lowered.
    pub fn terminate_early(&self) {
        self.solver.terminate_early();
    }

    /// Plans starting tomorrow, by the local clock.
    pub fn plan(&self, request: &PlanningRequest) -> Result<PlanResult, PlanError> {
        self.plan_on(request, Local::now().date_naive())
    }

    /// Plans as if today were `today`.
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::DuplicateTaskName`] if two tasks share a name.
    /// Unsatisfiable requests are not errors: check the result's score.
    pub fn plan_on(
        &self,
        request: &PlanningRequest,
        today: NaiveDate,
    ) -> Result<PlanResult, PlanError> {
        let schedule = self.build_schedule(request, today)?;
        if schedule.sessions.is_empty() {
            info!(tasks = request.tasks.len(), "nothing to schedule");
            return Ok(PlanResult::empty());
        }

        let result = self.solver.solve(schedule);
        Ok(PlanResult::new(
            result.schedule,
            result.score,
            result.statistics,
        ))
    }

    /// Decomposes a request into its unassigned working schedule.
    pub fn build_schedule(
        &self,
        request: &PlanningRequest,
        today: NaiveDate,
    ) -> Result<Schedule, PlanError> {
        validate_task_names(&request.tasks)?;
        let decomposition =
            self.decomposer
                .decompose(request.tasks.clone(), &request.preferences, today);
        Ok(decomposition.into_schedule(request.fixed_events.clone()))
    }

    /// Breaks a schedule's score down by constraint.
    pub fn explain(&self, schedule: &Schedule) -> ScoreExplanation {
        let mut director =
            SimpleScoreDirector::new(schedule.clone(), self.solver.constraints().clone());
        director.explain()
    }
}

impl Default for Planner {
    fn default() -> Self {
        let config = SolverConfig::default();
        Self {
            decomposer: Decomposer::from_config(&config.planning).unwrap_or_default(),
            solver: Solver::new(config, default_constraints()),
        }
    }
}

fn validate_task_names(tasks: &[Task]) -> Result<(), PlanError> {
    let mut seen = HashSet::with_capacity(tasks.len());
    for task in tasks {
        if !seen.insert(task.name()) {
            return Err(PlanError::DuplicateTaskName(task.name().to_string()));
        }
    }
    Ok(())
}
