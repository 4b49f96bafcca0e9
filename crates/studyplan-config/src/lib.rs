//! Configuration system for studyplan.
//!
//! Load solver configuration from TOML or YAML files to control termination,
//! phases, planning defaults and constraint weights without code changes.
//!
//! # Examples
//!
//! ```
//! use studyplan_config::{AcceptorConfig, SolverConfig};
//! use std::time::Duration;
//!
//! let config = SolverConfig::from_toml_str(r#"
//!     random_seed = 42
//!
//!     [termination]
//!     seconds_spent_limit = 10
//!     unimproved_millis_spent_limit = 1500
//!
//!     [local_search]
//!     move_count_per_step = 32
//!     [local_search.acceptor]
//!     type = "simulated_annealing"
//!     starting_temperature = 2.0
//!
//!     [planning]
//!     date_buffer_days = 1
//!
//!     [constraint_weights]
//!     "Outside preferred hours" = "0hard/5soft"
//! "#).unwrap();
//!
//! assert_eq!(config.time_limit(), Duration::from_secs(10));
//! assert_eq!(config.unimproved_time_limit(), Duration::from_millis(1500));
//! assert!(matches!(config.local_search.acceptor, AcceptorConfig::SimulatedAnnealing(_)));
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use studyplan_config::SolverConfig;
//!
//! let config = SolverConfig::load("solver.toml").unwrap_or_default();
//! assert_eq!(config.planning.time_granularity_minutes, 30);
//! ```

use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use studyplan_core::{HardSoftScore, StudyWindow};
use thiserror::Error;

/// Total budget used when no time limit is configured.
pub const DEFAULT_TIME_LIMIT: Duration = Duration::from_secs(30);

/// No-improvement budget used when none is configured.
pub const DEFAULT_UNIMPROVED_TIME_LIMIT: Duration = Duration::from_secs(5);

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main solver configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SolverConfig {
    /// Random seed for reproducible results.
    #[serde(default)]
    pub random_seed: Option<u64>,

    /// Number of threads for parallel move evaluation.
    #[serde(default)]
    pub move_thread_count: MoveThreadCount,

    /// Termination configuration.
    #[serde(default)]
    pub termination: Option<TerminationConfig>,

    /// Construction heuristic configuration.
    #[serde(default)]
    pub construction: ConstructionHeuristicConfig,

    /// Local search configuration.
    #[serde(default)]
    pub local_search: LocalSearchConfig,

    /// Decomposition defaults.
    #[serde(default)]
    pub planning: PlanningConfig,

    /// Constraint name to weight, e.g. `"1hard/0soft"`.
    #[serde(default)]
    pub constraint_weights: BTreeMap<String, String>,
}

impl SolverConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a file, YAML for `.yaml`/`.yml`, TOML otherwise.
    ///
    /// # Errors
    ///
    /// Returns error if the file doesn't exist, fails to parse, or fails
    /// [`validate`](Self::validate).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let config = match path.extension().and_then(|e| e.to_str()) {
            Some("yaml" | "yml") => Self::from_yaml_file(path)?,
            _ => Self::from_toml_file(path)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Checks values that serde cannot: score strings, times and ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(termination) = &self.termination {
            termination.best_score_limit()?;
        }
        self.planning.study_window()?;
        if self.planning.time_granularity_minutes == 0 {
            return Err(ConfigError::Invalid(
                "time_granularity_minutes must be positive".to_string(),
            ));
        }
        if self.local_search.move_count_per_step == 0 {
            return Err(ConfigError::Invalid(
                "move_count_per_step must be positive".to_string(),
            ));
        }
        if let MoveThreadCount::Count(0) = self.move_thread_count {
            return Err(ConfigError::Invalid(
                "move_thread_count must be positive".to_string(),
            ));
        }
        self.constraint_weights()?;
        Ok(())
    }

    fn termination_mut(&mut self) -> &mut TerminationConfig {
        self.termination.get_or_insert_with(TerminationConfig::default)
    }

    /// Sets the termination time limit.
    pub fn with_termination_seconds(mut self, seconds: u64) -> Self {
        let termination = self.termination_mut();
        termination.seconds_spent_limit = Some(seconds);
        termination.millis_spent_limit = None;
        self
    }

    /// Sets the termination time limit in milliseconds.
    pub fn with_termination_millis(mut self, millis: u64) -> Self {
        let termination = self.termination_mut();
        termination.seconds_spent_limit = None;
        termination.millis_spent_limit = Some(millis);
        self
    }

    /// Sets the no-improvement time limit in milliseconds.
    pub fn with_unimproved_millis(mut self, millis: u64) -> Self {
        let termination = self.termination_mut();
        termination.unimproved_seconds_spent_limit = None;
        termination.unimproved_millis_spent_limit = Some(millis);
        self
    }

    /// Sets the maximum number of local search steps.
    pub fn with_step_limit(mut self, steps: u64) -> Self {
        self.termination_mut().step_count_limit = Some(steps);
        self
    }

    /// Stops as soon as the best score reaches `score`.
    pub fn with_best_score_limit(mut self, score: HardSoftScore) -> Self {
        self.termination_mut().best_score_limit = Some(score.to_string());
        self
    }

    /// Sets the random seed.
    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    pub fn with_move_thread_count(mut self, count: MoveThreadCount) -> Self {
        self.move_thread_count = count;
        self
    }

    pub fn with_construction_heuristic(mut self, kind: ConstructionHeuristicType) -> Self {
        self.construction.construction_heuristic_type = kind;
        self
    }

    pub fn with_acceptor(mut self, acceptor: AcceptorConfig) -> Self {
        self.local_search.acceptor = acceptor;
        self
    }

    /// Overrides one constraint weight.
    pub fn with_constraint_weight(mut self, name: impl Into<String>, weight: HardSoftScore) -> Self {
        self.constraint_weights.insert(name.into(), weight.to_string());
        self
    }

    /// Total time budget, defaulting to 30 seconds.
    ///
    /// # Examples
    ///
    /// ```
    /// use studyplan_config::SolverConfig;
    /// use std::time::Duration;
    ///
    /// let config = SolverConfig::new().with_termination_millis(0);
    /// assert_eq!(config.time_limit(), Duration::ZERO);
    /// assert_eq!(SolverConfig::new().time_limit(), Duration::from_secs(30));
    /// ```
    pub fn time_limit(&self) -> Duration {
        self.termination
            .as_ref()
            .and_then(TerminationConfig::time_limit)
            .unwrap_or(DEFAULT_TIME_LIMIT)
    }

    /// No-improvement budget, defaulting to 5 seconds.
    pub fn unimproved_time_limit(&self) -> Duration {
        self.termination
            .as_ref()
            .and_then(TerminationConfig::unimproved_time_limit)
            .unwrap_or(DEFAULT_UNIMPROVED_TIME_LIMIT)
    }

    pub fn step_count_limit(&self) -> Option<u64> {
        self.termination.as_ref().and_then(|t| t.step_count_limit)
    }

    /// Parsed best score limit, if configured.
    pub fn best_score_limit(&self) -> Result<Option<HardSoftScore>, ConfigError> {
        match &self.termination {
            Some(termination) => termination.best_score_limit(),
            None => Ok(None),
        }
    }

    /// Parsed constraint weights.
    pub fn constraint_weights(&self) -> Result<Vec<(String, HardSoftScore)>, ConfigError> {
        self.constraint_weights
            .iter()
            .map(|(name, weight)| {
                HardSoftScore::parse(weight)
                    .map(|score| (name.clone(), score))
                    .map_err(|e| ConfigError::Invalid(format!("weight of '{name}': {e}")))
            })
            .collect()
    }
}

/// Move thread count configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveThreadCount {
    /// No parallel move evaluation.
    #[default]
    None,

    /// Let the thread pool size itself from available cores.
    Auto,

    /// Specific number of threads.
    Count(usize),
}

/// Termination configuration.
///
/// Second and millisecond limits of the same kind are added together.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct TerminationConfig {
    /// Maximum seconds to spend solving.
    pub seconds_spent_limit: Option<u64>,

    /// Maximum milliseconds to spend solving.
    pub millis_spent_limit: Option<u64>,

    /// Maximum seconds without improvement of the best score.
    pub unimproved_seconds_spent_limit: Option<u64>,

    /// Maximum milliseconds without improvement of the best score.
    pub unimproved_millis_spent_limit: Option<u64>,

    /// Maximum number of local search steps.
    pub step_count_limit: Option<u64>,

    /// Target best score to achieve (as string, e.g., "0hard/0soft").
    pub best_score_limit: Option<String>,
}

fn combined(seconds: Option<u64>, millis: Option<u64>) -> Option<Duration> {
    if seconds.is_none() && millis.is_none() {
        return None;
    }
    let secs = Duration::from_secs(seconds.unwrap_or(0));
    Some(secs + Duration::from_millis(millis.unwrap_or(0)))
}

impl TerminationConfig {
    /// Returns the time limit, if any. Zero is a valid limit.
    pub fn time_limit(&self) -> Option<Duration> {
        combined(self.seconds_spent_limit, self.millis_spent_limit)
    }

    /// Returns the unimproved time limit, if any.
    pub fn unimproved_time_limit(&self) -> Option<Duration> {
        combined(
            self.unimproved_seconds_spent_limit,
            self.unimproved_millis_spent_limit,
        )
    }

    pub fn best_score_limit(&self) -> Result<Option<HardSoftScore>, ConfigError> {
        self.best_score_limit
            .as_deref()
            .map(HardSoftScore::parse)
            .transpose()
            .map_err(|e| ConfigError::Invalid(e.to_string()))
    }
}

/// Construction heuristic configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ConstructionHeuristicConfig {
    /// Type of construction heuristic.
    #[serde(default)]
    pub construction_heuristic_type: ConstructionHeuristicType,
}

/// Construction heuristic types.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConstructionHeuristicType {
    /// First placement that adds no hard violation.
    FirstFit,

    /// Best scoring placement over the whole domain.
    #[default]
    BestFit,
}

/// Local search configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct LocalSearchConfig {
    /// Acceptor configuration.
    pub acceptor: AcceptorConfig,

    /// Candidate moves drawn per step.
    pub move_count_per_step: usize,

    /// Stop evaluating a step after this many accepted moves.
    pub accepted_count_limit: usize,
}

impl Default for LocalSearchConfig {
    fn default() -> Self {
        Self {
            acceptor: AcceptorConfig::default(),
            move_count_per_step: 64,
            accepted_count_limit: 8,
        }
    }
}

/// Acceptor configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AcceptorConfig {
    /// Accept moves that do not worsen the last step score.
    HillClimbing,

    /// Late acceptance acceptor.
    LateAcceptance(LateAcceptanceConfig),

    /// Simulated annealing acceptor.
    SimulatedAnnealing(SimulatedAnnealingConfig),
}

impl Default for AcceptorConfig {
    fn default() -> Self {
        AcceptorConfig::LateAcceptance(LateAcceptanceConfig::default())
    }
}

/// Late acceptance configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct LateAcceptanceConfig {
    /// Size of late acceptance list.
    pub late_acceptance_size: usize,
}

impl Default for LateAcceptanceConfig {
    fn default() -> Self {
        Self {
            late_acceptance_size: 400,
        }
    }
}

/// Simulated annealing configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct SimulatedAnnealingConfig {
    /// Starting temperature, in scalar score units.
    pub starting_temperature: f64,

    /// Multiplicative temperature decay per step.
    pub decay_rate: f64,
}

impl Default for SimulatedAnnealingConfig {
    fn default() -> Self {
        Self {
            starting_temperature: 10.0,
            decay_rate: 0.999,
        }
    }
}

/// Decomposition defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct PlanningConfig {
    /// Extra days past the latest deadline in the date domain.
    pub date_buffer_days: u32,

    /// Step between candidate start times.
    pub time_granularity_minutes: u32,

    /// Window start used when preferences are missing or inverted (`HH:MM`).
    pub default_study_start: String,

    /// Window end used when preferences are missing or inverted (`HH:MM`).
    pub default_study_end: String,

    /// Break used when preferences do not set one.
    pub default_break_minutes: u32,
}

impl Default for PlanningConfig {
    fn default() -> Self {
        Self {
            date_buffer_days: 3,
            time_granularity_minutes: 30,
            default_study_start: "08:00".to_string(),
            default_study_end: "22:00".to_string(),
            default_break_minutes: 15,
        }
    }
}

fn parse_time(field: &str, value: &str) -> Result<NaiveTime, ConfigError> {
    NaiveTime::parse_from_str(value, "%H:%M")
        .map_err(|e| ConfigError::Invalid(format!("{field} '{value}': {e}")))
}

impl PlanningConfig {
    /// The default study window.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if a time is not `HH:MM` or the start
    /// is not before the end.
    pub fn study_window(&self) -> Result<StudyWindow, ConfigError> {
        let start = parse_time("default_study_start", &self.default_study_start)?;
        let end = parse_time("default_study_end", &self.default_study_end)?;
        if start >= end {
            return Err(ConfigError::Invalid(format!(
                "default study window {start}-{end} is empty"
            )));
        }
        Ok(StudyWindow::new(start, end, self.default_break_minutes))
    }
}

#[cfg(test)]
mod tests;
