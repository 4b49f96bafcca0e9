//! Solver statistics collection and reporting.

use std::time::Duration;

use studyplan_core::HardSoftScore;

/// Statistics for a single solver phase.
#[derive(Debug, Clone)]
pub struct PhaseStatistics {
    /// Index of this phase (0-based).
    pub phase_index: usize,
    /// Type name of the phase ("ConstructionHeuristic" or "LocalSearch").
    pub phase_type: String,
    pub duration: Duration,
    pub step_count: u64,
    pub moves_evaluated: u64,
    pub moves_accepted: u64,
    pub starting_score: Option<HardSoftScore>,
    pub ending_score: Option<HardSoftScore>,
}

impl PhaseStatistics {
    /// Creates empty phase statistics.
    pub fn new(phase_index: usize, phase_type: impl Into<String>) -> Self {
        Self {
            phase_index,
            phase_type: phase_type.into(),
            duration: Duration::ZERO,
            step_count: 0,
            moves_evaluated: 0,
            moves_accepted: 0,
            starting_score: None,
            ending_score: None,
        }
    }

    /// Returns the acceptance rate (accepted / evaluated).
    pub fn acceptance_rate(&self) -> f64 {
        if self.moves_evaluated == 0 {
            0.0
        } else {
            self.moves_accepted as f64 / self.moves_evaluated as f64
        }
    }

    /// Moves evaluated per second.
    pub fn speed(&self) -> u64 {
        let secs = self.duration.as_secs_f64();
        if secs > 0.0 {
            (self.moves_evaluated as f64 / secs) as u64
        } else {
            0
        }
    }
}

/// Record of a best score improvement.
#[derive(Debug, Clone, Copy)]
pub struct ScoreImprovement {
    /// Time since solving started.
    pub time_offset: Duration,
    pub step_count: u64,
    pub score: HardSoftScore,
}

/// Complete statistics for a solver run.
#[derive(Debug, Clone, Default)]
pub struct SolverStatistics {
    pub total_duration: Duration,
    pub total_step_count: u64,
    pub total_moves_evaluated: u64,
    pub total_moves_accepted: u64,
    pub phase_statistics: Vec<PhaseStatistics>,
    pub score_history: Vec<ScoreImprovement>,
}

impl SolverStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the overall acceptance rate.
    pub fn acceptance_rate(&self) -> f64 {
        if self.total_moves_evaluated == 0 {
            0.0
        } else {
            self.total_moves_accepted as f64 / self.total_moves_evaluated as f64
        }
    }

    pub fn phase_count(&self) -> usize {
        self.phase_statistics.len()
    }

    /// Returns the last recorded best score.
    pub fn best_score(&self) -> Option<HardSoftScore> {
        self.score_history.last().map(|s| s.score)
    }

    pub fn improvement_count(&self) -> usize {
        self.score_history.len()
    }
}
