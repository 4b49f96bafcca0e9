//! Construction heuristic phase.

use std::time::Instant;

use chrono::{NaiveDate, NaiveTime};
use studyplan_config::ConstructionHeuristicType;
use studyplan_core::HardSoftScore;
use studyplan_scoring::{RecordingScoreDirector, ScoreDirector};
use tracing::{info, trace};

use crate::phase::Phase;
use crate::scope::SolverScope;
use crate::statistics::PhaseStatistics;
use crate::termination::Termination;

/// Assigns every unassigned session, one at a time in id order.
///
/// Best fit scores every (date, start time) pair for the session and keeps the
/// best one. First fit keeps the first pair that adds no hard penalty, and
/// falls back to the best pair when none exists.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConstructionHeuristicPhase {
    heuristic: ConstructionHeuristicType,
}

impl ConstructionHeuristicPhase {
    pub fn new(heuristic: ConstructionHeuristicType) -> Self {
        Self { heuristic }
    }

    pub fn best_fit() -> Self {
        Self::new(ConstructionHeuristicType::BestFit)
    }

    pub fn first_fit() -> Self {
        Self::new(ConstructionHeuristicType::FirstFit)
    }
}

struct Placement {
    date: NaiveDate,
    start_time: NaiveTime,
    score: HardSoftScore,
}

/// Picks a value pair for one session. Returns the placement and the number
/// of pairs evaluated.
fn place<D: ScoreDirector>(
    director: &mut D,
    session_index: usize,
    dates: &[NaiveDate],
    times: &[NaiveTime],
    first_fit: bool,
) -> (Option<Placement>, u64) {
    let baseline_hard = director.calculate_score().hard();
    let mut best: Option<Placement> = None;
    let mut evaluated = 0;

    for &date in dates {
        for &start_time in times {
            let score = {
                let mut recording = RecordingScoreDirector::new(director);
                recording.change_session(session_index, Some(date), Some(start_time));
                let score = recording.calculate_score();
                recording.undo_changes();
                score
            };
            evaluated += 1;

            let candidate = Placement {
                date,
                start_time,
                score,
            };
            if first_fit && score.hard() >= baseline_hard {
                return (Some(candidate), evaluated);
            }
            if best.as_ref().map_or(true, |b| score > b.score) {
                best = Some(candidate);
            }
        }
    }
    (best, evaluated)
}

impl<D: ScoreDirector> Phase<D> for ConstructionHeuristicPhase {
    fn solve<T: Termination<D>>(
        &mut self,
        solver_scope: &mut SolverScope<D>,
        phase_index: usize,
        termination: &T,
    ) {
        let phase_start = Instant::now();
        let phase_name = <Self as Phase<D>>::phase_type_name(self);
        let mut stats = PhaseStatistics::new(phase_index, phase_name);
        stats.starting_score = Some(solver_scope.calculate_score());

        let schedule = solver_scope.working_solution();
        let dates = schedule.date_domain().to_vec();
        let times = schedule.time_domain().to_vec();
        let pending: Vec<usize> = schedule
            .sessions
            .iter()
            .enumerate()
            .filter(|(_, s)| !s.is_assigned())
            .map(|(i, _)| i)
            .collect();

        info!(
            event = "phase_start",
            phase = phase_name,
            phase_index = phase_index,
            pending_sessions = pending.len(),
        );

        let first_fit = self.heuristic == ConstructionHeuristicType::FirstFit;
        for session_index in pending {
            if termination.is_terminated(solver_scope) {
                break;
            }

            let director = solver_scope.score_director_mut();
            let (placement, evaluated) =
                place(director, session_index, &dates, &times, first_fit);
            stats.moves_evaluated += evaluated;

            let Some(placement) = placement else {
                // Empty domain: nothing can be placed
                break;
            };
            director.change_session(
                session_index,
                Some(placement.date),
                Some(placement.start_time),
            );
            stats.moves_accepted += 1;
            stats.step_count += 1;
            let step = solver_scope.increment_step_count();
            // One more assigned session always counts as an improvement
            solver_scope.update_best_solution();
            trace!(
                event = "step",
                step = step,
                session = session_index,
                score = %placement.score,
            );
        }

        solver_scope.record_moves(stats.moves_evaluated, stats.moves_accepted);

        let score = solver_scope.calculate_score();
        stats.ending_score = Some(score);
        stats.duration = phase_start.elapsed();
        info!(
            event = "phase_end",
            phase = phase_name,
            phase_index = phase_index,
            duration_ms = stats.duration.as_millis() as u64,
            steps = stats.step_count,
            speed = stats.speed(),
            score = %score,
        );
        solver_scope.record_phase(stats);
    }

    fn phase_type_name(&self) -> &'static str {
        "ConstructionHeuristic"
    }
}
