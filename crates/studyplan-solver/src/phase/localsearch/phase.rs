//! Local search phase implementation.

use std::time::Instant;

use rayon::prelude::*;
use studyplan_core::HardSoftScore;
use studyplan_scoring::{RecordingScoreDirector, ScoreDirector};
use tracing::{debug, info, trace};

use crate::heuristic::{Move, MoveSelector, StudyMove};
use crate::phase::localsearch::{AcceptedCountForager, Acceptor};
use crate::phase::Phase;
use crate::scope::SolverScope;
use crate::statistics::PhaseStatistics;
use crate::termination::Termination;

/// Steps between progress events.
const PROGRESS_INTERVAL: u64 = 1000;

/// Local search phase that improves an existing schedule.
///
/// Each step:
/// 1. draws `move_count_per_step` candidates from the move selector
/// 2. scores each doable candidate and undoes it
/// 3. offers the scores to the acceptor in candidate order
/// 4. applies the best accepted candidate picked by the forager
///
/// With `move_thread_count > 1` step 2 runs on a rayon pool, each worker on
/// its own clone of the score director. Step 3 stays sequential, so the
/// outcome under a fixed seed does not depend on the thread count.
#[derive(Debug)]
pub struct LocalSearchPhase<MS, A> {
    move_selector: MS,
    acceptor: A,
    forager: AcceptedCountForager,
    move_count_per_step: usize,
    move_thread_count: usize,
}

impl<MS, A> LocalSearchPhase<MS, A>
where
    MS: MoveSelector,
    A: Acceptor,
{
    pub fn new(
        move_selector: MS,
        acceptor: A,
        forager: AcceptedCountForager,
        move_count_per_step: usize,
    ) -> Self {
        Self {
            move_selector,
            acceptor,
            forager,
            move_count_per_step: move_count_per_step.max(1),
            move_thread_count: 1,
        }
    }

    /// Scores candidates on `threads` workers. 0 and 1 both mean sequential.
    pub fn with_move_thread_count(mut self, threads: usize) -> Self {
        self.move_thread_count = threads.max(1);
        self
    }

    fn score_moves<D>(&self, director: &mut D, moves: &[StudyMove]) -> Vec<HardSoftScore>
    where
        D: ScoreDirector + Clone + Sync,
    {
        if self.move_thread_count <= 1 || moves.len() < 2 {
            return moves.iter().map(|m| score_move(director, m)).collect();
        }
        let base: &D = director;
        let chunk = moves.len().div_ceil(self.move_thread_count);
        moves
            .par_chunks(chunk)
            .map_init(
                || base.clone(),
                |worker, part| part.iter().map(|m| score_move(worker, m)).collect::<Vec<_>>(),
            )
            .collect::<Vec<_>>()
            .into_iter()
            .flatten()
            .collect()
    }
}

/// Scores a move and restores the schedule.
fn score_move<D: ScoreDirector>(director: &mut D, m: &StudyMove) -> HardSoftScore {
    let mut recording = RecordingScoreDirector::new(director);
    m.do_move(&mut recording);
    let score = recording.calculate_score();
    recording.undo_changes();
    score
}

impl<D, MS, A> Phase<D> for LocalSearchPhase<MS, A>
where
    D: ScoreDirector + Clone + Sync,
    MS: MoveSelector,
    A: Acceptor,
{
    fn solve<T: Termination<D>>(
        &mut self,
        solver_scope: &mut SolverScope<D>,
        phase_index: usize,
        termination: &T,
    ) {
        let phase_start = Instant::now();
        let phase_name = <Self as Phase<D>>::phase_type_name(self);
        let mut stats = PhaseStatistics::new(phase_index, phase_name);

        let mut last_step_score = solver_scope.calculate_score();
        stats.starting_score = Some(last_step_score);
        self.acceptor.phase_started(last_step_score);

        info!(
            event = "phase_start",
            phase = phase_name,
            phase_index = phase_index,
            move_threads = self.move_thread_count,
        );

        loop {
            if termination.is_terminated(solver_scope) {
                break;
            }

            self.forager.step_started();
            let (schedule, rng) = solver_scope.working_solution_and_rng();
            let candidates = self
                .move_selector
                .select_moves(schedule, rng, self.move_count_per_step);
            if candidates.is_empty() {
                break;
            }
            let doable: Vec<StudyMove> = candidates
                .into_iter()
                .filter(|m| m.is_doable(solver_scope.score_director()))
                .collect();

            let scores = self.score_moves(solver_scope.score_director_mut(), &doable);
            let mut evaluated = 0;
            let rng = solver_scope.rng();
            for (index, &score) in scores.iter().enumerate() {
                evaluated += 1;
                if self.acceptor.is_accepted(last_step_score, score, rng) {
                    self.forager.add_move_index(index, score);
                    if self.forager.is_quit_early() {
                        break;
                    }
                }
            }
            stats.moves_evaluated += evaluated;

            let step = solver_scope.increment_step_count();
            stats.step_count += 1;
            let picked = self.forager.pick_move_index();
            if let Some((index, score)) = picked {
                doable[index].do_move(solver_scope.score_director_mut());
                stats.moves_accepted += 1;
                last_step_score = score;
                self.acceptor.step_ended(score);
                solver_scope.update_best_solution();
            }
            trace!(
                event = "step",
                step = step,
                score = %last_step_score,
                accepted = picked.is_some(),
            );

            if stats.step_count % PROGRESS_INTERVAL == 0 {
                debug!(
                    event = "progress",
                    steps = stats.step_count,
                    speed = moves_per_second(stats.moves_evaluated, phase_start),
                    score = %last_step_score,
                );
            }
        }

        self.acceptor.phase_ended();
        solver_scope.record_moves(stats.moves_evaluated, stats.moves_accepted);

        stats.ending_score = Some(last_step_score);
        stats.duration = phase_start.elapsed();
        info!(
            event = "phase_end",
            phase = phase_name,
            phase_index = phase_index,
            duration_ms = stats.duration.as_millis() as u64,
            steps = stats.step_count,
            speed = stats.speed(),
            score = %last_step_score,
        );
        solver_scope.record_phase(stats);
    }

    fn phase_type_name(&self) -> &'static str {
        "LocalSearch"
    }
}

fn moves_per_second(moves: u64, since: Instant) -> u64 {
    let secs = since.elapsed().as_secs_f64();
    if secs > 0.0 {
        (moves as f64 / secs) as u64
    } else {
        0
    }
}
