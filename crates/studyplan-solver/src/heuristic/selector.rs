//! Random move selection for local search.

use rand::Rng;
use studyplan_core::Schedule;

use super::{ChangeMove, StudyMove, SwapMove};
use crate::scope::SolverRng;

/// Produces candidate moves for a local search step.
pub trait MoveSelector: Send + std::fmt::Debug {
    /// Draws one candidate, or None if the schedule offers no move at all.
    fn next_move(&mut self, schedule: &Schedule, rng: &mut SolverRng) -> Option<StudyMove>;

    /// Draws up to `count` candidates.
    fn select_moves(
        &mut self,
        schedule: &Schedule,
        rng: &mut SolverRng,
        count: usize,
    ) -> Vec<StudyMove> {
        let mut moves = Vec::with_capacity(count);
        for _ in 0..count {
            match self.next_move(schedule, rng) {
                Some(m) => moves.push(m),
                None => break,
            }
        }
        moves
    }
}

/// Draws uniformly random change and swap moves from the schedule's domains.
///
/// Move kinds are weighted by `kind_weights`: change date, change start time,
/// change both, swap. An unassigned session always gets both variables, so
/// local search can still place sessions construction left open.
#[derive(Debug, Clone)]
pub struct RandomMoveSelector {
    kind_weights: [u32; 4],
}

impl Default for RandomMoveSelector {
    fn default() -> Self {
        Self {
            kind_weights: [3, 3, 2, 2],
        }
    }
}

impl RandomMoveSelector {
    pub fn new() -> Self {
        Self::default()
    }

    fn pick_kind(&self, rng: &mut SolverRng) -> usize {
        let total: u32 = self.kind_weights.iter().sum();
        if total == 0 {
            return 2;
        }
        let mut roll = rng.random_range(0..total);
        for (kind, &weight) in self.kind_weights.iter().enumerate() {
            if roll < weight {
                return kind;
            }
            roll -= weight;
        }
        2
    }
}

impl MoveSelector for RandomMoveSelector {
    fn next_move(&mut self, schedule: &Schedule, rng: &mut SolverRng) -> Option<StudyMove> {
        let dates = schedule.date_domain();
        let times = schedule.time_domain();
        let n = schedule.sessions.len();
        if n == 0 || dates.is_empty() || times.is_empty() {
            return None;
        }

        let index = rng.random_range(0..n);
        let session = &schedule.sessions[index];
        let random_date = dates[rng.random_range(0..dates.len())];
        let random_time = times[rng.random_range(0..times.len())];

        let kind = if session.is_assigned() {
            self.pick_kind(rng)
        } else {
            2
        };
        let m = match kind {
            0 => ChangeMove::new(index, Some(random_date), session.start_time).into(),
            1 => ChangeMove::new(index, session.date, Some(random_time)).into(),
            3 if n > 1 => {
                // Offset by 1..n so the partner always differs
                let other = (index + rng.random_range(1..n)) % n;
                SwapMove::new(index, other).into()
            }
            _ => ChangeMove::new(index, Some(random_date), Some(random_time)).into(),
        };
        Some(m)
    }
}
