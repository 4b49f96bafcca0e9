//! SwapMove - exchanges the assignments of two sessions.

use studyplan_scoring::ScoreDirector;

use super::Move;

/// Swaps the (date, start time) pairs of two sessions.
///
/// Useful between sessions of different tasks: it moves workload across the
/// calendar without disturbing occupied slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapMove {
    indices: [usize; 2],
}

impl SwapMove {
    pub fn new(left: usize, right: usize) -> Self {
        Self {
            indices: [left, right],
        }
    }

    pub fn left(&self) -> usize {
        self.indices[0]
    }

    pub fn right(&self) -> usize {
        self.indices[1]
    }
}

impl Move for SwapMove {
    fn is_doable<D: ScoreDirector>(&self, score_director: &D) -> bool {
        if self.left() == self.right() {
            return false;
        }
        let sessions = &score_director.working_solution().sessions;
        let (a, b) = (&sessions[self.left()], &sessions[self.right()]);
        a.date != b.date || a.start_time != b.start_time
    }

    fn do_move<D: ScoreDirector>(&self, score_director: &mut D) {
        let sessions = &score_director.working_solution().sessions;
        let (left_date, left_time) = (sessions[self.left()].date, sessions[self.left()].start_time);
        let (right_date, right_time) =
            (sessions[self.right()].date, sessions[self.right()].start_time);

        score_director.change_session(self.left(), right_date, right_time);
        score_director.change_session(self.right(), left_date, left_time);
    }

    fn session_indices(&self) -> &[usize] {
        &self.indices
    }
}
