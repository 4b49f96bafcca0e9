//! Move trait definition.

use std::fmt::Debug;

use studyplan_scoring::ScoreDirector;

use super::{ChangeMove, SwapMove};

/// A move that modifies one or more session variables.
///
/// Undo is handled by `RecordingScoreDirector`, not by move return values.
/// Methods are generic over the director so moves run both against the
/// incremental director and a recording wrapper around it.
pub trait Move: Send + Sync + Debug {
    /// Returns true if executing this move would change the schedule.
    fn is_doable<D: ScoreDirector>(&self, score_director: &D) -> bool;

    /// Executes this move through the score director.
    fn do_move<D: ScoreDirector>(&self, score_director: &mut D);

    /// Indices of the sessions this move touches.
    fn session_indices(&self) -> &[usize];
}

/// The moves local search draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudyMove {
    Change(ChangeMove),
    Swap(SwapMove),
}

impl Move for StudyMove {
    fn is_doable<D: ScoreDirector>(&self, score_director: &D) -> bool {
        match self {
            StudyMove::Change(m) => m.is_doable(score_director),
            StudyMove::Swap(m) => m.is_doable(score_director),
        }
    }

    fn do_move<D: ScoreDirector>(&self, score_director: &mut D) {
        match self {
            StudyMove::Change(m) => m.do_move(score_director),
            StudyMove::Swap(m) => m.do_move(score_director),
        }
    }

    fn session_indices(&self) -> &[usize] {
        match self {
            StudyMove::Change(m) => m.session_indices(),
            StudyMove::Swap(m) => m.session_indices(),
        }
    }
}

impl From<ChangeMove> for StudyMove {
    fn from(m: ChangeMove) -> Self {
        StudyMove::Change(m)
    }
}

impl From<SwapMove> for StudyMove {
    fn from(m: SwapMove) -> Self {
        StudyMove::Swap(m)
    }
}
