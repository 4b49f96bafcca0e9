//! Incremental score director.

use studyplan_core::{HardSoftScore, Schedule, Session};

use crate::api::analysis::ScoreExplanation;
use crate::api::constraint_set::ConstraintSet;

use super::ScoreDirector;

/// A score director that updates a cached score per session change.
///
/// The first [`calculate_score`](ScoreDirector::calculate_score) evaluates all
/// constraints. Afterwards each change costs one retract and one insert, and
/// reading the score is O(1).
///
/// # Example
///
/// ```
/// use studyplan_scoring::{default_constraints, IncrementalScoreDirector, ScoreDirector};
/// # use chrono::{NaiveDate, NaiveTime};
/// # use studyplan_core::{ProblemFacts, Schedule, Session, StudyWindow, Task};
/// # let day = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
/// # let facts = ProblemFacts {
/// #     tasks: vec![Task::new("Algebra", 2.0, None, 1.0, 0.0).unwrap()],
/// #     date_domain: vec![day],
/// #     time_domain: vec![NaiveTime::from_hms_opt(9, 0, 0).unwrap()],
/// #     fixed_events: Vec::new(),
/// #     window: StudyWindow::default(),
/// #     planning_start: day,
/// # };
/// let schedule = Schedule::new(facts, vec![Session::new(0, 0), Session::new(1, 0)]);
/// let mut director = IncrementalScoreDirector::new(schedule, default_constraints());
/// assert_eq!(director.calculate_score().hard(), 0);
///
/// let nine = NaiveTime::from_hms_opt(9, 0, 0);
/// director.change_session(0, Some(day), nine);
/// director.change_session(1, Some(day), nine);
///
/// // Overlap, simultaneous start and duplicate slot
/// assert_eq!(director.calculate_score().hard(), -3);
/// ```
#[derive(Clone)]
pub struct IncrementalScoreDirector<C> {
    working_solution: Schedule,
    constraints: C,
    cached_score: HardSoftScore,
    initialized: bool,
}

impl<C: ConstraintSet> IncrementalScoreDirector<C> {
    pub fn new(solution: Schedule, constraints: C) -> Self {
        Self {
            working_solution: solution,
            constraints,
            cached_score: HardSoftScore::ZERO,
            initialized: false,
        }
    }

    pub fn constraints(&self) -> &C {
        &self.constraints
    }

    /// Score without forcing initialization. `None` before the first calculation.
    pub fn cached_score(&self) -> Option<HardSoftScore> {
        self.initialized.then_some(self.cached_score)
    }

    pub fn into_working_solution(self) -> Schedule {
        self.working_solution
    }
}

impl<C: ConstraintSet> ScoreDirector for IncrementalScoreDirector<C> {
    fn working_solution(&self) -> &Schedule {
        &self.working_solution
    }

    fn calculate_score(&mut self) -> HardSoftScore {
        if !self.initialized {
            self.cached_score = self.constraints.evaluate_all(&self.working_solution);
            self.initialized = true;
        }
        self.working_solution.set_score(Some(self.cached_score));
        self.cached_score
    }

    #[inline]
    fn before_session_changed(&mut self, session_index: usize) {
        if !self.initialized {
            // A full calculation happens on next calculate_score
            return;
        }
        let delta = self
            .constraints
            .on_retract_all(&self.working_solution, session_index);
        self.cached_score += delta;
    }

    #[inline]
    fn after_session_changed(&mut self, session_index: usize) {
        if !self.initialized {
            return;
        }
        let delta = self
            .constraints
            .on_insert_all(&self.working_solution, session_index);
        self.cached_score += delta;
    }

    fn session_mut(&mut self, session_index: usize) -> &mut Session {
        &mut self.working_solution.sessions[session_index]
    }

    fn explain(&mut self) -> ScoreExplanation {
        ScoreExplanation::new(self.constraints.evaluate_detailed(&self.working_solution))
    }

    fn is_incremental(&self) -> bool {
        true
    }
}
