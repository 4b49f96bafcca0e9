// Score director trait definition.

use chrono::{NaiveDate, NaiveTime};
use studyplan_core::{HardSoftScore, Schedule};

use crate::api::analysis::ScoreExplanation;

// The score director manages the working schedule and score calculation.
//
// Every variable change goes through `change_session`, which notifies the
// director before and after the mutation so incremental directors can keep
// their cached score exact.
pub trait ScoreDirector: Send {
    // Returns a reference to the working schedule.
    fn working_solution(&self) -> &Schedule;

    // Calculates and returns the current score.
    fn calculate_score(&mut self) -> HardSoftScore;

    // Called before a session's date or start time changes.
    fn before_session_changed(&mut self, session_index: usize);

    // Called after a session's date or start time changed.
    fn after_session_changed(&mut self, session_index: usize);

    // Mutable access to one session. Callers must bracket the mutation with
    // `before_session_changed` and `after_session_changed`.
    fn session_mut(&mut self, session_index: usize) -> &mut studyplan_core::Session;

    // Per-constraint breakdown of the current score.
    fn explain(&mut self) -> ScoreExplanation;

    // Assigns a session's variables, notifying the director around the change.
    fn change_session(
        &mut self,
        session_index: usize,
        date: Option<NaiveDate>,
        start_time: Option<NaiveTime>,
    ) {
        self.before_session_changed(session_index);
        let session = self.session_mut(session_index);
        session.date = date;
        session.start_time = start_time;
        self.after_session_changed(session_index);
    }

    // Clones the working schedule with its current score attached.
    fn clone_working_solution(&mut self) -> Schedule {
        let score = self.calculate_score();
        let mut schedule = self.working_solution().clone();
        schedule.set_score(Some(score));
        schedule
    }

    // Returns true if this director scores changes incrementally.
    fn is_incremental(&self) -> bool {
        false
    }
}
