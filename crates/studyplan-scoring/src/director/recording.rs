// Recording score director for trial moves.
//
// ```text
// let mut recording = RecordingScoreDirector::new(&mut inner);
// candidate.do_move(&mut recording);
// let score = recording.calculate_score();
// recording.undo_changes();
// ```

use chrono::{NaiveDate, NaiveTime};
use studyplan_core::{HardSoftScore, Schedule, Session};

use crate::api::analysis::ScoreExplanation;

use super::ScoreDirector;

// Prior values of one session change.
#[derive(Debug, Clone, Copy)]
struct Change {
    session_index: usize,
    date: Option<NaiveDate>,
    start_time: Option<NaiveTime>,
}

// A wrapper that remembers every `change_session` so it can be undone.
//
// Undo replays the old values through the inner director in reverse order,
// so an incremental inner director ends with the exact pre-move score.
// Changes not committed are undone on drop.
pub struct RecordingScoreDirector<'a, D: ScoreDirector> {
    inner: &'a mut D,
    changes: Vec<Change>,
}

impl<'a, D: ScoreDirector> RecordingScoreDirector<'a, D> {
    pub fn new(inner: &'a mut D) -> Self {
        Self {
            inner,
            changes: Vec::with_capacity(4),
        }
    }

    // Undoes all recorded changes in reverse order.
    pub fn undo_changes(&mut self) {
        while let Some(change) = self.changes.pop() {
            self.inner
                .change_session(change.session_index, change.date, change.start_time);
        }
    }

    // Forgets recorded changes, keeping them applied.
    pub fn commit(&mut self) {
        self.changes.clear();
    }

    pub fn change_count(&self) -> usize {
        self.changes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }
}

impl<D: ScoreDirector> ScoreDirector for RecordingScoreDirector<'_, D> {
    fn working_solution(&self) -> &Schedule {
        self.inner.working_solution()
    }

    fn calculate_score(&mut self) -> HardSoftScore {
        self.inner.calculate_score()
    }

    fn before_session_changed(&mut self, session_index: usize) {
        self.inner.before_session_changed(session_index);
    }

    fn after_session_changed(&mut self, session_index: usize) {
        self.inner.after_session_changed(session_index);
    }

    fn session_mut(&mut self, session_index: usize) -> &mut Session {
        self.inner.session_mut(session_index)
    }

    fn explain(&mut self) -> ScoreExplanation {
        self.inner.explain()
    }

    fn change_session(
        &mut self,
        session_index: usize,
        date: Option<NaiveDate>,
        start_time: Option<NaiveTime>,
    ) {
        let session = &self.inner.working_solution().sessions[session_index];
        self.changes.push(Change {
            session_index,
            date: session.date,
            start_time: session.start_time,
        });
        self.inner.change_session(session_index, date, start_time);
    }

    fn is_incremental(&self) -> bool {
        self.inner.is_incremental()
    }
}

impl<D: ScoreDirector> Drop for RecordingScoreDirector<'_, D> {
    fn drop(&mut self) {
        self.undo_changes();
    }
}
