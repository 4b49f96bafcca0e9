//! ChangeMove - assigns a date and start time to one session.

use chrono::{NaiveDate, NaiveTime};
use studyplan_scoring::ScoreDirector;

use super::Move;

/// Sets both variables of one session.
///
/// To change only the date, pass the session's current start time, and
/// vice versa.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChangeMove {
    session_index: [usize; 1],
    date: Option<NaiveDate>,
    start_time: Option<NaiveTime>,
}

impl ChangeMove {
    pub fn new(session_index: usize, date: Option<NaiveDate>, start_time: Option<NaiveTime>) -> Self {
        Self {
            session_index: [session_index],
            date,
            start_time,
        }
    }

    pub fn session_index(&self) -> usize {
        self.session_index[0]
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    pub fn start_time(&self) -> Option<NaiveTime> {
        self.start_time
    }
}

impl Move for ChangeMove {
    fn is_doable<D: ScoreDirector>(&self, score_director: &D) -> bool {
        let session = &score_director.working_solution().sessions[self.session_index()];
        session.date != self.date || session.start_time != self.start_time
    }

    fn do_move<D: ScoreDirector>(&self, score_director: &mut D) {
        score_director.change_session(self.session_index(), self.date, self.start_time);
    }

    fn session_indices(&self) -> &[usize] {
        &self.session_index
    }
}
