//! Forager for local search move selection.

use studyplan_core::HardSoftScore;

/// Collects accepted candidate indices during a step and picks the best.
///
/// Once `accepted_count_limit` moves were accepted the step quits early.
/// Ties keep the earliest candidate, so a step is deterministic for a given
/// candidate order.
#[derive(Debug, Clone)]
pub struct AcceptedCountForager {
    accepted_count_limit: usize,
    accepted_moves: Vec<(usize, HardSoftScore)>,
}

impl AcceptedCountForager {
    pub fn new(accepted_count_limit: usize) -> Self {
        Self {
            accepted_count_limit: accepted_count_limit.max(1),
            accepted_moves: Vec::new(),
        }
    }

    /// Called at the start of each step to reset state.
    pub fn step_started(&mut self) {
        self.accepted_moves.clear();
    }

    pub fn add_move_index(&mut self, index: usize, score: HardSoftScore) {
        self.accepted_moves.push((index, score));
    }

    pub fn is_quit_early(&self) -> bool {
        self.accepted_moves.len() >= self.accepted_count_limit
    }

    pub fn accepted_count(&self) -> usize {
        self.accepted_moves.len()
    }

    /// Returns the best accepted index and its score.
    pub fn pick_move_index(&mut self) -> Option<(usize, HardSoftScore)> {
        let mut best: Option<(usize, HardSoftScore)> = None;
        for &(index, score) in &self.accepted_moves {
            if best.map_or(true, |(_, b)| score > b) {
                best = Some((index, score));
            }
        }
        self.accepted_moves.clear();
        best
    }
}

impl Default for AcceptedCountForager {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_best_and_keeps_first_on_ties() {
        let mut forager = AcceptedCountForager::new(10);
        forager.step_started();
        forager.add_move_index(0, HardSoftScore::of(-1, 0));
        forager.add_move_index(1, HardSoftScore::of(0, -5));
        forager.add_move_index(2, HardSoftScore::of(0, -5));

        assert_eq!(forager.pick_move_index(), Some((1, HardSoftScore::of(0, -5))));
        assert_eq!(forager.pick_move_index(), None);
    }

    #[test]
    fn quits_early_at_limit() {
        let mut forager = AcceptedCountForager::new(2);
        forager.add_move_index(0, HardSoftScore::ZERO);
        assert!(!forager.is_quit_early());
        forager.add_move_index(1, HardSoftScore::ZERO);
        assert!(forager.is_quit_early());

        forager.step_started();
        assert_eq!(forager.accepted_count(), 0);
    }
}
