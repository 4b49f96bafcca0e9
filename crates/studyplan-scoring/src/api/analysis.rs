//! Score analysis types for explaining a schedule's score.

use smallvec::SmallVec;
use studyplan_core::HardSoftScore;

/// Why a constraint matched: the sessions involved and how much it weighs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Justification {
    /// Ids of the sessions involved in the match.
    pub session_ids: SmallVec<[usize; 2]>,
    /// Multiplier applied to the constraint weight.
    pub match_weight: i64,
    /// Human-readable description of the violation.
    pub description: String,
}

impl Justification {
    pub fn new(
        session_ids: impl IntoIterator<Item = usize>,
        match_weight: i64,
        description: impl Into<String>,
    ) -> Self {
        Self {
            session_ids: session_ids.into_iter().collect(),
            match_weight,
            description: description.into(),
        }
    }
}

/// A constraint match with its score impact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintMatch {
    pub constraint_name: String,
    pub score: HardSoftScore,
    pub justification: Justification,
}

/// Per-constraint breakdown in a score explanation.
#[derive(Debug, Clone)]
pub struct ConstraintAnalysis {
    pub name: String,
    /// Constraint weight (score per unit of match weight).
    pub weight: HardSoftScore,
    /// Total score from this constraint.
    pub score: HardSoftScore,
    pub is_hard: bool,
    pub matches: Vec<ConstraintMatch>,
}

impl ConstraintAnalysis {
    /// Creates an analysis, summing the score from the matches.
    pub fn new(
        name: impl Into<String>,
        weight: HardSoftScore,
        is_hard: bool,
        matches: Vec<ConstraintMatch>,
    ) -> Self {
        let score = matches.iter().map(|m| m.score).sum();
        Self {
            name: name.into(),
            weight,
            score,
            is_hard,
            matches,
        }
    }

    pub fn match_count(&self) -> usize {
        self.matches.len()
    }
}

/// Complete score explanation with per-constraint breakdown.
#[derive(Debug, Clone)]
pub struct ScoreExplanation {
    /// The total score.
    pub score: HardSoftScore,
    pub constraint_analyses: Vec<ConstraintAnalysis>,
}

impl ScoreExplanation {
    pub fn new(constraint_analyses: Vec<ConstraintAnalysis>) -> Self {
        let score = constraint_analyses.iter().map(|a| a.score).sum();
        Self {
            score,
            constraint_analyses,
        }
    }

    /// Returns the total match count across all constraints.
    pub fn total_match_count(&self) -> usize {
        self.constraint_analyses.iter().map(|a| a.match_count()).sum()
    }

    /// Returns constraints with non-zero scores.
    pub fn non_zero_constraints(&self) -> Vec<&ConstraintAnalysis> {
        self.constraint_analyses
            .iter()
            .filter(|a| a.score != HardSoftScore::ZERO)
            .collect()
    }

    /// Looks up a constraint by name.
    pub fn constraint(&self, name: &str) -> Option<&ConstraintAnalysis> {
        self.constraint_analyses.iter().find(|a| a.name == name)
    }

    /// Every match that involves the session with `session_id`.
    pub fn matches_for_session(&self, session_id: usize) -> Vec<&ConstraintMatch> {
        self.constraint_analyses
            .iter()
            .flat_map(|a| &a.matches)
            .filter(|m| m.justification.session_ids.contains(&session_id))
            .collect()
    }
}
