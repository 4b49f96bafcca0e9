//! Local search solver for study schedules.
//!
//! A solve runs two phases against one [`IncrementalScoreDirector`]:
//! - construction: places every unassigned session (first fit or best fit)
//! - local search: random change and swap moves filtered by an acceptor
//!
//! Terminations are checked between steps. The best schedule seen is kept in
//! the [`SolverScope`](scope::SolverScope) and returned whatever state the
//! search ends in.
//!
//! [`IncrementalScoreDirector`]: studyplan_scoring::IncrementalScoreDirector

pub mod heuristic;
pub mod phase;
pub mod scope;
pub mod solver;
pub mod statistics;
pub mod termination;

pub use heuristic::{ChangeMove, Move, MoveSelector, RandomMoveSelector, StudyMove, SwapMove};
pub use phase::construction::ConstructionHeuristicPhase;
pub use phase::localsearch::{
    AcceptedCountForager, Acceptor, ConfiguredAcceptor, HillClimbingAcceptor,
    LateAcceptanceAcceptor, LocalSearchPhase, SimulatedAnnealingAcceptor,
};
pub use phase::Phase;
pub use scope::{SolverRng, SolverScope};
pub use solver::{SolveResult, Solver};
pub use statistics::{PhaseStatistics, ScoreImprovement, SolverStatistics};
pub use termination::{
    BestScoreTermination, ExternalTermination, OrTermination, StepCountTermination, Termination,
    TimeTermination, UnimprovedTimeTermination,
};
