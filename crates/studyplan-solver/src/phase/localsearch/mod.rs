//! Local search phase
//!
//! Improves an assigned schedule by drawing random candidate moves each step,
//! filtering them through an [`Acceptor`] and applying the best accepted one.

mod acceptor;
mod forager;
mod phase;

pub use acceptor::{
    Acceptor, ConfiguredAcceptor, HillClimbingAcceptor, LateAcceptanceAcceptor,
    SimulatedAnnealingAcceptor,
};
pub use forager::AcceptedCountForager;
pub use phase::LocalSearchPhase;
