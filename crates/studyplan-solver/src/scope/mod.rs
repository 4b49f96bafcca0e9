//! Scopes hold the mutable state of a solve.

mod solver;

pub use solver::{SolverRng, SolverScope};
