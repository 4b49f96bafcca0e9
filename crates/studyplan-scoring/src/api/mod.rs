//! Constraint API: the constraint trait, tuple sets, analysis and weights.

pub mod analysis;
pub mod constraint_set;
pub mod weight_overrides;

#[cfg(test)]
mod tests;
