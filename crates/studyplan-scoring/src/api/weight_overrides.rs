// Runtime constraint weight configuration.
//
// Allows adjusting constraint weights between planning runs without
// recompiling.

use std::collections::HashMap;

use studyplan_core::HardSoftScore;

// Holds runtime overrides for constraint weights, keyed by constraint name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstraintWeightOverrides {
    weights: HashMap<String, HardSoftScore>,
}

impl ConstraintWeightOverrides {
    // Creates an empty overrides container.
    pub fn new() -> Self {
        Self::default()
    }

    // Creates overrides from an iterator of (name, weight) pairs.
    pub fn from_pairs<I, N>(iter: I) -> Self
    where
        I: IntoIterator<Item = (N, HardSoftScore)>,
        N: Into<String>,
    {
        let weights = iter.into_iter().map(|(n, w)| (n.into(), w)).collect();
        Self { weights }
    }

    // Sets the weight for a constraint.
    pub fn put<N: Into<String>>(&mut self, name: N, weight: HardSoftScore) {
        self.weights.insert(name.into(), weight);
    }

    // Removes the override for a constraint.
    pub fn remove(&mut self, name: &str) -> Option<HardSoftScore> {
        self.weights.remove(name)
    }

    // Gets the overridden weight, or returns the default if not overridden.
    pub fn get_or_default(&self, name: &str, default: HardSoftScore) -> HardSoftScore {
        self.weights.get(name).copied().unwrap_or(default)
    }

    pub fn get(&self, name: &str) -> Option<HardSoftScore> {
        self.weights.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.weights.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    // Names with an override, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.weights.keys().map(String::as_str)
    }
}
