use indexmap::IndexMap;
use serde::Serialize;

use crate::args::Arg;

/// Every quantity resolved during one call, in the order it was resolved.
/// Overrides are recorded alongside derived values.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PseudoCriticalProps(IndexMap<Arg, f64>);

impl PseudoCriticalProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, arg: Arg) -> Option<f64> {
        self.0.get(&arg).copied()
    }

    /// Records `value`. A quantity already present keeps its position.
    pub fn insert(&mut self, arg: Arg, value: f64) {
        self.0.insert(arg, value);
    }

    pub fn contains(&self, arg: Arg) -> bool {
        self.0.contains_key(&arg)
    }

    pub fn keys(&self) -> impl Iterator<Item = Arg> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Arg, f64)> + '_ {
        self.0.iter().map(|(&k, &v)| (k, v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Result of a single public operation: the requested value plus every
/// intermediate it needed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Derivation {
    pub value: f64,
    pub props: PseudoCriticalProps,
}

/// Pseudo-reduced temperature and pressure, as consumed by the Z solver.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReducedProperties {
    pub tr: f64,
    pub pr: f64,
    pub props: PseudoCriticalProps,
}
