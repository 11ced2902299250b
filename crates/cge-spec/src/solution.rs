use std::collections::BTreeMap;

use cge_core::{Real, Symbol};

/// Read access to a solved model, as handed to [`crate::Block::report`].
pub trait Solution {
    /// Level of `name` at `indices` (empty for scalars), if solved.
    fn value(&self, name: &Symbol, indices: &[Symbol]) -> Option<Real>;
}

/// Solution values keyed by name and index tuple.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SolutionTable {
    values: BTreeMap<(Symbol, Vec<Symbol>), Real>,
}

impl SolutionTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<Symbol>, indices: Vec<Symbol>, value: Real) {
        self.values.insert((name.into(), indices), value);
    }

    pub fn with(mut self, name: impl Into<Symbol>, indices: Vec<Symbol>, value: Real) -> Self {
        self.insert(name, indices, value);
        self
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Solution for SolutionTable {
    fn value(&self, name: &Symbol, indices: &[Symbol]) -> Option<Real> {
        self.values.get(&(name.clone(), indices.to_vec())).copied()
    }
}
