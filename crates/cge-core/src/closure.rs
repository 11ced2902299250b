use serde::{Deserialize, Serialize};

use crate::{SetKind, Sets, Symbol};

/// Price normalization choice for a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClosureSpec {
    pub numeraire: Symbol,
}

impl ClosureSpec {
    pub fn new(numeraire: impl Into<Symbol>) -> Self {
        Self {
            numeraire: numeraire.into(),
        }
    }

    /// Which set holds the numeraire, checking commodities before factors.
    pub fn numeraire_kind(&self, sets: &Sets) -> Option<SetKind> {
        [SetKind::Commodities, SetKind::Factors]
            .into_iter()
            .find(|&k| sets.contains(k, &self.numeraire))
    }
}
