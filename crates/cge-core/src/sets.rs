//! The four canonical economic domains of a model run.

use core::fmt;
use core::str::FromStr;
use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{CoreError, Symbol};

/// Names one of the core sets carried by [`Sets`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SetKind {
    Commodities,
    Activities,
    Factors,
    Institutions,
}

impl SetKind {
    /// Canonical order; validation reports the first empty set in this order.
    pub const ALL: [SetKind; 4] = [
        SetKind::Commodities,
        SetKind::Activities,
        SetKind::Factors,
        SetKind::Institutions,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SetKind::Commodities => "commodities",
            SetKind::Activities => "activities",
            SetKind::Factors => "factors",
            SetKind::Institutions => "institutions",
        }
    }
}

impl fmt::Display for SetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SetKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SetKind::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| CoreError::UnknownSet { name: s.to_string() })
    }
}

/// Ordered member lists for commodities, activities, factors and institutions.
///
/// Members are expected to be unique within each list. That is not enforced
/// here; [`Sets::duplicates`] lets diagnostics surface violations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sets {
    #[serde(default)]
    pub commodities: Vec<Symbol>,
    #[serde(default)]
    pub activities: Vec<Symbol>,
    #[serde(default)]
    pub factors: Vec<Symbol>,
    #[serde(default)]
    pub institutions: Vec<Symbol>,
}

impl Sets {
    pub fn new(
        commodities: Vec<Symbol>,
        activities: Vec<Symbol>,
        factors: Vec<Symbol>,
        institutions: Vec<Symbol>,
    ) -> Self {
        Self {
            commodities,
            activities,
            factors,
            institutions,
        }
    }

    pub fn get(&self, kind: SetKind) -> &[Symbol] {
        match kind {
            SetKind::Commodities => &self.commodities,
            SetKind::Activities => &self.activities,
            SetKind::Factors => &self.factors,
            SetKind::Institutions => &self.institutions,
        }
    }

    pub fn contains(&self, kind: SetKind, member: &Symbol) -> bool {
        self.get(kind).contains(member)
    }

    /// The first empty core set in canonical order, if any.
    ///
    /// Both the fail-fast and the diagnostic validators are built on this
    /// predicate (directly or through [`Sets::empty_sets`]).
    pub fn first_empty(&self) -> Option<SetKind> {
        SetKind::ALL.into_iter().find(|&k| self.get(k).is_empty())
    }

    /// Every empty core set, in canonical order.
    pub fn empty_sets(&self) -> Vec<SetKind> {
        SetKind::ALL
            .into_iter()
            .filter(|&k| self.get(k).is_empty())
            .collect()
    }

    /// Members that appear more than once in the given set, in first-repeat order.
    pub fn duplicates(&self, kind: SetKind) -> Vec<Symbol> {
        let mut seen = HashSet::new();
        let mut repeated = Vec::new();
        for member in self.get(kind) {
            if !seen.insert(member) && !repeated.contains(member) {
                repeated.push(member.clone());
            }
        }
        repeated
    }
}
