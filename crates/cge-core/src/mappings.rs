//! Structural relations between sets.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{SetKind, Sets, Symbol};

/// Activity → output commodity mapping.
///
/// Completeness against [`Sets::activities`] is not enforced at construction;
/// consumers (and the diagnostic validator) check it when they need it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mappings {
    #[serde(default)]
    pub activity_output: BTreeMap<Symbol, Symbol>,
}

impl Mappings {
    pub fn new(activity_output: BTreeMap<Symbol, Symbol>) -> Self {
        Self { activity_output }
    }

    /// Build from `(activity, commodity)` pairs; a later pair replaces an earlier one.
    pub fn from_pairs<I, A, C>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (A, C)>,
        A: Into<Symbol>,
        C: Into<Symbol>,
    {
        Self {
            activity_output: pairs
                .into_iter()
                .map(|(a, c)| (a.into(), c.into()))
                .collect(),
        }
    }

    pub fn output_of(&self, activity: &Symbol) -> Option<&Symbol> {
        self.activity_output.get(activity)
    }

    /// Activities in `sets` with no mapping entry, in set order.
    pub fn unmapped_activities(&self, sets: &Sets) -> Vec<Symbol> {
        sets.activities
            .iter()
            .filter(|a| !self.activity_output.contains_key(*a))
            .cloned()
            .collect()
    }

    /// `(activity, output)` entries whose output is not a known commodity.
    pub fn unknown_outputs(&self, sets: &Sets) -> Vec<(Symbol, Symbol)> {
        self.activity_output
            .iter()
            .filter(|(_, c)| !sets.contains(SetKind::Commodities, c))
            .map(|(a, c)| (a.clone(), c.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbols;

    #[test]
    fn reports_gaps_against_sets() {
        let sets = Sets::new(
            symbols(["agr"]),
            symbols(["a-agr", "a-man"]),
            symbols(["lab"]),
            symbols(["hh"]),
        );
        let maps = Mappings::from_pairs([("a-agr", "agr"), ("a-srv", "srv")]);

        assert_eq!(maps.output_of(&"a-agr".into()), Some(&Symbol::from("agr")));
        assert_eq!(maps.unmapped_activities(&sets), symbols(["a-man"]));
        assert_eq!(
            maps.unknown_outputs(&sets),
            vec![(Symbol::from("a-srv"), Symbol::from("srv"))]
        );
    }
}
