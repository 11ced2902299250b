use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::Symbol;

/// Arbitrary typed shock payload; its meaning belongs to the blocks that read it.
pub type ShockValue = serde_json::Value;

/// A named deviation from the baseline run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioSpec {
    pub name: Symbol,
    #[serde(default)]
    pub shocks: BTreeMap<Symbol, ShockValue>,
}

impl ScenarioSpec {
    pub const BASELINE: &'static str = "baseline";

    pub fn new(name: impl Into<Symbol>) -> Self {
        Self {
            name: name.into(),
            shocks: BTreeMap::new(),
        }
    }

    pub fn baseline() -> Self {
        Self::new(Self::BASELINE)
    }

    pub fn with_shock(mut self, name: impl Into<Symbol>, value: impl Into<ShockValue>) -> Self {
        self.shocks.insert(name.into(), value.into());
        self
    }

    pub fn shock(&self, name: &str) -> Option<&ShockValue> {
        self.shocks.get(name)
    }

    pub fn is_baseline(&self) -> bool {
        self.shocks.is_empty()
    }
}

impl Default for ScenarioSpec {
    fn default() -> Self {
        Self::baseline()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn shocks_hold_any_json_value() {
        let sc = ScenarioSpec::new("tariff_cut")
            .with_shock("tm", 0.5)
            .with_shock("sectors", json!(["agr", "man"]));

        assert!(!sc.is_baseline());
        assert_eq!(sc.shock("tm"), Some(&json!(0.5)));
        assert_eq!(sc.shock("sectors").and_then(|v| v.as_array()).map(Vec::len), Some(2));
        assert!(sc.shock("missing").is_none());
    }

    #[test]
    fn default_is_baseline() {
        let sc = ScenarioSpec::default();
        assert_eq!(sc.name, "baseline");
        assert!(sc.is_baseline());
    }
}
