//! Benchmark data seam used by calibration and accounting diagnostics.

use std::collections::{BTreeMap, BTreeSet};

use cge_core::{CoreResult, Real, Symbol, ensure_finite};
use serde::{Deserialize, Serialize};

/// Square account-by-account flow table (e.g. a Social Accounting Matrix).
///
/// Ingestion lives outside this crate; anything that can answer row and
/// column totals per account can be checked for balance.
pub trait Benchmark {
    /// All accounts, in a stable order.
    fn accounts(&self) -> Vec<Symbol>;

    /// Total receipts of `account` (sum across its row).
    fn row_total(&self, account: &Symbol) -> Real;

    /// Total expenditures of `account` (sum down its column).
    fn column_total(&self, account: &Symbol) -> Real;
}

/// Sparse in-memory flow table: `flows[row][column]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FlowMatrix {
    #[serde(default)]
    flows: BTreeMap<Symbol, BTreeMap<Symbol, Real>>,
}

impl FlowMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the flow from `column` to `row`, replacing any previous entry.
    pub fn insert(
        &mut self,
        row: impl Into<Symbol>,
        column: impl Into<Symbol>,
        value: Real,
    ) -> CoreResult<()> {
        let value = ensure_finite(value, "benchmark flow")?;
        self.flows
            .entry(row.into())
            .or_default()
            .insert(column.into(), value);
        Ok(())
    }

    pub fn get(&self, row: &Symbol, column: &Symbol) -> Real {
        self.flows
            .get(row)
            .and_then(|r| r.get(column))
            .copied()
            .unwrap_or(0.0)
    }
}

impl Benchmark for FlowMatrix {
    fn accounts(&self) -> Vec<Symbol> {
        let mut all = BTreeSet::new();
        for (row, cols) in &self.flows {
            all.insert(row.clone());
            all.extend(cols.keys().cloned());
        }
        all.into_iter().collect()
    }

    fn row_total(&self, account: &Symbol) -> Real {
        self.flows
            .get(account)
            .map(|r| r.values().sum())
            .unwrap_or(0.0)
    }

    fn column_total(&self, account: &Symbol) -> Real {
        self.flows.values().filter_map(|r| r.get(account)).sum()
    }
}
