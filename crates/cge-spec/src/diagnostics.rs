//! Advisory, categorized pre-solve diagnostics.
//!
//! Unlike [`crate::validate`], nothing here fails: every problem is recorded
//! in a [`DiagnosticReport`] and the caller decides whether to proceed.

use core::fmt;

use cge_core::{ClosureSpec, SetKind, Tolerances, nearly_equal};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::benchmark::Benchmark;
use crate::spec::{ModelSpec, RunSpec};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Structural,
    Closure,
    Accounting,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Structural, Category::Closure, Category::Accounting];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Structural => "structural",
            Category::Closure => "closure",
            Category::Accounting => "accounting",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Findings for one category, split by severity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub notes: Vec<String>,
}

impl CategoryReport {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }
}

/// Result of [`diagnose`]: category → severity → messages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticReport {
    pub structural: CategoryReport,
    pub closure: CategoryReport,
    pub accounting: CategoryReport,
}

impl DiagnosticReport {
    pub fn category(&self, category: Category) -> &CategoryReport {
        match category {
            Category::Structural => &self.structural,
            Category::Closure => &self.closure,
            Category::Accounting => &self.accounting,
        }
    }

    fn category_mut(&mut self, category: Category) -> &mut CategoryReport {
        match category {
            Category::Structural => &mut self.structural,
            Category::Closure => &mut self.closure,
            Category::Accounting => &mut self.accounting,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, &CategoryReport)> {
        Category::ALL.into_iter().map(|c| (c, self.category(c)))
    }

    /// True iff no category holds an error. Warnings and notes do not count.
    pub fn ok(&self) -> bool {
        self.error_count() == 0
    }

    pub fn error_count(&self) -> usize {
        self.iter().map(|(_, r)| r.errors.len()).sum()
    }

    pub fn warning_count(&self) -> usize {
        self.iter().map(|(_, r)| r.warnings.len()).sum()
    }

    pub fn note_count(&self) -> usize {
        self.iter().map(|(_, r)| r.notes.len()).sum()
    }

    pub fn error(&mut self, category: Category, msg: impl Into<String>) {
        self.category_mut(category).errors.push(msg.into());
    }

    pub fn warning(&mut self, category: Category, msg: impl Into<String>) {
        self.category_mut(category).warnings.push(msg.into());
    }

    pub fn note(&mut self, category: Category, msg: impl Into<String>) {
        self.category_mut(category).notes.push(msg.into());
    }
}

/// Diagnose an assembled run.
pub fn diagnose_run_spec(spec: &RunSpec, benchmark: Option<&dyn Benchmark>) -> DiagnosticReport {
    diagnose(spec.model(), spec.closure(), benchmark)
}

/// Diagnose model parts that have not necessarily passed strict validation.
///
/// Total: never panics and never fails, whatever the input.
pub fn diagnose(
    model: &ModelSpec,
    closure: &ClosureSpec,
    benchmark: Option<&dyn Benchmark>,
) -> DiagnosticReport {
    let mut report = DiagnosticReport::default();
    check_structure(model, &mut report);
    check_closure(model, closure, &mut report);
    check_accounting(benchmark, &mut report);

    debug!(
        ok = report.ok(),
        errors = report.error_count(),
        warnings = report.warning_count(),
        "diagnostics complete"
    );
    report
}

fn check_structure(model: &ModelSpec, report: &mut DiagnosticReport) {
    let sets = model.sets();
    for set in sets.empty_sets() {
        report.error(Category::Structural, format!("core set '{set}' is empty"));
    }
    if model.blocks().is_empty() {
        report.error(Category::Structural, "model has no blocks");
    }

    for kind in SetKind::ALL {
        for dup in sets.duplicates(kind) {
            report.warning(
                Category::Structural,
                format!("'{dup}' appears more than once in {kind}"),
            );
        }
    }

    let maps = model.mappings();
    for activity in maps.unmapped_activities(sets) {
        report.warning(
            Category::Structural,
            format!("activity '{activity}' has no output commodity mapping"),
        );
    }
    for (activity, output) in maps.unknown_outputs(sets) {
        report.warning(
            Category::Structural,
            format!("activity '{activity}' maps to '{output}', which is not a commodity"),
        );
    }
}

fn check_closure(model: &ModelSpec, closure: &ClosureSpec, report: &mut DiagnosticReport) {
    match closure.numeraire_kind(model.sets()) {
        Some(kind) => report.note(
            Category::Closure,
            format!("numeraire '{}' found in {kind}", closure.numeraire),
        ),
        None => report.warning(
            Category::Closure,
            format!(
                "numeraire '{}' is not in commodities or factors",
                closure.numeraire
            ),
        ),
    }
}

fn check_accounting(benchmark: Option<&dyn Benchmark>, report: &mut DiagnosticReport) {
    let Some(benchmark) = benchmark else {
        report.note(
            Category::Accounting,
            "no benchmark data supplied; accounting checks skipped",
        );
        return;
    };

    let tol = Tolerances::default();
    let accounts = benchmark.accounts();
    for account in &accounts {
        let row = benchmark.row_total(account);
        let col = benchmark.column_total(account);
        if !(row.is_finite() && col.is_finite() && nearly_equal(row, col, tol)) {
            report.error(
                Category::Accounting,
                format!("account '{account}' is unbalanced: receipts {row} vs expenditures {col}"),
            );
        }
    }
    report.note(
        Category::Accounting,
        format!("checked row/column balance for {} accounts", accounts.len()),
    );
}
