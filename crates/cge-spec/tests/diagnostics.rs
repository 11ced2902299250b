//! Diagnostic validation never fails, whatever it is given.

use cge_core::{ClosureSpec, Mappings, Sets, symbols};
use cge_spec::*;
use proptest::prelude::*;

struct Stub;

impl Block for Stub {
    fn name(&self) -> &str {
        "stub"
    }
}

#[test]
fn structural_errors_mirror_strict_checks() {
    let model = ModelSpec::new(Vec::new(), Sets::default(), Mappings::default());
    let report = diagnose(&model, &ClosureSpec::new("x"), None);

    assert!(!report.ok());
    // four empty sets + no blocks
    assert_eq!(report.structural.errors.len(), 5);
    assert!(report.structural.errors[0].contains("commodities"));
    assert!(report.structural.errors[4].contains("no blocks"));
    assert_eq!(report.closure.warnings.len(), 1);
    assert_eq!(report.accounting.notes.len(), 1);
}

#[test]
fn mapping_gaps_and_repeats_are_warnings() {
    let sets = Sets::new(
        symbols(["agr", "agr"]),
        symbols(["a-agr", "a-man"]),
        symbols(["lab"]),
        symbols(["hh"]),
    );
    let maps = Mappings::from_pairs([("a-agr", "agr"), ("a-srv", "srv")]);
    let model = ModelSpec::new(vec![Box::new(Stub)], sets, maps);
    let report = diagnose(&model, &ClosureSpec::new("lab"), None);

    assert!(report.ok());
    assert_eq!(report.structural.warnings.len(), 3);
    assert!(report.closure.warnings.is_empty());
}

#[test]
fn unbalanced_accounts_are_accounting_errors() {
    let mut bench = FlowMatrix::new();
    bench.insert("hh", "lab", 60.0).unwrap();
    bench.insert("lab", "a-agr", 50.0).unwrap();

    let model = ModelSpec::new(
        vec![Box::new(Stub)],
        Sets::new(symbols(["agr"]), symbols(["a-agr"]), symbols(["lab"]), symbols(["hh"])),
        Mappings::from_pairs([("a-agr", "agr")]),
    );
    let report = diagnose(&model, &ClosureSpec::new("agr"), Some(&bench as &dyn Benchmark));

    assert!(!report.ok());
    // hh: 60 in / 0 out, lab: 50 in / 60 out, a-agr: 0 in / 50 out
    assert_eq!(report.accounting.errors.len(), 3);
    assert_eq!(report.error_count(), 3);
    assert!(report.accounting.errors.iter().any(|e| e.contains("'lab'")));
}

fn names() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(
        prop::sample::select(vec!["agr", "man", "lab", "cap", "hh", "usd"]).prop_map(String::from),
        0..4,
    )
}

proptest! {
    #[test]
    fn diagnose_is_total_and_ok_tracks_errors(
        commodities in names(),
        activities in names(),
        factors in names(),
        institutions in names(),
        numeraire in prop::sample::select(vec!["agr", "lab", "usd"]),
        with_block in any::<bool>(),
        flows in prop::collection::vec((names(), -5.0_f64..5.0), 0..4),
    ) {
        let sets = Sets::new(
            symbols(&commodities),
            symbols(&activities),
            symbols(&factors),
            symbols(&institutions),
        );
        let blocks: Vec<Box<dyn Block>> = if with_block { vec![Box::new(Stub)] } else { vec![] };
        let model = ModelSpec::new(blocks, sets.clone(), Mappings::default());

        let mut bench = FlowMatrix::new();
        for (pair, v) in &flows {
            if let [row, col, ..] = pair.as_slice() {
                bench.insert(row.as_str(), col.as_str(), *v).unwrap();
            }
        }

        let without = diagnose(&model, &ClosureSpec::new(numeraire), None);
        let with = diagnose(&model, &ClosureSpec::new(numeraire), Some(&bench as &dyn Benchmark));

        for report in [&without, &with] {
            prop_assert_eq!(report.ok(), report.error_count() == 0);
            prop_assert_eq!(
                report.structural.errors.len(),
                sets.empty_sets().len() + usize::from(!with_block)
            );
            prop_assert!(report.closure.errors.is_empty());
        }
        prop_assert!(without.accounting.errors.is_empty());
        prop_assert_eq!(validate_sets(&sets).is_ok(), sets.first_empty().is_none());
    }
}
