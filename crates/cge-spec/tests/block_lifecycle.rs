//! Calibrate → build → report through the block contract.

use std::any::Any;

use cge_core::{ClosureSpec, Mappings, Real, SetKind, Sets, Symbol, symbols};
use cge_expr::build::*;
use cge_spec::*;
use serde_json::json;

/// Cobb-Douglas value added: QA[a] = ad[a] * prod(f in F, FD[f, a] ^ beta[f, a]).
#[derive(Default)]
struct ValueAdded {
    scale: Option<Real>,
}

impl Block for ValueAdded {
    fn name(&self) -> &str {
        "value_added"
    }

    fn calibrate(
        &mut self,
        _data: &dyn Any,
        benchmark: &dyn Benchmark,
        params: &dyn Any,
    ) -> BlockResult<()> {
        let elasticity = params
            .downcast_ref::<Real>()
            .ok_or_else(|| BlockError::InvalidInput {
                block: self.name().to_string(),
                what: "params must be a Real elasticity".to_string(),
            })?;
        self.scale = Some(benchmark.row_total(&"a-agr".into()) * elasticity);
        Ok(())
    }

    fn build(&self, ctx: &mut dyn ModelContext, spec: &RunSpec) -> BlockResult<()> {
        let activities = spec.sets().get(SetKind::Activities).to_vec();
        let factors = spec.sets().get(SetKind::Factors).to_vec();

        ctx.declare_variable(Declaration::indexed("QA", [activities.clone()]))?;
        ctx.declare_variable(Declaration::indexed(
            "FD",
            [factors.clone(), activities.clone()],
        ))?;
        ctx.declare_parameter(Declaration::indexed("ad", [activities.clone()]))?;
        ctx.declare_parameter(Declaration::indexed(
            "beta",
            [factors.clone(), activities],
        ))?;

        ctx.add_equation(
            "value_added".into(),
            eq(
                var_at("QA", [index("a")]),
                param_at("ad", [index("a")])
                    * prod(
                        "f",
                        factors,
                        pow(
                            var_at("FD", [index("f"), index("a")]),
                            param_at("beta", [index("f"), index("a")]),
                        ),
                    ),
            ),
        )
    }

    fn report(&self, solution: &dyn Solution) -> BlockResult<BlockReport> {
        let qa = solution.value(&"QA".into(), &symbols(["a-agr"]));
        Ok(json!({ "QA[a-agr]": qa, "scale": self.scale }))
    }
}

/// Price normalization; builds but has nothing to report.
struct Numeraire;

impl Block for Numeraire {
    fn name(&self) -> &str {
        "numeraire"
    }

    fn build(&self, ctx: &mut dyn ModelContext, spec: &RunSpec) -> BlockResult<()> {
        let num = spec.closure().numeraire.clone();
        ctx.declare_variable(Declaration::indexed("PF", [spec.sets().factors.clone()]))?;
        ctx.add_equation("numeraire".into(), eq(var_at("PF", [index(num)]), constant(1.0)))
    }
}

fn sets() -> Sets {
    Sets::new(
        symbols(["agr"]),
        symbols(["a-agr"]),
        symbols(["lab", "cap"]),
        symbols(["hh"]),
    )
}

fn benchmark() -> FlowMatrix {
    let mut m = FlowMatrix::new();
    m.insert("a-agr", "agr", 100.0).unwrap();
    m.insert("agr", "a-agr", 100.0).unwrap();
    m
}

fn assemble(va: ValueAdded) -> RunSpec {
    RunSpecBuilder::new(
        "lifecycle",
        sets(),
        Mappings::from_pairs([("a-agr", "agr")]),
        ClosureSpec::new("lab"),
    )
    .rules(SectionRules::canonical())
    .required_nonempty([CanonicalSection::Production])
    .section(SectionSpec::empty(CanonicalSection::Production).with_block(va))
    .section(SectionSpec::empty(CanonicalSection::Closure).with_block(Numeraire))
    .build()
    .unwrap()
}

#[test]
fn calibrate_reads_benchmark_and_params() {
    let mut va = ValueAdded::default();
    va.calibrate(&(), &benchmark(), &0.5_f64).unwrap();
    assert_eq!(va.scale, Some(50.0));

    let err = va.calibrate(&(), &benchmark(), &"wrong").unwrap_err();
    assert!(matches!(err, BlockError::InvalidInput { .. }));
}

#[test]
fn build_all_emits_equations_in_block_order() {
    let spec = assemble(ValueAdded::default());
    let mut sys = EquationSystem::new();
    spec.build_all(&mut sys).unwrap();

    let names: Vec<&str> = sys.equations().iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, ["value_added", "numeraire"]);
    assert!(sys.undeclared_references().is_empty());

    let numeraire = sys.equation("numeraire").unwrap();
    assert_eq!(numeraire.to_string(), "PF[lab] = 1");

    let va = sys.equation("value_added").unwrap();
    assert_eq!(
        va.to_string(),
        "QA[a] = ad[a] * prod(f in [lab, cap], FD[f, a] ^ beta[f, a])"
    );
    assert_eq!(va.free_indices().into_iter().collect::<Vec<_>>(), [Symbol::from("a")]);
}

#[test]
fn build_all_stops_at_first_failure() {
    let spec = assemble(ValueAdded::default());
    let mut sys = EquationSystem::new();
    sys.declare_variable(Declaration::scalar("QA")).unwrap();

    let err = spec.build_all(&mut sys).unwrap_err();
    assert_eq!(err, BlockError::DuplicateDeclaration { name: "QA".into() });
    assert!(sys.equations().is_empty());
}

#[test]
fn report_all_surfaces_missing_implementations() {
    let spec = assemble(ValueAdded { scale: Some(2.0) });
    let solution = SolutionTable::new().with("QA", symbols(["a-agr"]), 98.5);

    let err = spec.report_all(&solution).unwrap_err();
    assert_eq!(
        err,
        BlockError::NotImplemented {
            block: "numeraire".into(),
            operation: BlockOperation::Report,
        }
    );

    let va = spec.find_block("value_added").unwrap();
    let report = va.report(&solution).unwrap();
    assert_eq!(report["QA[a-agr]"], json!(98.5));
    assert_eq!(report["scale"], json!(2.0));
}

#[test]
fn balanced_benchmark_passes_accounting() {
    let spec = assemble(ValueAdded::default());
    let bench = benchmark();
    let report = diagnose_run_spec(&spec, Some(&bench as &dyn Benchmark));
    assert!(report.ok());
    assert!(report.accounting.errors.is_empty());
    assert!(report.accounting.notes[0].contains("2 accounts"));
}
