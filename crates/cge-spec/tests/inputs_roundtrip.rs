use cge_core::{ClosureSpec, Mappings, ScenarioSpec, SetKind, Sets, symbols};
use cge_spec::*;

struct Household;

impl Block for Household {
    fn name(&self) -> &str {
        "household"
    }
}

fn inputs() -> RunInputs {
    let template = RunSpecTemplate::new("standard", [CanonicalSection::Households]);
    let mut inputs = RunInputs::from_template(
        &template,
        Sets::new(
            symbols(["agr", "man"]),
            symbols(["a-agr", "a-man"]),
            symbols(["lab", "cap"]),
            symbols(["hh"]),
        ),
        Mappings::from_pairs([("a-agr", "agr"), ("a-man", "man")]),
        ClosureSpec::new("lab"),
    );
    inputs.scenario = ScenarioSpec::new("wage_shock").with_shock("wage", 1.1);
    inputs
}

#[test]
fn roundtrip_yaml_inputs() {
    let inputs = inputs();
    let path = std::env::temp_dir().join("cge_spec_roundtrip_inputs.yaml");

    save_inputs_yaml(&path, &inputs).unwrap();
    let loaded = load_inputs_yaml(&path).unwrap();
    assert_eq!(loaded, inputs);
}

#[test]
fn roundtrip_json_inputs() {
    let inputs = inputs();
    let path = std::env::temp_dir().join("cge_spec_roundtrip_inputs.json");

    save_inputs_json(&path, &inputs).unwrap();
    let loaded = load_inputs_json(&path).unwrap();
    assert_eq!(loaded, inputs);
}

#[test]
fn load_rejects_empty_core_sets() {
    let yaml = r#"
name: broken
sets:
  commodities: [agr]
  activities: [a-agr]
  factors: []
  institutions: [hh]
closure:
  numeraire: agr
"#;
    let path = std::env::temp_dir().join("cge_spec_empty_factors.yaml");
    std::fs::write(&path, yaml).unwrap();

    let err = load_inputs_yaml(&path).unwrap_err();
    assert!(matches!(
        err,
        SpecError::Validation(ValidationError::EmptySet {
            set: SetKind::Factors
        })
    ));
}

#[test]
fn save_refuses_invalid_inputs() {
    let mut inputs = inputs();
    inputs.sets.institutions.clear();
    let path = std::env::temp_dir().join("cge_spec_refused.yaml");
    let _ = std::fs::remove_file(&path);

    assert!(save_inputs_yaml(&path, &inputs).is_err());
    assert!(!path.exists());
}

#[test]
fn loaded_inputs_seed_the_builder() {
    let yaml = r#"
name: from-file
sets:
  commodities: [agr]
  activities: [a-agr]
  factors: [lab]
  institutions: [hh]
closure:
  numeraire: lab
rules:
  required: [households]
  allowed: [households, production]
"#;
    let path = std::env::temp_dir().join("cge_spec_seed_builder.yaml");
    std::fs::write(&path, yaml).unwrap();
    let inputs = load_inputs_yaml(&path).unwrap();
    assert!(inputs.scenario.is_baseline());
    assert!(inputs.mappings.activity_output.is_empty());

    let err = RunSpecBuilder::from_inputs(inputs.clone())
        .section(SectionSpec::empty("production"))
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        AssemblyError::MissingRequiredSection {
            section: "households".into()
        }
    );

    let spec = RunSpecBuilder::from_inputs(inputs)
        .section(SectionSpec::empty(CanonicalSection::Households).with_block(Household))
        .build()
        .unwrap();
    assert_eq!(spec.name(), "from-file");
    assert_eq!(spec.scenario().name, "baseline");

    let report = diagnose_run_spec(&spec, None);
    assert!(report.ok());
    // a-agr has no mapping entry in this file
    assert_eq!(report.structural.warnings.len(), 1);
}
