//! cge-spec: run-spec assembly and validation for CGE model families.
//!
//! Provides:
//! - the [`Block`] capability contract and the seams blocks talk to
//!   ([`ModelContext`], [`Solution`], [`Benchmark`])
//! - sections, templates and [`SectionRules`]
//! - the [`RunSpecBuilder`] / [`build_run_spec`] assembly pipeline
//! - strict ([`validate_run_spec`]) and advisory ([`diagnose_run_spec`]) validation
//! - YAML/JSON persistence of [`RunInputs`]

pub mod benchmark;
pub mod block;
pub mod builder;
pub mod context;
pub mod diagnostics;
pub mod error;
pub mod inputs;
pub mod section;
pub mod solution;
pub mod spec;
pub mod validate;

pub use benchmark::{Benchmark, FlowMatrix};
pub use block::{Block, BlockError, BlockOperation, BlockReport, BlockResult};
pub use builder::{RunSpecBuilder, build_run_spec, build_run_spec_from_template};
pub use context::{Declaration, EquationSystem, ModelContext, NamedEquation};
pub use diagnostics::{Category, CategoryReport, DiagnosticReport, diagnose, diagnose_run_spec};
pub use error::{AssemblyError, AssemblyResult, ValidationError};
pub use inputs::RunInputs;
pub use section::{CanonicalSection, RunSpecTemplate, SectionRules, SectionSpec};
pub use solution::{Solution, SolutionTable};
pub use spec::{ModelSpec, RunSpec};
pub use validate::{validate_run_spec, validate_sets};

pub type SpecResult<T> = Result<T, SpecError>;

#[derive(thiserror::Error, Debug)]
pub enum SpecError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Assembly error: {0}")]
    Assembly(#[from] AssemblyError),

    #[error("Block error: {0}")]
    Block(#[from] BlockError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn load_inputs_yaml(path: &std::path::Path) -> SpecResult<RunInputs> {
    let content = std::fs::read_to_string(path)?;
    let inputs: RunInputs = serde_yaml::from_str(&content)?;
    validate_sets(&inputs.sets)?;
    Ok(inputs)
}

pub fn save_inputs_yaml(path: &std::path::Path, inputs: &RunInputs) -> SpecResult<()> {
    validate_sets(&inputs.sets)?;
    let content = serde_yaml::to_string(inputs)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_inputs_json(path: &std::path::Path) -> SpecResult<RunInputs> {
    let content = std::fs::read_to_string(path)?;
    let inputs: RunInputs = serde_json::from_str(&content)?;
    validate_sets(&inputs.sets)?;
    Ok(inputs)
}

pub fn save_inputs_json(path: &std::path::Path, inputs: &RunInputs) -> SpecResult<()> {
    validate_sets(&inputs.sets)?;
    let content = serde_json::to_string_pretty(inputs)?;
    std::fs::write(path, content)?;
    Ok(())
}
