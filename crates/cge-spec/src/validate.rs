//! Strict (fail-fast) structural validation.

use cge_core::Sets;
use tracing::debug;

use crate::error::ValidationError;
use crate::spec::RunSpec;

/// Fail on the first empty core set (commodities, activities, factors, institutions).
pub fn validate_sets(sets: &Sets) -> Result<(), ValidationError> {
    match sets.first_empty() {
        Some(set) => {
            debug!(%set, "strict validation failed");
            Err(ValidationError::EmptySet { set })
        }
        None => Ok(()),
    }
}

/// Strict validation of an assembled run.
///
/// Deterministic and side-effect free; the builder runs it on every `RunSpec`
/// it produces.
pub fn validate_run_spec(spec: &RunSpec) -> Result<(), ValidationError> {
    validate_sets(spec.sets())
}
