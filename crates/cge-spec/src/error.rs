//! Error types for run-spec assembly and validation.

use cge_core::{SetKind, Symbol};
use thiserror::Error;

/// Strict structural validation failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Core set '{set}' is empty")]
    EmptySet { set: SetKind },
}

/// Fail-fast section assembly errors. Each names the offending section.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssemblyError {
    #[error("Duplicate section: {section}")]
    DuplicateSection { section: Symbol },

    #[error("Unknown section: {section} (not in the allowed list)")]
    UnknownSection { section: Symbol },

    #[error("Missing required section: {section}")]
    MissingRequiredSection { section: Symbol },

    #[error("Section must be non-empty: {section}")]
    EmptyRequiredSection { section: Symbol },

    #[error("Section {section} appears {count} times; expected exactly one")]
    AmbiguousSection { section: Symbol, count: usize },

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

pub type AssemblyResult<T> = Result<T, AssemblyError>;
