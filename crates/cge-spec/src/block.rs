//! Capability contract for pluggable model components.

use core::fmt;
use std::any::Any;

use thiserror::Error;

use crate::benchmark::Benchmark;
use crate::context::ModelContext;
use crate::solution::Solution;
use crate::spec::RunSpec;

/// Block-specific reporting output.
pub type BlockReport = serde_json::Value;

/// The three lifecycle operations of [`Block`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockOperation {
    Calibrate,
    Build,
    Report,
}

impl fmt::Display for BlockOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BlockOperation::Calibrate => "calibrate",
            BlockOperation::Build => "build",
            BlockOperation::Report => "report",
        })
    }
}

/// Errors raised by blocks and by the contexts they write into.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BlockError {
    #[error("Block '{block}' does not implement {operation}")]
    NotImplemented {
        block: String,
        operation: BlockOperation,
    },

    #[error("Block '{block}' received invalid input: {what}")]
    InvalidInput { block: String, what: String },

    #[error("Duplicate declaration: {name}")]
    DuplicateDeclaration { name: String },

    #[error("Duplicate equation: {name}")]
    DuplicateEquation { name: String },

    #[error("Equation '{name}' is not an equality expression")]
    NotAnEquation { name: String },
}

pub type BlockResult<T> = Result<T, BlockError>;

/// Trait for model components (production, trade, households, ...).
///
/// The assembly pipeline treats blocks as opaque values: it only orders and
/// carries them. A solver drives the lifecycle:
/// 1. `calibrate` each block against benchmark data (before assembly)
/// 2. `build` each block, in [`RunSpec::blocks`] order, into one context
/// 3. solve (external)
/// 4. `report` each block against the solution
///
/// Every operation defaults to [`BlockError::NotImplemented`]: invoking an
/// operation a block does not provide is an error, never a silent no-op.
pub trait Block: Send + Sync {
    /// Block name for logging and report keys.
    fn name(&self) -> &str;

    /// Derive calibrated parameters from benchmark data.
    ///
    /// `data` and `params` are defined by the model family; implementations
    /// downcast them to the concrete types they expect.
    fn calibrate(
        &mut self,
        _data: &dyn Any,
        _benchmark: &dyn Benchmark,
        _params: &dyn Any,
    ) -> BlockResult<()> {
        Err(BlockError::NotImplemented {
            block: self.name().to_string(),
            operation: BlockOperation::Calibrate,
        })
    }

    /// Declare variables/parameters and emit equations for the finalized run.
    fn build(&self, _ctx: &mut dyn ModelContext, _spec: &RunSpec) -> BlockResult<()> {
        Err(BlockError::NotImplemented {
            block: self.name().to_string(),
            operation: BlockOperation::Build,
        })
    }

    /// Compute reporting artifacts from a solved model.
    fn report(&self, _solution: &dyn Solution) -> BlockResult<BlockReport> {
        Err(BlockError::NotImplemented {
            block: self.name().to_string(),
            operation: BlockOperation::Report,
        })
    }
}

impl fmt::Debug for dyn Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Block({})", self.name())
    }
}
