//! Assembled model and run specifications.

use cge_core::{ClosureSpec, Mappings, ScenarioSpec, Sets, Symbol};
use tracing::trace;

use crate::block::{Block, BlockReport, BlockResult};
use crate::context::ModelContext;
use crate::error::ValidationError;
use crate::solution::Solution;
use crate::validate::validate_sets;

/// Flattened model: blocks in section order plus the sets and mappings they share.
#[derive(Debug)]
pub struct ModelSpec {
    blocks: Vec<Box<dyn Block>>,
    sets: Sets,
    mappings: Mappings,
}

impl ModelSpec {
    pub fn new(blocks: Vec<Box<dyn Block>>, sets: Sets, mappings: Mappings) -> Self {
        Self {
            blocks,
            sets,
            mappings,
        }
    }

    pub fn blocks(&self) -> &[Box<dyn Block>] {
        &self.blocks
    }

    pub fn sets(&self) -> &Sets {
        &self.sets
    }

    pub fn mappings(&self) -> &Mappings {
        &self.mappings
    }
}

/// One fully assembled, named model run.
///
/// A `RunSpec` can only be constructed through strict validation, and it
/// exposes no mutable access, so its core sets stay non-empty and its block
/// order stays fixed for its whole lifetime.
#[derive(Debug)]
pub struct RunSpec {
    name: Symbol,
    model: ModelSpec,
    closure: ClosureSpec,
    scenario: ScenarioSpec,
}

impl RunSpec {
    /// Wrap an assembled model, failing if strict validation does not pass.
    pub fn new(
        name: impl Into<Symbol>,
        model: ModelSpec,
        closure: ClosureSpec,
        scenario: ScenarioSpec,
    ) -> Result<Self, ValidationError> {
        validate_sets(model.sets())?;
        Ok(Self {
            name: name.into(),
            model,
            closure,
            scenario,
        })
    }

    pub fn name(&self) -> &Symbol {
        &self.name
    }

    pub fn model(&self) -> &ModelSpec {
        &self.model
    }

    pub fn blocks(&self) -> &[Box<dyn Block>] {
        self.model.blocks()
    }

    pub fn sets(&self) -> &Sets {
        self.model.sets()
    }

    pub fn mappings(&self) -> &Mappings {
        self.model.mappings()
    }

    pub fn closure(&self) -> &ClosureSpec {
        &self.closure
    }

    pub fn scenario(&self) -> &ScenarioSpec {
        &self.scenario
    }

    pub fn block_names(&self) -> Vec<&str> {
        self.blocks().iter().map(|b| b.name()).collect()
    }

    /// First block with the given name.
    pub fn find_block(&self, name: &str) -> Option<&dyn Block> {
        self.blocks()
            .iter()
            .find(|b| b.name() == name)
            .map(|b| &**b)
    }

    /// Call `build` on every block in order, stopping at the first failure.
    pub fn build_all(&self, ctx: &mut dyn ModelContext) -> BlockResult<()> {
        for block in self.blocks() {
            trace!(run = %self.name, block = block.name(), "building block");
            block.build(ctx, self)?;
        }
        Ok(())
    }

    /// Call `report` on every block in order, pairing each report with its block name.
    pub fn report_all(&self, solution: &dyn Solution) -> BlockResult<Vec<(String, BlockReport)>> {
        self.blocks()
            .iter()
            .map(|block| -> BlockResult<(String, BlockReport)> {
                trace!(run = %self.name, block = block.name(), "reporting block");
                Ok((block.name().to_string(), block.report(solution)?))
            })
            .collect()
    }
}
