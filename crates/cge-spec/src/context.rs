//! Build contexts: where blocks emit declarations and equations.

use std::collections::{BTreeSet, HashSet};

use cge_core::Symbol;
use cge_expr::EquationExpr;
use serde::{Deserialize, Serialize};

use crate::block::{BlockError, BlockResult};

/// A variable or parameter declaration.
///
/// `domains` holds one ordered member list per index position; an empty
/// `domains` declares a scalar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Declaration {
    pub name: Symbol,
    #[serde(default)]
    pub domains: Vec<Vec<Symbol>>,
}

impl Declaration {
    pub fn scalar(name: impl Into<Symbol>) -> Self {
        Self {
            name: name.into(),
            domains: Vec::new(),
        }
    }

    pub fn indexed<I>(name: impl Into<Symbol>, domains: I) -> Self
    where
        I: IntoIterator<Item = Vec<Symbol>>,
    {
        Self {
            name: name.into(),
            domains: domains.into_iter().collect(),
        }
    }

    pub fn is_scalar(&self) -> bool {
        self.domains.is_empty()
    }
}

/// A model equation with its name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedEquation {
    pub name: Symbol,
    pub expr: EquationExpr,
}

/// Shared sink that blocks write into during `build`.
///
/// Solver backends implement this to lower equations straight into their own
/// representation; [`EquationSystem`] is the in-memory implementation.
pub trait ModelContext {
    fn declare_variable(&mut self, decl: Declaration) -> BlockResult<()>;

    fn declare_parameter(&mut self, decl: Declaration) -> BlockResult<()>;

    fn add_equation(&mut self, name: Symbol, expr: EquationExpr) -> BlockResult<()>;
}

/// Ordered, in-memory collection of declarations and equations.
///
/// Insertion order is kept so that equation ordering follows block order.
#[derive(Debug, Clone, Default)]
pub struct EquationSystem {
    variables: Vec<Declaration>,
    parameters: Vec<Declaration>,
    equations: Vec<NamedEquation>,
    names: HashSet<Symbol>,
    equation_names: HashSet<Symbol>,
}

impl EquationSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn variables(&self) -> &[Declaration] {
        &self.variables
    }

    pub fn parameters(&self) -> &[Declaration] {
        &self.parameters
    }

    pub fn equations(&self) -> &[NamedEquation] {
        &self.equations
    }

    pub fn equation(&self, name: &str) -> Option<&EquationExpr> {
        self.equations
            .iter()
            .find(|e| e.name == name)
            .map(|e| &e.expr)
    }

    /// `(equation, symbol)` pairs for variables/parameters used in an equation
    /// but never declared, in equation order.
    pub fn undeclared_references(&self) -> Vec<(Symbol, Symbol)> {
        let vars: BTreeSet<&Symbol> = self.variables.iter().map(|d| &d.name).collect();
        let params: BTreeSet<&Symbol> = self.parameters.iter().map(|d| &d.name).collect();

        let mut out = Vec::new();
        for eq in &self.equations {
            for v in eq.expr.variables() {
                if !vars.contains(&v) {
                    out.push((eq.name.clone(), v));
                }
            }
            for p in eq.expr.parameters() {
                if !params.contains(&p) {
                    out.push((eq.name.clone(), p));
                }
            }
        }
        out
    }

    fn claim_name(&mut self, name: &Symbol) -> BlockResult<()> {
        if !self.names.insert(name.clone()) {
            return Err(BlockError::DuplicateDeclaration {
                name: name.to_string(),
            });
        }
        Ok(())
    }
}

impl ModelContext for EquationSystem {
    fn declare_variable(&mut self, decl: Declaration) -> BlockResult<()> {
        self.claim_name(&decl.name)?;
        self.variables.push(decl);
        Ok(())
    }

    fn declare_parameter(&mut self, decl: Declaration) -> BlockResult<()> {
        self.claim_name(&decl.name)?;
        self.parameters.push(decl);
        Ok(())
    }

    fn add_equation(&mut self, name: Symbol, expr: EquationExpr) -> BlockResult<()> {
        if !expr.is_equation() {
            return Err(BlockError::NotAnEquation {
                name: name.to_string(),
            });
        }
        if !self.equation_names.insert(name.clone()) {
            return Err(BlockError::DuplicateEquation {
                name: name.to_string(),
            });
        }
        self.equations.push(NamedEquation { name, expr });
        Ok(())
    }
}
