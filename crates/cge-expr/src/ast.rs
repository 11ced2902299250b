//! Equation expression tree.
//!
//! A pure syntax tree: construction never fails and nothing here checks index
//! consistency, domain membership or division by zero. Backends that lower the
//! tree into solver equations own those checks.

use cge_core::Symbol;
use serde::{Deserialize, Serialize};

use crate::Literal;

/// One node of a model equation.
///
/// Equality, ordering and hashing are structural: two trees are equal iff
/// they have the same variant and recursively equal children. Operand order in
/// `Add`/`Mul` is kept for reproducible rendering and participates in equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EquationExpr {
    /// Summation/product index placeholder, e.g. `i` in `sum(i in C, x[i])`.
    Index { name: Symbol },

    /// Endogenous variable. `indices: None` is a scalar reference.
    Var {
        name: Symbol,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        indices: Option<Vec<EquationExpr>>,
    },

    /// Exogenous parameter, same shape as `Var`.
    Param {
        name: Symbol,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        indices: Option<Vec<EquationExpr>>,
    },

    Const { value: Literal },

    /// Opaque backend-interpreted text for constructs the tree does not model.
    Raw { text: String },

    Neg { expr: Box<EquationExpr> },

    /// n-ary sum of terms.
    Add { terms: Vec<EquationExpr> },

    /// n-ary product of factors.
    Mul { factors: Vec<EquationExpr> },

    Div {
        num: Box<EquationExpr>,
        den: Box<EquationExpr>,
    },

    Pow {
        base: Box<EquationExpr>,
        exponent: Box<EquationExpr>,
    },

    /// `body` evaluated once per domain member with `index` substituted, then summed.
    Sum {
        index: Symbol,
        domain: Vec<Symbol>,
        body: Box<EquationExpr>,
    },

    /// As `Sum`, multiplied.
    Prod {
        index: Symbol,
        domain: Vec<Symbol>,
        body: Box<EquationExpr>,
    },

    /// One model equation `lhs = rhs`.
    Eq {
        lhs: Box<EquationExpr>,
        rhs: Box<EquationExpr>,
    },
}

impl EquationExpr {
    /// Direct sub-expressions in left-to-right order.
    pub fn children(&self) -> Vec<&EquationExpr> {
        match self {
            EquationExpr::Index { .. } | EquationExpr::Const { .. } | EquationExpr::Raw { .. } => {
                Vec::new()
            }
            EquationExpr::Var { indices, .. } | EquationExpr::Param { indices, .. } => {
                indices.iter().flatten().collect()
            }
            EquationExpr::Neg { expr } => vec![&**expr],
            EquationExpr::Add { terms } => terms.iter().collect(),
            EquationExpr::Mul { factors } => factors.iter().collect(),
            EquationExpr::Div { num, den } => vec![&**num, &**den],
            EquationExpr::Pow { base, exponent } => vec![&**base, &**exponent],
            EquationExpr::Sum { body, .. } | EquationExpr::Prod { body, .. } => vec![&**body],
            EquationExpr::Eq { lhs, rhs } => vec![&**lhs, &**rhs],
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children().is_empty()
    }

    /// True for the `Eq` variant, i.e. a complete model equation.
    pub fn is_equation(&self) -> bool {
        matches!(self, EquationExpr::Eq { .. })
    }
}
