//! Constructors and operator overloads for writing equations by hand.
//!
//! ```
//! use cge_expr::build::{eq, index, param_at, sum, var, var_at};
//!
//! // Y = sum(c in [agr, man], alpha[c] * X[c])
//! let e = eq(
//!     var("Y"),
//!     sum("c", ["agr", "man"], param_at("alpha", [index("c")]) * var_at("X", [index("c")])),
//! );
//! assert_eq!(e.to_string(), "Y = sum(c in [agr, man], alpha[c] * X[c])");
//! ```
//!
//! The operators never reshape the tree: `a + b + c` is `Add[Add[a, b], c]`.
//! Use [`add`] / [`mul`] for a flat n-ary node.

use std::ops;

use cge_core::{Real, Symbol};

use crate::{EquationExpr, Literal};

pub fn index(name: impl Into<Symbol>) -> EquationExpr {
    EquationExpr::Index { name: name.into() }
}

/// Scalar variable reference.
pub fn var(name: impl Into<Symbol>) -> EquationExpr {
    EquationExpr::Var {
        name: name.into(),
        indices: None,
    }
}

pub fn var_at<I>(name: impl Into<Symbol>, indices: I) -> EquationExpr
where
    I: IntoIterator<Item = EquationExpr>,
{
    EquationExpr::Var {
        name: name.into(),
        indices: Some(indices.into_iter().collect()),
    }
}

/// Scalar parameter reference.
pub fn param(name: impl Into<Symbol>) -> EquationExpr {
    EquationExpr::Param {
        name: name.into(),
        indices: None,
    }
}

pub fn param_at<I>(name: impl Into<Symbol>, indices: I) -> EquationExpr
where
    I: IntoIterator<Item = EquationExpr>,
{
    EquationExpr::Param {
        name: name.into(),
        indices: Some(indices.into_iter().collect()),
    }
}

pub fn constant(value: Real) -> EquationExpr {
    EquationExpr::Const {
        value: Literal(value),
    }
}

pub fn raw(text: impl Into<String>) -> EquationExpr {
    EquationExpr::Raw { text: text.into() }
}

pub fn neg(expr: EquationExpr) -> EquationExpr {
    EquationExpr::Neg {
        expr: Box::new(expr),
    }
}

pub fn add<I>(terms: I) -> EquationExpr
where
    I: IntoIterator<Item = EquationExpr>,
{
    EquationExpr::Add {
        terms: terms.into_iter().collect(),
    }
}

pub fn mul<I>(factors: I) -> EquationExpr
where
    I: IntoIterator<Item = EquationExpr>,
{
    EquationExpr::Mul {
        factors: factors.into_iter().collect(),
    }
}

pub fn div(num: EquationExpr, den: EquationExpr) -> EquationExpr {
    EquationExpr::Div {
        num: Box::new(num),
        den: Box::new(den),
    }
}

pub fn pow(base: EquationExpr, exponent: EquationExpr) -> EquationExpr {
    EquationExpr::Pow {
        base: Box::new(base),
        exponent: Box::new(exponent),
    }
}

pub fn sum<D, S>(index: impl Into<Symbol>, domain: D, body: EquationExpr) -> EquationExpr
where
    D: IntoIterator<Item = S>,
    S: Into<Symbol>,
{
    EquationExpr::Sum {
        index: index.into(),
        domain: domain.into_iter().map(Into::into).collect(),
        body: Box::new(body),
    }
}

pub fn prod<D, S>(index: impl Into<Symbol>, domain: D, body: EquationExpr) -> EquationExpr
where
    D: IntoIterator<Item = S>,
    S: Into<Symbol>,
{
    EquationExpr::Prod {
        index: index.into(),
        domain: domain.into_iter().map(Into::into).collect(),
        body: Box::new(body),
    }
}

pub fn eq(lhs: EquationExpr, rhs: EquationExpr) -> EquationExpr {
    EquationExpr::Eq {
        lhs: Box::new(lhs),
        rhs: Box::new(rhs),
    }
}

impl From<Real> for EquationExpr {
    fn from(v: Real) -> Self {
        constant(v)
    }
}

impl<R: Into<EquationExpr>> ops::Add<R> for EquationExpr {
    type Output = EquationExpr;

    fn add(self, rhs: R) -> EquationExpr {
        add([self, rhs.into()])
    }
}

/// `a - b` is written as `a + (-b)`; there is no subtraction node.
impl<R: Into<EquationExpr>> ops::Sub<R> for EquationExpr {
    type Output = EquationExpr;

    fn sub(self, rhs: R) -> EquationExpr {
        add([self, neg(rhs.into())])
    }
}

impl<R: Into<EquationExpr>> ops::Mul<R> for EquationExpr {
    type Output = EquationExpr;

    fn mul(self, rhs: R) -> EquationExpr {
        mul([self, rhs.into()])
    }
}

impl<R: Into<EquationExpr>> ops::Div<R> for EquationExpr {
    type Output = EquationExpr;

    fn div(self, rhs: R) -> EquationExpr {
        div(self, rhs.into())
    }
}

impl ops::Neg for EquationExpr {
    type Output = EquationExpr;

    fn neg(self) -> EquationExpr {
        neg(self)
    }
}
