//! cge-expr: backend-agnostic equation expressions.
//!
//! Blocks describe their mathematics as [`EquationExpr`] trees; a numerical
//! backend lowers them into its own equation types. Provides:
//! - the closed AST with structural equality/ordering/hashing
//! - constructor functions and operator overloads ([`build`])
//! - stable infix rendering (`Display`)
//! - traversal queries (referenced variables, parameters, free indices)

pub mod ast;
pub mod build;
pub mod display;
pub mod literal;
pub mod query;

pub use ast::EquationExpr;
pub use literal::Literal;
