//! Stable infix rendering.
//!
//! Parentheses are emitted only where needed under left-associative `+ * /`
//! and right-associative `^`, so the printed form identifies the tree shape.

use core::fmt;

use cge_core::Symbol;

use crate::EquationExpr;

const PREC_EQ: u8 = 0;
const PREC_ADD: u8 = 1;
const PREC_MUL: u8 = 2;
const PREC_NEG: u8 = 3;
const PREC_POW: u8 = 4;
const PREC_ATOM: u8 = 5;

fn precedence(expr: &EquationExpr) -> u8 {
    match expr {
        EquationExpr::Eq { .. } | EquationExpr::Raw { .. } => PREC_EQ,
        EquationExpr::Add { terms } if !terms.is_empty() => PREC_ADD,
        EquationExpr::Mul { factors } if !factors.is_empty() => PREC_MUL,
        EquationExpr::Div { .. } => PREC_MUL,
        EquationExpr::Neg { .. } => PREC_NEG,
        EquationExpr::Const { value } if value.0.is_sign_negative() => PREC_NEG,
        EquationExpr::Pow { .. } => PREC_POW,
        _ => PREC_ATOM,
    }
}

fn child(f: &mut fmt::Formatter<'_>, expr: &EquationExpr, min_prec: u8) -> fmt::Result {
    if precedence(expr) < min_prec {
        write!(f, "({expr})")
    } else {
        write!(f, "{expr}")
    }
}

fn reference(
    f: &mut fmt::Formatter<'_>,
    name: &Symbol,
    indices: &Option<Vec<EquationExpr>>,
) -> fmt::Result {
    write!(f, "{name}")?;
    if let Some(indices) = indices {
        f.write_str("[")?;
        for (i, idx) in indices.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{idx}")?;
        }
        f.write_str("]")?;
    }
    Ok(())
}

fn reduction(
    f: &mut fmt::Formatter<'_>,
    op: &str,
    index: &Symbol,
    domain: &[Symbol],
    body: &EquationExpr,
) -> fmt::Result {
    write!(f, "{op}({index} in [")?;
    for (i, member) in domain.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{member}")?;
    }
    write!(f, "], {body})")
}

impl fmt::Display for EquationExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EquationExpr::Index { name } => write!(f, "{name}"),
            EquationExpr::Var { name, indices } | EquationExpr::Param { name, indices } => {
                reference(f, name, indices)
            }
            EquationExpr::Const { value } => write!(f, "{value}"),
            EquationExpr::Raw { text } => f.write_str(text),
            EquationExpr::Neg { expr } => {
                f.write_str("-")?;
                child(f, expr, PREC_POW)
            }
            EquationExpr::Add { terms } => {
                if terms.is_empty() {
                    return f.write_str("0");
                }
                for (i, term) in terms.iter().enumerate() {
                    match (i, term) {
                        (0, _) => child(f, term, PREC_ADD)?,
                        (_, EquationExpr::Neg { expr }) => {
                            f.write_str(" - ")?;
                            child(f, expr, PREC_MUL)?;
                        }
                        _ => {
                            f.write_str(" + ")?;
                            child(f, term, PREC_MUL)?;
                        }
                    }
                }
                Ok(())
            }
            EquationExpr::Mul { factors } => {
                if factors.is_empty() {
                    return f.write_str("1");
                }
                for (i, factor) in factors.iter().enumerate() {
                    if i == 0 {
                        child(f, factor, PREC_MUL)?;
                    } else {
                        f.write_str(" * ")?;
                        child(f, factor, PREC_NEG)?;
                    }
                }
                Ok(())
            }
            EquationExpr::Div { num, den } => {
                child(f, num, PREC_MUL)?;
                f.write_str(" / ")?;
                child(f, den, PREC_NEG)
            }
            EquationExpr::Pow { base, exponent } => {
                child(f, base, PREC_ATOM)?;
                f.write_str(" ^ ")?;
                child(f, exponent, PREC_POW)
            }
            EquationExpr::Sum {
                index,
                domain,
                body,
            } => reduction(f, "sum", index, domain, body),
            EquationExpr::Prod {
                index,
                domain,
                body,
            } => reduction(f, "prod", index, domain, body),
            EquationExpr::Eq { lhs, rhs } => {
                child(f, lhs, PREC_ADD)?;
                f.write_str(" = ")?;
                child(f, rhs, PREC_ADD)
            }
        }
    }
}
