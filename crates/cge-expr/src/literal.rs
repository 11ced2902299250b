use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};

use cge_core::Real;
use serde::{Deserialize, Serialize};

/// A real constant with structural (bitwise) equality.
///
/// `f64` alone is not `Eq`/`Hash`; comparing bit patterns keeps equality
/// reflexive (`NaN == NaN`) and consistent with `total_cmp` ordering.
/// The trade-off is that `0.0` and `-0.0` are distinct literals.
#[derive(Clone, Copy, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Literal(pub Real);

impl Literal {
    pub fn value(self) -> Real {
        self.0
    }
}

impl PartialEq for Literal {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}

impl Eq for Literal {}

impl Hash for Literal {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl PartialOrd for Literal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Literal {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl fmt::Debug for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Real> for Literal {
    fn from(v: Real) -> Self {
        Self(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nan_is_equal_to_itself() {
        let a = Literal(Real::NAN);
        assert_eq!(a, a);
        assert_eq!(a.cmp(&a), Ordering::Equal);
    }

    #[test]
    fn signed_zeros_are_distinct() {
        assert_ne!(Literal(0.0), Literal(-0.0));
        assert!(Literal(-0.0) < Literal(0.0));
    }
}
