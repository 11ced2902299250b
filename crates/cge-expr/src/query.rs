//! Read-only traversals used by build contexts and backends.

use std::collections::BTreeSet;

use cge_core::Symbol;

use crate::EquationExpr;

impl EquationExpr {
    /// Pre-order visit of every node, including `self`.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a EquationExpr)) {
        visit(self);
        for c in self.children() {
            c.walk(visit);
        }
    }

    pub fn node_count(&self) -> usize {
        let mut n = 0;
        self.walk(&mut |_| n += 1);
        n
    }

    /// Length of the longest root-to-leaf path; a leaf has depth 1.
    pub fn depth(&self) -> usize {
        1 + self
            .children()
            .into_iter()
            .map(EquationExpr::depth)
            .max()
            .unwrap_or(0)
    }

    /// Names of all referenced variables.
    pub fn variables(&self) -> BTreeSet<Symbol> {
        let mut out = BTreeSet::new();
        self.walk(&mut |e| {
            if let EquationExpr::Var { name, .. } = e {
                out.insert(name.clone());
            }
        });
        out
    }

    /// Names of all referenced parameters.
    pub fn parameters(&self) -> BTreeSet<Symbol> {
        let mut out = BTreeSet::new();
        self.walk(&mut |e| {
            if let EquationExpr::Param { name, .. } = e {
                out.insert(name.clone());
            }
        });
        out
    }

    /// Index symbols bound by some `Sum`/`Prod` in this tree.
    pub fn bound_indices(&self) -> BTreeSet<Symbol> {
        let mut out = BTreeSet::new();
        self.walk(&mut |e| {
            if let EquationExpr::Sum { index, .. } | EquationExpr::Prod { index, .. } = e {
                out.insert(index.clone());
            }
        });
        out
    }

    /// Index placeholders not bound by an enclosing `Sum`/`Prod`.
    ///
    /// An equation with free indices is implicitly defined over those indices'
    /// domains; which domains is up to the block that emits it.
    pub fn free_indices(&self) -> BTreeSet<Symbol> {
        let mut out = BTreeSet::new();
        let mut scope = Vec::new();
        collect_free(self, &mut scope, &mut out);
        out
    }
}

fn collect_free<'a>(
    expr: &'a EquationExpr,
    scope: &mut Vec<&'a Symbol>,
    out: &mut BTreeSet<Symbol>,
) {
    match expr {
        EquationExpr::Index { name } => {
            if !scope.contains(&name) {
                out.insert(name.clone());
            }
        }
        EquationExpr::Sum { index, body, .. } | EquationExpr::Prod { index, body, .. } => {
            scope.push(index);
            collect_free(body, scope, out);
            scope.pop();
        }
        _ => {
            for c in expr.children() {
                collect_free(c, scope, out);
            }
        }
    }
}
