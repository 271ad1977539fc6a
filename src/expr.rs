//! Propositional formulas as expression trees.
//!
//! This module provides the [`Expr`] type representing a parsed formula, the
//! textual rendering via [`Display`][fmt::Display], and the free-variable walk.
//! Trees are built once (by the parser or by the constructors below) and are
//! read-only afterwards; children are exclusively owned, so there is no
//! sharing and no reference counting.

use std::collections::BTreeSet;
use std::fmt;

/// A binary connective.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum BinaryOp {
    And,
    Or,
    Implies,
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BinaryOp::And => write!(f, "AND"),
            BinaryOp::Or => write!(f, "OR"),
            BinaryOp::Implies => write!(f, "->"),
        }
    }
}

/// A propositional formula.
///
/// The set of variants is closed: every well-formed tree is a variable leaf,
/// a negation, or a binary node, which is what lets the renderer and the
/// evaluator match exhaustively with no "impossible" arm.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum Expr {
    /// Variable leaf; the name is a non-empty run of ASCII letters.
    Var(String),
    /// Negation.
    Not(Box<Expr>),
    /// Binary connective applied to two subformulas.
    Binary {
        op: BinaryOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
}

impl Expr {
    /// Creates a variable leaf.
    ///
    /// # Panics
    ///
    /// Panics if `name` is empty.
    pub fn var(name: impl Into<String>) -> Self {
        let name = name.into();
        assert!(!name.is_empty(), "Variable names must be non-empty");
        Expr::Var(name)
    }

    /// Creates a negation. No simplification is performed: `not(not(x))`
    /// stays a double negation, so the tree reproduces exactly what was
    /// parsed.
    pub fn not(operand: Self) -> Self {
        Expr::Not(Box::new(operand))
    }

    /// Creates a binary node.
    pub fn binary(op: BinaryOp, lhs: Self, rhs: Self) -> Self {
        Expr::Binary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    pub fn and(lhs: Self, rhs: Self) -> Self {
        Expr::binary(BinaryOp::And, lhs, rhs)
    }

    pub fn or(lhs: Self, rhs: Self) -> Self {
        Expr::binary(BinaryOp::Or, lhs, rhs)
    }

    pub fn implies(lhs: Self, rhs: Self) -> Self {
        Expr::binary(BinaryOp::Implies, lhs, rhs)
    }

    /// Depth of the expression tree (0 for a leaf).
    pub fn depth(&self) -> usize {
        match self {
            Expr::Var(_) => 0,
            Expr::Not(e) => 1 + e.depth(),
            Expr::Binary { lhs, rhs, .. } => 1 + lhs.depth().max(rhs.depth()),
        }
    }

    /// Size of the expression tree (number of nodes).
    pub fn size(&self) -> usize {
        match self {
            Expr::Var(_) => 1,
            Expr::Not(e) => 1 + e.size(),
            Expr::Binary { lhs, rhs, .. } => 1 + lhs.size() + rhs.size(),
        }
    }

    /// Returns the set of distinct variable names occurring in the formula.
    ///
    /// The result iterates in lexicographic order, which downstream code
    /// relies on for reproducible truth-table columns.
    pub fn variables(&self) -> BTreeSet<String> {
        let mut names = BTreeSet::new();
        self.collect_variables(&mut names);
        names
    }

    fn collect_variables(&self, names: &mut BTreeSet<String>) {
        match self {
            Expr::Var(name) => {
                names.insert(name.clone());
            }
            Expr::Not(e) => e.collect_variables(names),
            Expr::Binary { lhs, rhs, .. } => {
                lhs.collect_variables(names);
                rhs.collect_variables(names);
            }
        }
    }
}

impl fmt::Display for Expr {
    /// Renders the canonical textual form: `A`, `NOT A`, `A AND B`, `A OR B`,
    /// `A -> B`. Grouping parentheses are not re-inserted, so rendering is
    /// lossy with respect to the grouping of the parsed input.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Var(name) => write!(f, "{}", name),
            Expr::Not(e) => write!(f, "NOT {}", e),
            Expr::Binary { op, lhs, rhs } => write!(f, "{} {} {}", lhs, op, rhs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_var() {
        assert_eq!(Expr::var("A").to_string(), "A");
    }

    #[test]
    fn test_render_not() {
        let e = Expr::not(Expr::var("A"));
        assert_eq!(e.to_string(), "NOT A");
    }

    #[test]
    fn test_render_binary() {
        assert_eq!(Expr::and(Expr::var("A"), Expr::var("B")).to_string(), "A AND B");
        assert_eq!(Expr::or(Expr::var("A"), Expr::var("B")).to_string(), "A OR B");
        assert_eq!(
            Expr::implies(Expr::var("A"), Expr::var("B")).to_string(),
            "A -> B"
        );
    }

    #[test]
    fn test_render_is_lossy() {
        // NOT binds over the whole rendered operand, but no parentheses appear.
        let e = Expr::not(Expr::and(Expr::var("A"), Expr::var("B")));
        assert_eq!(e.to_string(), "NOT A AND B");
    }

    #[test]
    fn test_variables() {
        let e = Expr::implies(
            Expr::and(Expr::var("B"), Expr::var("A")),
            Expr::not(Expr::var("A")),
        );
        let vars: Vec<String> = e.variables().into_iter().collect();
        assert_eq!(vars, ["A", "B"]);
    }

    #[test]
    fn test_variables_dedup() {
        let e = Expr::and(Expr::var("A"), Expr::var("A"));
        assert_eq!(e.variables().len(), 1);
    }

    #[test]
    fn test_depth_and_size() {
        let e = Expr::implies(
            Expr::and(Expr::var("A"), Expr::var("B")),
            Expr::not(Expr::var("A")),
        );
        assert_eq!(e.depth(), 2);
        assert_eq!(e.size(), 6);
    }

    #[test]
    fn test_no_simplification() {
        let e = Expr::not(Expr::not(Expr::var("A")));
        assert_eq!(e.to_string(), "NOT NOT A");
        assert_eq!(e.size(), 3);
    }

    #[test]
    #[should_panic]
    fn test_empty_name_panics() {
        let _ = Expr::var("");
    }
}
