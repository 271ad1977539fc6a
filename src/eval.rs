//! Boolean assignments and formula evaluation.
//!
//! An [`Assignment`] maps variable names to boolean values and is total over
//! some declared variable set. [`enumerate_assignments`] materializes every
//! total assignment over a set of names; [`Expr::evaluate`] reads one
//! assignment and computes the formula's value.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use log::debug;

use crate::expr::{BinaryOp, Expr};

/// A total mapping from variable names to boolean values.
pub type Assignment = BTreeMap<String, bool>;

/// Evaluation failure.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum EvalError {
    /// A variable in the formula has no value in the assignment.
    Unbound(String),
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalError::Unbound(name) => {
                write!(f, "variable `{}` is not bound in the assignment", name)
            }
        }
    }
}

impl std::error::Error for EvalError {}

/// Produces every total boolean assignment over the given variable names.
///
/// Starting from the single empty assignment, each variable in turn replaces
/// every accumulated assignment with two successors, one binding it to
/// `false` and one to `true`. The result has exactly `2^n` entries for `n`
/// names (one empty assignment for the empty set), in binary-counting order:
/// all-false first, with the lexicographically first variable most
/// significant.
pub fn enumerate_assignments(variables: &BTreeSet<String>) -> Vec<Assignment> {
    let mut assignments = vec![Assignment::new()];
    for name in variables {
        let mut extended = Vec::with_capacity(assignments.len() * 2);
        for assignment in assignments {
            for value in [false, true] {
                let mut successor = assignment.clone();
                successor.insert(name.clone(), value);
                extended.push(successor);
            }
        }
        assignments = extended;
    }
    debug!(
        "enumerated {} assignments over {} variables",
        assignments.len(),
        variables.len()
    );
    assignments
}

impl Expr {
    /// Evaluates the formula under the given assignment.
    ///
    /// A variable missing from the assignment is reported as
    /// [`EvalError::Unbound`] rather than silently defaulting to false. Both
    /// operands of every binary node are evaluated unconditionally (no
    /// short-circuiting), so an unbound variable is reported even when the
    /// other operand already decides the result. `IMPLIES` is
    /// `(NOT lhs) OR rhs`.
    pub fn evaluate(&self, assignment: &Assignment) -> Result<bool, EvalError> {
        match self {
            Expr::Var(name) => assignment
                .get(name)
                .copied()
                .ok_or_else(|| EvalError::Unbound(name.clone())),
            Expr::Not(e) => Ok(!e.evaluate(assignment)?),
            Expr::Binary { op, lhs, rhs } => {
                let lhs = lhs.evaluate(assignment)?;
                let rhs = rhs.evaluate(assignment)?;
                Ok(match op {
                    BinaryOp::And => lhs && rhs,
                    BinaryOp::Or => lhs || rhs,
                    BinaryOp::Implies => !lhs || rhs,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assignment(pairs: &[(&str, bool)]) -> Assignment {
        pairs
            .iter()
            .map(|(name, value)| (name.to_string(), *value))
            .collect()
    }

    #[test]
    fn test_evaluate_var_and_not() {
        let a = assignment(&[("A", true)]);
        assert_eq!(Expr::var("A").evaluate(&a), Ok(true));
        assert_eq!(Expr::not(Expr::var("A")).evaluate(&a), Ok(false));
    }

    #[test]
    fn test_evaluate_and() {
        let e = Expr::and(Expr::var("A"), Expr::var("B"));
        for (a, b, expected) in [
            (false, false, false),
            (false, true, false),
            (true, false, false),
            (true, true, true),
        ] {
            let assignment = assignment(&[("A", a), ("B", b)]);
            assert_eq!(e.evaluate(&assignment), Ok(expected));
        }
    }

    #[test]
    fn test_evaluate_or() {
        let e = Expr::or(Expr::var("A"), Expr::var("B"));
        for (a, b, expected) in [
            (false, false, false),
            (false, true, true),
            (true, false, true),
            (true, true, true),
        ] {
            let assignment = assignment(&[("A", a), ("B", b)]);
            assert_eq!(e.evaluate(&assignment), Ok(expected));
        }
    }

    #[test]
    fn test_evaluate_implies() {
        let e = Expr::implies(Expr::var("A"), Expr::var("B"));
        for (a, b, expected) in [
            (false, false, true),
            (false, true, true),
            (true, false, false),
            (true, true, true),
        ] {
            let assignment = assignment(&[("A", a), ("B", b)]);
            assert_eq!(e.evaluate(&assignment), Ok(expected));
        }
    }

    #[test]
    fn test_unbound_variable_is_an_error() {
        let e = Expr::and(Expr::var("A"), Expr::var("B"));
        let a = assignment(&[("A", false)]);
        // No short-circuiting: A=false does not excuse the missing B.
        assert_eq!(e.evaluate(&a), Err(EvalError::Unbound("B".to_string())));
    }

    #[test]
    fn test_enumerate_counts() {
        for n in 0..5usize {
            let variables: BTreeSet<String> = (0..n).map(|i| format!("x{}", i)).collect();
            let assignments = enumerate_assignments(&variables);
            assert_eq!(assignments.len(), 1 << n);
            // Every assignment is total over the variable set.
            for a in &assignments {
                assert_eq!(a.keys().cloned().collect::<BTreeSet<_>>(), variables);
            }
            let distinct: BTreeSet<_> = assignments.iter().cloned().collect();
            assert_eq!(distinct.len(), assignments.len());
        }
    }

    #[test]
    fn test_enumerate_order() {
        let variables: BTreeSet<String> = ["A", "B"].iter().map(|s| s.to_string()).collect();
        let assignments = enumerate_assignments(&variables);
        let rows: Vec<(bool, bool)> = assignments.iter().map(|a| (a["A"], a["B"])).collect();
        assert_eq!(
            rows,
            [(false, false), (false, true), (true, false), (true, true)]
        );
    }

    #[test]
    fn test_evaluate_is_deterministic() {
        let e = Expr::implies(
            Expr::and(Expr::var("A"), Expr::var("B")),
            Expr::not(Expr::var("A")),
        );
        let a = assignment(&[("A", true), ("B", true)]);
        let first = e.evaluate(&a);
        for _ in 0..10 {
            assert_eq!(e.evaluate(&a), first);
        }
    }
}
