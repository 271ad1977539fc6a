//! Truth tables.
//!
//! [`TruthTable::build`] orchestrates the variable walk, the assignment
//! enumeration, and the evaluator into one row per assignment, in a stable
//! order: variables are the table's columns in lexicographic order, and rows
//! count up in binary with the first variable most significant.

use std::fmt;

use log::debug;

use crate::eval::{enumerate_assignments, EvalError};
use crate::expr::Expr;

/// One row of a truth table: the value of each variable (in column order)
/// and the formula's result.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Row {
    pub values: Vec<bool>,
    pub result: bool,
}

/// A complete truth table for one formula.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct TruthTable {
    variables: Vec<String>,
    rows: Vec<Row>,
}

impl TruthTable {
    /// Builds the complete table for `expr`: `2^n` rows for `n` distinct
    /// variables (a single row for a formula with none).
    pub fn build(expr: &Expr) -> Result<Self, EvalError> {
        let names = expr.variables();
        let variables: Vec<String> = names.iter().cloned().collect();

        let mut rows = Vec::new();
        for assignment in enumerate_assignments(&names) {
            let result = expr.evaluate(&assignment)?;
            // Total over `names` by construction, so indexing cannot miss.
            let values = variables.iter().map(|name| assignment[name]).collect();
            rows.push(Row { values, result });
        }

        debug!(
            "built truth table: {} variables, {} rows",
            variables.len(),
            rows.len()
        );
        Ok(TruthTable { variables, rows })
    }

    /// Column names, in lexicographic order.
    pub fn variables(&self) -> &[String] {
        &self.variables
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// True iff the formula holds under every assignment.
    pub fn is_tautology(&self) -> bool {
        self.rows.iter().all(|row| row.result)
    }

    /// True iff the formula holds under at least one assignment.
    pub fn is_satisfiable(&self) -> bool {
        self.rows.iter().any(|row| row.result)
    }
}

impl fmt::Display for TruthTable {
    /// Prints a header row (variable names then `Result`) followed by one
    /// line per assignment, each cell right-aligned in a fixed field width.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Wide enough for "false", or for the variable name itself.
        const VALUE_WIDTH: usize = 5;
        let widths: Vec<usize> = self
            .variables
            .iter()
            .map(|name| name.len().max(VALUE_WIDTH))
            .collect();
        let result_width = "Result".len();

        for (name, width) in self.variables.iter().zip(widths.iter().copied()) {
            write!(f, "{:>width$} ", name, width = width)?;
        }
        writeln!(f, "{:>width$}", "Result", width = result_width)?;

        for row in &self.rows {
            for (value, width) in row.values.iter().zip(widths.iter().copied()) {
                write!(f, "{:>width$} ", value, width = width)?;
            }
            writeln!(f, "{:>width$}", row.result, width = result_width)?;
        }
        Ok(())
    }
}
