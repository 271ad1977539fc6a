//! # proptable: Propositional-Logic Truth Tables in Rust
//!
//! **`proptable`** parses a small propositional-logic language (variables,
//! NOT, AND, OR, IMPLIES) into an expression tree, renders it back to a
//! readable string, and tabulates it under every possible boolean assignment.
//!
//! ## The language
//!
//! Formulas are written with `!` for NOT, `/\` for AND, `\/` for OR, and `->`
//! for IMPLIES, with parentheses for grouping and variables as runs of ASCII
//! letters, e.g. `(A /\ B) -> C /\ A`.
//!
//! The grammar is ordered-choice and deliberately quirky: the binary
//! alternative is always tried first and precedence falls out of
//! failure-and-fallthrough rather than binding strength, with a fixed
//! recursion-depth guard keeping the left recursion finite. See the
//! [`parse`] module documentation for the details.
//!
//! ## Quick Start
//!
//! ```rust
//! use proptable::parse::parse;
//! use proptable::table::TruthTable;
//!
//! let expr = parse(r"(A /\ B) -> C /\ A").unwrap();
//! assert_eq!(expr.to_string(), "A AND B -> C AND A");
//!
//! let table = TruthTable::build(&expr).unwrap();
//! assert_eq!(table.variables(), ["A", "B", "C"]);
//! assert_eq!(table.rows().len(), 8);
//! assert!(table.is_satisfiable());
//! assert!(!table.is_tautology());
//! ```
//!
//! ## Core Components
//!
//! - **[`expr`]**: the [`Expr`][crate::expr::Expr] tree, its rendering, and
//!   the free-variable walk.
//! - **[`parse`]**: the backtracking recursive-descent parser.
//! - **[`eval`]**: assignments, exhaustive assignment enumeration, and
//!   evaluation.
//! - **[`table`]**: the [`TruthTable`][crate::table::TruthTable] driver and
//!   its fixed-width printing.

pub mod eval;
pub mod expr;
pub mod parse;
pub mod table;
