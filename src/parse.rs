//! Recursive-descent parser for the formula language.
//!
//! The grammar is PEG-style ordered choice: the first alternative that
//! succeeds wins, with no longest-match rule and no true operator precedence.
//!
//! ```text
//! Expression := BinaryExpr | UnaryExpr | Variable
//! BinaryExpr := Expression ( "/\" | "\/" | "->" ) Expression
//! UnaryExpr  := "(" Expression ")" | "!" Expression
//! Variable   := one-or-more ASCII letters
//! ```
//!
//! `BinaryExpr` recursively calls `Expression` for its left operand before
//! knowing whether an operator follows, so a bare variable is first
//! mis-attempted as the left side of a binary node and only falls through to
//! the shallower alternative when the operator match fails. The grammar is
//! therefore left-recursive, and termination relies on the depth guard
//! [`MAX_DEPTH`]: any `Expression` call entered past the limit fails like an
//! ordinary mismatch and ordered choice moves on. The guard is a safety
//! valve, not a size limit: well-formed but deeply nested input (say, twelve
//! chained `!`) is rejected. Acceptance is also sensitive to how the depth
//! budget lines up across alternatives: a bare parenthesized binary group
//! such as `(A /\ B)` is rejected on its own even though the same group
//! parses inside a larger formula.
//!
//! Backtracking is plain `Result` control flow over `&str` slices: each
//! alternative either returns the parsed expression plus the unconsumed
//! remainder, or an error that the caller's `or_else` chain absorbs by
//! retrying the next alternative on the original slice.

use std::fmt;
use std::str::FromStr;

use log::debug;

use crate::expr::{BinaryOp, Expr};

/// Maximum recursion depth for `Expression`.
///
/// The left operand of a binary node is parsed at `depth + 1` and the right
/// operand at `depth + 2` (one more than the already-incremented left parse);
/// a parenthesized or negated subexpression is parsed at `depth + 1`.
pub const MAX_DEPTH: u32 = 10;

/// Failure of a single grammar alternative (or of the whole parse, once no
/// alternative remains).
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum ParseError {
    /// A literal token did not match at the current position.
    Expected(&'static str),
    /// No run of ASCII letters at the current position.
    ExpectedVariable,
    /// The recursion-depth guard tripped.
    TooDeep,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Expected(token) => write!(f, "expected `{}`", token),
            ParseError::ExpectedVariable => write!(f, "expected a variable"),
            ParseError::TooDeep => {
                write!(f, "formula nesting exceeds the recursion limit ({})", MAX_DEPTH)
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Parses a formula, ignoring any unconsumed trailing input.
///
/// The grammar matches the longest prefix it can reach within the depth
/// guard; use [`parse_prefix`] to observe the remainder.
pub fn parse(input: &str) -> Result<Expr, ParseError> {
    parse_prefix(input).map(|(expr, _)| expr)
}

/// Parses a formula and returns it together with the unconsumed remainder.
pub fn parse_prefix(input: &str) -> Result<(Expr, &str), ParseError> {
    debug!("parse({:?})", input);
    let (expr, rest) = expression(input, 0)?;
    debug!("parsed {} with remainder {:?}", expr, rest);
    Ok((expr, rest))
}

impl FromStr for Expr {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

type Parsed<'a> = Result<(Expr, &'a str), ParseError>;

fn expression(input: &str, depth: u32) -> Parsed<'_> {
    if depth > MAX_DEPTH {
        return Err(ParseError::TooDeep);
    }
    binary(input, depth)
        .or_else(|_| unary(input, depth))
        .or_else(|_| variable(input))
}

fn binary(input: &str, depth: u32) -> Parsed<'_> {
    let (lhs, rest) = expression(input, depth + 1)?;
    let (op, rest) = operator(rest)?;
    let (rhs, rest) = expression(rest, depth + 2)?;
    Ok((Expr::binary(op, lhs, rhs), rest))
}

fn operator(input: &str) -> Result<(BinaryOp, &str), ParseError> {
    if let Ok(rest) = literal(input, r"/\") {
        return Ok((BinaryOp::And, rest));
    }
    if let Ok(rest) = literal(input, r"\/") {
        return Ok((BinaryOp::Or, rest));
    }
    let rest = literal(input, "->")?;
    Ok((BinaryOp::Implies, rest))
}

fn unary(input: &str, depth: u32) -> Parsed<'_> {
    parenthesized(input, depth).or_else(|_| negation(input, depth))
}

fn parenthesized(input: &str, depth: u32) -> Parsed<'_> {
    let rest = literal(input, "(")?;
    let (inner, rest) = expression(rest, depth + 1)?;
    let rest = literal(rest, ")")?;
    Ok((inner, rest))
}

fn negation(input: &str, depth: u32) -> Parsed<'_> {
    let rest = literal(input, "!")?;
    let (operand, rest) = expression(rest, depth + 1)?;
    Ok((Expr::not(operand), rest))
}

fn variable(input: &str) -> Parsed<'_> {
    let input = skip_spaces(input);
    let end = input
        .find(|c: char| !c.is_ascii_alphabetic())
        .unwrap_or(input.len());
    if end == 0 {
        return Err(ParseError::ExpectedVariable);
    }
    let (name, rest) = input.split_at(end);
    Ok((Expr::var(name), skip_spaces(rest)))
}

/// Matches `token` as an exact prefix of the remaining input, skipping
/// leading spaces before the attempt and after a successful match. Only
/// spaces are skipped; there is no other whitespace handling.
fn literal<'a>(input: &'a str, token: &'static str) -> Result<&'a str, ParseError> {
    match skip_spaces(input).strip_prefix(token) {
        Some(rest) => Ok(skip_spaces(rest)),
        None => Err(ParseError::Expected(token)),
    }
}

fn skip_spaces(input: &str) -> &str {
    input.trim_start_matches(' ')
}
