//! Expression evaluation.

use crate::engine::parser::{Expr, Parser};
use crate::engine::EvalResult;

/// Evaluates an expression tree.
///
/// # Errors
///
/// Propagates [`crate::engine::EvalError`] from the individual operator
/// applications (division by zero, non-finite result).
pub fn evaluate(expr: &Expr) -> EvalResult<f64> {
    match expr {
        Expr::Number(n) => Ok(*n),
        Expr::Neg(inner) => Ok(-evaluate(inner)?),
        Expr::Binary { lhs, op, rhs } => {
            let left = evaluate(lhs)?;
            let right = evaluate(rhs)?;
            op.apply(left, right)
        }
    }
}

/// Parses and evaluates a string expression.
///
/// # Errors
///
/// Any [`crate::engine::EvalError`]: empty input, malformed syntax,
/// division by zero or a non-finite result.
pub fn evaluate_str(input: &str) -> EvalResult<f64> {
    let expr = Parser::parse_str(input)?;
    evaluate(&expr)
}
