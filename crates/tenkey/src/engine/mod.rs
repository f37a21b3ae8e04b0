//! Arithmetic expression engine.
//!
//! The engine is a small pipeline: [`Tokenizer`] turns the accumulated
//! buffer into tokens, [`Parser`] builds an [`Expr`] with conventional
//! precedence, and [`evaluate`] folds it into an `f64`. No dynamic code
//! execution is involved anywhere.

mod eval;
mod operator;
mod parser;

pub use eval::{evaluate, evaluate_str};
pub use operator::Operator;
pub use parser::{Expr, Parser, Token, Tokenizer};

use thiserror::Error;

/// Result type for engine operations.
pub type EvalResult<T> = Result<T, EvalError>;

/// The single error kind surfaced by the engine.
///
/// Every variant is caught at the equals-key boundary and reported as an
/// invalid expression; none of them escapes to the caller of the
/// accumulator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// Division or modulo by zero.
    #[error("division by zero")]
    DivisionByZero,
    /// The result overflowed to infinity or is NaN.
    #[error("result is not a finite number")]
    NonFinite,
    /// Nothing to evaluate.
    #[error("empty expression")]
    EmptyExpression,
    /// The buffer does not form a well-formed expression.
    #[error("invalid expression: {0}")]
    Syntax(String),
}
