//! The five binary operators of the keypad.

use crate::engine::{EvalError, EvalResult};

/// Binary operator available on the keypad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Subtract,
    /// Multiplication (`*`, displayed as `×`)
    Multiply,
    /// Division (`/`)
    Divide,
    /// Remainder (`%`)
    Modulo,
}

impl Operator {
    /// The character stored in the expression buffer.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
            Self::Modulo => '%',
        }
    }

    /// The glyph shown on the keypad. Multiplication uses the display
    /// glyph `×`; everything else matches [`Operator::symbol`].
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Multiply => '×',
            other => other.symbol(),
        }
    }

    /// Precedence level; higher binds tighter.
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Subtract => 1,
            Self::Multiply | Self::Divide | Self::Modulo => 2,
        }
    }

    /// Maps a character to an operator. Accepts the display glyph `×`
    /// (and a lowercase `x`) as multiplication.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' | '×' | 'x' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            '%' => Some(Self::Modulo),
            _ => None,
        }
    }

    /// Returns true when `c` is one of the buffer operator characters.
    #[must_use]
    pub const fn is_symbol(c: char) -> bool {
        matches!(c, '+' | '-' | '*' | '/' | '%')
    }

    /// Applies the operator to two operands.
    ///
    /// # Errors
    ///
    /// `DivisionByZero` for `/` or `%` with a zero right operand,
    /// `NonFinite` when the result is infinite or NaN.
    pub fn apply(self, a: f64, b: f64) -> EvalResult<f64> {
        let result = match self {
            Self::Add => a + b,
            Self::Subtract => a - b,
            Self::Multiply => a * b,
            Self::Divide => {
                if b == 0.0 {
                    return Err(EvalError::DivisionByZero);
                }
                a / b
            }
            Self::Modulo => {
                if b == 0.0 {
                    return Err(EvalError::DivisionByZero);
                }
                a % b
            }
        };

        if result.is_finite() {
            Ok(result)
        } else {
            Err(EvalError::NonFinite)
        }
    }
}
