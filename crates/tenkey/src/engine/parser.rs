//! Tokenizer and recursive descent parser for keypad expressions.
//!
//! The grammar is deliberately small: the keypad has no parenthesis key,
//! so the only forms are numeric literals, unary minus and the five
//! binary operators.

use crate::engine::{EvalError, EvalResult, Operator};

/// Token produced by lexical analysis.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Numeric literal
    Number(f64),
    /// Binary operator
    Operator(Operator),
}

impl Token {
    /// Returns true if this token is an operator.
    #[must_use]
    pub const fn is_operator(&self) -> bool {
        matches!(self, Self::Operator(_))
    }

    /// Returns true if this token is a number.
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Self::Number(_))
    }
}

/// Expression tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Numeric literal
    Number(f64),
    /// Unary negation
    Neg(Box<Expr>),
    /// Binary operation
    Binary {
        /// Left operand
        lhs: Box<Expr>,
        /// Operator
        op: Operator,
        /// Right operand
        rhs: Box<Expr>,
    },
}

impl Expr {
    /// Creates a number node.
    #[must_use]
    pub const fn number(value: f64) -> Self {
        Self::Number(value)
    }

    /// Creates a negation node.
    #[must_use]
    pub fn neg(inner: Expr) -> Self {
        Self::Neg(Box::new(inner))
    }

    /// Creates a binary operation node.
    #[must_use]
    pub fn binary(lhs: Expr, op: Operator, rhs: Expr) -> Self {
        Self::Binary {
            lhs: Box::new(lhs),
            op,
            rhs: Box::new(rhs),
        }
    }
}

/// Converts an expression string into tokens.
#[derive(Debug)]
pub struct Tokenizer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Tokenizer<'a> {
    /// Creates a tokenizer over `input`.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Tokenizes the entire input.
    ///
    /// # Errors
    ///
    /// `Syntax` on any character outside the expression alphabet.
    pub fn tokenize(&mut self) -> EvalResult<Vec<Token>> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token()? {
            tokens.push(token);
        }
        Ok(tokens)
    }

    /// Returns the next token, or `None` at end of input.
    ///
    /// # Errors
    ///
    /// `Syntax` on an unexpected character or malformed literal.
    pub fn next_token(&mut self) -> EvalResult<Option<Token>> {
        self.skip_whitespace();

        let Some(ch) = self.current_char() else {
            return Ok(None);
        };

        let token = match ch {
            '0'..='9' | '.' => self.read_number()?,
            '+' | '-' | '*' | '/' | '%' | '×' => {
                self.advance();
                // the buffer alphabet plus the display glyph for multiplication
                let op = Operator::from_char(ch)
                    .ok_or_else(|| EvalError::Syntax(format!("unexpected character '{ch}'")))?;
                Token::Operator(op)
            }
            _ => {
                return Err(EvalError::Syntax(format!("unexpected character '{ch}'")));
            }
        };

        Ok(Some(token))
    }

    fn current_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn advance(&mut self) {
        if let Some(ch) = self.current_char() {
            self.pos += ch.len_utf8();
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.current_char() {
            if ch.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn read_number(&mut self) -> EvalResult<Token> {
        let start = self.pos;
        let mut has_dot = false;

        while let Some(ch) = self.current_char() {
            if ch.is_ascii_digit() {
                self.advance();
            } else if ch == '.' && !has_dot {
                has_dot = true;
                self.advance();
            } else {
                break;
            }
        }

        let literal = &self.input[start..self.pos];
        let value: f64 = literal
            .parse()
            .map_err(|_| EvalError::Syntax(format!("invalid number '{literal}'")))?;

        Ok(Token::Number(value))
    }
}

/// Recursive descent parser.
///
/// Grammar:
/// ```text
/// expression ::= term (('+' | '-') term)*
/// term       ::= unary (('*' | '/' | '%') unary)*
/// unary      ::= '-' unary | NUMBER
/// ```
#[derive(Debug)]
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    /// Creates a parser from tokens.
    #[must_use]
    pub const fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, pos: 0 }
    }

    /// Parses a string expression into an [`Expr`].
    ///
    /// # Errors
    ///
    /// `EmptyExpression` when the input is blank, `Syntax` when the
    /// token stream is not a well-formed expression.
    pub fn parse_str(input: &str) -> EvalResult<Expr> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(EvalError::EmptyExpression);
        }

        let tokens = Tokenizer::new(trimmed).tokenize()?;
        if tokens.is_empty() {
            return Err(EvalError::EmptyExpression);
        }

        let mut parser = Self::new(tokens);
        let expr = parser.parse_expression()?;

        if parser.pos < parser.tokens.len() {
            return Err(EvalError::Syntax(format!(
                "unexpected token at position {}",
                parser.pos
            )));
        }

        Ok(expr)
    }

    fn current(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Option<&Token> {
        let token = self.tokens.get(self.pos);
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn parse_expression(&mut self) -> EvalResult<Expr> {
        let mut lhs = self.parse_term()?;

        while let Some(&Token::Operator(op)) = self.current() {
            if op.precedence() != 1 {
                break;
            }
            self.advance();
            let rhs = self.parse_term()?;
            lhs = Expr::binary(lhs, op, rhs);
        }

        Ok(lhs)
    }

    fn parse_term(&mut self) -> EvalResult<Expr> {
        let mut lhs = self.parse_unary()?;

        while let Some(&Token::Operator(op)) = self.current() {
            if op.precedence() != 2 {
                break;
            }
            self.advance();
            let rhs = self.parse_unary()?;
            lhs = Expr::binary(lhs, op, rhs);
        }

        Ok(lhs)
    }

    fn parse_unary(&mut self) -> EvalResult<Expr> {
        if matches!(self.current(), Some(Token::Operator(Operator::Subtract))) {
            self.advance();
            let inner = self.parse_unary()?;
            return Ok(Expr::neg(inner));
        }

        match self.advance() {
            Some(Token::Number(n)) => Ok(Expr::number(*n)),
            Some(token) => Err(EvalError::Syntax(format!("unexpected token {token:?}"))),
            None => Err(EvalError::Syntax("unexpected end of expression".into())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== Token tests =====

    #[test]
    fn token_predicates() {
        assert!(Token::Operator(Operator::Add).is_operator());
        assert!(!Token::Number(5.0).is_operator());
        assert!(Token::Number(5.0).is_number());
        assert!(!Token::Operator(Operator::Add).is_number());
    }

    // ===== Tokenizer tests =====

    #[test]
    fn tokenize_single_number() {
        let tokens = Tokenizer::new("42").tokenize().unwrap();
        assert_eq!(tokens, vec![Token::Number(42.0)]);
    }

    #[test]
    fn tokenize_decimal() {
        let tokens = Tokenizer::new("3.14").tokenize().unwrap();
        assert_eq!(tokens, vec![Token::Number(3.14)]);
    }

    #[test]
    fn tokenize_leading_dot() {
        let tokens = Tokenizer::new(".5").tokenize().unwrap();
        assert_eq!(tokens, vec![Token::Number(0.5)]);
    }

    #[test]
    fn tokenize_all_operators() {
        let tokens = Tokenizer::new("+ - * / %").tokenize().unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Operator(Operator::Add),
                Token::Operator(Operator::Subtract),
                Token::Operator(Operator::Multiply),
                Token::Operator(Operator::Divide),
                Token::Operator(Operator::Modulo),
            ]
        );
    }

    #[test]
    fn tokenize_display_glyph() {
        let tokens = Tokenizer::new("2×3").tokenize().unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Number(2.0),
                Token::Operator(Operator::Multiply),
                Token::Number(3.0),
            ]
        );
    }

    #[test]
    fn tokenize_no_spaces() {
        let tokens = Tokenizer::new("1+2*3").tokenize().unwrap();
        assert_eq!(tokens.len(), 5);
    }

    #[test]
    fn tokenize_rejects_parens() {
        assert!(matches!(
            Tokenizer::new("(2+3)").tokenize(),
            Err(EvalError::Syntax(_))
        ));
    }

    #[test]
    fn tokenize_rejects_unknown_char() {
        assert!(matches!(
            Tokenizer::new("2 @ 3").tokenize(),
            Err(EvalError::Syntax(_))
        ));
    }

    #[test]
    fn tokenize_empty_and_whitespace() {
        assert!(Tokenizer::new("").tokenize().unwrap().is_empty());
        assert!(Tokenizer::new("   ").tokenize().unwrap().is_empty());
    }

    #[test]
    fn tokenize_adjacent_dots_split_literals() {
        // "1.2.3" lexes as 1.2 followed by 0.3; the parser rejects it
        let tokens = Tokenizer::new("1.2.3").tokenize().unwrap();
        assert_eq!(tokens, vec![Token::Number(1.2), Token::Number(0.3)]);
    }

    // ===== Parser tests =====

    #[test]
    fn parse_single_number() {
        assert_eq!(Parser::parse_str("42").unwrap(), Expr::Number(42.0));
    }

    #[test]
    fn parse_addition() {
        assert_eq!(
            Parser::parse_str("2+3").unwrap(),
            Expr::binary(Expr::number(2.0), Operator::Add, Expr::number(3.0))
        );
    }

    #[test]
    fn parse_precedence_mul_over_add() {
        // 2+3*4 parses as 2+(3*4)
        let expr = Parser::parse_str("2+3*4").unwrap();
        match expr {
            Expr::Binary {
                op: Operator::Add,
                rhs,
                ..
            } => assert!(matches!(
                *rhs,
                Expr::Binary {
                    op: Operator::Multiply,
                    ..
                }
            )),
            other => panic!("expected Add at top level, got {other:?}"),
        }
    }

    #[test]
    fn parse_left_associative_same_precedence() {
        // 8/4/2 parses as (8/4)/2
        let expr = Parser::parse_str("8/4/2").unwrap();
        match expr {
            Expr::Binary {
                op: Operator::Divide,
                lhs,
                rhs,
            } => {
                assert!(matches!(
                    *lhs,
                    Expr::Binary {
                        op: Operator::Divide,
                        ..
                    }
                ));
                assert_eq!(*rhs, Expr::Number(2.0));
            }
            other => panic!("expected Divide at top level, got {other:?}"),
        }
    }

    #[test]
    fn parse_unary_minus() {
        assert_eq!(
            Parser::parse_str("-5").unwrap(),
            Expr::neg(Expr::number(5.0))
        );
    }

    #[test]
    fn parse_unary_minus_after_operator() {
        // "5+-3" is produced by the sign-toggle key
        let expr = Parser::parse_str("5+-3").unwrap();
        match expr {
            Expr::Binary {
                op: Operator::Add,
                rhs,
                ..
            } => assert!(matches!(*rhs, Expr::Neg(_))),
            other => panic!("expected Add, got {other:?}"),
        }
    }

    #[test]
    fn parse_double_negation() {
        let expr = Parser::parse_str("--5").unwrap();
        assert_eq!(expr, Expr::neg(Expr::neg(Expr::number(5.0))));
    }

    #[test]
    fn parse_unary_minus_binds_tighter_than_modulo() {
        // -5%3 parses as (-5)%3
        let expr = Parser::parse_str("-5%3").unwrap();
        match expr {
            Expr::Binary {
                op: Operator::Modulo,
                lhs,
                ..
            } => assert!(matches!(*lhs, Expr::Neg(_))),
            other => panic!("expected Modulo at top level, got {other:?}"),
        }
    }

    #[test]
    fn parse_empty_is_error() {
        assert!(matches!(
            Parser::parse_str(""),
            Err(EvalError::EmptyExpression)
        ));
        assert!(matches!(
            Parser::parse_str("   "),
            Err(EvalError::EmptyExpression)
        ));
    }

    #[test]
    fn parse_trailing_operator_is_error() {
        assert!(matches!(
            Parser::parse_str("2+"),
            Err(EvalError::Syntax(_))
        ));
    }

    #[test]
    fn parse_leading_binary_operator_is_error() {
        assert!(matches!(
            Parser::parse_str("*3"),
            Err(EvalError::Syntax(_))
        ));
    }

    #[test]
    fn parse_adjacent_numbers_is_error() {
        assert!(matches!(
            Parser::parse_str("1.2.3"),
            Err(EvalError::Syntax(_))
        ));
    }

    #[test]
    fn parse_consecutive_non_minus_operators_is_error() {
        assert!(matches!(
            Parser::parse_str("2+*3"),
            Err(EvalError::Syntax(_))
        ));
    }

    // ===== Expr constructor tests =====

    #[test]
    fn expr_constructors() {
        let node = Expr::binary(Expr::number(1.0), Operator::Add, Expr::number(2.0));
        match node {
            Expr::Binary { lhs, op, rhs } => {
                assert_eq!(*lhs, Expr::Number(1.0));
                assert_eq!(op, Operator::Add);
                assert_eq!(*rhs, Expr::Number(2.0));
            }
            other => panic!("expected Binary, got {other:?}"),
        }
    }
}
