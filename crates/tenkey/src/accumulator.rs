//! The expression accumulator state machine.
//!
//! One key press mutates the buffer and yields the display notifications
//! the frontend needs. Each press is handled to completion before the
//! next; the accumulator is a plain owned struct with no ambient state.

use crate::engine::{self, Operator};
use crate::format::format_result;

/// A keypad key, the typed form of a key-activation notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// A digit key, `0` through `9`.
    Digit(u8),
    /// The decimal point key.
    Dot,
    /// One of the five binary operator keys.
    Op(Operator),
    /// The `=` key: evaluate the buffer.
    Equals,
    /// The `C` key: reset everything.
    Clear,
    /// The `←` key: remove the last character.
    Backspace,
    /// The `±` key: negate the trailing numeric run.
    ToggleSign,
}

impl Key {
    /// Maps a key glyph to a key: digits, `.`, the operator glyphs
    /// (`×` maps to multiplication), and the controls `= C ← ±`.
    #[must_use]
    pub fn from_label(label: char) -> Option<Self> {
        match label {
            '0'..='9' => {
                let d = label.to_digit(10)?;
                u8::try_from(d).ok().map(Self::Digit)
            }
            '.' => Some(Self::Dot),
            '=' => Some(Self::Equals),
            'C' => Some(Self::Clear),
            '←' => Some(Self::Backspace),
            '±' => Some(Self::ToggleSign),
            other => Operator::from_char(other).map(Self::Op),
        }
    }
}

/// Display notification produced by a key press.
///
/// The frontend applies these in order; the accumulator never talks to
/// the display directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// The buffer changed; render the text verbatim.
    ExpressionChanged(String),
    /// Evaluation succeeded; show the formatted result.
    ResultReady(String),
    /// Hide the result panel (clear, or new input after a result).
    ResultHidden,
    /// Evaluation failed; show a non-blocking invalid-expression notice.
    InvalidExpression,
}

/// Expression accumulator and evaluator.
#[derive(Debug, Clone)]
pub struct Accumulator {
    /// The accumulated expression text.
    buffer: String,
    /// Value of the most recent successful evaluation.
    last_result: f64,
    /// False while the number being typed already contains a `.`.
    allow_decimal: bool,
    /// Set after a successful evaluation; the next key starts fresh
    /// input instead of appending.
    pending_reset: bool,
}

impl Default for Accumulator {
    fn default() -> Self {
        Self::new()
    }
}

impl Accumulator {
    /// Creates an accumulator showing `0`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            buffer: "0".to_owned(),
            last_result: 0.0,
            allow_decimal: true,
            pending_reset: false,
        }
    }

    /// The current expression buffer.
    #[must_use]
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// The most recent evaluation result.
    #[must_use]
    pub const fn last_result(&self) -> f64 {
        self.last_result
    }

    /// True immediately after a successful evaluation.
    #[must_use]
    pub const fn pending_reset(&self) -> bool {
        self.pending_reset
    }

    /// Handles one key press and returns the display notifications it
    /// produced, in order. Rejected input (a second dot in a number, an
    /// operator after an operator) produces no notification at all.
    pub fn press(&mut self, key: Key) -> Vec<UiEvent> {
        let mut out = Vec::new();

        // A result is on screen: digit keys start a fresh expression,
        // every other key continues from the result. Clear overrides
        // the whole state anyway.
        if self.pending_reset && key != Key::Clear {
            self.buffer = match key {
                Key::Digit(_) | Key::Dot => String::new(),
                _ => buffer_string(self.last_result),
            };
            self.pending_reset = false;
            // the seeded result may itself carry a decimal point
            self.allow_decimal = !self.trailing_run_has_dot();
            out.push(UiEvent::ResultHidden);
        }

        match key {
            Key::Digit(d) => self.press_digit(d, &mut out),
            Key::Dot => self.press_dot(&mut out),
            Key::Op(op) => self.press_operator(op, &mut out),
            Key::Equals => self.press_equals(&mut out),
            Key::Clear => self.press_clear(&mut out),
            Key::Backspace => self.press_backspace(&mut out),
            Key::ToggleSign => self.press_sign(&mut out),
        }

        out
    }

    fn press_digit(&mut self, digit: u8, out: &mut Vec<UiEvent>) {
        let digit = digit.min(9);
        let ch = char::from(b'0' + digit);
        if self.buffer == "0" {
            // replace the bare leading zero
            self.buffer.clear();
        }
        self.buffer.push(ch);
        out.push(UiEvent::ExpressionChanged(self.buffer.clone()));
    }

    fn press_dot(&mut self, out: &mut Vec<UiEvent>) {
        if self.buffer.is_empty() || self.ends_with_operator() {
            self.buffer.push_str("0.");
            self.allow_decimal = false;
        } else if !self.allow_decimal {
            // second dot in the same number: reject silently
            return;
        } else {
            self.buffer.push('.');
            self.allow_decimal = false;
        }
        out.push(UiEvent::ExpressionChanged(self.buffer.clone()));
    }

    fn press_operator(&mut self, op: Operator, out: &mut Vec<UiEvent>) {
        if self.buffer.is_empty() || self.ends_with_operator() {
            // no operand yet, or would create consecutive operators
            return;
        }
        self.buffer.push(op.symbol());
        self.allow_decimal = true;
        out.push(UiEvent::ExpressionChanged(self.buffer.clone()));
    }

    fn press_clear(&mut self, out: &mut Vec<UiEvent>) {
        self.buffer = "0".to_owned();
        self.last_result = 0.0;
        self.allow_decimal = true;
        self.pending_reset = false;
        out.push(UiEvent::ResultHidden);
        out.push(UiEvent::ExpressionChanged(self.buffer.clone()));
    }

    fn press_backspace(&mut self, out: &mut Vec<UiEvent>) {
        self.buffer.pop();
        if self.buffer.is_empty() {
            self.buffer.push('0');
        }
        // removing an operator can re-expose a number that already has
        // a dot, so the gate is recomputed rather than latched
        self.allow_decimal = !self.trailing_run_has_dot();
        out.push(UiEvent::ExpressionChanged(self.buffer.clone()));
    }

    fn press_sign(&mut self, out: &mut Vec<UiEvent>) {
        let start = self.trailing_run_start();
        let run = &self.buffer[start..];
        if run.is_empty() || run == "0" || run == "0." {
            // nothing to negate, and no signed zero
            return;
        }

        if run.starts_with('-') {
            self.buffer.remove(start);
        } else {
            self.buffer.insert(start, '-');
        }
        out.push(UiEvent::ExpressionChanged(self.buffer.clone()));
    }

    fn press_equals(&mut self, out: &mut Vec<UiEvent>) {
        match engine::evaluate_str(&self.buffer) {
            Ok(value) => {
                self.last_result = value;
                // the buffer continues from the result's exact string
                // form; the display panel gets the formatted one
                self.buffer = buffer_string(value);
                self.pending_reset = true;
                out.push(UiEvent::ResultReady(format_result(value)));
            }
            Err(_) => {
                out.push(UiEvent::InvalidExpression);
                self.press_clear(out);
            }
        }
    }

    fn ends_with_operator(&self) -> bool {
        self.buffer.chars().last().is_some_and(Operator::is_symbol)
    }

    /// True when the trailing numeric run already contains a `.`.
    fn trailing_run_has_dot(&self) -> bool {
        self.buffer
            .chars()
            .rev()
            .take_while(|ch| ch.is_ascii_digit() || *ch == '.')
            .any(|ch| ch == '.')
    }

    /// Byte offset where the trailing numeric run begins.
    ///
    /// The run is the longest suffix of digits and dots; a `-` directly
    /// before it belongs to the run only when it is unary, i.e. at the
    /// start of the buffer or preceded by another operator.
    fn trailing_run_start(&self) -> usize {
        let bytes = self.buffer.as_bytes();
        let mut start = bytes.len();
        while start > 0 && (bytes[start - 1].is_ascii_digit() || bytes[start - 1] == b'.') {
            start -= 1;
        }

        let has_digits = start < bytes.len();
        if has_digits
            && start > 0
            && bytes[start - 1] == b'-'
            && (start == 1 || Operator::is_symbol(char::from(bytes[start - 2])))
        {
            start -= 1;
        }

        start
    }
}

/// Exact string form of a result, used to seed the next expression.
/// A negative zero would render as `-0`, which the keypad can never
/// type; normalize it away.
fn buffer_string(value: f64) -> String {
    if value == 0.0 {
        "0".to_owned()
    } else {
        value.to_string()
    }
}
