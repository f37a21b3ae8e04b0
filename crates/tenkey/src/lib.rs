//! tenkey — keypad-driven expression accumulator and evaluator.
//!
//! The core of a calculator: an [`Accumulator`] state machine consumes
//! keypad presses, maintains the expression buffer under simple
//! syntactic constraints (one decimal point per number, no consecutive
//! operators), and on demand evaluates the buffer with a small
//! recursive-descent engine. The accumulator talks to its frontend
//! purely through [`UiEvent`] notifications; it performs no I/O.
//!
//! # Example
//!
//! ```rust
//! use tenkey::prelude::*;
//!
//! let mut acc = Accumulator::new();
//! for label in "2+3*4".chars() {
//!     acc.press(Key::from_label(label).unwrap());
//! }
//! let events = acc.press(Key::Equals);
//! assert_eq!(events, vec![UiEvent::ResultReady("14".into())]);
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod accumulator;
pub mod engine;
pub mod format;
pub mod history;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::accumulator::{Accumulator, Key, UiEvent};
    pub use crate::engine::{evaluate, evaluate_str, EvalError, EvalResult, Expr, Operator};
    pub use crate::format::format_result;
    pub use crate::history::{History, HistoryEntry};
}
