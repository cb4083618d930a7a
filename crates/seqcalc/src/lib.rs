//! Sequential Calculator
//!
//! A left-to-right arithmetic accumulator: operands and operators are
//! recorded in the order they are keyed in and folded without operator
//! precedence when the result is requested.
//!
//! # Example
//!
//! ```rust
//! use seqcalc::prelude::*;
//!
//! let mut acc = Accumulator::new();
//! acc.record_operand(2.0);
//! acc.record_operator(Operation::Multiply);
//! acc.record_operand(3.0);
//! acc.record_operator(Operation::Add);
//! acc.record_operand(4.0);
//! assert_eq!(acc.evaluate(), Ok(10.0));
//!
//! // The caller clears after every evaluation
//! acc.clear();
//! acc.record_operand(10.0);
//! acc.record_operator(Operation::Divide);
//! acc.record_operand(0.0);
//! assert_eq!(acc.evaluate_and_clear(), Err(CalcError::DivideByZero));
//! ```
//!
//! The [`keypad`] module drives the same accumulator from button presses:
//!
//! ```rust
//! use seqcalc::prelude::*;
//!
//! let mut keypad = Keypad::new();
//! keypad.press_all([
//!     KeypadAction::Digit(4),
//!     KeypadAction::Operator(Operation::Add),
//!     KeypadAction::Digit(5),
//!     KeypadAction::Equals,
//! ]);
//! assert_eq!(keypad.display(), "9");
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

pub mod config;
pub mod core;
pub mod keypad;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::{AccumulatorConfig, ConfigError, EvaluationPolicy, KeypadConfig};
    pub use crate::core::evaluator::Accumulator;
    pub use crate::core::history::{History, HistoryItem};
    pub use crate::core::{CalcError, CalcResult, Operation};
    pub use crate::keypad::{Keypad, KeypadAction};
}
