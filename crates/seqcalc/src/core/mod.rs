//! Core calculator module
//!
//! Holds the error taxonomy shared by the operation table, the history and
//! the accumulator.

pub mod evaluator;
pub mod history;
mod operations;

pub use operations::Operation;

use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Calculator error types
///
/// Only `DivideByZero` can surface under the lenient evaluation policy.
/// The remaining variants are produced by the strict policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Division by exactly zero attempted
    #[error("Division by zero")]
    DivideByZero,

    /// Evaluation requested with nothing recorded
    #[error("Empty history")]
    EmptyHistory,

    /// The history does not alternate number, operation, number
    #[error("Malformed history at item {index}")]
    MalformedHistory {
        /// Index of the first item that breaks the alternation
        index: usize,
    },
}

impl CalcError {
    /// Returns true for errors caused by the history shape rather than arithmetic
    #[must_use]
    pub const fn is_shape_error(&self) -> bool {
        matches!(self, Self::EmptyHistory | Self::MalformedHistory { .. })
    }
}
