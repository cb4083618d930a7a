//! Expression accumulator and left-to-right evaluator
//!
//! Operands and operators are recorded in entry order and reduced without
//! precedence: `2 x 3 + 4` is `(2 x 3) + 4`, and `2 + 3 x 4` is `(2 + 3) x 4`.

use crate::config::{AccumulatorConfig, EvaluationPolicy};
use crate::core::history::{History, HistoryItem};
use crate::core::{CalcError, CalcResult, Operation};

/// Records operands and operators and folds them on demand
///
/// The accumulator does not enforce the number/operation alternation while
/// recording. Shape problems only matter when [`Accumulator::evaluate`]
/// runs, and how they are handled depends on the [`EvaluationPolicy`].
#[derive(Debug, Clone, Default)]
pub struct Accumulator {
    history: History,
    config: AccumulatorConfig,
}

impl Accumulator {
    /// Creates an empty accumulator with the lenient policy
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty accumulator with the given configuration
    #[must_use]
    pub fn with_config(config: AccumulatorConfig) -> Self {
        Self {
            history: History::new(),
            config,
        }
    }

    /// Returns the configuration
    #[must_use]
    pub const fn config(&self) -> &AccumulatorConfig {
        &self.config
    }

    /// Returns the pending history
    #[must_use]
    pub const fn history(&self) -> &History {
        &self.history
    }

    /// Returns the number of recorded items
    #[must_use]
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// Returns true if nothing is recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Appends an operand
    pub fn record_operand(&mut self, value: f64) {
        tracing::trace!(value, "record operand");
        self.history.push(HistoryItem::Number(value));
    }

    /// Appends an operator
    pub fn record_operator(&mut self, op: Operation) {
        tracing::trace!(op = op.symbol(), "record operator");
        self.history.push(HistoryItem::Operation(op));
    }

    /// Empties the history
    pub fn clear(&mut self) {
        self.history.clear();
    }

    /// Folds the history left to right
    ///
    /// Under the lenient policy an empty history, or one that does not start
    /// with a number, evaluates to `0.0`, and a broken (operation, number)
    /// pair ends the fold with the partial result. Under the strict policy
    /// both cases are errors. Division by zero stops the fold immediately
    /// in either mode.
    ///
    /// The history is left untouched; call [`Accumulator::clear`] afterwards
    /// or use [`Accumulator::evaluate_and_clear`].
    pub fn evaluate(&self) -> CalcResult<f64> {
        let outcome = fold(self.history.as_slice(), self.config.policy);
        match &outcome {
            Ok(value) => tracing::debug!(
                expression = %self.history,
                result = value,
                "evaluated"
            ),
            Err(err) => tracing::debug!(
                expression = %self.history,
                error = %err,
                "evaluation failed"
            ),
        }
        outcome
    }

    /// Evaluates, then clears the history whatever the outcome
    pub fn evaluate_and_clear(&mut self) -> CalcResult<f64> {
        let outcome = self.evaluate();
        self.clear();
        outcome
    }
}

fn fold(items: &[HistoryItem], policy: EvaluationPolicy) -> CalcResult<f64> {
    let strict = policy.is_strict();

    let (mut result, rest) = match items.split_first() {
        Some((HistoryItem::Number(first), rest)) => (*first, rest),
        None if strict => return Err(CalcError::EmptyHistory),
        Some(_) if strict => return Err(CalcError::MalformedHistory { index: 0 }),
        _ => return Ok(0.0),
    };

    for (pair, chunk) in rest.chunks(2).enumerate() {
        let index = 1 + pair * 2;
        let offending = match *chunk {
            [HistoryItem::Operation(op), HistoryItem::Number(rhs)] => {
                result = op.apply(result, rhs)?;
                tracing::trace!(step = pair, op = op.symbol(), rhs, result, "fold step");
                continue;
            }
            [HistoryItem::Operation(_), _] => index + 1,
            _ => index,
        };

        if strict {
            return Err(CalcError::MalformedHistory { index: offending });
        }
        tracing::debug!(index = offending, result, "history truncated, partial result");
        break;
    }

    Ok(result)
}
