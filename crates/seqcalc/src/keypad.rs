//! Headless keypad driver
//!
//! Turns button presses into accumulator calls the way a calculator screen
//! does: digits build up the display text, an operator key commits the
//! display as an operand, `=` commits the last operand and shows the
//! result, `C` starts over.
//!
//! The display is plain text with a configurable decimal separator. No
//! grouping separators are produced or accepted.

use crate::config::KeypadConfig;
use crate::core::evaluator::Accumulator;
use crate::core::Operation;

/// Actions that keypad buttons can perform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeypadAction {
    /// Insert a digit (0-9)
    Digit(u8),
    /// Insert the decimal separator
    Decimal,
    /// Commit the display and record an operator
    Operator(Operation),
    /// Commit the display and evaluate
    Equals,
    /// Reset the display and the pending history
    Clear,
}

impl KeypadAction {
    /// Title of the clear button
    pub const CLEAR_LABEL: &'static str = "C";

    /// Lower-case alias accepted for the clear button
    pub const CLEAR_ALIAS: &'static str = "c";

    /// Title of the equals button
    pub const EQUALS_LABEL: &'static str = "=";

    /// Returns true if `label` is the title of an operator, equals or clear button
    #[must_use]
    pub fn is_command_label(label: &str) -> bool {
        matches!(
            label,
            Self::EQUALS_LABEL | Self::CLEAR_LABEL | Self::CLEAR_ALIAS
        ) || Operation::from_symbol(label).is_some()
    }

    /// Returns the button title for this action
    #[must_use]
    pub fn label(&self, separator: char) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Decimal => separator.to_string(),
            Self::Operator(op) => op.symbol().to_string(),
            Self::Equals => Self::EQUALS_LABEL.to_string(),
            Self::Clear => Self::CLEAR_LABEL.to_string(),
        }
    }

    /// Maps a button title back to an action
    ///
    /// `c` is accepted for clear alongside `C`. The separator is only
    /// recognised when it is not already a command title.
    #[must_use]
    pub fn from_label(label: &str, separator: char) -> Option<Self> {
        let mut chars = label.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if let Some(d) = c.to_digit(10) {
                return Some(Self::Digit(d as u8));
            }
            if c == separator && !Self::is_command_label(label) {
                return Some(Self::Decimal);
            }
        }
        match label {
            Self::EQUALS_LABEL => Some(Self::Equals),
            Self::CLEAR_LABEL | Self::CLEAR_ALIAS => Some(Self::Clear),
            _ => Operation::from_symbol(label).map(Self::Operator),
        }
    }
}

/// Calculator screen state without a screen
#[derive(Debug, Clone)]
pub struct Keypad {
    display: String,
    accumulator: Accumulator,
    config: KeypadConfig,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Text shown after start-up and after clear
    pub const INITIAL_DISPLAY: &'static str = "0";

    /// Creates a keypad with the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(KeypadConfig::default())
    }

    /// Creates a keypad with a custom configuration
    #[must_use]
    pub fn with_config(config: KeypadConfig) -> Self {
        Self {
            display: Self::INITIAL_DISPLAY.to_string(),
            accumulator: Accumulator::with_config(config.accumulator),
            config,
        }
    }

    /// Returns the current display text
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Returns the accumulator holding the pending expression
    #[must_use]
    pub const fn accumulator(&self) -> &Accumulator {
        &self.accumulator
    }

    /// Returns the configuration
    #[must_use]
    pub const fn config(&self) -> &KeypadConfig {
        &self.config
    }

    /// Handles one button press
    pub fn press(&mut self, action: KeypadAction) {
        tracing::trace!(?action, display = %self.display, "press");
        match action {
            KeypadAction::Digit(d) => self.press_digit(d),
            KeypadAction::Decimal => self.press_decimal(),
            KeypadAction::Operator(op) => self.press_operator(op),
            KeypadAction::Equals => self.press_equals(),
            KeypadAction::Clear => self.press_clear(),
        }
    }

    /// Handles a sequence of button presses in order
    pub fn press_all(&mut self, actions: impl IntoIterator<Item = KeypadAction>) {
        for action in actions {
            self.press(action);
        }
    }

    fn press_digit(&mut self, digit: u8) {
        let Some(c) = char::from_digit(u32::from(digit), 10) else {
            tracing::debug!(digit, "ignoring digit out of range");
            return;
        };
        if self.display == Self::INITIAL_DISPLAY {
            self.display.clear();
        }
        self.display.push(c);
    }

    fn press_decimal(&mut self) {
        let sep = self.config.decimal_separator;
        // A lone "0" cannot take a separator either; only a typed digit can.
        if self.display.contains(sep)
            || self.display.is_empty()
            || self.display == Self::INITIAL_DISPLAY
        {
            tracing::debug!(display = %self.display, "ignoring decimal separator");
            return;
        }
        self.display.push(sep);
    }

    fn press_operator(&mut self, op: Operation) {
        let Some(value) = self.parse_display() else {
            tracing::debug!(display = %self.display, "ignoring operator, display is not a number");
            return;
        };
        self.accumulator.record_operand(value);
        self.accumulator.record_operator(op);
        self.display.clear();
    }

    fn press_equals(&mut self) {
        let Some(value) = self.parse_display() else {
            tracing::debug!(display = %self.display, "ignoring equals, display is not a number");
            return;
        };
        self.accumulator.record_operand(value);

        let outcome = self.accumulator.evaluate_and_clear();
        self.display = match outcome {
            Ok(result) => self
                .format_number(result)
                .unwrap_or_else(|| self.config.error_text.clone()),
            Err(err) => {
                tracing::info!(error = %err, "calculation failed");
                self.config.error_text.clone()
            }
        };
    }

    fn press_clear(&mut self) {
        self.accumulator.clear();
        self.display = Self::INITIAL_DISPLAY.to_string();
    }

    fn parse_display(&self) -> Option<f64> {
        parse_number(&self.display, self.config.decimal_separator)
    }

    fn format_number(&self, value: f64) -> Option<String> {
        format_number(value, self.config.decimal_separator)
    }
}

/// Parses display text using `separator` as the decimal point
///
/// Returns `None` for empty, non-numeric or non-finite text.
#[must_use]
pub fn parse_number(text: &str, separator: char) -> Option<f64> {
    if text.is_empty() {
        return None;
    }
    let normalized: String = text
        .chars()
        .map(|c| if c == separator { '.' } else { c })
        .collect();
    normalized.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Formats a result for display using `separator` as the decimal point
///
/// Integral values have no fraction, `-0` is shown as `0`, and non-finite
/// values have no display form.
#[must_use]
pub fn format_number(value: f64, separator: char) -> Option<String> {
    if !value.is_finite() {
        return None;
    }
    let value = if value == 0.0 { 0.0 } else { value };
    let text = value.to_string();
    if separator == '.' {
        Some(text)
    } else {
        Some(text.replace('.', &separator.to_string()))
    }
}
