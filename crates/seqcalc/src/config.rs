//! Accumulator and keypad configuration

use crate::keypad::KeypadAction;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors raised while loading a configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration text is not valid JSON for this schema
    #[error("Invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// A field holds a value the keypad cannot work with
    #[error("Invalid configuration: {message}")]
    Invalid {
        /// Error message
        message: String,
    },
}

impl ConfigError {
    /// Create an invalid-value error
    #[must_use]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid {
            message: message.into(),
        }
    }
}

/// How the accumulator treats empty or malformed histories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EvaluationPolicy {
    /// Empty history yields 0, malformed trailing data yields the partial fold
    #[default]
    Lenient,
    /// Empty or malformed histories are reported as errors
    Strict,
}

impl EvaluationPolicy {
    /// Check if strict mode
    #[must_use]
    pub const fn is_strict(self) -> bool {
        matches!(self, Self::Strict)
    }
}

/// Accumulator configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AccumulatorConfig {
    /// Fallback policy for empty or malformed histories
    pub policy: EvaluationPolicy,
}

impl AccumulatorConfig {
    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set evaluation policy
    #[must_use]
    pub const fn with_policy(mut self, policy: EvaluationPolicy) -> Self {
        self.policy = policy;
        self
    }
}

/// Keypad configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeypadConfig {
    /// Character shown and accepted as the decimal separator
    pub decimal_separator: char,
    /// Text displayed when evaluation fails
    pub error_text: String,
    /// Settings for the owned accumulator
    pub accumulator: AccumulatorConfig,
}

impl Default for KeypadConfig {
    fn default() -> Self {
        Self {
            decimal_separator: Self::DEFAULT_SEPARATOR,
            error_text: Self::DEFAULT_ERROR_TEXT.to_string(),
            accumulator: AccumulatorConfig::default(),
        }
    }
}

impl KeypadConfig {
    /// Default decimal separator
    pub const DEFAULT_SEPARATOR: char = ',';

    /// Default error display text
    pub const DEFAULT_ERROR_TEXT: &'static str = "Error";

    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set decimal separator
    #[must_use]
    pub const fn with_decimal_separator(mut self, separator: char) -> Self {
        self.decimal_separator = separator;
        self
    }

    /// Set error display text
    #[must_use]
    pub fn with_error_text(mut self, text: impl Into<String>) -> Self {
        self.error_text = text.into();
        self
    }

    /// Set evaluation policy of the owned accumulator
    #[must_use]
    pub const fn with_policy(mut self, policy: EvaluationPolicy) -> Self {
        self.accumulator.policy = policy;
        self
    }

    /// Checks that the separator cannot be confused with digits, signs or key titles
    pub fn validate(&self) -> Result<(), ConfigError> {
        let sep = self.decimal_separator;
        let mut buf = [0u8; 4];
        if sep.is_ascii_digit()
            || sep.is_whitespace()
            || matches!(sep, '+' | '-')
            || KeypadAction::is_command_label(sep.encode_utf8(&mut buf))
        {
            return Err(ConfigError::invalid(format!(
                "decimal separator {sep:?} is not allowed"
            )));
        }
        Ok(())
    }

    /// Parses and validates a JSON configuration
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a JSON configuration file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "loading keypad config");
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }
}
