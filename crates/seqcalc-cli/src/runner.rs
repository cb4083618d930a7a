//! Turns command-line keys into keypad presses

use crate::commands::Cli;
use crate::error::{CliError, CliResult};
use seqcalc::config::{EvaluationPolicy, KeypadConfig};
use seqcalc::keypad::{Keypad, KeypadAction};

/// Builds the keypad configuration from an optional file and flag overrides
pub fn build_config(cli: &Cli) -> CliResult<KeypadConfig> {
    let mut config = match &cli.config {
        Some(path) => KeypadConfig::from_file(path)?,
        None => KeypadConfig::default(),
    };

    if let Some(separator) = cli.separator {
        config = config.with_decimal_separator(separator);
    }
    if let Some(text) = &cli.error_text {
        config = config.with_error_text(text.clone());
    }
    if cli.strict {
        config = config.with_policy(EvaluationPolicy::Strict);
    }

    config.validate()?;
    Ok(config)
}

/// Splits key arguments into button presses
///
/// Each argument may hold several whitespace-separated tokens. A token is
/// either a button title or a run of digits and separators, pressed one
/// character at a time.
pub fn tokenize(keys: &[String], separator: char) -> CliResult<Vec<KeypadAction>> {
    let mut actions = Vec::new();
    for token in keys.iter().flat_map(|arg| arg.split_whitespace()) {
        if let Some(action) = KeypadAction::from_label(token, separator) {
            actions.push(action);
            continue;
        }

        let presses: Option<Vec<KeypadAction>> = token
            .chars()
            .map(|c| {
                let mut buf = [0u8; 4];
                KeypadAction::from_label(c.encode_utf8(&mut buf), separator)
                    .filter(|a| matches!(a, KeypadAction::Digit(_) | KeypadAction::Decimal))
            })
            .collect();

        match presses {
            Some(presses) => actions.extend(presses),
            None => {
                return Err(CliError::invalid_argument(format!(
                    "unknown key `{token}`"
                )))
            }
        }
    }
    Ok(actions)
}

/// Runs the keys and returns the lines to print
pub fn run(cli: &Cli) -> CliResult<Vec<String>> {
    let config = build_config(cli)?;
    let actions = tokenize(&cli.keys, config.decimal_separator)?;
    tracing::info!(presses = actions.len(), "running keys");

    let mut keypad = Keypad::with_config(config);
    keypad.press_all(actions);

    let mut lines = vec![keypad.display().to_string()];
    if cli.history {
        lines.push(keypad.accumulator().history().to_json()?);
    }
    Ok(lines)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use clap::Parser;
    use seqcalc::core::Operation;
    use std::io::Write;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("seqcalc").chain(args.iter().copied())).unwrap()
    }

    fn strings(keys: &[&str]) -> Vec<String> {
        keys.iter().map(|k| (*k).to_string()).collect()
    }

    #[test]
    fn test_tokenize_titles() {
        let actions = tokenize(&strings(&["4", "+", "5", "="]), ',').unwrap();
        assert_eq!(
            actions,
            vec![
                KeypadAction::Digit(4),
                KeypadAction::Operator(Operation::Add),
                KeypadAction::Digit(5),
                KeypadAction::Equals,
            ]
        );
    }

    #[test]
    fn test_tokenize_multi_digit_numbers() {
        let actions = tokenize(&strings(&["12,5"]), ',').unwrap();
        assert_eq!(
            actions,
            vec![
                KeypadAction::Digit(1),
                KeypadAction::Digit(2),
                KeypadAction::Decimal,
                KeypadAction::Digit(5),
            ]
        );
    }

    #[test]
    fn test_tokenize_whitespace_inside_argument() {
        let actions = tokenize(&strings(&["2 x 3", "="]), ',').unwrap();
        assert_eq!(actions.len(), 4);
        assert_eq!(actions[1], KeypadAction::Operator(Operation::Multiply));
    }

    #[test]
    fn test_tokenize_unknown_key() {
        let err = tokenize(&strings(&["4", "%", "2"]), ',').unwrap_err();
        assert!(err.to_string().contains("unknown key `%`"));
    }

    #[test]
    fn test_tokenize_rejects_mixed_token() {
        assert!(tokenize(&strings(&["4+5"]), ',').is_err());
        assert!(tokenize(&strings(&["1.5"]), ',').is_err());
    }

    #[test]
    fn test_run_addition() {
        assert_eq!(run(&cli(&["4", "+", "5", "="])).unwrap(), vec!["9"]);
    }

    #[test]
    fn test_run_divide_by_zero() {
        assert_eq!(run(&cli(&["10", "/", "0", "="])).unwrap(), vec!["Error"]);
    }

    #[test]
    fn test_run_with_separator_override() {
        let lines = run(&cli(&["--separator", ".", "1.5", "+", "1", "="])).unwrap();
        assert_eq!(lines, vec!["2.5"]);
    }

    #[test]
    fn test_run_prints_pending_history() {
        let lines = run(&cli(&["--history", "2", "x", "3"])).unwrap();
        assert_eq!(lines[0], "3");
        assert!(lines[1].contains(r#""value":"multiply""#));
    }

    #[test]
    fn test_build_config_from_file_with_overrides() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"decimal_separator":".","error_text":"Oops"}}"#).unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let config = build_config(&cli(&["--config", path.as_str(), "--strict", "1"])).unwrap();
        assert_eq!(config.decimal_separator, '.');
        assert_eq!(config.error_text, "Oops");
        assert!(config.accumulator.policy.is_strict());

        let config = build_config(&cli(&["--config", path.as_str(), "--error-text", "E", "1"])).unwrap();
        assert_eq!(config.error_text, "E");
    }

    #[test]
    fn test_build_config_rejects_bad_separator() {
        let err = build_config(&cli(&["--separator", "7", "1"])).unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
    }

    #[test]
    fn test_build_config_rejects_key_title_separator() {
        for sep in ["x", "=", "/", "C"] {
            let err = build_config(&cli(&["--separator", sep, "1"])).unwrap_err();
            assert!(matches!(err, CliError::Config(_)), "{sep}");
        }
    }

    #[test]
    fn test_run_strict_matches_lenient_for_keypad_input() {
        for keys in [&["5", "+", "="][..], &["5", "+"], &["C"], &["10", "/", "0", "="]] {
            let lenient = run(&cli(keys)).unwrap();
            let mut strict_args = vec!["--strict"];
            strict_args.extend_from_slice(keys);
            assert_eq!(run(&cli(&strict_args)).unwrap(), lenient, "{keys:?}");
        }
    }
}
