//! CLI argument definitions using clap

use clap::Parser;
use std::path::PathBuf;

/// Left-to-right calculator keypad
///
/// Keys are pressed in order: digits and the decimal separator build the
/// display, `+ - x /` commit an operand, `=` evaluates, `C` clears.
/// Operators are applied without precedence.
#[derive(Parser, Debug)]
#[command(name = "seqcalc")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Use the strict evaluation policy. Keypad input always yields a
    /// well-formed expression, so only division by zero shows the error text
    #[arg(long)]
    pub strict: bool,

    /// Decimal separator shown and accepted on the keypad
    #[arg(long, value_name = "CHAR")]
    pub separator: Option<char>,

    /// Text displayed when a calculation fails
    #[arg(long, value_name = "TEXT")]
    pub error_text: Option<String>,

    /// JSON keypad configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print the pending history as JSON after the keys run
    #[arg(long)]
    pub history: bool,

    /// Keys to press, e.g. `12 + 3,5 =`
    #[arg(required = true, value_name = "KEYS")]
    pub keys: Vec<String>,
}

impl Cli {
    /// Default log filter for the verbosity count
    #[must_use]
    pub const fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
