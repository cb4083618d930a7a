//! Seqcalc CLI Library
//!
//! Command-line keypad over the seqcalc accumulator.

#![warn(missing_docs)]

mod commands;
mod error;
pub mod runner;

pub use commands::Cli;
pub use error::{CliError, CliResult};
