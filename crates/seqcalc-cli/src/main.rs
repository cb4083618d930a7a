//! Seqcalc CLI: press calculator keys from the command line
//!
//! ## Usage
//!
//! ```bash
//! seqcalc 4 + 5 =                 # 9
//! seqcalc 2 x 3 + 4 =             # 10, no precedence
//! seqcalc --separator . 1.5 x 2 = # 3
//! seqcalc --history 2 x 3         # pending expression as JSON
//! ```

use clap::Parser;
use seqcalc_cli::{runner, Cli, CliResult};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> CliResult<()> {
    for line in runner::run(cli)? {
        println!("{line}");
    }
    Ok(())
}

fn init_tracing(cli: &Cli) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .init();
}
