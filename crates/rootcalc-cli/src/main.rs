//! # rootcalc
//!
//! Command-line utility that prints the square root of a number.
//!
//! ## Usage
//! ```bash
//! rootcalc 4
//! # The square root of 4 is 2
//!
//! rootcalc --label 1 2
//! # 1 The square root of 2 is 1.41421
//!
//! rootcalc --label 1
//! # 1 Usage: rootcalc number      (exit code 1)
//! ```
//!
//! ## Config file
//! `--config rootcalc.json` loads settings, flags given on the command line
//! win over the file:
//! ```json
//! { "label": "2", "strict": false, "precision": 6 }
//! ```
//!
//! ## Exit codes
//! - 0: result printed
//! - 1: number missing (usage line on stdout), invalid number in strict
//!   mode, or unreadable config file

mod cli;
mod config;
mod logging;

use anyhow::{Context, Result};
use clap::Parser;
use rootcalc_core::{Invocation, Status};
use std::ffi::OsString;
use std::io::{self, Write};
use std::process::ExitCode;

use cli::Args;

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.verbose);

    match run(args) {
        Ok(status) => ExitCode::from(status.code()),
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<Status> {
    let settings =
        config::load_settings(args.config.as_deref())?.with_overrides(args.label, args.strict);

    let invocation = Invocation {
        program: program_name(),
        number: args.number.map(lossy),
        extra: args.extra.into_iter().map(lossy).collect(),
    };
    let outcome = rootcalc_core::run(&invocation, &settings);

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(outcome.stdout.as_bytes())
        .context("Failed to write to stdout")?;
    stdout.flush().context("Failed to flush stdout")?;

    Ok(outcome.status)
}

/// argv[0] as the process received it.
fn program_name() -> String {
    std::env::args_os()
        .next()
        .map(lossy)
        .unwrap_or_else(|| "rootcalc".to_string())
}

/// Invalid UTF-8 becomes U+FFFD, which `atof` parsing reads as no number.
fn lossy(arg: OsString) -> String {
    arg.to_string_lossy().into_owned()
}
