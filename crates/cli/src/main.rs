// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use clap::Parser;
use tracing_subscriber::EnvFilter;

use outmatch::cli::{Cli, Command};
use outmatch::error::ExitCode;

mod cmd_check;
mod cmd_run;

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match &cli.command {
        Command::Run(args) => cmd_run::run(&cli, args),
        Command::Check(args) => cmd_check::run(&cli, args),
    };

    match result {
        Ok(code) => code,
        Err(err) => {
            eprintln!("outmatch: {err:#}");
            err.downcast_ref::<outmatch::Error>()
                .map(ExitCode::for_error)
                .unwrap_or(ExitCode::InternalError)
                .into()
        }
    }
}

/// Log to stderr. `OUTMATCH_LOG` takes a tracing filter directive and wins
/// over `--verbose`.
fn init_logging(verbose: bool) {
    let fallback = if verbose { "outmatch=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env("OUTMATCH_LOG").unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
