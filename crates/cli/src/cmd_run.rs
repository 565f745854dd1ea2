// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `outmatch run` command implementation.
//!
//! Launches the build in the working directory, verifies its output, and
//! exits with the build's own exit code when verification passes.

use std::io::Write;

use outmatch::cli::{Cli, RunArgs};
use outmatch::config;
use outmatch::error::{Error, ExitCode};
use outmatch::process::{self, run_and_test};
use outmatch::report::{self, Outcome};

/// Run the `outmatch run` command.
pub fn run(cli: &Cli, args: &RunArgs) -> anyhow::Result<std::process::ExitCode> {
    let working_dir = process::resolve_dir(args.dir.clone())?;
    let config = config::resolve(cli.config.as_deref(), &working_dir)?;

    let mut echo = args.output.echo_sink();
    let result = run_and_test(&config, &args.command, &working_dir, &mut *echo);
    echo.flush()?;
    drop(echo);

    let format = args.output.output;
    let color = args.output.color_choice();
    match result {
        Ok(outcome) => {
            report::print(
                format,
                color,
                Outcome {
                    report: &outcome.report,
                    exit_code: Some(outcome.exit_code),
                },
            )?;
            Ok(build_exit_code(outcome.exit_code))
        }
        Err(Error::Verification(failed)) => {
            report::print(
                format,
                color,
                Outcome {
                    report: &failed,
                    exit_code: None,
                },
            )?;
            Ok(ExitCode::CheckFailed.into())
        }
        Err(e) => Err(e.into()),
    }
}

/// Pass the build's exit code through; codes outside 0..=255 become an
/// internal error.
fn build_exit_code(code: i32) -> std::process::ExitCode {
    match u8::try_from(code) {
        Ok(code) => std::process::ExitCode::from(code),
        Err(_) => ExitCode::InternalError.into(),
    }
}
