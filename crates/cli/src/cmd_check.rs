// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `outmatch check` command implementation.
//!
//! Verifies an existing log file, or stdin, against the pattern files.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};

use anyhow::Context;

use outmatch::cli::{CheckArgs, Cli};
use outmatch::config;
use outmatch::error::ExitCode;
use outmatch::matcher::check_output;
use outmatch::pattern::PatternSequence;
use outmatch::report::{self, Outcome};

/// Run the `outmatch check` command.
pub fn run(cli: &Cli, args: &CheckArgs) -> anyhow::Result<std::process::ExitCode> {
    let cwd = std::env::current_dir()?;
    let config = config::resolve(cli.config.as_deref(), &cwd)?;

    let required_path = cwd.join(args.required.as_ref().unwrap_or(&config.files.required));
    let required = PatternSequence::load(&required_path)?;

    // An explicit --excludes must exist; the configured default is optional.
    let excluded = match &args.excludes {
        Some(path) => PatternSequence::load(&cwd.join(path))?,
        None => PatternSequence::load_optional(Some(&cwd.join(&config.files.excludes)))?,
    };

    let input: Box<dyn BufRead> = match &args.log {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open log {}", path.display()))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(io::stdin().lock()),
    };

    let mut echo = args.output.echo_sink();
    let report = check_output(&required, input, &excluded, &mut *echo)?;
    echo.flush()?;
    drop(echo);

    report::print(
        args.output.output,
        args.output.color_choice(),
        Outcome {
            report: &report,
            exit_code: None,
        },
    )?;

    Ok(if report.passed() {
        ExitCode::Success.into()
    } else {
        ExitCode::CheckFailed.into()
    })
}
