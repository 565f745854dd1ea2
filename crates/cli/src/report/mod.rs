// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Verdict output for match reports.
//!
//! Text output is for humans watching a build; JSON output is for tools
//! driving `outmatch` from another harness.

mod json;
pub mod text;

use std::io::Write;

use termcolor::{ColorChoice, StandardStream};

use crate::cli::OutputFormat;
use crate::matcher::MatchReport;

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// A finished verification: the report plus the build's exit code when a
/// build was launched.
#[derive(Debug, Clone, Copy)]
pub struct Outcome<'a> {
    pub report: &'a MatchReport,
    pub exit_code: Option<i32>,
}

/// Trait for rendering an outcome into an output format.
pub trait ReportFormatter {
    fn format(&self, outcome: Outcome<'_>) -> anyhow::Result<String>;
}

/// Format an outcome for the requested output format.
pub fn format_report(format: OutputFormat, outcome: Outcome<'_>) -> anyhow::Result<String> {
    let formatter: Box<dyn ReportFormatter> = match format {
        OutputFormat::Text => Box::new(TextFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    };
    formatter.format(outcome)
}

/// Print an outcome to stdout, colored when `color` allows.
pub fn print(format: OutputFormat, color: ColorChoice, outcome: Outcome<'_>) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            let mut stdout = StandardStream::stdout(color);
            TextFormatter.write_to(&mut stdout, outcome)?;
            stdout.flush()?;
        }
        OutputFormat::Json => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", JsonFormatter.format(outcome)?)?;
        }
    }
    Ok(())
}

/// "1 line" / "3 lines".
pub fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
