// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text format verdicts.

use std::io::{self, Write};

use termcolor::{NoColor, WriteColor};

use crate::color::scheme;
use crate::matcher::MatchReport;

use super::{Outcome, ReportFormatter, plural};

/// Text format report formatter.
pub struct TextFormatter;

impl ReportFormatter for TextFormatter {
    fn format(&self, outcome: Outcome<'_>) -> anyhow::Result<String> {
        let mut buf = NoColor::new(Vec::new());
        self.write_to(&mut buf, outcome)?;
        Ok(String::from_utf8(buf.into_inner())?)
    }
}

impl TextFormatter {
    /// Write the verdict line, then failure details if the check failed.
    pub fn write_to(&self, w: &mut dyn WriteColor, outcome: Outcome<'_>) -> io::Result<()> {
        let report = outcome.report;
        let (label, spec) = if report.passed() {
            ("PASS", scheme::pass())
        } else {
            ("FAIL", scheme::fail())
        };
        w.set_color(&spec)?;
        write!(w, "{label}")?;
        w.reset()?;
        writeln!(w, ": {}", summary(outcome))?;

        if !report.passed() {
            write_failure(w, report)?;
        }
        Ok(())
    }
}

fn summary(outcome: Outcome<'_>) -> String {
    let report = outcome.report;
    let mut s = format!(
        "{} of {} required patterns matched in {}",
        report.matched,
        report.required_total,
        plural(report.lines_scanned, "line")
    );
    if !report.violations.is_empty() {
        s.push_str(", ");
        s.push_str(&plural(report.violations.len(), "exclusion violation"));
    }
    if let Some(code) = outcome.exit_code {
        s.push_str(&format!(" (exit code {code})"));
    }
    s
}

fn write_failure(w: &mut dyn WriteColor, report: &MatchReport) -> io::Result<()> {
    match &report.pending {
        Some(pending) if !report.all_required_matched() => {
            write!(w, "required pattern not found: ")?;
            w.set_color(&scheme::pattern())?;
            write!(w, "{pending}")?;
            w.reset()?;
            writeln!(w, " ({} of {} matched)", report.matched, report.required_total)?;
        }
        _ => writeln!(w, "all {} required patterns matched", report.required_total)?,
    }

    if !report.violations.is_empty() {
        writeln!(
            w,
            "excluded patterns found in {}:",
            plural(report.violations.len(), "line")
        )?;
        for v in &report.violations {
            write!(w, "  ")?;
            w.set_color(&scheme::line_number())?;
            write!(w, "{}", v.line_number)?;
            w.reset()?;
            write!(w, ": {}  [", v.line)?;
            w.set_color(&scheme::pattern())?;
            write!(w, "{}", v.pattern)?;
            w.reset()?;
            writeln!(w, "]")?;
        }
    }
    Ok(())
}

/// Plain-text diagnostic for a failing report: the pending required pattern
/// (or that all matched) followed by every violating line.
pub fn render_failure(report: &MatchReport) -> String {
    let mut buf = NoColor::new(Vec::new());
    // Writes into a Vec cannot fail.
    let _ = write_failure(&mut buf, report);
    String::from_utf8_lossy(&buf.into_inner()).into_owned()
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
