// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Sequential and exclusion matching over line-oriented output.
//!
//! Required patterns are matched strictly in order: the cursor waits on one
//! pattern at a time and advances once per match, never backwards. Excluded
//! patterns are checked against every line for the whole stream, independent
//! of the cursor, so one run reports every problem.

use std::io::{BufRead, Write};

use serde::Serialize;

use crate::error::{Error, Result};
use crate::pattern::PatternSequence;

/// An output line that matched an excluded pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// 1-based output line number.
    pub line_number: usize,
    /// The offending output line.
    pub line: String,
    /// Source text of the excluded pattern that matched.
    pub pattern: String,
}

/// Outcome of scanning one output stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchReport {
    /// Number of required patterns.
    pub required_total: usize,
    /// Required patterns satisfied in order.
    pub matched: usize,
    /// The required pattern still awaited at end of stream.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending: Option<String>,
    /// Lines that matched excluded patterns, in output order.
    pub violations: Vec<Violation>,
    /// Total lines consumed.
    pub lines_scanned: usize,
}

impl MatchReport {
    /// All required patterns matched in order.
    pub fn all_required_matched(&self) -> bool {
        self.matched == self.required_total
    }

    pub fn passed(&self) -> bool {
        self.all_required_matched() && self.violations.is_empty()
    }

    /// Turn a failing report into [`Error::Verification`].
    pub fn verify(self) -> Result<Self> {
        if self.passed() {
            Ok(self)
        } else {
            Err(Error::Verification(Box::new(self)))
        }
    }
}

/// Incremental matcher state for one output stream.
pub struct SequenceMatcher<'a> {
    required: &'a PatternSequence,
    excluded: &'a PatternSequence,
    cursor: usize,
    matched: usize,
    lines_scanned: usize,
    violations: Vec<Violation>,
}

impl<'a> SequenceMatcher<'a> {
    /// Start a scan. `required` must hold at least one pattern.
    pub fn new(required: &'a PatternSequence, excluded: &'a PatternSequence) -> Result<Self> {
        if required.is_empty() {
            return Err(Error::NoRequiredPatterns {
                origin: required.origin().to_string(),
            });
        }
        Ok(Self {
            required,
            excluded,
            cursor: 0,
            matched: 0,
            lines_scanned: 0,
            violations: Vec::new(),
        })
    }

    /// Consume one output line.
    pub fn feed(&mut self, line: &str) {
        self.lines_scanned += 1;

        if let Some(current) = self.required.get(self.cursor)
            && current.is_found_in(line)
        {
            tracing::trace!(
                line_number = self.lines_scanned,
                pattern = current.as_str(),
                "required pattern matched"
            );
            self.matched += 1;
            self.cursor += 1;
        }

        for pattern in self.excluded {
            if pattern.is_found_in(line) {
                self.violations.push(Violation {
                    line_number: self.lines_scanned,
                    line: line.to_string(),
                    pattern: pattern.as_str().to_string(),
                });
            }
        }
    }

    /// Index of the next awaited required pattern.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn finish(self) -> MatchReport {
        MatchReport {
            required_total: self.required.len(),
            matched: self.matched,
            pending: self.required.get(self.cursor).map(|p| p.as_str().to_string()),
            violations: self.violations,
            lines_scanned: self.lines_scanned,
        }
    }
}

/// Scan `output` to end-of-stream, echoing each line to `echo`.
///
/// Lines are decoded as lossy UTF-8 with `\n` or `\r\n` stripped. The
/// returned report may be failing; call [`MatchReport::verify`] to turn a
/// failure into an error.
pub fn check_output<R: BufRead>(
    required: &PatternSequence,
    mut output: R,
    excluded: &PatternSequence,
    echo: &mut dyn Write,
) -> Result<MatchReport> {
    let mut matcher = SequenceMatcher::new(required, excluded)?;
    let mut buf = Vec::new();
    loop {
        buf.clear();
        let read = output
            .read_until(b'\n', &mut buf)
            .map_err(|e| Error::io("<output>", e))?;
        if read == 0 {
            break;
        }
        let line = String::from_utf8_lossy(trim_newline(&buf));
        matcher.feed(&line);
        // Echo is diagnostic only; a closed sink must not abort the scan.
        let _ = writeln!(echo, "{line}");
    }
    Ok(matcher.finish())
}

fn trim_newline(buf: &[u8]) -> &[u8] {
    let buf = buf.strip_suffix(b"\n").unwrap_or(buf);
    buf.strip_suffix(b"\r").unwrap_or(buf)
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
