// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON format verdicts.

use serde_json::json;

use super::{Outcome, ReportFormatter};

/// JSON format report formatter.
pub struct JsonFormatter;

impl ReportFormatter for JsonFormatter {
    fn format(&self, outcome: Outcome<'_>) -> anyhow::Result<String> {
        let report = outcome.report;
        let mut output = json!({
            "passed": report.passed(),
            "report": report,
        });
        if let (Some(code), Some(map)) = (outcome.exit_code, output.as_object_mut()) {
            map.insert("exit_code".to_string(), json!(code));
        }
        Ok(serde_json::to_string_pretty(&output)?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
