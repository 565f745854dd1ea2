// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types and process exit codes.

use std::path::PathBuf;

use crate::matcher::MatchReport;

/// Errors raised while loading patterns, launching a build, or verifying output.
///
/// None of these are recovered from: every variant is a failure of the check.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required resource could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A pattern file line is not a valid regular expression.
    #[error("invalid pattern at {origin}:{line}: {source}")]
    PatternSyntax {
        origin: String,
        line: usize,
        #[source]
        source: regex::Error,
    },

    /// The required pattern sequence is empty.
    #[error("no required patterns in {origin}")]
    NoRequiredPatterns { origin: String },

    /// The build launcher could not be started.
    #[error("failed to launch {program}: {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file could not be parsed.
    #[error("invalid config {}: {message}", path.display())]
    Config { path: PathBuf, message: String },

    /// Output did not satisfy the required or excluded patterns.
    #[error("output verification failed\n{}", crate::report::text::render_failure(.0).trim_end())]
    Verification(Box<MatchReport>),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    /// The match report behind a verification failure, if this is one.
    pub fn report(&self) -> Option<&MatchReport> {
        match self {
            Error::Verification(report) => Some(report),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// Exit codes for the `outmatch` binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Output verified.
    Success = 0,
    /// Required pattern unmet or excluded pattern found.
    CheckFailed = 1,
    /// Bad configuration or pattern file.
    ConfigError = 2,
    /// I/O or launch failure.
    InternalError = 3,
}

impl ExitCode {
    /// Classify an error into the exit code the binary reports for it.
    pub fn for_error(err: &Error) -> Self {
        match err {
            Error::Verification(_) => ExitCode::CheckFailed,
            Error::PatternSyntax { .. } | Error::NoRequiredPatterns { .. } | Error::Config { .. } => {
                ExitCode::ConfigError
            }
            Error::Io { .. } | Error::Launch { .. } => ExitCode::InternalError,
        }
    }
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        std::process::ExitCode::from(code as u8)
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
