// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Build output verification.
//!
//! Launch a build tool, stream its standard output, and check that a list of
//! required patterns appears in order while no excluded pattern appears at all.
//!
//! ```no_run
//! use std::path::Path;
//!
//! // Reads output.txt and excludes.txt from the fixture directory.
//! let exit_code = outmatch::process::run_in("compile", Path::new("fixtures/simple"))?;
//! assert_eq!(exit_code, 0);
//! # Ok::<(), outmatch::Error>(())
//! ```

pub mod cli;
pub mod color;
pub mod config;
pub mod discovery;
pub mod error;
pub mod matcher;
pub mod pattern;
pub mod process;
pub mod report;

#[cfg(test)]
pub mod test_utils;

pub use error::{Error, ExitCode, Result};
pub use matcher::{MatchReport, SequenceMatcher, Violation, check_output};
pub use pattern::{Pattern, PatternSequence};
pub use process::{RunOutcome, run_and_test};
