// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Pattern files: one regular expression per line.
//!
//! A required-output file lists patterns that must appear in order; an
//! exclusion file lists patterns that must never appear. Both load into a
//! [`PatternSequence`].

pub mod sequence;

pub use sequence::{Pattern, PatternSequence};
