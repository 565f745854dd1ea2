// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Loading ordered pattern sequences from line-oriented sources.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use regex::Regex;

use crate::error::{Error, Result};

/// A compiled pattern and the source line it came from.
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Regex,
    line: usize,
}

impl Pattern {
    /// Unanchored search: true if any substring of `text` matches.
    pub fn is_found_in(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    /// The pattern as written in its source.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// 1-based line number in the source.
    pub fn line(&self) -> usize {
        self.line
    }
}

impl std::fmt::Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered, immutable sequence of compiled patterns.
///
/// Order is the expected order of appearance for required patterns.
#[derive(Debug, Clone, Default)]
pub struct PatternSequence {
    patterns: Vec<Pattern>,
    origin: String,
}

impl PatternSequence {
    /// An empty sequence, e.g. for "no exclusions configured".
    pub fn empty() -> Self {
        Self::default()
    }

    /// Compile every non-empty line of `reader`.
    ///
    /// `origin` names the source in diagnostics.
    pub fn from_reader<R: BufRead>(reader: R, origin: &str) -> Result<Self> {
        let mut patterns = Vec::new();
        for (idx, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| Error::io(origin, e))?;
            if line.is_empty() {
                continue;
            }
            patterns.push(compile(&line, origin, idx + 1)?);
        }
        tracing::debug!(origin, count = patterns.len(), "loaded patterns");
        Ok(Self {
            patterns,
            origin: origin.to_string(),
        })
    }

    /// Compile patterns from in-memory strings, skipping empty ones.
    pub fn from_lines<I, S>(lines: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let origin = "<inline>";
        let mut patterns = Vec::new();
        for (idx, line) in lines.into_iter().enumerate() {
            let line = line.as_ref();
            if !line.is_empty() {
                patterns.push(compile(line, origin, idx + 1)?);
            }
        }
        Ok(Self {
            patterns,
            origin: origin.to_string(),
        })
    }

    /// Load a mandatory pattern file. A missing file is an error.
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| Error::io(path, e))?;
        Self::from_reader(BufReader::new(file), &path.display().to_string())
    }

    /// Load an optional pattern file.
    ///
    /// `None` and a file that does not exist both yield an empty sequence.
    pub fn load_optional(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::empty());
        };
        match File::open(path) {
            Ok(file) => Self::from_reader(BufReader::new(file), &path.display().to_string()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no pattern file, using empty sequence");
                Ok(Self::empty())
            }
            Err(e) => Err(Error::io(path, e)),
        }
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Pattern> {
        self.patterns.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Pattern> {
        self.patterns.iter()
    }

    /// Where the patterns were loaded from.
    pub fn origin(&self) -> &str {
        &self.origin
    }
}

impl<'a> IntoIterator for &'a PatternSequence {
    type Item = &'a Pattern;
    type IntoIter = std::slice::Iter<'a, Pattern>;

    fn into_iter(self) -> Self::IntoIter {
        self.patterns.iter()
    }
}

fn compile(source: &str, origin: &str, line: usize) -> Result<Pattern> {
    let regex = Regex::new(source).map_err(|source| Error::PatternSyntax {
        origin: origin.to_string(),
        line,
        source,
    })?;
    Ok(Pattern { regex, line })
}

#[cfg(test)]
#[path = "sequence_tests.rs"]
mod tests;
