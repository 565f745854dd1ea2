//! Test helpers for behavioral specifications.
//!
//! Provides a small DSL for testing outmatch CLI behavior.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::PredicateBooleanExt;
use std::path::{Path, PathBuf};
use assert_cmd::Command;

use tempfile::TempDir;

/// Returns a Command configured to run the outmatch binary with a clean
/// environment for config, logging and color.
pub fn outmatch_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("outmatch"));
    cmd.env_remove("OUTMATCH_CONFIG")
        .env_remove("OUTMATCH_LOG")
        .env("NO_COLOR", "1");
    cmd
}

/// Get path to a test fixture directory
pub fn fixture(name: &str) -> PathBuf {
    let manifest_dir =
        std::env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR should be set");
    PathBuf::from(manifest_dir)
        .parent()
        .expect("parent should exist")
        .parent()
        .expect("grandparent should exist")
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// A throwaway working directory.
///
/// Holds a `.git` marker so config discovery never escapes the temp dir.
pub struct Project {
    dir: TempDir,
}

impl Project {
    pub fn empty() -> Self {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join(".git")).unwrap();
        Self { dir }
    }

    /// A project whose launcher runs `script` under `sh -c`.
    ///
    /// In the script `$1` is the base flag, `$2` the log flag, `$3` the command.
    pub fn sh_launcher(script: &str) -> Self {
        let project = Self::empty();
        project.config(&format!(
            "[launcher]\nprogram = \"sh\"\nargs = [\"-c\", '{script}', \"launcher\"]\n"
        ));
        project
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn file(&self, path: &str, content: &str) {
        let full = self.dir.path().join(path);
        if let Some(parent) = full.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(full, content).unwrap();
    }

    pub fn config(&self, content: &str) {
        self.file("outmatch.toml", content);
    }

    /// Write output.txt, one pattern per line.
    pub fn required(&self, patterns: &[&str]) {
        self.file("output.txt", &lines(patterns));
    }

    /// Write excludes.txt, one pattern per line.
    pub fn excludes(&self, patterns: &[&str]) {
        self.file("excludes.txt", &lines(patterns));
    }
}

fn lines(items: &[&str]) -> String {
    let mut out = items.join("\n");
    out.push('\n');
    out
}
