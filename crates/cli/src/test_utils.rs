//! Shared unit test utilities.
//!
//! Provides common helpers for unit tests in the outmatch crate.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::{NamedTempFile, TempDir};

use crate::config::{Config, LauncherConfig};
use crate::pattern::PatternSequence;

/// Compile inline patterns, panicking on bad syntax.
pub fn patterns(lines: &[&str]) -> PatternSequence {
    PatternSequence::from_lines(lines).unwrap()
}

/// Creates a temp working directory whose output.txt holds `required`.
pub fn temp_workdir(required: &[&str]) -> TempDir {
    let dir = TempDir::new().unwrap();
    write_lines(&dir.path().join("output.txt"), required);
    dir
}

/// Like [`temp_workdir`], with an excludes.txt as well.
pub fn temp_workdir_with_excludes(required: &[&str], excludes: &[&str]) -> TempDir {
    let dir = temp_workdir(required);
    write_lines(&dir.path().join("excludes.txt"), excludes);
    dir
}

/// Creates a directory tree from a list of (path, content) pairs.
///
/// Parent directories are created automatically.
pub fn create_tree(root: &Path, files: &[(&str, &str)]) {
    for (path, content) in files {
        let full_path = root.join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(full_path, content).unwrap();
    }
}

/// Creates a temp file with content using writeln! for each line.
pub fn temp_file_with_lines(lines: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    for line in lines {
        writeln!(file, "{}", line).unwrap();
    }
    file.flush().unwrap();
    file
}

/// Config whose launcher runs `script` under `sh -c`.
///
/// Inside the script `$1` is the base flag, `$2` the log flag and `$3` the
/// command string.
pub fn sh_config(script: &str) -> Config {
    Config {
        launcher: LauncherConfig {
            program: "sh".to_string(),
            args: vec!["-c".to_string(), script.to_string(), "launcher".to_string()],
            ..LauncherConfig::default()
        },
        ..Config::default()
    }
}

fn write_lines(path: &Path, lines: &[&str]) {
    let mut content = lines.join("\n");
    content.push('\n');
    fs::write(path, content).unwrap();
}
