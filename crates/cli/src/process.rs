// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Launching the build and verifying its output.
//!
//! Standard output is scanned line by line as it arrives. Standard error is
//! collected on a helper thread so a full stderr pipe cannot stall the child,
//! and is echoed once stdout is exhausted and the child has exited.

use std::fmt;
use std::io::{self, BufReader, Read, Write};
use std::path::{Path, PathBuf};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crate::config::defaults::launcher::BASE_PLACEHOLDER;
use crate::config::{Config, LauncherConfig};
use crate::error::{Error, Result};
use crate::matcher::{MatchReport, check_output};
use crate::pattern::PatternSequence;

/// A fully resolved launcher command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchSpec {
    pub program: String,
    pub args: Vec<String>,
    pub env: Vec<(String, String)>,
}

impl LaunchSpec {
    /// Build the command line for `command`.
    ///
    /// Layout: `program args... <base_flag><base> log_flags... command`, with
    /// the global base made absolute against `cwd`. An empty `base_flag`
    /// omits the base override.
    pub fn new(launcher: &LauncherConfig, command: &str, cwd: &Path) -> Self {
        let base = if launcher.global_base.is_absolute() {
            launcher.global_base.clone()
        } else {
            cwd.join(&launcher.global_base)
        };
        let base = base.display().to_string();

        let mut args: Vec<String> = launcher
            .args
            .iter()
            .map(|a| a.replace(BASE_PLACEHOLDER, &base))
            .collect();
        if !launcher.base_flag.is_empty() {
            args.push(format!("{}{}", launcher.base_flag, base));
        }
        args.extend(launcher.log_flags.iter().cloned());
        args.push(command.to_string());

        Self {
            program: launcher.program.clone(),
            args,
            env: launcher
                .env
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        }
    }

    /// Start the launcher in `working_dir` with stdout and stderr piped.
    pub fn spawn(&self, working_dir: &Path) -> Result<Child> {
        tracing::debug!(command = %self, dir = %working_dir.display(), "launching build");
        Command::new(&self.program)
            .args(&self.args)
            .envs(self.env.iter().map(|(k, v)| (k, v)))
            .current_dir(working_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| self.launch_error(source))
    }

    fn launch_error(&self, source: io::Error) -> Error {
        Error::Launch {
            program: self.program.clone(),
            source,
        }
    }
}

impl fmt::Display for LaunchSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            if arg.contains(char::is_whitespace) {
                write!(f, " {arg:?}")?;
            } else {
                write!(f, " {arg}")?;
            }
        }
        Ok(())
    }
}

/// Result of a verified build.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    /// The build's exit code. Signal termination maps to `128 + signal`.
    pub exit_code: i32,
    pub report: MatchReport,
    pub elapsed: Duration,
}

/// Pattern files resolved against a working directory.
#[derive(Debug, Clone)]
pub struct Expectations {
    pub required: PatternSequence,
    pub excluded: PatternSequence,
}

impl Expectations {
    /// Load the required file (mandatory) and the exclusion file (optional).
    pub fn load(config: &Config, working_dir: &Path) -> Result<Self> {
        let required_path = working_dir.join(&config.files.required);
        let required = PatternSequence::load(&required_path)?;
        if required.is_empty() {
            return Err(Error::NoRequiredPatterns {
                origin: required_path.display().to_string(),
            });
        }
        let excluded =
            PatternSequence::load_optional(Some(&working_dir.join(&config.files.excludes)))?;
        Ok(Self { required, excluded })
    }
}

/// Launch `command` in `working_dir` and verify its output.
///
/// Every stdout line and then all of stderr are echoed to `echo`. Returns the
/// build's exit code once verification passes; a verification failure is
/// returned as [`Error::Verification`] after the child has exited.
pub fn run_and_test(
    config: &Config,
    command: &str,
    working_dir: &Path,
    echo: &mut dyn Write,
) -> Result<RunOutcome> {
    let expectations = Expectations::load(config, working_dir)?;
    let cwd = std::env::current_dir().map_err(|e| Error::io(".", e))?;
    let spec = LaunchSpec::new(&config.launcher, command, &cwd);

    let started = Instant::now();
    let mut child = spec.spawn(working_dir)?;

    let (stdout, stderr) = match (child.stdout.take(), child.stderr.take()) {
        (Some(out), Some(err)) => (out, err),
        _ => {
            reap(&mut child);
            return Err(spec.launch_error(io::Error::other("child output was not captured")));
        }
    };
    let stderr_reader = drain(stderr);

    let scanned = check_output(
        &expectations.required,
        BufReader::new(stdout),
        &expectations.excluded,
        echo,
    );
    let report = match scanned {
        Ok(report) => report,
        Err(e) => {
            reap(&mut child);
            return Err(e);
        }
    };

    let status = child
        .wait()
        .map_err(|e| Error::io(working_dir.to_path_buf(), e))?;
    echo_stderr(stderr_reader, echo);

    let elapsed = started.elapsed();
    let exit_code = exit_code(status);
    tracing::debug!(
        exit_code,
        elapsed_ms = elapsed.as_millis() as u64,
        lines = report.lines_scanned,
        "build finished"
    );

    let report = report.verify()?;
    Ok(RunOutcome {
        exit_code,
        report,
        elapsed,
    })
}

/// Convenience entry point for tests: discover config from `working_dir`,
/// echo to stdout, and return the build's exit code.
pub fn run_in(command: &str, working_dir: &Path) -> Result<i32> {
    let config = match crate::discovery::find_config(working_dir) {
        Some(path) => crate::config::load(&path)?,
        None => Config::default(),
    };
    let mut stdout = io::stdout().lock();
    run_and_test(&config, command, working_dir, &mut stdout).map(|outcome| outcome.exit_code)
}

fn drain<R: Read + Send + 'static>(mut stream: R) -> JoinHandle<io::Result<Vec<u8>>> {
    thread::spawn(move || {
        let mut buf = Vec::new();
        stream.read_to_end(&mut buf)?;
        Ok(buf)
    })
}

fn echo_stderr(reader: JoinHandle<io::Result<Vec<u8>>>, echo: &mut dyn Write) {
    let bytes = match reader.join() {
        Ok(Ok(bytes)) => bytes,
        Ok(Err(e)) => {
            tracing::warn!(error = %e, "failed to read build stderr");
            return;
        }
        Err(_) => {
            tracing::warn!("stderr reader thread panicked");
            return;
        }
    };
    let _ = writeln!(echo, "Standard error of the build (if any):");
    for line in String::from_utf8_lossy(&bytes).lines() {
        let _ = writeln!(echo, "{line}");
    }
}

fn reap(child: &mut Child) {
    let _ = child.kill();
    let _ = child.wait();
}

fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }
    -1
}

/// Resolve a working directory argument against the current directory.
pub fn resolve_dir(dir: Option<PathBuf>) -> Result<PathBuf> {
    let cwd = std::env::current_dir().map_err(|e| Error::io(".", e))?;
    Ok(match dir {
        Some(d) if d.is_absolute() => d,
        Some(d) => cwd.join(d),
        None => cwd,
    })
}

#[cfg(test)]
#[path = "process_tests.rs"]
mod tests;
