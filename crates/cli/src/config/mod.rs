// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `outmatch.toml` configuration.
//!
//! Every key is optional; an absent file means all defaults.

pub mod defaults;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::discovery;
use crate::error::{Error, Result};

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub launcher: LauncherConfig,
    pub files: FilesConfig,
}

/// How the build tool is launched.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LauncherConfig {
    /// Executable to run.
    pub program: String,

    /// Arguments before the base flag. `{base}` expands to the global base.
    pub args: Vec<String>,

    /// Global base directory, made absolute against the invoking cwd.
    pub global_base: PathBuf,

    /// Prefix for the global base override flag.
    pub base_flag: String,

    /// Flags placed after the base flag, before the command.
    pub log_flags: Vec<String>,

    /// Extra environment for the child. Replaces the default identity entry.
    pub env: BTreeMap<String, String>,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            program: defaults::launcher::PROGRAM.to_string(),
            args: defaults::launcher::args(),
            global_base: PathBuf::from(defaults::launcher::GLOBAL_BASE),
            base_flag: defaults::launcher::BASE_FLAG.to_string(),
            log_flags: defaults::launcher::log_flags(),
            env: Self::default_env(),
        }
    }
}

impl LauncherConfig {
    pub(crate) fn default_env() -> BTreeMap<String, String> {
        BTreeMap::from([(
            defaults::launcher::IDENTITY_VAR.to_string(),
            defaults::launcher::IDENTITY_VALUE.to_string(),
        )])
    }
}

/// Pattern file locations, relative to the working directory.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FilesConfig {
    pub required: PathBuf,
    pub excludes: PathBuf,
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self {
            required: PathBuf::from(defaults::files::REQUIRED),
            excludes: PathBuf::from(defaults::files::EXCLUDES),
        }
    }
}

/// Load and parse a config file.
pub fn load(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    parse(&content, path)
}

/// Load the explicit config if given, else the one discovered from
/// `start_dir`, else defaults.
pub fn resolve(explicit: Option<&Path>, start_dir: &Path) -> Result<Config> {
    match explicit.map(Path::to_path_buf).or_else(|| discovery::find_config(start_dir)) {
        Some(path) => load(&path),
        None => Ok(Config::default()),
    }
}

/// Parse config content. `path` is used in error messages only.
pub fn parse(content: &str, path: &Path) -> Result<Config> {
    let config: Config = toml::from_str(content).map_err(|e| Error::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    tracing::debug!(path = %path.display(), program = %config.launcher.program, "loaded config");
    Ok(config)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
