// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized default values for configuration.
//!
//! The launcher defaults reproduce an sbt launch for plugin integration tests.
//! Individual config structs delegate to these via their `default_*` methods.

/// Config file name looked up by discovery.
pub const CONFIG_FILE: &str = "outmatch.toml";

/// Build launcher defaults.
pub mod launcher {
    /// Launcher executable.
    pub const PROGRAM: &str = "java";

    /// Global base directory, resolved against the invoking process's cwd.
    pub const GLOBAL_BASE: &str = "test/sbt";

    /// Prefix joined with the absolute global base.
    pub const BASE_FLAG: &str = "-Dsbt.global.base=";

    /// Placeholder in `args` replaced with the absolute global base.
    pub const BASE_PLACEHOLDER: &str = "{base}";

    /// Environment variable identifying the calling tool and its version.
    pub const IDENTITY_VAR: &str = "TEAMCITY_VERSION";
    pub const IDENTITY_VALUE: &str = "8.0.TEST";

    /// Arguments placed before the base flag.
    pub fn args() -> Vec<String> {
        vec!["-jar".to_string(), "{base}/bin/sbt-launch.jar".to_string()]
    }

    /// Flags disabling log formatting so output lines are plain text.
    pub fn log_flags() -> Vec<String> {
        vec!["-Dsbt.log.format=false".to_string()]
    }
}

/// Pattern file names, relative to the working directory.
pub mod files {
    /// Required patterns, one per line, matched in order.
    pub const REQUIRED: &str = "output.txt";

    /// Excluded patterns, one per line. Optional.
    pub const EXCLUDES: &str = "excludes.txt";
}
