//! CLI argument parsing with clap derive.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use termcolor::ColorChoice;

use crate::color::ColorMode;

/// Launch a build and verify its console output against ordered patterns
#[derive(Parser)]
#[command(name = "outmatch")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "OUTMATCH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug logging (OUTMATCH_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Launch the build tool and verify its output
    Run(RunArgs),
    /// Verify an existing log (or stdin) without launching anything
    Check(CheckArgs),
}

#[derive(clap::Args)]
pub struct RunArgs {
    /// Command string passed to the build tool
    #[arg(value_name = "COMMAND")]
    pub command: String,

    /// Working directory holding output.txt and excludes.txt
    #[arg(short = 'd', long = "dir", value_name = "DIR")]
    pub dir: Option<PathBuf>,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(clap::Args)]
pub struct CheckArgs {
    /// Log file to verify (default: stdin)
    #[arg(value_name = "LOG")]
    pub log: Option<PathBuf>,

    /// Required patterns file (default: output.txt from config)
    #[arg(long, value_name = "FILE")]
    pub required: Option<PathBuf>,

    /// Excluded patterns file; must exist when given
    #[arg(long, value_name = "FILE")]
    pub excludes: Option<PathBuf>,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Verdict and echo options shared by every subcommand.
#[derive(clap::Args)]
pub struct OutputArgs {
    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Color output mode
    #[arg(long, default_value = "auto", value_name = "WHEN")]
    pub color: ColorMode,

    /// Disable color output (shorthand for --color=never)
    #[arg(long)]
    pub no_color: bool,

    /// Do not echo scanned output lines
    #[arg(short, long)]
    pub quiet: bool,
}

impl OutputArgs {
    /// Where scanned lines are echoed: nowhere with `--quiet`, stderr in
    /// JSON mode so stdout stays parseable, stdout otherwise.
    pub fn echo_sink(&self) -> Box<dyn Write> {
        if self.quiet {
            Box::new(io::sink())
        } else if self.output == OutputFormat::Json {
            Box::new(io::stderr())
        } else {
            Box::new(io::stdout())
        }
    }

    pub fn color_choice(&self) -> ColorChoice {
        self.color.choice(self.no_color)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
