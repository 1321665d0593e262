// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

use crate::config::{DEFAULT_CONFIG, RunMode};

/// Command-line arguments for `runseq`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "runseq",
    version,
    about = "Run a list of commands in order, stopping at the first failure.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the batch file (TOML).
    #[arg(long, value_name = "PATH", default_value = DEFAULT_CONFIG)]
    pub config: String,

    /// Override `[config].mode` from the batch file.
    #[arg(long, value_enum, value_name = "MODE")]
    pub mode: Option<ModeArg>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `RUNSEQ_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Parse + validate, print the command lines, but don't run anything.
    #[arg(long)]
    pub dry_run: bool,
}

/// Run mode as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum ModeArg {
    Exec,
    Capture,
}

impl From<ModeArg> for RunMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Exec => RunMode::Exec,
            ModeArg::Capture => RunMode::Capture,
        }
    }
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
