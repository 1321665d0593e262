// src/config/model.rs

use std::str::FromStr;

use serde::Deserialize;

use crate::args::Args;
use crate::command::{Batch, CommandLine};

/// Which runner mode a batch file asks for.
///
/// - `Exec`: children share the terminal; nothing is captured (default).
/// - `Capture`: stdout of every step is collected and printed at the end.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunMode {
    #[default]
    Exec,
    Capture,
}

impl FromStr for RunMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "exec" => Ok(RunMode::Exec),
            "capture" => Ok(RunMode::Capture),
            other => Err(format!(
                "invalid mode: {other} (expected \"exec\" or \"capture\")"
            )),
        }
    }
}

/// Batch file as read from TOML, before validation.
///
/// ```toml
/// [config]
/// mode = "capture"
///
/// [[command]]
/// argv = ["ls", "-d", "/tmp"]
///
/// [[command]]
/// argv = ["mytool", "build"]
/// options = { target = "release" }
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct RawBatchFile {
    #[serde(default)]
    pub config: ConfigSection,

    /// `[[command]]` entries, in file order.
    #[serde(default)]
    pub command: Vec<CommandEntry>,
}

/// `[config]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigSection {
    #[serde(default)]
    pub mode: RunMode,
}

/// One `[[command]]` entry.
#[derive(Debug, Clone, Deserialize)]
pub struct CommandEntry {
    /// Executable name followed by positional arguments.
    pub argv: Vec<String>,

    /// Long options appended after `argv` as `--key value`.
    #[serde(default)]
    pub options: Args,
}

impl CommandEntry {
    pub fn to_command_line(&self) -> CommandLine {
        CommandLine::new(self.argv.iter().cloned()).with_options(&self.options)
    }
}

/// A validated batch file.
///
/// Only constructible through `TryFrom<RawBatchFile>`, so every command has
/// a non-blank executable name.
#[derive(Debug, Clone)]
pub struct BatchFile {
    pub config: ConfigSection,
    commands: Vec<CommandEntry>,
}

impl BatchFile {
    pub(crate) fn new_unchecked(config: ConfigSection, commands: Vec<CommandEntry>) -> Self {
        Self { config, commands }
    }

    pub fn commands(&self) -> &[CommandEntry] {
        &self.commands
    }

    pub fn mode(&self) -> RunMode {
        self.config.mode
    }

    /// Runtime batch, in file order.
    pub fn to_batch(&self) -> Batch {
        self.commands.iter().map(CommandEntry::to_command_line).collect()
    }
}
