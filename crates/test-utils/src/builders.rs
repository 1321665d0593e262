#![allow(dead_code)]

use runseq::Args;
use runseq::config::{BatchFile, CommandEntry, ConfigSection, RawBatchFile, RunMode};

/// Builder for `BatchFile` to simplify test setup.
pub struct BatchFileBuilder {
    raw: RawBatchFile,
}

impl BatchFileBuilder {
    pub fn new() -> Self {
        Self {
            raw: RawBatchFile {
                config: ConfigSection::default(),
                command: Vec::new(),
            },
        }
    }

    pub fn mode(mut self, mode: RunMode) -> Self {
        self.raw.config.mode = mode;
        self
    }

    pub fn command(self, argv: &[&str]) -> Self {
        self.command_with_options(argv, Args::new())
    }

    pub fn command_with_options(mut self, argv: &[&str], options: Args) -> Self {
        self.raw.command.push(CommandEntry {
            argv: argv.iter().map(|s| s.to_string()).collect(),
            options,
        });
        self
    }

    pub fn build(self) -> BatchFile {
        BatchFile::try_from(self.raw).expect("Failed to build valid batch file from builder")
    }
}

impl Default for BatchFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}
