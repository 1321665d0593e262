// src/config/loader.rs

use std::fs;
use std::path::Path;

use crate::config::model::{BatchFile, RawBatchFile};
use crate::errors::Result;

/// Load a batch file from `path` without semantic validation.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawBatchFile> {
    let contents = fs::read_to_string(path.as_ref())?;
    let raw: RawBatchFile = toml::from_str(&contents)?;
    Ok(raw)
}

/// Load a batch file and validate it.
///
/// This is the entry point the binary uses:
///
/// - Reads TOML.
/// - Applies defaults (`mode = "exec"`, empty `options`).
/// - Checks that there is at least one command, that every `argv` names an
///   executable, and that option keys are well formed.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<BatchFile> {
    let raw = load_from_path(path)?;
    BatchFile::try_from(raw)
}

/// Batch file used when `--config` is not given, relative to the working
/// directory.
pub const DEFAULT_CONFIG: &str = "Runseq.toml";
