// src/config/validate.rs

use crate::config::model::{BatchFile, RawBatchFile};
use crate::errors::{Result, RunseqError};

impl TryFrom<RawBatchFile> for BatchFile {
    type Error = RunseqError;

    fn try_from(raw: RawBatchFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_batch(&raw)?;
        Ok(BatchFile::new_unchecked(raw.config, raw.command))
    }
}

fn validate_raw_batch(raw: &RawBatchFile) -> Result<()> {
    ensure_has_commands(raw)?;
    validate_argv(raw)?;
    validate_options(raw)?;
    Ok(())
}

fn ensure_has_commands(raw: &RawBatchFile) -> Result<()> {
    if raw.command.is_empty() {
        return Err(RunseqError::ConfigError(
            "batch file must contain at least one [[command]] entry".to_string(),
        ));
    }
    Ok(())
}

fn validate_argv(raw: &RawBatchFile) -> Result<()> {
    for (i, entry) in raw.command.iter().enumerate() {
        match entry.argv.first() {
            None => {
                return Err(RunseqError::ConfigError(format!(
                    "command #{i} has an empty `argv`"
                )));
            }
            Some(program) if program.trim().is_empty() => {
                return Err(RunseqError::ConfigError(format!(
                    "command #{i} has a blank executable name"
                )));
            }
            Some(_) => {}
        }
    }
    Ok(())
}

fn validate_options(raw: &RawBatchFile) -> Result<()> {
    for (i, entry) in raw.command.iter().enumerate() {
        for key in entry.options.keys() {
            if key.is_empty() {
                return Err(RunseqError::ConfigError(format!(
                    "command #{i} has an empty option name"
                )));
            }
            if key.starts_with('-') {
                return Err(RunseqError::ConfigError(format!(
                    "command #{i} option '{key}' must not start with '-'"
                )));
            }
        }
    }
    Ok(())
}
