// src/errors.rs

//! Crate-wide error types.
//!
//! - [`RunError`] is what a single invocation (and therefore a batch) fails
//!   with. The batch runner forwards it unchanged.
//! - [`RunseqError`] covers everything around the runner: loading batch
//!   files, I/O, and wrapping a [`RunError`] for the binary.

use std::fmt;
use std::process::ExitStatus;

use thiserror::Error;

/// How a child process terminated when it did not exit cleanly.
///
/// Displays the way a shell user expects to read it: `exit status 2` or
/// `signal 9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitDetail {
    pub code: Option<i32>,
    pub signal: Option<i32>,
}

impl ExitDetail {
    /// Detail for a process that exited with the given code.
    pub fn from_code(code: i32) -> Self {
        Self {
            code: Some(code),
            signal: None,
        }
    }

    /// Detail for a process that was terminated by a signal.
    pub fn from_signal(signal: i32) -> Self {
        Self {
            code: None,
            signal: Some(signal),
        }
    }
}

impl From<ExitStatus> for ExitDetail {
    fn from(status: ExitStatus) -> Self {
        #[cfg(unix)]
        let signal = std::os::unix::process::ExitStatusExt::signal(&status);
        #[cfg(not(unix))]
        let signal = None;

        Self {
            code: status.code(),
            signal,
        }
    }
}

impl fmt::Display for ExitDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.code, self.signal) {
            (Some(code), _) => write!(f, "exit status {code}"),
            (None, Some(sig)) => write!(f, "signal {sig}"),
            (None, None) => write!(f, "unknown exit status"),
        }
    }
}

/// Failure of a single invocation.
#[derive(Error, Debug)]
pub enum RunError {
    /// No executable name was given at all.
    #[error("missing name of executable")]
    EmptyCommand,

    /// The executable could not be found on the search path.
    #[error("executable not found: {name}")]
    NotFound { name: String },

    /// The executable was resolved but could not be started.
    #[error("failed to launch {program}: {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The child ran and exited unsuccessfully.
    ///
    /// In capturing mode `stdout` holds whatever the child wrote before it
    /// terminated and `stderr` holds its error channel; both are empty in
    /// interactive mode.
    #[error("{status}")]
    ExecutionFailed {
        program: String,
        status: ExitDetail,
        stdout: String,
        stderr: String,
    },
}

/// Fieldless view of [`RunError`] for callers that only branch on the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    EmptyCommand,
    NotFound,
    Launch,
    ExecutionFailed,
}

impl RunError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RunError::EmptyCommand => ErrorKind::EmptyCommand,
            RunError::NotFound { .. } => ErrorKind::NotFound,
            RunError::Launch { .. } => ErrorKind::Launch,
            RunError::ExecutionFailed { .. } => ErrorKind::ExecutionFailed,
        }
    }

    /// Exit code of the child, if it ran and exited with one.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            RunError::ExecutionFailed { status, .. } => status.code,
            _ => None,
        }
    }

    /// Standard output captured before the child failed.
    ///
    /// Empty for every kind other than a capturing-mode `ExecutionFailed`.
    pub fn captured_stdout(&self) -> &str {
        match self {
            RunError::ExecutionFailed { stdout, .. } => stdout,
            _ => "",
        }
    }

    /// Error-channel text of the child, if it was captured.
    pub fn captured_stderr(&self) -> &str {
        match self {
            RunError::ExecutionFailed { stderr, .. } => stderr,
            _ => "",
        }
    }
}

#[derive(Error, Debug)]
pub enum RunseqError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error(transparent)]
    Run(#[from] RunError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, RunseqError>;
