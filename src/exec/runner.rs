// src/exec/runner.rs

//! Pluggable single-invocation runner.
//!
//! The batch runner talks to a [`Runner`] instead of `std::process`
//! directly, so tests can provide an implementation that records which
//! command lines were attempted without spawning anything.
//!
//! - [`SystemRunner`] is the production implementation. It resolves the
//!   executable on the search path and launches it, blocking until it exits.

use std::process::{Command, Stdio};

use tracing::{debug, info};

use crate::command::CommandLine;
use crate::errors::{ExitDetail, RunError};
use crate::exec::resolve::resolve;

/// Runs one command line to completion.
pub trait Runner {
    /// Interactive mode: the child shares the caller's stdin, stdout and
    /// stderr. Returns once the child has exited.
    fn exec(&self, cmd: &CommandLine) -> Result<(), RunError>;

    /// Capturing mode: returns the child's stdout.
    ///
    /// On a non-zero exit the error carries the stdout captured so far and
    /// the child's stderr text.
    fn out_err(&self, cmd: &CommandLine) -> Result<String, RunError>;
}

/// Runner that launches real processes.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl SystemRunner {
    /// Build a `Command` for the resolved executable with the remaining args.
    fn prepare(cmd: &CommandLine) -> Result<(String, Command), RunError> {
        let path = resolve(cmd)?;
        // `resolve` has already rejected an empty argv.
        let program = cmd.program().unwrap_or_default().to_string();

        let mut command = Command::new(path);
        command.args(cmd.args());
        Ok((program, command))
    }
}

impl Runner for SystemRunner {
    fn exec(&self, cmd: &CommandLine) -> Result<(), RunError> {
        let (program, mut command) = Self::prepare(cmd)?;

        debug!(program = %program, argv = %cmd, "running interactively");

        let status = command
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| RunError::Launch {
                program: program.clone(),
                source,
            })?;

        if status.success() {
            return Ok(());
        }

        let status = ExitDetail::from(status);
        info!(program = %program, exit_code = ?status.code, "process exited unsuccessfully");
        Err(RunError::ExecutionFailed {
            program,
            status,
            stdout: String::new(),
            stderr: String::new(),
        })
    }

    fn out_err(&self, cmd: &CommandLine) -> Result<String, RunError> {
        let (program, mut command) = Self::prepare(cmd)?;

        debug!(program = %program, argv = %cmd, "running with captured output");

        let output = command
            .stdin(Stdio::null())
            .output()
            .map_err(|source| RunError::Launch {
                program: program.clone(),
                source,
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();

        if output.status.success() {
            return Ok(stdout);
        }

        let status = ExitDetail::from(output.status);
        info!(program = %program, exit_code = ?status.code, "process exited unsuccessfully");
        Err(RunError::ExecutionFailed {
            program,
            status,
            stdout,
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
