// src/lib.rs

//! Run external executables one at a time and collect their results.
//!
//! The free functions at the crate root run against the real system
//! ([`SystemRunner`]). The generic versions in [`exec`] and [`batch`] take any
//! [`Runner`], which is how tests drive the batch logic without processes.
//!
//! ```no_run
//! use runseq::{Batch, out_all};
//!
//! let batch = Batch::new()
//!     .then(["ls", "-d", "/tmp"])
//!     .then(["true"])
//!     .then(["echo", "wow"]);
//!
//! let captured = out_all(&batch);
//! assert!(captured.is_success());
//! assert_eq!(captured.index(), 2);
//! assert_eq!(captured.output, "/tmp\nwow\n");
//! ```

pub mod args;
pub mod batch;
pub mod cli;
pub mod command;
pub mod config;
pub mod errors;
pub mod exec;
pub mod logging;

use std::io::Write;
use std::path::PathBuf;

use tracing::{debug, info};

pub use crate::args::Args;
pub use crate::batch::{BatchOutcome, CapturedBatch};
pub use crate::command::{Batch, CommandLine};
pub use crate::errors::{ErrorKind, ExitDetail, RunError};
pub use crate::exec::{LogSink, Runner, SystemRunner, TracingSink};

use crate::cli::CliArgs;
use crate::config::{BatchFile, RunMode, load_and_validate};

/// Run `cmd` with the caller's stdin, stdout and stderr attached.
pub fn exec(cmd: impl Into<CommandLine>) -> Result<(), RunError> {
    SystemRunner.exec(&cmd.into())
}

/// Run `cmd` and return its stdout.
pub fn out_err(cmd: impl Into<CommandLine>) -> Result<String, RunError> {
    SystemRunner.out_err(&cmd.into())
}

/// Run `cmd` and return its stdout, logging any failure through `tracing`.
///
/// Returns `""` when the command cannot be run or exits unsuccessfully.
pub fn out(cmd: impl Into<CommandLine>) -> String {
    crate::exec::out_logged(&SystemRunner, &cmd.into(), &TracingSink)
}

/// Run `cmd` and return its stdout, ignoring any failure.
pub fn out_quiet(cmd: impl Into<CommandLine>) -> String {
    crate::exec::out_quiet(&SystemRunner, &cmd.into())
}

/// Run every command of `batch` interactively, stopping at the first failure.
pub fn exec_all(batch: &Batch) -> BatchOutcome {
    crate::batch::exec_all(&SystemRunner, batch)
}

/// Run every command of `batch` capturing stdout, stopping at the first
/// failure.
pub fn out_all(batch: &Batch) -> CapturedBatch {
    crate::batch::out_all(&SystemRunner, batch)
}

/// High-level entry point used by `main.rs`.
///
/// Loads the batch file, runs it in the selected mode and returns the exit
/// code the process should end with: `0` on success, otherwise the failing
/// child's exit code (or `1` when it has none).
pub fn run(args: CliArgs) -> errors::Result<i32> {
    let config_path = PathBuf::from(&args.config);
    let file = load_and_validate(&config_path)?;

    let mode = args.mode.map(RunMode::from).unwrap_or(file.mode());

    if args.dry_run {
        print_dry_run(&file, mode);
        return Ok(0);
    }

    let batch = file.to_batch();
    info!(config = %config_path.display(), ?mode, steps = batch.len(), "running batch");

    let outcome = match mode {
        RunMode::Exec => exec_all(&batch),
        RunMode::Capture => {
            let captured = out_all(&batch);
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(captured.output.as_bytes())?;
            stdout.flush()?;
            captured.outcome
        }
    };

    Ok(exit_code_for(&outcome))
}

/// Process exit code for a finished batch, reporting the failure on stderr.
fn exit_code_for(outcome: &BatchOutcome) -> i32 {
    match outcome {
        BatchOutcome::AllSucceeded { .. } => 0,
        BatchOutcome::FailedAt { index, error } => {
            eprintln!("runseq: command #{index} failed: {error}");
            error.exit_code().filter(|code| *code != 0).unwrap_or(1)
        }
    }
}

/// Simple dry-run output: print mode and command lines.
fn print_dry_run(file: &BatchFile, mode: RunMode) {
    println!("runseq dry-run");
    println!("  mode = {mode:?}");
    println!();

    println!("commands ({}):", file.commands().len());
    for (i, entry) in file.commands().iter().enumerate() {
        println!("  #{i}: {}", entry.to_command_line());
    }

    debug!("dry-run complete (no execution)");
}
