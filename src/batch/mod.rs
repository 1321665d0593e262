// src/batch/mod.rs

//! Sequential batch runner with short-circuit failure.
//!
//! Runs the command lines of a [`Batch`] one at a time, the way `a && b && c`
//! behaves in a shell: the first failure stops the batch, and nothing after it
//! is started. The failing invocation's [`RunError`](crate::errors::RunError)
//! is reported unchanged together with its zero-based index.
//!
//! - [`exec_all`] runs every invocation interactively.
//! - [`out_all`] captures and concatenates stdout.

pub mod outcome;

use tracing::{debug, info, warn};

use crate::command::Batch;
use crate::exec::runner::Runner;

pub use outcome::{BatchOutcome, CapturedBatch};

/// Run every command line interactively, stopping at the first failure.
pub fn exec_all<R>(runner: &R, batch: &Batch) -> BatchOutcome
where
    R: Runner + ?Sized,
{
    let mut last = 0;

    for (index, cmd) in batch.iter().enumerate() {
        last = index;
        debug!(index, argv = %cmd, "batch step starting");

        if let Err(error) = runner.exec(cmd) {
            warn!(index, argv = %cmd, error = %error, "batch stopped at failing step");
            return BatchOutcome::FailedAt { index, error };
        }
    }

    info!(steps = batch.len(), "batch finished");
    BatchOutcome::AllSucceeded { last }
}

/// Run every command line in capturing mode, stopping at the first failure.
///
/// The returned output is the in-order concatenation of each invocation's
/// stdout, with no separators, including the partial stdout of the failing
/// invocation.
pub fn out_all<R>(runner: &R, batch: &Batch) -> CapturedBatch
where
    R: Runner + ?Sized,
{
    let mut output = String::new();
    let mut last = 0;

    for (index, cmd) in batch.iter().enumerate() {
        last = index;
        debug!(index, argv = %cmd, "batch step starting");

        match runner.out_err(cmd) {
            Ok(out) => output.push_str(&out),
            Err(error) => {
                output.push_str(error.captured_stdout());
                warn!(index, argv = %cmd, error = %error, "batch stopped at failing step");
                return CapturedBatch {
                    output,
                    outcome: BatchOutcome::FailedAt { index, error },
                };
            }
        }
    }

    info!(steps = batch.len(), bytes = output.len(), "batch finished");
    CapturedBatch {
        output,
        outcome: BatchOutcome::AllSucceeded { last },
    }
}
