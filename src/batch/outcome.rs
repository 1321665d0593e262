// src/batch/outcome.rs

//! Terminal states of a batch run.

use crate::errors::RunError;

/// How a batch ended.
///
/// A batch has exactly two terminal states. `index` always names the last
/// invocation that was attempted; an empty batch counts as having succeeded
/// at position 0.
#[derive(Debug)]
pub enum BatchOutcome {
    /// Every invocation succeeded; `last` is the index of the final one.
    AllSucceeded { last: usize },
    /// Invocation `index` failed and nothing after it was started.
    FailedAt { index: usize, error: RunError },
}

impl BatchOutcome {
    /// Index of the last invocation attempted.
    pub fn index(&self) -> usize {
        match self {
            BatchOutcome::AllSucceeded { last } => *last,
            BatchOutcome::FailedAt { index, .. } => *index,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, BatchOutcome::AllSucceeded { .. })
    }

    pub fn error(&self) -> Option<&RunError> {
        match self {
            BatchOutcome::AllSucceeded { .. } => None,
            BatchOutcome::FailedAt { error, .. } => Some(error),
        }
    }

    /// `Ok(last)` on success, `Err((index, error))` on failure.
    pub fn into_result(self) -> Result<usize, (usize, RunError)> {
        match self {
            BatchOutcome::AllSucceeded { last } => Ok(last),
            BatchOutcome::FailedAt { index, error } => Err((index, error)),
        }
    }
}

/// Result of a capturing batch: the accumulated stdout plus the outcome.
#[derive(Debug)]
pub struct CapturedBatch {
    /// Stdout of every attempted invocation, concatenated in order. Includes
    /// whatever a failing invocation wrote before it exited.
    pub output: String,
    pub outcome: BatchOutcome,
}

impl CapturedBatch {
    pub fn index(&self) -> usize {
        self.outcome.index()
    }

    pub fn error(&self) -> Option<&RunError> {
        self.outcome.error()
    }

    pub fn is_success(&self) -> bool {
        self.outcome.is_success()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_has_no_error() {
        let outcome = BatchOutcome::AllSucceeded { last: 4 };
        assert!(outcome.is_success());
        assert!(outcome.error().is_none());
        assert_eq!(outcome.into_result().unwrap(), 4);
    }

    #[test]
    fn failure_exposes_index_and_error() {
        let outcome = BatchOutcome::FailedAt {
            index: 1,
            error: RunError::EmptyCommand,
        };
        assert_eq!(outcome.index(), 1);
        assert!(matches!(outcome.error(), Some(RunError::EmptyCommand)));
        let (index, err) = outcome.into_result().unwrap_err();
        assert_eq!(index, 1);
        assert!(matches!(err, RunError::EmptyCommand));
    }
}
