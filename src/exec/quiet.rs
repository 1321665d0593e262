// src/exec/quiet.rs

//! Best-effort capturing variants.
//!
//! Both functions run a command in capturing mode and always hand back a
//! string. Any failure (empty argv, unresolvable name, launch error, non-zero
//! exit) yields `""` and is never returned to the caller.

use crate::command::CommandLine;
use crate::errors::RunError;
use crate::exec::runner::Runner;
use crate::exec::sink::LogSink;

/// Capture stdout, reporting failures to `sink`.
///
/// For an unsuccessful exit the child's stderr text is logged first (when
/// there is any), followed by the error itself.
pub fn out_logged<R, S>(runner: &R, cmd: &CommandLine, sink: &S) -> String
where
    R: Runner + ?Sized,
    S: LogSink + ?Sized,
{
    match runner.out_err(cmd) {
        Ok(out) => out,
        Err(err) => {
            if let RunError::ExecutionFailed { stderr, .. } = &err {
                let stderr = stderr.trim_end();
                if !stderr.is_empty() {
                    sink.log(stderr);
                }
            }
            sink.log(&err.to_string());
            String::new()
        }
    }
}

/// Capture stdout, silently discarding any failure.
pub fn out_quiet<R>(runner: &R, cmd: &CommandLine) -> String
where
    R: Runner + ?Sized,
{
    runner.out_err(cmd).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::errors::ExitDetail;

    /// Runner that fails every call with a fixed exit status and stderr.
    struct Failing {
        stderr: &'static str,
    }

    impl Runner for Failing {
        fn exec(&self, _cmd: &CommandLine) -> Result<(), RunError> {
            unreachable!("quiet variants only capture")
        }

        fn out_err(&self, cmd: &CommandLine) -> Result<String, RunError> {
            Err(RunError::ExecutionFailed {
                program: cmd.program().unwrap_or_default().to_string(),
                status: ExitDetail::from_code(2),
                stdout: "partial".to_string(),
                stderr: self.stderr.to_string(),
            })
        }
    }

    #[test]
    fn logged_variant_reports_stderr_then_error() {
        let lines = RefCell::new(Vec::new());
        let sink = |line: &str| lines.borrow_mut().push(line.to_string());

        let runner = Failing {
            stderr: "ls: bork: no such file\n",
        };
        let out = out_logged(&runner, &CommandLine::from(["ls"]), &sink);

        assert_eq!(out, "");
        assert_eq!(
            lines.into_inner(),
            vec!["ls: bork: no such file".to_string(), "exit status 2".to_string()]
        );
    }

    #[test]
    fn logged_variant_skips_empty_stderr() {
        let lines = RefCell::new(Vec::new());
        let sink = |line: &str| lines.borrow_mut().push(line.to_string());

        out_logged(&Failing { stderr: "" }, &CommandLine::from(["false"]), &sink);

        assert_eq!(lines.into_inner(), vec!["exit status 2".to_string()]);
    }

    #[test]
    fn quiet_variant_swallows_failure() {
        let out = out_quiet(&Failing { stderr: "boom" }, &CommandLine::from(["x"]));
        assert_eq!(out, "");
    }
}
