use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use runseq::{CommandLine, ExitDetail, RunError, Runner};
use tracing::debug;

/// What the fake does when a given program is invoked.
#[derive(Debug, Clone)]
pub enum Scripted {
    /// Exit 0 and write `stdout`.
    Succeed(String),
    /// Exit with `code` after writing `stdout` and `stderr`.
    Fail {
        code: i32,
        stdout: String,
        stderr: String,
    },
    /// Behave as if the program is not on the search path.
    Missing,
}

/// A runner that never spawns processes:
/// - looks up the program name in a script (unknown programs succeed with
///   no output)
/// - records every argv it was asked to run, in order.
///
/// Empty argvs are rejected with `EmptyCommand` and not recorded, matching
/// the real runner which checks before doing anything else.
#[derive(Debug, Clone, Default)]
pub struct FakeRunner {
    script: HashMap<String, Scripted>,
    invocations: Arc<Mutex<Vec<Vec<String>>>>,
}

impl FakeRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn succeed(mut self, program: &str, stdout: &str) -> Self {
        self.script
            .insert(program.to_string(), Scripted::Succeed(stdout.to_string()));
        self
    }

    pub fn fail(self, program: &str, code: i32) -> Self {
        self.fail_with(program, code, "", "")
    }

    pub fn fail_with(mut self, program: &str, code: i32, stdout: &str, stderr: &str) -> Self {
        self.script.insert(
            program.to_string(),
            Scripted::Fail {
                code,
                stdout: stdout.to_string(),
                stderr: stderr.to_string(),
            },
        );
        self
    }

    pub fn missing(mut self, program: &str) -> Self {
        self.script.insert(program.to_string(), Scripted::Missing);
        self
    }

    /// Every argv run so far, in order.
    pub fn invocations(&self) -> Vec<Vec<String>> {
        self.invocations.lock().unwrap().clone()
    }

    /// Program names run so far, in order.
    pub fn programs(&self) -> Vec<String> {
        self.invocations()
            .into_iter()
            .filter_map(|argv| argv.into_iter().next())
            .collect()
    }

    fn run(&self, cmd: &CommandLine, capture: bool) -> Result<String, RunError> {
        let program = cmd.program().ok_or(RunError::EmptyCommand)?.to_string();

        if let Some(Scripted::Missing) = self.script.get(&program) {
            return Err(RunError::NotFound { name: program });
        }

        debug!(program = %program, argv = %cmd, "fake runner invoked");
        self.invocations.lock().unwrap().push(cmd.argv().to_vec());

        match self.script.get(&program) {
            Some(Scripted::Fail {
                code,
                stdout,
                stderr,
            }) => Err(RunError::ExecutionFailed {
                program,
                status: ExitDetail::from_code(*code),
                stdout: if capture { stdout.clone() } else { String::new() },
                stderr: if capture { stderr.clone() } else { String::new() },
            }),
            Some(Scripted::Succeed(stdout)) => Ok(stdout.clone()),
            _ => Ok(String::new()),
        }
    }
}

impl Runner for FakeRunner {
    fn exec(&self, cmd: &CommandLine) -> Result<(), RunError> {
        self.run(cmd, false).map(|_| ())
    }

    fn out_err(&self, cmd: &CommandLine) -> Result<String, RunError> {
        self.run(cmd, true)
    }
}
