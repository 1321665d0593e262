// src/exec/resolve.rs

//! Executable lookup on the search path.

use std::path::PathBuf;

use tracing::trace;

use crate::command::CommandLine;
use crate::errors::RunError;

/// Resolve the executable named by `cmd`.
///
/// An empty argv is rejected before any lookup is attempted. Names that
/// contain a path separator are checked as paths rather than searched for.
pub fn resolve(cmd: &CommandLine) -> Result<PathBuf, RunError> {
    let name = cmd.program().ok_or(RunError::EmptyCommand)?;

    let path = which::which(name).map_err(|_| RunError::NotFound {
        name: name.to_string(),
    })?;

    trace!(program = name, path = %path.display(), "resolved executable");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;

    #[test]
    fn empty_argv_is_rejected_first() {
        let err = resolve(&CommandLine::default()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::EmptyCommand);
    }

    #[test]
    fn unknown_name_is_not_found() {
        let cmd = CommandLine::from(["runseq-definitely-not-a-real-binary"]);
        match resolve(&cmd) {
            Err(RunError::NotFound { name }) => {
                assert_eq!(name, "runseq-definitely-not-a-real-binary");
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn common_tool_is_found_on_path() {
        let path = resolve(&CommandLine::from(["sh"])).unwrap();
        assert!(path.is_absolute());
        assert!(path.ends_with("sh"));
    }

    #[cfg(unix)]
    #[test]
    fn missing_path_component_is_not_found() {
        let cmd = CommandLine::from(["/nopenothear/bin/tool"]);
        assert_eq!(resolve(&cmd).unwrap_err().kind(), ErrorKind::NotFound);
    }
}
