// tests/batch_files.rs

mod common;
use crate::common::init_tracing;

use std::error::Error;
use std::io::Write;
use std::path::PathBuf;

use runseq::cli::CliArgs;
use runseq::config::{RunMode, load_and_validate};
use runseq::errors::RunseqError;
use runseq_test_utils::builders::BatchFileBuilder;
use tempfile::NamedTempFile;

type TestResult = Result<(), Box<dyn Error>>;

fn demo(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("demos").join(name)
}

fn cli_for(path: &std::path::Path) -> CliArgs {
    CliArgs {
        config: path.display().to_string(),
        mode: None,
        log_level: None,
        dry_run: false,
    }
}

#[test]
fn capture_demo_loads_in_file_order() -> TestResult {
    let file = load_and_validate(demo("capture.toml"))?;

    assert_eq!(file.mode(), RunMode::Capture);
    let batch = file.to_batch();
    let lines: Vec<String> = batch.iter().map(ToString::to_string).collect();
    assert_eq!(lines, vec!["ls -d /tmp", "true", "echo wow"]);

    Ok(())
}

#[test]
fn options_demo_appends_long_options() -> TestResult {
    let file = load_and_validate(demo("options.toml"))?;

    assert_eq!(file.mode(), RunMode::Exec);
    let batch = file.to_batch();
    let first = batch.iter().next().expect("demo has commands");
    assert_eq!(
        first.argv(),
        ["echo", "building", "--profile", "release", "--quiet", ""]
    );

    Ok(())
}

#[test]
fn missing_file_is_an_io_error() {
    let err = load_and_validate(demo("does-not-exist.toml")).unwrap_err();
    assert!(matches!(err, RunseqError::IoError(_)));
}

#[test]
fn empty_file_is_a_config_error() -> TestResult {
    let file = NamedTempFile::new()?;

    match load_and_validate(file.path()) {
        Err(RunseqError::ConfigError(msg)) => assert!(msg.contains("[[command]]")),
        Err(e) => panic!("Expected ConfigError, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }

    Ok(())
}

#[test]
fn builder_produces_runnable_batch() {
    let file = BatchFileBuilder::new()
        .mode(RunMode::Capture)
        .command(&["echo", "a"])
        .command(&["echo", "b"])
        .build();

    assert_eq!(file.commands().len(), 2);
    assert_eq!(file.to_batch().len(), 2);
}

#[test]
fn dry_run_does_not_execute() -> TestResult {
    init_tracing();

    let dir = tempfile::tempdir()?;
    let marker = dir.path().join("ran");
    let mut file = NamedTempFile::new()?;
    write!(
        file,
        r#"
[[command]]
argv = ["touch", "{}"]
"#,
        marker.display()
    )?;

    let mut args = cli_for(file.path());
    args.dry_run = true;

    assert_eq!(runseq::run(args)?, 0);
    assert!(!marker.exists());

    Ok(())
}

#[cfg(unix)]
#[test]
fn run_returns_failing_exit_code() -> TestResult {
    init_tracing();

    let mut file = NamedTempFile::new()?;
    write!(
        file,
        r#"
[[command]]
argv = ["true"]

[[command]]
argv = ["sh", "-c", "exit 4"]

[[command]]
argv = ["false"]
"#
    )?;

    assert_eq!(runseq::run(cli_for(file.path()))?, 4);

    let mut args = cli_for(file.path());
    args.mode = Some(runseq::cli::ModeArg::Capture);
    assert_eq!(runseq::run(args)?, 4);

    Ok(())
}

#[cfg(unix)]
#[test]
fn run_succeeds_for_capture_demo() -> TestResult {
    init_tracing();

    assert_eq!(runseq::run(cli_for(&demo("capture.toml")))?, 0);

    Ok(())
}
