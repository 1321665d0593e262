#![allow(dead_code)]

use std::path::Path;

use runseq::CommandLine;

pub use runseq_test_utils::init_tracing;

/// `touch <dir>/<name>`: leaves a marker proving the step was started.
pub fn touch(dir: &Path, name: &str) -> CommandLine {
    CommandLine::new(["touch".to_string(), dir.join(name).display().to_string()])
}

/// `sh -c 'touch <dir>/<name>; exit <code>'`: leaves a marker, then exits.
pub fn touch_and_exit(dir: &Path, name: &str, code: i32) -> CommandLine {
    let script = format!("touch '{}'; exit {code}", dir.join(name).display());
    CommandLine::new(["sh".to_string(), "-c".to_string(), script])
}

/// Names of the markers present in `dir`, sorted.
pub fn markers(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
