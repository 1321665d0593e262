// src/exec/sink.rs

//! Diagnostic sink for best-effort invocations.

use tracing::warn;

/// Receives one human-readable line per reported problem.
pub trait LogSink {
    fn log(&self, line: &str);
}

/// Default sink: forwards every line to `tracing` at WARN level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn log(&self, line: &str) {
        warn!(target: "runseq::exec", "{line}");
    }
}

impl<F: Fn(&str)> LogSink for F {
    fn log(&self, line: &str) {
        self(line)
    }
}
