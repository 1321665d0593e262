use std::sync::{Arc, Mutex};

use runseq::LogSink;

/// A `LogSink` that keeps every line it receives.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }
}

impl LogSink for RecordingSink {
    fn log(&self, line: &str) {
        self.lines.lock().unwrap().push(line.to_string());
    }
}
