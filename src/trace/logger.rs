use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

use tracing::{debug, warn};

use crate::trace::trace::TraceEvent;

/// Records pipeline stages.
///
/// Every event goes to the `tracing` log at debug level; when a trace file
/// is configured it is also appended there as one JSON line. A trace file
/// that cannot be opened or written never fails generation.
pub struct TraceLogger {
    sink: Option<Mutex<File>>,
}

impl TraceLogger {
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let sink = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| warn!("could not open trace file '{}': {}", path.display(), e))
            .ok()
            .map(Mutex::new);

        Self { sink }
    }

    pub fn disabled() -> Self {
        Self { sink: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.sink.is_some()
    }

    pub fn log(&self, event: &TraceEvent) {
        debug!(
            stage = %event.stage,
            count = ?event.count,
            detail = ?event.detail,
            "pipeline stage complete"
        );

        let Some(sink) = &self.sink else {
            return;
        };

        let line = match serde_json::to_string(event) {
            Ok(line) => line,
            Err(e) => {
                warn!("failed to serialize trace event for '{}': {}", event.stage, e);
                return;
            }
        };

        match sink.lock() {
            Ok(mut file) => {
                if let Err(e) = writeln!(file, "{}", line) {
                    warn!("failed to write trace event: {}", e);
                }
            }
            Err(e) => warn!("trace file lock poisoned: {}", e),
        }
    }
}
