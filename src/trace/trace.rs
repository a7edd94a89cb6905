use serde::Serialize;
use std::time::{SystemTime, UNIX_EPOCH};

/// One line of the generation trace: what a pipeline stage produced.
#[derive(Debug, Serialize)]
pub struct TraceEvent {
    pub timestamp_ms: u128,
    pub stage: String,

    pub count: Option<usize>,
    pub detail: Option<String>,
}

impl TraceEvent {
    pub fn now(stage: &str) -> Self {
        Self {
            timestamp_ms: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis())
                .unwrap_or_default(),
            stage: stage.to_string(),
            count: None,
            detail: None,
        }
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }

    pub fn with_detail(mut self, detail: impl ToString) -> Self {
        self.detail = Some(detail.to_string());
        self
    }
}
