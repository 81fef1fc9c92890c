//! Progress sink adapters.

use std::sync::Mutex;
use std::time::Instant;

use fabgen_core::application::ports::{ProgressLevel, ProgressSink};

/// One recorded progress event, with its elapsed-time marker.
#[derive(Debug, Clone)]
pub struct RecordedEvent {
    pub level: ProgressLevel,
    pub message: String,
    pub payload: Option<serde_json::Value>,
    pub elapsed_secs: f64,
}

/// Collects events in memory for assertions.
///
/// Owns its start instant, taken at construction; two collectors never
/// share elapsed-time state.
#[derive(Debug)]
pub struct CollectingProgress {
    started: Instant,
    events: Mutex<Vec<RecordedEvent>>,
}

impl CollectingProgress {
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
            events: Mutex::new(Vec::new()),
        }
    }

    pub fn events(&self) -> Vec<RecordedEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter(|e| e.level == ProgressLevel::Error)
            .map(|e| e.message)
            .collect()
    }
}

impl Default for CollectingProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressSink for CollectingProgress {
    fn emit(&self, level: ProgressLevel, message: &str, payload: Option<serde_json::Value>) {
        self.events.lock().unwrap().push(RecordedEvent {
            level,
            message: message.to_string(),
            payload,
            elapsed_secs: self.started.elapsed().as_secs_f64(),
        });
    }
}
