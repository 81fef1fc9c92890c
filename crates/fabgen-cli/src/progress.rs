//! Console progress sink for pipeline runs.
//!
//! Renders each pipeline event as a timestamped line with a monotonic
//! elapsed-time marker, mirroring everything into `tracing` so the same
//! events reach the optional log file.

use std::sync::Arc;
use std::time::Instant;

use chrono::Local;
use tracing::{debug, error as terror, info as tinfo};

use fabgen_core::application::ports::{ProgressLevel, ProgressSink};

use crate::output::OutputManager;

/// Progress sink writing to the terminal via [`OutputManager`].
///
/// Owns its start instant, taken at construction and never shared: two
/// `ConsoleProgress` values report independent elapsed times, so repeated
/// pipeline runs inside one process do not bleed timers into each other.
pub struct ConsoleProgress {
    started: Instant,
    out: Arc<OutputManager>,
}

impl ConsoleProgress {
    pub fn new(out: Arc<OutputManager>) -> Self {
        Self {
            started: Instant::now(),
            out,
        }
    }

    fn stamp(&self, message: &str) -> String {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        let elapsed = self.started.elapsed().as_secs_f64();
        format!("[{timestamp}] [{elapsed:.2}s] {message}")
    }
}

impl ProgressSink for ConsoleProgress {
    fn emit(&self, level: ProgressLevel, message: &str, payload: Option<serde_json::Value>) {
        let line = self.stamp(message);

        // Terminal rendering; write errors here are not actionable.
        let _ = match level {
            ProgressLevel::Info => self.out.print(&line),
            ProgressLevel::Success => self.out.success(&line),
            ProgressLevel::Error => self.out.error(&line),
            ProgressLevel::Step => self.out.stage(&line),
        };

        // Structured mirror for RUST_LOG consumers and --log-file.
        match level {
            ProgressLevel::Error => terror!(target: "fabgen", "{message}"),
            _ => tinfo!(target: "fabgen", "{message}"),
        }
        if let Some(payload) = payload {
            debug!(target: "fabgen", payload = %payload, "event payload");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::global::{GlobalArgs, OutputFormat};
    use crate::config::AppConfig;

    fn progress() -> ConsoleProgress {
        let args = GlobalArgs {
            verbose: 0,
            quiet: true, // keep test output silent
            no_color: true,
            config: None,
            log_file: None,
            output_format: OutputFormat::Plain,
        };
        ConsoleProgress::new(Arc::new(OutputManager::new(&args, &AppConfig::default())))
    }

    #[test]
    fn stamp_contains_elapsed_marker() {
        let p = progress();
        let line = p.stamp("analyzing");
        assert!(line.contains("s] analyzing"));
        assert!(line.starts_with('['));
    }

    #[test]
    fn emit_does_not_panic_for_any_level() {
        let p = progress();
        for level in [
            ProgressLevel::Info,
            ProgressLevel::Success,
            ProgressLevel::Error,
            ProgressLevel::Step,
        ] {
            p.emit(level, "msg", Some(serde_json::json!({"k": 1})));
        }
    }
}
