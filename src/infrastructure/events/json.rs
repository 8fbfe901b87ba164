//! JSON Event Sink
//!
//! Outputs generate events as NDJSON for CI/automation consumption.

use crate::domain::ports::{GenerateEvent, GenerateEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl GenerateEventSink for JsonEventSink {
    fn on_event(&self, event: GenerateEvent) {
        let json = match event {
            GenerateEvent::Migrated { from, to } => serde_json::json!({
                "event": "migrated",
                "command": "init",
                "from": from.display().to_string(),
                "to": to.display().to_string(),
            }),

            GenerateEvent::WouldMigrate { from, to } => serde_json::json!({
                "event": "would_migrate",
                "command": "init",
                "from": from.display().to_string(),
                "to": to.display().to_string(),
            }),

            GenerateEvent::LegacyPresent { path } => serde_json::json!({
                "event": "legacy_present",
                "command": "init",
                "path": path.display().to_string(),
            }),

            GenerateEvent::Created { path } => serde_json::json!({
                "event": "created",
                "command": "init",
                "path": path.display().to_string(),
            }),

            GenerateEvent::WouldCreate { path } => serde_json::json!({
                "event": "would_create",
                "command": "init",
                "path": path.display().to_string(),
            }),

            GenerateEvent::Skipped { path } => serde_json::json!({
                "event": "skipped",
                "command": "init",
                "path": path.display().to_string(),
                "reason": "exists",
            }),
        };

        self.write_event(json);
    }
}
