//! Live adapter for the `EventEmitter` port.

use serde_json::Value;

use crate::ports::EventEmitter;

/// Forwards hook events to `tracing` at info level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingEventEmitter;

impl EventEmitter for TracingEventEmitter {
    fn emit(&self, event: &str, payload: &Value) {
        tracing::info!(target: "loadhooks::events", event, %payload, "hook event");
    }
}
