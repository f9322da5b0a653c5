//! Event emission port exposed to hooks by the host engine.

use serde_json::Value;

/// Sink for events a hook may report back to the host (timings, counters).
pub trait EventEmitter: Send + Sync {
    /// Emits a named event with an arbitrary payload.
    fn emit(&self, event: &str, payload: &Value);
}

/// Emitter that discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopEventEmitter;

impl EventEmitter for NoopEventEmitter {
    fn emit(&self, _event: &str, _payload: &Value) {}
}
