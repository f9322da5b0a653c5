//! Recording adapters that capture interactions to cassettes.

pub mod id_gen;

pub use id_gen::RecordingIdGenerator;

use std::sync::{Arc, Mutex};

use serde::Serialize;

use crate::cassette::recorder::CassetteRecorder;

/// Record one port call and its return value.
///
/// Values that fail to serialize are stored as `null` so a recording run
/// never aborts the load test it is observing.
pub(crate) fn record_interaction<I, O>(
    recorder: &Arc<Mutex<CassetteRecorder>>,
    port: &str,
    method: &str,
    input: &I,
    output: &O,
) where
    I: Serialize,
    O: Serialize,
{
    let input = serde_json::to_value(input).unwrap_or_else(|err| {
        tracing::warn!(port, method, %err, "failed to serialize recorded input");
        serde_json::Value::Null
    });
    let output = serde_json::to_value(output).unwrap_or_else(|err| {
        tracing::warn!(port, method, %err, "failed to serialize recorded output");
        serde_json::Value::Null
    });

    let mut guard = recorder.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    guard.record(port, method, input, output);
}
