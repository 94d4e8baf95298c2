//! Recording adapters that capture interactions to a cassette.
//!
//! Each adapter delegates to an inner (usually live) implementation and
//! records the call's input and output in the shared session recorder.

pub mod clock;
pub mod filesystem;
pub mod id_gen;
pub mod llm;

use std::sync::{Arc, Mutex};

use serde::Serialize;
use serde_json::{json, Value};

use crate::cassette::recorder::CassetteRecorder;

pub use clock::RecordingClock;
pub use filesystem::RecordingFileSystem;
pub use id_gen::RecordingIdGenerator;
pub use llm::RecordingLlmClient;

/// Shared handle to the session recorder.
pub type SharedRecorder = Arc<Mutex<CassetteRecorder>>;

fn to_json<T: Serialize>(value: &T) -> Value {
    serde_json::to_value(value)
        .unwrap_or_else(|e| json!({ "unserializable": e.to_string() }))
}

/// Record an interaction with a plain (non-`Result`) return value.
pub(crate) fn record_interaction<I, O>(
    recorder: &SharedRecorder,
    port: &str,
    method: &str,
    input: &I,
    output: &O,
) where
    I: Serialize,
    O: Serialize,
{
    let (input, output) = (to_json(input), to_json(output));
    recorder.lock().expect("recorder lock poisoned").record(port, method, input, output);
}

/// Record a `Result` as `{"ok": value}` or `{"err": "message"}`, the shape
/// the replaying adapters decode.
pub(crate) fn record_result<T, E, I>(
    recorder: &SharedRecorder,
    port: &str,
    method: &str,
    input: &I,
    result: &Result<T, E>,
) where
    T: Serialize,
    E: std::fmt::Display,
    I: Serialize,
{
    let output = match result {
        Ok(v) => json!({ "ok": to_json(v) }),
        Err(e) => json!({ "err": e.to_string() }),
    };
    let input = to_json(input);
    recorder.lock().expect("recorder lock poisoned").record(port, method, input, output);
}
