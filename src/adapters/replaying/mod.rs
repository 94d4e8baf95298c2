//! Replaying adapters that serve recorded interactions.
//!
//! All adapters built from one cassette share a single replayer; its
//! per-port queues keep them independent.

pub mod clock;
pub mod filesystem;
pub mod id_gen;
pub mod llm;

use std::sync::{Arc, Mutex};

use serde::de::DeserializeOwned;

use crate::cassette::replayer::CassetteReplayer;
use crate::ports::PortError;

pub use clock::ReplayingClock;
pub use filesystem::ReplayingFileSystem;
pub use id_gen::ReplayingIdGenerator;
pub use llm::ReplayingLlmClient;

/// Shared handle to a cassette replayer.
pub type SharedReplayer = Arc<Mutex<CassetteReplayer>>;

/// Takes the output of the next `port::method` interaction.
pub(crate) fn next_output(replayer: &SharedReplayer, port: &str, method: &str) -> serde_json::Value {
    let mut guard = replayer.lock().expect("replayer lock poisoned");
    guard.next_interaction(port, method).output
}

/// Decodes a recorded `Result` written as `{"ok": value}` or `{"err": "message"}`.
pub(crate) fn replay_result<T: DeserializeOwned>(
    output: serde_json::Value,
    context: &str,
) -> Result<T, PortError> {
    if let Some(err) = output.get("err") {
        return Err(err.as_str().unwrap_or("unknown error").to_string().into());
    }
    let value = output.get("ok").cloned().unwrap_or(output);
    serde_json::from_value(value)
        .map_err(|e| format!("{context}: failed to deserialize recorded output: {e}").into())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn replay_result_ok_and_err() {
        let ok: Result<String, _> = replay_result(json!({"ok": "hello"}), "test");
        assert_eq!(ok.unwrap(), "hello");

        let err: Result<String, _> = replay_result(json!({"err": "disk full"}), "test");
        assert_eq!(err.unwrap_err().to_string(), "disk full");
    }

    #[test]
    fn replay_result_accepts_bare_value() {
        let ok: Result<(), _> = replay_result(json!(null), "test");
        assert!(ok.is_ok());
    }

    #[test]
    fn replay_result_reports_shape_mismatch() {
        let bad: Result<u32, _> = replay_result(json!({"ok": "nope"}), "fs::read_to_string");
        assert!(bad.unwrap_err().to_string().starts_with("fs::read_to_string"));
    }
}
