//! Recording session shared by every recording adapter.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use chrono::Utc;

use super::recorder::CassetteRecorder;

/// Owns the recorder that all recording adapters of one command write into.
///
/// The cassette lands at `<dir>/<timestamp>.cassette.yaml` when the session
/// is finished.
pub struct RecordingSession {
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingSession {
    /// Starts a session writing into `dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn new(dir: &Path) -> Result<Self, String> {
        std::fs::create_dir_all(dir)
            .map_err(|e| format!("Failed to create cassette directory {}: {e}", dir.display()))?;
        let timestamp = Utc::now().format("%Y-%m-%dT%H-%M-%S%.3f").to_string();
        let path = dir.join(format!("{timestamp}.cassette.yaml"));
        let recorder = CassetteRecorder::new(path, format!("axis-{timestamp}"));
        Ok(Self { recorder: Arc::new(Mutex::new(recorder)) })
    }

    /// Handle given to each recording adapter.
    #[must_use]
    pub fn recorder(&self) -> Arc<Mutex<CassetteRecorder>> {
        Arc::clone(&self.recorder)
    }

    /// Writes the cassette and returns its path.
    ///
    /// Every adapter holding a recorder handle must be dropped first.
    ///
    /// # Errors
    ///
    /// Returns an error if an adapter still holds the recorder or the file
    /// cannot be written.
    pub fn finish(self) -> Result<PathBuf, String> {
        let recorder = Arc::try_unwrap(self.recorder)
            .map_err(|_| "Recording adapters still hold the cassette recorder".to_string())?
            .into_inner()
            .map_err(|e| format!("Cassette recorder lock poisoned: {e}"))?;
        recorder.finish().map_err(|e| format!("Failed to write cassette: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cassette::format::Cassette;

    #[test]
    fn finish_writes_cassette_into_directory() {
        let dir = tempfile::tempdir().unwrap();
        let session = RecordingSession::new(dir.path()).unwrap();
        session.recorder().lock().unwrap().record(
            "clock",
            "now",
            serde_json::json!({}),
            serde_json::json!("2025-01-01T00:00:00Z"),
        );

        let path = session.finish().unwrap();
        assert!(path.starts_with(dir.path()));
        assert_eq!(Cassette::load(&path).unwrap().interactions.len(), 1);
    }

    #[test]
    fn finish_fails_while_a_handle_is_alive() {
        let dir = tempfile::tempdir().unwrap();
        let session = RecordingSession::new(dir.path()).unwrap();
        let _held = session.recorder();
        assert!(session.finish().is_err());
    }
}
