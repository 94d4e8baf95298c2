//! Service context bundling all port trait objects.

use std::path::Path;
use std::sync::{Arc, Mutex};

use crate::adapters::live::{LiveClock, LiveFileSystem, LiveIdGenerator, LiveLlmClient};
use crate::adapters::recording::{
    RecordingClock, RecordingFileSystem, RecordingIdGenerator, RecordingLlmClient,
};
use crate::adapters::replaying::{
    ReplayingClock, ReplayingFileSystem, ReplayingIdGenerator, ReplayingLlmClient,
};
use crate::cassette::format::Cassette;
use crate::cassette::replayer::CassetteReplayer;
use crate::cassette::session::RecordingSession;
use crate::config::Config;
use crate::ports::{Clock, FileSystem, IdGenerator, LlmClient};

/// Bundles all port trait objects into a single context.
///
/// Each field provides access to one external boundary. Constructors
/// wire up different adapter implementations (live, recording, replaying).
pub struct ServiceContext {
    /// Clock for journal timestamps.
    pub clock: Box<dyn Clock>,
    /// Filesystem for the task store.
    pub fs: Box<dyn FileSystem>,
    /// Generator for fresh task and journal ids.
    pub id_gen: Box<dyn IdGenerator>,
    /// LLM client used for task extraction.
    pub llm: Box<dyn LlmClient>,
}

impl ServiceContext {
    /// Creates a context backed by the real clock, disk and LLM endpoint.
    #[must_use]
    pub fn live(config: &Config) -> Self {
        Self {
            clock: Box::new(LiveClock),
            fs: Box::new(LiveFileSystem),
            id_gen: Box::new(LiveIdGenerator),
            llm: Box::new(LiveLlmClient::new(config.api_url.clone(), config.api_key.clone())),
        }
    }

    /// Creates a live context whose every port call is recorded into `session`.
    #[must_use]
    pub fn recording(config: &Config, session: &RecordingSession) -> Self {
        let live = Self::live(config);
        Self {
            clock: Box::new(RecordingClock::new(live.clock, session.recorder())),
            fs: Box::new(RecordingFileSystem::new(live.fs, session.recorder())),
            id_gen: Box::new(RecordingIdGenerator::new(live.id_gen, session.recorder())),
            llm: Box::new(RecordingLlmClient::new(live.llm, session.recorder())),
        }
    }

    /// Creates a context that replays the cassette at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be read or parsed.
    pub fn replaying(path: &Path) -> Result<Self, String> {
        Ok(Self::from_cassette(&Cassette::load(path)?))
    }

    /// Creates a context that replays an in-memory cassette.
    #[must_use]
    pub fn from_cassette(cassette: &Cassette) -> Self {
        let replayer = Arc::new(Mutex::new(CassetteReplayer::new(cassette)));
        Self {
            clock: Box::new(ReplayingClock::new(Arc::clone(&replayer))),
            fs: Box::new(ReplayingFileSystem::new(Arc::clone(&replayer))),
            id_gen: Box::new(ReplayingIdGenerator::new(Arc::clone(&replayer))),
            llm: Box::new(ReplayingLlmClient::new(replayer)),
        }
    }

    /// Replaces the filesystem.
    #[must_use]
    pub fn with_fs(mut self, fs: Box<dyn FileSystem>) -> Self {
        self.fs = fs;
        self
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use serde_json::json;

    use super::*;
    use crate::cassette::format::Interaction;

    #[test]
    fn replaying_context_serves_each_port() {
        let cassette = Cassette {
            name: "test".into(),
            recorded_at: Utc::now(),
            version: "0.1.0".into(),
            interactions: vec![
                Interaction {
                    seq: 0,
                    port: "clock".into(),
                    method: "now".into(),
                    input: json!({}),
                    output: json!("2024-06-15T10:30:00Z"),
                },
                Interaction {
                    seq: 1,
                    port: "id_gen".into(),
                    method: "generate_id".into(),
                    input: json!({}),
                    output: json!("id-001"),
                },
                Interaction {
                    seq: 2,
                    port: "fs".into(),
                    method: "exists".into(),
                    input: json!({"path": "/store/tasks.json"}),
                    output: json!(false),
                },
            ],
        };

        let ctx = ServiceContext::from_cassette(&cassette);
        assert_eq!(ctx.clock.now().to_rfc3339(), "2024-06-15T10:30:00+00:00");
        assert_eq!(ctx.id_gen.generate_id(), "id-001");
        assert!(!ctx.fs.exists(Path::new("/store/tasks.json")));
    }

    #[test]
    fn replaying_missing_cassette_is_an_error() {
        let result = ServiceContext::replaying(Path::new("/nonexistent/none.cassette.yaml"));
        assert!(result.is_err());
    }
}
