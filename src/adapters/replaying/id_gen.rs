//! Replaying adapter for the `IdGenerator` port.

use super::{next_output, SharedReplayer};
use crate::ports::id_gen::IdGenerator;

/// Replays recorded ids from a cassette.
pub struct ReplayingIdGenerator {
    replayer: SharedReplayer,
}

impl ReplayingIdGenerator {
    /// Creates a replaying id generator backed by `replayer`.
    #[must_use]
    pub fn new(replayer: SharedReplayer) -> Self {
        Self { replayer }
    }
}

impl IdGenerator for ReplayingIdGenerator {
    fn generate_id(&self) -> String {
        let output = next_output(&self.replayer, "id_gen", "generate_id");
        output.as_str().expect("id_gen::generate_id: recorded output is not a string").to_string()
    }
}
