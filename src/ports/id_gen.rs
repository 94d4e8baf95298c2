//! ID generator port for fresh task and journal identifiers.

/// Generates unique identifiers.
///
/// Ids must never collide within a process lifetime; callers do not check.
/// Tests and cassette playback substitute a predictable sequence.
pub trait IdGenerator: Send + Sync {
    /// Generates a new unique identifier string.
    fn generate_id(&self) -> String;
}
