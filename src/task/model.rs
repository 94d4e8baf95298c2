//! The persisted task record.

use serde::{Deserialize, Serialize};

/// A single actionable task extracted from a journal entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    /// Opaque identifier, stable once assigned.
    pub id: String,
    /// Display text as last extracted or edited.
    pub text: String,
    /// Whether the user has marked the task done.
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    /// Creates a task that has not been completed yet.
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self { id: id.into(), text: text.into(), completed: false }
    }
}
