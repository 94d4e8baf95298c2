//! Journal entries: the free text a user submitted for extraction.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::context::ServiceContext;

/// A past journal submission and the task texts it produced.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    /// Opaque identifier.
    pub id: String,
    /// The journal text as submitted.
    pub text: String,
    /// When the entry was submitted.
    pub timestamp: DateTime<Utc>,
    /// Task texts the extraction returned for this entry.
    #[serde(default)]
    pub tasks_generated: Vec<String>,
}

impl JournalEntry {
    /// Creates an entry stamped with the context's clock and id generator.
    #[must_use]
    pub fn record(ctx: &ServiceContext, text: &str, tasks_generated: Vec<String>) -> Self {
        Self {
            id: ctx.id_gen.generate_id(),
            text: text.to_string(),
            timestamp: ctx.clock.now(),
            tasks_generated,
        }
    }

    /// First line of the text, shortened to `max_chars` characters.
    #[must_use]
    pub fn preview(&self, max_chars: usize) -> String {
        let first_line = self.text.lines().next().unwrap_or_default().trim();
        if first_line.chars().count() <= max_chars {
            return first_line.to_string();
        }
        let cut: String = first_line.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", cut.trim_end())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(text: &str) -> JournalEntry {
        JournalEntry {
            id: "j1".into(),
            text: text.into(),
            timestamp: Utc::now(),
            tasks_generated: vec![],
        }
    }

    #[test]
    fn preview_keeps_short_first_line() {
        assert_eq!(entry("Busy day.\nMore later").preview(40), "Busy day.");
    }

    #[test]
    fn preview_truncates_on_char_boundaries() {
        let preview = entry("Réunion avec l'équipe produit demain matin").preview(12);
        assert_eq!(preview, "Réunion a...");
        assert_eq!(preview.chars().count(), 12);
    }

    #[test]
    fn serializes_tasks_generated_in_camel_case() {
        let mut e = entry("Need milk");
        e.tasks_generated = vec!["Buy milk".into()];
        let json = serde_json::to_value(&e).unwrap();
        assert_eq!(json["tasksGenerated"][0], "Buy milk");
        assert!(json.get("tasks_generated").is_none());
    }

    #[test]
    fn reads_entries_saved_by_the_web_app() {
        let raw = r#"{
            "id": "1718000000000",
            "text": "Call the plumber",
            "timestamp": "2024-06-10T08:00:00Z",
            "tasksGenerated": ["Call the plumber about the leak"]
        }"#;
        let e: JournalEntry = serde_json::from_str(raw).unwrap();
        assert_eq!(e.tasks_generated, vec!["Call the plumber about the leak"]);
    }
}
