//! `axis extract` command.

use std::path::Path;

use tracing::info;

use crate::config::Config;
use crate::context::ServiceContext;
use crate::extract::{extract_tasks, ExtractError};
use crate::journal::JournalEntry;
use crate::store::TaskStore;
use crate::task::{reconcile, AccumulationPolicy, Task};

/// Where the journal text for an extraction comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JournalInput {
    /// Text given on the command line or read from a file.
    Text(String),
    /// Re-run extraction on the saved draft.
    Draft,
}

/// Picks the journal input from the command-line arguments.
///
/// # Errors
///
/// Returns an error string if `file` cannot be read.
pub fn resolve_input(text: Option<&str>, file: Option<&Path>) -> Result<JournalInput, String> {
    if let Some(text) = text {
        return Ok(JournalInput::Text(text.to_string()));
    }
    if let Some(path) = file {
        return std::fs::read_to_string(path)
            .map(JournalInput::Text)
            .map_err(|e| format!("Failed to read {}: {e}", path.display()));
    }
    Ok(JournalInput::Draft)
}

/// Execute the `extract` command.
///
/// Saves the text as the draft, extracts tasks, folds them into the stored
/// list under `policy` and records a journal entry.
///
/// # Errors
///
/// Returns an error string for blank text, a failed extraction or a store
/// failure. The stored task list is left untouched on error.
pub async fn run_with_context(
    ctx: &ServiceContext,
    config: &Config,
    store_root: &Path,
    input: JournalInput,
    policy: AccumulationPolicy,
) -> Result<(), String> {
    let store = TaskStore::new(ctx, store_root);
    let text = match input {
        JournalInput::Text(text) => text,
        JournalInput::Draft => store.load_draft().map_err(|e| e.to_string())?,
    };
    if text.trim().is_empty() {
        return Err(ExtractError::EmptyJournal.to_string());
    }
    store.save_draft(&text).map_err(|e| e.to_string())?;

    let new_texts = extract_tasks(ctx, config, &text).await.map_err(|e| e.to_string())?;

    let existing = store.load_tasks().map_err(|e| e.to_string())?;
    let tasks = reconcile(policy, &new_texts, &existing, ctx.id_gen.as_ref());
    store.save_tasks(&tasks).map_err(|e| e.to_string())?;
    store
        .save_journal_entry(JournalEntry::record(ctx, &text, new_texts))
        .map_err(|e| e.to_string())?;

    let added = count_new(&existing, &tasks);
    info!(added, total = tasks.len(), ?policy, "extraction reconciled");
    println!("{}", summary(added, tasks.len()));
    Ok(())
}

/// Number of tasks in `after` whose id was not in `before`.
fn count_new(before: &[Task], after: &[Task]) -> usize {
    after.iter().filter(|t| !before.iter().any(|b| b.id == t.id)).count()
}

fn summary(added: usize, total: usize) -> String {
    format!("{added} new task(s), {total} total")
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use serde_json::{json, Value};

    use super::*;
    use crate::adapters::live::LiveFileSystem;
    use crate::cassette::format::{Cassette, Interaction};

    fn interaction(seq: u64, port: &str, method: &str, output: Value) -> Interaction {
        Interaction { seq, port: port.into(), method: method.into(), input: json!({}), output }
    }

    /// Replayed LLM, clock and ids; real disk under a tempdir.
    fn context(completion: &str, ids: &[&str]) -> ServiceContext {
        let mut interactions = vec![
            interaction(0, "llm", "complete", json!({"ok": {
                "text": completion,
                "prompt_tokens": 10,
                "completion_tokens": 5
            }})),
            interaction(1, "clock", "now", json!("2025-03-15T14:30:00Z")),
        ];
        for (i, id) in ids.iter().enumerate() {
            interactions.push(interaction(2 + i as u64, "id_gen", "generate_id", json!(id)));
        }
        let cassette = Cassette {
            name: "extract-command".into(),
            recorded_at: Utc::now(),
            version: "0.1.0".into(),
            interactions,
        };
        ServiceContext::from_cassette(&cassette).with_fs(Box::new(LiveFileSystem))
    }

    fn seed(ctx: &ServiceContext, root: &Path, tasks: &[Task]) {
        TaskStore::new(ctx, root).save_tasks(tasks).unwrap();
    }

    #[test]
    fn resolve_input_prefers_text_then_file_then_draft() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("today.md");
        std::fs::write(&file, "From file").unwrap();

        assert_eq!(
            resolve_input(Some("Inline"), None).unwrap(),
            JournalInput::Text("Inline".into())
        );
        assert_eq!(
            resolve_input(None, Some(&file)).unwrap(),
            JournalInput::Text("From file".into())
        );
        assert_eq!(resolve_input(None, None).unwrap(), JournalInput::Draft);
        assert!(resolve_input(None, Some(&dir.path().join("missing.md"))).is_err());
    }

    #[tokio::test]
    async fn append_keeps_history_and_drops_duplicates() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = context(r#"["buy milk!", "Call mom"]"#, &["n1", "n2", "j1"]);
        seed(&ctx, dir.path(), &[Task { id: "a".into(), text: "Buy milk".into(), completed: true }]);

        run_with_context(
            &ctx,
            &Config::default(),
            dir.path(),
            JournalInput::Text("Out of milk, should call mom".into()),
            AccumulationPolicy::Append,
        )
        .await
        .unwrap();

        let store = TaskStore::new(&ctx, dir.path());
        let tasks = store.load_tasks().unwrap();
        assert_eq!(
            tasks,
            vec![
                Task { id: "a".into(), text: "Buy milk".into(), completed: true },
                Task::new("n2", "Call mom"),
            ]
        );
        assert_eq!(store.load_draft().unwrap(), "Out of milk, should call mom");

        let entries = store.journal_entries().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, "j1");
        assert_eq!(entries[0].tasks_generated, vec!["buy milk!", "Call mom"]);
    }

    #[tokio::test]
    async fn replace_carries_completion_onto_new_text() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = context(r#"["Buy milk and eggs"]"#, &["j1"]);
        seed(
            &ctx,
            dir.path(),
            &[
                Task { id: "a".into(), text: "Buy milk".into(), completed: true },
                Task::new("b", "Stale task"),
            ],
        );

        run_with_context(
            &ctx,
            &Config::default(),
            dir.path(),
            JournalInput::Text("Groceries".into()),
            AccumulationPolicy::Replace,
        )
        .await
        .unwrap();

        let tasks = TaskStore::new(&ctx, dir.path()).load_tasks().unwrap();
        assert_eq!(
            tasks,
            vec![Task { id: "a".into(), text: "Buy milk and eggs".into(), completed: true }]
        );
    }

    #[tokio::test]
    async fn draft_is_used_when_no_text_given() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = context(r#"["Water plants"]"#, &["n1", "j1"]);
        TaskStore::new(&ctx, dir.path()).save_draft("Plants look dry").unwrap();

        run_with_context(
            &ctx,
            &Config::default(),
            dir.path(),
            JournalInput::Draft,
            AccumulationPolicy::Append,
        )
        .await
        .unwrap();

        let store = TaskStore::new(&ctx, dir.path());
        assert_eq!(store.load_tasks().unwrap(), vec![Task::new("n1", "Water plants")]);
        assert_eq!(store.journal_entries().unwrap()[0].text, "Plants look dry");
    }

    #[tokio::test]
    async fn blank_text_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = context("[]", &[]);

        let err = run_with_context(
            &ctx,
            &Config::default(),
            dir.path(),
            JournalInput::Draft,
            AccumulationPolicy::Append,
        )
        .await
        .unwrap_err();
        assert_eq!(err, "Write something first.");
    }

    #[tokio::test]
    async fn invalid_model_answer_leaves_tasks_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = context("Here you go: milk", &[]);
        let seeded = vec![Task::new("a", "Buy milk")];
        seed(&ctx, dir.path(), &seeded);

        let err = run_with_context(
            &ctx,
            &Config::default(),
            dir.path(),
            JournalInput::Text("Milk".into()),
            AccumulationPolicy::Append,
        )
        .await
        .unwrap_err();
        assert!(err.starts_with("Invalid AI response format"));
        assert_eq!(TaskStore::new(&ctx, dir.path()).load_tasks().unwrap(), seeded);
    }

    #[test]
    fn counts_only_fresh_ids() {
        let before = vec![Task::new("a", "A")];
        let after = vec![Task::new("a", "A"), Task::new("b", "B"), Task::new("c", "C")];
        assert_eq!(count_new(&before, &after), 2);
        assert_eq!(summary(2, 3), "2 new task(s), 3 total");
    }
}
