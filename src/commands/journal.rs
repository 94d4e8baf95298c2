//! `axis journal` commands.

use std::fmt::Write as _;
use std::path::Path;

use crate::context::ServiceContext;
use crate::journal::JournalEntry;
use crate::store::TaskStore;

const PREVIEW_CHARS: usize = 60;

/// Execute `journal list`: past entries, newest first.
///
/// # Errors
///
/// Returns an error string if the entries cannot be loaded.
pub fn list(ctx: &ServiceContext, store_root: &Path) -> Result<(), String> {
    let entries = TaskStore::new(ctx, store_root).journal_entries().map_err(|e| e.to_string())?;
    print!("{}", render(&entries));
    Ok(())
}

/// Execute `journal delete`.
///
/// # Errors
///
/// Returns an error string for an unknown id or a store failure.
pub fn delete(ctx: &ServiceContext, store_root: &Path, id: &str) -> Result<(), String> {
    let removed =
        TaskStore::new(ctx, store_root).delete_journal_entry(id).map_err(|e| e.to_string())?;
    if !removed {
        return Err(format!("Journal entry not found: {id}"));
    }
    println!("Deleted journal entry {id}");
    Ok(())
}

/// Renders entries newest first, one line each.
#[must_use]
pub fn render(entries: &[JournalEntry]) -> String {
    if entries.is_empty() {
        return "No journal entries yet.\n".to_string();
    }
    let mut out = String::new();
    for entry in entries.iter().rev() {
        let _ = writeln!(
            out,
            "{}  {}  {} task(s)  {}",
            entry.id,
            entry.timestamp.format("%Y-%m-%d %H:%M"),
            entry.tasks_generated.len(),
            entry.preview(PREVIEW_CHARS),
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::adapters::live::LiveFileSystem;
    use crate::config::Config;

    fn entry(id: &str, day: u32, text: &str) -> JournalEntry {
        JournalEntry {
            id: id.into(),
            text: text.into(),
            timestamp: Utc.with_ymd_and_hms(2025, 3, day, 9, 0, 0).unwrap(),
            tasks_generated: vec!["Buy milk".into()],
        }
    }

    #[test]
    fn renders_newest_first() {
        let out = render(&[entry("j1", 1, "Monday notes"), entry("j2", 2, "Tuesday notes")]);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "j2  2025-03-02 09:00  1 task(s)  Tuesday notes");
        assert!(lines[1].starts_with("j1"));
    }

    #[test]
    fn empty_history() {
        assert_eq!(render(&[]), "No journal entries yet.\n");
    }

    #[test]
    fn delete_reports_unknown_entry() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = ServiceContext::live(&Config::default()).with_fs(Box::new(LiveFileSystem));
        TaskStore::new(&ctx, dir.path()).save_journal_entry(entry("j1", 1, "Notes")).unwrap();

        assert_eq!(delete(&ctx, dir.path(), "nope").unwrap_err(), "Journal entry not found: nope");
        delete(&ctx, dir.path(), "j1").unwrap();
        assert!(TaskStore::new(&ctx, dir.path()).journal_entries().unwrap().is_empty());
    }
}
