//! `axis done`, `undo`, `edit` and `delete` commands.

use std::path::Path;

use tracing::info;

use crate::context::ServiceContext;
use crate::store::TaskStore;
use crate::task::{list, Task};

/// Loads the task list, applies `change` and saves the result.
fn update<T>(
    ctx: &ServiceContext,
    store_root: &Path,
    change: impl FnOnce(&mut Vec<Task>) -> list::Result<T>,
) -> Result<T, String> {
    let store = TaskStore::new(ctx, store_root);
    let mut tasks = store.load_tasks().map_err(|e| e.to_string())?;
    let out = change(&mut tasks).map_err(|e| e.to_string())?;
    store.save_tasks(&tasks).map_err(|e| e.to_string())?;
    Ok(out)
}

/// Execute `done` (`completed = true`) or `undo` (`completed = false`).
///
/// # Errors
///
/// Returns an error string for an unknown id or a store failure.
pub fn set_completed(
    ctx: &ServiceContext,
    store_root: &Path,
    id: &str,
    completed: bool,
) -> Result<(), String> {
    update(ctx, store_root, |tasks| list::set_completed(tasks, id, completed))?;
    info!(id, completed, "task completion changed");
    println!("{} {id}", if completed { "Completed" } else { "Reopened" });
    Ok(())
}

/// Execute `edit`.
///
/// # Errors
///
/// Returns an error string for an unknown id, blank text or a store failure.
pub fn edit_text(ctx: &ServiceContext, store_root: &Path, id: &str, text: &str) -> Result<(), String> {
    update(ctx, store_root, |tasks| list::edit_text(tasks, id, text))?;
    println!("Updated {id}");
    Ok(())
}

/// Execute `delete`.
///
/// # Errors
///
/// Returns an error string for an unknown id or a store failure.
pub fn delete(ctx: &ServiceContext, store_root: &Path, id: &str) -> Result<(), String> {
    let removed = update(ctx, store_root, |tasks| list::remove(tasks, id))?;
    println!("Deleted {id}: {}", removed.text);
    Ok(())
}
