//! `axis tasks` command.

use std::fmt::Write as _;
use std::path::Path;

use crate::context::ServiceContext;
use crate::store::TaskStore;
use crate::task::list::{completed_count, pending};
use crate::task::Task;

/// Execute the `tasks` command.
///
/// Prints pending tasks, or every task when `all` is set.
///
/// # Errors
///
/// Returns an error string if the task list cannot be loaded.
pub fn run_with_context(ctx: &ServiceContext, store_root: &Path, all: bool) -> Result<(), String> {
    let tasks = TaskStore::new(ctx, store_root).load_tasks().map_err(|e| e.to_string())?;
    print!("{}", render(&tasks, all));
    Ok(())
}

/// Renders the task list as printed by `axis tasks`.
#[must_use]
pub fn render(tasks: &[Task], all: bool) -> String {
    if tasks.is_empty() {
        return "No tasks yet. Start by journaling.\n".to_string();
    }

    let shown: Vec<&Task> = if all { tasks.iter().collect() } else { pending(tasks).collect() };
    let done = completed_count(tasks);
    let mut out = String::new();

    if shown.is_empty() {
        out.push_str("All tasks completed!\n");
    } else {
        let id_width = shown.iter().map(|t| t.id.len()).max().unwrap_or(2).max(2);
        for task in &shown {
            let mark = if task.completed { "x" } else { " " };
            let _ = writeln!(out, "[{mark}] {:<id_width$}  {}", task.id, task.text);
        }
    }

    let _ = writeln!(out, "\n{done}/{} completed", tasks.len());
    out
}
