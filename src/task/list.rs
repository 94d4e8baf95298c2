//! In-place edits a user makes to a stored task list.

use thiserror::Error;

use super::model::Task;

/// Errors raised when editing a task list.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EditError {
    /// No task carries the requested id.
    #[error("Task not found: {0}")]
    NotFound(String),

    /// The replacement text was blank.
    #[error("Task text cannot be empty")]
    EmptyText,
}

/// Result alias for task list edits.
pub type Result<T> = std::result::Result<T, EditError>;

fn find_mut<'a>(tasks: &'a mut [Task], id: &str) -> Result<&'a mut Task> {
    tasks.iter_mut().find(|t| t.id == id).ok_or_else(|| EditError::NotFound(id.to_string()))
}

/// Marks the task with `id` as done or not done.
///
/// # Errors
///
/// Returns [`EditError::NotFound`] if no task has that id.
pub fn set_completed(tasks: &mut [Task], id: &str, completed: bool) -> Result<()> {
    find_mut(tasks, id)?.completed = completed;
    Ok(())
}

/// Replaces the text of the task with `id`, trimming surrounding whitespace.
///
/// # Errors
///
/// Returns [`EditError::EmptyText`] for blank text and
/// [`EditError::NotFound`] if no task has that id.
pub fn edit_text(tasks: &mut [Task], id: &str, text: &str) -> Result<()> {
    let text = text.trim();
    if text.is_empty() {
        return Err(EditError::EmptyText);
    }
    find_mut(tasks, id)?.text = text.to_string();
    Ok(())
}

/// Removes the task with `id` and returns it.
///
/// # Errors
///
/// Returns [`EditError::NotFound`] if no task has that id.
pub fn remove(tasks: &mut Vec<Task>, id: &str) -> Result<Task> {
    let index = tasks
        .iter()
        .position(|t| t.id == id)
        .ok_or_else(|| EditError::NotFound(id.to_string()))?;
    Ok(tasks.remove(index))
}

/// Tasks that are not completed yet, in list order.
pub fn pending(tasks: &[Task]) -> impl Iterator<Item = &Task> {
    tasks.iter().filter(|t| !t.completed)
}

/// Number of completed tasks.
#[must_use]
pub fn completed_count(tasks: &[Task]) -> usize {
    tasks.iter().filter(|t| t.completed).count()
}
