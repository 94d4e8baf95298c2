//! Task store: persistence for tasks, the journal draft and past entries.
//!
//! The store is a plain directory and uses the `FileSystem` port for all
//! I/O. Directory layout:
//!
//! ```text
//! <root>/
//!   ├── tasks.json
//!   └── journal/
//!       ├── draft.txt
//!       └── entries.json
//! ```

pub mod legacy;

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::context::ServiceContext;
use crate::journal::JournalEntry;
use crate::task::Task;

/// Errors raised by the task store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A store file exists but could not be read.
    #[error("Failed to read {path}: {reason}")]
    Read {
        /// File that failed.
        path: String,
        /// Underlying cause.
        reason: String,
    },

    /// A store file could not be written or removed.
    #[error("Failed to write {path}: {reason}")]
    Write {
        /// File that failed.
        path: String,
        /// Underlying cause.
        reason: String,
    },

    /// A store file holds invalid JSON.
    #[error("Failed to parse {path}: {reason}")]
    Parse {
        /// File that failed.
        path: String,
        /// Underlying cause.
        reason: String,
    },
}

/// Result alias for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Persistence layer for the task list and journal.
///
/// All I/O goes through `ctx.fs`, so the store works with live, recording
/// and replaying adapters alike.
pub struct TaskStore<'a> {
    ctx: &'a ServiceContext,
    root: PathBuf,
}

impl<'a> TaskStore<'a> {
    /// Creates a store rooted at `root`.
    #[must_use]
    pub fn new(ctx: &'a ServiceContext, root: &Path) -> Self {
        Self { ctx, root: root.to_path_buf() }
    }

    /// Loads the stored task list.
    ///
    /// A missing file yields an empty list. A legacy bucket layout is
    /// flattened and written back in the flat layout straight away.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid JSON, or
    /// the converted list cannot be saved.
    pub fn load_tasks(&self) -> Result<Vec<Task>> {
        let path = self.tasks_path();
        let Some(value) = self.read_json::<Value>(&path)? else {
            return Ok(Vec::new());
        };

        if value.is_array() {
            let tasks: Vec<Task> = from_value(&path, value)?;
            debug!(count = tasks.len(), "loaded tasks");
            return Ok(tasks);
        }

        if let Some(items) = legacy::flatten_buckets(&value) {
            info!("converting legacy task buckets to a flat list");
            let tasks: Vec<Task> = from_value(&path, Value::Array(items))?;
            self.save_tasks(&tasks)?;
            return Ok(tasks);
        }

        warn!(path = %path.display(), "task file is neither a list nor legacy buckets; ignoring it");
        Ok(Vec::new())
    }

    /// Saves the task list verbatim.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn save_tasks(&self, tasks: &[Task]) -> Result<()> {
        debug!(count = tasks.len(), "saving tasks");
        self.write_json(&self.tasks_path(), &tasks)
    }

    /// Loads the last submitted journal text, or an empty string.
    ///
    /// # Errors
    ///
    /// Returns an error if the draft exists but cannot be read.
    pub fn load_draft(&self) -> Result<String> {
        let path = self.draft_path();
        if !self.ctx.fs.exists(&path) {
            return Ok(String::new());
        }
        self.ctx.fs.read_to_string(&path).map_err(|e| read_error(&path, e))
    }

    /// Saves the journal draft.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    pub fn save_draft(&self, text: &str) -> Result<()> {
        let path = self.draft_path();
        self.ctx.fs.write(&path, text).map_err(|e| write_error(&path, e))
    }

    /// Returns all past journal entries, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the entries file cannot be read or parsed.
    pub fn journal_entries(&self) -> Result<Vec<JournalEntry>> {
        Ok(self.read_json(&self.entries_path())?.unwrap_or_default())
    }

    /// Appends a journal entry.
    ///
    /// # Errors
    ///
    /// Returns an error if the entries file cannot be read or written.
    pub fn save_journal_entry(&self, entry: JournalEntry) -> Result<()> {
        let mut entries = self.journal_entries()?;
        debug!(id = %entry.id, "saving journal entry");
        entries.push(entry);
        self.write_json(&self.entries_path(), &entries)
    }

    /// Deletes the journal entry with `id`. Returns `false` if none matched.
    ///
    /// # Errors
    ///
    /// Returns an error if the entries file cannot be read or written.
    pub fn delete_journal_entry(&self, id: &str) -> Result<bool> {
        let mut entries = self.journal_entries()?;
        let before = entries.len();
        entries.retain(|e| e.id != id);
        if entries.len() == before {
            return Ok(false);
        }
        self.write_json(&self.entries_path(), &entries)?;
        Ok(true)
    }

    /// Removes the tasks, the draft and every journal entry.
    ///
    /// # Errors
    ///
    /// Returns an error if a file exists but cannot be removed.
    pub fn clear(&self) -> Result<()> {
        for path in [self.tasks_path(), self.draft_path(), self.entries_path()] {
            self.ctx.fs.remove_file(&path).map_err(|e| write_error(&path, e))?;
        }
        info!(root = %self.root.display(), "store cleared");
        Ok(())
    }

    fn tasks_path(&self) -> PathBuf {
        self.root.join("tasks.json")
    }

    fn draft_path(&self) -> PathBuf {
        self.root.join("journal").join("draft.txt")
    }

    fn entries_path(&self) -> PathBuf {
        self.root.join("journal").join("entries.json")
    }

    fn read_json<T: DeserializeOwned>(&self, path: &Path) -> Result<Option<T>> {
        if !self.ctx.fs.exists(path) {
            return Ok(None);
        }
        let raw = self.ctx.fs.read_to_string(path).map_err(|e| read_error(path, e))?;
        serde_json::from_str(&raw).map(Some).map_err(|e| parse_error(path, e))
    }

    fn write_json<T: Serialize + ?Sized>(&self, path: &Path, value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value).map_err(|e| write_error(path, e))?;
        self.ctx.fs.write(path, &json).map_err(|e| write_error(path, e))
    }
}

fn from_value<T: DeserializeOwned>(path: &Path, value: Value) -> Result<T> {
    serde_json::from_value(value).map_err(|e| parse_error(path, e))
}

fn read_error(path: &Path, reason: impl ToString) -> StoreError {
    StoreError::Read { path: path.display().to_string(), reason: reason.to_string() }
}

fn write_error(path: &Path, reason: impl ToString) -> StoreError {
    StoreError::Write { path: path.display().to_string(), reason: reason.to_string() }
}

fn parse_error(path: &Path, reason: impl ToString) -> StoreError {
    StoreError::Parse { path: path.display().to_string(), reason: reason.to_string() }
}
