//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::task::AccumulationPolicy;

/// Top-level CLI parser for `axis`.
#[derive(Debug, Parser)]
#[command(name = "axis", version, about = "Turn journal entries into a task list")]
pub struct Cli {
    /// Store directory (overrides `AXIS_STORE`).
    #[arg(long, global = true, value_name = "DIR")]
    pub store: Option<PathBuf>,

    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract tasks from journal text and add them to the list.
    Extract {
        /// Journal text. Falls back to `--file`, then to the saved draft.
        text: Option<String>,
        /// Read the journal text from a file.
        #[arg(long, conflicts_with = "text")]
        file: Option<PathBuf>,
        /// How extracted tasks are combined with the stored list.
        #[arg(long, value_enum, default_value_t = PolicyArg::Append)]
        policy: PolicyArg,
    },
    /// List tasks.
    Tasks {
        /// Include completed tasks.
        #[arg(long)]
        all: bool,
    },
    /// Mark a task completed.
    Done {
        /// Task id.
        id: String,
    },
    /// Mark a task not completed.
    Undo {
        /// Task id.
        id: String,
    },
    /// Change a task's text.
    Edit {
        /// Task id.
        id: String,
        /// New text.
        text: String,
    },
    /// Delete a task.
    Delete {
        /// Task id.
        id: String,
    },
    /// Inspect past journal entries.
    Journal {
        /// Journal action.
        #[command(subcommand)]
        action: JournalCommand,
    },
    /// Remove all tasks, the draft and the journal history.
    Reset,
}

/// `axis journal` subcommands.
#[derive(Debug, Subcommand)]
pub enum JournalCommand {
    /// List past entries, newest first.
    List,
    /// Delete an entry.
    Delete {
        /// Entry id.
        id: String,
    },
}

/// Command-line spelling of [`AccumulationPolicy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PolicyArg {
    /// Add new tasks after the stored ones, then drop duplicates.
    Append,
    /// Rebuild the list from the new tasks, carrying state over from matches.
    Replace,
}

impl From<PolicyArg> for AccumulationPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Append => Self::Append,
            PolicyArg::Replace => Self::Replace,
        }
    }
}
