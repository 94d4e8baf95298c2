//! Core library entry for the `axis` CLI.
//!
//! `axis` turns free-text journal entries into a task list. A language model
//! extracts task strings; [`task::reconcile`] folds them into the stored
//! list so that tasks the user already ticked off stay ticked off.

pub mod adapters;
pub mod cassette;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod extract;
pub mod journal;
pub mod ports;
pub mod store;
pub mod task;

use clap::Parser;

use crate::config::Config;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = cli::Cli::try_parse_from(args).map_err(|err| err.to_string())?;
    let mut config = Config::from_env();
    if let Some(store) = cli.store {
        config.store_root = store;
    }
    commands::dispatch(&cli.command, &config)
}

#[cfg(test)]
mod tests {
    use super::run;

    #[test]
    fn run_lists_tasks_in_fresh_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = dir.path().to_str().unwrap();
        assert!(run(["axis", "--store", store, "tasks"]).is_ok());
    }

    #[test]
    fn run_errors_on_unknown_subcommand() {
        let result = run(["axis", "unknown"]);
        assert!(result.is_err());
    }

    #[test]
    fn run_errors_on_unknown_task_id() {
        let dir = tempfile::tempdir().unwrap();
        let store = dir.path().to_str().unwrap();
        let err = run(["axis", "--store", store, "done", "missing"]).unwrap_err();
        assert_eq!(err, "Task not found: missing");
    }
}
