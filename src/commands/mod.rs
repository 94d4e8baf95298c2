//! Command dispatch and handlers.

pub mod edit;
pub mod extract;
pub mod journal;
pub mod reset;
pub mod tasks;

use crate::cassette::session::RecordingSession;
use crate::cli::{Command, JournalCommand};
use crate::config::Config;
use crate::context::ServiceContext;

/// Dispatch a parsed command to its handler.
///
/// When `config.record_dir` is set (`AXIS_RECORD`), all port interactions
/// are recorded to a cassette in that directory.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch(command: &Command, config: &Config) -> Result<(), String> {
    let (ctx, session) = if let Some(dir) = &config.record_dir {
        let session = RecordingSession::new(dir)?;
        (ServiceContext::recording(config, &session), Some(session))
    } else {
        (ServiceContext::live(config), None)
    };

    let result = dispatch_with_context(command, &ctx, config);

    // Finish recording after command completes (even on error)
    if let Some(session) = session {
        // Drop context first to release Arc references
        drop(ctx);
        finish_recording(session)?;
    }

    result
}

/// Dispatch a command with the given service context.
fn dispatch_with_context(
    command: &Command,
    ctx: &ServiceContext,
    config: &Config,
) -> Result<(), String> {
    let root = config.store_root.as_path();
    match command {
        Command::Extract { text, file, policy } => {
            let input = extract::resolve_input(text.as_deref(), file.as_deref())?;
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .map_err(|e| format!("Failed to start async runtime: {e}"))?;
            runtime.block_on(extract::run_with_context(ctx, config, root, input, (*policy).into()))
        }
        Command::Tasks { all } => tasks::run_with_context(ctx, root, *all),
        Command::Done { id } => edit::set_completed(ctx, root, id, true),
        Command::Undo { id } => edit::set_completed(ctx, root, id, false),
        Command::Edit { id, text } => edit::edit_text(ctx, root, id, text),
        Command::Delete { id } => edit::delete(ctx, root, id),
        Command::Journal { action } => match action {
            JournalCommand::List => journal::list(ctx, root),
            JournalCommand::Delete { id } => journal::delete(ctx, root, id),
        },
        Command::Reset => reset::run_with_context(ctx, root),
    }
}

/// Finish a recording session and print the cassette path.
fn finish_recording(session: RecordingSession) -> Result<(), String> {
    let path = session.finish()?;
    eprintln!("Recording saved to: {}", path.display());
    Ok(())
}
