//! `axis reset` command.

use std::path::Path;

use crate::context::ServiceContext;
use crate::store::TaskStore;

/// Execute the `reset` command: clear tasks, draft and journal history.
///
/// # Errors
///
/// Returns an error string if a store file cannot be removed.
pub fn run_with_context(ctx: &ServiceContext, store_root: &Path) -> Result<(), String> {
    TaskStore::new(ctx, store_root).clear().map_err(|e| e.to_string())?;
    println!("All data cleared.");
    Ok(())
}
