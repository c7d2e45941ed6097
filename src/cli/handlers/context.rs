//! Context search command handler (declared but not implemented).

use anyhow::Result;

use crate::cli::ContextArgs;

/// Context search is part of the command surface but has never been built.
///
/// Says so explicitly and exits cleanly: no index access, no filesystem
/// mutation, zero exit status.
pub fn handle_context(_args: &ContextArgs) -> Result<()> {
    println!("Context search is not implemented.");
    Ok(())
}
