//! Reset command: restore the default grid document in the storage slot.

use crate::cli::common::{resolve_state_path, CliError, CliResult};
use crate::storage::{self, SavedState};
use clap::Args;
use std::path::PathBuf;

/// Restore the default grid document
#[derive(Debug, Clone, Args)]
pub struct ResetArgs {
    /// Path to a state file (defaults to the per-user slot)
    #[arg(long, value_name = "FILE")]
    pub state: Option<PathBuf>,
}

impl ResetArgs {
    /// Execute the reset command
    pub fn execute(&self) -> CliResult<()> {
        let state_path = resolve_state_path(self.state.as_deref())?;

        storage::save(&state_path, &SavedState::default())
            .map_err(|e| CliError::io(format!("Failed to reset state: {e}")))?;

        println!("✓ Restored the default grid document");
        Ok(())
    }
}
