//! Export command: write both generated artifacts to disk.

use crate::cli::common::{resolve_state_path, CliError, CliResult};
use crate::codegen;
use crate::storage;
use clap::Args;
use std::fs;
use std::path::PathBuf;

/// Write grid-layout.css and grid-layout.html for the saved grid document
#[derive(Debug, Clone, Args)]
pub struct ExportArgs {
    /// Path to a state file (defaults to the per-user slot)
    #[arg(long, value_name = "FILE")]
    pub state: Option<PathBuf>,

    /// Output directory for the generated files
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub out_dir: PathBuf,
}

impl ExportArgs {
    /// Execute the export command
    pub fn execute(&self) -> CliResult<()> {
        let state_path = resolve_state_path(self.state.as_deref())?;
        let state = storage::load_or_default(&state_path);
        let generated = codegen::generate(&state.grid_config);

        fs::create_dir_all(&self.out_dir).map_err(|e| {
            CliError::io(format!(
                "Failed to create output directory {}: {e}",
                self.out_dir.display()
            ))
        })?;

        // The artifacts are written verbatim under their fixed names.
        for (filename, content) in [
            (generated.css_filename, &generated.css),
            (generated.html_filename, &generated.html),
        ] {
            let path = self.out_dir.join(filename);
            fs::write(&path, content)
                .map_err(|e| CliError::io(format!("Failed to write {}: {e}", path.display())))?;
            println!("✓ Wrote {}", path.display());
        }

        Ok(())
    }
}
