//! Copy command: place generated output on the system clipboard.

use crate::cli::common::{resolve_state_path, CliError, CliResult};
use crate::clipboard;
use crate::codegen;
use crate::storage;
use clap::Args;
use std::path::PathBuf;

/// Copy the generated CSS or HTML to the system clipboard
#[derive(Debug, Clone, Args)]
pub struct CopyArgs {
    /// Path to a state file (defaults to the per-user slot)
    #[arg(long, value_name = "FILE")]
    pub state: Option<PathBuf>,

    /// Artifact to copy: css or html
    #[arg(long, value_name = "TYPE", default_value = "css")]
    pub format: String,
}

impl CopyArgs {
    /// Execute the copy command
    pub fn execute(&self) -> CliResult<()> {
        if !matches!(self.format.as_str(), "css" | "html") {
            return Err(CliError::validation(format!(
                "Invalid format '{}'. Must be 'css' or 'html'",
                self.format
            )));
        }

        let state_path = resolve_state_path(self.state.as_deref())?;
        let state = storage::load_or_default(&state_path);
        let generated = codegen::generate(&state.grid_config);

        let (label, text) = match self.format.as_str() {
            "css" => (generated.css_filename, &generated.css),
            _ => (generated.html_filename, &generated.html),
        };

        // A missing clipboard (headless session) is a diagnostic, not a
        // failed export; the command still completes.
        match clipboard::copy_text(text) {
            Ok(()) => println!("✓ Copied {label} to clipboard"),
            Err(e) => {
                tracing::warn!("{e:#}");
                println!("Clipboard unavailable; nothing copied");
            }
        }

        Ok(())
    }
}
