//! Generate command: print generated output to stdout.

use crate::cli::common::{resolve_state_path, CliError, CliResult};
use crate::codegen;
use crate::storage;
use clap::Args;
use std::path::PathBuf;

/// Print the generated CSS or HTML for the saved grid document
#[derive(Debug, Clone, Args)]
pub struct GenerateArgs {
    /// Path to a state file (defaults to the per-user slot)
    #[arg(long, value_name = "FILE")]
    pub state: Option<PathBuf>,

    /// Output artifact: css or html
    #[arg(long, value_name = "TYPE", default_value = "css")]
    pub format: String,
}

impl GenerateArgs {
    /// Execute the generate command
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

        match self.format.as_str() {
            "css" => print!("{}", generated.css),
            _ => print!("{}", generated.html),
        }

        Ok(())
    }
}
