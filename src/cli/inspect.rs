//! Inspect command: show the saved grid document.

use crate::cli::common::{resolve_state_path, CliError, CliResult};
use crate::models::palette;
use crate::storage;
use clap::Args;
use std::path::PathBuf;

/// Show the saved grid document and armed color
#[derive(Debug, Clone, Args)]
pub struct InspectArgs {
    /// Path to a state file (defaults to the per-user slot)
    #[arg(long, value_name = "FILE")]
    pub state: Option<PathBuf>,

    /// Output the raw state record as JSON
    #[arg(long)]
    pub json: bool,
}

impl InspectArgs {
    /// Execute the inspect command
    pub fn execute(&self) -> CliResult<()> {
        let state_path = resolve_state_path(self.state.as_deref())?;
        let state = storage::load_or_default(&state_path);

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&state)
                    .map_err(|e| CliError::io(format!("Failed to serialize state: {e}")))?
            );
            return Ok(());
        }

        let config = &state.grid_config;
        println!("Grid: {} columns, gap {}px, radius {}px", config.columns, config.gap, config.border_radius);
        println!("Selected color: {}", describe_color(state.selected_color));
        println!();

        if config.items.is_empty() {
            println!("No tiles placed.");
            return Ok(());
        }

        println!("{:<6} {:<10} {:<8} Color", "Id", "Position", "Span");
        for item in &config.items {
            println!(
                "{:<6} {:<10} {:<8} {}",
                item.id,
                format!("({}, {})", item.x, item.y),
                format!("{}×{}", item.w, item.h),
                describe_color(item.color),
            );
        }

        Ok(())
    }
}

/// Formats a color as hex, with the palette name when it is a known swatch.
fn describe_color(color: crate::models::RgbColor) -> String {
    match palette::swatch_name(color) {
        Some(name) => format!("{} ({name})", color.to_hex()),
        None => color.to_hex(),
    }
}
