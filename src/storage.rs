//! The single-slot persistence bridge for editor state.
//!
//! The whole editor state (grid document plus the armed color) lives in one
//! JSON record under the platform config directory. Writes are atomic
//! (temp file + rename) and fire-and-forget; a missing or malformed record
//! is never fatal, the editor just starts from the default document.

use crate::constants::{APP_NAME, STATE_FILE_NAME};
use crate::models::{GridConfig, RgbColor};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// The persisted record: the grid document and the session's armed color.
///
/// Field names match the original wire format of the storage slot.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedState {
    /// The grid document.
    pub grid_config: GridConfig,
    /// The color armed for the next paint action.
    pub selected_color: RgbColor,
}

/// Gets the platform-specific state directory path.
///
/// - Linux: `~/.config/GridCraft/`
/// - macOS: `~/Library/Application Support/GridCraft/`
/// - Windows: `%APPDATA%\GridCraft\`
pub fn state_dir() -> Result<PathBuf> {
    let dir = dirs::config_dir()
        .context("Failed to determine config directory")?
        .join(APP_NAME);

    Ok(dir)
}

/// Gets the full path to the default storage slot.
pub fn default_state_path() -> Result<PathBuf> {
    Ok(state_dir()?.join(STATE_FILE_NAME))
}

/// Loads editor state from the given slot.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not valid JSON, or holds
/// a document that fails the grid invariants. Callers that want silent
/// fallback behavior use [`load_or_default`].
pub fn load(path: &Path) -> Result<SavedState> {
    let content = fs::read_to_string(path)
        .context(format!("Failed to read state file: {}", path.display()))?;

    let state: SavedState = serde_json::from_str(&content)
        .context(format!("Failed to parse state file: {}", path.display()))?;

    state
        .grid_config
        .validate()
        .context(format!("Invalid grid document in {}", path.display()))?;

    Ok(state)
}

/// Loads editor state from the given slot, falling back to the default
/// document when the slot is missing or malformed.
///
/// Load failures are logged as diagnostics and never interrupt the session.
#[must_use]
pub fn load_or_default(path: &Path) -> SavedState {
    if !path.exists() {
        return SavedState::default();
    }

    match load(path) {
        Ok(state) => state,
        Err(e) => {
            tracing::warn!("Failed to load saved state: {e:#}");
            SavedState::default()
        }
    }
}

/// Saves editor state to the given slot using an atomic write.
///
/// Uses the temp file + rename pattern so the slot is never left in a
/// corrupted state.
pub fn save(path: &Path, state: &SavedState) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context(format!(
            "Failed to create state directory: {}",
            parent.display()
        ))?;
    }

    let content =
        serde_json::to_string_pretty(state).context("Failed to serialize editor state")?;

    let temp_path = path.with_extension("json.tmp");

    fs::write(&temp_path, content).context(format!(
        "Failed to write temp state file: {}",
        temp_path.display()
    ))?;

    fs::rename(&temp_path, path).context(format!(
        "Failed to rename temp state file to: {}",
        path.display()
    ))?;

    Ok(())
}
