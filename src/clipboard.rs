//! System clipboard access for the export surface.

use anyhow::{Context, Result};

/// Copies the given text to the system clipboard.
///
/// # Errors
///
/// Returns an error when no clipboard is available (headless environments,
/// denied permissions). Callers treat this as a logged diagnostic, not a
/// failure of the export itself.
pub fn copy_text(text: &str) -> Result<()> {
    arboard::Clipboard::new()
        .and_then(|mut clipboard| clipboard.set_text(text.to_string()))
        .context("Failed to copy to clipboard")
}
