//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Some fixtures reserved for future tests

use gridcraft::models::{GridConfig, ItemGeometry, RgbColor};
use gridcraft::storage::{self, SavedState};
use std::path::PathBuf;
use tempfile::TempDir;

/// Path to the gridcraft binary
pub fn gridcraft_bin() -> &'static str {
    env!("CARGO_BIN_EXE_gridcraft")
}

/// A saved state with a rearranged, partially colored document.
///
/// 5 columns, gap 16; tile "1" spans 2x1 and is painted blue, tile "2"
/// spans 1x2; the armed color is red.
pub fn test_state_colored() -> SavedState {
    let mut config = GridConfig::default();
    config.set_columns(5);
    config.set_gap(16);
    config.apply_layout(&[
        ItemGeometry::new("1", 0, 0, 2, 1),
        ItemGeometry::new("2", 2, 0, 1, 2),
    ]);
    config.set_item_color("1", RgbColor::new(0x3B, 0x82, 0xF6));

    SavedState {
        grid_config: config,
        selected_color: RgbColor::new(0xEF, 0x44, 0x44),
    }
}

/// Writes a state record to a temp storage slot.
///
/// Returns the slot path and the temp dir guard (keep it alive for the
/// duration of the test).
pub fn write_state_file(state: &SavedState) -> (PathBuf, TempDir) {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("state.json");
    storage::save(&path, state).expect("Failed to write fixture state");
    (path, temp)
}

/// A slot path inside a fresh temp dir with no state file behind it.
pub fn missing_state_file() -> (PathBuf, TempDir) {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("state.json");
    (path, temp)
}
