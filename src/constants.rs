//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and the fixed export filenames.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "GridCraft";

/// The binary name of the application (used in command examples, lowercase).
pub const APP_BINARY_NAME: &str = "gridcraft";

/// File name of the single per-user storage slot holding the editor state.
pub const STATE_FILE_NAME: &str = "grid-generator-state.json";

/// Suggested filename for the generated stylesheet. Fixed for this version,
/// not derived from the grid document.
pub const CSS_FILENAME: &str = "grid-layout.css";

/// Suggested filename for the generated markup. Fixed for this version.
pub const HTML_FILENAME: &str = "grid-layout.html";
