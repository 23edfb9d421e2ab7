//! Shared CLI plumbing: error type, exit codes, and state path resolution.

use crate::storage;
use std::fmt;
use std::path::{Path, PathBuf};

/// Result type for CLI command execution.
pub type CliResult<T> = Result<T, CliError>;

/// Error categories a CLI command can fail with, each with a stable exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliErrorKind {
    /// Bad arguments or unusable input (exit code 2).
    Validation,
    /// File system or environment failure (exit code 1).
    Io,
}

/// A CLI-facing error.
#[derive(Debug, Clone)]
pub struct CliError {
    kind: CliErrorKind,
    message: String,
}

impl CliError {
    /// Creates a validation error.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: CliErrorKind::Validation,
            message: message.into(),
        }
    }

    /// Creates an I/O error.
    #[must_use]
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            kind: CliErrorKind::Io,
            message: message.into(),
        }
    }

    /// The process exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self.kind {
            CliErrorKind::Validation => 2,
            CliErrorKind::Io => 1,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Resolves the storage slot a command should operate on: the explicit
/// `--state` override if given, otherwise the per-user default slot.
pub fn resolve_state_path(state: Option<&Path>) -> CliResult<PathBuf> {
    match state {
        Some(path) => Ok(path.to_path_buf()),
        None => storage::default_state_path()
            .map_err(|e| CliError::io(format!("Failed to resolve state path: {e}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_are_stable() {
        assert_eq!(CliError::io("disk on fire").exit_code(), 1);
        assert_eq!(CliError::validation("bad flag").exit_code(), 2);
    }

    #[test]
    fn test_explicit_state_path_wins() {
        let path = PathBuf::from("/tmp/custom-state.json");
        let resolved = resolve_state_path(Some(&path)).unwrap();
        assert_eq!(resolved, path);
    }
}
