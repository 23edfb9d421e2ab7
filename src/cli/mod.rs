//! CLI command handlers for GridCraft.
//!
//! This module provides headless, scriptable access to GridCraft's export
//! surface for automation, piping, and CI integration.

pub mod common;
pub mod copy;
pub mod export;
pub mod generate;
pub mod inspect;
pub mod reset;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult};
pub use copy::CopyArgs;
pub use export::ExportArgs;
pub use generate::GenerateArgs;
pub use inspect::InspectArgs;
pub use reset::ResetArgs;
