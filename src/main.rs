//! GridCraft - interactive CSS Grid layout editor core
//!
//! The binary exposes the export surface headlessly: printing, writing, and
//! copying the generated CSS/HTML for the saved grid document, plus state
//! inspection and reset.

use clap::{Parser, Subcommand};
use gridcraft::cli::{CopyArgs, ExportArgs, GenerateArgs, InspectArgs, ResetArgs};
use gridcraft::constants::APP_BINARY_NAME;
use tracing_subscriber::EnvFilter;

/// GridCraft - CSS Grid layout generator
#[derive(Parser, Debug)]
#[command(name = APP_BINARY_NAME, author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the generated CSS or HTML to stdout
    Generate(GenerateArgs),
    /// Write grid-layout.css and grid-layout.html to a directory
    Export(ExportArgs),
    /// Copy the generated CSS or HTML to the system clipboard
    Copy(CopyArgs),
    /// Show the saved grid document
    Inspect(InspectArgs),
    /// Restore the default grid document
    Reset(ResetArgs),
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate(args) => args.execute(),
        Commands::Export(args) => args.execute(),
        Commands::Copy(args) => args.execute(),
        Commands::Inspect(args) => args.execute(),
        Commands::Reset(args) => args.execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code());
    }
}
