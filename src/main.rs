use clap::Parser;
use op_bindings::cli::Cli;
use op_bindings::{commands, logging, registry};

/// Main entry point for the artifact registry tool
fn main() -> eyre::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    // Initialize tracing
    logging::init_logging(cli.log_json)?;

    // Malformed embedded artifacts are a build defect: stop before serving any command.
    let registry = registry::init_global()?;

    commands::run(registry, &cli.command)
}
