mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Pods { input, output, tsv, no_color } => {
            commands::pods::run(input.as_deref(), output.as_deref(), tsv, no_color)?;
        }
        Commands::Containers { input, output, tsv, no_color } => {
            commands::containers::run(input.as_deref(), output.as_deref(), tsv, no_color)?;
        }
        Commands::Report { input, output_dir, no_color } => {
            commands::report::run(input.as_deref(), &output_dir, no_color)?;
        }
    }

    Ok(())
}
