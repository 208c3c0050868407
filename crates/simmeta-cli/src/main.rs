//! simmeta CLI - render, merge and assemble component metadata documents

mod cli;
mod commands;
mod error;
mod output;

use clap::Parser;
use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout carries only the rendered document
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("debug")
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter("info")
            .with_writer(std::io::stderr)
            .init();
    }

    let options = output::resolve_options(&cli)?;

    match cli.command {
        Commands::Render { input } => {
            commands::render::run(&input, &options)?;
        }

        Commands::Merge { target, patches } => {
            commands::merge::run(&target, &patches, &options)?;
        }

        Commands::IncidentField { profiles } => {
            commands::incident_field::run(&profiles, &options)?;
        }
    }

    Ok(())
}
