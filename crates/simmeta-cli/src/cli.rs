//! CLI command definitions using clap

use crate::output::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// simmeta - Inspect and assemble simulation metadata documents
#[derive(Parser)]
#[command(name = "simmeta")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Report configuration file (YAML, TOML, JSON, INI, RON, JSON5)
    #[arg(short = 'c', long, global = true, env = "SIMMETA_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format, overrides the configuration
    #[arg(short = 'f', long, global = true)]
    pub format: Option<OutputFormat>,

    /// Indent JSON output; `--pretty=false` overrides the configuration
    #[arg(
        short,
        long,
        global = true,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    pub pretty: Option<bool>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Re-render a JSON or YAML document
    Render {
        /// Document file
        input: PathBuf,
    },

    /// Apply merge patches to a document, left to right
    Merge {
        /// Document the patches are applied to
        target: PathBuf,

        /// Patch documents
        #[arg(required = true)]
        patches: Vec<PathBuf>,
    },

    /// Assemble the incident field from one profile document per boundary
    IncidentField {
        /// Profile documents in the order XMin XMax YMin YMax ZMin ZMax
        #[arg(required = true)]
        profiles: Vec<PathBuf>,
    },
}
