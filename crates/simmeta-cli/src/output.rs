//! Output formatting

use crate::cli::Cli;
use crate::error::CliError;
use simmeta_kernel::config::ReportConfig;
use simmeta_kernel::{Document, RenderFormat, RenderOptions, render};
use std::io::Write;

/// Output format for rendered documents
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON, compact unless `--pretty`
    Json,
    /// YAML
    Yaml,
}

impl From<OutputFormat> for RenderFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Json => RenderFormat::Json,
            OutputFormat::Yaml => RenderFormat::Yaml,
        }
    }
}

/// Configuration file first, then command-line flags.
pub fn resolve_options(cli: &Cli) -> Result<RenderOptions, CliError> {
    let mut options = match &cli.config {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading report configuration");
            ReportConfig::load(path)?.render
        }
        None => RenderOptions::default(),
    };

    if let Some(format) = cli.format {
        options.format = format.into();
    }
    if let Some(pretty) = cli.pretty {
        options.pretty = pretty;
    }
    Ok(options)
}

/// Renders `document` to stdout.
pub fn emit(document: &Document, options: &RenderOptions) -> Result<(), CliError> {
    let text = render(document, options)?;
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(text.as_bytes())?;
    if !text.ends_with('\n') {
        stdout.write_all(b"\n")?;
    }
    Ok(())
}
