use error_stack::Report;
use simmeta_kernel::config::ConfigError;
use simmeta_kernel::{MetadataError, RenderError};

#[derive(thiserror::Error, Debug)]
pub enum CliError {
    /// Loading or assembling documents failed; shows the full context chain.
    #[error("{0:?}")]
    Metadata(Report<MetadataError>),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<Report<MetadataError>> for CliError {
    fn from(report: Report<MetadataError>) -> Self {
        CliError::Metadata(report)
    }
}
