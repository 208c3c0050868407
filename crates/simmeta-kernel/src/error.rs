//! Crate-level error types for `simmeta-kernel`.
//!
//! Resolution itself cannot fail once a crate compiles; the errors here come
//! from the surroundings of a report: documents loaded from files, aggregation
//! whose profile count is only known at run time, rendering and configuration.
//! [`MetadataError`] composes them, and [`MetadataResult`] carries an
//! [`error_stack::Report`] so callers can attach context while propagating.
//!
//! ```rust
//! use error_stack::ResultExt;
//! use simmeta_kernel::Document;
//! use simmeta_kernel::error::{IntoMetadataReport, MetadataError, MetadataResult};
//!
//! fn assemble(documents: Vec<Document>) -> MetadataResult<String> {
//!     let doc = simmeta_kernel::aggregate_documents(documents)
//!         .map_err(MetadataError::from)
//!         .into_report()
//!         .attach("assembling the incident field")?;
//!     Ok(doc.to_string())
//! }
//!
//! let report = assemble(vec![Document::Null]).unwrap_err();
//! assert!(format!("{report:?}").contains("assembling the incident field"));
//! ```

use crate::distribution::DistributionError;
use crate::incident_field::AggregationError;
use crate::render::RenderError;
use error_stack::Report;
use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum MetadataError {
    /// Profile documents do not match the boundary labels.
    #[error("Aggregation error: {0}")]
    Aggregation(#[from] AggregationError),

    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    #[error("Distribution error: {0}")]
    Distribution(#[from] DistributionError),

    /// A configuration-related error (requires the `config` feature).
    #[cfg(feature = "config")]
    #[error("Config error: {0}")]
    Config(#[from] crate::config::ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A JSON document could not be parsed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A YAML document could not be parsed.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("{0}")]
    Internal(String),
}

/// `Result<T, error_stack::Report<MetadataError>>`.
pub type MetadataResult<T> = Result<T, Report<MetadataError>>;

/// Extension trait to convert `Result<T, MetadataError>` into [`MetadataResult<T>`].
pub trait IntoMetadataReport<T> {
    /// Wrap the error in an `error_stack::Report`.
    fn into_report(self) -> MetadataResult<T>;
}

impl<T> IntoMetadataReport<T> for Result<T, MetadataError> {
    #[inline]
    fn into_report(self) -> MetadataResult<T> {
        self.map_err(Report::new)
    }
}
