//! Text rendering of metadata documents

use crate::document::Document;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur while rendering a document.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RenderError {
    #[error("JSON rendering failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML rendering failed: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Unknown render format: {0}")]
    UnknownFormat(String),
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderFormat {
    #[default]
    Json,
    Yaml,
}

impl fmt::Display for RenderFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Yaml => write!(f, "yaml"),
        }
    }
}

impl FromStr for RenderFormat {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            other => Err(RenderError::UnknownFormat(other.to_string())),
        }
    }
}

/// How documents are turned into text.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    pub format: RenderFormat,
    /// Indented output. YAML is always indented.
    pub pretty: bool,
}

impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_format(mut self, format: RenderFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

/// Renders `document` as text.
pub fn render(document: &Document, options: &RenderOptions) -> Result<String, RenderError> {
    let text = match (options.format, options.pretty) {
        (RenderFormat::Json, false) => serde_json::to_string(document)?,
        (RenderFormat::Json, true) => serde_json::to_string_pretty(document)?,
        (RenderFormat::Yaml, _) => serde_yaml::to_string(document)?,
    };
    Ok(text)
}
