//! Report configuration
//!
//! Settings for run reports are read through the `config` crate, so any of
//! YAML, TOML, JSON, INI, RON or JSON5 works; the format follows the file
//! extension. Before parsing, `${VAR}` and `$VAR` references are replaced with
//! the value of the environment variable (unset variables are left as written).
//! Later sources override earlier ones, and `SIMMETA__RENDER__FORMAT`-style
//! environment variables override files.

use crate::render::RenderOptions;
use config::{Config as Cfg, ConfigBuilder, Environment, File, FileFormat, builder::DefaultState};
use regex::{Captures, Regex};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

pub use config::FileFormat as Format;

/// Prefix of environment overrides for [`ReportConfig`].
pub const ENV_PREFIX: &str = "SIMMETA";

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parsing error: {0}")]
    Parse(String),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Settings of a metadata report.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub render: RenderOptions,
}

impl ReportConfig {
    /// Loads `path` with `SIMMETA__...` environment overrides applied.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        load_with_env(path, ENV_PREFIX)
    }
}

// `${VAR}` in group 1, `$VAR` in group 2
static ENV_VAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}|\$([A-Za-z_][A-Za-z0-9_]*)\b").expect("valid regex")
});

/// Detects the configuration format from the file extension.
pub fn detect_format(path: impl AsRef<Path>) -> ConfigResult<FileFormat> {
    let ext = path
        .as_ref()
        .extension()
        .and_then(|e| e.to_str())
        .ok_or_else(|| ConfigError::UnsupportedFormat("No file extension found".to_string()))?;

    match ext.to_lowercase().as_str() {
        "yaml" | "yml" => Ok(FileFormat::Yaml),
        "toml" => Ok(FileFormat::Toml),
        "json" => Ok(FileFormat::Json),
        "ini" => Ok(FileFormat::Ini),
        "ron" => Ok(FileFormat::Ron),
        "json5" => Ok(FileFormat::Json5),
        _ => Err(ConfigError::UnsupportedFormat(ext.to_string())),
    }
}

/// Replaces `${VAR}` and `$VAR` with environment values.
pub fn substitute_env_vars(content: &str) -> String {
    // one pass, so substituted values are never expanded again
    ENV_VAR
        .replace_all(content, |caps: &Captures| {
            let name = caps.get(1).or_else(|| caps.get(2)).map_or("", |m| m.as_str());
            std::env::var(name).unwrap_or_else(|_| caps[0].to_string())
        })
        .into_owned()
}

fn read_source(path: &Path) -> ConfigResult<File<config::FileSourceString, FileFormat>> {
    let format = detect_format(path)?;
    let content = std::fs::read_to_string(path)?;
    Ok(File::from_str(&substitute_env_vars(&content), format))
}

fn finish<T: DeserializeOwned>(builder: ConfigBuilder<DefaultState>) -> ConfigResult<T> {
    builder
        .build()
        .map_err(|e| ConfigError::Parse(e.to_string()))?
        .try_deserialize()
        .map_err(|e| ConfigError::Serialization(e.to_string()))
}

/// Loads one configuration file.
pub fn load_config<T: DeserializeOwned>(path: impl AsRef<Path>) -> ConfigResult<T> {
    finish(Cfg::builder().add_source(read_source(path.as_ref())?))
}

/// Parses configuration text of a known format.
pub fn from_str<T: DeserializeOwned>(content: &str, format: FileFormat) -> ConfigResult<T> {
    finish(Cfg::builder().add_source(File::from_str(&substitute_env_vars(content), format)))
}

/// Layers several configuration texts, later ones overriding earlier ones.
pub fn merge_configs<T: DeserializeOwned>(sources: &[(&str, FileFormat)]) -> ConfigResult<T> {
    let builder = sources
        .iter()
        .fold(Cfg::builder(), |builder, (content, format)| {
            builder.add_source(File::from_str(&substitute_env_vars(content), *format))
        });
    finish(builder)
}

/// Layers several configuration files, later ones overriding earlier ones.
pub fn load_merged<T: DeserializeOwned>(paths: &[&Path]) -> ConfigResult<T> {
    let mut builder = Cfg::builder();
    for path in paths {
        builder = builder.add_source(read_source(path)?);
    }
    finish(builder)
}

/// Loads a file, then applies `<PREFIX>__SECTION__KEY` environment overrides.
pub fn load_with_env<T: DeserializeOwned>(path: impl AsRef<Path>, env_prefix: &str) -> ConfigResult<T> {
    finish(
        Cfg::builder()
            .add_source(read_source(path.as_ref())?)
            .add_source(
                Environment::with_prefix(env_prefix)
                    .prefix_separator("__")
                    .separator("__"),
            ),
    )
}
