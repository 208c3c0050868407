//! Documents stored in files
//!
//! Metadata written by earlier runs (or by hand) is read back as documents and
//! combined with the same rules as freshly described components. Files ending
//! in `.yaml` or `.yml` are YAML; everything else is JSON. Every failure names
//! the file it came from.

use crate::document::Document;
use crate::error::{IntoMetadataReport, MetadataError, MetadataResult};
use crate::incident_field::aggregate_documents;
use crate::merge::merge_patch;
use error_stack::ResultExt;
use std::path::Path;

fn is_yaml(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| matches!(ext.to_lowercase().as_str(), "yaml" | "yml"))
}

/// Reads one document.
pub fn read_document(path: impl AsRef<Path>) -> MetadataResult<Document> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .map_err(MetadataError::from)
        .into_report()
        .attach(format!("reading {}", path.display()))?;

    let yaml = is_yaml(path);
    tracing::debug!(target: "simmeta::report", path = %path.display(), yaml, "reading document");

    if yaml {
        serde_yaml::from_str(&content)
            .map_err(MetadataError::from)
            .into_report()
            .attach(format!("parsing {} as YAML", path.display()))
    } else {
        serde_json::from_str(&content)
            .map_err(MetadataError::from)
            .into_report()
            .attach(format!("parsing {} as JSON", path.display()))
    }
}

/// Reads every document, in order.
pub fn read_documents<P: AsRef<Path>>(paths: &[P]) -> MetadataResult<Vec<Document>> {
    paths.iter().map(read_document).collect()
}

/// Reads `target` and applies each patch file to it, left to right.
pub fn merge_files<P: AsRef<Path>>(target: impl AsRef<Path>, patches: &[P]) -> MetadataResult<Document> {
    let mut document = read_document(target)?;
    for patch in read_documents(patches)? {
        merge_patch(&mut document, &patch);
    }
    tracing::debug!(target: "simmeta::report", patches = patches.len(), "applied merge patches");
    Ok(document)
}

/// Assembles the incident field from one profile file per boundary, in the
/// order `XMin XMax YMin YMax ZMin ZMax`.
pub fn incident_field_from_files<P: AsRef<Path>>(profiles: &[P]) -> MetadataResult<Document> {
    let documents = read_documents(profiles)?;
    aggregate_documents(documents)
        .map_err(MetadataError::from)
        .into_report()
        .attach(format!("assembling the incident field from {} files", profiles.len()))
}
