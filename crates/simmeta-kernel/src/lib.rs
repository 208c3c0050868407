//! simmeta kernel
//!
//! Simulation components describe their configuration as metadata documents
//! for the provenance record of a run. A component registers through
//! [`ProvidesMetadata`] and offers a type-bound ([`TypeMetadata`]) or an
//! instance-bound ([`InstanceMetadata`]) operation, or neither. The strategy is
//! resolved by the compiler; a component without metadata fails the build
//! unless the call site wraps it in [`AllowMissing`].

// document module
pub mod document;
pub use document::{Document, IntoDocument, MissingMetadata, Object, empty_object, to_document};

// capability probing
pub mod probe;
pub use probe::{
    Absent, Capability, InstanceMetadata, Provided, ProvidesMetadata, TypeMetadata,
    has_instance_metadata, has_type_metadata,
};

// strategy resolution
pub mod resolve;
pub use resolve::{
    Describe, DescribeType, InstanceBound, Missing, StrategyKind, StrategyOf, TypeBound, describe,
    describe_type, resolved_strategy,
};

pub mod adapter;

pub mod allow_missing;
pub use allow_missing::{AllowMissing, describe_allow_missing};

pub mod merge;
pub use merge::{merge_patch, merged};

// incident field aggregation
pub mod incident_field;
pub use incident_field::{
    AggregationError, BOUNDARY_NAMES, INCIDENT_FIELD_KEY, IncidentFieldPolicy, ProfileSet,
    aggregate, aggregate_documents, aggregate_labeled, incident_field,
};

pub mod vector;
pub use vector::{Float3, Vector, to_sequence};

pub mod cache;
pub mod distribution;

pub mod render;
pub use render::{RenderError, RenderFormat, RenderOptions, render};

// documents stored in files
pub mod report;
pub use report::{incident_field_from_files, merge_files, read_document, read_documents};

#[cfg(feature = "config")]
pub mod config;

pub mod error;
pub use error::{MetadataError, MetadataResult};

#[cfg(feature = "derive")]
pub use simmeta_macros::ProvidesMetadata;

#[doc(hidden)]
pub mod __private {
    pub use serde;
}
