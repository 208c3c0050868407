//! Aggregation of per-boundary profiles
//!
//! An incident field is configured by six profiles, one per domain boundary.
//! Their metadata is collected into
//! `{"incidentField": {"XMin": .., "XMax": .., "YMin": .., "YMax": .., "ZMin": .., "ZMax": ..}}`.
//! Position `i` of the profile collection always maps to `BOUNDARY_NAMES[i]`.

use crate::document::{Document, Object, empty_object};
use crate::merge::merged;
use crate::probe::{Absent, Provided, ProvidesMetadata, TypeMetadata};
use crate::resolve::DescribeType;
use std::marker::PhantomData;
use thiserror::Error;

/// Boundary labels, in profile order.
pub const BOUNDARY_NAMES: [&str; 6] = ["XMin", "XMax", "YMin", "YMax", "ZMin", "ZMax"];

/// Top-level key of the composite document.
pub const INCIDENT_FIELD_KEY: &str = "incidentField";

/// Misconfigured aggregation input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum AggregationError {
    /// The number of profile documents differs from the number of boundaries.
    #[error("incident field needs exactly {expected} profiles (one per boundary), got {actual}")]
    ProfileCountMismatch { expected: usize, actual: usize },
}

/// Folds `documents` into one object, `labels[i]` holding `documents[i]`.
///
/// Each pair becomes a singleton object; the singletons are merged into `{}`
/// in order. With distinct labels the order does not matter; duplicated labels
/// follow the merge-patch rule, so the later document wins.
pub fn aggregate_labeled<const N: usize>(documents: [Document; N], labels: [&str; N]) -> Document {
    documents
        .into_iter()
        .zip(labels)
        .map(|(document, label)| {
            let mut singleton = Object::new();
            singleton.insert(label.to_string(), document);
            Document::Object(singleton)
        })
        .fold(empty_object(), |accumulated, singleton| {
            merged(accumulated, &singleton)
        })
}

/// Builds the composite incident field document from six profile documents.
pub fn incident_field(documents: [Document; 6]) -> Document {
    let gathered = aggregate_labeled(documents, BOUNDARY_NAMES);
    let mut result = Object::new();
    result.insert(INCIDENT_FIELD_KEY.to_string(), gathered);
    Document::Object(result)
}

/// Runtime entry point for collections whose length is only known at the call
/// boundary.
pub fn aggregate_documents(documents: Vec<Document>) -> Result<Document, AggregationError> {
    let actual = documents.len();
    let documents: [Document; 6] =
        documents
            .try_into()
            .map_err(|_| AggregationError::ProfileCountMismatch {
                expected: BOUNDARY_NAMES.len(),
                actual,
            })?;
    Ok(incident_field(documents))
}

/// An ordered collection of six profile descriptors.
///
/// Implemented for 6-tuples of descriptors that can be described without an
/// instance. Wrap an entry in [`AllowMissing`](crate::AllowMissing) to accept
/// a profile without metadata.
pub trait ProfileSet {
    /// One document per profile, in boundary order.
    fn gather() -> [Document; 6];
}

impl<A, B, C, D, E, F> ProfileSet for (A, B, C, D, E, F)
where
    A: DescribeType,
    B: DescribeType,
    C: DescribeType,
    D: DescribeType,
    E: DescribeType,
    F: DescribeType,
{
    fn gather() -> [Document; 6] {
        [
            A::describe_type(),
            B::describe_type(),
            C::describe_type(),
            D::describe_type(),
            E::describe_type(),
            F::describe_type(),
        ]
    }
}

/// Type descriptor of an incident field configured by the profiles `P`.
pub struct IncidentFieldPolicy<P>(PhantomData<fn() -> P>);

impl<P: ProfileSet> ProvidesMetadata for IncidentFieldPolicy<P> {
    type TypeLevel = Provided;
    type InstanceLevel = Absent;
    type Subject = Self;
}

impl<P: ProfileSet> TypeMetadata for IncidentFieldPolicy<P> {
    fn metadata() -> Document {
        tracing::debug!(
            target: "simmeta::incident_field",
            profiles = std::any::type_name::<P>(),
            "gathering incident field metadata"
        );
        incident_field(P::gather())
    }
}

/// Describes the incident field configured by the profile collection `P`.
///
/// ```rust
/// use simmeta_kernel::{Absent, AllowMissing, Document, Provided, ProvidesMetadata, TypeMetadata, aggregate};
/// use serde_json::json;
///
/// struct Free;
///
/// impl ProvidesMetadata for Free {
///     type TypeLevel = Absent;
///     type InstanceLevel = Absent;
///     type Subject = Self;
/// }
///
/// struct PlaneWave;
///
/// impl ProvidesMetadata for PlaneWave {
///     type TypeLevel = Provided;
///     type InstanceLevel = Absent;
///     type Subject = Self;
/// }
///
/// impl TypeMetadata for PlaneWave {
///     fn metadata() -> Document {
///         json!({ "profile": "planeWave" })
///     }
/// }
///
/// type Empty = AllowMissing<Free>;
/// let doc = aggregate::<(PlaneWave, Empty, Empty, Empty, Empty, Empty)>();
/// assert_eq!(doc["incidentField"]["XMin"], json!({ "profile": "planeWave" }));
/// assert_eq!(doc["incidentField"]["ZMax"], json!({}));
/// ```
pub fn aggregate<P: ProfileSet>() -> Document {
    <IncidentFieldPolicy<P> as TypeMetadata>::metadata()
}
