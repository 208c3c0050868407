//! Metadata documents and the conversion guard
//!
//! A [`Document`] is a plain JSON tree. Documents are produced fresh for every
//! query and handed to the caller; the subsystem never keeps them.
//!
//! [`IntoDocument`] is the single door through which a resolution result turns
//! into a document. It is implemented for [`Document`] itself and for the
//! sentinel of an [`AllowMissing`](crate::AllowMissing) descriptor, but never for
//! the bare [`MissingMetadata`] sentinel, which is what turns forgotten metadata
//! into a build error.

use serde::Serialize;
use std::fmt;
use std::marker::PhantomData;

/// A metadata document: object, array, string, number, boolean or null.
pub type Document = serde_json::Value;

/// String-keyed mapping used for object documents.
pub type Object = serde_json::Map<String, Document>;

/// Returns a fresh empty object document (`{}`).
pub fn empty_object() -> Document {
    Document::Object(Object::new())
}

/// Serializes any [`Serialize`] value into a document.
///
/// Serialization into a JSON tree only fails for maps with non-string keys.
/// Such a value is reported and described as `null` so that a run report is
/// never aborted by a single component.
pub fn to_document<S: Serialize + ?Sized>(value: &S) -> Document {
    match serde_json::to_value(value) {
        Ok(document) => document,
        Err(err) => {
            tracing::warn!(
                target: "simmeta::document",
                component = std::any::type_name::<S>(),
                error = %err,
                "component metadata is not representable as a document"
            );
            Document::Null
        }
    }
}

/// Sentinel returned by the default adapter for a type without metadata.
///
/// It is not a [`Document`]. The only way to consume it as one is
/// through [`AllowMissing`](crate::AllowMissing).
pub struct MissingMetadata<T>(PhantomData<fn() -> T>);

impl<T> MissingMetadata<T> {
    pub(crate) fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Clone for MissingMetadata<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for MissingMetadata<T> {}

impl<T> fmt::Debug for MissingMetadata<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MissingMetadata<{}>", std::any::type_name::<T>())
    }
}

/// Conversion of a resolution result into a document.
#[diagnostic::on_unimplemented(
    message = "missing metadata: `{Self}` cannot be described",
    label = "this type is supposed to provide metadata but has none",
    note = "there are three alternatives: implement `ProvidesMetadata` for the type by hand and choose its resolution, \
            add a `TypeMetadata` or `InstanceMetadata` implementation (or `#[derive(ProvidesMetadata)]` with a \
            `#[metadata(...)]` option) to the type, or use `AllowMissing<YourType>` at this call site"
)]
pub trait IntoDocument {
    /// Produces the document.
    fn into_document(self) -> Document;
}

impl IntoDocument for Document {
    fn into_document(self) -> Document {
        self
    }
}
