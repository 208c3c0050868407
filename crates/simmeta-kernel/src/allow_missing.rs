//! Explicit opt-out of mandatory metadata

use crate::document::{Document, IntoDocument, MissingMetadata, empty_object};
use crate::probe::{ProvidesMetadata, TypeMetadata};
use crate::resolve::Describe;
use std::marker::PhantomData;

/// Type descriptor wrapper that tolerates missing metadata.
///
/// Resolves exactly like `T`. Only the missing case differs: instead of failing
/// the build, it yields an empty object. It has to be spelled out at every call
/// site where omission is acceptable.
///
/// ```rust
/// use simmeta_kernel::{Absent, AllowMissing, ProvidesMetadata, describe_allow_missing, describe_type};
/// use serde_json::json;
///
/// struct Scratch;
///
/// impl ProvidesMetadata for Scratch {
///     type TypeLevel = Absent;
///     type InstanceLevel = Absent;
///     type Subject = Self;
/// }
///
/// assert_eq!(describe_type::<AllowMissing<Scratch>>(), json!({}));
/// assert_eq!(describe_allow_missing(&Scratch), json!({}));
/// ```
pub struct AllowMissing<T>(PhantomData<fn() -> T>);

impl<T: ProvidesMetadata> ProvidesMetadata for AllowMissing<T> {
    type TypeLevel = T::TypeLevel;
    type InstanceLevel = T::InstanceLevel;
    type Subject = T::Subject;
}

impl<T: TypeMetadata> TypeMetadata for AllowMissing<T> {
    fn metadata() -> Document {
        T::metadata()
    }
}

impl<T> IntoDocument for MissingMetadata<AllowMissing<T>> {
    fn into_document(self) -> Document {
        empty_object()
    }
}

/// Describes `subject`, falling back to `{}` when its type has no metadata.
pub fn describe_allow_missing<T>(subject: &T) -> Document
where
    AllowMissing<T>: Describe<Subject = T>,
{
    <AllowMissing<T> as Describe>::describe(subject)
}
