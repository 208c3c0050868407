//! The three description adapters
//!
//! Exactly one of these is chosen for every type descriptor by the resolver
//! (see [`crate::resolve`]). They can also be used directly when the strategy
//! is known up front.

use crate::document::{Document, MissingMetadata};
use crate::probe::{InstanceMetadata, TypeMetadata};
use std::marker::PhantomData;

/// Common interface of the adapters.
pub trait Adapter {
    /// [`Document`] for the two real adapters, [`MissingMetadata`] for the default one.
    type Output;

    /// Produces the description.
    fn description(&self) -> Self::Output;
}

/// Describes a type through its type-bound operation. Holds no instance.
pub struct TypeBoundAdapter<T>(PhantomData<fn() -> T>);

impl<T> TypeBoundAdapter<T> {
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Default for TypeBoundAdapter<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: TypeMetadata> Adapter for TypeBoundAdapter<T> {
    type Output = Document;

    fn description(&self) -> Document {
        <T as TypeMetadata>::metadata()
    }
}

/// Describes a live instance. Borrows it for at most the adapter's lifetime.
pub struct InstanceBoundAdapter<'a, T> {
    obj: &'a T,
}

impl<'a, T> InstanceBoundAdapter<'a, T> {
    pub fn new(obj: &'a T) -> Self {
        Self { obj }
    }
}

impl<T: InstanceMetadata> Adapter for InstanceBoundAdapter<'_, T> {
    type Output = Document;

    fn description(&self) -> Document {
        <T as InstanceMetadata>::metadata(self.obj)
    }
}

/// Fallback for types without any metadata operation.
pub struct DefaultAdapter<T>(PhantomData<fn() -> T>);

impl<T> DefaultAdapter<T> {
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Default for DefaultAdapter<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Adapter for DefaultAdapter<T> {
    type Output = MissingMetadata<T>;

    fn description(&self) -> MissingMetadata<T> {
        MissingMetadata::new()
    }
}
