//! Strategy resolution
//!
//! Every registered type descriptor resolves to exactly one strategy:
//!
//! | type-level | instance-level | strategy        |
//! |------------|----------------|-----------------|
//! | Provided   | any            | [`TypeBound`]   |
//! | Absent     | Provided       | [`InstanceBound`] |
//! | Absent     | Absent         | [`Missing`]     |
//!
//! The table lives in [`Capability`](crate::Capability) and is evaluated by the
//! compiler, so there is no dispatch at run time. The type-bound operation
//! always wins; a type has no way to prefer its instance-bound operation once
//! it declares a type-bound one.

use crate::adapter::{Adapter, DefaultAdapter, InstanceBoundAdapter, TypeBoundAdapter};
use crate::document::{Document, IntoDocument, MissingMetadata};
use crate::probe::{Capability, InstanceMetadata, ProvidesMetadata, TypeMetadata};
use serde::Serialize;
use std::fmt;

/// Runtime view of a resolved strategy, for logging and introspection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    TypeBound,
    InstanceBound,
    Missing,
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrategyKind::TypeBound => write!(f, "type-bound"),
            StrategyKind::InstanceBound => write!(f, "instance-bound"),
            StrategyKind::Missing => write!(f, "missing"),
        }
    }
}

/// Marker for the strategy types.
pub trait StrategyMarker {
    const KIND: StrategyKind;
}

/// Use the type-bound operation.
#[derive(Debug)]
pub enum TypeBound {}

/// Use the instance-bound operation on a borrowed instance.
#[derive(Debug)]
pub enum InstanceBound {}

/// No operation; produce [`MissingMetadata`].
#[derive(Debug)]
pub enum Missing {}

impl StrategyMarker for TypeBound {
    const KIND: StrategyKind = StrategyKind::TypeBound;
}

impl StrategyMarker for InstanceBound {
    const KIND: StrategyKind = StrategyKind::InstanceBound;
}

impl StrategyMarker for Missing {
    const KIND: StrategyKind = StrategyKind::Missing;
}

/// The strategy selected for `D`.
pub type StrategyOf<D> = <<D as ProvidesMetadata>::TypeLevel as Capability>::WhenTypeLevel<
    <D as ProvidesMetadata>::InstanceLevel,
>;

/// The strategy selected for `D`, as a value.
pub const fn resolved_strategy<D: ProvidesMetadata>() -> StrategyKind {
    <StrategyOf<D> as StrategyMarker>::KIND
}

/// Runs the adapter belonging to a strategy.
#[diagnostic::on_unimplemented(
    message = "`{D}` resolves to `{Self}` but does not implement the matching metadata trait",
    note = "a `Provided` capability flag requires the corresponding `TypeMetadata` or `InstanceMetadata` implementation"
)]
pub trait Strategy<D: ProvidesMetadata>: StrategyMarker {
    type Output;

    fn resolve(subject: &D::Subject) -> Self::Output;
}

/// Strategies that never touch an instance.
#[diagnostic::on_unimplemented(
    message = "`{D}` only provides instance-bound metadata",
    note = "describe it through a live instance with `describe(&value)`"
)]
pub trait Detached<D: ProvidesMetadata>: Strategy<D> {
    fn resolve_detached() -> Self::Output;
}

impl<D> Strategy<D> for TypeBound
where
    D: ProvidesMetadata + TypeMetadata,
{
    type Output = Document;

    fn resolve(_subject: &D::Subject) -> Document {
        TypeBoundAdapter::<D>::new().description()
    }
}

impl<D> Detached<D> for TypeBound
where
    D: ProvidesMetadata + TypeMetadata,
{
    fn resolve_detached() -> Document {
        TypeBoundAdapter::<D>::new().description()
    }
}

impl<D> Strategy<D> for InstanceBound
where
    D: ProvidesMetadata,
    D::Subject: InstanceMetadata,
{
    type Output = Document;

    fn resolve(subject: &D::Subject) -> Document {
        InstanceBoundAdapter::new(subject).description()
    }
}

impl<D: ProvidesMetadata> Strategy<D> for Missing {
    type Output = MissingMetadata<D>;

    fn resolve(_subject: &D::Subject) -> MissingMetadata<D> {
        DefaultAdapter::<D>::new().description()
    }
}

impl<D: ProvidesMetadata> Detached<D> for Missing {
    fn resolve_detached() -> MissingMetadata<D> {
        DefaultAdapter::<D>::new().description()
    }
}

fn trace_resolution<D: ProvidesMetadata>() {
    tracing::debug!(
        target: "simmeta::resolve",
        subject = std::any::type_name::<D>(),
        strategy = %resolved_strategy::<D>(),
        "resolved metadata strategy"
    );
}

/// Describes a component through a borrowed instance.
///
/// Implemented for every descriptor whose resolution yields a document; for a
/// bare descriptor without metadata the bound on [`IntoDocument`] fails and the
/// build stops.
pub trait Describe: ProvidesMetadata {
    fn describe(subject: &Self::Subject) -> Document;
}

impl<D> Describe for D
where
    D: ProvidesMetadata,
    StrategyOf<D>: Strategy<D>,
    <StrategyOf<D> as Strategy<D>>::Output: IntoDocument,
{
    fn describe(subject: &D::Subject) -> Document {
        trace_resolution::<D>();
        <StrategyOf<D> as Strategy<D>>::resolve(subject).into_document()
    }
}

/// Describes a component without an instance.
pub trait DescribeType: ProvidesMetadata {
    fn describe_type() -> Document;
}

impl<D> DescribeType for D
where
    D: ProvidesMetadata,
    StrategyOf<D>: Detached<D>,
    <StrategyOf<D> as Strategy<D>>::Output: IntoDocument,
{
    fn describe_type() -> Document {
        trace_resolution::<D>();
        <StrategyOf<D> as Detached<D>>::resolve_detached().into_document()
    }
}

/// Describes `subject`.
///
/// A type without metadata is rejected at build time:
///
/// ```compile_fail
/// use simmeta_kernel::{Absent, ProvidesMetadata, describe};
///
/// struct Silent;
///
/// impl ProvidesMetadata for Silent {
///     type TypeLevel = Absent;
///     type InstanceLevel = Absent;
///     type Subject = Self;
/// }
///
/// let _ = describe(&Silent);
/// ```
pub fn describe<T>(subject: &T) -> Document
where
    T: Describe<Subject = T>,
{
    T::describe(subject)
}

/// Describes `T` without an instance.
///
/// Only type-bound descriptors (and [`AllowMissing`](crate::AllowMissing)
/// wrappers) qualify; an instance-bound one needs [`describe`]:
///
/// ```compile_fail
/// use simmeta_kernel::{Absent, Document, InstanceMetadata, Provided, ProvidesMetadata, describe_type};
///
/// struct Sampled(f64);
///
/// impl ProvidesMetadata for Sampled {
///     type TypeLevel = Absent;
///     type InstanceLevel = Provided;
///     type Subject = Self;
/// }
///
/// impl InstanceMetadata for Sampled {
///     fn metadata(&self) -> Document {
///         self.0.into()
///     }
/// }
///
/// let _ = describe_type::<Sampled>();
/// ```
pub fn describe_type<T: DescribeType>() -> Document {
    T::describe_type()
}
