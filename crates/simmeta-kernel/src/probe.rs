//! Capability probing
//!
//! A component advertises what it can do by implementing [`ProvidesMetadata`]:
//! one capability flag for a type-bound metadata operation ([`TypeMetadata`])
//! and one for an instance-bound operation ([`InstanceMetadata`]). Each flag is
//! either [`Provided`] or [`Absent`]. The flags are types, so the probes below
//! are `const` and cost nothing at run time.
//!
//! Declaring `Provided` without implementing the matching metadata trait is a
//! build error at the first call site that resolves the type.

use crate::document::Document;
use crate::resolve::StrategyMarker;
use crate::resolve::{InstanceBound, Missing, TypeBound};

/// Metadata that can be produced without any instance of the type.
pub trait TypeMetadata {
    /// Describes the type.
    fn metadata() -> Document;
}

/// Metadata produced from a live instance.
pub trait InstanceMetadata {
    /// Describes this instance.
    fn metadata(&self) -> Document;
}

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::Provided {}
    impl Sealed for super::Absent {}
}

/// The capability is implemented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provided {}

/// The capability is not implemented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Absent {}

/// A capability flag, [`Provided`] or [`Absent`].
///
/// The two associated types form the resolution table: read as the type-level
/// flag, [`Capability::WhenTypeLevel`] picks the strategy given the
/// instance-level flag `I`; read as the instance-level flag,
/// [`Capability::WhenInstanceLevel`] picks the strategy when no type-level
/// operation exists.
pub trait Capability: sealed::Sealed {
    /// Whether the capability is present.
    const PRESENT: bool;

    /// Strategy when `Self` is the type-level flag and `I` the instance-level one.
    type WhenTypeLevel<I: Capability>: StrategyMarker;

    /// Strategy when `Self` is the instance-level flag and the type-level one is absent.
    type WhenInstanceLevel: StrategyMarker;
}

impl Capability for Provided {
    const PRESENT: bool = true;

    // type-bound wins regardless of the instance-level flag
    type WhenTypeLevel<I: Capability> = TypeBound;
    type WhenInstanceLevel = InstanceBound;
}

impl Capability for Absent {
    const PRESENT: bool = false;

    type WhenTypeLevel<I: Capability> = I::WhenInstanceLevel;
    type WhenInstanceLevel = Missing;
}

/// Registration of a type descriptor with the metadata subsystem.
///
/// # Example
///
/// ```rust
/// use simmeta_kernel::{Absent, Document, InstanceMetadata, Provided, ProvidesMetadata};
/// use serde_json::json;
///
/// struct Thermal {
///     temperature_kev: f64,
/// }
///
/// impl ProvidesMetadata for Thermal {
///     type TypeLevel = Absent;
///     type InstanceLevel = Provided;
///     type Subject = Self;
/// }
///
/// impl InstanceMetadata for Thermal {
///     fn metadata(&self) -> Document {
///         json!({ "temperatureKeV": self.temperature_kev })
///     }
/// }
///
/// let doc = simmeta_kernel::describe(&Thermal { temperature_kev: 1.5 });
/// assert_eq!(doc, json!({ "temperatureKeV": 1.5 }));
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not registered with the metadata subsystem",
    note = "implement `ProvidesMetadata` for `{Self}` or derive it with `#[derive(ProvidesMetadata)]`",
    note = "`AllowMissing<{Self}>` needs this registration too; a bare `#[derive(ProvidesMetadata)]` registers `{Self}` without metadata"
)]
pub trait ProvidesMetadata {
    /// Whether the type implements [`TypeMetadata`].
    type TypeLevel: Capability;
    /// Whether the type implements [`InstanceMetadata`].
    type InstanceLevel: Capability;
    /// The type an instance-bound description borrows. `Self` for plain
    /// components; wrappers forward the wrapped type.
    type Subject;
}

/// True iff a value of `T` has an instance-bound metadata operation.
pub const fn has_instance_metadata<T: ProvidesMetadata>() -> bool {
    <T::InstanceLevel as Capability>::PRESENT
}

/// True iff `T` itself has a type-bound metadata operation.
pub const fn has_type_metadata<T: ProvidesMetadata>() -> bool {
    <T::TypeLevel as Capability>::PRESENT
}
