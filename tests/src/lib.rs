//! simmeta testing fixtures
//!
//! Components covering every registration shape, for use in integration tests
//! without a simulation around them.

use serde::Serialize;
use serde_json::json;
use simmeta_kernel::{Document, InstanceMetadata, ProvidesMetadata, TypeMetadata};
use std::sync::atomic::{AtomicUsize, Ordering};

#[doc(hidden)]
pub use simmeta_kernel;

/// Instance-bound component that counts how often it was described.
#[derive(Debug, Default, ProvidesMetadata)]
#[metadata(instance_level)]
pub struct CountingComponent {
    pub label: String,
    calls: AtomicUsize,
}

impl CountingComponent {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of instance-bound metadata calls so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl InstanceMetadata for CountingComponent {
    fn metadata(&self) -> Document {
        self.calls.fetch_add(1, Ordering::SeqCst);
        json!({ "label": self.label })
    }
}

/// Provides both operations; its instance operation must never run.
#[derive(Debug, Default, ProvidesMetadata)]
#[metadata(type_level, instance_level)]
pub struct DualComponent {
    calls: AtomicUsize,
}

impl DualComponent {
    pub fn instance_calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl TypeMetadata for DualComponent {
    fn metadata() -> Document {
        json!({ "source": "type" })
    }
}

impl InstanceMetadata for DualComponent {
    fn metadata(&self) -> Document {
        self.calls.fetch_add(1, Ordering::SeqCst);
        json!({ "source": "instance" })
    }
}

/// Registered without any metadata.
#[derive(Debug, Default, Clone, Copy, ProvidesMetadata)]
pub struct SilentComponent;

/// Type-bound profile describing itself as `{"x": 1}`.
#[derive(Debug, ProvidesMetadata)]
#[metadata(type_level)]
pub struct UnitProfile;

impl TypeMetadata for UnitProfile {
    fn metadata() -> Document {
        json!({ "x": 1 })
    }
}

/// Type-bound profile describing itself as `{"y": 2}`.
#[derive(Debug, ProvidesMetadata)]
#[metadata(type_level)]
pub struct ShiftedProfile;

impl TypeMetadata for ShiftedProfile {
    fn metadata() -> Document {
        json!({ "y": 2 })
    }
}

/// Laser pulse whose metadata is its serialized form.
#[derive(Debug, Clone, Serialize, ProvidesMetadata)]
#[serde(rename_all = "camelCase")]
#[metadata(serialize)]
pub struct LaserPulse {
    pub wave_length_si: f64,
    pub pulse_duration_si: f64,
    pub polarization: Polarization,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Polarization {
    Linear,
    Circular,
}

/// Generic component described by serialization.
#[derive(Debug, Clone, Serialize, ProvidesMetadata)]
#[metadata(serialize)]
pub struct Tabulated<T> {
    pub name: &'static str,
    pub samples: Vec<T>,
}

/// Asserts the strategy the compiler resolved for a type descriptor.
#[macro_export]
macro_rules! assert_strategy {
    ($descriptor:ty, $kind:expr) => {
        assert_eq!(
            $crate::simmeta_kernel::resolved_strategy::<$descriptor>(),
            $kind,
            "unexpected strategy for {}",
            stringify!($descriptor)
        )
    };
}
