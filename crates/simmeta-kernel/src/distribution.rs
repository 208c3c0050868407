//! Gaussian particle bunch
//!
//! A density distribution taking part in the run report through instance-bound
//! metadata. Velocities are SI (m/s); the centroid velocity is given as γ·v.

use crate::document::{Document, to_document};
use crate::probe::{Absent, InstanceMetadata, Provided, ProvidesMetadata};
use crate::vector::Float3;
use serde::Serialize;
use serde_json::json;
use std::f64::consts::PI;
use thiserror::Error;

/// Speed of light in vacuum, m/s.
pub const SPEED_OF_LIGHT_SI: f64 = 299_792_458.0;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum DistributionError {
    #[error("rms bunch size must not be zero")]
    ZeroBunchSize,
}

/// Directed drift of a particle population.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Drift {
    /// Unit vector of the drift direction.
    pub direction_normalized: Float3,
    /// Lorentz factor.
    pub gamma: f64,
}

impl Drift {
    /// Drift from a γ·v velocity. `None` for a zero velocity.
    pub fn from_gamma_velocity(gamma_velocity: Float3) -> Option<Self> {
        let magnitude = gamma_velocity.iter().map(|u| u * u).sum::<f64>().sqrt();
        if magnitude == 0.0 {
            return None;
        }

        Some(Self {
            direction_normalized: Float3::new([
                gamma_velocity[0] / magnitude,
                gamma_velocity[1] / magnitude,
                gamma_velocity[2] / magnitude,
            ]),
            gamma: (1.0 + (magnitude / SPEED_OF_LIGHT_SI).powi(2)).sqrt(),
        })
    }
}

/// Spherical Gaussian bunch.
#[derive(Debug, Clone, PartialEq)]
pub struct GaussianBunchDistribution {
    /// Number of physical particles in the bunch.
    pub n_physical_particles: f64,
    /// RMS size of the bunch, m.
    pub rms_bunch_size: f64,
    /// Centroid position, m.
    pub centroid_position: Float3,
    /// RMS velocity per axis, m/s.
    pub rms_velocity: Float3,
    /// Centroid velocity as γ·v, m/s.
    pub centroid_velocity: Float3,
}

impl GaussianBunchDistribution {
    pub fn new(n_physical_particles: f64, rms_bunch_size: f64, centroid_position: Float3) -> Self {
        Self {
            n_physical_particles,
            rms_bunch_size,
            centroid_position,
            rms_velocity: Float3::splat(0.0),
            centroid_velocity: Float3::splat(0.0),
        }
    }

    pub fn with_rms_velocity(mut self, rms_velocity: Float3) -> Self {
        self.rms_velocity = rms_velocity;
        self
    }

    pub fn with_centroid_velocity(mut self, centroid_velocity: Float3) -> Self {
        self.centroid_velocity = centroid_velocity;
        self
    }

    /// RMS velocity per axis. `(0, 0, 0)` means no temperature initialization.
    pub fn rms_velocity_si(&self) -> [f64; 3] {
        self.rms_velocity.0
    }

    /// Peak density `n / (2π σ²)^1.5`, in 1/m³.
    pub fn max_density_si(&self) -> Result<f64, DistributionError> {
        if self.rms_bunch_size == 0.0 {
            return Err(DistributionError::ZeroBunchSize);
        }
        Ok(self.n_physical_particles / (2.0 * PI * self.rms_bunch_size.powi(2)).powf(1.5))
    }

    /// Drift of the bunch, `None` when the centroid is at rest.
    pub fn drift(&self) -> Option<Drift> {
        Drift::from_gamma_velocity(self.centroid_velocity)
    }
}

impl ProvidesMetadata for GaussianBunchDistribution {
    type TypeLevel = Absent;
    type InstanceLevel = Provided;
    type Subject = Self;
}

impl InstanceMetadata for GaussianBunchDistribution {
    fn metadata(&self) -> Document {
        let max_density = match self.max_density_si() {
            Ok(density) => Document::from(density),
            Err(err) => {
                tracing::warn!(target: "simmeta::distribution", error = %err, "no peak density");
                Document::Null
            }
        };

        json!({
            "type": "gaussianBunch",
            "rmsBunchSizeSi": self.rms_bunch_size,
            "centroidPositionSi": Document::from(self.centroid_position),
            "maxDensitySi": max_density,
            "rmsVelocitySi": Document::from(self.rms_velocity),
            "drift": self.drift().map_or(Document::Null, |drift| to_document(&drift)),
        })
    }
}
