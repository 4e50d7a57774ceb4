use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Rodrigues vector: rotation axis scaled by tan(angle/2).
pub type RodriguesVector = Vector3<f64>;

/// Homochoric vector: volume-preserving 3-parameter rotation encoding used
/// as the binning space for ODF/MDF histograms.
pub type HomochoricVector = Vector3<f64>;

/// Bunge-convention Euler angles (phi1, Phi, phi2) in radians.
///
/// phi1 and phi2 live in [0, 2*pi); Phi in [0, pi].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Euler {
    pub phi1: f64,
    pub phi: f64,
    pub phi2: f64,
}

impl Euler {
    /// Create Euler angles from the three Bunge angles
    pub fn new(phi1: f64, phi: f64, phi2: f64) -> Self {
        Self { phi1, phi, phi2 }
    }

    /// The identity orientation
    pub fn identity() -> Self {
        Self {
            phi1: 0.0,
            phi: 0.0,
            phi2: 0.0,
        }
    }
}

/// Rotation expressed as a unit axis and an angle in radians.
///
/// Returned angles are folded into [0, pi]; a degenerate (zero or 2*pi)
/// rotation carries the default axis (0, 0, 1).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct AxisAngle {
    pub axis: Vector3<f64>,
    pub angle: f64,
}

impl AxisAngle {
    /// Create an axis/angle pair (the axis is expected to be unit length)
    pub fn new(axis: Vector3<f64>, angle: f64) -> Self {
        Self { axis, angle }
    }

    /// Zero rotation with the default axis
    pub fn identity() -> Self {
        Self {
            axis: Vector3::new(0.0, 0.0, 1.0),
            angle: 0.0,
        }
    }
}
