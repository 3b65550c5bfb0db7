//! # Proxy Parameters
//!
//! Value types describing the proxy shapes. These are plain immutable
//! inputs: the proxy owns a mutable copy and hands values into the builder
//! afresh on every change, so no state can drift between the host and the
//! geometry layer.

use bore_mesh::GeometryError;
use config::constants::{
    DEFAULT_BORE_DIAMETER_MM, DEFAULT_BORE_LENGTH_MM, DEFAULT_MAJOR_AXIS_MM,
    DEFAULT_MINOR_AXIS_MM, EPSILON,
};
use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Cylindrical bore shape parameters.
///
/// `offset` is the gantry center's displacement from the imaging isocenter,
/// in RAS millimeters. Offset components are unconstrained; length and
/// diameter must be strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoreParameters {
    /// Bore tunnel length in millimeters
    pub length: f64,
    /// Bore inner diameter in millimeters
    pub diameter: f64,
    /// Gantry center offset from the isocenter (R, A, S) in millimeters
    pub offset: DVec3,
}

impl Default for BoreParameters {
    fn default() -> Self {
        Self {
            length: DEFAULT_BORE_LENGTH_MM,
            diameter: DEFAULT_BORE_DIAMETER_MM,
            offset: DVec3::ZERO,
        }
    }
}

impl BoreParameters {
    /// Checks the strict-positivity invariants.
    pub fn validate(&self) -> Result<(), GeometryError> {
        if self.length <= 0.0 {
            return Err(GeometryError::invalid_dimension("length", self.length));
        }
        if self.diameter <= 0.0 {
            return Err(GeometryError::invalid_dimension("diameter", self.diameter));
        }
        Ok(())
    }
}

/// Trajectory-aligned ellipsoid shape parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EllipsoidParameters {
    /// Semi-axis (mm) perpendicular to the trajectory
    pub minor_axis: f64,
    /// Semi-axis (mm) along the trajectory
    pub major_axis: f64,
    /// Center displacement (mm) from the tip along the tip→tail direction
    pub tip_offset: f64,
}

impl Default for EllipsoidParameters {
    fn default() -> Self {
        Self {
            minor_axis: DEFAULT_MINOR_AXIS_MM,
            major_axis: DEFAULT_MAJOR_AXIS_MM,
            tip_offset: 0.0,
        }
    }
}

impl EllipsoidParameters {
    /// Checks the strict-positivity invariants.
    pub fn validate(&self) -> Result<(), GeometryError> {
        if self.minor_axis <= 0.0 {
            return Err(GeometryError::invalid_dimension(
                "minor_axis",
                self.minor_axis,
            ));
        }
        if self.major_axis <= 0.0 {
            return Err(GeometryError::invalid_dimension(
                "major_axis",
                self.major_axis,
            ));
        }
        Ok(())
    }
}

/// Two distinct points defining the orientation axis of the proxy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryAxis {
    /// Trajectory entry point (RAS millimeters)
    pub tip: DVec3,
    /// Trajectory reference point behind the tip (RAS millimeters)
    pub tail: DVec3,
}

impl TrajectoryAxis {
    /// Creates an axis from tip and tail points.
    pub fn new(tip: DVec3, tail: DVec3) -> Self {
        Self { tip, tail }
    }

    /// Returns the normalized tip→tail direction.
    ///
    /// # Errors
    ///
    /// [`GeometryError::DegenerateAxis`] when the points coincide.
    pub fn direction(&self) -> Result<DVec3, GeometryError> {
        let span = self.tip - self.tail;
        if span.length() < EPSILON {
            return Err(GeometryError::DegenerateAxis);
        }
        Ok(span.normalize())
    }
}
